// src/core/items/cpu/mod.rs

pub mod item;
pub mod stat_backend;

pub use item::CpuItem;
