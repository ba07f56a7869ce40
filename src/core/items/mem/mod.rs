// src/core/items/mem/mod.rs

pub mod item;
pub mod stat_backend;

pub use item::MemItem;
