// src/core/mod.rs

pub mod config;
pub mod config_loader;
pub mod error;
pub mod item;
pub mod item_manager;
pub mod items;
pub mod sampler;

pub mod utils;
