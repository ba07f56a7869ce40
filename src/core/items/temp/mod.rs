// src/core/items/temp/mod.rs

pub mod item;
pub mod thermal_zone_backend;

pub use item::TempItem;
pub use thermal_zone_backend::ThermalZoneBackend;
