// src/core/items/battery/mod.rs

//! Battery charge and charging-state field

pub mod item;
pub mod status;
pub mod sysfs_backend;

// Expose the `BatteryItem` and `BatteryStatus` types at the top level
pub use item::BatteryItem;
pub use status::BatteryStatus;
