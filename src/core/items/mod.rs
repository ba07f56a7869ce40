// src/core/items/mod.rs
//! The status-line fields, one module per sensor.

pub mod battery;
pub mod brightness;
pub mod clock;
pub mod cpu;
pub mod mem;
pub mod sound;
pub mod temp;
