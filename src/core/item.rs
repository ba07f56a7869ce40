// src/core/item.rs

use super::error::SensorError;

// What every item gets to know about the current tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tick {
    // The clock observed a different second than on the previous tick.
    pub second_passed: bool,
}

// Core trait for a status-line field.
//
// Each item must:
// 1. provide a unique `name()` for identification;
// 2. refresh itself in `poll()` and report whether its value changed;
// 3. append its current display text in `render()`.
//
// Items own their sensor handles and their previous values; nothing is
// shared between items.
pub trait Item {
    // A short, unique identifier for the item
    fn name(&self) -> &str;

    // Read the sensor and compare against the last tick.
    // Returns `Ok(true)` if any displayed value differs.
    fn poll(&mut self, tick: &Tick) -> Result<bool, SensorError>;

    // Append `label: value` (one or more fields) to `out`.
    fn render(&self, out: &mut String);
}
