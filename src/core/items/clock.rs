// src/core/items/clock.rs
//
// The date/time field. Besides rendering the time it detects the
// "new second" edge that seeds the per-tick change flag and gates the CPU
// reader.

use super::super::config::ClockConfig;
use super::super::item::Tick;
use chrono::{DateTime, TimeZone, Timelike};
use std::fmt::Write;

pub struct ClockItem {
    format: String,
    prior_second: Option<u32>,
    text: String,
}

impl ClockItem {
    pub fn new(cfg: &ClockConfig) -> Self {
        ClockItem {
            format: cfg.format.clone(),
            prior_second: None,
            text: String::with_capacity(32),
        }
    }

    // The second has passed (or wrapped) whenever it differs from last tick.
    // The text is only reformatted on that edge.
    pub fn observe<Tz>(&mut self, now: &DateTime<Tz>) -> Tick
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let second = now.second();
        let second_passed = self.prior_second != Some(second);
        if second_passed {
            self.text.clear();
            // An invalid user format is a formatting error, not a panic
            if write!(self.text, "{}", now.format(&self.format)).is_err() {
                self.text.clear();
                self.text.push('?');
            }
            self.prior_second = Some(second);
        }
        Tick { second_passed }
    }

    pub fn render(&self, out: &mut String) {
        out.push_str("date: ");
        out.push_str(&self.text);
    }
}
