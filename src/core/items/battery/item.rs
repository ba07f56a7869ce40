// src/core/items/battery/item.rs

use super::status::BatteryStatus;
use super::sysfs_backend::SysfsBackend;
use crate::core::config::BatteryConfig;
use crate::core::error::SensorError;
use crate::core::item::{Item, Tick};
use std::fmt::Write;

pub struct BatteryItem {
    backend: SysfsBackend,
    reading: Option<(i64, BatteryStatus)>,
}

impl BatteryItem {
    pub fn new(cfg: &BatteryConfig) -> Result<Self, SensorError> {
        Ok(BatteryItem {
            backend: SysfsBackend::open(&cfg.path)?,
            reading: None,
        })
    }
}

impl Item for BatteryItem {
    fn name(&self) -> &str {
        "power"
    }

    fn poll(&mut self, _tick: &Tick) -> Result<bool, SensorError> {
        let reading = self.backend.read()?;
        let changed = self.reading != Some(reading);
        self.reading = Some(reading);
        Ok(changed)
    }

    fn render(&self, out: &mut String) {
        match self.reading {
            Some((percent, status)) => {
                let _ = write!(out, "power: {percent}% {status}");
            }
            None => out.push_str("power: ?"),
        }
    }
}
