// src/core/items/cpu/item.rs

use super::stat_backend::CpuStatBackend;
use crate::core::config::CpuConfig;
use crate::core::error::SensorError;
use crate::core::item::{Item, Tick};
use std::fmt::Write;

pub struct CpuItem {
    backend: CpuStatBackend,
    usage: Option<i64>,
}

impl CpuItem {
    pub fn new(cfg: &CpuConfig) -> Result<Self, SensorError> {
        Ok(CpuItem {
            backend: CpuStatBackend::new(&cfg.path)?,
            usage: None,
        })
    }

    pub fn usage(&self) -> Option<i64> {
        self.usage
    }
}

impl Item for CpuItem {
    fn name(&self) -> &str {
        "cpu"
    }

    // Kernel counters move about once a second, so sampling is gated on
    // the clock's new-second edge.
    fn poll(&mut self, tick: &Tick) -> Result<bool, SensorError> {
        if !tick.second_passed {
            return Ok(false);
        }
        let usage = self.backend.read()?;
        let changed = self.usage != Some(usage);
        self.usage = Some(usage);
        Ok(changed)
    }

    fn render(&self, out: &mut String) {
        let _ = write!(out, "cpu: {}%", self.usage.unwrap_or(0));
    }
}
