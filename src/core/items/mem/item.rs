// src/core/items/mem/item.rs

use super::stat_backend::MemStatBackend;
use crate::core::config::MemConfig;
use crate::core::error::SensorError;
use crate::core::item::{Item, Tick};
use std::fmt::Write;

// Renders both the `ram:` and `swap:` fields from one meminfo read
pub struct MemItem {
    backend: MemStatBackend,
    percents: Option<(i64, i64)>,
}

impl MemItem {
    pub fn new(cfg: &MemConfig) -> Result<Self, SensorError> {
        Ok(MemItem {
            backend: MemStatBackend::new(&cfg.path)?,
            percents: None,
        })
    }
}

impl Item for MemItem {
    fn name(&self) -> &str {
        "mem"
    }

    fn poll(&mut self, _tick: &Tick) -> Result<bool, SensorError> {
        let info = self.backend.read()?;
        let now = (info.mem_percent(), info.swap_percent());
        let changed = self.percents != Some(now);
        self.percents = Some(now);
        Ok(changed)
    }

    fn render(&self, out: &mut String) {
        let (ram, swap) = self.percents.unwrap_or((0, 0));
        let _ = write!(out, "ram: {ram}% | swap: {swap}%");
    }
}
