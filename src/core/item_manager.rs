// src/core/item_manager.rs

use super::config::Config;
use super::error::SensorError;
use super::item::{Item, Tick};
use super::items::battery::BatteryItem;
use super::items::brightness::BrightnessItem;
use super::items::cpu::CpuItem;
use super::items::mem::MemItem;
use super::items::sound::SoundItem;
use super::items::temp::TempItem;
use anyhow::{Context, Result};
use tracing::{debug, warn};

// Outcome of polling every item once
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PollSummary {
    // At least one item reported a different value
    pub changed: bool,
    // At least one item hit a transient read failure
    pub failed: bool,
}

// Manages the ordered set of fields on the status line
pub struct ItemManager {
    items: Vec<Box<dyn Item>>,
}

impl ItemManager {
    // Opens every enabled item in the order specified by the config.
    // Any item that cannot be set up aborts startup.
    pub fn load(config: &Config) -> Result<Self> {
        let mut items: Vec<Box<dyn Item>> = Vec::new();
        let modules = &config.modules;

        for name in &config.items {
            let item: Box<dyn Item> = match name.as_str() {
                "sound" => Box::new(SoundItem::new(&modules.sound).context("Setting up sound")?),
                "power" | "battery" => {
                    Box::new(BatteryItem::new(&modules.battery).context("Setting up battery")?)
                }
                "cpu" => Box::new(CpuItem::new(&modules.cpu).context("Setting up cpu")?),
                "temp" => Box::new(TempItem::new(&modules.temp).context("Setting up temperature")?),
                "mem" => Box::new(MemItem::new(&modules.mem).context("Setting up memory")?),
                "brightness" => Box::new(
                    BrightnessItem::new(&modules.brightness).context("Setting up brightness")?,
                ),
                other => {
                    warn!(item = %other, "Unknown item in config, skipping");
                    continue;
                }
            };
            debug!(item = item.name(), "Item ready");
            items.push(item);
        }

        Ok(ItemManager { items })
    }

    pub fn from_items(items: Vec<Box<dyn Item>>) -> Self {
        ItemManager { items }
    }

    pub fn items(&self) -> &[Box<dyn Item>] {
        &self.items
    }

    // Polls every item, even after one fails, so each keeps its own
    // previous value current. Only fatal errors stop the tick.
    pub fn poll_all(&mut self, tick: &Tick) -> Result<PollSummary, SensorError> {
        let mut summary = PollSummary::default();
        for item in &mut self.items {
            match item.poll(tick) {
                Ok(changed) => summary.changed |= changed,
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => {
                    warn!(item = item.name(), error = %e, "Sensor read failed, skipping output");
                    summary.failed = true;
                }
            }
        }
        Ok(summary)
    }

    // Every field, separated by " | "
    pub fn render(&self, out: &mut String) {
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                out.push_str(" | ");
            }
            item.render(out);
        }
    }
}
