// src/core/items/brightness.rs
//
// Backlight level as a percentage of `max_brightness`.

use super::super::config::BrightnessConfig;
use super::super::error::SensorError;
use super::super::item::{Item, Tick};
use super::super::utils::scaled_percent;
use super::super::utils::sysfs::{SysfsFile, read_once};
use std::fmt::Write;

pub struct BrightnessItem {
    brightness: SysfsFile,
    max_brightness: i64,
    percent: Option<i64>,
}

impl BrightnessItem {
    pub fn new(cfg: &BrightnessConfig) -> Result<Self, SensorError> {
        let max_path = cfg.path.join("max_brightness");
        let max_brightness: i64 = read_once(&max_path)?;
        if max_brightness <= 0 {
            return Err(SensorError::Parse {
                path: max_path,
                detail: format!("max brightness must be positive, got {max_brightness}"),
            });
        }
        Ok(BrightnessItem {
            brightness: SysfsFile::open(cfg.path.join("brightness"))?,
            max_brightness,
            percent: None,
        })
    }
}

impl Item for BrightnessItem {
    fn name(&self) -> &str {
        "brightness"
    }

    fn poll(&mut self, _tick: &Tick) -> Result<bool, SensorError> {
        let raw: i64 = self.brightness.read_value()?;
        // Scaled before rounding, unlike the battery
        let percent = scaled_percent(raw as f64, self.max_brightness as f64);
        let changed = self.percent != Some(percent);
        self.percent = Some(percent);
        Ok(changed)
    }

    fn render(&self, out: &mut String) {
        let _ = write!(out, "brightness: {}%", self.percent.unwrap_or(0));
    }
}
