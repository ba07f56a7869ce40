// src/core/items/temp/item.rs

use super::thermal_zone_backend::ThermalZoneBackend;
use crate::core::config::TempConfig;
use crate::core::error::SensorError;
use crate::core::item::{Item, Tick};
use std::fmt::Write;

pub struct TempItem {
    backend: ThermalZoneBackend,
    celsius: Option<i64>,
}

impl TempItem {
    pub fn new(cfg: &TempConfig) -> Result<Self, SensorError> {
        Ok(TempItem {
            backend: ThermalZoneBackend::discover(cfg)?,
            celsius: None,
        })
    }
}

impl Item for TempItem {
    fn name(&self) -> &str {
        "temp"
    }

    fn poll(&mut self, _tick: &Tick) -> Result<bool, SensorError> {
        let celsius = self.backend.read()?;
        let changed = self.celsius != Some(celsius);
        self.celsius = Some(celsius);
        Ok(changed)
    }

    fn render(&self, out: &mut String) {
        let _ = write!(out, "temp: {}C", self.celsius.unwrap_or(0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn zone_with(td: &TempDir, millidegrees: i64) -> TempItem {
        let dir = td.path().join("thermal_zone0");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("type"), "x86_pkg_temp\n").unwrap();
        fs::write(dir.join("temp"), format!("{millidegrees}\n")).unwrap();
        TempItem::new(&TempConfig {
            base: td.path().to_path_buf(),
            zone_type: "x86_pkg_temp".to_string(),
        })
        .unwrap()
    }

    #[test]
    fn only_a_new_reading_counts_as_change() {
        let td = TempDir::new().unwrap();
        let mut item = zone_with(&td, 48000);
        let tick = Tick { second_passed: false };

        assert!(item.poll(&tick).unwrap());
        assert!(!item.poll(&tick).unwrap());

        fs::write(td.path().join("thermal_zone0/temp"), "51000\n").unwrap();
        assert!(item.poll(&tick).unwrap());
        let mut out = String::new();
        item.render(&mut out);
        assert_eq!(out, "temp: 51C");
    }

    #[test]
    fn sub_degree_drift_is_not_a_change() {
        let td = TempDir::new().unwrap();
        let mut item = zone_with(&td, 48100);
        let tick = Tick { second_passed: true };

        assert!(item.poll(&tick).unwrap());
        fs::write(td.path().join("thermal_zone0/temp"), "48900\n").unwrap();
        assert!(!item.poll(&tick).unwrap());
    }
}
