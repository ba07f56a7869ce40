// src/core/items/battery/sysfs_backend.rs

use super::status::BatteryStatus;
use crate::core::error::SensorError;
use crate::core::utils::sysfs::{SysfsFile, read_once};
use std::path::Path;

// Percentage of full charge: the ratio is rounded first, then scaled.
pub fn charge_percent(raw: i64, max: i64) -> i64 {
    (raw as f64 / max as f64).round() as i64 * 100
}

// Reads battery info from a Linux power-supply directory
pub struct SysfsBackend {
    charge_now: SysfsFile,
    status: SysfsFile,
    charge_full: i64,
}

impl SysfsBackend {
    // Opens `charge_now`/`status` and reads `charge_full` once.
    // Batteries reporting energy (µWh) instead of charge (µAh) expose
    // `energy_now`/`energy_full`; those are used when `charge_full` is absent.
    pub fn open(dir: &Path) -> Result<Self, SensorError> {
        let (now_name, full_name) = if dir.join("charge_full").exists() {
            ("charge_now", "charge_full")
        } else if dir.join("energy_full").exists() {
            ("energy_now", "energy_full")
        } else {
            ("charge_now", "charge_full")
        };

        let full_path = dir.join(full_name);
        let charge_full: i64 = read_once(&full_path)?;
        if charge_full <= 0 {
            return Err(SensorError::Parse {
                path: full_path,
                detail: format!("full charge must be positive, got {charge_full}"),
            });
        }

        Ok(SysfsBackend {
            charge_now: SysfsFile::open(dir.join(now_name))?,
            status: SysfsFile::open(dir.join("status"))?,
            charge_full,
        })
    }

    pub fn read(&mut self) -> Result<(i64, BatteryStatus), SensorError> {
        let raw: i64 = self.charge_now.read_value()?;
        let percent = charge_percent(raw, self.charge_full);
        let status = BatteryStatus::from_sysfs(self.status.read_current()?)?;
        Ok((percent, status))
    }
}
