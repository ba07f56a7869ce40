// src/core/items/temp/thermal_zone_backend.rs

use crate::core::config::TempConfig;
use crate::core::error::SensorError;
use crate::core::utils::sysfs::SysfsFile;

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

// Reads one thermal zone, chosen by its `type` label
pub struct ThermalZoneBackend {
    zone: PathBuf,
    temp: SysfsFile,
}

impl ThermalZoneBackend {
    pub fn discover(cfg: &TempConfig) -> Result<Self, SensorError> {
        let zone = find_zone(&cfg.base, &cfg.zone_type)?;
        debug!(zone = ?zone, zone_type = %cfg.zone_type, "Using thermal zone");
        let temp = SysfsFile::open(zone.join("temp"))?;
        Ok(ThermalZoneBackend { zone, temp })
    }

    pub fn zone(&self) -> &Path {
        &self.zone
    }

    // Whole degrees Celsius, truncated
    pub fn read(&mut self) -> Result<i64, SensorError> {
        let milli: i64 = self.temp.read_value()?;
        Ok(milli / 1000)
    }
}

// First `thermal_zone*` (in name order) whose `type` matches.
fn find_zone(base: &Path, zone_type: &str) -> Result<PathBuf, SensorError> {
    let entries = fs::read_dir(base).map_err(|source| SensorError::Open {
        path: base.to_path_buf(),
        source,
    })?;
    let mut zones: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|dir| {
            dir.file_name()
                .and_then(|s| s.to_str())
                .is_some_and(|name| name.starts_with("thermal_zone"))
        })
        .collect();
    zones.sort();

    for dir in zones {
        // Zones without a readable type (cooling devices, races) are skipped
        let Ok(label) = fs::read_to_string(dir.join("type")) else {
            continue;
        };
        if label.trim_end() == zone_type {
            return Ok(dir);
        }
    }
    Err(SensorError::NotFound {
        what: format!("thermal zone of type {zone_type:?} under {}", base.display()),
    })
}
