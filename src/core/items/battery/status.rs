// src/core/items/battery/status.rs

use crate::core::error::SensorError;
use std::fmt;

// Charging state, decoded from the first character of sysfs `status`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatteryStatus {
    Unknown,
    Charging,
    Discharging,
    Charged,
}

impl BatteryStatus {
    // "Unknown", "Charging", "Discharging", "Not charging", "Full"
    pub fn from_sysfs(raw: &str) -> Result<Self, SensorError> {
        match raw.chars().next() {
            Some('U') => Ok(BatteryStatus::Unknown),
            Some('C') => Ok(BatteryStatus::Charging),
            Some('D') => Ok(BatteryStatus::Discharging),
            Some('N' | 'F') => Ok(BatteryStatus::Charged),
            _ => Err(SensorError::UnrecognizedBatteryStatus {
                status: raw.trim_end().to_string(),
            }),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BatteryStatus::Unknown => "unknown",
            BatteryStatus::Charging => "charging",
            BatteryStatus::Discharging => "discharging",
            BatteryStatus::Charged => "charged",
        }
    }
}

impl fmt::Display for BatteryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
