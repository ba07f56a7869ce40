// src/core/config.rs

use anyhow::{Context, Result};
use chrono::format::{Item, StrftimeItems};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::items::sound::MixerBackendKind;

use tracing::info;

use super::config_loader::config_paths;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct ModuleConfig {
    pub clock: ClockConfig,
    pub sound: SoundConfig,
    pub battery: BatteryConfig,
    pub cpu: CpuConfig,
    pub temp: TempConfig,
    pub mem: MemConfig,
    pub brightness: BrightnessConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ClockConfig {
    // strftime pattern, locale date + locale time by default
    pub format: String,
}

impl Default for ClockConfig {
    fn default() -> Self {
        ClockConfig {
            format: "%x %X".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SoundConfig {
    pub backend: MixerBackendKind,
    pub card: String,
    pub control: String,
    pub index: u32,
}

impl Default for SoundConfig {
    fn default() -> Self {
        SoundConfig {
            backend: MixerBackendKind::default(),
            card: "default".to_string(),
            control: "Master".to_string(),
            index: 0,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct BatteryConfig {
    // Power-supply directory holding charge_now/charge_full/status
    pub path: PathBuf,
}

impl Default for BatteryConfig {
    fn default() -> Self {
        BatteryConfig {
            path: PathBuf::from("/sys/class/power_supply/BAT0"),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CpuConfig {
    pub path: PathBuf,
}

impl Default for CpuConfig {
    fn default() -> Self {
        CpuConfig {
            path: PathBuf::from("/proc/stat"),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct TempConfig {
    // Directory containing thermal_zone* entries
    pub base: PathBuf,
    // Value of the zone's `type` file to match
    pub zone_type: String,
}

impl Default for TempConfig {
    fn default() -> Self {
        TempConfig {
            base: PathBuf::from("/sys/class/thermal"),
            zone_type: "x86_pkg_temp".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct MemConfig {
    pub path: PathBuf,
}

impl Default for MemConfig {
    fn default() -> Self {
        MemConfig {
            path: PathBuf::from("/proc/meminfo"),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct BrightnessConfig {
    // Backlight directory holding brightness/max_brightness
    pub path: PathBuf,
}

impl Default for BrightnessConfig {
    fn default() -> Self {
        BrightnessConfig {
            path: PathBuf::from("/sys/class/backlight/intel_backlight"),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    // Which items to show on the line, in order. The date always comes last.
    #[serde(default = "default_items")]
    pub items: Vec<String>,

    // Sampling rate of the main loop
    #[serde(default = "default_ticks_per_sec")]
    pub ticks_per_sec: u32,

    // Module-specific configs
    #[serde(default)]
    pub modules: ModuleConfig,
}

impl Config {
    // Loads the system default (if any) and overlays the user config, if present
    pub fn load() -> Result<Self> {
        let (system, user) = config_paths();
        info!(system = ?system, user = ?user, "Loading configuration paths");
        Self::load_from(&system, &user)
    }

    pub fn load_from(system: &Path, user: &Path) -> Result<Self> {
        // 1. System default is optional: built-in defaults stand in for it
        let mut merged = toml::Table::new();
        if system.exists() {
            info!(path = ?system, "Reading system default config");
            merged = read_table(system)?;
        } else {
            info!(path = ?system, "No system default config; using built-in defaults");
        }

        // 2. User config overrides key by key
        if user.exists() {
            info!(path = ?user, "Overlaying user configuration");
            merge_tables(&mut merged, read_table(user)?);
        } else {
            info!(path = ?user, "No user config found; using defaults");
        }

        let cfg: Config = toml::Value::Table(merged)
            .try_into()
            .context("Deserializing merged configuration")?;

        // 3. Validate config values
        cfg.validate()?;

        info!(?cfg, "Configuration loaded succesfully");
        Ok(cfg)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        let cfg: Config = toml::from_str(text).context("Parsing configuration")?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<()> {
        if self.ticks_per_sec == 0 {
            anyhow::bail!("ticks_per_sec must be at least 1");
        }
        if self.modules.clock.format.is_empty() {
            anyhow::bail!("modules.clock.format must not be empty");
        }
        let format = &self.modules.clock.format;
        if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
            anyhow::bail!("modules.clock.format {format:?} is not a valid strftime pattern");
        }
        Ok(())
    }

    // Length of one loop iteration
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.ticks_per_sec
    }
}

fn read_table(path: &Path) -> Result<toml::Table> {
    let text = fs::read_to_string(path).with_context(|| format!("Reading config at {path:?}"))?;
    toml::from_str(&text).with_context(|| format!("Parsing config at {path:?}"))
}

// Recursively overlay `top` onto `base`; tables merge, everything else replaces.
fn merge_tables(base: &mut toml::Table, top: toml::Table) {
    for (key, value) in top {
        match (base.get_mut(&key), value) {
            (Some(toml::Value::Table(inner)), toml::Value::Table(overlay)) => {
                merge_tables(inner, overlay)
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}

// 12 Hz keeps volume keys feeling responsive without busy-polling
fn default_ticks_per_sec() -> u32 {
    12
}

fn default_items() -> Vec<String> {
    ["sound", "power", "cpu", "temp", "mem", "brightness"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            items: default_items(),
            ticks_per_sec: default_ticks_per_sec(),
            modules: ModuleConfig::default(),
        }
    }
}
