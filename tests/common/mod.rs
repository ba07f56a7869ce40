// tests/common/mod.rs
//
// A fake sysfs/procfs tree in a temp dir, plus a config pointing at it.

#![allow(dead_code)]

use statusbar_rs::core::config::Config;
use statusbar_rs::core::error::SensorError;
use statusbar_rs::core::items::sound::{MixerBackend, Playback};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const MEMINFO: &str = "\
MemTotal:           1000 kB
MemFree:             100 kB
MemAvailable:        750 kB
Buffers:              10 kB
Cached:              200 kB
SwapTotal:             0 kB
SwapFree:              0 kB
";

pub struct Fixture {
    pub dir: TempDir,
    pub config: Config,
}

impl Fixture {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.items = ["power", "cpu", "temp", "mem", "brightness"]
            .into_iter()
            .map(String::from)
            .collect();
        config.modules.clock.format = "%H:%M:%S".to_string();
        config.modules.battery.path = dir.path().join("BAT0");
        config.modules.brightness.path = dir.path().join("backlight");
        config.modules.cpu.path = dir.path().join("stat");
        config.modules.mem.path = dir.path().join("meminfo");
        config.modules.temp.base = dir.path().join("thermal");

        let fx = Fixture { dir, config };
        fx.write("BAT0/charge_full", "100\n");
        fx.write("BAT0/charge_now", "50\n");
        fx.write("BAT0/status", "Discharging\n");
        fx.write("backlight/max_brightness", "255\n");
        fx.write("backlight/brightness", "128\n");
        fx.write("stat", "cpu  10 0 10 80 0 0 0 0 0 0\ncpu0 10 0 10 80 0 0 0 0 0 0\n");
        fx.write("meminfo", MEMINFO);
        fx.write("thermal/thermal_zone0/type", "acpitz\n");
        fx.write("thermal/thermal_zone0/temp", "27800\n");
        fx.write("thermal/thermal_zone1/type", "x86_pkg_temp\n");
        fx.write("thermal/thermal_zone1/temp", "48500\n");
        fx
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    // Rewrites in place, so already-open handles see the new content
    pub fn write(&self, rel: &str, content: &str) {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }
}

// Mixer with a fixed range and scripted state
pub struct FakeMixer {
    pub range: (i64, i64),
    pub playback: Playback,
}

impl MixerBackend for FakeMixer {
    fn volume_range(&self) -> (i64, i64) {
        self.range
    }

    fn handle_events(&mut self) -> Result<u32, SensorError> {
        Ok(0)
    }

    fn playback(&mut self) -> Result<Playback, SensorError> {
        Ok(self.playback)
    }
}
