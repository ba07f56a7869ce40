// src/core/items/mem/stat_backend.rs

use crate::core::error::SensorError;
use crate::core::utils::scaled_percent;
use crate::core::utils::sysfs::SysfsFile;
use std::collections::HashMap;
use std::path::Path;

// A snapshot of memory and swap counters (in kB)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemInfo {
    pub total_kb: u64,
    pub available_kb: u64,
    pub swap_total_kb: u64,
    pub swap_free_kb: u64,
}

// Every `Key:   value kB` line of meminfo, keyed by label
fn parse_table(contents: &str) -> HashMap<&str, u64> {
    contents
        .lines()
        .filter_map(|line| {
            let (key, rest) = line.split_once(':')?;
            let value = rest.split_whitespace().next()?.parse().ok()?;
            Some((key.trim(), value))
        })
        .collect()
}

impl MemInfo {
    // Parse the full contents of `/proc/meminfo`
    pub fn from_meminfo(contents: &str, path: &Path) -> Result<Self, SensorError> {
        let table = parse_table(contents);
        let get = |key: &str| {
            table.get(key).copied().ok_or_else(|| SensorError::Parse {
                path: path.to_path_buf(),
                detail: format!("{key} not found"),
            })
        };

        let total_kb = get("MemTotal")?;

        // Prefer MemAvailable if present; otherwise estimate it (pre-3.14 kernels)
        let available_kb = match get("MemAvailable") {
            Ok(av) => av,
            Err(_) => get("MemFree")? + get("Buffers")? + get("Cached")?,
        };

        Ok(MemInfo {
            total_kb,
            available_kb,
            swap_total_kb: get("SwapTotal")?,
            swap_free_kb: get("SwapFree")?,
        })
    }

    pub fn mem_percent(&self) -> i64 {
        let used = self.total_kb.saturating_sub(self.available_kb);
        scaled_percent(used as f64, self.total_kb as f64)
    }

    // 0 when there is no swap at all
    pub fn swap_percent(&self) -> i64 {
        let used = self.swap_total_kb.saturating_sub(self.swap_free_kb);
        scaled_percent(used as f64, self.swap_total_kb as f64)
    }
}

// Keeps `/proc/meminfo` open across ticks
pub struct MemStatBackend {
    file: SysfsFile,
}

impl MemStatBackend {
    pub fn new(path: &Path) -> Result<Self, SensorError> {
        let mut backend = MemStatBackend {
            file: SysfsFile::open(path)?,
        };
        // Fail at startup rather than on the first tick if the keys are missing
        backend.read()?;
        Ok(backend)
    }

    pub fn read(&mut self) -> Result<MemInfo, SensorError> {
        let path = self.file.path().to_path_buf();
        let contents = self.file.read_current()?;
        MemInfo::from_meminfo(contents, &path)
    }
}
