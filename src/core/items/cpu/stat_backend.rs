// src/core/items/cpu/stat_backend.rs

use crate::core::error::SensorError;
use crate::core::utils::sysfs::SysfsFile;
use std::path::Path;

// small helper:
fn parse_next<'a, I>(it: &mut I, field: &'static str, path: &Path) -> Result<u64, SensorError>
where
    I: Iterator<Item = &'a str>,
{
    let raw = it.next().ok_or_else(|| SensorError::Parse {
        path: path.to_path_buf(),
        detail: format!("missing {field} field"),
    })?;
    raw.parse::<u64>().map_err(|e| SensorError::Parse {
        path: path.to_path_buf(),
        detail: format!("parsing {field} jiffies {raw:?}: {e}"),
    })
}

// Aggregate jiffies split into idle and active time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CpuSnapshot {
    // idle + iowait
    pub idle: u64,
    // user + nice + system + irq + softirq + steal + guest + guest_nice
    pub active: u64,
}

impl CpuSnapshot {
    // Parse the aggregate line starting with "cpu " from /proc/stat
    pub fn from_line(line: &str, path: &Path) -> Result<Self, SensorError> {
        let mut fields = line.split_ascii_whitespace();
        // 1st field must be “cpu”
        match fields.next() {
            Some("cpu") => {}
            _ => {
                return Err(SensorError::Parse {
                    path: path.to_path_buf(),
                    detail: format!("line did not start with \"cpu\": {line:?}"),
                });
            }
        }
        let user = parse_next(&mut fields, "user", path)?;
        let nice = parse_next(&mut fields, "nice", path)?;
        let system = parse_next(&mut fields, "system", path)?;
        let idle = parse_next(&mut fields, "idle", path)?;
        // Older kernels stop early; absent counters are zero.
        let mut extra = [0u64; 6];
        for (slot, name) in extra
            .iter_mut()
            .zip(["iowait", "irq", "softirq", "steal", "guest", "guest_nice"])
        {
            if fields.clone().next().is_none() {
                break;
            }
            *slot = parse_next(&mut fields, name, path)?;
        }
        let [iowait, irq, softirq, steal, guest, guest_nice] = extra;

        Ok(CpuSnapshot {
            idle: idle + iowait,
            active: user + nice + system + irq + softirq + steal + guest + guest_nice,
        })
    }
}

// Utilization over the interval between two snapshots, rounded to a percent
pub fn compute_usage(old: CpuSnapshot, new: CpuSnapshot) -> i64 {
    let active = new.active.saturating_sub(old.active);
    let idle = new.idle.saturating_sub(old.idle);
    let total = active + idle;

    if total == 0 {
        0
    } else {
        (active as f64 / total as f64 * 100.0).round() as i64
    }
}

// A backend holding /proc/stat open and the previous snapshot internally
pub struct CpuStatBackend {
    file: SysfsFile,
    prev: CpuSnapshot,
}

impl CpuStatBackend {
    pub fn new(path: &Path) -> Result<Self, SensorError> {
        let mut file = SysfsFile::open(path)?;
        let prev = Self::snapshot(&mut file)?;
        Ok(CpuStatBackend { file, prev })
    }

    fn snapshot(file: &mut SysfsFile) -> Result<CpuSnapshot, SensorError> {
        let path = file.path().to_path_buf();
        let content = file.read_current()?;
        let line = content.lines().next().unwrap_or_default();
        CpuSnapshot::from_line(line, &path)
    }

    // Usage since the previous call
    pub fn read(&mut self) -> Result<i64, SensorError> {
        let current = Self::snapshot(&mut self.file)?;
        let usage = compute_usage(self.prev, current);
        self.prev = current;
        Ok(usage)
    }
}
