// src/core/utils/sysfs.rs
//
// Open-once handles for sysfs/procfs entries. The kernel regenerates the
// content on every read from offset 0, so a handle is kept for the whole
// process lifetime and rewound after each read instead of being reopened.

use crate::core::error::SensorError;
use std::fs::{self, File};
use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub struct SysfsFile {
    path: PathBuf,
    file: File,
    buf: String,
}

impl SysfsFile {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, SensorError> {
        let path = path.into();
        let file = File::open(&path).map_err(|source| SensorError::Open {
            path: path.clone(),
            source,
        })?;
        Ok(SysfsFile {
            path,
            file,
            buf: String::with_capacity(64),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    // Read the whole entry, then seek back to the start for the next tick.
    pub fn read_current(&mut self) -> Result<&str, SensorError> {
        self.buf.clear();
        let read = self.file.read_to_string(&mut self.buf);
        let rewind = self.file.seek(SeekFrom::Start(0));
        read.and(rewind).map_err(|source| SensorError::Read {
            path: self.path.clone(),
            source,
        })?;
        Ok(&self.buf)
    }

    // Read the entry and parse its trimmed content.
    pub fn read_value<T>(&mut self) -> Result<T, SensorError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        let path = self.path.clone();
        let raw = self.read_current()?;
        parse_trimmed(&path, raw)
    }
}

// One-shot read for values that never change (charge_full, max_brightness).
pub fn read_once<T>(path: &Path) -> Result<T, SensorError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = fs::read_to_string(path).map_err(|source| SensorError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    parse_trimmed(path, &raw)
}

fn parse_trimmed<T>(path: &Path, raw: &str) -> Result<T, SensorError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let trimmed = raw.trim();
    trimmed.parse::<T>().map_err(|e| SensorError::Parse {
        path: path.to_path_buf(),
        detail: format!("{trimmed:?}: {e}"),
    })
}
