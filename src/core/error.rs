// src/core/error.rs

//! Errors raised while opening or polling a sensor.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SensorError {
    /// A sensor source could not be opened at startup.
    #[error("failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading or rewinding an already-open source failed.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source was readable but its content was not what we expected.
    #[error("failed to parse value from {}: {detail}", .path.display())]
    Parse { path: PathBuf, detail: String },

    /// A required sensor (thermal zone, mixer control) does not exist.
    #[error("{what} not found")]
    NotFound { what: String },

    /// The battery `status` file started with a character we have no label for.
    #[error("unrecognized battery status {status:?}")]
    UnrecognizedBatteryStatus { status: String },

    /// The audio mixer rejected a query.
    #[error("mixer error: {detail}")]
    Mixer { detail: String },
}

impl SensorError {
    // Fatal errors abort the process; the rest only cost us one tick.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            SensorError::Open { .. }
                | SensorError::NotFound { .. }
                | SensorError::UnrecognizedBatteryStatus { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::SensorError;
    use std::path::PathBuf;

    #[test]
    fn fatal_classification() {
        let status = SensorError::UnrecognizedBatteryStatus { status: "X".into() };
        assert!(status.is_fatal());

        let parse = SensorError::Parse {
            path: PathBuf::from("/proc/stat"),
            detail: "empty".into(),
        };
        assert!(!parse.is_fatal());

        let mixer = SensorError::Mixer { detail: "busy".into() };
        assert!(!mixer.is_fatal());
    }

    #[test]
    fn messages_name_the_source() {
        let err = SensorError::Parse {
            path: PathBuf::from("/sys/class/backlight/x/brightness"),
            detail: "expected integer".into(),
        };
        assert_eq!(
            err.to_string(),
            "failed to parse value from /sys/class/backlight/x/brightness: expected integer"
        );
    }
}
