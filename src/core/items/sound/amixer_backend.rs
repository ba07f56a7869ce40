// src/core/items/sound/amixer_backend.rs
//
// Fallback that shells out to `amixer sget`, for builds without the `alsa`
// feature. There is no event stream to drain, so changes are only seen
// through the polled values. Every run is bounded by `SGET_TIMEOUT`.

use super::mixer_backend::{MixerBackend, Playback};
use crate::core::config::SoundConfig;
use crate::core::error::SensorError;
use std::process::{Child, Command, Output, Stdio};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

const SGET_TIMEOUT: Duration = Duration::from_millis(500);
const WAIT_STEP: Duration = Duration::from_millis(5);

pub struct AmixerBackend {
    card: String,
    control: String,
    range: (i64, i64),
}

impl AmixerBackend {
    pub fn open(cfg: &SoundConfig) -> Result<Self, SensorError> {
        let mut backend = AmixerBackend {
            card: cfg.card.clone(),
            control: format!("{},{}", cfg.control, cfg.index),
            range: (0, 0),
        };
        let output = backend.sget().map_err(|detail| SensorError::NotFound {
            what: format!("mixer control {:?} on {:?} ({detail})", backend.control, cfg.card),
        })?;
        backend.range = parse_limits(&output).ok_or_else(|| SensorError::NotFound {
            what: format!("playback volume on control {:?}", backend.control),
        })?;
        debug!(card = %backend.card, control = %backend.control, range = ?backend.range, "Using amixer");
        Ok(backend)
    }

    fn sget(&self) -> Result<String, String> {
        let child = Command::new("amixer")
            .args(["-D", self.card.as_str(), "sget", self.control.as_str()])
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| format!("running amixer: {e}"))?;
        let output = wait_bounded(child, SGET_TIMEOUT)?;
        if !output.status.success() {
            return Err(String::from_utf8_lossy(&output.stderr).trim().to_string());
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

// Wait for `child` to exit, killing it once `timeout` has passed.
// Output is small enough to sit in the pipe buffers until exit.
pub fn wait_bounded(mut child: Child, timeout: Duration) -> Result<Output, String> {
    let deadline = Instant::now() + timeout;
    loop {
        match child.try_wait() {
            Ok(Some(_)) => break,
            Ok(None) if Instant::now() < deadline => thread::sleep(WAIT_STEP),
            Ok(None) => {
                warn!(pid = child.id(), ?timeout, "Killing stalled amixer");
                let _ = child.kill();
                let _ = child.wait();
                return Err(format!("amixer did not exit within {timeout:?}"));
            }
            Err(e) => {
                let _ = child.kill();
                return Err(format!("waiting for amixer: {e}"));
            }
        }
    }
    child
        .wait_with_output()
        .map_err(|e| format!("collecting amixer output: {e}"))
}

// "  Limits: Playback 0 - 65536"
pub fn parse_limits(output: &str) -> Option<(i64, i64)> {
    let line = output
        .lines()
        .map(str::trim)
        .find(|l| l.starts_with("Limits:"))?;
    let mut numbers = line
        .split_whitespace()
        .filter_map(|tok| tok.parse::<i64>().ok());
    Some((numbers.next()?, numbers.next()?))
}

// First channel line, e.g. "  Front Left: Playback 39321 [60%] [on]".
// Controls without a playback switch are never muted.
pub fn parse_playback(output: &str) -> Option<Playback> {
    output.lines().find_map(|line| {
        if line.trim_start().starts_with("Limits:") {
            return None;
        }
        let (_, values) = line.split_once(": Playback ")?;
        let volume = values.split_whitespace().next()?.parse::<i64>().ok()?;
        Some(Playback {
            volume,
            enabled: !values.contains("[off]"),
        })
    })
}

impl MixerBackend for AmixerBackend {
    fn volume_range(&self) -> (i64, i64) {
        self.range
    }

    fn handle_events(&mut self) -> Result<u32, SensorError> {
        Ok(0)
    }

    fn playback(&mut self) -> Result<Playback, SensorError> {
        let output = self
            .sget()
            .map_err(|detail| SensorError::Mixer { detail })?;
        parse_playback(&output).ok_or_else(|| SensorError::Mixer {
            detail: format!("no playback channel in amixer output for {:?}", self.control),
        })
    }
}
