// src/core/items/sound/mixer_backend.rs

use crate::core::config::SoundConfig;
use crate::core::error::SensorError;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MixerBackendKind {
    Alsa,
    Amixer,
}

impl Default for MixerBackendKind {
    fn default() -> Self {
        if cfg!(feature = "alsa") {
            MixerBackendKind::Alsa
        } else {
            MixerBackendKind::Amixer
        }
    }
}

// Raw state of the playback control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Playback {
    // Device units, within `volume_range()`
    pub volume: i64,
    // Playback switch; off means muted
    pub enabled: bool,
}

// A session with one simple mixer control, held for the process lifetime
pub trait MixerBackend {
    // (min, max) playback volume, captured when the session was opened
    fn volume_range(&self) -> (i64, i64);

    // Drain pending change notifications, returning how many there were
    fn handle_events(&mut self) -> Result<u32, SensorError>;

    fn playback(&mut self) -> Result<Playback, SensorError>;
}

pub fn open(cfg: &SoundConfig) -> Result<Box<dyn MixerBackend>, SensorError> {
    match cfg.backend {
        #[cfg(feature = "alsa")]
        MixerBackendKind::Alsa => Ok(Box::new(super::alsa_backend::AlsaBackend::open(cfg)?)),
        #[cfg(not(feature = "alsa"))]
        MixerBackendKind::Alsa => Err(SensorError::NotFound {
            what: "ALSA mixer support (built without the `alsa` feature)".to_string(),
        }),
        MixerBackendKind::Amixer => Ok(Box::new(super::amixer_backend::AmixerBackend::open(cfg)?)),
    }
}
