// src/core/items/sound/alsa_backend.rs

use super::mixer_backend::{MixerBackend, Playback};
use crate::core::config::SoundConfig;
use crate::core::error::SensorError;
use alsa::mixer::{Mixer, Selem, SelemChannelId, SelemId};
use tracing::debug;

// Talks to the ALSA simple-mixer API directly
pub struct AlsaBackend {
    mixer: Mixer,
    id: SelemId,
    control: String,
    range: (i64, i64),
}

impl AlsaBackend {
    pub fn open(cfg: &SoundConfig) -> Result<Self, SensorError> {
        // open + attach + register + load
        let mixer = Mixer::new(&cfg.card, false).map_err(|e| SensorError::NotFound {
            what: format!("ALSA mixer for card {:?} ({e})", cfg.card),
        })?;
        let id = SelemId::new(&cfg.control, cfg.index);
        let range = {
            let selem = mixer.find_selem(&id).ok_or_else(|| SensorError::NotFound {
                what: format!("mixer control {:?},{} on {:?}", cfg.control, cfg.index, cfg.card),
            })?;
            selem.get_playback_volume_range()
        };
        debug!(card = %cfg.card, control = %cfg.control, ?range, "Opened ALSA mixer");
        Ok(AlsaBackend {
            mixer,
            id,
            control: cfg.control.clone(),
            range,
        })
    }

    fn selem(&self) -> Result<Selem<'_>, SensorError> {
        self.mixer.find_selem(&self.id).ok_or_else(|| SensorError::Mixer {
            detail: format!("control {:?} disappeared", self.control),
        })
    }
}

fn mixer_error(what: &str, e: alsa::Error) -> SensorError {
    SensorError::Mixer {
        detail: format!("{what}: {e}"),
    }
}

impl MixerBackend for AlsaBackend {
    fn volume_range(&self) -> (i64, i64) {
        self.range
    }

    fn handle_events(&mut self) -> Result<u32, SensorError> {
        self.mixer
            .handle_events()
            .map_err(|e| mixer_error("handling mixer events", e))
    }

    fn playback(&mut self) -> Result<Playback, SensorError> {
        let selem = self.selem()?;
        let volume = selem
            .get_playback_volume(SelemChannelId::mono())
            .map_err(|e| mixer_error("reading playback volume", e))?;
        let switch = selem
            .get_playback_switch(SelemChannelId::mono())
            .map_err(|e| mixer_error("reading playback switch", e))?;
        Ok(Playback {
            volume,
            enabled: switch != 0,
        })
    }
}
