// src/core/items/sound/item.rs

use super::mixer_backend::{self, MixerBackend};
use crate::core::config::SoundConfig;
use crate::core::error::SensorError;
use crate::core::item::{Item, Tick};
use crate::core::utils::scaled_percent;
use std::fmt::Write;

// Normalize a raw device volume into 0..=100
pub fn volume_percent(raw: i64, min: i64, max: i64) -> i64 {
    scaled_percent((raw - min) as f64, (max - min) as f64)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SoundState {
    percent: i64,
    muted: bool,
}

pub struct SoundItem {
    backend: Box<dyn MixerBackend>,
    range: (i64, i64),
    state: Option<SoundState>,
}

impl SoundItem {
    pub fn new(cfg: &SoundConfig) -> Result<Self, SensorError> {
        Ok(Self::with_backend(mixer_backend::open(cfg)?))
    }

    pub fn with_backend(backend: Box<dyn MixerBackend>) -> Self {
        let range = backend.volume_range();
        SoundItem {
            backend,
            range,
            state: None,
        }
    }
}

impl Item for SoundItem {
    fn name(&self) -> &str {
        "sound"
    }

    // Pending mixer events count as a change even if the values look the same.
    fn poll(&mut self, _tick: &Tick) -> Result<bool, SensorError> {
        let events = self.backend.handle_events()?;
        let playback = self.backend.playback()?;
        let (min, max) = self.range;
        let state = SoundState {
            percent: volume_percent(playback.volume, min, max),
            muted: !playback.enabled,
        };
        let changed = events > 0 || self.state != Some(state);
        self.state = Some(state);
        Ok(changed)
    }

    fn render(&self, out: &mut String) {
        match self.state {
            Some(SoundState { muted: true, .. }) => out.push_str("sound: mute"),
            Some(SoundState { percent, .. }) => {
                let _ = write!(out, "sound: {percent}%");
            }
            None => out.push_str("sound: ?"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::items::sound::Playback;
    use std::cell::Cell;
    use std::rc::Rc;

    struct FakeMixer {
        range: (i64, i64),
        events: Rc<Cell<u32>>,
        playback: Rc<Cell<Playback>>,
    }

    impl MixerBackend for FakeMixer {
        fn volume_range(&self) -> (i64, i64) {
            self.range
        }
        fn handle_events(&mut self) -> Result<u32, SensorError> {
            Ok(self.events.replace(0))
        }
        fn playback(&mut self) -> Result<Playback, SensorError> {
            Ok(self.playback.get())
        }
    }

    struct Handles {
        events: Rc<Cell<u32>>,
        playback: Rc<Cell<Playback>>,
    }

    fn sound_item(range: (i64, i64), volume: i64, enabled: bool) -> (SoundItem, Handles) {
        let events = Rc::new(Cell::new(0));
        let playback = Rc::new(Cell::new(Playback { volume, enabled }));
        let mixer = FakeMixer {
            range,
            events: Rc::clone(&events),
            playback: Rc::clone(&playback),
        };
        (
            SoundItem::with_backend(Box::new(mixer)),
            Handles { events, playback },
        )
    }

    fn render(item: &SoundItem) -> String {
        let mut out = String::new();
        item.render(&mut out);
        out
    }

    #[test]
    fn normalization_endpoints() {
        assert_eq!(volume_percent(0, 0, 65536), 0);
        assert_eq!(volume_percent(65536, 0, 65536), 100);
        assert_eq!(volume_percent(32768, 0, 65536), 50);
        // Ranges need not start at zero
        assert_eq!(volume_percent(-10, -20, 0), 50);
        assert_eq!(volume_percent(5, 5, 5), 0);
    }

    #[test]
    fn muted_renders_token() {
        let (mut item, _) = sound_item((0, 87), 40, false);
        assert!(item.poll(&Tick::default()).unwrap());
        assert_eq!(render(&item), "sound: mute");
    }

    #[test]
    fn unchanged_values_are_not_a_change() {
        let (mut item, _) = sound_item((0, 100), 30, true);
        assert!(item.poll(&Tick::default()).unwrap());
        assert!(!item.poll(&Tick::default()).unwrap());
        assert_eq!(render(&item), "sound: 30%");
    }

    #[test]
    fn pending_events_force_a_change() {
        let (mut item, handles) = sound_item((0, 100), 30, true);
        item.poll(&Tick::default()).unwrap();

        handles.events.set(2);
        assert!(item.poll(&Tick::default()).unwrap());
        // Drained: same values, no events
        assert!(!item.poll(&Tick::default()).unwrap());
    }

    #[test]
    fn mute_toggle_is_a_change() {
        let (mut item, handles) = sound_item((0, 100), 30, true);
        item.poll(&Tick::default()).unwrap();

        handles.playback.set(Playback {
            volume: 30,
            enabled: false,
        });
        assert!(item.poll(&Tick::default()).unwrap());
        assert_eq!(render(&item), "sound: mute");
    }

    #[test]
    fn raw_change_within_same_percent_is_not_a_change() {
        let (mut item, handles) = sound_item((0, 65536), 32768, true);
        item.poll(&Tick::default()).unwrap();

        handles.playback.set(Playback {
            volume: 32769,
            enabled: true,
        });
        assert!(!item.poll(&Tick::default()).unwrap());
    }
}
