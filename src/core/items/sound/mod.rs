// src/core/items/sound/mod.rs

//! Playback volume and mute state of one mixer control

#[cfg(feature = "alsa")]
pub mod alsa_backend;
pub mod amixer_backend;
pub mod item;
pub mod mixer_backend;

pub use item::SoundItem;
pub use mixer_backend::{MixerBackend, MixerBackendKind, Playback};
