//! Audio synthesis and playback adapters.

pub mod engine;
pub mod player;
pub mod synth;
pub mod wav;

pub use engine::SoundscapeEngine;
pub use player::TrackPlayer;
pub use wav::write_wav;
