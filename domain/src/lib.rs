//! Domain layer for stranger-fans
//!
//! This crate contains the core entities and state machines of the fan
//! community assistant: conversations, streaming events, creative content
//! requests, community records, and playback/soundscape value objects.
//! It has no dependencies on infrastructure or presentation concerns.

pub mod community;
pub mod conversation;
pub mod core;
pub mod creative;
pub mod music;
pub mod util;

// Re-export commonly used types
pub use community::{
    ContestEntry, KaraokeSubmission, NewKaraokeSubmission, Signup, sanitize_object_name,
    validate_email,
};
pub use conversation::{
    entities::{Message, Role},
    session::Conversation,
    stream::StreamEvent,
    turn::TurnPhase,
};
pub use core::error::DomainError;
pub use creative::CreativeKind;
pub use music::{Playlist, SoundLayer, SoundscapePreset, Track, Waveform};
pub use util::truncate_str;
