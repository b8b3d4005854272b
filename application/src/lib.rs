//! Application layer for stranger-fans
//!
//! This crate contains use cases and port definitions. It depends only on
//! the domain layer; adapters for the ports live in the infrastructure
//! crate.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    assistant_gateway::{AssistantGateway, GatewayError, GeneratedImage, StreamHandle},
    community_store::{CommunityStore, StoreError},
    playback::{NowPlaying, PlaybackControl},
    transcript_logger::{NoTranscriptLogger, TranscriptEvent, TranscriptLogger},
};
pub use use_cases::chat_turn::{ChatSession, SubmitOutcome};
pub use use_cases::generate_creative::{GenerateCreativeUseCase, GenerateError};
pub use use_cases::join_community::{JoinCommunityError, JoinCommunityUseCase};
pub use use_cases::karaoke::{KaraokeError, KaraokeUseCase, NewRecording};
