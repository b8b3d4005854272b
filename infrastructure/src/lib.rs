//! Infrastructure layer for stranger-fans
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: the AI proxy gateway with its incremental SSE
//! decoder, the community datastore client, the soundscape engine and
//! track player, the figment configuration loader, and the JSONL
//! transcript logger.

pub mod audio;
pub mod config;
pub mod gateway;
pub mod logging;
pub mod store;

// Re-export commonly used types
pub use audio::{SoundscapeEngine, TrackPlayer, write_wav};
pub use config::{ConfigLoader, FileConfig, ProxyConfig, StoreConfig};
pub use gateway::{ProxyGateway, sse::SseDecoder};
pub use logging::JsonlTranscriptLogger;
pub use store::RestCommunityStore;
