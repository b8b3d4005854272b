//! Ports (interfaces) implemented by the infrastructure layer.

pub mod assistant_gateway;
pub mod community_store;
pub mod playback;
pub mod transcript_logger;
