//! Configuration loading.

pub mod file_config;
pub mod loader;

pub use file_config::{ChatConfig, FileConfig, PlaybackConfig, ProxyConfig, StoreConfig};
pub use loader::ConfigLoader;
