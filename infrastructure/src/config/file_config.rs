//! Configuration file model.
//!
//! Mirrors the `stranger-fans.toml` layout:
//!
//! ```toml
//! [proxy]
//! base_url = "https://xyz.supabase.co/functions/v1"
//! publishable_key = "sb_publishable_..."
//!
//! [store]
//! base_url = "https://xyz.supabase.co"
//! anon_key = "sb_publishable_..."
//!
//! [chat]
//! transcript_log = "transcripts/chat.jsonl"
//!
//! [playback]
//! volume = 50
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration file model.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub proxy: ProxyConfig,
    pub store: StoreConfig,
    pub chat: ChatConfig,
    pub playback: PlaybackConfig,
}

/// Serverless proxy endpoints and the publishable key sent as bearer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxyConfig {
    /// Base URL of the functions host.
    pub base_url: String,
    /// Publishable (anonymous) key; not a secret.
    pub publishable_key: String,
    /// Chat function name.
    pub chat_function: String,
    /// Image function name.
    pub image_function: String,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            publishable_key: String::new(),
            chat_function: "stranger-chat".to_string(),
            image_function: "generate-image".to_string(),
        }
    }
}

impl ProxyConfig {
    pub fn chat_url(&self) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), self.chat_function)
    }

    pub fn image_url(&self) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), self.image_function)
    }
}

/// Community datastore endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Base URL of the datastore host.
    pub base_url: String,
    /// Anonymous API key.
    pub anon_key: String,
    /// Storage bucket holding karaoke recordings.
    pub recordings_bucket: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            anon_key: String::new(),
            recordings_bucket: "karaoke-recordings".to_string(),
        }
    }
}

/// Chat behavior.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Optional JSONL transcript log path.
    pub transcript_log: Option<PathBuf>,
}

/// Playback defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Initial volume 0..=100.
    pub volume: u8,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self { volume: 50 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_join_without_double_slash() {
        let proxy = ProxyConfig {
            base_url: "https://xyz.supabase.co/functions/v1/".to_string(),
            ..Default::default()
        };
        assert_eq!(
            proxy.chat_url(),
            "https://xyz.supabase.co/functions/v1/stranger-chat"
        );
        assert_eq!(
            proxy.image_url(),
            "https://xyz.supabase.co/functions/v1/generate-image"
        );
    }

    #[test]
    fn defaults_are_sensible() {
        let config = FileConfig::default();
        assert_eq!(config.playback.volume, 50);
        assert_eq!(config.store.recordings_bucket, "karaoke-recordings");
        assert!(config.chat.transcript_log.is_none());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let config: FileConfig = toml::from_str(
            r#"
            [proxy]
            base_url = "https://xyz.supabase.co/functions/v1"
            publishable_key = "pk"
            "#,
        )
        .unwrap();
        assert_eq!(config.proxy.publishable_key, "pk");
        assert_eq!(config.proxy.chat_function, "stranger-chat");
        assert_eq!(config.playback.volume, 50);
    }
}
