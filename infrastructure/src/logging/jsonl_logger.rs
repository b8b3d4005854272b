//! JSONL file sink for the transcript port.
//!
//! Appends one JSON object per event to the transcript file: the event's
//! own tagged fields plus a `timestamp` added here.

use fans_application::ports::transcript_logger::{TranscriptEvent, TranscriptLogger};
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// One line of the transcript file.
#[derive(Serialize)]
struct TranscriptLine<'a> {
    timestamp: String,
    #[serde(flatten)]
    event: &'a TranscriptEvent,
}

/// Transcript sink writing JSON Lines to a file.
///
/// The file is opened in append mode, so transcripts accumulate across
/// runs. Every event is flushed as soon as it is written.
pub struct JsonlTranscriptLogger {
    sink: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlTranscriptLogger {
    /// Open the transcript file, creating it and its parent directory as
    /// needed. Returns `None` when the file cannot be opened; the chat
    /// keeps running without a transcript.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Cannot create transcript directory {}: {e}",
                parent.display()
            );
            return None;
        }

        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => Some(Self {
                sink: Mutex::new(BufWriter::new(file)),
                path: path.to_path_buf(),
            }),
            Err(e) => {
                warn!("Cannot open transcript file {}: {e}", path.display());
                None
            }
        }
    }

    /// Get the path to the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TranscriptLogger for JsonlTranscriptLogger {
    fn log(&self, event: TranscriptEvent) {
        let line = TranscriptLine {
            timestamp: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            event: &event,
        };
        let Ok(json) = serde_json::to_string(&line) else {
            return;
        };

        if let Ok(mut sink) = self.sink.lock() {
            let _ = writeln!(sink, "{json}");
            let _ = sink.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn read_lines(path: &Path) -> Vec<serde_json::Value> {
        fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn events_keep_their_tag_and_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chat.jsonl");
        let logger = JsonlTranscriptLogger::new(&path).unwrap();

        logger.log(TranscriptEvent::UserTurn {
            text: "hola Demogorgon".to_string(),
        });
        logger.log(TranscriptEvent::AssistantReply {
            bytes: 42,
            preview: "Hola".to_string(),
        });
        logger.log(TranscriptEvent::TransportError {
            message: "sin conexión".to_string(),
        });
        drop(logger);

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0]["type"], "user_turn");
        assert_eq!(lines[0]["text"], "hola Demogorgon");
        assert_eq!(lines[1]["type"], "assistant_reply");
        assert_eq!(lines[1]["bytes"], 42);
        assert_eq!(lines[1]["preview"], "Hola");
        assert_eq!(lines[2]["type"], "transport_error");
        for line in &lines {
            assert!(line["timestamp"].is_string());
        }
    }

    #[test]
    fn reopening_appends_instead_of_truncating() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chat.jsonl");

        let logger = JsonlTranscriptLogger::new(&path).unwrap();
        logger.log(TranscriptEvent::UserTurn {
            text: "primera sesión".to_string(),
        });
        drop(logger);

        let logger = JsonlTranscriptLogger::new(&path).unwrap();
        logger.log(TranscriptEvent::UserTurn {
            text: "segunda sesión".to_string(),
        });
        drop(logger);

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["text"], "primera sesión");
        assert_eq!(lines[1]["text"], "segunda sesión");
    }
}
