//! Port for structured transcript logging.
//!
//! Defines the [`TranscriptLogger`] trait for recording chat transcript
//! events (user turns, assistant replies, transport failures, creative
//! generations) to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostics, while this port captures the transcript in
//! a machine-readable format (JSONL).

use fans_domain::CreativeKind;
use serde::Serialize;

/// One entry in the session transcript.
///
/// Serializes as a tagged object, e.g.
/// `{"type":"user_turn","text":"hola"}`. Sinks add their own metadata
/// (such as a timestamp) around it.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TranscriptEvent {
    /// The user submitted a message.
    UserTurn { text: String },
    /// A streamed assistant reply completed. Carries the reply size and
    /// a bounded preview, not the full text.
    AssistantReply { bytes: usize, preview: String },
    /// A turn failed in transport; the message shown to the user.
    TransportError { message: String },
    /// One-shot content generation finished.
    ContentGenerated { prompt: String, bytes: usize },
    /// An image was generated.
    ImageGenerated { kind: CreativeKind, url: String },
}

/// Port for logging transcript events.
///
/// Implementations write each event as a single record (e.g., one JSONL
/// line). `log` is synchronous and non-fallible; logging failures must
/// never disturb the conversation flow.
pub trait TranscriptLogger: Send + Sync {
    /// Record a transcript event.
    fn log(&self, event: TranscriptEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoTranscriptLogger;

impl TranscriptLogger for NoTranscriptLogger {
    fn log(&self, _event: TranscriptEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_carry_a_snake_case_tag() {
        let json = serde_json::to_value(TranscriptEvent::UserTurn {
            text: "hola".to_string(),
        })
        .unwrap();
        assert_eq!(json["type"], "user_turn");
        assert_eq!(json["text"], "hola");

        let json = serde_json::to_value(TranscriptEvent::ImageGenerated {
            kind: CreativeKind::Poster,
            url: "https://cdn/p.png".to_string(),
        })
        .unwrap();
        assert_eq!(json["type"], "image_generated");
        assert_eq!(json["kind"], "poster");
    }
}
