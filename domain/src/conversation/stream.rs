//! Streaming events for assistant responses.
//!
//! [`StreamEvent`] represents individual events in a streaming assistant
//! response, enabling real-time display of generated text as it arrives.

/// An event in a streaming assistant response.
///
/// Bridges infrastructure-level streaming (SSE chunks from the chat
/// proxy) to the application layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamEvent {
    /// A text fragment to append to the in-progress assistant message.
    Delta(String),
    /// The complete response text (signals stream end).
    Completed(String),
    /// An error that occurred during streaming.
    Error(String),
}

impl StreamEvent {
    /// Returns the text content if this is a Delta or Completed event.
    pub fn text(&self) -> Option<&str> {
        match self {
            StreamEvent::Delta(s) | StreamEvent::Completed(s) => Some(s),
            StreamEvent::Error(_) => None,
        }
    }

    /// Returns true if this event signals the end of the stream.
    pub fn is_terminal(&self) -> bool {
        matches!(self, StreamEvent::Completed(_) | StreamEvent::Error(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_text_returns_content() {
        let event = StreamEvent::Delta("hola".to_string());
        assert_eq!(event.text(), Some("hola"));
        assert!(!event.is_terminal());
    }

    #[test]
    fn completed_text_returns_content_and_is_terminal() {
        let event = StreamEvent::Completed("respuesta completa".to_string());
        assert_eq!(event.text(), Some("respuesta completa"));
        assert!(event.is_terminal());
    }

    #[test]
    fn error_text_returns_none_and_is_terminal() {
        let event = StreamEvent::Error("boom".to_string());
        assert_eq!(event.text(), None);
        assert!(event.is_terminal());
    }
}
