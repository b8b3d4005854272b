//! Conversation aggregate.
//!
//! [`Conversation`] owns the ordered message list for one chat session.
//! At most one assistant message is "in progress" at a time: streamed
//! deltas are appended to it in place, and it is frozen as soon as the
//! turn ends or a new user message starts.

use super::entities::Message;

/// An ordered list of role-tagged messages with at most one mutable
/// trailing assistant message.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    messages: Vec<Message>,
    /// Index of the in-progress assistant message, if any.
    in_progress: Option<usize>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a conversation with an assistant greeting.
    pub fn with_greeting(greeting: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::assistant(greeting)],
            in_progress: None,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Append a user message. Freezes any in-progress assistant message.
    pub fn push_user(&mut self, content: impl Into<String>) {
        self.in_progress = None;
        self.messages.push(Message::user(content));
    }

    /// Append a frozen assistant message (e.g. a user-facing error).
    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.in_progress = None;
        self.messages.push(Message::assistant(content));
    }

    /// Apply a streamed delta.
    ///
    /// Appends to the trailing assistant message if it is the in-progress
    /// one created for this turn; otherwise creates a new assistant
    /// message holding the delta text.
    pub fn apply_delta(&mut self, delta: &str) {
        match self.in_progress {
            Some(idx) => self.messages[idx].content.push_str(delta),
            None => {
                self.messages.push(Message::assistant(delta));
                self.in_progress = Some(self.messages.len() - 1);
            }
        }
    }

    /// Freeze the in-progress assistant message. Partial content stays.
    pub fn freeze(&mut self) {
        self.in_progress = None;
    }

    /// Content of the in-progress assistant message, if any.
    pub fn partial_reply(&self) -> Option<&str> {
        self.in_progress
            .map(|idx| self.messages[idx].content.as_str())
    }

    /// The last message, if any.
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }
}
