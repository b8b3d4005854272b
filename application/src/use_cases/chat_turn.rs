//! Chat turn use case.
//!
//! [`ChatSession`] owns one conversation: it originates requests through
//! the [`AssistantGateway`] port, applies streamed deltas to the
//! conversation in arrival order, and turns transport failures into a
//! single user-visible assistant message so the transcript is never
//! interrupted.

use crate::ports::assistant_gateway::AssistantGateway;
use crate::ports::transcript_logger::{NoTranscriptLogger, TranscriptEvent, TranscriptLogger};
use fans_domain::{Conversation, Message, StreamEvent, TurnPhase, truncate_str};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Greeting shown before the first user turn.
pub const GREETING: &str = "¡Hola! 🔦 Soy el asistente de **Stranger Fans España**. \
    Pregúntame lo que quieras sobre Stranger Things, la comunidad, concursos o eventos. \
    ¿En qué puedo ayudarte?";

/// Outcome of a [`ChatSession::submit`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Empty input or a turn already in flight; nothing happened and no
    /// request was issued.
    Ignored,
    /// The turn finished (sentinel seen or stream closed). Partial
    /// output after cancellation also ends here.
    Finished,
    /// Transport failure; an error message was appended to the
    /// conversation.
    Failed,
}

/// One user-facing conversation with the assistant.
///
/// Turns are strictly serialized: the conversation buffer and the
/// in-progress message are single-owner mutable state, so a new
/// submission is rejected while one is in flight.
pub struct ChatSession {
    gateway: Arc<dyn AssistantGateway>,
    transcript: Arc<dyn TranscriptLogger>,
    conversation: Conversation,
    phase: TurnPhase,
}

impl ChatSession {
    pub fn new(gateway: Arc<dyn AssistantGateway>) -> Self {
        Self {
            gateway,
            transcript: Arc::new(NoTranscriptLogger),
            conversation: Conversation::with_greeting(GREETING),
            phase: TurnPhase::Idle,
        }
    }

    /// Attach a transcript logger.
    pub fn with_transcript_logger(mut self, logger: Arc<dyn TranscriptLogger>) -> Self {
        self.transcript = logger;
        self
    }

    pub fn messages(&self) -> &[Message] {
        self.conversation.messages()
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Submit a user message and stream the assistant's reply.
    ///
    /// `on_delta` is called for each text fragment, in stream order.
    /// Empty input and submissions while a turn is in flight are ignored
    /// without error and without any network activity.
    pub async fn submit(
        &mut self,
        text: &str,
        mut on_delta: impl FnMut(&str),
    ) -> SubmitOutcome {
        let text = text.trim();
        if text.is_empty() {
            debug!("Ignoring empty submission");
            return SubmitOutcome::Ignored;
        }
        if !self.phase.can_submit() {
            debug!("Ignoring submission while a turn is in flight");
            return SubmitOutcome::Ignored;
        }

        self.conversation.push_user(text);
        self.transcript.log(TranscriptEvent::UserTurn {
            text: text.to_string(),
        });

        self.phase = TurnPhase::AwaitingTransport;
        let outcome = self.run_turn(&mut on_delta).await;

        // Cleanup happens on every path out of the turn body.
        self.conversation.freeze();
        self.phase = match outcome {
            SubmitOutcome::Failed => TurnPhase::Failed,
            _ => TurnPhase::Finished,
        };
        outcome
    }

    async fn run_turn(&mut self, on_delta: &mut impl FnMut(&str)) -> SubmitOutcome {
        let mut handle = match self.gateway.stream_chat(self.conversation.messages()).await {
            Ok(handle) => handle,
            Err(e) => {
                warn!("Chat transport failed: {e}");
                self.append_error(&e.to_string());
                return SubmitOutcome::Failed;
            }
        };

        self.phase = TurnPhase::Streaming;

        while let Some(event) = handle.next_event().await {
            match event {
                StreamEvent::Delta(delta) => {
                    self.conversation.apply_delta(&delta);
                    on_delta(&delta);
                }
                StreamEvent::Completed(full) => {
                    info!("Assistant reply completed ({} bytes)", full.len());
                    self.transcript.log(TranscriptEvent::AssistantReply {
                        bytes: full.len(),
                        preview: truncate_str(&full, 120).to_string(),
                    });
                    return SubmitOutcome::Finished;
                }
                StreamEvent::Error(e) => {
                    warn!("Chat stream failed: {e}");
                    self.append_error(&e);
                    return SubmitOutcome::Failed;
                }
            }
        }

        // Stream closed without a Completed event (e.g. cancellation).
        // Whatever was applied stays in place.
        debug!("Chat stream closed without completion");
        SubmitOutcome::Finished
    }

    /// Append the single user-visible failure message for this turn.
    fn append_error(&mut self, message: &str) {
        self.conversation.freeze();
        self.conversation
            .push_assistant(format!("❌ {message}. Intenta de nuevo."));
        self.transcript.log(TranscriptEvent::TransportError {
            message: message.to_string(),
        });
    }

    #[cfg(test)]
    fn force_phase(&mut self, phase: TurnPhase) {
        self.phase = phase;
    }
}
