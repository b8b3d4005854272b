//! Assistant gateway port
//!
//! Defines the interface for talking to the hosted AI gateway through its
//! serverless proxy endpoints.

use async_trait::async_trait;
use fans_domain::{CreativeKind, Message, StreamEvent};
use thiserror::Error;
use tokio::sync::mpsc;

/// Errors that can occur during gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Non-success HTTP status. `message` carries the proxy's `error`
    /// field when present, or a generic `Error <status>` text.
    #[error("{message}")]
    Http { status: u16, message: String },

    #[error("Empty response from gateway")]
    EmptyResponse,

    #[error("Other error: {0}")]
    Other(String),
}

/// Result of an image-generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    pub image_url: String,
    pub message: String,
}

/// Gateway for assistant communication
///
/// This port defines how the application layer reaches the AI proxy.
/// The HTTP adapter lives in the infrastructure layer.
#[async_trait]
pub trait AssistantGateway: Send + Sync {
    /// Send the conversation history and stream the assistant's reply.
    ///
    /// A successful return means the transport accepted the request; the
    /// returned handle then yields [`StreamEvent`]s in stream order.
    async fn stream_chat(&self, messages: &[Message]) -> Result<StreamHandle, GatewayError>;

    /// Non-streaming sibling mode: one prompt, one complete text back.
    async fn generate_content(&self, messages: &[Message]) -> Result<String, GatewayError>;

    /// Request an AI-generated image of the given kind.
    async fn generate_image(&self, kind: CreativeKind) -> Result<GeneratedImage, GatewayError>;
}

/// Handle for receiving streaming events from a chat turn.
///
/// Wraps an `mpsc::Receiver<StreamEvent>`. Dropping the handle cancels
/// the underlying read; deltas already applied are kept.
pub struct StreamHandle {
    pub receiver: mpsc::Receiver<StreamEvent>,
}

impl StreamHandle {
    pub fn new(receiver: mpsc::Receiver<StreamEvent>) -> Self {
        Self { receiver }
    }

    /// Receive the next event, or `None` when the stream is closed.
    pub async fn next_event(&mut self) -> Option<StreamEvent> {
        self.receiver.recv().await
    }
}
