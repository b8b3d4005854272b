//! HTTP adapter for the assistant gateway port.

use crate::config::ProxyConfig;
use crate::gateway::protocol::{
    ChatRequest, ContentBody, ErrorBody, ImageBody, ImageRequest,
};
use crate::gateway::sse::SseDecoder;
use async_trait::async_trait;
use fans_application::ports::assistant_gateway::{
    AssistantGateway, GatewayError, GeneratedImage, StreamHandle,
};
use fans_domain::{CreativeKind, Message, StreamEvent};
use futures::StreamExt;
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Capacity of the delta channel between the reader task and the caller.
const STREAM_CHANNEL_CAPACITY: usize = 32;

/// Gateway adapter over the serverless proxy functions.
pub struct ProxyGateway {
    client: reqwest::Client,
    config: ProxyConfig,
}

impl ProxyGateway {
    pub fn new(client: reqwest::Client, config: ProxyConfig) -> Self {
        Self { client, config }
    }

    async fn post_chat(&self, body: &ChatRequest<'_>) -> Result<reqwest::Response, GatewayError> {
        let response = self
            .client
            .post(self.config.chat_url())
            .bearer_auth(&self.config.publishable_key)
            .json(body)
            .send()
            .await
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;
        check_status(response).await
    }
}

/// Turn a non-success status into a [`GatewayError::Http`], using the
/// proxy's `error` field when the body carries one.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, GatewayError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response
        .json::<ErrorBody>()
        .await
        .unwrap_or_default()
        .error
        .unwrap_or_else(|| format!("Error {}", status.as_u16()));
    Err(GatewayError::Http {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl AssistantGateway for ProxyGateway {
    async fn stream_chat(&self, messages: &[Message]) -> Result<StreamHandle, GatewayError> {
        debug!("Opening chat stream with {} messages", messages.len());
        let response = self.post_chat(&ChatRequest::streaming(messages)).await?;

        let (tx, rx) = mpsc::channel(STREAM_CHANNEL_CAPACITY);
        let mut body = response.bytes_stream();

        // Reader task: decode chunks as they arrive and forward deltas
        // in order. Dropping the handle closes the channel and ends the
        // task; deltas already delivered stay applied.
        tokio::spawn(async move {
            let mut decoder = SseDecoder::new();
            let mut full = String::new();

            while let Some(next) = body.next().await {
                let bytes = match next {
                    Ok(bytes) => bytes,
                    Err(e) => {
                        warn!("Chat stream read failed: {e}");
                        let _ = tx.send(StreamEvent::Error(e.to_string())).await;
                        return;
                    }
                };
                for delta in decoder.feed(&bytes) {
                    full.push_str(&delta);
                    if tx.send(StreamEvent::Delta(delta)).await.is_err() {
                        debug!("Chat stream cancelled by receiver");
                        return;
                    }
                }
                if decoder.is_done() {
                    break;
                }
            }

            for delta in decoder.finish() {
                full.push_str(&delta);
                if tx.send(StreamEvent::Delta(delta)).await.is_err() {
                    return;
                }
            }
            let _ = tx.send(StreamEvent::Completed(full)).await;
        });

        Ok(StreamHandle::new(rx))
    }

    async fn generate_content(&self, messages: &[Message]) -> Result<String, GatewayError> {
        let response = self
            .post_chat(&ChatRequest::generate_content(messages))
            .await?;
        let body: ContentBody = response
            .json()
            .await
            .map_err(|e| GatewayError::Other(format!("Malformed content response: {e}")))?;
        match body.content {
            Some(content) if !content.is_empty() => Ok(content),
            _ => Err(GatewayError::EmptyResponse),
        }
    }

    async fn generate_image(&self, kind: CreativeKind) -> Result<GeneratedImage, GatewayError> {
        debug!("Requesting image generation: {kind}");
        let response = self
            .client
            .post(self.config.image_url())
            .bearer_auth(&self.config.publishable_key)
            .json(&ImageRequest { kind })
            .send()
            .await
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;
        let response = check_status(response).await?;

        let body: ImageBody = response
            .json()
            .await
            .map_err(|e| GatewayError::Other(format!("Malformed image response: {e}")))?;
        match body.image_url {
            Some(image_url) => Ok(GeneratedImage {
                image_url,
                message: body
                    .message
                    .unwrap_or_else(|| "Tu creación está lista".to_string()),
            }),
            None => Err(GatewayError::EmptyResponse),
        }
    }
}
