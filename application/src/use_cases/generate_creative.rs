//! Creative generation use case.
//!
//! Non-streaming sibling of the chat turn: one prompt in, one complete
//! result back. Covers both text content (theories, welcome posts) and
//! the image generator.

use crate::ports::assistant_gateway::{AssistantGateway, GatewayError, GeneratedImage};
use crate::ports::transcript_logger::{NoTranscriptLogger, TranscriptEvent, TranscriptLogger};
use fans_domain::{CreativeKind, Message, truncate_str};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors that can occur during creative generation.
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Empty prompt")]
    EmptyPrompt,
}

/// Use case for one-shot content and image generation.
pub struct GenerateCreativeUseCase {
    gateway: Arc<dyn AssistantGateway>,
    transcript: Arc<dyn TranscriptLogger>,
}

impl GenerateCreativeUseCase {
    pub fn new(gateway: Arc<dyn AssistantGateway>) -> Self {
        Self {
            gateway,
            transcript: Arc::new(NoTranscriptLogger),
        }
    }

    pub fn with_transcript_logger(mut self, logger: Arc<dyn TranscriptLogger>) -> Self {
        self.transcript = logger;
        self
    }

    /// Generate a complete text for a single prompt.
    pub async fn content(&self, prompt: &str) -> Result<String, GenerateError> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(GenerateError::EmptyPrompt);
        }

        let messages = [Message::user(prompt)];
        let content = self.gateway.generate_content(&messages).await?;

        info!("Generated {} bytes of content", content.len());
        self.transcript.log(TranscriptEvent::ContentGenerated {
            prompt: truncate_str(prompt, 120).to_string(),
            bytes: content.len(),
        });
        Ok(content)
    }

    /// Generate an image of the given kind.
    pub async fn image(&self, kind: CreativeKind) -> Result<GeneratedImage, GenerateError> {
        let image = self.gateway.generate_image(kind).await?;

        info!("Generated image for kind '{kind}'");
        self.transcript.log(TranscriptEvent::ImageGenerated {
            kind,
            url: image.image_url.clone(),
        });
        Ok(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::assistant_gateway::StreamHandle;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FixedGateway {
        content: String,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl AssistantGateway for FixedGateway {
        async fn stream_chat(
            &self,
            _messages: &[Message],
        ) -> Result<StreamHandle, GatewayError> {
            unimplemented!("not used in creative tests")
        }

        async fn generate_content(
            &self,
            messages: &[Message],
        ) -> Result<String, GatewayError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            assert_eq!(messages.len(), 1);
            Ok(self.content.clone())
        }

        async fn generate_image(
            &self,
            kind: CreativeKind,
        ) -> Result<GeneratedImage, GatewayError> {
            Ok(GeneratedImage {
                image_url: format!("https://cdn/{kind}.png"),
                message: "Tu creación está lista".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn content_returns_gateway_text() {
        let gateway = Arc::new(FixedGateway {
            content: "Una teoría sobre la T5...".to_string(),
            calls: AtomicUsize::new(0),
        });
        let use_case = GenerateCreativeUseCase::new(gateway.clone());

        let text = use_case.content("Teorías sobre la T5").await.unwrap();
        assert_eq!(text, "Una teoría sobre la T5...");
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn empty_prompt_is_rejected_before_network() {
        let gateway = Arc::new(FixedGateway {
            content: String::new(),
            calls: AtomicUsize::new(0),
        });
        let use_case = GenerateCreativeUseCase::new(gateway.clone());

        let err = use_case.content("   ").await.unwrap_err();
        assert!(matches!(err, GenerateError::EmptyPrompt));
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn image_carries_kind_to_gateway() {
        let gateway = Arc::new(FixedGateway {
            content: String::new(),
            calls: AtomicUsize::new(0),
        });
        let use_case = GenerateCreativeUseCase::new(gateway);

        let image = use_case.image(CreativeKind::Poster).await.unwrap();
        assert_eq!(image.image_url, "https://cdn/poster.png");
    }
}
