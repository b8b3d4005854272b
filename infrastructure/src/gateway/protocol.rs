//! Wire types for the proxy endpoints.
//!
//! The chat function accepts `{ "messages": [...] }` and either relays
//! the upstream SSE stream or, with `"mode": "generate-content"`,
//! returns a single `{ "content": string }` object. The image function
//! accepts `{ "type": "foto" | "poster" | "tarjeta" }`. All failure
//! responses carry `{ "error": string }`.

use fans_domain::{CreativeKind, Message};
use serde::{Deserialize, Serialize};

/// Discriminator selecting the non-streaming sibling mode.
pub const MODE_GENERATE_CONTENT: &str = "generate-content";

/// Request body for the chat function.
#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub messages: &'a [Message],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<&'static str>,
}

impl<'a> ChatRequest<'a> {
    pub fn streaming(messages: &'a [Message]) -> Self {
        Self {
            messages,
            mode: None,
        }
    }

    pub fn generate_content(messages: &'a [Message]) -> Self {
        Self {
            messages,
            mode: Some(MODE_GENERATE_CONTENT),
        }
    }
}

/// Request body for the image function.
#[derive(Debug, Serialize)]
pub struct ImageRequest {
    #[serde(rename = "type")]
    pub kind: CreativeKind,
}

/// Error body returned with non-2xx statuses.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// Success body of the non-streaming content mode.
#[derive(Debug, Deserialize)]
pub struct ContentBody {
    #[serde(default)]
    pub content: Option<String>,
}

/// Success body of the image function.
#[derive(Debug, Deserialize)]
pub struct ImageBody {
    #[serde(default)]
    pub success: bool,
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn streaming_request_omits_mode() {
        let messages = [Message::user("hola")];
        let json = serde_json::to_value(ChatRequest::streaming(&messages)).unwrap();
        assert!(json.get("mode").is_none());
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "hola");
    }

    #[test]
    fn content_request_carries_mode_discriminator() {
        let messages = [Message::user("hola")];
        let json = serde_json::to_value(ChatRequest::generate_content(&messages)).unwrap();
        assert_eq!(json["mode"], "generate-content");
    }

    #[test]
    fn image_request_uses_type_field() {
        let json = serde_json::to_value(ImageRequest {
            kind: CreativeKind::Foto,
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({ "type": "foto" }));
    }

    #[test]
    fn image_body_reads_camel_case_url() {
        let body: ImageBody = serde_json::from_str(
            r#"{"success":true,"imageUrl":"https://cdn/x.png","message":"lista"}"#,
        )
        .unwrap();
        assert!(body.success);
        assert_eq!(body.image_url.as_deref(), Some("https://cdn/x.png"));
    }

    #[test]
    fn error_body_tolerates_missing_field() {
        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert!(body.error.is_none());
    }
}
