//! AI proxy gateway adapter.
//!
//! Implements [`AssistantGateway`](fans_application::AssistantGateway)
//! over the two serverless proxy endpoints: the streaming chat function
//! and the image generator.

pub mod client;
pub mod protocol;
pub mod sse;

pub use client::ProxyGateway;
