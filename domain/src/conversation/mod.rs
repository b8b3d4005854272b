//! Conversation entities and turn state

pub mod entities;
pub mod session;
pub mod stream;
pub mod turn;

pub use entities::{Message, Role};
pub use session::Conversation;
pub use stream::StreamEvent;
pub use turn::TurnPhase;
