//! Application use cases.

pub mod chat_turn;
pub mod generate_creative;
pub mod join_community;
pub mod karaoke;
