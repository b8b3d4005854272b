//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid email: {0}")]
    InvalidEmail(String),

    #[error("Recording too large: {size} bytes (max {max} bytes)")]
    RecordingTooLarge { size: usize, max: usize },

    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("Already voted for this submission")]
    AlreadyVoted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_user_presentable() {
        assert_eq!(
            DomainError::InvalidEmail("x".to_string()).to_string(),
            "Invalid email: x"
        );
        assert_eq!(
            DomainError::RecordingTooLarge { size: 11, max: 10 }.to_string(),
            "Recording too large: 11 bytes (max 10 bytes)"
        );
        assert_eq!(
            DomainError::MissingField("name").to_string(),
            "Missing field: name"
        );
    }
}
