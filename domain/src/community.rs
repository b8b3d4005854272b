//! Community records: signups, contest entries and karaoke submissions.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Maximum accepted karaoke recording size (10 MB).
pub const MAX_RECORDING_BYTES: usize = 10 * 1024 * 1024;

/// A newsletter/community signup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Signup {
    pub name: String,
    pub email: String,
}

impl Signup {
    /// Build a validated signup. Email is lowercased for storage.
    pub fn new(name: &str, email: &str) -> Result<Self, DomainError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::MissingField("name"));
        }
        let email = validate_email(email)?;
        Ok(Self {
            name: name.to_string(),
            email,
        })
    }
}

/// A contest participation entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContestEntry {
    pub contest_id: u32,
    pub user_name: String,
    pub user_email: String,
}

impl ContestEntry {
    pub fn new(contest_id: u32, user_name: &str, user_email: &str) -> Result<Self, DomainError> {
        let user_name = user_name.trim();
        if user_name.is_empty() {
            return Err(DomainError::MissingField("user_name"));
        }
        let user_email = validate_email(user_email)?;
        Ok(Self {
            contest_id,
            user_name: user_name.to_string(),
            user_email,
        })
    }
}

/// A stored karaoke submission, as read back from the datastore.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KaraokeSubmission {
    pub id: String,
    pub user_name: String,
    pub song_title: String,
    pub audio_url: String,
    pub votes: u32,
    pub created_at: String,
}

/// A karaoke submission about to be inserted.
#[derive(Debug, Clone, Serialize)]
pub struct NewKaraokeSubmission {
    pub user_name: String,
    pub user_email: String,
    pub song_id: u32,
    pub song_title: String,
    pub audio_url: String,
    pub votes: u32,
}

impl NewKaraokeSubmission {
    pub fn new(
        user_name: &str,
        user_email: &str,
        song_id: u32,
        song_title: &str,
        audio_url: String,
    ) -> Result<Self, DomainError> {
        let user_name = user_name.trim();
        if user_name.is_empty() {
            return Err(DomainError::MissingField("user_name"));
        }
        let user_email = validate_email(user_email)?;
        Ok(Self {
            user_name: user_name.to_string(),
            user_email,
            song_id,
            song_title: song_title.to_string(),
            audio_url,
            votes: 0,
        })
    }
}

/// Validate an email address and normalize it to lowercase.
///
/// Accepts `local@domain` where neither part contains whitespace or a
/// second `@`, and the domain contains a dot with text on both sides.
pub fn validate_email(email: &str) -> Result<String, DomainError> {
    let email = email.trim();
    let invalid = || DomainError::InvalidEmail(email.to_string());

    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty()
        || domain.is_empty()
        || local.chars().any(|c| c.is_whitespace() || c == '@')
        || domain.chars().any(|c| c.is_whitespace() || c == '@')
    {
        return Err(invalid());
    }
    let (host, tld) = domain.rsplit_once('.').ok_or_else(invalid)?;
    if host.is_empty() || tld.is_empty() {
        return Err(invalid());
    }
    Ok(email.to_lowercase())
}

/// Sanitize a file name for use as a storage object name.
///
/// Keeps ASCII alphanumerics, `.` and `-`; everything else is dropped.
pub fn sanitize_object_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '.' || *c == '-')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_emails_are_normalized() {
        assert_eq!(
            validate_email("Fan@Hawkins.ES").unwrap(),
            "fan@hawkins.es"
        );
        assert_eq!(
            validate_email("  once@upside.down  ").unwrap(),
            "once@upside.down"
        );
    }

    #[test]
    fn invalid_emails_are_rejected() {
        for bad in [
            "",
            "no-arroba",
            "@hawkins.es",
            "fan@",
            "fan@hawkins",
            "fan@hawkins.",
            "fan@.es",
            "fan fan@hawkins.es",
            "fan@haw kins.es",
            "fan@@hawkins.es",
        ] {
            assert!(validate_email(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn signup_requires_name() {
        assert!(Signup::new("   ", "fan@hawkins.es").is_err());
        let signup = Signup::new(" Once ", "FAN@hawkins.es").unwrap();
        assert_eq!(signup.name, "Once");
        assert_eq!(signup.email, "fan@hawkins.es");
    }

    #[test]
    fn new_submission_starts_with_zero_votes() {
        let sub = NewKaraokeSubmission::new(
            "Dustin",
            "dustin@hawkins.es",
            1,
            "The Neverending Story",
            "https://cdn/rec.webm".to_string(),
        )
        .unwrap();
        assert_eq!(sub.votes, 0);
        assert_eq!(sub.song_title, "The Neverending Story");
    }

    #[test]
    fn object_names_are_sanitized() {
        assert_eq!(
            sanitize_object_name("mi canción (final).webm"),
            "micancinfinal.webm"
        );
        assert_eq!(sanitize_object_name("ok-1.mp3"), "ok-1.mp3");
    }
}
