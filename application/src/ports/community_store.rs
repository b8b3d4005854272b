//! Community datastore port
//!
//! The backend-as-a-service datastore holding signups, contest entries
//! and karaoke submissions, plus the object storage bucket for
//! recordings.

use async_trait::async_trait;
use fans_domain::{ContestEntry, KaraokeSubmission, NewKaraokeSubmission, Signup};
use thiserror::Error;

/// Errors returned by datastore operations
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed ({status}): {message}")]
    RequestFailed { status: u16, message: String },

    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
}

/// Datastore for community records
#[async_trait]
pub trait CommunityStore: Send + Sync {
    /// Persist a newsletter/community signup.
    async fn insert_signup(&self, signup: &Signup) -> Result<(), StoreError>;

    /// Persist a contest participation entry.
    async fn insert_contest_entry(&self, entry: &ContestEntry) -> Result<(), StoreError>;

    /// Upload a karaoke recording; returns its public URL.
    async fn upload_recording(&self, object_name: &str, bytes: Vec<u8>)
    -> Result<String, StoreError>;

    /// Insert a karaoke submission row.
    async fn insert_karaoke(&self, submission: &NewKaraokeSubmission) -> Result<(), StoreError>;

    /// List karaoke submissions ordered by votes descending.
    async fn list_karaoke(&self, limit: usize) -> Result<Vec<KaraokeSubmission>, StoreError>;

    /// Fetch a single karaoke submission by id.
    async fn get_karaoke(&self, id: &str) -> Result<Option<KaraokeSubmission>, StoreError>;

    /// Set the vote count of a submission.
    async fn set_karaoke_votes(&self, id: &str, votes: u32) -> Result<(), StoreError>;
}
