//! Karaoke use case: submit recordings, list the ranking, vote.

use crate::ports::community_store::{CommunityStore, StoreError};
use fans_domain::community::MAX_RECORDING_BYTES;
use fans_domain::{DomainError, KaraokeSubmission, NewKaraokeSubmission, sanitize_object_name};
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Default number of ranking entries shown.
pub const DEFAULT_RANKING_LIMIT: usize = 20;

/// Errors that can occur in the karaoke flow.
#[derive(Error, Debug)]
pub enum KaraokeError {
    #[error(transparent)]
    Validation(#[from] DomainError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Unknown submission: {0}")]
    UnknownSubmission(String),
}

/// A recording about to be submitted.
#[derive(Debug, Clone)]
pub struct NewRecording {
    pub user_name: String,
    pub user_email: String,
    pub song_id: u32,
    pub song_title: String,
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Karaoke ranking and submission flow.
///
/// The vote-once rule is enforced per session: voted ids are remembered
/// here, matching the original single-visit behavior.
pub struct KaraokeUseCase {
    store: Arc<dyn CommunityStore>,
    voted: HashSet<String>,
}

impl KaraokeUseCase {
    pub fn new(store: Arc<dyn CommunityStore>) -> Self {
        Self {
            store,
            voted: HashSet::new(),
        }
    }

    /// List submissions ordered by votes descending.
    pub async fn ranking(&self, limit: usize) -> Result<Vec<KaraokeSubmission>, KaraokeError> {
        Ok(self.store.list_karaoke(limit).await?)
    }

    /// Validate, upload and register a new recording.
    pub async fn submit(&self, recording: NewRecording) -> Result<(), KaraokeError> {
        if recording.bytes.is_empty() {
            return Err(DomainError::MissingField("audio").into());
        }
        if recording.bytes.len() > MAX_RECORDING_BYTES {
            return Err(DomainError::RecordingTooLarge {
                size: recording.bytes.len(),
                max: MAX_RECORDING_BYTES,
            }
            .into());
        }

        // Timestamped object name so uploads never collide
        let object_name = format!(
            "{}-{}",
            chrono::Utc::now().timestamp_millis(),
            sanitize_object_name(&recording.file_name)
        );

        let audio_url = self
            .store
            .upload_recording(&object_name, recording.bytes)
            .await?;

        let submission = NewKaraokeSubmission::new(
            &recording.user_name,
            &recording.user_email,
            recording.song_id,
            &recording.song_title,
            audio_url,
        )?;
        self.store.insert_karaoke(&submission).await?;

        info!(
            "Karaoke submission stored for '{}' ({})",
            submission.user_name, submission.song_title
        );
        Ok(())
    }

    /// Fetch one submission by id, wherever it sits in the ranking.
    pub async fn submission(&self, id: &str) -> Result<KaraokeSubmission, KaraokeError> {
        self.store
            .get_karaoke(id)
            .await?
            .ok_or_else(|| KaraokeError::UnknownSubmission(id.to_string()))
    }

    /// Vote for a submission. One vote per submission per session.
    pub async fn vote(&mut self, id: &str) -> Result<(), KaraokeError> {
        if self.voted.contains(id) {
            warn!("Duplicate vote for {id} rejected");
            return Err(DomainError::AlreadyVoted.into());
        }

        let current = self.submission(id).await?;
        self.store.set_karaoke_votes(id, current.votes + 1).await?;
        self.voted.insert(id.to_string());
        Ok(())
    }

    pub fn has_voted(&self, id: &str) -> bool {
        self.voted.contains(id)
    }
}
