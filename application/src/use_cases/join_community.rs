//! Community signup and contest participation.

use crate::ports::community_store::{CommunityStore, StoreError};
use fans_domain::{ContestEntry, DomainError, Signup};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors that can occur when joining the community.
#[derive(Error, Debug)]
pub enum JoinCommunityError {
    #[error(transparent)]
    Validation(#[from] DomainError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Signup and contest entry flow.
pub struct JoinCommunityUseCase {
    store: Arc<dyn CommunityStore>,
}

impl JoinCommunityUseCase {
    pub fn new(store: Arc<dyn CommunityStore>) -> Self {
        Self { store }
    }

    /// Validate and persist a newsletter signup.
    pub async fn signup(&self, name: &str, email: &str) -> Result<Signup, JoinCommunityError> {
        let signup = Signup::new(name, email)?;
        self.store.insert_signup(&signup).await?;
        info!("Signup stored for {}", signup.email);
        Ok(signup)
    }

    /// Validate and persist a contest entry.
    pub async fn enter_contest(
        &self,
        contest_id: u32,
        name: &str,
        email: &str,
    ) -> Result<ContestEntry, JoinCommunityError> {
        let entry = ContestEntry::new(contest_id, name, email)?;
        self.store.insert_contest_entry(&entry).await?;
        info!("Contest entry stored for contest {contest_id}");
        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use fans_domain::{KaraokeSubmission, NewKaraokeSubmission};
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingStore {
        signups: Mutex<Vec<Signup>>,
        entries: Mutex<Vec<ContestEntry>>,
    }

    #[async_trait]
    impl CommunityStore for RecordingStore {
        async fn insert_signup(&self, signup: &Signup) -> Result<(), StoreError> {
            self.signups.lock().unwrap().push(signup.clone());
            Ok(())
        }

        async fn insert_contest_entry(&self, entry: &ContestEntry) -> Result<(), StoreError> {
            self.entries.lock().unwrap().push(entry.clone());
            Ok(())
        }

        async fn upload_recording(
            &self,
            _object_name: &str,
            _bytes: Vec<u8>,
        ) -> Result<String, StoreError> {
            unimplemented!()
        }

        async fn insert_karaoke(
            &self,
            _submission: &NewKaraokeSubmission,
        ) -> Result<(), StoreError> {
            unimplemented!()
        }

        async fn list_karaoke(
            &self,
            _limit: usize,
        ) -> Result<Vec<KaraokeSubmission>, StoreError> {
            unimplemented!()
        }

        async fn get_karaoke(
            &self,
            _id: &str,
        ) -> Result<Option<KaraokeSubmission>, StoreError> {
            unimplemented!()
        }

        async fn set_karaoke_votes(&self, _id: &str, _votes: u32) -> Result<(), StoreError> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn signup_normalizes_and_persists() {
        let store = Arc::new(RecordingStore::default());
        let use_case = JoinCommunityUseCase::new(store.clone());

        let signup = use_case.signup(" Once ", "ONCE@Hawkins.es").await.unwrap();
        assert_eq!(signup.email, "once@hawkins.es");
        assert_eq!(store.signups.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn invalid_email_never_reaches_store() {
        let store = Arc::new(RecordingStore::default());
        let use_case = JoinCommunityUseCase::new(store.clone());

        let err = use_case.signup("Once", "sin-arroba").await.unwrap_err();
        assert!(matches!(err, JoinCommunityError::Validation(_)));
        assert!(store.signups.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn contest_entry_is_persisted() {
        let store = Arc::new(RecordingStore::default());
        let use_case = JoinCommunityUseCase::new(store.clone());

        use_case
            .enter_contest(2, "Will", "will@hawkins.es")
            .await
            .unwrap();
        assert_eq!(store.entries.lock().unwrap()[0].contest_id, 2);
    }
}
