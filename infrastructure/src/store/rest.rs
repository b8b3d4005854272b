//! REST adapter for the community datastore port.
//!
//! Talks to a PostgREST-style API: table rows live under
//! `/rest/v1/{table}`, objects under `/storage/v1/object/{bucket}`.
//! Every request carries the anonymous key both as `apikey` header and
//! bearer token.

use crate::config::StoreConfig;
use async_trait::async_trait;
use fans_application::ports::community_store::{CommunityStore, StoreError};
use fans_domain::{ContestEntry, KaraokeSubmission, NewKaraokeSubmission, Signup};
use serde::Serialize;
use tracing::debug;

const SIGNUPS_TABLE: &str = "signups";
const CONTEST_ENTRIES_TABLE: &str = "contest_entries";
const KARAOKE_TABLE: &str = "karaoke_submissions";

/// Datastore adapter over the REST and storage APIs.
pub struct RestCommunityStore {
    client: reqwest::Client,
    config: StoreConfig,
}

impl RestCommunityStore {
    pub fn new(client: reqwest::Client, config: StoreConfig) -> Self {
        Self { client, config }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{table}", self.config.base_url.trim_end_matches('/'))
    }

    fn object_url(&self, object_name: &str) -> String {
        format!(
            "{}/storage/v1/object/{}/{object_name}",
            self.config.base_url.trim_end_matches('/'),
            self.config.recordings_bucket,
        )
    }

    /// Public download URL of an uploaded object.
    fn public_url(&self, object_name: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{object_name}",
            self.config.base_url.trim_end_matches('/'),
            self.config.recordings_bucket,
        )
    }

    fn authed(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("apikey", &self.config.anon_key)
            .bearer_auth(&self.config.anon_key)
    }

    async fn insert_row<T: Serialize + Sync>(
        &self,
        table: &str,
        row: &T,
    ) -> Result<(), StoreError> {
        let response = self
            .authed(self.client.post(self.table_url(table)))
            .header("Prefer", "return=minimal")
            .json(row)
            .send()
            .await
            .map_err(|e| StoreError::ConnectionError(e.to_string()))?;
        check_status(response).await?;
        Ok(())
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().await.unwrap_or_default();
    Err(StoreError::RequestFailed {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl CommunityStore for RestCommunityStore {
    async fn insert_signup(&self, signup: &Signup) -> Result<(), StoreError> {
        debug!("Inserting signup for {}", signup.email);
        self.insert_row(SIGNUPS_TABLE, signup).await
    }

    async fn insert_contest_entry(&self, entry: &ContestEntry) -> Result<(), StoreError> {
        debug!("Inserting contest entry for contest {}", entry.contest_id);
        self.insert_row(CONTEST_ENTRIES_TABLE, entry).await
    }

    async fn upload_recording(
        &self,
        object_name: &str,
        bytes: Vec<u8>,
    ) -> Result<String, StoreError> {
        debug!("Uploading recording {object_name} ({} bytes)", bytes.len());
        let response = self
            .authed(self.client.post(self.object_url(object_name)))
            .header("Content-Type", "application/octet-stream")
            .body(bytes)
            .send()
            .await
            .map_err(|e| StoreError::ConnectionError(e.to_string()))?;
        check_status(response).await?;
        Ok(self.public_url(object_name))
    }

    async fn insert_karaoke(&self, submission: &NewKaraokeSubmission) -> Result<(), StoreError> {
        debug!("Inserting karaoke submission {:?}", submission.song_title);
        self.insert_row(KARAOKE_TABLE, submission).await
    }

    async fn list_karaoke(&self, limit: usize) -> Result<Vec<KaraokeSubmission>, StoreError> {
        let response = self
            .authed(self.client.get(self.table_url(KARAOKE_TABLE)))
            .query(&[
                ("select", "*".to_string()),
                ("order", "votes.desc".to_string()),
                ("limit", limit.to_string()),
            ])
            .send()
            .await
            .map_err(|e| StoreError::ConnectionError(e.to_string()))?;
        let response = check_status(response).await?;
        response
            .json()
            .await
            .map_err(|e| StoreError::UnexpectedResponse(e.to_string()))
    }

    async fn get_karaoke(&self, id: &str) -> Result<Option<KaraokeSubmission>, StoreError> {
        let response = self
            .authed(self.client.get(self.table_url(KARAOKE_TABLE)))
            .query(&[("select", "*".to_string()), ("id", format!("eq.{id}"))])
            .send()
            .await
            .map_err(|e| StoreError::ConnectionError(e.to_string()))?;
        let response = check_status(response).await?;
        let rows: Vec<KaraokeSubmission> = response
            .json()
            .await
            .map_err(|e| StoreError::UnexpectedResponse(e.to_string()))?;
        Ok(rows.into_iter().next())
    }

    async fn set_karaoke_votes(&self, id: &str, votes: u32) -> Result<(), StoreError> {
        debug!("Setting votes of {id} to {votes}");
        let response = self
            .authed(self.client.patch(self.table_url(KARAOKE_TABLE)))
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", "return=minimal")
            .json(&serde_json::json!({ "votes": votes }))
            .send()
            .await
            .map_err(|e| StoreError::ConnectionError(e.to_string()))?;
        check_status(response).await?;
        Ok(())
    }
}
