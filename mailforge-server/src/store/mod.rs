//! Collaboration store contract
//!
//! Drafts, version snapshots, preview tokens, block responses, and comments
//! live in a hosted relational store. That store is an external collaborator:
//! this module ships the contract ([`CollabStore`]) and the record shapes the
//! service round-trips through it, plus an in-memory reference backend
//! ([`MemoryStore`]) used in development and tests.
//!
//! Each document has exactly one editing session; the store never has to
//! reconcile concurrent mutations of the same draft.

pub mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use mailforge_core::document::EmailDocument;

/// Store failure classes.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The addressed record does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The addressed preview exists but its lifetime has passed.
    #[error("expired: {0}")]
    Expired(String),

    /// The backing store failed.
    #[error("store error: {0}")]
    Backend(String),
}

/// Draft lifecycle state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftStatus {
    /// Being edited.
    #[default]
    Draft,
    /// A test or real send has gone out.
    Sent,
    /// Kept for reference, hidden from the default list.
    Archived,
}

/// A saved draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    /// Stable id.
    pub id: String,
    /// Subject line.
    pub subject: String,
    /// Lifecycle state.
    pub status: DraftStatus,
    /// The document itself.
    pub document: EmailDocument,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last update time.
    pub updated_at: DateTime<Utc>,
}

/// Partial draft update; absent fields stay untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftPatch {
    /// New subject.
    pub subject: Option<String>,
    /// New lifecycle state.
    pub status: Option<DraftStatus>,
    /// New document.
    pub document: Option<EmailDocument>,
}

/// A named snapshot of a draft's document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionSnapshot {
    /// Stable id.
    pub id: String,
    /// The draft this snapshot belongs to.
    pub draft_id: String,
    /// Display label, e.g. `"before redesign"`.
    pub label: String,
    /// The document at snapshot time.
    pub document: EmailDocument,
    /// Snapshot time.
    pub created_at: DateTime<Utc>,
}

/// A shareable, time-limited preview of a rendered email.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewRecord {
    /// Opaque access token; also the export token for response links.
    pub token: String,
    /// Subject line shown on the preview page.
    pub subject: String,
    /// The document being previewed.
    pub document: EmailDocument,
    /// When access lapses.
    pub expires_at: DateTime<Utc>,
    /// How many times the preview has been opened.
    pub view_count: u64,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

/// One recorded response click.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockResponse {
    /// The export token the response came through.
    pub token: String,
    /// The block that was clicked.
    pub block_id: String,
    /// The clicked value (score, option index, `up`/`down`).
    pub value: String,
    /// Click time.
    pub created_at: DateTime<Utc>,
}

/// Aggregated responses for one block/value pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseTally {
    /// The block.
    pub block_id: String,
    /// The value.
    pub value: String,
    /// How many clicks landed on it.
    pub count: u64,
}

/// A comment left on a shared preview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Stable id.
    pub id: String,
    /// The preview the comment belongs to.
    pub token: String,
    /// Display name of the author.
    pub author: String,
    /// Comment text.
    pub body: String,
    /// Optional block anchor.
    pub block_id: Option<String>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

/// The persistence contract the service is written against.
#[async_trait]
pub trait CollabStore: Send + Sync {
    /// Create a draft.
    async fn create_draft(
        &self,
        subject: &str,
        document: EmailDocument,
    ) -> Result<Draft, StoreError>;

    /// Fetch a draft by id.
    async fn get_draft(&self, id: &str) -> Result<Draft, StoreError>;

    /// Apply a partial update to a draft.
    async fn update_draft(&self, id: &str, patch: DraftPatch) -> Result<Draft, StoreError>;

    /// Snapshot a draft's current document under a label.
    async fn create_version(
        &self,
        draft_id: &str,
        label: &str,
    ) -> Result<VersionSnapshot, StoreError>;

    /// List a draft's snapshots, newest first.
    async fn list_versions(&self, draft_id: &str) -> Result<Vec<VersionSnapshot>, StoreError>;

    /// Mint a preview token for a document.
    async fn create_preview(
        &self,
        subject: &str,
        document: EmailDocument,
        ttl_secs: i64,
    ) -> Result<PreviewRecord, StoreError>;

    /// Open a preview: 404 for unknown tokens, 410 for expired ones. The
    /// view counter increments only on a successful open.
    async fn open_preview(&self, token: &str) -> Result<PreviewRecord, StoreError>;

    /// Record a response click against a known token.
    async fn record_response(
        &self,
        token: &str,
        block_id: &str,
        value: &str,
    ) -> Result<(), StoreError>;

    /// Aggregate responses for a token.
    async fn response_tallies(&self, token: &str) -> Result<Vec<ResponseTally>, StoreError>;

    /// Add a comment to a preview.
    async fn add_comment(
        &self,
        token: &str,
        author: &str,
        body: &str,
        block_id: Option<String>,
    ) -> Result<Comment, StoreError>;

    /// List a preview's comments, oldest first.
    async fn list_comments(&self, token: &str) -> Result<Vec<Comment>, StoreError>;
}
