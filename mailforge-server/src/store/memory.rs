//! In-memory reference backend
//!
//! Holds every record in process memory behind `RwLock`ed maps. Development
//! and test default; the hosted store implements the same trait over its own
//! wire protocol.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use parking_lot::RwLock;
use rand::distributions::Alphanumeric;
use rand::Rng;
use uuid::Uuid;

use mailforge_core::document::EmailDocument;

use super::{
    BlockResponse, CollabStore, Comment, Draft, DraftPatch, PreviewRecord, ResponseTally,
    StoreError, VersionSnapshot,
};

/// Preview/export token length.
const TOKEN_LEN: usize = 22;

fn mint_token() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(TOKEN_LEN)
        .map(char::from)
        .collect()
}

/// In-memory [`CollabStore`] implementation.
#[derive(Default)]
pub struct MemoryStore {
    drafts: RwLock<HashMap<String, Draft>>,
    versions: RwLock<Vec<VersionSnapshot>>,
    previews: RwLock<HashMap<String, PreviewRecord>>,
    responses: RwLock<Vec<BlockResponse>>,
    comments: RwLock<Vec<Comment>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CollabStore for MemoryStore {
    async fn create_draft(
        &self,
        subject: &str,
        document: EmailDocument,
    ) -> Result<Draft, StoreError> {
        let now = Utc::now();
        let draft = Draft {
            id: Uuid::new_v4().to_string(),
            subject: subject.to_string(),
            status: super::DraftStatus::Draft,
            document,
            created_at: now,
            updated_at: now,
        };
        self.drafts.write().insert(draft.id.clone(), draft.clone());
        Ok(draft)
    }

    async fn get_draft(&self, id: &str) -> Result<Draft, StoreError> {
        self.drafts
            .read()
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("draft {id}")))
    }

    async fn update_draft(&self, id: &str, patch: DraftPatch) -> Result<Draft, StoreError> {
        let mut drafts = self.drafts.write();
        let draft = drafts
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(format!("draft {id}")))?;
        if let Some(subject) = patch.subject {
            draft.subject = subject;
        }
        if let Some(status) = patch.status {
            draft.status = status;
        }
        if let Some(document) = patch.document {
            draft.document = document;
        }
        draft.updated_at = Utc::now();
        Ok(draft.clone())
    }

    async fn create_version(
        &self,
        draft_id: &str,
        label: &str,
    ) -> Result<VersionSnapshot, StoreError> {
        let document = self.get_draft(draft_id).await?.document;
        let snapshot = VersionSnapshot {
            id: Uuid::new_v4().to_string(),
            draft_id: draft_id.to_string(),
            label: label.to_string(),
            document,
            created_at: Utc::now(),
        };
        self.versions.write().push(snapshot.clone());
        Ok(snapshot)
    }

    async fn list_versions(&self, draft_id: &str) -> Result<Vec<VersionSnapshot>, StoreError> {
        // Unknown drafts 404 rather than returning an empty history.
        self.get_draft(draft_id).await?;
        let mut versions: Vec<_> = self
            .versions
            .read()
            .iter()
            .filter(|v| v.draft_id == draft_id)
            .cloned()
            .collect();
        versions.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(versions)
    }

    async fn create_preview(
        &self,
        subject: &str,
        document: EmailDocument,
        ttl_secs: i64,
    ) -> Result<PreviewRecord, StoreError> {
        let now = Utc::now();
        let record = PreviewRecord {
            token: mint_token(),
            subject: subject.to_string(),
            document,
            expires_at: now + Duration::seconds(ttl_secs),
            view_count: 0,
            created_at: now,
        };
        self.previews
            .write()
            .insert(record.token.clone(), record.clone());
        Ok(record)
    }

    async fn open_preview(&self, token: &str) -> Result<PreviewRecord, StoreError> {
        let mut previews = self.previews.write();
        let record = previews
            .get_mut(token)
            .ok_or_else(|| StoreError::NotFound(format!("preview {token}")))?;
        if record.expires_at <= Utc::now() {
            // Expired previews must not count views.
            return Err(StoreError::Expired(format!("preview {token}")));
        }
        record.view_count += 1;
        Ok(record.clone())
    }

    async fn record_response(
        &self,
        token: &str,
        block_id: &str,
        value: &str,
    ) -> Result<(), StoreError> {
        // Response links outlive preview expiry; only existence is checked.
        if !self.previews.read().contains_key(token) {
            return Err(StoreError::NotFound(format!("preview {token}")));
        }
        self.responses.write().push(BlockResponse {
            token: token.to_string(),
            block_id: block_id.to_string(),
            value: value.to_string(),
            created_at: Utc::now(),
        });
        Ok(())
    }

    async fn response_tallies(&self, token: &str) -> Result<Vec<ResponseTally>, StoreError> {
        if !self.previews.read().contains_key(token) {
            return Err(StoreError::NotFound(format!("preview {token}")));
        }
        let mut counts: HashMap<(String, String), u64> = HashMap::new();
        for response in self.responses.read().iter().filter(|r| r.token == token) {
            *counts
                .entry((response.block_id.clone(), response.value.clone()))
                .or_default() += 1;
        }
        let mut tallies: Vec<_> = counts
            .into_iter()
            .map(|((block_id, value), count)| ResponseTally {
                block_id,
                value,
                count,
            })
            .collect();
        tallies.sort_by(|a, b| (&a.block_id, &a.value).cmp(&(&b.block_id, &b.value)));
        Ok(tallies)
    }

    async fn add_comment(
        &self,
        token: &str,
        author: &str,
        body: &str,
        block_id: Option<String>,
    ) -> Result<Comment, StoreError> {
        if !self.previews.read().contains_key(token) {
            return Err(StoreError::NotFound(format!("preview {token}")));
        }
        let comment = Comment {
            id: Uuid::new_v4().to_string(),
            token: token.to_string(),
            author: author.to_string(),
            body: body.to_string(),
            block_id,
            created_at: Utc::now(),
        };
        self.comments.write().push(comment.clone());
        Ok(comment)
    }

    async fn list_comments(&self, token: &str) -> Result<Vec<Comment>, StoreError> {
        if !self.previews.read().contains_key(token) {
            return Err(StoreError::NotFound(format!("preview {token}")));
        }
        Ok(self
            .comments
            .read()
            .iter()
            .filter(|c| c.token == token)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::DraftStatus;

    #[tokio::test]
    async fn test_draft_crud() {
        let store = MemoryStore::new();
        let draft = store
            .create_draft("April notes", EmailDocument::default())
            .await
            .unwrap();
        assert_eq!(draft.status, DraftStatus::Draft);

        let fetched = store.get_draft(&draft.id).await.unwrap();
        assert_eq!(fetched, draft);

        let updated = store
            .update_draft(
                &draft.id,
                DraftPatch {
                    subject: Some("May notes".to_string()),
                    ..DraftPatch::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.subject, "May notes");
        assert!(updated.updated_at >= draft.updated_at);

        assert!(matches!(
            store.get_draft("missing").await,
            Err(StoreError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_versions_snapshot_current_document() {
        let store = MemoryStore::new();
        let mut document = EmailDocument::default();
        document.header.title = "v1".to_string();
        let draft = store.create_draft("notes", document).await.unwrap();

        store.create_version(&draft.id, "first").await.unwrap();

        let mut updated_doc = draft.document.clone();
        updated_doc.header.title = "v2".to_string();
        store
            .update_draft(
                &draft.id,
                DraftPatch {
                    document: Some(updated_doc),
                    ..DraftPatch::default()
                },
            )
            .await
            .unwrap();
        store.create_version(&draft.id, "second").await.unwrap();

        let versions = store.list_versions(&draft.id).await.unwrap();
        assert_eq!(versions.len(), 2);
        // Newest first.
        assert_eq!(versions[0].label, "second");
        assert_eq!(versions[0].document.header.title, "v2");
        assert_eq!(versions[1].document.header.title, "v1");
    }

    #[tokio::test]
    async fn test_preview_open_counts_views() {
        let store = MemoryStore::new();
        let preview = store
            .create_preview("notes", EmailDocument::default(), 3600)
            .await
            .unwrap();

        let first = store.open_preview(&preview.token).await.unwrap();
        assert_eq!(first.view_count, 1);
        let second = store.open_preview(&preview.token).await.unwrap();
        assert_eq!(second.view_count, 2);
    }

    #[tokio::test]
    async fn test_expired_preview_never_increments() {
        let store = MemoryStore::new();
        let preview = store
            .create_preview("notes", EmailDocument::default(), -1)
            .await
            .unwrap();

        assert!(matches!(
            store.open_preview(&preview.token).await,
            Err(StoreError::Expired(_))
        ));
        // The stored record stays untouched.
        assert_eq!(store.previews.read()[&preview.token].view_count, 0);
    }

    #[tokio::test]
    async fn test_unknown_preview_is_not_found() {
        let store = MemoryStore::new();
        assert!(matches!(
            store.open_preview("nope").await,
            Err(StoreError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_response_tallies_aggregate() {
        let store = MemoryStore::new();
        let preview = store
            .create_preview("notes", EmailDocument::default(), 3600)
            .await
            .unwrap();

        store
            .record_response(&preview.token, "b1", "10")
            .await
            .unwrap();
        store
            .record_response(&preview.token, "b1", "10")
            .await
            .unwrap();
        store
            .record_response(&preview.token, "b1", "3")
            .await
            .unwrap();

        let tallies = store.response_tallies(&preview.token).await.unwrap();
        assert_eq!(tallies.len(), 2);
        let ten = tallies.iter().find(|t| t.value == "10").unwrap();
        assert_eq!(ten.count, 2);
    }

    #[tokio::test]
    async fn test_responses_survive_expiry() {
        let store = MemoryStore::new();
        let preview = store
            .create_preview("notes", EmailDocument::default(), -1)
            .await
            .unwrap();
        // Emails outlive preview links; clicks still record.
        store
            .record_response(&preview.token, "b1", "up")
            .await
            .unwrap();
        assert_eq!(
            store.response_tallies(&preview.token).await.unwrap().len(),
            1
        );
    }

    #[tokio::test]
    async fn test_comments_round_trip() {
        let store = MemoryStore::new();
        let preview = store
            .create_preview("notes", EmailDocument::default(), 3600)
            .await
            .unwrap();

        store
            .add_comment(&preview.token, "Dana", "Love the hero copy", None)
            .await
            .unwrap();
        store
            .add_comment(
                &preview.token,
                "Sam",
                "Typo in the second bullet",
                Some("b2".to_string()),
            )
            .await
            .unwrap();

        let comments = store.list_comments(&preview.token).await.unwrap();
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0].author, "Dana");
        assert_eq!(comments[1].block_id.as_deref(), Some("b2"));
    }

    #[test]
    fn test_tokens_are_url_safe() {
        let token = mint_token();
        assert_eq!(token.len(), TOKEN_LEN);
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
    }
}
