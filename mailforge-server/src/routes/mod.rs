//! HTTP surface
//!
//! Thin wrappers over the core renderer's collaborators: export/inline,
//! test-send, shareable previews, response tracking, drafts/versions, and
//! comments. Validation errors are 400, unknown tokens 404, expired previews
//! 410, upstream failures 500 with the upstream message in `{error}`.

use axum::{
    extract::{Path, State},
    response::Html,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use mailforge_core::document::EmailDocument;

use crate::error::ApiError;
use crate::email::Email;
use crate::state::AppState;
use crate::store::DraftPatch;

/// Build the service router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/export", post(export))
        .route("/send-test", post(send_test))
        .route("/previews", post(create_preview))
        .route("/preview/{token}", get(open_preview))
        .route(
            "/preview/{token}/comments",
            get(list_comments).post(add_comment),
        )
        .route("/r/{token}/{block_id}/{value}", get(record_response))
        .route("/responses/{token}", get(response_tallies))
        .route("/drafts", post(create_draft))
        .route("/drafts/{id}", get(get_draft).put(update_draft))
        .route(
            "/drafts/{id}/versions",
            get(list_versions).post(create_version),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "ok": true, "timestamp": Utc::now().to_rfc3339() }))
}

#[derive(Debug, Deserialize)]
struct ExportRequest {
    html: Option<String>,
}

/// `POST /export`: inline the rendered HTML and measure it.
async fn export(
    State(state): State<AppState>,
    Json(request): Json<ExportRequest>,
) -> Result<Json<Value>, ApiError> {
    let html = request
        .html
        .filter(|h| !h.is_empty())
        .ok_or_else(|| ApiError::missing_field("html"))?;
    let exported = state.inliner.inline(&html)?;
    tracing::debug!(size_kb = exported.size_kb, clipped = exported.clipped, "export inlined");
    Ok(Json(serde_json::to_value(exported).map_err(|e| {
        ApiError::Upstream(e.to_string())
    })?))
}

#[derive(Debug, Deserialize)]
struct SendTestRequest {
    html: Option<String>,
    subject: Option<String>,
    to: Option<String>,
}

/// `POST /send-test`: inline, then dispatch through the delivery backend.
async fn send_test(
    State(state): State<AppState>,
    Json(request): Json<SendTestRequest>,
) -> Result<Json<Value>, ApiError> {
    let html = request
        .html
        .filter(|h| !h.is_empty())
        .ok_or_else(|| ApiError::missing_field("html"))?;
    let subject = request
        .subject
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::missing_field("subject"))?;
    let to = request
        .to
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::missing_field("to"))?;

    let exported = state.inliner.inline(&html)?;
    let from = if state.config.email.from_address.is_empty() {
        "mailforge@localhost".to_string()
    } else {
        state.config.email.from_address.clone()
    };
    let email = Email::new()
        .to(&to)
        .from(&from)
        .subject(&subject)
        .html(&exported.html);
    let id = state.sender.send(email).await?;
    Ok(Json(json!({ "id": id })))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreatePreviewRequest {
    subject: Option<String>,
    document: Option<EmailDocument>,
    ttl_secs: Option<i64>,
}

/// `POST /previews`: mint a shareable, time-limited preview token.
async fn create_preview(
    State(state): State<AppState>,
    Json(request): Json<CreatePreviewRequest>,
) -> Result<Json<Value>, ApiError> {
    let document = request
        .document
        .ok_or_else(|| ApiError::missing_field("document"))?;
    let subject = request.subject.unwrap_or_default();
    let ttl = request
        .ttl_secs
        .unwrap_or(state.config.previews.default_ttl_secs);
    let record = state.store.create_preview(&subject, document, ttl).await?;
    Ok(Json(json!({
        "token": record.token,
        "expiresAt": record.expires_at.to_rfc3339(),
    })))
}

/// `GET /preview/{token}`: the shared-preview payload. Opening counts a
/// view; an expired token is 410 and counts nothing.
async fn open_preview(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let record = state.store.open_preview(&token).await?;
    Ok(Json(json!({
        "email": {
            "subject": record.subject,
            "blocks": record.document.content,
        },
        "token": record.token,
    })))
}

/// `GET /r/{token}/{block_id}/{value}`: the target of every interactive
/// link in a sent email. Records the click and thanks the reader.
async fn record_response(
    State(state): State<AppState>,
    Path((token, block_id, value)): Path<(String, String, String)>,
) -> Result<Html<String>, ApiError> {
    state.store.record_response(&token, &block_id, &value).await?;
    tracing::info!(%token, %block_id, %value, "response recorded");
    Ok(Html(
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>Thanks!</title></head>\
         <body style=\"font-family: sans-serif; text-align: center; padding: 64px 16px;\">\
         <h1 style=\"font-size: 22px;\">Thanks for your response!</h1>\
         <p style=\"color: #6b7280;\">You can close this tab.</p>\
         </body></html>"
            .to_string(),
    ))
}

/// `GET /responses/{token}`: per-block response tallies.
async fn response_tallies(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let tallies = state.store.response_tallies(&token).await?;
    Ok(Json(json!({ "token": token, "tallies": tallies })))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddCommentRequest {
    author: Option<String>,
    body: Option<String>,
    block_id: Option<String>,
}

/// `POST /preview/{token}/comments`: leave a comment on a shared preview.
async fn add_comment(
    State(state): State<AppState>,
    Path(token): Path<String>,
    Json(request): Json<AddCommentRequest>,
) -> Result<Json<Value>, ApiError> {
    let author = request
        .author
        .filter(|a| !a.is_empty())
        .ok_or_else(|| ApiError::missing_field("author"))?;
    let body = request
        .body
        .filter(|b| !b.is_empty())
        .ok_or_else(|| ApiError::missing_field("body"))?;
    let comment = state
        .store
        .add_comment(&token, &author, &body, request.block_id)
        .await?;
    Ok(Json(serde_json::to_value(comment).map_err(|e| {
        ApiError::Upstream(e.to_string())
    })?))
}

/// `GET /preview/{token}/comments`: a preview's comment thread.
async fn list_comments(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let comments = state.store.list_comments(&token).await?;
    Ok(Json(json!({ "token": token, "comments": comments })))
}

#[derive(Debug, Deserialize)]
struct CreateDraftRequest {
    subject: Option<String>,
    document: Option<EmailDocument>,
}

/// `POST /drafts`: save a new draft.
async fn create_draft(
    State(state): State<AppState>,
    Json(request): Json<CreateDraftRequest>,
) -> Result<Json<Value>, ApiError> {
    let document = request
        .document
        .ok_or_else(|| ApiError::missing_field("document"))?;
    let subject = request.subject.unwrap_or_default();
    let draft = state.store.create_draft(&subject, document).await?;
    Ok(Json(serde_json::to_value(draft).map_err(|e| {
        ApiError::Upstream(e.to_string())
    })?))
}

/// `GET /drafts/{id}`: load a draft.
async fn get_draft(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let draft = state.store.get_draft(&id).await?;
    Ok(Json(serde_json::to_value(draft).map_err(|e| {
        ApiError::Upstream(e.to_string())
    })?))
}

/// `PUT /drafts/{id}`: apply a partial update.
async fn update_draft(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<DraftPatch>,
) -> Result<Json<Value>, ApiError> {
    let draft = state.store.update_draft(&id, patch).await?;
    Ok(Json(serde_json::to_value(draft).map_err(|e| {
        ApiError::Upstream(e.to_string())
    })?))
}

#[derive(Debug, Deserialize)]
struct CreateVersionRequest {
    label: Option<String>,
}

/// `POST /drafts/{id}/versions`: snapshot the draft's current document.
async fn create_version(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<CreateVersionRequest>,
) -> Result<Json<Value>, ApiError> {
    let label = request.label.unwrap_or_else(|| "snapshot".to_string());
    let version = state.store.create_version(&id, &label).await?;
    Ok(Json(serde_json::to_value(version).map_err(|e| {
        ApiError::Upstream(e.to_string())
    })?))
}

/// `GET /drafts/{id}/versions`: a draft's snapshots, newest first.
async fn list_versions(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let versions = state.store.list_versions(&id).await?;
    Ok(Json(json!({ "draftId": id, "versions": versions })))
}
