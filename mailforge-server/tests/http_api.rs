//! Integration tests for the HTTP surface
//!
//! Drives the router end to end with in-memory state: export, send-test,
//! previews, response tracking, drafts, versions, and comments.

use axum::{body::Body, Router};
use http::{header, Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use mailforge_server::{routes::router, state::AppState};

fn app() -> Router {
    router(AppState::for_tests())
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = match body {
        Some(value) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn test_health() {
    let (status, body) = send(&app(), Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_export_requires_html() {
    let (status, body) = send(&app(), Method::POST, "/export", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("html"));
}

#[tokio::test]
async fn test_export_inlines_and_measures() {
    let html = "<html><head><style>p { color: #ff0000; }</style></head>\
                <body><p>Hello</p></body></html>";
    let (status, body) = send(
        &app(),
        Method::POST,
        "/export",
        Some(json!({ "html": html })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["html"].as_str().unwrap().contains("<p style="));
    assert!(body["sizeKB"].is_number());
    assert_eq!(body["clipped"], false);
}

#[tokio::test]
async fn test_export_flags_oversized_payloads() {
    let filler = "x".repeat(110 * 1024);
    let html = format!("<html><body><p>{filler}</p></body></html>");
    let (status, body) = send(
        &app(),
        Method::POST,
        "/export",
        Some(json!({ "html": html })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["clipped"], true);
}

#[tokio::test]
async fn test_send_test_requires_every_field() {
    for body in [
        json!({ "subject": "s", "to": "a@b.c" }),
        json!({ "html": "<p>x</p>", "to": "a@b.c" }),
        json!({ "html": "<p>x</p>", "subject": "s" }),
    ] {
        let (status, reply) = send(&app(), Method::POST, "/send-test", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(reply["error"].is_string());
    }
}

#[tokio::test]
async fn test_send_test_dispatches_and_returns_id() {
    let (status, body) = send(
        &app(),
        Method::POST,
        "/send-test",
        Some(json!({
            "html": "<html><body><p>Test</p></body></html>",
            "subject": "Release notes preview",
            "to": "reviewer@example.com"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["id"].as_str().unwrap().starts_with("console-"));
}

#[tokio::test]
async fn test_preview_round_trip() {
    let app = app();
    let (status, created) = send(
        &app,
        Method::POST,
        "/previews",
        Some(json!({ "subject": "April notes", "document": {} })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let token = created["token"].as_str().unwrap();
    assert!(created["expiresAt"].is_string());

    let (status, body) = send(&app, Method::GET, &format!("/preview/{token}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"]["subject"], "April notes");
    assert!(body["email"]["blocks"].is_array());
    assert_eq!(body["token"], token);
}

#[tokio::test]
async fn test_preview_unknown_token_is_404() {
    let (status, _) = send(&app(), Method::GET, "/preview/does-not-exist", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_preview_expired_token_is_410() {
    let app = app();
    let (_, created) = send(
        &app,
        Method::POST,
        "/previews",
        Some(json!({ "document": {}, "ttlSecs": -1 })),
    )
    .await;
    let token = created["token"].as_str().unwrap();

    let (status, body) = send(&app, Method::GET, &format!("/preview/{token}"), None).await;
    assert_eq!(status, StatusCode::GONE);
    assert!(body["error"].is_string());

    // Still gone on a second attempt; nothing was mutated by the first.
    let (status, _) = send(&app, Method::GET, &format!("/preview/{token}"), None).await;
    assert_eq!(status, StatusCode::GONE);
}

#[tokio::test]
async fn test_response_recording_and_tallies() {
    let app = app();
    let (_, created) = send(
        &app,
        Method::POST,
        "/previews",
        Some(json!({ "document": {} })),
    )
    .await;
    let token = created["token"].as_str().unwrap();

    for value in ["10", "10", "3"] {
        let request = Request::builder()
            .method(Method::GET)
            .uri(format!("/r/{token}/block-1/{value}"))
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let page = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(page.contains("Thanks for your response"));
    }

    let (status, body) = send(&app, Method::GET, &format!("/responses/{token}"), None).await;
    assert_eq!(status, StatusCode::OK);
    let tallies = body["tallies"].as_array().unwrap();
    assert_eq!(tallies.len(), 2);
    let ten = tallies.iter().find(|t| t["value"] == "10").unwrap();
    assert_eq!(ten["count"], 2);
}

#[tokio::test]
async fn test_response_recording_unknown_token_is_404() {
    let (status, _) = send(&app(), Method::GET, "/r/nope/block-1/5", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_comments_thread() {
    let app = app();
    let (_, created) = send(
        &app,
        Method::POST,
        "/previews",
        Some(json!({ "document": {} })),
    )
    .await;
    let token = created["token"].as_str().unwrap();
    let comments_uri = format!("/preview/{token}/comments");

    let (status, body) = send(
        &app,
        Method::POST,
        &comments_uri,
        Some(json!({ "body": "Missing the author" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("author"));

    let (status, comment) = send(
        &app,
        Method::POST,
        &comments_uri,
        Some(json!({ "author": "Dana", "body": "Love the hero copy", "blockId": "b1" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(comment["author"], "Dana");

    let (status, body) = send(&app, Method::GET, &comments_uri, None).await;
    assert_eq!(status, StatusCode::OK);
    let comments = body["comments"].as_array().unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0]["blockId"], "b1");
}

#[tokio::test]
async fn test_draft_lifecycle() {
    let app = app();
    let (status, draft) = send(
        &app,
        Method::POST,
        "/drafts",
        Some(json!({ "subject": "April notes", "document": {} })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = draft["id"].as_str().unwrap();
    assert_eq!(draft["status"], "draft");

    let (status, fetched) = send(&app, Method::GET, &format!("/drafts/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["subject"], "April notes");

    let (status, updated) = send(
        &app,
        Method::PUT,
        &format!("/drafts/{id}"),
        Some(json!({ "subject": "May notes", "status": "sent" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["subject"], "May notes");
    assert_eq!(updated["status"], "sent");

    let versions_uri = format!("/drafts/{id}/versions");
    let (status, version) = send(
        &app,
        Method::POST,
        &versions_uri,
        Some(json!({ "label": "before redesign" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(version["label"], "before redesign");

    let (status, body) = send(&app, Method::GET, &versions_uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["versions"].as_array().unwrap().len(), 1);

    let (status, _) = send(&app, Method::GET, "/drafts/missing", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_rendered_email_round_trips_through_export() {
    use mailforge_core::prelude::*;

    let mut doc = EmailDocument::default();
    doc.push_block(BlockKind::Hero);
    doc.push_block(BlockKind::FeatureList);
    doc.push_block(BlockKind::NpsRating);
    let html = render(&doc, &GlobalThemeSettings::default());

    let (status, body) = send(
        &app(),
        Method::POST,
        "/export",
        Some(json!({ "html": html })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["clipped"], false);
    let exported = body["html"].as_str().unwrap();
    assert!(exported.contains("What's new"));
}
