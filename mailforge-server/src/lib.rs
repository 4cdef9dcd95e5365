//! mailforge-server: the HTTP service around `mailforge-core`
//!
//! Thin wrappers over the core renderer's collaborators:
//!
//! - `POST /export` runs HTML through the CSS inliner and flags payloads
//!   past the Gmail clipping threshold
//! - `POST /send-test` inlines and dispatches through the configured email
//!   backend (console, SMTP, or a hosted delivery API)
//! - `POST /previews` / `GET /preview/{token}` mint and serve shareable,
//!   time-limited previews with view counting
//! - `GET /r/{token}/{block_id}/{value}` records interactive-block responses
//! - drafts, version snapshots, and comments round-trip through the
//!   [`store::CollabStore`] contract
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use mailforge_server::{routes, state::AppState, config::ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     mailforge_server::observability::init()?;
//!     let config = ServerConfig::load()?;
//!     let addr = format!("{}:{}", config.service.host, config.service.port);
//!     let app = routes::router(AppState::from_config(config)?);
//!     let listener = tokio::net::TcpListener::bind(&addr).await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod email;
pub mod error;
pub mod export;
pub mod observability;
pub mod routes;
pub mod state;
pub mod store;
