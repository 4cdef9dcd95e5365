//! Application state
//!
//! One cloneable handle carrying the configuration and the three
//! collaborators every handler reaches for: the store, the email sender, and
//! the inliner. All are trait objects so tests and deployments can swap
//! backends without touching the routes.

use std::sync::Arc;

use crate::config::{EmailBackendKind, ServerConfig};
use crate::email::{ApiBackend, ConsoleBackend, EmailSender, SmtpBackend};
use crate::export::{CssInlineExporter, Inliner};
use crate::store::{CollabStore, MemoryStore};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration.
    pub config: Arc<ServerConfig>,
    /// Collaboration store.
    pub store: Arc<dyn CollabStore>,
    /// Email delivery backend.
    pub sender: Arc<dyn EmailSender>,
    /// CSS-inlining exporter.
    pub inliner: Arc<dyn Inliner>,
}

impl AppState {
    /// Build state from configuration, wiring the configured email backend.
    ///
    /// # Errors
    ///
    /// Returns an error when the configured backend is missing credentials.
    pub fn from_config(config: ServerConfig) -> anyhow::Result<Self> {
        let sender: Arc<dyn EmailSender> = match config.email.backend {
            EmailBackendKind::Console => Arc::new(ConsoleBackend::new()),
            EmailBackendKind::Smtp => Arc::new(SmtpBackend::new(config.email.smtp.clone())),
            EmailBackendKind::Api => Arc::new(ApiBackend::new(config.email.api.clone())?),
        };
        let inliner = Arc::new(CssInlineExporter::new(config.export.clip_threshold_bytes));
        Ok(Self {
            config: Arc::new(config),
            store: Arc::new(MemoryStore::new()),
            sender,
            inliner,
        })
    }

    /// State with default configuration and the console sender; used by
    /// tests and local development.
    ///
    /// # Panics
    ///
    /// Never panics; the console backend needs no credentials.
    #[must_use]
    pub fn for_tests() -> Self {
        Self::from_config(ServerConfig::default()).expect("console backend")
    }
}
