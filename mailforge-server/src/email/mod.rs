//! Email delivery
//!
//! Test sends go through the [`EmailSender`] trait so the route never knows
//! which backend is wired in:
//!
//! - [`SmtpBackend`]: SMTP relay via `lettre`
//! - [`ApiBackend`]: hosted delivery HTTP API via `reqwest`
//! - [`ConsoleBackend`]: logs the message; development default
//!
//! Every backend returns a provider message id. Delivery is not guaranteed,
//! deduplicated, or rate-limited here; a failed send surfaces once as an
//! error and is not retried.

mod backend;
mod error;
mod message;

pub use backend::{api::ApiBackend, console::ConsoleBackend, smtp::SmtpBackend};
pub use error::EmailError;
pub use message::Email;

use async_trait::async_trait;

/// Trait for sending emails, implemented by all backends.
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Send an email, returning the provider's message id.
    ///
    /// # Errors
    ///
    /// Returns [`EmailError`] when the message is invalid or the backend
    /// fails to dispatch it.
    async fn send(&self, email: Email) -> Result<String, EmailError>;
}
