//! Console backend for development
//!
//! Logs emails instead of sending them; no SMTP relay or API key needed to
//! exercise the test-send path locally.

use async_trait::async_trait;
use uuid::Uuid;

use crate::email::{Email, EmailError, EmailSender};

/// Console email backend; the development default.
#[derive(Debug, Clone, Default)]
pub struct ConsoleBackend {
    verbose: bool,
}

impl ConsoleBackend {
    /// Create a new console backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a verbose console backend that logs full bodies.
    #[must_use]
    pub const fn verbose() -> Self {
        Self { verbose: true }
    }
}

#[async_trait]
impl EmailSender for ConsoleBackend {
    async fn send(&self, email: Email) -> Result<String, EmailError> {
        email.validate()?;

        let id = format!("console-{}", Uuid::new_v4());
        tracing::info!(
            id = %id,
            from = ?email.from,
            to = ?email.to,
            subject = ?email.subject,
            has_html = email.html.is_some(),
            has_text = email.text.is_some(),
            "console email sent"
        );
        if self.verbose {
            if let Some(html) = &email.html {
                tracing::debug!(bytes = html.len(), %html, "email HTML body");
            }
            if let Some(text) = &email.text {
                tracing::debug!(%text, "email text body");
            }
        }
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_send_returns_message_id() {
        let backend = ConsoleBackend::new();
        let email = Email::new()
            .to("user@example.com")
            .from("updates@example.com")
            .subject("Test")
            .text("hello");
        let id = backend.send(email).await.expect("send");
        assert!(id.starts_with("console-"));
    }

    #[tokio::test]
    async fn test_send_rejects_invalid_email() {
        let backend = ConsoleBackend::verbose();
        let email = Email::new().subject("no recipients");
        assert!(matches!(
            backend.send(email).await,
            Err(EmailError::NoRecipients)
        ));
    }
}
