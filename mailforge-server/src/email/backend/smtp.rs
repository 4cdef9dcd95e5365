//! SMTP backend
//!
//! Sends test emails through an SMTP relay using the `lettre` crate with
//! STARTTLS.

use async_trait::async_trait;
use lettre::{
    message::{header, Mailbox, MultiPart, SinglePart},
    transport::smtp::{
        authentication::Credentials,
        client::{Tls, TlsParameters},
    },
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use uuid::Uuid;

use crate::config::SmtpSettings;
use crate::email::{Email, EmailError, EmailSender};

/// SMTP email backend.
pub struct SmtpBackend {
    settings: SmtpSettings,
}

impl SmtpBackend {
    /// Create a backend from relay settings.
    #[must_use]
    pub const fn new(settings: SmtpSettings) -> Self {
        Self { settings }
    }

    /// Build a lettre message from an [`Email`].
    fn build_message(email: &Email) -> Result<Message, EmailError> {
        email.validate()?;

        let from_addr = email.from.as_ref().ok_or(EmailError::NoSender)?;
        let from: Mailbox = from_addr
            .parse()
            .map_err(|_| EmailError::InvalidAddress(from_addr.clone()))?;
        let mut builder = Message::builder().from(from);

        for to_addr in &email.to {
            let to: Mailbox = to_addr
                .parse()
                .map_err(|_| EmailError::InvalidAddress(to_addr.clone()))?;
            builder = builder.to(to);
        }
        if let Some(reply_to_addr) = &email.reply_to {
            let reply_to: Mailbox = reply_to_addr
                .parse()
                .map_err(|_| EmailError::InvalidAddress(reply_to_addr.clone()))?;
            builder = builder.reply_to(reply_to);
        }

        let subject = email.subject.as_ref().ok_or(EmailError::NoSubject)?;
        builder = builder.subject(subject);

        let message = if let (Some(html), Some(text)) = (&email.html, &email.text) {
            builder
                .multipart(
                    MultiPart::alternative()
                        .singlepart(
                            SinglePart::builder()
                                .header(header::ContentType::TEXT_PLAIN)
                                .body(text.clone()),
                        )
                        .singlepart(
                            SinglePart::builder()
                                .header(header::ContentType::TEXT_HTML)
                                .body(html.clone()),
                        ),
                )
                .map_err(|e| EmailError::smtp(e.to_string()))?
        } else if let Some(html) = &email.html {
            builder
                .header(header::ContentType::TEXT_HTML)
                .body(html.clone())
                .map_err(|e| EmailError::smtp(e.to_string()))?
        } else if let Some(text) = &email.text {
            builder
                .header(header::ContentType::TEXT_PLAIN)
                .body(text.clone())
                .map_err(|e| EmailError::smtp(e.to_string()))?
        } else {
            return Err(EmailError::NoContent);
        };

        Ok(message)
    }

    fn create_transport(&self) -> Result<AsyncSmtpTransport<Tokio1Executor>, EmailError> {
        let tls_parameters = TlsParameters::new(self.settings.host.clone())
            .map_err(|e| EmailError::smtp(format!("TLS parameters error: {e}")))?;
        let mut transport =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.settings.host)
                .map_err(|e| EmailError::smtp(e.to_string()))?
                .tls(Tls::Required(tls_parameters))
                .port(self.settings.port);
        if !self.settings.username.is_empty() {
            transport = transport.credentials(Credentials::new(
                self.settings.username.clone(),
                self.settings.password.clone(),
            ));
        }
        Ok(transport.build())
    }
}

#[async_trait]
impl EmailSender for SmtpBackend {
    async fn send(&self, email: Email) -> Result<String, EmailError> {
        let message = Self::build_message(&email)?;
        let transport = self.create_transport()?;

        let response = transport
            .send(message)
            .await
            .map_err(|e| EmailError::smtp(e.to_string()))?;
        // Relays do not hand back a stable id; synthesize one and keep the
        // server reply in the logs.
        let id = format!("smtp-{}", Uuid::new_v4());
        tracing::info!(id = %id, code = %response.code(), "SMTP email accepted");
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_email() -> Email {
        Email::new()
            .to("user@example.com")
            .from("updates@example.com")
            .subject("Test")
            .html("<p>Hi</p>")
            .text("Hi")
    }

    #[test]
    fn test_build_message_multipart() {
        let message = SmtpBackend::build_message(&valid_email()).expect("build");
        let raw = String::from_utf8(message.formatted()).expect("utf8");
        assert!(raw.contains("multipart/alternative"));
        assert!(raw.contains("text/html"));
        assert!(raw.contains("text/plain"));
    }

    #[test]
    fn test_build_message_rejects_bad_address() {
        let email = Email::new()
            .to("not an address")
            .from("updates@example.com")
            .subject("Test")
            .text("hi");
        assert!(matches!(
            SmtpBackend::build_message(&email),
            Err(EmailError::InvalidAddress(_))
        ));
    }

    #[test]
    fn test_build_message_requires_content() {
        let email = Email::new()
            .to("user@example.com")
            .from("updates@example.com")
            .subject("Test");
        assert!(matches!(
            SmtpBackend::build_message(&email),
            Err(EmailError::NoContent)
        ));
    }
}
