//! Email message builder

use serde::{Deserialize, Serialize};

use super::EmailError;

/// An email message, built fluently:
///
/// ```rust
/// use mailforge_server::email::Email;
///
/// let email = Email::new()
///     .to("user@example.com")
///     .from("updates@example.com")
///     .subject("Release notes preview")
///     .html("<h1>Hello</h1>");
/// assert!(email.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Email {
    /// Recipients (To).
    pub to: Vec<String>,
    /// Sender (From).
    pub from: Option<String>,
    /// Reply-To address.
    pub reply_to: Option<String>,
    /// Subject line.
    pub subject: Option<String>,
    /// Plain text body.
    pub text: Option<String>,
    /// HTML body.
    pub html: Option<String>,
}

impl Email {
    /// Create a new empty email.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a recipient.
    #[must_use]
    pub fn to(mut self, address: &str) -> Self {
        self.to.push(address.to_string());
        self
    }

    /// Set the sender.
    #[must_use]
    pub fn from(mut self, address: &str) -> Self {
        self.from = Some(address.to_string());
        self
    }

    /// Set the reply-to address.
    #[must_use]
    pub fn reply_to(mut self, address: &str) -> Self {
        self.reply_to = Some(address.to_string());
        self
    }

    /// Set the subject.
    #[must_use]
    pub fn subject(mut self, subject: &str) -> Self {
        self.subject = Some(subject.to_string());
        self
    }

    /// Set the plain text body.
    #[must_use]
    pub fn text(mut self, body: &str) -> Self {
        self.text = Some(body.to_string());
        self
    }

    /// Set the HTML body.
    #[must_use]
    pub fn html(mut self, body: &str) -> Self {
        self.html = Some(body.to_string());
        self
    }

    /// Check that all required fields are present.
    ///
    /// # Errors
    ///
    /// Returns an error when recipients, sender, subject, or content are
    /// missing.
    pub fn validate(&self) -> Result<(), EmailError> {
        if self.to.is_empty() {
            return Err(EmailError::NoRecipients);
        }
        if self.from.is_none() {
            return Err(EmailError::NoSender);
        }
        if self.subject.is_none() {
            return Err(EmailError::NoSubject);
        }
        if self.text.is_none() && self.html.is_none() {
            return Err(EmailError::NoContent);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_accumulates_fields() {
        let email = Email::new()
            .to("user@example.com")
            .from("updates@example.com")
            .subject("Test")
            .html("<p>Hi</p>");

        assert_eq!(email.to, vec!["user@example.com"]);
        assert_eq!(email.from.as_deref(), Some("updates@example.com"));
        assert_eq!(email.subject.as_deref(), Some("Test"));
        assert!(email.validate().is_ok());
    }

    #[test]
    fn test_validation_failures() {
        let no_recipients = Email::new().from("a@b.c").subject("s").text("t");
        assert!(matches!(
            no_recipients.validate(),
            Err(EmailError::NoRecipients)
        ));

        let no_sender = Email::new().to("a@b.c").subject("s").text("t");
        assert!(matches!(no_sender.validate(), Err(EmailError::NoSender)));

        let no_subject = Email::new().to("a@b.c").from("b@c.d").text("t");
        assert!(matches!(no_subject.validate(), Err(EmailError::NoSubject)));

        let no_content = Email::new().to("a@b.c").from("b@c.d").subject("s");
        assert!(matches!(no_content.validate(), Err(EmailError::NoContent)));
    }
}
