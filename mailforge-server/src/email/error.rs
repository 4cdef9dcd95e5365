//! Email error types

use thiserror::Error;

/// Errors that can occur when building or sending an email.
#[derive(Debug, Error)]
pub enum EmailError {
    /// Email has no recipients.
    #[error("email must have at least one recipient")]
    NoRecipients,

    /// Email has no sender.
    #[error("email must have a from address")]
    NoSender,

    /// Email has no subject.
    #[error("email must have a subject")]
    NoSubject,

    /// Email has no body content.
    #[error("email must have either text or HTML content")]
    NoContent,

    /// Invalid email address format.
    #[error("invalid email address: {0}")]
    InvalidAddress(String),

    /// SMTP transport error.
    #[error("SMTP error: {0}")]
    Smtp(String),

    /// Delivery API error.
    #[error("delivery API error: {0}")]
    Api(String),

    /// Email configuration error.
    #[error("email configuration error: {0}")]
    Config(String),
}

impl EmailError {
    /// Create an SMTP error from a string message.
    #[must_use]
    pub fn smtp<T: Into<String>>(msg: T) -> Self {
        Self::Smtp(msg.into())
    }

    /// Create a delivery API error from a string message.
    #[must_use]
    pub fn api<T: Into<String>>(msg: T) -> Self {
        Self::Api(msg.into())
    }

    /// Create a configuration error from a string message.
    #[must_use]
    pub fn config<T: Into<String>>(msg: T) -> Self {
        Self::Config(msg.into())
    }
}
