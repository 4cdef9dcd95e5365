//! Hosted delivery API backend
//!
//! Dispatches through a Resend-style HTTP API: `POST {base}/emails` with a
//! bearer token, JSON body, and a JSON `{id}` reply.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::DeliveryApiSettings;
use crate::email::{Email, EmailError, EmailSender};

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    from: &'a str,
    to: &'a [String],
    subject: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    html: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct SendResponse {
    id: String,
}

/// Delivery API email backend.
pub struct ApiBackend {
    settings: DeliveryApiSettings,
    client: reqwest::Client,
}

impl ApiBackend {
    /// Create a backend from API settings.
    ///
    /// # Errors
    ///
    /// Returns [`EmailError::Config`] when the API key is missing.
    pub fn new(settings: DeliveryApiSettings) -> Result<Self, EmailError> {
        if settings.api_key.is_empty() {
            return Err(EmailError::config("delivery API key is not set"));
        }
        Ok(Self {
            settings,
            client: reqwest::Client::new(),
        })
    }
}

#[async_trait]
impl EmailSender for ApiBackend {
    async fn send(&self, email: Email) -> Result<String, EmailError> {
        email.validate()?;

        let from = email.from.as_deref().ok_or(EmailError::NoSender)?;
        let subject = email.subject.as_deref().ok_or(EmailError::NoSubject)?;
        let body = SendRequest {
            from,
            to: &email.to,
            subject,
            html: email.html.as_deref(),
            text: email.text.as_deref(),
            reply_to: email.reply_to.as_deref(),
        };

        let url = format!("{}/emails", self.settings.base_url.trim_end_matches('/'));
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.settings.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| EmailError::api(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(EmailError::api(format!("{status}: {detail}")));
        }
        let reply: SendResponse = response
            .json()
            .await
            .map_err(|e| EmailError::api(e.to_string()))?;
        tracing::info!(id = %reply.id, "delivery API accepted email");
        Ok(reply.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_requires_api_key() {
        let settings = DeliveryApiSettings {
            base_url: "https://api.example.com".to_string(),
            api_key: String::new(),
        };
        assert!(matches!(
            ApiBackend::new(settings),
            Err(EmailError::Config(_))
        ));
    }

    #[test]
    fn test_request_shape_skips_absent_bodies() {
        let body = SendRequest {
            from: "updates@example.com",
            to: &["user@example.com".to_string()],
            subject: "Test",
            html: Some("<p>Hi</p>"),
            text: None,
            reply_to: None,
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["from"], "updates@example.com");
        assert!(value.get("text").is_none());
        assert!(value.get("reply_to").is_none());
    }
}
