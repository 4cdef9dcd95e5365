//! Configuration for the Mailforge service
//!
//! Loaded from multiple sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `MAILFORGE_` prefix,
//!    `__`-separated nesting, e.g. `MAILFORGE_SERVICE__PORT=4000`)
//! 2. `./mailforge.toml`
//! 3. Hardcoded defaults (fallback)
//!
//! # Example Configuration
//!
//! ```toml
//! # mailforge.toml
//! [service]
//! host = "0.0.0.0"
//! port = 4000
//! public_url = "https://mail.example.com"
//!
//! [email]
//! backend = "smtp"
//! from_address = "updates@example.com"
//!
//! [email.smtp]
//! host = "smtp.example.com"
//! port = 587
//!
//! [export]
//! clip_threshold_bytes = 104448
//! ```

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

/// Bind address and public URL of the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Bind host.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// Public base URL, embedded into response links; no trailing slash.
    pub public_url: String,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 4000,
            public_url: "http://127.0.0.1:4000".to_string(),
        }
    }
}

/// Which delivery backend sends test emails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailBackendKind {
    /// Log to the console; development default.
    #[default]
    Console,
    /// SMTP relay via lettre.
    Smtp,
    /// Hosted delivery HTTP API.
    Api,
}

/// SMTP relay settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SmtpSettings {
    /// Relay hostname.
    pub host: String,
    /// Relay port; 587 for STARTTLS.
    pub port: u16,
    /// Relay username.
    pub username: String,
    /// Relay password.
    pub password: String,
}

impl Default for SmtpSettings {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 587,
            username: String::new(),
            password: String::new(),
        }
    }
}

/// Hosted delivery API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DeliveryApiSettings {
    /// API base URL, no trailing slash.
    pub base_url: String,
    /// Bearer token.
    pub api_key: String,
}

impl Default for DeliveryApiSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.resend.com".to_string(),
            api_key: String::new(),
        }
    }
}

/// Email delivery settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailSettings {
    /// Active backend.
    pub backend: EmailBackendKind,
    /// From address for test sends.
    pub from_address: String,
    /// SMTP relay settings, used when `backend = "smtp"`.
    pub smtp: SmtpSettings,
    /// Delivery API settings, used when `backend = "api"`.
    pub api: DeliveryApiSettings,
}

/// Export settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Byte size above which an export is flagged as clipped. Gmail truncates
    /// HTML bodies past roughly this point; the export is flagged, never
    /// rejected.
    pub clip_threshold_bytes: usize,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            clip_threshold_bytes: crate::export::GMAIL_CLIP_THRESHOLD_BYTES,
        }
    }
}

/// Preview settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewSettings {
    /// Default preview lifetime when a request does not specify one.
    pub default_ttl_secs: i64,
}

impl Default for PreviewSettings {
    fn default() -> Self {
        Self {
            // Seven days.
            default_ttl_secs: 7 * 24 * 60 * 60,
        }
    }
}

/// Complete service configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind/public-URL settings.
    pub service: ServiceSettings,
    /// Email delivery settings.
    pub email: EmailSettings,
    /// Export settings.
    pub export: ExportSettings,
    /// Preview settings.
    pub previews: PreviewSettings,
}

impl ServerConfig {
    /// Load configuration with the documented precedence.
    ///
    /// # Errors
    ///
    /// Returns an error when a source is present but malformed; a missing
    /// `mailforge.toml` is not an error.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(Toml::file("mailforge.toml"))
    }

    fn load_from<T: figment::Provider>(file: T) -> anyhow::Result<Self> {
        let config = Figment::from(Serialized::defaults(Self::default()))
            .merge(file)
            .merge(Env::prefixed("MAILFORGE_").split("__"))
            .extract()?;
        Ok(config)
    }

    /// Load from a specific TOML file path, same env overlay.
    ///
    /// # Errors
    ///
    /// Returns an error when the file or environment is malformed.
    pub fn load_from_path(path: &str) -> anyhow::Result<Self> {
        Self::load_from(Toml::file(path))
    }
}
