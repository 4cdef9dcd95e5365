//! Versioned local-session persistence
//!
//! The editor checkpoints its whole state into browser storage as one JSON
//! blob. The schema carries a discriminated `version`; a mismatch, malformed
//! JSON, or any missing required field rejects the load wholesale and the
//! editor starts fresh. A partially applied session is worse than none.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::document::{EmailDocument, GlobalThemeSettings};

/// Current session schema version. Bump on any incompatible shape change;
/// older blobs are discarded, not migrated.
pub const SESSION_SCHEMA_VERSION: u32 = 3;

/// Which editor surface was active when the session saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorMode {
    /// The drag-and-drop canvas.
    Edit,
    /// The rendered preview.
    Preview,
    /// The generated-HTML code view.
    Code,
}

/// A complete editor checkpoint.
///
/// Every field is required on load; `#[serde(default)]` is deliberately
/// absent so a truncated blob fails deserialization instead of half-applying.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedSession {
    /// Schema discriminator; must equal [`SESSION_SCHEMA_VERSION`].
    pub version: u32,
    /// When the checkpoint was written.
    pub saved_at: DateTime<Utc>,
    /// The document being edited.
    pub email_state: EmailDocument,
    /// Id of the template the document started from.
    pub current_template: String,
    /// Styling defaults traveling with the document.
    pub global_theme: GlobalThemeSettings,
    /// Active editor surface.
    pub mode: EditorMode,
    /// Left panel collapsed state.
    pub left_panel_collapsed: bool,
    /// Right panel collapsed state.
    pub right_panel_collapsed: bool,
}

impl SavedSession {
    /// Build a checkpoint of the current editor state, stamped now.
    #[must_use]
    pub fn checkpoint(
        email_state: EmailDocument,
        current_template: &str,
        global_theme: GlobalThemeSettings,
        mode: EditorMode,
    ) -> Self {
        Self {
            version: SESSION_SCHEMA_VERSION,
            saved_at: Utc::now(),
            email_state,
            current_template: current_template.to_string(),
            global_theme,
            mode,
            left_panel_collapsed: false,
            right_panel_collapsed: false,
        }
    }
}

/// Serialize a session to its storage blob.
#[must_use]
pub fn save_session(session: &SavedSession) -> String {
    serde_json::to_string(session).unwrap_or_else(|_| String::new())
}

/// Load a session from a storage blob.
///
/// Returns `None` for invalid JSON, a version mismatch, or any missing
/// required field; corruption is discarded, never surfaced to the user.
#[must_use]
pub fn load_session(raw: &str) -> Option<SavedSession> {
    let value: serde_json::Value = match serde_json::from_str(raw) {
        Ok(v) => v,
        Err(err) => {
            tracing::debug!(%err, "session blob is not valid JSON, discarding");
            return None;
        }
    };
    let version = value.get("version").and_then(serde_json::Value::as_u64);
    if version != Some(u64::from(SESSION_SCHEMA_VERSION)) {
        tracing::debug!(?version, "session schema version mismatch, discarding");
        return None;
    }
    match serde_json::from_value::<SavedSession>(value) {
        Ok(mut session) => {
            // Required text fields must never come back empty.
            session.email_state.patch_empty_fields();
            Some(session)
        }
        Err(err) => {
            tracing::debug!(%err, "session blob missing required fields, discarding");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::fallback;

    fn sample() -> SavedSession {
        SavedSession::checkpoint(
            EmailDocument::default(),
            "release-notes",
            GlobalThemeSettings::default(),
            EditorMode::Edit,
        )
    }

    #[test]
    fn test_round_trip() {
        let session = sample();
        let blob = save_session(&session);
        let loaded = load_session(&blob).expect("round trip");
        assert_eq!(loaded, session);
    }

    #[test]
    fn test_rejects_invalid_json() {
        assert!(load_session("{not json").is_none());
        assert!(load_session("").is_none());
    }

    #[test]
    fn test_rejects_version_mismatch() {
        let mut session = sample();
        session.version = SESSION_SCHEMA_VERSION + 1;
        assert!(load_session(&save_session(&session)).is_none());

        // Missing version is a mismatch too.
        assert!(load_session("{}").is_none());
    }

    #[test]
    fn test_rejects_missing_required_field() {
        let mut value: serde_json::Value =
            serde_json::from_str(&save_session(&sample())).unwrap();
        value.as_object_mut().unwrap().remove("leftPanelCollapsed");
        assert!(load_session(&value.to_string()).is_none());
    }

    #[test]
    fn test_storage_keys_are_camel_case() {
        let value: serde_json::Value = serde_json::from_str(&save_session(&sample())).unwrap();
        for key in [
            "version",
            "savedAt",
            "emailState",
            "currentTemplate",
            "globalTheme",
            "mode",
            "leftPanelCollapsed",
            "rightPanelCollapsed",
        ] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
    }

    #[test]
    fn test_restore_patches_empty_required_text() {
        let mut session = sample();
        session.email_state.header.title = String::new();
        session.email_state.footer.team_name = "  ".to_string();
        let loaded = load_session(&save_session(&session)).unwrap();
        assert_eq!(loaded.email_state.header.title, fallback::TITLE);
        assert_eq!(loaded.email_state.footer.team_name, fallback::TEAM_NAME);
    }
}
