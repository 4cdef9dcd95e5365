//! CSS-inlining export boundary
//!
//! The renderer's output goes through an inlining step before it ships:
//! `<style>` rules move into per-element `style` attributes (email clients
//! strip `<head>` styles), `!important` survives, and the result is measured
//! against the Gmail clipping threshold. Oversized payloads are flagged,
//! never rejected or truncated.
//!
//! The core treats the inliner as an opaque collaborator behind the
//! [`Inliner`] trait; [`CssInlineExporter`] is the production implementation,
//! backed by the `css-inline` crate.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Byte size past which Gmail clips an HTML body. Product-chosen constant
/// from known client limits; kept configurable, not re-derived.
pub const GMAIL_CLIP_THRESHOLD_BYTES: usize = 102 * 1024;

/// Inlining failure.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The inlining library rejected the document.
    #[error("inline error: {0}")]
    Inline(String),
}

/// An inlined, export-ready email payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedEmail {
    /// The inlined HTML.
    pub html: String,
    /// Payload size in kilobytes, one decimal.
    #[serde(rename = "sizeKB")]
    pub size_kb: f64,
    /// Whether the payload exceeds the clipping threshold.
    pub clipped: bool,
}

/// The inlining collaborator contract: HTML string in, measured inlined
/// payload out.
pub trait Inliner: Send + Sync {
    /// Inline `html` and measure the result.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError`] when the document cannot be inlined.
    fn inline(&self, html: &str) -> Result<ExportedEmail, ExportError>;
}

/// Production inliner backed by the `css-inline` crate.
pub struct CssInlineExporter {
    inliner: css_inline::CSSInliner<'static>,
    clip_threshold_bytes: usize,
}

impl CssInlineExporter {
    /// Build an exporter with the given clipping threshold.
    #[must_use]
    pub fn new(clip_threshold_bytes: usize) -> Self {
        Self {
            inliner: css_inline::CSSInliner::options().build(),
            clip_threshold_bytes,
        }
    }
}

impl Default for CssInlineExporter {
    fn default() -> Self {
        Self::new(GMAIL_CLIP_THRESHOLD_BYTES)
    }
}

impl Inliner for CssInlineExporter {
    fn inline(&self, html: &str) -> Result<ExportedEmail, ExportError> {
        let inlined = self
            .inliner
            .inline(html)
            .map_err(|err| ExportError::Inline(err.to_string()))?;
        Ok(measure(inlined, self.clip_threshold_bytes))
    }
}

/// Measure an inlined payload against the clipping threshold.
#[must_use]
pub fn measure(html: String, clip_threshold_bytes: usize) -> ExportedEmail {
    let bytes = html.len();
    #[allow(clippy::cast_precision_loss)]
    let size_kb = ((bytes as f64 / 1024.0) * 10.0).round() / 10.0;
    ExportedEmail {
        clipped: bytes > clip_threshold_bytes,
        html,
        size_kb,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_flags_over_threshold() {
        let over = measure("x".repeat(GMAIL_CLIP_THRESHOLD_BYTES + 1), GMAIL_CLIP_THRESHOLD_BYTES);
        assert!(over.clipped);

        let at = measure("x".repeat(GMAIL_CLIP_THRESHOLD_BYTES), GMAIL_CLIP_THRESHOLD_BYTES);
        assert!(!at.clipped);

        let under = measure("x".to_string(), GMAIL_CLIP_THRESHOLD_BYTES);
        assert!(!under.clipped);
    }

    #[test]
    fn test_measure_reports_kilobytes() {
        let exported = measure("x".repeat(2048), GMAIL_CLIP_THRESHOLD_BYTES);
        assert!((exported.size_kb - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_inliner_moves_style_rules_onto_elements() {
        let html = "<html><head><style>p { color: #ff0000; }</style></head>\
                    <body><p>Hello</p></body></html>";
        let exported = CssInlineExporter::default().inline(html).expect("inline");
        assert!(exported.html.contains("<p style="));
        assert!(exported.html.contains("color: #ff0000"));
        assert!(!exported.clipped);
    }

    #[test]
    fn test_wire_shape_uses_size_kb_key() {
        let value = serde_json::to_value(measure("hi".to_string(), 10)).unwrap();
        assert!(value.get("sizeKB").is_some());
        assert!(value.get("size_kb").is_none());
        assert!(value.get("clipped").is_some());
    }

    #[test]
    fn test_rendered_document_inlines_clean() {
        use mailforge_core::prelude::*;
        let mut doc = EmailDocument::default();
        doc.push_block(BlockKind::FeatureList);
        let html = render(&doc, &GlobalThemeSettings::default());
        let exported = CssInlineExporter::default().inline(&html).expect("inline");
        assert!(exported.html.contains("What's new"));
        assert!(!exported.clipped);
    }
}
