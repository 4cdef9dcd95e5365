//! Unit resolution and escaping for the renderer
//!
//! Every size that reaches the generated HTML goes through one of the
//! resolvers here, so the output never contains a unitless font-size or
//! padding declaration regardless of what the property panel stored.

use crate::document::{FontSizeValue, PaddingValue, SpacingPreset};

/// Semantic font-size scale, tokens to pixels.
const FONT_SCALE: &[(&str, u32)] = &[
    ("xs", 12),
    ("sm", 14),
    ("base", 16),
    ("lg", 18),
    ("xl", 20),
    ("2xl", 24),
    ("3xl", 30),
    ("4xl", 36),
];

/// Content-block padding scale.
const CONTENT_PADDING: &[(&str, u32)] = &[
    ("sm", 12),
    ("md", 20),
    ("lg", 32),
    ("compact", 12),
    ("standard", 20),
    ("spacious", 32),
];

/// Header/footer frame padding scale; the frame runs larger than content.
const FRAME_PADDING: &[(&str, u32)] = &[
    ("sm", 24),
    ("md", 32),
    ("lg", 48),
    ("compact", 24),
    ("standard", 32),
    ("spacious", 48),
];

/// Resolve a font size to a `"{n}px"` string.
///
/// Semantic tokens go through the fixed scale, integers get a `px` suffix,
/// `"…px"` strings pass through, anything else falls back. The result always
/// matches `^\d+px$`.
#[must_use]
pub fn resolve_font_size(value: &FontSizeValue, fallback: u32) -> String {
    match value {
        FontSizeValue::Px(n) => format!("{n}px"),
        FontSizeValue::Named(s) => {
            if let Some((_, px)) = FONT_SCALE.iter().find(|(tok, _)| tok == s) {
                return format!("{px}px");
            }
            if let Some(raw) = s.strip_suffix("px") {
                if raw.parse::<u32>().is_ok() {
                    return format!("{raw}px");
                }
            }
            format!("{fallback}px")
        }
    }
}

/// Resolve a content-block padding to pixels.
#[must_use]
pub fn resolve_content_padding(value: Option<&PaddingValue>, fallback: u32) -> u32 {
    resolve_padding(value, CONTENT_PADDING, fallback)
}

/// Resolve a header/footer frame padding to pixels.
#[must_use]
pub fn resolve_frame_padding(value: Option<&PaddingValue>, fallback: u32) -> u32 {
    resolve_padding(value, FRAME_PADDING, fallback)
}

fn resolve_padding(value: Option<&PaddingValue>, scale: &[(&str, u32)], fallback: u32) -> u32 {
    match value {
        None => fallback,
        Some(PaddingValue::Px(n)) => *n,
        Some(PaddingValue::Named(s)) => scale
            .iter()
            .find(|(tok, _)| tok == s)
            .map_or(fallback, |(_, px)| *px),
    }
}

/// Vertical whitespace between blocks for a spacing preset, in px.
#[must_use]
pub fn block_gap(preset: SpacingPreset) -> u32 {
    match preset {
        SpacingPreset::Compact => 16,
        SpacingPreset::Standard => 24,
        SpacingPreset::Spacious => 36,
    }
}

/// Escape a string for HTML text content.
#[must_use]
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape a string for an HTML attribute value.
#[must_use]
pub fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_semantic_tokens_resolve_through_scale() {
        assert_eq!(resolve_font_size(&FontSizeValue::named("xs"), 16), "12px");
        assert_eq!(resolve_font_size(&FontSizeValue::named("xl"), 16), "20px");
        assert_eq!(resolve_font_size(&FontSizeValue::named("2xl"), 16), "24px");
        assert_eq!(resolve_font_size(&FontSizeValue::named("4xl"), 16), "36px");
    }

    #[test]
    fn test_integers_get_px_suffix() {
        assert_eq!(resolve_font_size(&FontSizeValue::Px(32), 16), "32px");
    }

    #[test]
    fn test_px_strings_pass_through() {
        assert_eq!(resolve_font_size(&FontSizeValue::named("18px"), 16), "18px");
    }

    #[test]
    fn test_garbage_falls_back() {
        assert_eq!(resolve_font_size(&FontSizeValue::named("huge"), 16), "16px");
        assert_eq!(resolve_font_size(&FontSizeValue::named("px"), 16), "16px");
        assert_eq!(
            resolve_font_size(&FontSizeValue::named("12.5px"), 16),
            "16px"
        );
    }

    #[test]
    fn test_padding_scales_differ_by_context() {
        let md = Some(PaddingValue::Named("md".to_string()));
        assert_eq!(resolve_content_padding(md.as_ref(), 20), 20);
        assert_eq!(resolve_frame_padding(md.as_ref(), 32), 32);

        let standard = Some(PaddingValue::Named("standard".to_string()));
        assert_eq!(resolve_content_padding(standard.as_ref(), 0), 20);
        assert_eq!(resolve_frame_padding(standard.as_ref(), 0), 32);
    }

    #[test]
    fn test_padding_px_and_fallback() {
        assert_eq!(
            resolve_content_padding(Some(&PaddingValue::Px(7)), 20),
            7
        );
        assert_eq!(resolve_content_padding(None, 20), 20);
        assert_eq!(
            resolve_frame_padding(Some(&PaddingValue::Named("giant".to_string())), 32),
            32
        );
    }

    #[test]
    fn test_escaping() {
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
        assert_eq!(escape_attr("a\"b"), "a&quot;b");
    }

    proptest! {
        #[test]
        fn prop_font_size_always_px_suffixed(n in 0u32..10_000) {
            let out = resolve_font_size(&FontSizeValue::Px(n), 16);
            prop_assert_eq!(out, format!("{n}px"));
        }

        #[test]
        fn prop_font_size_output_shape(s in "[a-z0-9]{0,8}") {
            let out = resolve_font_size(&FontSizeValue::Named(s), 16);
            prop_assert!(out.ends_with("px"));
            prop_assert!(out[..out.len() - 2].chars().all(|c| c.is_ascii_digit()));
            prop_assert!(out.len() > 2);
        }
    }
}
