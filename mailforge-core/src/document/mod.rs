//! The email document model
//!
//! [`EmailDocument`] is the root aggregate the editor mutates and the
//! renderer consumes: a header, an ordered list of typed content blocks, and
//! a footer. Display order is insertion order. The document is owned by
//! exactly one editing session and travels as plain JSON across every
//! boundary (local session storage, drafts, previews).
//!
//! Theme-derived colors are never written into the document; per-field
//! overrides stay `None` until the user touches them and resolution happens
//! at render time (`override ?? derived`).

pub mod blocks;
pub mod color;

use serde::{Deserialize, Serialize};

pub use blocks::{BlockBody, BlockKind, BlockStyle, ContentBlock};
pub use color::ColorValue;

/// Fallback strings applied by [`EmailDocument::patch_empty_fields`].
///
/// A restored session must never surface an empty title or contact line;
/// these are the fixed replacements.
pub mod fallback {
    /// Header title fallback.
    pub const TITLE: &str = "Release Notes";
    /// Header date fallback.
    pub const DATE: &str = "This week";
    /// Footer message fallback.
    pub const FOOTER_MESSAGE: &str = "Thanks for reading!";
    /// Footer team-name fallback.
    pub const TEAM_NAME: &str = "The Product Team";
    /// Footer contact fallback.
    pub const CONTACT_EMAIL: &str = "support@example.com";
    /// Footer disclaimer fallback.
    pub const DISCLAIMER: &str =
        "You are receiving this email because you signed up for product updates.";
}

/// A font size: a plain pixel count or a semantic token like `"xl"`.
///
/// Resolution to a `px` string happens in the renderer; see
/// `render::style::resolve_font_size`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FontSizeValue {
    /// Plain pixel count.
    Px(u32),
    /// Semantic token (`"xl"`), a `"…px"` string, or free text.
    Named(String),
}

impl FontSizeValue {
    /// Convenience constructor for a semantic token.
    #[must_use]
    pub fn named(token: &str) -> Self {
        Self::Named(token.to_string())
    }
}

/// A padding amount: a plain pixel count or a semantic token.
///
/// Content blocks and the header/footer frame resolve tokens through
/// different scales; the frame runs larger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PaddingValue {
    /// Plain pixel count.
    Px(u32),
    /// Semantic token: `sm`/`md`/`lg` or `compact`/`standard`/`spacious`.
    Named(String),
}

/// Spacing preset applied between blocks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpacingPreset {
    /// Tighter vertical rhythm.
    Compact,
    /// Default rhythm.
    #[default]
    Standard,
    /// Airy rhythm.
    Spacious,
}

/// Font family preset; resolved to an email-safe stack at render time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontPreset {
    /// System sans stack.
    #[default]
    Sans,
    /// Serif stack.
    Serif,
    /// Monospace stack.
    Mono,
}

impl FontPreset {
    /// The email-safe CSS font stack.
    #[must_use]
    pub fn stack(self) -> &'static str {
        match self {
            Self::Sans => {
                "-apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Helvetica, Arial, sans-serif"
            }
            Self::Serif => "Georgia, 'Times New Roman', Times, serif",
            Self::Mono => "'SFMono-Regular', Consolas, 'Liberation Mono', Menlo, monospace",
        }
    }
}

/// Button corner preset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonCorner {
    /// 8px radius.
    #[default]
    Rounded,
    /// Fully round ends.
    Pill,
    /// No radius.
    Square,
}

impl ButtonCorner {
    /// The border radius in px.
    #[must_use]
    pub fn radius_px(self) -> u32 {
        match self {
            Self::Rounded => 8,
            Self::Pill => 999,
            Self::Square => 0,
        }
    }
}

/// Outer wrapper treatment for the whole email.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutStyle {
    /// Flat body on the canvas background.
    #[default]
    Classic,
    /// Rounded, bordered card floating on the canvas.
    Card,
    /// No canvas tint, content edge to edge.
    Minimal,
}

/// Per-document styling defaults.
///
/// Travels with the document in the local session blob; never persisted
/// server-side by itself. Changing any field re-derives header, footer, and
/// block colors at the next render; per-field user overrides win until
/// cleared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GlobalThemeSettings {
    /// Accent used for buttons, links, and badges.
    pub primary_color: ColorValue,
    /// Default theme id for header/body/footer zones.
    pub theme_id: String,
    /// Vertical rhythm between blocks.
    pub spacing: SpacingPreset,
    /// Typeface preset.
    pub font_family: FontPreset,
    /// Button corner preset.
    pub button_corner: ButtonCorner,
    /// Content width in px.
    pub email_width: u32,
    /// Outer wrapper treatment.
    pub layout_style: LayoutStyle,
}

impl Default for GlobalThemeSettings {
    fn default() -> Self {
        Self {
            primary_color: ColorValue::token("indigo"),
            theme_id: "classic".to_string(),
            spacing: SpacingPreset::Standard,
            font_family: FontPreset::Sans,
            button_corner: ButtonCorner::Rounded,
            email_width: 600,
            layout_style: LayoutStyle::Classic,
        }
    }
}

/// Header configuration: title, date, logo, badges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeaderConfig {
    /// Email title.
    pub title: String,
    /// Display date line under the title.
    pub date: String,
    /// Logo for light header backgrounds.
    pub logo_url: String,
    /// Logo variant for dark header backgrounds; falls back to `logo_url`.
    pub logo_dark_url: String,
    /// Whether the badge row renders.
    pub show_badges: bool,
    /// Release tag badge; empty hides it.
    pub version_badge: String,
    /// Category badge; empty hides it.
    pub category_badge: String,
    /// Title size.
    pub title_font_size: FontSizeValue,
    /// Title color override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_color: Option<ColorValue>,
    /// Date color override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_color: Option<ColorValue>,
    /// Header background override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<ColorValue>,
    /// Header padding override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<PaddingValue>,
    /// Text alignment.
    pub align: blocks::Align,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            title: fallback::TITLE.to_string(),
            date: fallback::DATE.to_string(),
            logo_url: String::new(),
            logo_dark_url: String::new(),
            show_badges: true,
            version_badge: String::new(),
            category_badge: "Product update".to_string(),
            title_font_size: FontSizeValue::named("3xl"),
            title_color: None,
            date_color: None,
            background: None,
            padding: None,
            align: blocks::Align::Left,
        }
    }
}

/// Footer configuration: sign-off, contact, disclaimer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FooterConfig {
    /// Sign-off message.
    pub message: String,
    /// Team name under the message.
    pub team_name: String,
    /// Contact address, rendered as a mailto link.
    pub contact_email: String,
    /// Legal/disclaimer line.
    pub disclaimer: String,
    /// Whether the footer renders at all.
    pub show_footer: bool,
    /// Unsubscribe link target; empty hides the link.
    pub unsubscribe_url: String,
    /// Footer background override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<ColorValue>,
    /// Footer text color override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<ColorValue>,
    /// Footer padding override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<PaddingValue>,
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self {
            message: fallback::FOOTER_MESSAGE.to_string(),
            team_name: fallback::TEAM_NAME.to_string(),
            contact_email: fallback::CONTACT_EMAIL.to_string(),
            disclaimer: fallback::DISCLAIMER.to_string(),
            show_footer: true,
            unsubscribe_url: String::new(),
            background: None,
            text_color: None,
            padding: None,
        }
    }
}

/// The root aggregate: header, ordered content blocks, footer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmailDocument {
    /// Header configuration.
    pub header: HeaderConfig,
    /// Content blocks; insertion order is display order.
    pub content: Vec<ContentBlock>,
    /// Footer configuration.
    pub footer: FooterConfig,
}

impl EmailDocument {
    /// Append a freshly created block of `kind`.
    pub fn push_block(&mut self, kind: BlockKind) -> &ContentBlock {
        self.content.push(ContentBlock::new(kind));
        self.content.last().expect("just pushed")
    }

    /// Remove the block with `id`; a miss is a no-op.
    pub fn remove_block(&mut self, id: &str) {
        self.content.retain(|b| b.id != id);
    }

    /// Move the block with `id` to `index` (clamped); a miss is a no-op.
    pub fn move_block(&mut self, id: &str, index: usize) {
        if let Some(from) = self.content.iter().position(|b| b.id == id) {
            let block = self.content.remove(from);
            let to = index.min(self.content.len());
            self.content.insert(to, block);
        }
    }

    /// Replace empty required text fields with their fixed fallbacks.
    ///
    /// Run after session restore; a stored document with a blanked-out title
    /// or contact line would otherwise render a hole.
    pub fn patch_empty_fields(&mut self) {
        fn patch(field: &mut String, fallback: &str) {
            if field.trim().is_empty() {
                *field = fallback.to_string();
            }
        }
        patch(&mut self.header.title, fallback::TITLE);
        patch(&mut self.header.date, fallback::DATE);
        patch(&mut self.footer.message, fallback::FOOTER_MESSAGE);
        patch(&mut self.footer.team_name, fallback::TEAM_NAME);
        patch(&mut self.footer.contact_email, fallback::CONTACT_EMAIL);
        patch(&mut self.footer.disclaimer, fallback::DISCLAIMER);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_wire_shape() {
        let mut doc = EmailDocument::default();
        doc.push_block(BlockKind::Hero);
        let value = serde_json::to_value(&doc).unwrap();
        assert!(value.get("header").is_some());
        assert!(value.get("footer").is_some());
        assert_eq!(value["content"].as_array().unwrap().len(), 1);
        assert!(value["header"].get("titleFontSize").is_some());
    }

    #[test]
    fn test_push_remove_move_blocks() {
        let mut doc = EmailDocument::default();
        let a = doc.push_block(BlockKind::Hero).id.clone();
        let b = doc.push_block(BlockKind::Divider).id.clone();
        let c = doc.push_block(BlockKind::FeatureList).id.clone();

        doc.move_block(&c, 0);
        let order: Vec<_> = doc.content.iter().map(|b| b.id.clone()).collect();
        assert_eq!(order, vec![c.clone(), a.clone(), b.clone()]);

        doc.remove_block(&a);
        assert_eq!(doc.content.len(), 2);

        // Misses are no-ops.
        doc.remove_block("nope");
        doc.move_block("nope", 0);
        assert_eq!(doc.content.len(), 2);
    }

    #[test]
    fn test_move_block_clamps_index() {
        let mut doc = EmailDocument::default();
        let a = doc.push_block(BlockKind::Hero).id.clone();
        doc.push_block(BlockKind::Divider);
        doc.move_block(&a, 99);
        assert_eq!(doc.content.last().unwrap().id, a);
    }

    #[test]
    fn test_patch_empty_fields() {
        let mut doc = EmailDocument::default();
        doc.header.title = "   ".to_string();
        doc.header.date = String::new();
        doc.footer.message = String::new();
        doc.footer.team_name = String::new();
        doc.footer.contact_email = String::new();
        doc.footer.disclaimer = String::new();

        doc.patch_empty_fields();

        assert_eq!(doc.header.title, fallback::TITLE);
        assert_eq!(doc.header.date, fallback::DATE);
        assert_eq!(doc.footer.message, fallback::FOOTER_MESSAGE);
        assert_eq!(doc.footer.team_name, fallback::TEAM_NAME);
        assert_eq!(doc.footer.contact_email, fallback::CONTACT_EMAIL);
        assert_eq!(doc.footer.disclaimer, fallback::DISCLAIMER);
    }

    #[test]
    fn test_patch_keeps_user_text() {
        let mut doc = EmailDocument::default();
        doc.header.title = "April ship notes".to_string();
        doc.patch_empty_fields();
        assert_eq!(doc.header.title, "April ship notes");
    }

    #[test]
    fn test_font_size_value_serde() {
        let px: FontSizeValue = serde_json::from_str("32").unwrap();
        assert_eq!(px, FontSizeValue::Px(32));
        let named: FontSizeValue = serde_json::from_str("\"xl\"").unwrap();
        assert_eq!(named, FontSizeValue::named("xl"));
    }

    #[test]
    fn test_global_theme_defaults() {
        let theme = GlobalThemeSettings::default();
        assert_eq!(theme.email_width, 600);
        assert_eq!(theme.theme_id, "classic");
        assert_eq!(theme.button_corner.radius_px(), 8);
    }
}
