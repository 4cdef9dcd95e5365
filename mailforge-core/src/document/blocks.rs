//! Content blocks
//!
//! Each block type in the library is one variant of [`BlockBody`], carrying
//! its own property struct. The wire shape is `{id, type, props}` with a
//! kebab-case type tag; deserializing a partial `props` object merges the
//! type's complete default set underneath it, so a freshly created block
//! always carries every key its renderer and property panel expect.
//!
//! Unrecognized tags deserialize to [`BlockBody::Unknown`] and render
//! nothing. Dropping a block type from an email must never be an error.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::color::ColorValue;
use super::PaddingValue;

/// Optional styling shared by most blocks.
///
/// All fields are user overrides; absent values resolve against the global
/// theme at render time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BlockStyle {
    /// Background override for the block's own zone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<ColorValue>,
    /// Body text color override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<ColorValue>,
    /// Padding override around the block content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<PaddingValue>,
}

/// Closed enumeration of block type tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockKind {
    /// Large lead section with headline and call to action.
    Hero,
    /// Feature walkthrough with screenshot and bullets.
    FeatureScreenshot,
    /// Titled bullet list.
    FeatureList,
    /// Image beside prose.
    ImageContent,
    /// Several small updates with links.
    MultiUpdate,
    /// Icon/title/description grid.
    ItemGrid,
    /// Callout banner.
    Warning,
    /// Monospace code box.
    CodeSnippet,
    /// Two prose columns.
    TwoColumn,
    /// Video thumbnail with play affordance.
    VideoBlock,
    /// Row of headline numbers.
    StatsMetrics,
    /// Dated rollout entries.
    Timeline,
    /// Horizontal rule.
    Divider,
    /// Versioned change list.
    Changelog,
    /// Sunset notice with migration link.
    Deprecation,
    /// Periodic metrics digest.
    MetricsSnapshot,
    /// 0-10 score ask.
    NpsRating,
    /// Mixed-size feature tiles.
    BentoGrid,
    /// Linked card row.
    CardGrid,
    /// Column comparison table.
    ComparisonTable,
    /// Animated demo image.
    GifDemo,
    /// Event invitation with reply options.
    Rsvp,
    /// One-question poll.
    QuickPoll,
    /// Thumbs up/down ask.
    Feedback,
}

impl BlockKind {
    /// Every kind in the library, in palette order.
    pub const ALL: &'static [Self] = &[
        Self::Hero,
        Self::FeatureScreenshot,
        Self::FeatureList,
        Self::ImageContent,
        Self::MultiUpdate,
        Self::ItemGrid,
        Self::Warning,
        Self::CodeSnippet,
        Self::TwoColumn,
        Self::VideoBlock,
        Self::StatsMetrics,
        Self::Timeline,
        Self::Divider,
        Self::Changelog,
        Self::Deprecation,
        Self::MetricsSnapshot,
        Self::NpsRating,
        Self::BentoGrid,
        Self::CardGrid,
        Self::ComparisonTable,
        Self::GifDemo,
        Self::Rsvp,
        Self::QuickPoll,
        Self::Feedback,
    ];

    /// The kebab-case wire tag.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::FeatureScreenshot => "feature-screenshot",
            Self::FeatureList => "feature-list",
            Self::ImageContent => "image-content",
            Self::MultiUpdate => "multi-update",
            Self::ItemGrid => "item-grid",
            Self::Warning => "warning",
            Self::CodeSnippet => "code-snippet",
            Self::TwoColumn => "two-column",
            Self::VideoBlock => "video-block",
            Self::StatsMetrics => "stats-metrics",
            Self::Timeline => "timeline",
            Self::Divider => "divider",
            Self::Changelog => "changelog",
            Self::Deprecation => "deprecation",
            Self::MetricsSnapshot => "metrics-snapshot",
            Self::NpsRating => "nps-rating",
            Self::BentoGrid => "bento-grid",
            Self::CardGrid => "card-grid",
            Self::ComparisonTable => "comparison-table",
            Self::GifDemo => "gif-demo",
            Self::Rsvp => "rsvp",
            Self::QuickPoll => "quick-poll",
            Self::Feedback => "feedback",
        }
    }

    /// Parse a wire tag; `None` for tags outside the library.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.as_str() == tag)
    }
}

/// One content unit in an email, addressable by a stable id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentBlock {
    /// Stable id, unique within the document.
    pub id: String,
    /// The typed payload.
    #[serde(flatten)]
    pub body: BlockBody,
}

impl ContentBlock {
    /// Create a block of `kind` with a fresh id and the complete default
    /// property set.
    #[must_use]
    pub fn new(kind: BlockKind) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            body: BlockBody::defaults_for(kind),
        }
    }

    /// Create a block of `kind`, merging `overrides` over the defaults.
    ///
    /// Overrides that fail to deserialize leave the defaults untouched; a
    /// malformed property panel edit must not produce a partial block.
    #[must_use]
    pub fn with_props(kind: BlockKind, overrides: serde_json::Value) -> Self {
        let merged = serde_json::json!({ "type": kind.as_str(), "props": overrides });
        let body = serde_json::from_value(merged).unwrap_or_else(|err| {
            tracing::debug!(kind = kind.as_str(), %err, "block overrides rejected, using defaults");
            BlockBody::defaults_for(kind)
        });
        Self {
            id: Uuid::new_v4().to_string(),
            body,
        }
    }

    /// The wire tag of this block, `"unknown"` for unrecognized payloads.
    #[must_use]
    pub fn tag(&self) -> &'static str {
        self.body.tag()
    }
}

/// The typed payload of a content block.
///
/// Adding a block type means adding a variant here; the renderer's match is
/// exhaustive, so the compiler walks every dispatch site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "props", rename_all = "kebab-case")]
pub enum BlockBody {
    /// Lead section.
    Hero(HeroProps),
    /// Screenshot walkthrough.
    FeatureScreenshot(FeatureScreenshotProps),
    /// Bullet list.
    FeatureList(FeatureListProps),
    /// Image beside prose.
    ImageContent(ImageContentProps),
    /// Stack of small updates.
    MultiUpdate(MultiUpdateProps),
    /// Icon grid.
    ItemGrid(ItemGridProps),
    /// Callout banner.
    Warning(WarningProps),
    /// Code box.
    CodeSnippet(CodeSnippetProps),
    /// Two prose columns.
    TwoColumn(TwoColumnProps),
    /// Video thumbnail.
    VideoBlock(VideoBlockProps),
    /// Headline numbers.
    StatsMetrics(StatsMetricsProps),
    /// Dated entries.
    Timeline(TimelineProps),
    /// Horizontal rule.
    Divider(DividerProps),
    /// Change list.
    Changelog(ChangelogProps),
    /// Sunset notice.
    Deprecation(DeprecationProps),
    /// Metrics digest.
    MetricsSnapshot(MetricsSnapshotProps),
    /// Score ask.
    NpsRating(NpsRatingProps),
    /// Mixed tiles.
    BentoGrid(BentoGridProps),
    /// Card row.
    CardGrid(CardGridProps),
    /// Comparison table.
    ComparisonTable(ComparisonTableProps),
    /// Animated demo.
    GifDemo(GifDemoProps),
    /// Invitation.
    Rsvp(RsvpProps),
    /// One-question poll.
    QuickPoll(QuickPollProps),
    /// Thumbs ask.
    Feedback(FeedbackProps),
    /// Anything this build does not know how to render.
    #[serde(other)]
    Unknown,
}

impl BlockBody {
    /// The complete default property set for `kind`.
    #[must_use]
    pub fn defaults_for(kind: BlockKind) -> Self {
        match kind {
            BlockKind::Hero => Self::Hero(HeroProps::default()),
            BlockKind::FeatureScreenshot => Self::FeatureScreenshot(FeatureScreenshotProps::default()),
            BlockKind::FeatureList => Self::FeatureList(FeatureListProps::default()),
            BlockKind::ImageContent => Self::ImageContent(ImageContentProps::default()),
            BlockKind::MultiUpdate => Self::MultiUpdate(MultiUpdateProps::default()),
            BlockKind::ItemGrid => Self::ItemGrid(ItemGridProps::default()),
            BlockKind::Warning => Self::Warning(WarningProps::default()),
            BlockKind::CodeSnippet => Self::CodeSnippet(CodeSnippetProps::default()),
            BlockKind::TwoColumn => Self::TwoColumn(TwoColumnProps::default()),
            BlockKind::VideoBlock => Self::VideoBlock(VideoBlockProps::default()),
            BlockKind::StatsMetrics => Self::StatsMetrics(StatsMetricsProps::default()),
            BlockKind::Timeline => Self::Timeline(TimelineProps::default()),
            BlockKind::Divider => Self::Divider(DividerProps::default()),
            BlockKind::Changelog => Self::Changelog(ChangelogProps::default()),
            BlockKind::Deprecation => Self::Deprecation(DeprecationProps::default()),
            BlockKind::MetricsSnapshot => Self::MetricsSnapshot(MetricsSnapshotProps::default()),
            BlockKind::NpsRating => Self::NpsRating(NpsRatingProps::default()),
            BlockKind::BentoGrid => Self::BentoGrid(BentoGridProps::default()),
            BlockKind::CardGrid => Self::CardGrid(CardGridProps::default()),
            BlockKind::ComparisonTable => Self::ComparisonTable(ComparisonTableProps::default()),
            BlockKind::GifDemo => Self::GifDemo(GifDemoProps::default()),
            BlockKind::Rsvp => Self::Rsvp(RsvpProps::default()),
            BlockKind::QuickPoll => Self::QuickPoll(QuickPollProps::default()),
            BlockKind::Feedback => Self::Feedback(FeedbackProps::default()),
        }
    }

    /// The kind of this body, `None` for [`BlockBody::Unknown`].
    #[must_use]
    pub fn kind(&self) -> Option<BlockKind> {
        match self {
            Self::Hero(_) => Some(BlockKind::Hero),
            Self::FeatureScreenshot(_) => Some(BlockKind::FeatureScreenshot),
            Self::FeatureList(_) => Some(BlockKind::FeatureList),
            Self::ImageContent(_) => Some(BlockKind::ImageContent),
            Self::MultiUpdate(_) => Some(BlockKind::MultiUpdate),
            Self::ItemGrid(_) => Some(BlockKind::ItemGrid),
            Self::Warning(_) => Some(BlockKind::Warning),
            Self::CodeSnippet(_) => Some(BlockKind::CodeSnippet),
            Self::TwoColumn(_) => Some(BlockKind::TwoColumn),
            Self::VideoBlock(_) => Some(BlockKind::VideoBlock),
            Self::StatsMetrics(_) => Some(BlockKind::StatsMetrics),
            Self::Timeline(_) => Some(BlockKind::Timeline),
            Self::Divider(_) => Some(BlockKind::Divider),
            Self::Changelog(_) => Some(BlockKind::Changelog),
            Self::Deprecation(_) => Some(BlockKind::Deprecation),
            Self::MetricsSnapshot(_) => Some(BlockKind::MetricsSnapshot),
            Self::NpsRating(_) => Some(BlockKind::NpsRating),
            Self::BentoGrid(_) => Some(BlockKind::BentoGrid),
            Self::CardGrid(_) => Some(BlockKind::CardGrid),
            Self::ComparisonTable(_) => Some(BlockKind::ComparisonTable),
            Self::GifDemo(_) => Some(BlockKind::GifDemo),
            Self::Rsvp(_) => Some(BlockKind::Rsvp),
            Self::QuickPoll(_) => Some(BlockKind::QuickPoll),
            Self::Feedback(_) => Some(BlockKind::Feedback),
            Self::Unknown => None,
        }
    }

    /// The wire tag, `"unknown"` for unrecognized payloads.
    #[must_use]
    pub fn tag(&self) -> &'static str {
        self.kind().map_or("unknown", BlockKind::as_str)
    }
}

/// Horizontal alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Left-aligned.
    Left,
    /// Centered.
    #[default]
    Center,
    /// Right-aligned.
    Right,
}

impl Align {
    /// The CSS `text-align` value.
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

/// Which side of the prose an image sits on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageSide {
    /// Image on the left, text on the right.
    #[default]
    Left,
    /// Image on the right, text on the left.
    Right,
}

/// Callout severity, controls the banner accent color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational.
    Info,
    /// Caution.
    #[default]
    Warning,
    /// Action required.
    Critical,
}

/// Divider line style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    /// Solid rule.
    #[default]
    Solid,
    /// Dashed rule.
    Dashed,
    /// Dotted rule.
    Dotted,
}

impl LineStyle {
    /// The CSS `border-style` value.
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Dashed => "dashed",
            Self::Dotted => "dotted",
        }
    }
}

/// Changelog entry category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    /// New capability.
    #[default]
    Added,
    /// Behavior change.
    Changed,
    /// Bug fix.
    Fixed,
    /// Removal.
    Removed,
}

impl ChangeKind {
    /// Short label shown in the rendered badge.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Added => "Added",
            Self::Changed => "Changed",
            Self::Fixed => "Fixed",
            Self::Removed => "Removed",
        }
    }
}

/// A linked sub-update inside a multi-update block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateItem {
    /// Update headline.
    pub title: String,
    /// One-paragraph summary.
    pub description: String,
    /// Optional link target.
    pub link_url: String,
    /// Link text, rendered only when `link_url` is set.
    pub link_label: String,
}

impl Default for UpdateItem {
    fn default() -> Self {
        Self {
            title: "Improved search".to_string(),
            description: "Results now rank by relevance across all workspaces.".to_string(),
            link_url: String::new(),
            link_label: "Learn more".to_string(),
        }
    }
}

/// One cell of an item grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GridItem {
    /// Emoji or short glyph.
    pub icon: String,
    /// Cell headline.
    pub title: String,
    /// Cell body.
    pub description: String,
}

impl Default for GridItem {
    fn default() -> Self {
        Self {
            icon: "⚡".to_string(),
            title: "Faster syncs".to_string(),
            description: "Background sync now completes in under a second.".to_string(),
        }
    }
}

/// A headline number with an optional delta annotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Stat {
    /// What the number measures.
    pub label: String,
    /// The number itself, preformatted.
    pub value: String,
    /// Change annotation, e.g. `"+12%"`.
    pub delta: String,
}

impl Default for Stat {
    fn default() -> Self {
        Self {
            label: "Active teams".to_string(),
            value: "1,204".to_string(),
            delta: "+12%".to_string(),
        }
    }
}

/// One dated entry on a timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TimelineEntry {
    /// Display date.
    pub date: String,
    /// Entry headline.
    pub title: String,
    /// Entry body.
    pub description: String,
}

impl Default for TimelineEntry {
    fn default() -> Self {
        Self {
            date: "Week 1".to_string(),
            title: "Beta rollout".to_string(),
            description: "Available to teams on the beta channel.".to_string(),
        }
    }
}

/// One changelog line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChangeEntry {
    /// Entry category.
    pub kind: ChangeKind,
    /// Entry text.
    pub text: String,
}

impl Default for ChangeEntry {
    fn default() -> Self {
        Self {
            kind: ChangeKind::Added,
            text: "Keyboard shortcuts for the editor.".to_string(),
        }
    }
}

/// One linked card in a card grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Card {
    /// Card headline.
    pub title: String,
    /// Card body.
    pub description: String,
    /// Optional image above the text.
    pub image_url: String,
    /// Optional link target.
    pub link_url: String,
    /// Link text.
    pub link_label: String,
}

impl Default for Card {
    fn default() -> Self {
        Self {
            title: "Getting started guide".to_string(),
            description: "Everything you need for your first workspace.".to_string(),
            image_url: String::new(),
            link_url: String::new(),
            link_label: "Read more".to_string(),
        }
    }
}

/// One tile of a bento grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BentoTile {
    /// Tile headline.
    pub title: String,
    /// Tile body.
    pub description: String,
    /// Optional image.
    pub image_url: String,
    /// Whether the tile spans the full row.
    pub wide: bool,
}

impl Default for BentoTile {
    fn default() -> Self {
        Self {
            title: "Workspace templates".to_string(),
            description: "Start from a layout your team already knows.".to_string(),
            image_url: String::new(),
            wide: false,
        }
    }
}

/// One row of a comparison table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ComparisonRow {
    /// Row label (first column).
    pub label: String,
    /// One value per remaining column.
    pub values: Vec<String>,
}

/// Properties of a hero block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeroProps {
    /// Headline.
    pub title: String,
    /// Supporting line under the headline.
    pub subtitle: String,
    /// Optional banner image.
    pub image_url: String,
    /// Alt text for the banner image.
    pub image_alt: String,
    /// Call-to-action button text; empty hides the button.
    pub cta_label: String,
    /// Call-to-action target.
    pub cta_url: String,
    /// Text alignment.
    pub align: Align,
    /// Whether the headline renders.
    pub show_title: bool,
    /// Style overrides.
    #[serde(flatten)]
    pub style: BlockStyle,
}

impl Default for HeroProps {
    fn default() -> Self {
        Self {
            title: "Introducing our spring release".to_string(),
            subtitle: "A faster editor, smarter search, and a refreshed workspace.".to_string(),
            image_url: String::new(),
            image_alt: String::new(),
            cta_label: "Read the announcement".to_string(),
            cta_url: "https://example.com/blog".to_string(),
            align: Align::Center,
            show_title: true,
            style: BlockStyle::default(),
        }
    }
}

/// Properties of a feature-screenshot block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FeatureScreenshotProps {
    /// Section headline.
    pub title: String,
    /// Paragraph under the headline.
    pub description: String,
    /// Screenshot image.
    pub image_url: String,
    /// Alt text for the screenshot.
    pub image_alt: String,
    /// Bullet points under the prose.
    pub bullets: Vec<String>,
    /// Whether bullets render.
    pub show_bullets: bool,
    /// Optional link text.
    pub cta_label: String,
    /// Optional link target.
    pub cta_url: String,
    /// Whether the headline renders.
    pub show_title: bool,
    /// Style overrides.
    #[serde(flatten)]
    pub style: BlockStyle,
}

impl Default for FeatureScreenshotProps {
    fn default() -> Self {
        Self {
            title: "A closer look at the new editor".to_string(),
            description: "The editing surface was rebuilt for speed and predictability.".to_string(),
            image_url: "https://placehold.co/1200x675".to_string(),
            image_alt: "Editor screenshot".to_string(),
            bullets: vec![
                "Instant preview while you type".to_string(),
                "Undo history survives reloads".to_string(),
            ],
            show_bullets: true,
            cta_label: String::new(),
            cta_url: String::new(),
            show_title: true,
            style: BlockStyle::default(),
        }
    }
}

/// Properties of a feature-list block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FeatureListProps {
    /// Section headline.
    pub title: String,
    /// Paragraph under the headline.
    pub description: String,
    /// Bullet points.
    pub bullets: Vec<String>,
    /// Whether bullets render.
    pub show_bullets: bool,
    /// Marker glyph shown before each bullet.
    pub icon: String,
    /// Whether the headline renders.
    pub show_title: bool,
    /// Style overrides.
    #[serde(flatten)]
    pub style: BlockStyle,
}

impl Default for FeatureListProps {
    fn default() -> Self {
        Self {
            title: "What's new".to_string(),
            description: String::new(),
            bullets: vec![
                "Share drafts with a link".to_string(),
                "Comment threads on any block".to_string(),
                "Exports are 40% smaller".to_string(),
            ],
            show_bullets: true,
            icon: "✓".to_string(),
            show_title: true,
            style: BlockStyle::default(),
        }
    }
}

/// Properties of an image-content block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImageContentProps {
    /// Section headline.
    pub title: String,
    /// Prose beside the image.
    pub body: String,
    /// Image source.
    pub image_url: String,
    /// Alt text.
    pub image_alt: String,
    /// Which side the image sits on.
    pub image_position: ImageSide,
    /// Optional bullets under the prose.
    pub bullets: Vec<String>,
    /// Whether bullets render.
    pub show_bullets: bool,
    /// Whether the headline renders.
    pub show_title: bool,
    /// Style overrides.
    #[serde(flatten)]
    pub style: BlockStyle,
}

impl Default for ImageContentProps {
    fn default() -> Self {
        Self {
            title: "Built for focus".to_string(),
            body: "A quieter canvas keeps your attention on the work, not the chrome."
                .to_string(),
            image_url: "https://placehold.co/560x420".to_string(),
            image_alt: String::new(),
            image_position: ImageSide::Left,
            bullets: Vec::new(),
            show_bullets: false,
            show_title: true,
            style: BlockStyle::default(),
        }
    }
}

/// Properties of a multi-update block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MultiUpdateProps {
    /// Section headline.
    pub title: String,
    /// The updates, in display order.
    pub items: Vec<UpdateItem>,
    /// Whether the headline renders.
    pub show_title: bool,
    /// Style overrides.
    #[serde(flatten)]
    pub style: BlockStyle,
}

impl Default for MultiUpdateProps {
    fn default() -> Self {
        Self {
            title: "More updates".to_string(),
            items: vec![UpdateItem::default(), UpdateItem {
                title: "New keyboard shortcuts".to_string(),
                description: "Navigate the whole app without leaving the keyboard.".to_string(),
                link_url: String::new(),
                link_label: "Learn more".to_string(),
            }],
            show_title: true,
            style: BlockStyle::default(),
        }
    }
}

/// Properties of an item-grid block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ItemGridProps {
    /// Section headline.
    pub title: String,
    /// Cells per row, clamped to 1..=3 at render time.
    pub columns: u32,
    /// The cells, row-major.
    pub items: Vec<GridItem>,
    /// Whether the headline renders.
    pub show_title: bool,
    /// Style overrides.
    #[serde(flatten)]
    pub style: BlockStyle,
}

impl Default for ItemGridProps {
    fn default() -> Self {
        Self {
            title: "Highlights".to_string(),
            columns: 2,
            items: vec![
                GridItem::default(),
                GridItem {
                    icon: "🔍".to_string(),
                    title: "Smarter search".to_string(),
                    description: "Filters understand dates, people, and tags.".to_string(),
                },
                GridItem {
                    icon: "🧩".to_string(),
                    title: "New integrations".to_string(),
                    description: "Connect the tools your team already uses.".to_string(),
                },
                GridItem {
                    icon: "🔒".to_string(),
                    title: "Granular sharing".to_string(),
                    description: "Per-block permissions for shared documents.".to_string(),
                },
            ],
            show_title: true,
            style: BlockStyle::default(),
        }
    }
}

/// Properties of a warning block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WarningProps {
    /// Banner headline.
    pub title: String,
    /// Banner body.
    pub message: String,
    /// Accent severity.
    pub severity: Severity,
    /// Whether the leading icon renders.
    pub show_icon: bool,
    /// Whether the headline renders.
    pub show_title: bool,
    /// Style overrides.
    #[serde(flatten)]
    pub style: BlockStyle,
}

impl Default for WarningProps {
    fn default() -> Self {
        Self {
            title: "Heads up".to_string(),
            message: "Scheduled maintenance this Saturday from 02:00 to 04:00 UTC.".to_string(),
            severity: Severity::Warning,
            show_icon: true,
            show_title: true,
            style: BlockStyle::default(),
        }
    }
}

/// Properties of a code-snippet block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CodeSnippetProps {
    /// Section headline.
    pub title: String,
    /// The code, rendered verbatim in a monospace box.
    pub code: String,
    /// Language hint shown in the box header.
    pub language: String,
    /// Caption under the box.
    pub caption: String,
    /// Whether the headline renders.
    pub show_title: bool,
    /// Style overrides.
    #[serde(flatten)]
    pub style: BlockStyle,
}

impl Default for CodeSnippetProps {
    fn default() -> Self {
        Self {
            title: "Try it from the CLI".to_string(),
            code: "npm install @example/cli\nexample init my-workspace".to_string(),
            language: "bash".to_string(),
            caption: String::new(),
            show_title: true,
            style: BlockStyle::default(),
        }
    }
}

/// Properties of a two-column block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TwoColumnProps {
    /// Section headline.
    pub title: String,
    /// Left column headline.
    pub left_title: String,
    /// Left column prose.
    pub left_body: String,
    /// Right column headline.
    pub right_title: String,
    /// Right column prose.
    pub right_body: String,
    /// Whether the section headline renders.
    pub show_title: bool,
    /// Style overrides.
    #[serde(flatten)]
    pub style: BlockStyle,
}

impl Default for TwoColumnProps {
    fn default() -> Self {
        Self {
            title: "Side by side".to_string(),
            left_title: "Before".to_string(),
            left_body: "Exports required a desktop app and a lot of patience.".to_string(),
            right_title: "After".to_string(),
            right_body: "One click in the browser, ready in seconds.".to_string(),
            show_title: true,
            style: BlockStyle::default(),
        }
    }
}

/// Properties of a video block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VideoBlockProps {
    /// Section headline.
    pub title: String,
    /// Poster image; email clients cannot embed playback.
    pub thumbnail_url: String,
    /// Link target for the thumbnail.
    pub video_url: String,
    /// Duration label overlaid on the thumbnail.
    pub duration: String,
    /// Caption under the thumbnail.
    pub caption: String,
    /// Whether the headline renders.
    pub show_title: bool,
    /// Style overrides.
    #[serde(flatten)]
    pub style: BlockStyle,
}

impl Default for VideoBlockProps {
    fn default() -> Self {
        Self {
            title: "Watch the two-minute tour".to_string(),
            thumbnail_url: "https://placehold.co/1200x675".to_string(),
            video_url: "https://example.com/demo".to_string(),
            duration: "2:04".to_string(),
            caption: String::new(),
            show_title: true,
            style: BlockStyle::default(),
        }
    }
}

/// Properties of a stats-metrics block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StatsMetricsProps {
    /// Section headline.
    pub title: String,
    /// The numbers, in display order.
    pub stats: Vec<Stat>,
    /// Whether the headline renders.
    pub show_title: bool,
    /// Style overrides.
    #[serde(flatten)]
    pub style: BlockStyle,
}

impl Default for StatsMetricsProps {
    fn default() -> Self {
        Self {
            title: "By the numbers".to_string(),
            stats: vec![
                Stat::default(),
                Stat {
                    label: "Documents shared".to_string(),
                    value: "18k".to_string(),
                    delta: "+31%".to_string(),
                },
                Stat {
                    label: "Median export time".to_string(),
                    value: "0.8s".to_string(),
                    delta: "-45%".to_string(),
                },
            ],
            show_title: true,
            style: BlockStyle::default(),
        }
    }
}

/// Properties of a timeline block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TimelineProps {
    /// Section headline.
    pub title: String,
    /// The entries, in display order.
    pub entries: Vec<TimelineEntry>,
    /// Whether the headline renders.
    pub show_title: bool,
    /// Style overrides.
    #[serde(flatten)]
    pub style: BlockStyle,
}

impl Default for TimelineProps {
    fn default() -> Self {
        Self {
            title: "Rollout timeline".to_string(),
            entries: vec![
                TimelineEntry::default(),
                TimelineEntry {
                    date: "Week 2".to_string(),
                    title: "General availability".to_string(),
                    description: "Enabled for every workspace automatically.".to_string(),
                },
            ],
            show_title: true,
            style: BlockStyle::default(),
        }
    }
}

/// Properties of a divider block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DividerProps {
    /// Rule style.
    pub line_style: LineStyle,
    /// Rule color override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorValue>,
    /// Vertical whitespace above and below, in px.
    pub spacing: u32,
}

impl Default for DividerProps {
    fn default() -> Self {
        Self {
            line_style: LineStyle::Solid,
            color: None,
            spacing: 24,
        }
    }
}

/// Properties of a changelog block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChangelogProps {
    /// Section headline.
    pub title: String,
    /// Release tag shown next to the headline.
    pub version: String,
    /// The entries, in display order.
    pub entries: Vec<ChangeEntry>,
    /// Whether the headline renders.
    pub show_title: bool,
    /// Style overrides.
    #[serde(flatten)]
    pub style: BlockStyle,
}

impl Default for ChangelogProps {
    fn default() -> Self {
        Self {
            title: "Changelog".to_string(),
            version: "v2.4.0".to_string(),
            entries: vec![
                ChangeEntry::default(),
                ChangeEntry {
                    kind: ChangeKind::Fixed,
                    text: "Pasted images keep their original resolution.".to_string(),
                },
                ChangeEntry {
                    kind: ChangeKind::Changed,
                    text: "Draft autosave now debounces at two seconds.".to_string(),
                },
            ],
            show_title: true,
            style: BlockStyle::default(),
        }
    }
}

/// Properties of a deprecation block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeprecationProps {
    /// Notice headline.
    pub title: String,
    /// What is going away and why.
    pub message: String,
    /// When the old behavior stops working.
    pub sunset_date: String,
    /// Migration guide target.
    pub migration_url: String,
    /// Migration link text.
    pub migration_label: String,
    /// Whether the headline renders.
    pub show_title: bool,
    /// Style overrides.
    #[serde(flatten)]
    pub style: BlockStyle,
}

impl Default for DeprecationProps {
    fn default() -> Self {
        Self {
            title: "Deprecation notice".to_string(),
            message: "The v1 export API stops accepting requests on the sunset date."
                .to_string(),
            sunset_date: "June 30".to_string(),
            migration_url: "https://example.com/docs/migrate".to_string(),
            migration_label: "Migration guide".to_string(),
            show_title: true,
            style: BlockStyle::default(),
        }
    }
}

/// Properties of a metrics-snapshot block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MetricsSnapshotProps {
    /// Section headline.
    pub title: String,
    /// The reporting period label.
    pub period: String,
    /// The numbers, in display order.
    pub metrics: Vec<Stat>,
    /// Whether the headline renders.
    pub show_title: bool,
    /// Style overrides.
    #[serde(flatten)]
    pub style: BlockStyle,
}

impl Default for MetricsSnapshotProps {
    fn default() -> Self {
        Self {
            title: "Monthly snapshot".to_string(),
            period: "This month".to_string(),
            metrics: vec![
                Stat {
                    label: "Uptime".to_string(),
                    value: "99.99%".to_string(),
                    delta: String::new(),
                },
                Stat {
                    label: "P95 latency".to_string(),
                    value: "120ms".to_string(),
                    delta: "-8%".to_string(),
                },
            ],
            show_title: true,
            style: BlockStyle::default(),
        }
    }
}

/// Properties of an NPS rating block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NpsRatingProps {
    /// Section headline.
    pub title: String,
    /// The question above the score row.
    pub question: String,
    /// Caption under the lowest score.
    pub low_label: String,
    /// Caption under the highest score.
    pub high_label: String,
    /// Whether the headline renders.
    pub show_title: bool,
    /// Style overrides.
    #[serde(flatten)]
    pub style: BlockStyle,
}

impl Default for NpsRatingProps {
    fn default() -> Self {
        Self {
            title: "Quick question".to_string(),
            question: "How likely are you to recommend us to a colleague?".to_string(),
            low_label: "Not likely".to_string(),
            high_label: "Very likely".to_string(),
            show_title: true,
            style: BlockStyle::default(),
        }
    }
}

/// Properties of a bento-grid block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BentoGridProps {
    /// Section headline.
    pub title: String,
    /// The tiles, in display order; wide tiles take a full row.
    pub tiles: Vec<BentoTile>,
    /// Whether the headline renders.
    pub show_title: bool,
    /// Style overrides.
    #[serde(flatten)]
    pub style: BlockStyle,
}

impl Default for BentoGridProps {
    fn default() -> Self {
        Self {
            title: "Feature grid".to_string(),
            tiles: vec![
                BentoTile {
                    title: "Live collaboration".to_string(),
                    description: "See teammates' cursors as they edit.".to_string(),
                    image_url: String::new(),
                    wide: true,
                },
                BentoTile::default(),
                BentoTile {
                    title: "Offline drafts".to_string(),
                    description: "Keep writing on a plane; sync later.".to_string(),
                    image_url: String::new(),
                    wide: false,
                },
            ],
            show_title: true,
            style: BlockStyle::default(),
        }
    }
}

/// Properties of a card-grid block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CardGridProps {
    /// Section headline.
    pub title: String,
    /// The cards, in display order, two per row.
    pub cards: Vec<Card>,
    /// Whether the headline renders.
    pub show_title: bool,
    /// Style overrides.
    #[serde(flatten)]
    pub style: BlockStyle,
}

impl Default for CardGridProps {
    fn default() -> Self {
        Self {
            title: "From the blog".to_string(),
            cards: vec![Card::default(), Card {
                title: "What shipped in April".to_string(),
                description: "A month of quality-of-life improvements.".to_string(),
                image_url: String::new(),
                link_url: "https://example.com/blog/april".to_string(),
                link_label: "Read more".to_string(),
            }],
            show_title: true,
            style: BlockStyle::default(),
        }
    }
}

/// Properties of a comparison-table block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ComparisonTableProps {
    /// Section headline.
    pub title: String,
    /// Column headers after the row-label column.
    pub columns: Vec<String>,
    /// The rows, in display order.
    pub rows: Vec<ComparisonRow>,
    /// Whether the headline renders.
    pub show_title: bool,
    /// Style overrides.
    #[serde(flatten)]
    pub style: BlockStyle,
}

impl Default for ComparisonTableProps {
    fn default() -> Self {
        Self {
            title: "Plan comparison".to_string(),
            columns: vec!["Free".to_string(), "Pro".to_string()],
            rows: vec![
                ComparisonRow {
                    label: "Workspaces".to_string(),
                    values: vec!["1".to_string(), "Unlimited".to_string()],
                },
                ComparisonRow {
                    label: "Version history".to_string(),
                    values: vec!["7 days".to_string(), "Forever".to_string()],
                },
            ],
            show_title: true,
            style: BlockStyle::default(),
        }
    }
}

/// Properties of a gif-demo block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GifDemoProps {
    /// Section headline.
    pub title: String,
    /// Animated image source.
    pub gif_url: String,
    /// Alt text.
    pub alt: String,
    /// Caption under the image.
    pub caption: String,
    /// Optional link target wrapping the image.
    pub link_url: String,
    /// Whether the headline renders.
    pub show_title: bool,
    /// Style overrides.
    #[serde(flatten)]
    pub style: BlockStyle,
}

impl Default for GifDemoProps {
    fn default() -> Self {
        Self {
            title: "See it in action".to_string(),
            gif_url: "https://placehold.co/1200x675.gif".to_string(),
            alt: "Product demo".to_string(),
            caption: String::new(),
            link_url: String::new(),
            show_title: true,
            style: BlockStyle::default(),
        }
    }
}

/// Properties of an RSVP block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RsvpProps {
    /// Invitation headline.
    pub title: String,
    /// What the event is.
    pub description: String,
    /// Display date and time.
    pub event_date: String,
    /// Where it happens.
    pub location: String,
    /// Reply options, one button each.
    pub options: Vec<String>,
    /// Whether the headline renders.
    pub show_title: bool,
    /// Style overrides.
    #[serde(flatten)]
    pub style: BlockStyle,
}

impl Default for RsvpProps {
    fn default() -> Self {
        Self {
            title: "You're invited".to_string(),
            description: "Join the live walkthrough of everything in this release.".to_string(),
            event_date: "Thursday, 11:00 PT".to_string(),
            location: "Online".to_string(),
            options: vec!["Yes".to_string(), "No".to_string(), "Maybe".to_string()],
            show_title: true,
            style: BlockStyle::default(),
        }
    }
}

/// Properties of a quick-poll block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QuickPollProps {
    /// Section headline.
    pub title: String,
    /// The poll question.
    pub question: String,
    /// Answer options, one button each.
    pub options: Vec<String>,
    /// Whether the headline renders.
    pub show_title: bool,
    /// Style overrides.
    #[serde(flatten)]
    pub style: BlockStyle,
}

impl Default for QuickPollProps {
    fn default() -> Self {
        Self {
            title: "Quick poll".to_string(),
            question: "Which update matters most to your team?".to_string(),
            options: vec![
                "Faster exports".to_string(),
                "Comment threads".to_string(),
                "New integrations".to_string(),
            ],
            show_title: true,
            style: BlockStyle::default(),
        }
    }
}

/// Properties of a feedback block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FeedbackProps {
    /// Section headline.
    pub title: String,
    /// The ask under the headline.
    pub prompt: String,
    /// Positive button label.
    pub positive_label: String,
    /// Negative button label.
    pub negative_label: String,
    /// Whether the headline renders.
    pub show_title: bool,
    /// Style overrides.
    #[serde(flatten)]
    pub style: BlockStyle,
}

impl Default for FeedbackProps {
    fn default() -> Self {
        Self {
            title: "Tell us what you think".to_string(),
            prompt: "Was this update useful?".to_string(),
            positive_label: "👍 Useful".to_string(),
            negative_label: "👎 Not useful".to_string(),
            show_title: true,
            style: BlockStyle::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_round_trip_for_every_kind() {
        for kind in BlockKind::ALL {
            assert_eq!(BlockKind::from_tag(kind.as_str()), Some(*kind));
        }
    }

    #[test]
    fn test_new_block_carries_complete_defaults() {
        // The defaults bag must be a superset of itself after a serde round
        // trip through an empty props object.
        for kind in BlockKind::ALL {
            let block = ContentBlock::with_props(*kind, serde_json::json!({}));
            assert_eq!(block.body, BlockBody::defaults_for(*kind), "{}", kind.as_str());
            assert!(!block.id.is_empty());
        }
    }

    #[test]
    fn test_overrides_merge_over_defaults() {
        let block = ContentBlock::with_props(
            BlockKind::FeatureList,
            serde_json::json!({"title": "Custom title", "showBullets": false}),
        );
        let BlockBody::FeatureList(props) = &block.body else {
            panic!("wrong variant");
        };
        assert_eq!(props.title, "Custom title");
        assert!(!props.show_bullets);
        // Untouched defaults survive the merge.
        assert_eq!(props.icon, "✓");
        assert_eq!(props.bullets.len(), 3);
    }

    #[test]
    fn test_wire_shape_is_id_type_props() {
        let block = ContentBlock::new(BlockKind::Divider);
        let value = serde_json::to_value(&block).unwrap();
        assert!(value.get("id").is_some());
        assert_eq!(value["type"], "divider");
        assert!(value["props"].is_object());
    }

    #[test]
    fn test_unknown_tag_deserializes_to_unknown() {
        let raw = serde_json::json!({
            "id": "b1",
            "type": "hologram-banner",
            "props": {"title": "??"}
        });
        let block: ContentBlock = serde_json::from_value(raw).unwrap();
        assert_eq!(block.body, BlockBody::Unknown);
        assert_eq!(block.tag(), "unknown");
    }

    #[test]
    fn test_bad_override_types_fall_back_to_defaults() {
        let block = ContentBlock::with_props(
            BlockKind::StatsMetrics,
            serde_json::json!({"stats": "not-an-array"}),
        );
        assert_eq!(block.body, BlockBody::defaults_for(BlockKind::StatsMetrics));
    }

    #[test]
    fn test_camel_case_props_on_the_wire() {
        let block = ContentBlock::new(BlockKind::FeatureScreenshot);
        let value = serde_json::to_value(&block).unwrap();
        let props = &value["props"];
        assert!(props.get("imageUrl").is_some());
        assert!(props.get("showBullets").is_some());
        assert!(props.get("image_url").is_none());
    }
}
