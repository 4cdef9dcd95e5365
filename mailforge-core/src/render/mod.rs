//! The email-HTML rendering engine
//!
//! `render` is a pure function from a document and its global theme to a
//! complete, standalone, email-client-safe HTML string: table layout, inline
//! styles, Outlook conditionals. It has no error channel; every field access
//! falls back to a default, and a block this build does not recognize renders
//! nothing.
//!
//! It does not sanitize user text beyond HTML escaping, validate URLs, or
//! enforce size limits; the export boundary downstream flags oversized
//! payloads.

mod blocks;
mod interactive;
pub mod style;

use std::fmt::Write;

use crate::document::{BlockBody, ContentBlock, EmailDocument, GlobalThemeSettings, LayoutStyle};
use crate::theme::{
    self, resolve_color_scheme, resolve_footer, resolve_header, ColorMode, ColorScheme,
    ResolvedBlockStyle,
};

use style::{escape_attr, escape_html, resolve_font_size, resolve_frame_padding};

/// How interactive blocks render their targets.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// In-app preview: response elements render inert.
    #[default]
    Preview,
    /// A served email: response elements link back to the response endpoint.
    Email {
        /// Base URL of the serving API, no trailing slash.
        api_url: String,
        /// The export token identifying this send.
        export_token: String,
    },
}

/// Options threaded through a render pass.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Interactive-block mode.
    pub mode: RenderMode,
}

impl RenderOptions {
    /// Options for a served email carrying response links.
    #[must_use]
    pub fn email(api_url: &str, export_token: &str) -> Self {
        Self {
            mode: RenderMode::Email {
                api_url: api_url.trim_end_matches('/').to_string(),
                export_token: export_token.to_string(),
            },
        }
    }

    /// The response URL for a block/value pair, when rendering for email.
    #[must_use]
    pub fn response_url(&self, block_id: &str, value: &str) -> Option<String> {
        match &self.mode {
            RenderMode::Preview => None,
            RenderMode::Email {
                api_url,
                export_token,
            } => Some(format!("{api_url}/r/{export_token}/{block_id}/{value}")),
        }
    }
}

/// Everything a block renderer needs besides its own props.
pub(crate) struct RenderCtx<'a> {
    pub theme: &'a GlobalThemeSettings,
    pub scheme: &'a ColorScheme,
    pub options: &'a RenderOptions,
    /// Resolved CSS font stack.
    pub fonts: &'static str,
    /// Button corner radius in px.
    pub radius: u32,
}

/// Render a document for the in-app preview or code view.
#[must_use]
pub fn render(document: &EmailDocument, theme: &GlobalThemeSettings) -> String {
    render_with(document, theme, &RenderOptions::default())
}

/// Render a document with explicit options.
#[must_use]
pub fn render_with(
    document: &EmailDocument,
    theme: &GlobalThemeSettings,
    options: &RenderOptions,
) -> String {
    let scheme = resolve_color_scheme(ColorMode::Light, &theme.theme_id, &theme.primary_color);
    let ctx = RenderCtx {
        theme,
        scheme: &scheme,
        options,
        fonts: theme.font_family.stack(),
        radius: theme.button_corner.radius_px(),
    };

    let mut html = String::with_capacity(32 * 1024);
    html.push_str(&document_head(document, &ctx));
    html.push_str(&open_body(&ctx));
    html.push_str(&header_row(document, &ctx));
    for block in &document.content {
        html.push_str(&render_block(block, &ctx));
    }
    if document.footer.show_footer {
        html.push_str(&footer_row(document, &ctx));
    }
    html.push_str(&close_body(&ctx));
    html
}

/// Doctype, meta tags, client-reset CSS, Outlook DPI fix.
fn document_head(document: &EmailDocument, ctx: &RenderCtx<'_>) -> String {
    let mut html = String::with_capacity(2048);
    html.push_str(
        "<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.0 Transitional//EN\" \
         \"http://www.w3.org/TR/xhtml1/DTD/xhtml1-transitional.dtd\">\n",
    );
    html.push_str(
        "<html xmlns=\"http://www.w3.org/1999/xhtml\" xmlns:v=\"urn:schemas-microsoft-com:vml\" \
         xmlns:o=\"urn:schemas-microsoft-com:office:office\">\n<head>\n",
    );
    html.push_str("<meta http-equiv=\"Content-Type\" content=\"text/html; charset=UTF-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    html.push_str("<meta name=\"x-apple-disable-message-reformatting\">\n");
    let _ = writeln!(html, "<title>{}</title>", escape_html(&document.header.title));
    html.push_str(
        "<!--[if mso]>\n<noscript>\n<xml>\n<o:OfficeDocumentSettings>\n\
         <o:PixelsPerInch>96</o:PixelsPerInch>\n</o:OfficeDocumentSettings>\n</xml>\n\
         </noscript>\n<![endif]-->\n",
    );
    // Minimal client reset; the inliner folds these onto elements downstream.
    let _ = write!(
        html,
        "<style>\n\
         body {{ margin: 0 !important; padding: 0 !important; -webkit-text-size-adjust: 100%; \
         -ms-text-size-adjust: 100%; }}\n\
         table {{ border-collapse: collapse; mso-table-lspace: 0pt; mso-table-rspace: 0pt; }}\n\
         img {{ border: 0; outline: none; text-decoration: none; -ms-interpolation-mode: bicubic; }}\n\
         a {{ color: {accent}; }}\n\
         .ExternalClass {{ width: 100%; }}\n\
         </style>\n</head>\n",
        accent = ctx.scheme.accent
    );
    html
}

/// Open the body and the centered outer/wrapper tables.
fn open_body(ctx: &RenderCtx<'_>) -> String {
    let canvas = match ctx.theme.layout_style {
        LayoutStyle::Minimal => ctx.scheme.body.bg.clone(),
        LayoutStyle::Classic | LayoutStyle::Card => ctx.scheme.footer.bg.clone(),
    };
    let wrapper_extra = match ctx.theme.layout_style {
        LayoutStyle::Card => " border-radius: 12px; border: 1px solid rgba(0,0,0,0.06);",
        LayoutStyle::Classic | LayoutStyle::Minimal => "",
    };
    let mut html = String::with_capacity(1024);
    let _ = write!(
        html,
        "<body style=\"margin: 0; padding: 0; background-color: {canvas}; font-family: {fonts};\">\n\
         <table role=\"presentation\" width=\"100%\" cellpadding=\"0\" cellspacing=\"0\" border=\"0\" \
         style=\"background-color: {canvas};\">\n<tr>\n<td align=\"center\" style=\"padding: 24px 12px;\">\n\
         <table role=\"presentation\" width=\"{width}\" cellpadding=\"0\" cellspacing=\"0\" border=\"0\" \
         style=\"width: {width}px; max-width: 100%; background-color: {body_bg};{wrapper_extra}\">\n",
        canvas = canvas,
        fonts = ctx.fonts,
        width = ctx.theme.email_width,
        body_bg = ctx.scheme.body.bg,
    );
    html
}

fn close_body(_ctx: &RenderCtx<'_>) -> String {
    "</table>\n</td>\n</tr>\n</table>\n</body>\n</html>\n".to_string()
}

/// Header row: logo, title, date, badges.
fn header_row(document: &EmailDocument, ctx: &RenderCtx<'_>) -> String {
    let header = &document.header;
    let resolved = resolve_header(header, ctx.scheme);
    let padding = resolve_frame_padding(header.padding.as_ref(), 32);
    let title_size = resolve_font_size(&header.title_font_size, 30);

    let mut html = String::with_capacity(2048);
    let _ = write!(
        html,
        "<tr>\n<td style=\"padding: {padding}px 32px; background-color: {bg}; text-align: {align};\">\n",
        padding = padding,
        bg = resolved.background,
        align = header.align.as_css(),
    );

    // Logo variant follows the resolved header background.
    let logo = if resolved.dark_background && !header.logo_dark_url.is_empty() {
        &header.logo_dark_url
    } else {
        &header.logo_url
    };
    if !logo.is_empty() {
        let _ = writeln!(
            html,
            "<img src=\"{}\" alt=\"\" height=\"32\" style=\"height: 32px; margin-bottom: 16px;\">",
            escape_attr(logo)
        );
    }

    if header.show_badges && (!header.version_badge.is_empty() || !header.category_badge.is_empty())
    {
        html.push_str("<div style=\"margin-bottom: 12px;\">\n");
        for badge in [&header.version_badge, &header.category_badge] {
            if badge.is_empty() {
                continue;
            }
            let _ = writeln!(
                html,
                "<span style=\"display: inline-block; padding: 2px 10px; margin-right: 8px; \
                 border-radius: 999px; background-color: {bg}; color: {fg}; font-size: 12px; \
                 font-weight: 600;\">{text}</span>",
                bg = resolved.badge_bg,
                fg = resolved.badge_fg,
                text = escape_html(badge),
            );
        }
        html.push_str("</div>\n");
    }

    let _ = writeln!(
        html,
        "<h1 style=\"margin: 0; font-size: {size}; line-height: 1.2; color: {color}; \
         font-family: {fonts};\">{title}</h1>",
        size = title_size,
        color = resolved.title_color,
        fonts = ctx.fonts,
        title = escape_html(&header.title),
    );
    if !header.date.is_empty() {
        let _ = writeln!(
            html,
            "<p style=\"margin: 8px 0 0 0; font-size: 14px; color: {color};\">{date}</p>",
            color = resolved.date_color,
            date = escape_html(&header.date),
        );
    }
    html.push_str("</td>\n</tr>\n");
    html
}

/// Footer row: sign-off, team, contact, unsubscribe, disclaimer.
fn footer_row(document: &EmailDocument, ctx: &RenderCtx<'_>) -> String {
    let footer = &document.footer;
    let resolved = resolve_footer(footer, ctx.scheme);
    let padding = resolve_frame_padding(footer.padding.as_ref(), 32);

    let mut html = String::with_capacity(1024);
    let _ = write!(
        html,
        "<tr>\n<td style=\"padding: {padding}px 32px; background-color: {bg}; text-align: center;\">\n",
        padding = padding,
        bg = resolved.background,
    );
    let _ = writeln!(
        html,
        "<p style=\"margin: 0 0 4px 0; font-size: 15px; font-weight: 600; color: {color};\">{msg}</p>",
        color = resolved.text,
        msg = escape_html(&footer.message),
    );
    let _ = writeln!(
        html,
        "<p style=\"margin: 0 0 12px 0; font-size: 13px; color: {color};\">{team}</p>",
        color = resolved.text,
        team = escape_html(&footer.team_name),
    );
    if !footer.contact_email.is_empty() {
        let _ = writeln!(
            html,
            "<p style=\"margin: 0 0 4px 0; font-size: 13px;\"><a href=\"mailto:{addr}\" \
             style=\"color: {link};\">{text}</a></p>",
            addr = escape_attr(&footer.contact_email),
            link = resolved.link,
            text = escape_html(&footer.contact_email),
        );
    }
    if !footer.unsubscribe_url.is_empty() {
        let _ = writeln!(
            html,
            "<p style=\"margin: 0 0 4px 0; font-size: 12px;\"><a href=\"{url}\" \
             style=\"color: {color};\">Unsubscribe</a></p>",
            url = escape_attr(&footer.unsubscribe_url),
            color = resolved.text,
        );
    }
    let _ = writeln!(
        html,
        "<p style=\"margin: 12px 0 0 0; font-size: 11px; line-height: 1.5; color: {color};\">{text}</p>",
        color = resolved.text,
        text = escape_html(&footer.disclaimer),
    );
    html.push_str("</td>\n</tr>\n");
    html
}

/// Dispatch one block to its renderer.
///
/// Banner-like blocks own their whole row; everything else is wrapped in a
/// generic padded cell carrying the block's resolved background.
fn render_block(block: &ContentBlock, ctx: &RenderCtx<'_>) -> String {
    match &block.body {
        // Self-contained rows.
        BlockBody::Hero(p) => blocks::hero(p, ctx),
        BlockBody::Warning(p) => blocks::warning(p, ctx),
        BlockBody::Deprecation(p) => blocks::deprecation(p, ctx),
        BlockBody::Divider(p) => blocks::divider(p, ctx),

        // Generic-wrapped rows.
        BlockBody::FeatureScreenshot(p) => wrapped(&p.style, ctx, |s| {
            blocks::feature_screenshot(p, s, ctx)
        }),
        BlockBody::FeatureList(p) => wrapped(&p.style, ctx, |s| blocks::feature_list(p, s, ctx)),
        BlockBody::ImageContent(p) => wrapped(&p.style, ctx, |s| blocks::image_content(p, s, ctx)),
        BlockBody::MultiUpdate(p) => wrapped(&p.style, ctx, |s| blocks::multi_update(p, s, ctx)),
        BlockBody::ItemGrid(p) => wrapped(&p.style, ctx, |s| blocks::item_grid(p, s, ctx)),
        BlockBody::CodeSnippet(p) => wrapped(&p.style, ctx, |s| blocks::code_snippet(p, s, ctx)),
        BlockBody::TwoColumn(p) => wrapped(&p.style, ctx, |s| blocks::two_column(p, s, ctx)),
        BlockBody::VideoBlock(p) => wrapped(&p.style, ctx, |s| blocks::video_block(p, s, ctx)),
        BlockBody::StatsMetrics(p) => wrapped(&p.style, ctx, |s| blocks::stats_metrics(p, s, ctx)),
        BlockBody::Timeline(p) => wrapped(&p.style, ctx, |s| blocks::timeline(p, s, ctx)),
        BlockBody::Changelog(p) => wrapped(&p.style, ctx, |s| blocks::changelog(p, s, ctx)),
        BlockBody::MetricsSnapshot(p) => {
            wrapped(&p.style, ctx, |s| blocks::metrics_snapshot(p, s, ctx))
        }
        BlockBody::BentoGrid(p) => wrapped(&p.style, ctx, |s| blocks::bento_grid(p, s, ctx)),
        BlockBody::CardGrid(p) => wrapped(&p.style, ctx, |s| blocks::card_grid(p, s, ctx)),
        BlockBody::ComparisonTable(p) => {
            wrapped(&p.style, ctx, |s| blocks::comparison_table(p, s, ctx))
        }
        BlockBody::GifDemo(p) => wrapped(&p.style, ctx, |s| blocks::gif_demo(p, s, ctx)),

        // Interactive blocks need the block id for response links.
        BlockBody::NpsRating(p) => wrapped(&p.style, ctx, |s| {
            interactive::nps_rating(p, &block.id, s, ctx)
        }),
        BlockBody::Rsvp(p) => wrapped(&p.style, ctx, |s| interactive::rsvp(p, &block.id, s, ctx)),
        BlockBody::QuickPoll(p) => wrapped(&p.style, ctx, |s| {
            interactive::quick_poll(p, &block.id, s, ctx)
        }),
        BlockBody::Feedback(p) => wrapped(&p.style, ctx, |s| {
            interactive::feedback(p, &block.id, s, ctx)
        }),

        // Not an error: a document from a newer build still renders, minus
        // the block this build does not know.
        BlockBody::Unknown => String::new(),
    }
}

/// Wrap a block's inner HTML in the generic padded row.
fn wrapped<F>(
    style: &crate::document::BlockStyle,
    ctx: &RenderCtx<'_>,
    inner: F,
) -> String
where
    F: FnOnce(&ResolvedBlockStyle) -> String,
{
    let resolved = theme::resolve_block_style(style, ctx.scheme, ctx.theme);
    let gap = style::block_gap(ctx.theme.spacing);
    let vertical = style::resolve_content_padding(style.padding.as_ref(), gap);
    let mut html = String::with_capacity(1024);
    let _ = write!(
        html,
        "<tr>\n<td style=\"padding: {vertical}px 32px; background-color: {bg};\">\n",
        vertical = vertical,
        bg = resolved.background,
    );
    html.push_str(&inner(&resolved));
    html.push_str("</td>\n</tr>\n");
    html
}

/// Shared heading line for wrapped blocks.
pub(crate) fn block_heading(title: &str, show_title: bool, color: &str) -> String {
    if !show_title || title.is_empty() {
        return String::new();
    }
    format!(
        "<h2 style=\"margin: 0 0 12px 0; font-size: 20px; line-height: 1.3; color: {color};\">{}</h2>\n",
        escape_html(title)
    )
}

/// Shared bulleted list markup; genuine `<ul><li>`, never line-broken text.
pub(crate) fn bullet_list(bullets: &[String], marker: &str, color: &str) -> String {
    if bullets.is_empty() {
        return String::new();
    }
    let mut html = String::with_capacity(256);
    let _ = writeln!(
        html,
        "<ul style=\"margin: 12px 0 0 0; padding-left: 20px; list-style: none;\">"
    );
    for bullet in bullets {
        let _ = writeln!(
            html,
            "<li style=\"margin: 0 0 8px 0; font-size: 15px; line-height: 1.5; color: {color};\">\
             {marker} {text}</li>",
            color = color,
            marker = escape_html(marker),
            text = escape_html(bullet),
        );
    }
    html.push_str("</ul>\n");
    html
}

/// Shared button markup, email-safe.
pub(crate) fn button(label: &str, url: &str, bg: &str, fg: &str, radius: u32) -> String {
    if label.is_empty() || url.is_empty() {
        return String::new();
    }
    format!(
        "<table role=\"presentation\" cellpadding=\"0\" cellspacing=\"0\" border=\"0\" \
         style=\"margin: 16px 0 0 0;\">\n<tr>\n<td style=\"background-color: {bg}; \
         border-radius: {radius}px;\">\n<a href=\"{url}\" style=\"display: inline-block; \
         padding: 12px 24px; font-size: 15px; font-weight: 600; color: {fg}; \
         text-decoration: none;\">{label}</a>\n</td>\n</tr>\n</table>\n",
        bg = bg,
        radius = radius,
        url = escape_attr(url),
        fg = fg,
        label = escape_html(label),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{BlockKind, FontSizeValue};

    fn doc_with(kind: BlockKind) -> EmailDocument {
        let mut doc = EmailDocument::default();
        doc.push_block(kind);
        doc
    }

    #[test]
    fn test_render_is_a_complete_document() {
        let html = render(&EmailDocument::default(), &GlobalThemeSettings::default());
        assert!(html.starts_with("<!DOCTYPE html"));
        assert!(html.contains("<meta name=\"x-apple-disable-message-reformatting\">"));
        assert!(html.contains("<!--[if mso]>"));
        assert!(html.ends_with("</html>\n"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let doc = doc_with(BlockKind::FeatureList);
        let theme = GlobalThemeSettings::default();
        assert_eq!(render(&doc, &theme), render(&doc, &theme));
    }

    #[test]
    fn test_header_title_and_font_size() {
        let mut doc = EmailDocument::default();
        doc.header.title = "Release Notes".to_string();
        doc.header.title_font_size = FontSizeValue::Px(32);
        let html = render(&doc, &GlobalThemeSettings::default());
        assert!(html.contains("Release Notes"));
        assert!(html.contains("font-size: 32px"));
        assert!(!html.contains("font-size: 32;"));
        assert!(!html.contains("font-size: 32\""));
    }

    #[test]
    fn test_every_known_block_renders_title() {
        for kind in BlockKind::ALL {
            if *kind == BlockKind::Divider {
                continue; // no title field
            }
            let doc = doc_with(*kind);
            let html = render(&doc, &GlobalThemeSettings::default());
            let value = serde_json::to_value(&doc.content[0]).unwrap();
            let title = value["props"]["title"].as_str().unwrap();
            assert!(
                html.contains(&escape_html(title)),
                "{} did not render its title",
                kind.as_str()
            );
        }
    }

    #[test]
    fn test_unknown_block_renders_nothing() {
        let mut doc = EmailDocument::default();
        let raw = serde_json::json!({"id": "x", "type": "mystery", "props": {}});
        doc.content.push(serde_json::from_value(raw).unwrap());
        let with_unknown = render(&doc, &GlobalThemeSettings::default());
        let empty = render(&EmailDocument::default(), &GlobalThemeSettings::default());
        assert_eq!(with_unknown, empty);
    }

    #[test]
    fn test_footer_can_be_disabled() {
        let mut doc = EmailDocument::default();
        doc.footer.show_footer = false;
        let html = render(&doc, &GlobalThemeSettings::default());
        assert!(!html.contains(&doc.footer.message));
    }

    #[test]
    fn test_feature_list_bullets_are_real_lists() {
        let mut doc = EmailDocument::default();
        let block = crate::document::ContentBlock::with_props(
            BlockKind::FeatureList,
            serde_json::json!({
                "bullets": ["Item one", "Item two"],
                "showBullets": true
            }),
        );
        doc.content.push(block);
        let html = render(&doc, &GlobalThemeSettings::default());
        assert!(html.contains("<ul "));
        assert_eq!(html.matches("<li ").count(), 2);
        assert!(html.contains("Item one"));
        assert!(html.contains("Item two"));
    }

    #[test]
    fn test_preview_mode_renders_inert_interactive_blocks() {
        let doc = doc_with(BlockKind::NpsRating);
        let html = render(&doc, &GlobalThemeSettings::default());
        assert!(!html.contains("/r/"));
    }

    #[test]
    fn test_email_mode_embeds_response_urls() {
        let mut doc = EmailDocument::default();
        let block = crate::document::ContentBlock::new(BlockKind::NpsRating);
        let id = block.id.clone();
        doc.content.push(block);
        let options = RenderOptions::email("https://api.example.com", "tok123");
        let html = render_with(&doc, &GlobalThemeSettings::default(), &options);
        assert!(html.contains(&format!("https://api.example.com/r/tok123/{id}/10")));
        assert!(html.contains(&format!("https://api.example.com/r/tok123/{id}/0")));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let mut doc = EmailDocument::default();
        doc.header.title = "<script>alert(1)</script>".to_string();
        let html = render(&doc, &GlobalThemeSettings::default());
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_email_width_is_applied() {
        let theme = GlobalThemeSettings {
            email_width: 720,
            ..GlobalThemeSettings::default()
        };
        let html = render(&EmailDocument::default(), &theme);
        assert!(html.contains("width: 720px"));
    }
}
