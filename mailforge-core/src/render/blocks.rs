//! Renderers for the static content blocks
//!
//! Banner-like blocks (`hero`, `warning`, `deprecation`, `divider`) own their
//! whole `<tr>`; everything else returns inner HTML for the generic wrapped
//! row. All output is table-based and inline-styled for email clients.

use std::fmt::Write;

use crate::document::blocks::{
    BentoGridProps, CardGridProps, ChangeKind, ChangelogProps, CodeSnippetProps,
    ComparisonTableProps, DeprecationProps, DividerProps, FeatureListProps,
    FeatureScreenshotProps, GifDemoProps, HeroProps, ImageContentProps, ImageSide, ItemGridProps,
    MetricsSnapshotProps, MultiUpdateProps, Severity, StatsMetricsProps, TimelineProps,
    TwoColumnProps, VideoBlockProps, WarningProps,
};
use crate::document::color::needs_light_foreground;
use crate::theme::{resolve_block_style, ResolvedBlockStyle};

use super::style::{escape_attr, escape_html};
use super::{block_heading, bullet_list, button, RenderCtx};

/// Hero: full-bleed accent band with headline and call to action.
pub(super) fn hero(props: &HeroProps, ctx: &RenderCtx<'_>) -> String {
    let background = props
        .style
        .background
        .as_ref()
        .map_or_else(|| ctx.scheme.accent.clone(), |c| c.resolve(&ctx.scheme.accent));
    let dark = needs_light_foreground(&background);
    let fg = if dark { "#ffffff" } else { "#111827" };
    let sub_fg = if dark { "#e2e8f0" } else { "#374151" };
    // Buttons invert against the band so they stay visible on the accent.
    let (btn_bg, btn_fg) = if dark {
        ("#ffffff".to_string(), background.clone())
    } else {
        (ctx.scheme.accent.clone(), ctx.scheme.accent_fg.clone())
    };

    let mut html = String::with_capacity(1024);
    let _ = write!(
        html,
        "<tr>\n<td style=\"padding: 48px 32px; background-color: {background}; \
         text-align: {align};\">\n",
        align = props.align.as_css(),
    );
    if props.show_title && !props.title.is_empty() {
        let _ = writeln!(
            html,
            "<h1 style=\"margin: 0 0 12px 0; font-size: 28px; line-height: 1.2; color: {fg};\">{}</h1>",
            escape_html(&props.title)
        );
    }
    if !props.subtitle.is_empty() {
        let _ = writeln!(
            html,
            "<p style=\"margin: 0; font-size: 16px; line-height: 1.6; color: {sub_fg};\">{}</p>",
            escape_html(&props.subtitle)
        );
    }
    if !props.image_url.is_empty() {
        let _ = writeln!(
            html,
            "<img src=\"{src}\" alt=\"{alt}\" width=\"100%\" \
             style=\"width: 100%; border-radius: 8px; margin-top: 24px;\">",
            src = escape_attr(&props.image_url),
            alt = escape_attr(&props.image_alt),
        );
    }
    html.push_str(&button(&props.cta_label, &props.cta_url, &btn_bg, &btn_fg, ctx.radius));
    html.push_str("</td>\n</tr>\n");
    html
}

/// Warning: severity-accented callout banner.
pub(super) fn warning(props: &WarningProps, ctx: &RenderCtx<'_>) -> String {
    let (bg, border, fg, icon) = match props.severity {
        Severity::Info => ("#eff6ff", "#3b82f6", "#1e40af", "ℹ️"),
        Severity::Warning => ("#fffbeb", "#f59e0b", "#92400e", "⚠️"),
        Severity::Critical => ("#fef2f2", "#ef4444", "#991b1b", "🚨"),
    };
    let gap = super::style::block_gap(ctx.theme.spacing);

    let mut html = String::with_capacity(512);
    let _ = write!(
        html,
        "<tr>\n<td style=\"padding: {gap}px 32px; background-color: {body_bg};\">\n\
         <table role=\"presentation\" width=\"100%\" cellpadding=\"0\" cellspacing=\"0\" border=\"0\">\n\
         <tr>\n<td style=\"padding: 16px 20px; background-color: {bg}; \
         border-left: 4px solid {border}; border-radius: 6px;\">\n",
        body_bg = ctx.scheme.body.bg,
    );
    if props.show_title && !props.title.is_empty() {
        let icon_prefix = if props.show_icon {
            format!("{icon} ")
        } else {
            String::new()
        };
        let _ = writeln!(
            html,
            "<p style=\"margin: 0 0 4px 0; font-size: 15px; font-weight: 700; color: {fg};\">\
             {icon_prefix}{title}</p>",
            title = escape_html(&props.title),
        );
    }
    let _ = writeln!(
        html,
        "<p style=\"margin: 0; font-size: 14px; line-height: 1.5; color: {fg};\">{}</p>",
        escape_html(&props.message)
    );
    html.push_str("</td>\n</tr>\n</table>\n</td>\n</tr>\n");
    html
}

/// Deprecation: sunset notice with migration link.
pub(super) fn deprecation(props: &DeprecationProps, ctx: &RenderCtx<'_>) -> String {
    let gap = super::style::block_gap(ctx.theme.spacing);
    let mut html = String::with_capacity(512);
    let _ = write!(
        html,
        "<tr>\n<td style=\"padding: {gap}px 32px; background-color: {body_bg};\">\n\
         <table role=\"presentation\" width=\"100%\" cellpadding=\"0\" cellspacing=\"0\" border=\"0\">\n\
         <tr>\n<td style=\"padding: 16px 20px; background-color: #fefce8; \
         border: 1px solid #eab308; border-radius: 6px;\">\n",
        body_bg = ctx.scheme.body.bg,
    );
    if props.show_title && !props.title.is_empty() {
        let _ = writeln!(
            html,
            "<p style=\"margin: 0 0 4px 0; font-size: 15px; font-weight: 700; color: #854d0e;\">{}</p>",
            escape_html(&props.title)
        );
    }
    let _ = writeln!(
        html,
        "<p style=\"margin: 0 0 8px 0; font-size: 14px; line-height: 1.5; color: #854d0e;\">{}</p>",
        escape_html(&props.message)
    );
    if !props.sunset_date.is_empty() {
        let _ = writeln!(
            html,
            "<p style=\"margin: 0 0 8px 0; font-size: 13px; font-weight: 600; color: #a16207;\">\
             Sunset date: {}</p>",
            escape_html(&props.sunset_date)
        );
    }
    if !props.migration_url.is_empty() && !props.migration_label.is_empty() {
        let _ = writeln!(
            html,
            "<a href=\"{url}\" style=\"font-size: 14px; font-weight: 600; color: {accent};\">\
             {label} →</a>",
            url = escape_attr(&props.migration_url),
            accent = ctx.scheme.accent,
            label = escape_html(&props.migration_label),
        );
    }
    html.push_str("</td>\n</tr>\n</table>\n</td>\n</tr>\n");
    html
}

/// Divider: a styled horizontal rule in its own row.
pub(super) fn divider(props: &DividerProps, ctx: &RenderCtx<'_>) -> String {
    let color = props
        .color
        .as_ref()
        .map_or_else(|| "#e5e7eb".to_string(), |c| c.resolve("#e5e7eb"));
    format!(
        "<tr>\n<td style=\"padding: {spacing}px 32px; background-color: {bg};\">\n\
         <div style=\"border-top: 1px {line} {color}; line-height: 1px; font-size: 1px;\">&nbsp;</div>\n\
         </td>\n</tr>\n",
        spacing = props.spacing,
        bg = ctx.scheme.body.bg,
        line = props.line_style.as_css(),
    )
}

/// Feature screenshot: prose, image, bullets, optional link.
pub(super) fn feature_screenshot(
    props: &FeatureScreenshotProps,
    style: &ResolvedBlockStyle,
    ctx: &RenderCtx<'_>,
) -> String {
    let mut html = String::with_capacity(1024);
    html.push_str(&block_heading(&props.title, props.show_title, &style.heading));
    if !props.description.is_empty() {
        let _ = writeln!(
            html,
            "<p style=\"margin: 0 0 16px 0; font-size: 15px; line-height: 1.6; color: {};\">{}</p>",
            style.text,
            escape_html(&props.description)
        );
    }
    if !props.image_url.is_empty() {
        let _ = writeln!(
            html,
            "<img src=\"{src}\" alt=\"{alt}\" width=\"100%\" \
             style=\"width: 100%; border-radius: 8px; border: 1px solid #e5e7eb;\">",
            src = escape_attr(&props.image_url),
            alt = escape_attr(&props.image_alt),
        );
    }
    if props.show_bullets {
        html.push_str(&bullet_list(&props.bullets, "•", &style.text));
    }
    if !props.cta_label.is_empty() && !props.cta_url.is_empty() {
        let _ = writeln!(
            html,
            "<a href=\"{url}\" style=\"display: inline-block; margin-top: 12px; font-size: 15px; \
             font-weight: 600; color: {accent};\">{label} →</a>",
            url = escape_attr(&props.cta_url),
            accent = style.button_bg,
            label = escape_html(&props.cta_label),
        );
    }
    html
}

/// Feature list: heading, optional prose, marker bullets.
pub(super) fn feature_list(
    props: &FeatureListProps,
    style: &ResolvedBlockStyle,
    _ctx: &RenderCtx<'_>,
) -> String {
    let mut html = String::with_capacity(512);
    html.push_str(&block_heading(&props.title, props.show_title, &style.heading));
    if !props.description.is_empty() {
        let _ = writeln!(
            html,
            "<p style=\"margin: 0; font-size: 15px; line-height: 1.6; color: {};\">{}</p>",
            style.text,
            escape_html(&props.description)
        );
    }
    if props.show_bullets {
        let marker = if props.icon.is_empty() { "•" } else { &props.icon };
        html.push_str(&bullet_list(&props.bullets, marker, &style.text));
    }
    html
}

/// Image beside prose, side controlled by `image_position`.
pub(super) fn image_content(
    props: &ImageContentProps,
    style: &ResolvedBlockStyle,
    _ctx: &RenderCtx<'_>,
) -> String {
    let mut text_cell = String::with_capacity(512);
    text_cell.push_str(&block_heading(&props.title, props.show_title, &style.heading));
    if !props.body.is_empty() {
        let _ = writeln!(
            text_cell,
            "<p style=\"margin: 0; font-size: 15px; line-height: 1.6; color: {};\">{}</p>",
            style.text,
            escape_html(&props.body)
        );
    }
    if props.show_bullets {
        text_cell.push_str(&bullet_list(&props.bullets, "•", &style.text));
    }

    let image_cell = if props.image_url.is_empty() {
        String::new()
    } else {
        format!(
            "<img src=\"{src}\" alt=\"{alt}\" width=\"100%\" style=\"width: 100%; border-radius: 8px;\">",
            src = escape_attr(&props.image_url),
            alt = escape_attr(&props.image_alt),
        )
    };

    let (left, right) = match props.image_position {
        ImageSide::Left => (image_cell, text_cell),
        ImageSide::Right => (text_cell, image_cell),
    };
    format!(
        "<table role=\"presentation\" width=\"100%\" cellpadding=\"0\" cellspacing=\"0\" border=\"0\">\n\
         <tr>\n<td width=\"48%\" style=\"width: 48%; vertical-align: top;\">{left}</td>\n\
         <td width=\"4%\" style=\"width: 4%;\">&nbsp;</td>\n\
         <td width=\"48%\" style=\"width: 48%; vertical-align: top;\">{right}</td>\n</tr>\n</table>\n"
    )
}

/// Several small updates with optional links.
pub(super) fn multi_update(
    props: &MultiUpdateProps,
    style: &ResolvedBlockStyle,
    _ctx: &RenderCtx<'_>,
) -> String {
    let mut html = String::with_capacity(1024);
    html.push_str(&block_heading(&props.title, props.show_title, &style.heading));
    for (i, item) in props.items.iter().enumerate() {
        let border = if i + 1 < props.items.len() {
            " border-bottom: 1px solid #e5e7eb;"
        } else {
            ""
        };
        let _ = write!(
            html,
            "<div style=\"padding: 12px 0;{border}\">\n\
             <h3 style=\"margin: 0 0 4px 0; font-size: 16px; color: {heading};\">{title}</h3>\n\
             <p style=\"margin: 0; font-size: 14px; line-height: 1.5; color: {text};\">{desc}</p>\n",
            heading = style.heading,
            title = escape_html(&item.title),
            text = style.text,
            desc = escape_html(&item.description),
        );
        if !item.link_url.is_empty() && !item.link_label.is_empty() {
            let _ = writeln!(
                html,
                "<a href=\"{url}\" style=\"font-size: 14px; font-weight: 600; color: {accent};\">\
                 {label} →</a>",
                url = escape_attr(&item.link_url),
                accent = style.button_bg,
                label = escape_html(&item.link_label),
            );
        }
        html.push_str("</div>\n");
    }
    html
}

/// Icon/title/description grid, `columns` cells per row.
pub(super) fn item_grid(
    props: &ItemGridProps,
    style: &ResolvedBlockStyle,
    _ctx: &RenderCtx<'_>,
) -> String {
    let columns = props.columns.clamp(1, 3) as usize;
    let width_pct = 100 / columns;

    let mut html = String::with_capacity(1024);
    html.push_str(&block_heading(&props.title, props.show_title, &style.heading));
    html.push_str(
        "<table role=\"presentation\" width=\"100%\" cellpadding=\"0\" cellspacing=\"0\" border=\"0\">\n",
    );
    for row in props.items.chunks(columns) {
        html.push_str("<tr>\n");
        for item in row {
            let _ = write!(
                html,
                "<td width=\"{width_pct}%\" style=\"width: {width_pct}%; padding: 12px 8px; \
                 vertical-align: top;\">\n\
                 <div style=\"font-size: 24px; line-height: 1;\">{icon}</div>\n\
                 <h3 style=\"margin: 8px 0 4px 0; font-size: 15px; color: {heading};\">{title}</h3>\n\
                 <p style=\"margin: 0; font-size: 13px; line-height: 1.5; color: {text};\">{desc}</p>\n\
                 </td>\n",
                icon = escape_html(&item.icon),
                heading = style.heading,
                title = escape_html(&item.title),
                text = style.text,
                desc = escape_html(&item.description),
            );
        }
        // Pad the last row so columns keep their width.
        for _ in row.len()..columns {
            let _ = writeln!(html, "<td width=\"{width_pct}%\" style=\"width: {width_pct}%;\">&nbsp;</td>");
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</table>\n");
    html
}

/// Monospace code box with a language tab.
pub(super) fn code_snippet(
    props: &CodeSnippetProps,
    style: &ResolvedBlockStyle,
    _ctx: &RenderCtx<'_>,
) -> String {
    let mut html = String::with_capacity(512);
    html.push_str(&block_heading(&props.title, props.show_title, &style.heading));
    html.push_str(
        "<table role=\"presentation\" width=\"100%\" cellpadding=\"0\" cellspacing=\"0\" border=\"0\">\n<tr>\n\
         <td style=\"background-color: #0f172a; border-radius: 8px; padding: 0;\">\n",
    );
    if !props.language.is_empty() {
        let _ = writeln!(
            html,
            "<div style=\"padding: 8px 16px; border-bottom: 1px solid #1e293b; font-size: 11px; \
             letter-spacing: 0.05em; text-transform: uppercase; color: #64748b;\">{}</div>",
            escape_html(&props.language)
        );
    }
    let _ = writeln!(
        html,
        "<pre style=\"margin: 0; padding: 16px; overflow-x: auto; font-family: 'SFMono-Regular', \
         Consolas, Menlo, monospace; font-size: 13px; line-height: 1.6; color: #e2e8f0;\">{}</pre>",
        escape_html(&props.code)
    );
    html.push_str("</td>\n</tr>\n</table>\n");
    if !props.caption.is_empty() {
        let _ = writeln!(
            html,
            "<p style=\"margin: 8px 0 0 0; font-size: 12px; color: {};\">{}</p>",
            style.muted,
            escape_html(&props.caption)
        );
    }
    html
}

/// Two prose columns.
pub(super) fn two_column(
    props: &TwoColumnProps,
    style: &ResolvedBlockStyle,
    _ctx: &RenderCtx<'_>,
) -> String {
    fn column(title: &str, body: &str, style: &ResolvedBlockStyle) -> String {
        format!(
            "<h3 style=\"margin: 0 0 6px 0; font-size: 15px; color: {heading};\">{title}</h3>\n\
             <p style=\"margin: 0; font-size: 14px; line-height: 1.6; color: {text};\">{body}</p>\n",
            heading = style.heading,
            title = escape_html(title),
            text = style.text,
            body = escape_html(body),
        )
    }
    let mut html = String::with_capacity(512);
    html.push_str(&block_heading(&props.title, props.show_title, &style.heading));
    let _ = write!(
        html,
        "<table role=\"presentation\" width=\"100%\" cellpadding=\"0\" cellspacing=\"0\" border=\"0\">\n\
         <tr>\n<td width=\"48%\" style=\"width: 48%; vertical-align: top;\">{left}</td>\n\
         <td width=\"4%\" style=\"width: 4%;\">&nbsp;</td>\n\
         <td width=\"48%\" style=\"width: 48%; vertical-align: top;\">{right}</td>\n</tr>\n</table>\n",
        left = column(&props.left_title, &props.left_body, style),
        right = column(&props.right_title, &props.right_body, style),
    );
    html
}

/// Video thumbnail with play affordance and duration tag.
pub(super) fn video_block(
    props: &VideoBlockProps,
    style: &ResolvedBlockStyle,
    _ctx: &RenderCtx<'_>,
) -> String {
    let mut html = String::with_capacity(512);
    html.push_str(&block_heading(&props.title, props.show_title, &style.heading));
    let _ = write!(
        html,
        "<a href=\"{url}\" style=\"display: block; text-decoration: none;\">\n\
         <img src=\"{thumb}\" alt=\"{alt}\" width=\"100%\" \
         style=\"width: 100%; border-radius: 8px; display: block;\">\n",
        url = escape_attr(&props.video_url),
        thumb = escape_attr(&props.thumbnail_url),
        alt = escape_attr(&props.title),
    );
    let mut caption_line = String::from("▶ Watch");
    if !props.duration.is_empty() {
        let _ = write!(caption_line, " · {}", escape_html(&props.duration));
    }
    let _ = writeln!(
        html,
        "<span style=\"display: inline-block; margin-top: 8px; font-size: 14px; font-weight: 600; \
         color: {accent};\">{caption_line}</span>\n</a>",
        accent = style.button_bg,
    );
    if !props.caption.is_empty() {
        let _ = writeln!(
            html,
            "<p style=\"margin: 8px 0 0 0; font-size: 13px; color: {};\">{}</p>",
            style.muted,
            escape_html(&props.caption)
        );
    }
    html
}

/// Row of headline numbers with delta annotations.
pub(super) fn stats_metrics(
    props: &StatsMetricsProps,
    style: &ResolvedBlockStyle,
    _ctx: &RenderCtx<'_>,
) -> String {
    let mut html = String::with_capacity(512);
    html.push_str(&block_heading(&props.title, props.show_title, &style.heading));
    html.push_str(&stat_row(&props.stats, style));
    html
}

/// Metrics digest: stats row under a period label.
pub(super) fn metrics_snapshot(
    props: &MetricsSnapshotProps,
    style: &ResolvedBlockStyle,
    _ctx: &RenderCtx<'_>,
) -> String {
    let mut html = String::with_capacity(512);
    html.push_str(&block_heading(&props.title, props.show_title, &style.heading));
    if !props.period.is_empty() {
        let _ = writeln!(
            html,
            "<p style=\"margin: 0 0 12px 0; font-size: 13px; text-transform: uppercase; \
             letter-spacing: 0.05em; color: {};\">{}</p>",
            style.muted,
            escape_html(&props.period)
        );
    }
    html.push_str(&stat_row(&props.metrics, style));
    html
}

fn stat_row(stats: &[crate::document::blocks::Stat], style: &ResolvedBlockStyle) -> String {
    if stats.is_empty() {
        return String::new();
    }
    let width_pct = 100 / stats.len().max(1);
    let mut html = String::with_capacity(512);
    html.push_str(
        "<table role=\"presentation\" width=\"100%\" cellpadding=\"0\" cellspacing=\"0\" border=\"0\">\n<tr>\n",
    );
    for stat in stats {
        let _ = write!(
            html,
            "<td width=\"{width_pct}%\" style=\"width: {width_pct}%; padding: 8px; text-align: center; \
             vertical-align: top;\">\n\
             <div style=\"font-size: 26px; font-weight: 700; color: {heading};\">{value}</div>\n\
             <div style=\"font-size: 12px; margin-top: 2px; color: {muted};\">{label}</div>\n",
            heading = style.heading,
            value = escape_html(&stat.value),
            muted = style.muted,
            label = escape_html(&stat.label),
        );
        if !stat.delta.is_empty() {
            let delta_color = if stat.delta.starts_with('-') {
                "#dc2626"
            } else {
                "#059669"
            };
            let _ = writeln!(
                html,
                "<div style=\"font-size: 12px; font-weight: 600; margin-top: 2px; \
                 color: {delta_color};\">{}</div>",
                escape_html(&stat.delta)
            );
        }
        html.push_str("</td>\n");
    }
    html.push_str("</tr>\n</table>\n");
    html
}

/// Dated rollout entries down a left rail.
pub(super) fn timeline(
    props: &TimelineProps,
    style: &ResolvedBlockStyle,
    _ctx: &RenderCtx<'_>,
) -> String {
    let mut html = String::with_capacity(512);
    html.push_str(&block_heading(&props.title, props.show_title, &style.heading));
    html.push_str(
        "<table role=\"presentation\" width=\"100%\" cellpadding=\"0\" cellspacing=\"0\" border=\"0\">\n",
    );
    for entry in &props.entries {
        let _ = write!(
            html,
            "<tr>\n<td width=\"90\" style=\"width: 90px; padding: 8px 12px 8px 0; vertical-align: top; \
             font-size: 12px; font-weight: 600; text-transform: uppercase; color: {muted};\">{date}</td>\n\
             <td style=\"padding: 8px 0 8px 16px; border-left: 2px solid #e5e7eb; vertical-align: top;\">\n\
             <h3 style=\"margin: 0 0 2px 0; font-size: 15px; color: {heading};\">{title}</h3>\n\
             <p style=\"margin: 0; font-size: 14px; line-height: 1.5; color: {text};\">{desc}</p>\n\
             </td>\n</tr>\n",
            muted = style.muted,
            date = escape_html(&entry.date),
            heading = style.heading,
            title = escape_html(&entry.title),
            text = style.text,
            desc = escape_html(&entry.description),
        );
    }
    html.push_str("</table>\n");
    html
}

/// Versioned change list with category badges.
pub(super) fn changelog(
    props: &ChangelogProps,
    style: &ResolvedBlockStyle,
    _ctx: &RenderCtx<'_>,
) -> String {
    fn badge_color(kind: ChangeKind) -> &'static str {
        match kind {
            ChangeKind::Added => "#059669",
            ChangeKind::Changed => "#2563eb",
            ChangeKind::Fixed => "#d97706",
            ChangeKind::Removed => "#dc2626",
        }
    }
    let mut html = String::with_capacity(512);
    if props.show_title && !props.title.is_empty() {
        let version = if props.version.is_empty() {
            String::new()
        } else {
            format!(
                " <span style=\"font-size: 13px; font-weight: 600; color: {};\">{}</span>",
                style.muted,
                escape_html(&props.version)
            )
        };
        let _ = writeln!(
            html,
            "<h2 style=\"margin: 0 0 12px 0; font-size: 20px; line-height: 1.3; color: {};\">{}{version}</h2>",
            style.heading,
            escape_html(&props.title),
        );
    }
    for entry in &props.entries {
        let _ = writeln!(
            html,
            "<p style=\"margin: 0 0 8px 0; font-size: 14px; line-height: 1.5; color: {text};\">\
             <span style=\"display: inline-block; min-width: 64px; padding: 1px 8px; margin-right: 8px; \
             border-radius: 4px; background-color: {badge}; color: #ffffff; font-size: 11px; \
             font-weight: 700; text-align: center;\">{label}</span>{text_body}</p>",
            text = style.text,
            badge = badge_color(entry.kind),
            label = entry.kind.label(),
            text_body = escape_html(&entry.text),
        );
    }
    html
}

/// Mixed-size tiles; wide tiles take a full row, the rest pair up.
pub(super) fn bento_grid(
    props: &BentoGridProps,
    style: &ResolvedBlockStyle,
    ctx: &RenderCtx<'_>,
) -> String {
    fn tile(
        tile: &crate::document::blocks::BentoTile,
        style: &ResolvedBlockStyle,
        ctx: &RenderCtx<'_>,
    ) -> String {
        let tile_bg = resolve_block_style(
            &crate::document::BlockStyle::default(),
            ctx.scheme,
            ctx.theme,
        );
        let mut html = String::with_capacity(256);
        let _ = write!(
            html,
            "<div style=\"padding: 16px; background-color: {bg}; border: 1px solid #e5e7eb; \
             border-radius: 8px;\">\n",
            bg = tile_bg.background,
        );
        if !tile.image_url.is_empty() {
            let _ = writeln!(
                html,
                "<img src=\"{}\" alt=\"\" width=\"100%\" style=\"width: 100%; border-radius: 6px; \
                 margin-bottom: 8px;\">",
                escape_attr(&tile.image_url)
            );
        }
        let _ = write!(
            html,
            "<h3 style=\"margin: 0 0 4px 0; font-size: 15px; color: {heading};\">{title}</h3>\n\
             <p style=\"margin: 0; font-size: 13px; line-height: 1.5; color: {text};\">{desc}</p>\n</div>\n",
            heading = style.heading,
            title = escape_html(&tile.title),
            text = style.text,
            desc = escape_html(&tile.description),
        );
        html
    }

    // Group tiles into rows first: wide tiles alone, narrow tiles paired.
    let mut rows: Vec<Vec<&crate::document::blocks::BentoTile>> = Vec::new();
    let mut narrow: Vec<&crate::document::blocks::BentoTile> = Vec::new();
    for t in &props.tiles {
        if t.wide {
            for pair in narrow.chunks(2) {
                rows.push(pair.to_vec());
            }
            narrow.clear();
            rows.push(vec![t]);
        } else {
            narrow.push(t);
        }
    }
    for pair in narrow.chunks(2) {
        rows.push(pair.to_vec());
    }

    let mut html = String::with_capacity(1024);
    html.push_str(&block_heading(&props.title, props.show_title, &style.heading));
    html.push_str(
        "<table role=\"presentation\" width=\"100%\" cellpadding=\"0\" cellspacing=\"0\" border=\"0\">\n",
    );
    for row in rows {
        html.push_str("<tr>\n");
        if row.len() == 1 && row[0].wide {
            let _ = writeln!(
                html,
                "<td colspan=\"2\" style=\"padding: 6px;\">{}</td>",
                tile(row[0], style, ctx)
            );
        } else {
            for t in &row {
                let _ = writeln!(
                    html,
                    "<td width=\"50%\" style=\"width: 50%; padding: 6px; vertical-align: top;\">{}</td>",
                    tile(t, style, ctx)
                );
            }
            if row.len() == 1 {
                html.push_str("<td width=\"50%\" style=\"width: 50%;\">&nbsp;</td>\n");
            }
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</table>\n");
    html
}

/// Linked cards, two per row.
pub(super) fn card_grid(
    props: &CardGridProps,
    style: &ResolvedBlockStyle,
    _ctx: &RenderCtx<'_>,
) -> String {
    let mut html = String::with_capacity(1024);
    html.push_str(&block_heading(&props.title, props.show_title, &style.heading));
    html.push_str(
        "<table role=\"presentation\" width=\"100%\" cellpadding=\"0\" cellspacing=\"0\" border=\"0\">\n",
    );
    for pair in props.cards.chunks(2) {
        html.push_str("<tr>\n");
        for card in pair {
            html.push_str(
                "<td width=\"50%\" style=\"width: 50%; padding: 6px; vertical-align: top;\">\n\
                 <div style=\"border: 1px solid #e5e7eb; border-radius: 8px; overflow: hidden;\">\n",
            );
            if !card.image_url.is_empty() {
                let _ = writeln!(
                    html,
                    "<img src=\"{}\" alt=\"\" width=\"100%\" style=\"width: 100%; display: block;\">",
                    escape_attr(&card.image_url)
                );
            }
            let _ = write!(
                html,
                "<div style=\"padding: 12px;\">\n\
                 <h3 style=\"margin: 0 0 4px 0; font-size: 15px; color: {heading};\">{title}</h3>\n\
                 <p style=\"margin: 0; font-size: 13px; line-height: 1.5; color: {text};\">{desc}</p>\n",
                heading = style.heading,
                title = escape_html(&card.title),
                text = style.text,
                desc = escape_html(&card.description),
            );
            if !card.link_url.is_empty() && !card.link_label.is_empty() {
                let _ = writeln!(
                    html,
                    "<a href=\"{url}\" style=\"display: inline-block; margin-top: 8px; font-size: 13px; \
                     font-weight: 600; color: {accent};\">{label} →</a>",
                    url = escape_attr(&card.link_url),
                    accent = style.button_bg,
                    label = escape_html(&card.link_label),
                );
            }
            html.push_str("</div>\n</div>\n</td>\n");
        }
        if pair.len() == 1 {
            html.push_str("<td width=\"50%\" style=\"width: 50%;\">&nbsp;</td>\n");
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</table>\n");
    html
}

/// Column comparison table.
pub(super) fn comparison_table(
    props: &ComparisonTableProps,
    style: &ResolvedBlockStyle,
    _ctx: &RenderCtx<'_>,
) -> String {
    let mut html = String::with_capacity(1024);
    html.push_str(&block_heading(&props.title, props.show_title, &style.heading));
    html.push_str(
        "<table role=\"presentation\" width=\"100%\" cellpadding=\"0\" cellspacing=\"0\" border=\"0\" \
         style=\"border: 1px solid #e5e7eb; border-radius: 8px;\">\n<tr>\n\
         <td style=\"padding: 10px 12px; font-size: 13px;\">&nbsp;</td>\n",
    );
    for column in &props.columns {
        let _ = writeln!(
            html,
            "<td style=\"padding: 10px 12px; font-size: 13px; font-weight: 700; text-align: center; \
             color: {heading}; border-bottom: 2px solid #e5e7eb;\">{}</td>",
            escape_html(column),
            heading = style.heading,
        );
    }
    html.push_str("</tr>\n");
    for row in &props.rows {
        let _ = write!(
            html,
            "<tr>\n<td style=\"padding: 10px 12px; font-size: 13px; font-weight: 600; color: {heading}; \
             border-bottom: 1px solid #f1f5f9;\">{label}</td>\n",
            heading = style.heading,
            label = escape_html(&row.label),
        );
        for i in 0..props.columns.len() {
            let value = row.values.get(i).map_or("—", String::as_str);
            let _ = writeln!(
                html,
                "<td style=\"padding: 10px 12px; font-size: 13px; text-align: center; color: {text}; \
                 border-bottom: 1px solid #f1f5f9;\">{}</td>",
                escape_html(value),
                text = style.text,
            );
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</table>\n");
    html
}

/// Animated demo image with optional link and caption.
pub(super) fn gif_demo(
    props: &GifDemoProps,
    style: &ResolvedBlockStyle,
    _ctx: &RenderCtx<'_>,
) -> String {
    let mut html = String::with_capacity(512);
    html.push_str(&block_heading(&props.title, props.show_title, &style.heading));
    let img = format!(
        "<img src=\"{src}\" alt=\"{alt}\" width=\"100%\" \
         style=\"width: 100%; border-radius: 8px; display: block;\">",
        src = escape_attr(&props.gif_url),
        alt = escape_attr(&props.alt),
    );
    if props.link_url.is_empty() {
        html.push_str(&img);
        html.push('\n');
    } else {
        let _ = writeln!(
            html,
            "<a href=\"{url}\" style=\"display: block;\">{img}</a>",
            url = escape_attr(&props.link_url),
        );
    }
    if !props.caption.is_empty() {
        let _ = writeln!(
            html,
            "<p style=\"margin: 8px 0 0 0; font-size: 13px; color: {};\">{}</p>",
            style.muted,
            escape_html(&props.caption)
        );
    }
    html
}
