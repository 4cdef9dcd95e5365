//! Renderers for response-tracking blocks
//!
//! In email mode every choice is a plain link to the response endpoint
//! (`{api_url}/r/{export_token}/{block_id}/{value}`); a click is the whole
//! interaction, nothing executes in the client. In preview mode the same
//! markup renders inert so the in-app canvas never records responses.

use std::fmt::Write;

use crate::document::blocks::{FeedbackProps, NpsRatingProps, QuickPollProps, RsvpProps};
use crate::theme::ResolvedBlockStyle;

use super::style::{escape_attr, escape_html};
use super::{block_heading, RenderCtx};

/// A single choice: a link in email mode, an inert pill in preview.
fn choice(
    label: &str,
    value: &str,
    block_id: &str,
    style: &ResolvedBlockStyle,
    ctx: &RenderCtx<'_>,
) -> String {
    let css = format!(
        "display: inline-block; padding: 10px 18px; margin: 0 6px 6px 0; border-radius: {radius}px; \
         background-color: {bg}; color: {fg}; font-size: 14px; font-weight: 600; \
         text-decoration: none;",
        radius = ctx.radius,
        bg = style.button_bg,
        fg = style.button_fg,
    );
    match ctx.options.response_url(block_id, value) {
        Some(url) => format!(
            "<a href=\"{url}\" style=\"{css}\">{label}</a>\n",
            url = escape_attr(&url),
            label = escape_html(label),
        ),
        None => format!("<span style=\"{css}\">{label}</span>\n", label = escape_html(label)),
    }
}

/// NPS: an 0-10 score row with anchor labels.
pub(super) fn nps_rating(
    props: &NpsRatingProps,
    block_id: &str,
    style: &ResolvedBlockStyle,
    ctx: &RenderCtx<'_>,
) -> String {
    let mut html = String::with_capacity(1024);
    html.push_str(&block_heading(&props.title, props.show_title, &style.heading));
    if !props.question.is_empty() {
        let _ = writeln!(
            html,
            "<p style=\"margin: 0 0 12px 0; font-size: 15px; line-height: 1.5; color: {};\">{}</p>",
            style.text,
            escape_html(&props.question)
        );
    }
    html.push_str("<div>\n");
    for score in 0..=10u32 {
        let label = score.to_string();
        // Score cells run tighter than regular choice pills.
        let css = format!(
            "display: inline-block; width: 32px; padding: 8px 0; margin: 0 3px 6px 0; \
             border-radius: 6px; background-color: {bg}; color: {fg}; font-size: 14px; \
             font-weight: 600; text-align: center; text-decoration: none;",
            bg = style.button_bg,
            fg = style.button_fg,
        );
        match ctx.options.response_url(block_id, &label) {
            Some(url) => {
                let _ = writeln!(html, "<a href=\"{}\" style=\"{css}\">{label}</a>", escape_attr(&url));
            }
            None => {
                let _ = writeln!(html, "<span style=\"{css}\">{label}</span>");
            }
        }
    }
    html.push_str("</div>\n");
    let _ = writeln!(
        html,
        "<table role=\"presentation\" width=\"100%\" cellpadding=\"0\" cellspacing=\"0\" border=\"0\">\n\
         <tr>\n<td style=\"font-size: 12px; color: {muted};\">{low}</td>\n\
         <td style=\"font-size: 12px; text-align: right; color: {muted};\">{high}</td>\n</tr>\n</table>",
        muted = style.muted,
        low = escape_html(&props.low_label),
        high = escape_html(&props.high_label),
    );
    html
}

/// RSVP: invitation details plus one button per reply option.
pub(super) fn rsvp(
    props: &RsvpProps,
    block_id: &str,
    style: &ResolvedBlockStyle,
    ctx: &RenderCtx<'_>,
) -> String {
    let mut html = String::with_capacity(512);
    html.push_str(&block_heading(&props.title, props.show_title, &style.heading));
    if !props.description.is_empty() {
        let _ = writeln!(
            html,
            "<p style=\"margin: 0 0 8px 0; font-size: 15px; line-height: 1.5; color: {};\">{}</p>",
            style.text,
            escape_html(&props.description)
        );
    }
    let mut detail = String::new();
    if !props.event_date.is_empty() {
        detail.push_str(&escape_html(&props.event_date));
    }
    if !props.location.is_empty() {
        if !detail.is_empty() {
            detail.push_str(" · ");
        }
        detail.push_str(&escape_html(&props.location));
    }
    if !detail.is_empty() {
        let _ = writeln!(
            html,
            "<p style=\"margin: 0 0 12px 0; font-size: 13px; font-weight: 600; color: {};\">{detail}</p>",
            style.muted,
        );
    }
    for (i, option) in props.options.iter().enumerate() {
        html.push_str(&choice(option, &i.to_string(), block_id, style, ctx));
    }
    html
}

/// Quick poll: a question with one button per answer.
pub(super) fn quick_poll(
    props: &QuickPollProps,
    block_id: &str,
    style: &ResolvedBlockStyle,
    ctx: &RenderCtx<'_>,
) -> String {
    let mut html = String::with_capacity(512);
    html.push_str(&block_heading(&props.title, props.show_title, &style.heading));
    if !props.question.is_empty() {
        let _ = writeln!(
            html,
            "<p style=\"margin: 0 0 12px 0; font-size: 15px; line-height: 1.5; color: {};\">{}</p>",
            style.text,
            escape_html(&props.question)
        );
    }
    for (i, option) in props.options.iter().enumerate() {
        html.push_str(&choice(option, &i.to_string(), block_id, style, ctx));
    }
    html
}

/// Feedback: a thumbs up/down ask.
pub(super) fn feedback(
    props: &FeedbackProps,
    block_id: &str,
    style: &ResolvedBlockStyle,
    ctx: &RenderCtx<'_>,
) -> String {
    let mut html = String::with_capacity(512);
    html.push_str(&block_heading(&props.title, props.show_title, &style.heading));
    if !props.prompt.is_empty() {
        let _ = writeln!(
            html,
            "<p style=\"margin: 0 0 12px 0; font-size: 15px; line-height: 1.5; color: {};\">{}</p>",
            style.text,
            escape_html(&props.prompt)
        );
    }
    html.push_str(&choice(&props.positive_label, "up", block_id, style, ctx));
    html.push_str(&choice(&props.negative_label, "down", block_id, style, ctx));
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{BlockKind, ContentBlock, EmailDocument, GlobalThemeSettings};
    use crate::render::{render_with, RenderOptions};

    fn render_one(kind: BlockKind, options: &RenderOptions) -> (String, String) {
        let mut doc = EmailDocument::default();
        let block = ContentBlock::new(kind);
        let id = block.id.clone();
        doc.content.push(block);
        (render_with(&doc, &GlobalThemeSettings::default(), options), id)
    }

    #[test]
    fn test_rsvp_options_link_by_index() {
        let options = RenderOptions::email("https://api.example.com", "tok");
        let (html, id) = render_one(BlockKind::Rsvp, &options);
        assert!(html.contains(&format!("https://api.example.com/r/tok/{id}/0")));
        assert!(html.contains(&format!("https://api.example.com/r/tok/{id}/2")));
    }

    #[test]
    fn test_feedback_links_up_and_down() {
        let options = RenderOptions::email("https://api.example.com", "tok");
        let (html, id) = render_one(BlockKind::Feedback, &options);
        assert!(html.contains(&format!("/r/tok/{id}/up")));
        assert!(html.contains(&format!("/r/tok/{id}/down")));
    }

    #[test]
    fn test_poll_preview_has_no_links() {
        let (html, _) = render_one(BlockKind::QuickPoll, &RenderOptions::default());
        assert!(!html.contains("/r/"));
        // Options still render, inert.
        assert!(html.contains("Faster exports"));
    }
}
