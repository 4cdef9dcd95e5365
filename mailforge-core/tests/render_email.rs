//! End-to-end render scenarios over a realistic release-notes document.

use mailforge_core::prelude::*;

fn release_notes() -> EmailDocument {
    let mut doc = EmailDocument::default();
    doc.header.title = "Release Notes".to_string();
    doc.header.date = "April 2025".to_string();
    doc.header.version_badge = "v2.4.0".to_string();
    doc.header.title_font_size = FontSizeValue::Px(32);

    doc.push_block(BlockKind::Hero);
    doc.content.push(ContentBlock::with_props(
        BlockKind::FeatureList,
        serde_json::json!({
            "title": "What shipped",
            "bullets": ["Share drafts with a link", "Comment threads on any block"],
            "showBullets": true
        }),
    ));
    doc.push_block(BlockKind::StatsMetrics);
    doc.push_block(BlockKind::Divider);
    doc.push_block(BlockKind::Changelog);
    doc.push_block(BlockKind::NpsRating);
    doc
}

#[test]
fn renders_header_with_pixel_font_size() {
    let html = render(&release_notes(), &GlobalThemeSettings::default());
    assert!(html.contains("Release Notes"));
    assert!(html.contains("April 2025"));
    assert!(html.contains("v2.4.0"));
    assert!(html.contains("font-size: 32px"));
    // No unsuffixed 32 in any font-size declaration.
    assert!(!html.contains("font-size: 32;"));
    assert!(!html.contains("font-size: 32\""));
}

#[test]
fn renders_bullets_as_list_markup() {
    let html = render(&release_notes(), &GlobalThemeSettings::default());
    assert!(html.contains("<ul "));
    assert!(html.contains("Share drafts with a link"));
    assert!(html.contains("Comment threads on any block"));
}

#[test]
fn render_is_pure_and_deterministic() {
    let doc = release_notes();
    let theme = GlobalThemeSettings::default();
    let first = render(&doc, &theme);
    let second = render(&doc, &theme);
    assert_eq!(first, second);
}

#[test]
fn dark_theme_forces_light_header_text() {
    let theme = GlobalThemeSettings {
        theme_id: "midnight".to_string(),
        ..GlobalThemeSettings::default()
    };
    let html = render(&release_notes(), &theme);
    assert!(html.contains("background-color: #0f172a"));
    assert!(html.contains("color: #ffffff"));
}

#[test]
fn email_mode_links_every_interactive_score() {
    let doc = release_notes();
    let nps_id = doc
        .content
        .iter()
        .find(|b| matches!(b.body, BlockBody::NpsRating(_)))
        .map(|b| b.id.clone())
        .unwrap();

    let options = RenderOptions::email("https://api.example.com", "tok-abc");
    let html = render_with(&doc, &GlobalThemeSettings::default(), &options);
    for score in 0..=10 {
        assert!(
            html.contains(&format!("https://api.example.com/r/tok-abc/{nps_id}/{score}")),
            "missing score link {score}"
        );
    }

    // The in-app preview stays inert.
    let preview = render(&doc, &GlobalThemeSettings::default());
    assert!(!preview.contains("/r/tok-abc/"));
}

#[test]
fn document_survives_json_round_trip_and_renders_identically() {
    let doc = release_notes();
    let theme = GlobalThemeSettings::default();
    let json = serde_json::to_string(&doc).unwrap();
    let restored: EmailDocument = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, doc);
    assert_eq!(render(&restored, &theme), render(&doc, &theme));
}
