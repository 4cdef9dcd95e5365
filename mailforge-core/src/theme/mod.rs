//! Theme catalog and color-scheme resolution
//!
//! A theme is a named catalog entry providing background+foreground pairs for
//! the three zones of an email (header, body, footer). Resolution derives two
//! extra "button token" shades per zone and enforces foreground contrast, and
//! is recomputed from the catalog on every call; applying the same theme
//! twice can never accumulate.

use serde::{Deserialize, Serialize};

use crate::document::color::{self, ColorValue, Rgb};
use crate::document::{blocks::BlockStyle, FooterConfig, GlobalThemeSettings, HeaderConfig};

/// Zone base lightness (percent) below which the zone counts as dark and
/// button tokens switch to the light low-saturation variants.
pub const DARK_ZONE_LIGHTNESS: f64 = 30.0;

/// Saturation cap (percent) for button tokens derived on dark zones.
pub const DARK_ZONE_SATURATION_CAP: f64 = 20.0;

/// Foreground forced onto dark backgrounds.
const LIGHT_FOREGROUND: &str = "#ffffff";

/// Rendering color mode. Only light mode ships; dark-mode email support is
/// client-controlled and out of the catalog's hands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Light mode.
    #[default]
    Light,
}

/// A background+foreground pair for one zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneColors {
    /// Zone background.
    pub bg: &'static str,
    /// Zone foreground.
    pub fg: &'static str,
}

/// One catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeDefinition {
    /// Stable id referenced by `GlobalThemeSettings::theme_id`.
    pub id: &'static str,
    /// Display label for the theme picker.
    pub label: &'static str,
    /// Header zone colors.
    pub header: ZoneColors,
    /// Body zone colors.
    pub body: ZoneColors,
    /// Footer zone colors.
    pub footer: ZoneColors,
}

/// The fixed theme catalog.
pub const CATALOG: &[ThemeDefinition] = &[
    ThemeDefinition {
        id: "classic",
        label: "Classic",
        header: ZoneColors { bg: "#ffffff", fg: "#111827" },
        body: ZoneColors { bg: "#ffffff", fg: "#374151" },
        footer: ZoneColors { bg: "#f1f5f9", fg: "#475569" },
    },
    ThemeDefinition {
        id: "minimal",
        label: "Minimal",
        header: ZoneColors { bg: "#fafafa", fg: "#18181b" },
        body: ZoneColors { bg: "#ffffff", fg: "#3f3f46" },
        footer: ZoneColors { bg: "#fafafa", fg: "#71717a" },
    },
    ThemeDefinition {
        id: "midnight",
        label: "Midnight",
        header: ZoneColors { bg: "#0f172a", fg: "#f8fafc" },
        body: ZoneColors { bg: "#1e293b", fg: "#e2e8f0" },
        footer: ZoneColors { bg: "#0f172a", fg: "#94a3b8" },
    },
    ThemeDefinition {
        id: "ocean",
        label: "Ocean",
        header: ZoneColors { bg: "#ecfeff", fg: "#164e63" },
        body: ZoneColors { bg: "#ffffff", fg: "#334155" },
        footer: ZoneColors { bg: "#cffafe", fg: "#155e75" },
    },
    ThemeDefinition {
        id: "sunset",
        label: "Sunset",
        header: ZoneColors { bg: "#fff7ed", fg: "#7c2d12" },
        body: ZoneColors { bg: "#ffffff", fg: "#44403c" },
        footer: ZoneColors { bg: "#ffedd5", fg: "#9a3412" },
    },
    ThemeDefinition {
        id: "forest",
        label: "Forest",
        header: ZoneColors { bg: "#f0fdf4", fg: "#14532d" },
        body: ZoneColors { bg: "#ffffff", fg: "#374151" },
        footer: ZoneColors { bg: "#dcfce7", fg: "#166534" },
    },
];

/// Look up a catalog entry, falling back to `classic` for unknown ids.
#[must_use]
pub fn catalog_entry(theme_id: &str) -> &'static ThemeDefinition {
    CATALOG
        .iter()
        .find(|t| t.id == theme_id)
        .unwrap_or(&CATALOG[0])
}

/// Concrete colors for one zone, including the derived button tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneScheme {
    /// Zone background.
    pub bg: String,
    /// Contrast-checked zone foreground.
    pub fg: String,
    /// First derived button-token shade.
    pub bg200: String,
    /// Second, lighter derived shade.
    pub bg300: String,
}

/// The fully resolved scheme for a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorScheme {
    /// Header zone.
    pub header: ZoneScheme,
    /// Body zone.
    pub body: ZoneScheme,
    /// Footer zone.
    pub footer: ZoneScheme,
    /// Accent (buttons, links, badges), from the primary color.
    pub accent: String,
    /// Foreground paired with the accent.
    pub accent_fg: String,
}

/// Resolve the concrete color scheme for a theme id and primary color.
///
/// Always recomputed from the catalog entry and the global settings, never
/// from previously derived values, so repeated application is idempotent.
#[must_use]
pub fn resolve_color_scheme(
    _mode: ColorMode,
    theme_id: &str,
    primary: &ColorValue,
) -> ColorScheme {
    let def = catalog_entry(theme_id);
    let accent = primary.resolve("#4f46e5");
    let accent_fg = if color::needs_light_foreground(&accent) {
        LIGHT_FOREGROUND.to_string()
    } else {
        "#111827".to_string()
    };
    ColorScheme {
        header: derive_zone(def.header),
        body: derive_zone(def.body),
        footer: derive_zone(def.footer),
        accent,
        accent_fg,
    }
}

/// Derive one zone: button tokens via HSL lightening, contrast-checked
/// foreground.
fn derive_zone(zone: ZoneColors) -> ZoneScheme {
    let rgb = Rgb::parse(zone.bg).unwrap_or(Rgb {
        r: 255,
        g: 255,
        b: 255,
    });
    let hsl = rgb.to_hsl();

    let (bg200, bg300) = if hsl.l < DARK_ZONE_LIGHTNESS {
        // Lightening a near-black base barely moves it; interactive
        // elements on dark zones get light, desaturated shades instead.
        let capped = hsl.with_saturation(hsl.s.min(DARK_ZONE_SATURATION_CAP));
        (
            capped.with_lightness(90.0).to_rgb().to_hex(),
            capped.with_lightness(95.0).to_rgb().to_hex(),
        )
    } else {
        (
            hsl.with_lightness(hsl.l + (100.0 - hsl.l) * 0.5).to_rgb().to_hex(),
            hsl.with_lightness(hsl.l + (100.0 - hsl.l) * 0.75).to_rgb().to_hex(),
        )
    };

    let fg = if rgb.relative_luminance() < color::DARK_LUMINANCE_THRESHOLD {
        LIGHT_FOREGROUND.to_string()
    } else {
        zone.fg.to_string()
    };

    ZoneScheme {
        bg: zone.bg.to_string(),
        fg,
        bg200,
        bg300,
    }
}

/// Concrete header colors after override resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedHeader {
    /// Header background.
    pub background: String,
    /// Title color.
    pub title_color: String,
    /// Date line color.
    pub date_color: String,
    /// Badge background.
    pub badge_bg: String,
    /// Badge text color.
    pub badge_fg: String,
    /// Whether the dark logo variant zone applies.
    pub dark_background: bool,
}

/// Resolve header colors: `override ?? themeDerived`, recomputed every call.
#[must_use]
pub fn resolve_header(config: &HeaderConfig, scheme: &ColorScheme) -> ResolvedHeader {
    let background = config
        .background
        .as_ref()
        .map_or_else(|| scheme.header.bg.clone(), |c| c.resolve(&scheme.header.bg));
    let dark_background = color::needs_light_foreground(&background);
    let derived_fg = if dark_background {
        LIGHT_FOREGROUND.to_string()
    } else {
        scheme.header.fg.clone()
    };
    ResolvedHeader {
        title_color: config
            .title_color
            .as_ref()
            .map_or_else(|| derived_fg.clone(), |c| c.resolve(&derived_fg)),
        date_color: config
            .date_color
            .as_ref()
            .map_or_else(|| derived_fg.clone(), |c| c.resolve(&derived_fg)),
        badge_bg: scheme.accent.clone(),
        badge_fg: scheme.accent_fg.clone(),
        background,
        dark_background,
    }
}

/// Concrete footer colors after override resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFooter {
    /// Footer background.
    pub background: String,
    /// Footer text color.
    pub text: String,
    /// Footer link color.
    pub link: String,
}

/// Resolve footer colors: `override ?? themeDerived`, recomputed every call.
#[must_use]
pub fn resolve_footer(config: &FooterConfig, scheme: &ColorScheme) -> ResolvedFooter {
    let background = config
        .background
        .as_ref()
        .map_or_else(|| scheme.footer.bg.clone(), |c| c.resolve(&scheme.footer.bg));
    let derived_fg = if color::needs_light_foreground(&background) {
        LIGHT_FOREGROUND.to_string()
    } else {
        scheme.footer.fg.clone()
    };
    let text = config
        .text_color
        .as_ref()
        .map_or_else(|| derived_fg.clone(), |c| c.resolve(&derived_fg));
    ResolvedFooter {
        link: scheme.accent.clone(),
        background,
        text,
    }
}

/// Concrete block colors after override resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedBlockStyle {
    /// Block background.
    pub background: String,
    /// Heading color.
    pub heading: String,
    /// Body text color.
    pub text: String,
    /// De-emphasized text color.
    pub muted: String,
    /// Button background.
    pub button_bg: String,
    /// Button text color.
    pub button_fg: String,
    /// Whether the block background reads as dark (perceived brightness).
    pub is_dark: bool,
}

/// Resolve one block's colors against the scheme.
///
/// Darkness is recomputed per block from its own resolved background rather
/// than inherited, since any block may carry its own override.
#[must_use]
pub fn resolve_block_style(
    style: &BlockStyle,
    scheme: &ColorScheme,
    _theme: &GlobalThemeSettings,
) -> ResolvedBlockStyle {
    let background = style
        .background
        .as_ref()
        .map_or_else(|| scheme.body.bg.clone(), |c| c.resolve(&scheme.body.bg));
    let is_dark = color::is_dark_background(&background);
    let (heading, derived_text, muted) = if is_dark {
        (
            LIGHT_FOREGROUND.to_string(),
            "#e2e8f0".to_string(),
            "#94a3b8".to_string(),
        )
    } else {
        (
            "#111827".to_string(),
            scheme.body.fg.clone(),
            "#6b7280".to_string(),
        )
    };
    let text = style
        .text_color
        .as_ref()
        .map_or_else(|| derived_text.clone(), |c| c.resolve(&derived_text));
    ResolvedBlockStyle {
        button_bg: scheme.accent.clone(),
        button_fg: scheme.accent_fg.clone(),
        background,
        heading,
        text,
        muted,
        is_dark,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scheme() -> ColorScheme {
        resolve_color_scheme(ColorMode::Light, "classic", &ColorValue::token("indigo"))
    }

    #[test]
    fn test_catalog_lookup_falls_back_to_classic() {
        assert_eq!(catalog_entry("classic").id, "classic");
        assert_eq!(catalog_entry("does-not-exist").id, "classic");
    }

    #[test]
    fn test_button_tokens_lighten_light_zones() {
        let s = scheme();
        // White stays white under the lightening rule.
        assert_eq!(s.header.bg200, "#ffffff");
        assert_eq!(s.header.bg300, "#ffffff");

        // A mid-lightness footer moves toward white without changing hue.
        let footer_base = Rgb::parse(&s.footer.bg).unwrap().to_hsl();
        let footer_200 = Rgb::parse(&s.footer.bg200).unwrap().to_hsl();
        assert!(footer_200.l > footer_base.l);
    }

    #[test]
    fn test_dark_zone_gets_light_desaturated_tokens() {
        let s = resolve_color_scheme(ColorMode::Light, "midnight", &ColorValue::token("indigo"));
        let t200 = Rgb::parse(&s.header.bg200).unwrap().to_hsl();
        let t300 = Rgb::parse(&s.header.bg300).unwrap().to_hsl();
        assert!((t200.l - 90.0).abs() < 2.0);
        assert!((t300.l - 95.0).abs() < 2.0);
        assert!(t200.s <= DARK_ZONE_SATURATION_CAP + 1.0);
    }

    #[test]
    fn test_dark_zone_forces_light_foreground() {
        let s = resolve_color_scheme(ColorMode::Light, "midnight", &ColorValue::token("indigo"));
        assert_eq!(s.header.fg, "#ffffff");
        // Light zones keep the catalog foreground.
        assert_eq!(scheme().header.fg, "#111827");
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let s = scheme();
        let header = HeaderConfig::default();
        let once = resolve_header(&header, &s);
        let twice = resolve_header(&header, &s);
        assert_eq!(once, twice);

        let style = BlockStyle::default();
        let theme = GlobalThemeSettings::default();
        assert_eq!(
            resolve_block_style(&style, &s, &theme),
            resolve_block_style(&style, &s, &theme)
        );
    }

    #[test]
    fn test_header_override_wins_over_derived() {
        let s = scheme();
        let config = HeaderConfig {
            title_color: Some(ColorValue::literal("#ff0000")),
            ..HeaderConfig::default()
        };
        assert_eq!(resolve_header(&config, &s).title_color, "#ff0000");
    }

    #[test]
    fn test_unexpectedly_dark_header_override_flips_foreground() {
        let s = scheme();
        let config = HeaderConfig {
            background: Some(ColorValue::literal("#0b0f19")),
            ..HeaderConfig::default()
        };
        let resolved = resolve_header(&config, &s);
        assert!(resolved.dark_background);
        assert_eq!(resolved.title_color, "#ffffff");
    }

    #[test]
    fn test_block_darkness_recomputed_from_own_background() {
        let s = scheme();
        let theme = GlobalThemeSettings::default();
        let dark = BlockStyle {
            background: Some(ColorValue::literal("#111827")),
            ..BlockStyle::default()
        };
        let resolved = resolve_block_style(&dark, &s, &theme);
        assert!(resolved.is_dark);
        assert_eq!(resolved.heading, "#ffffff");

        let light = resolve_block_style(&BlockStyle::default(), &s, &theme);
        assert!(!light.is_dark);
    }

    #[test]
    fn test_accent_foreground_contrast() {
        let dark_primary =
            resolve_color_scheme(ColorMode::Light, "classic", &ColorValue::literal("#1e1b4b"));
        assert_eq!(dark_primary.accent_fg, "#ffffff");

        let light_primary =
            resolve_color_scheme(ColorMode::Light, "classic", &ColorValue::literal("#fde68a"));
        assert_eq!(light_primary.accent_fg, "#111827");
    }
}
