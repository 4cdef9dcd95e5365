//! Color values and color math
//!
//! Colors in a document are either a semantic token resolved through the
//! built-in palette, or a literal `#rrggbb` / `rgb()` / `rgba()` string.
//! Everything downstream (theme derivation, contrast checks, per-block
//! darkness detection) works on the resolved literal.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Perceived-brightness threshold below which a background counts as dark.
///
/// Weighted 299/587/114 per channel on a 0-255 scale. Kept as a constant
/// rather than re-derived; email clients render against this assumption.
pub const DARK_BRIGHTNESS_THRESHOLD: f64 = 128.0;

/// WCAG relative-luminance threshold below which a background needs a light
/// foreground.
pub const DARK_LUMINANCE_THRESHOLD: f64 = 0.5;

/// A document color: a palette token or a literal CSS color string.
///
/// On the wire both are plain strings (`"indigo"`, `"#4f46e5"`); the union is
/// enforced at construction, so legacy literal strings need no migration
/// pass. Anything that parses as a CSS color is a [`ColorValue::Literal`],
/// everything else is a [`ColorValue::Token`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ColorValue {
    /// A semantic palette token id, resolved through the built-in palette.
    Token(String),
    /// A literal CSS color string, passed through verbatim.
    Literal(String),
}

impl ColorValue {
    /// Build a color from a palette token id.
    #[must_use]
    pub fn token(id: &str) -> Self {
        Self::Token(id.to_string())
    }

    /// Build a color from a literal CSS color string.
    #[must_use]
    pub fn literal(css: &str) -> Self {
        Self::Literal(css.to_string())
    }

    /// Resolve to a concrete CSS color string.
    ///
    /// Token ids go through the palette; literals pass through verbatim. An
    /// unknown token falls back to `fallback`.
    #[must_use]
    pub fn resolve(&self, fallback: &str) -> String {
        match self {
            Self::Token(id) => PALETTE
                .get(id.as_str())
                .map_or_else(|| fallback.to_string(), |hex| (*hex).to_string()),
            Self::Literal(css) => css.clone(),
        }
    }
}

impl From<String> for ColorValue {
    fn from(raw: String) -> Self {
        if Rgb::parse(&raw).is_some() {
            Self::Literal(raw)
        } else {
            Self::Token(raw)
        }
    }
}

impl From<ColorValue> for String {
    fn from(value: ColorValue) -> Self {
        match value {
            ColorValue::Token(id) => id,
            ColorValue::Literal(css) => css,
        }
    }
}

impl Default for ColorValue {
    fn default() -> Self {
        Self::token("indigo")
    }
}

/// Semantic palette: token id to hex literal.
static PALETTE: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("indigo", "#4f46e5"),
        ("blue", "#2563eb"),
        ("sky", "#0ea5e9"),
        ("teal", "#0d9488"),
        ("emerald", "#059669"),
        ("amber", "#d97706"),
        ("orange", "#ea580c"),
        ("rose", "#e11d48"),
        ("violet", "#7c3aed"),
        ("slate", "#475569"),
        ("ink", "#111827"),
        ("paper", "#ffffff"),
    ])
});

/// An sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Parse a CSS color literal: `#rgb`, `#rrggbb`, `rgb(...)`, `rgba(...)`.
    ///
    /// Returns `None` for anything else; callers fall back to defaults.
    #[must_use]
    pub fn parse(css: &str) -> Option<Self> {
        let css = css.trim();
        if let Some(hex) = css.strip_prefix('#') {
            return Self::parse_hex(hex);
        }
        if css.starts_with("rgb(") || css.starts_with("rgba(") {
            return Self::parse_rgb_fn(css);
        }
        None
    }

    fn parse_hex(hex: &str) -> Option<Self> {
        match hex.len() {
            3 => {
                let r = u8::from_str_radix(&hex[0..1], 16).ok()?;
                let g = u8::from_str_radix(&hex[1..2], 16).ok()?;
                let b = u8::from_str_radix(&hex[2..3], 16).ok()?;
                Some(Self {
                    r: r * 17,
                    g: g * 17,
                    b: b * 17,
                })
            }
            6 | 8 => Some(Self {
                r: u8::from_str_radix(&hex[0..2], 16).ok()?,
                g: u8::from_str_radix(&hex[2..4], 16).ok()?,
                b: u8::from_str_radix(&hex[4..6], 16).ok()?,
            }),
            _ => None,
        }
    }

    fn parse_rgb_fn(css: &str) -> Option<Self> {
        let inner = css.split_once('(')?.1.strip_suffix(')')?;
        let mut parts = inner.split(',').map(str::trim);
        let r = parts.next()?.parse::<f64>().ok()?;
        let g = parts.next()?.parse::<f64>().ok()?;
        let b = parts.next()?.parse::<f64>().ok()?;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Some(Self {
            r: r.clamp(0.0, 255.0) as u8,
            g: g.clamp(0.0, 255.0) as u8,
            b: b.clamp(0.0, 255.0) as u8,
        })
    }

    /// Format as a lowercase `#rrggbb` hex string.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Perceived brightness on a 0-255 scale (299/587/114 channel weights).
    #[must_use]
    pub fn brightness(self) -> f64 {
        (299.0 * f64::from(self.r) + 587.0 * f64::from(self.g) + 114.0 * f64::from(self.b)) / 1000.0
    }

    /// WCAG relative luminance (0.0 black to 1.0 white).
    #[must_use]
    pub fn relative_luminance(self) -> f64 {
        fn channel(c: u8) -> f64 {
            let c = f64::from(c) / 255.0;
            if c <= 0.039_28 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        0.2126 * channel(self.r) + 0.7152 * channel(self.g) + 0.0722 * channel(self.b)
    }

    /// Convert to HSL; hue in degrees, saturation/lightness in percent.
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;
        if (max - min).abs() < f64::EPSILON {
            return Hsl {
                h: 0.0,
                s: 0.0,
                l: l * 100.0,
            };
        }
        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = if (max - r).abs() < f64::EPSILON {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if (max - g).abs() < f64::EPSILON {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        Hsl {
            h: h * 60.0,
            s: s * 100.0,
            l: l * 100.0,
        }
    }
}

/// A color in HSL space; `h` in degrees, `s` and `l` in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue in degrees, `[0, 360)`.
    pub h: f64,
    /// Saturation in percent, `[0, 100]`.
    pub s: f64,
    /// Lightness in percent, `[0, 100]`.
    pub l: f64,
}

impl Hsl {
    /// Return a copy with the lightness channel replaced.
    #[must_use]
    pub fn with_lightness(self, l: f64) -> Self {
        Self {
            l: l.clamp(0.0, 100.0),
            ..self
        }
    }

    /// Return a copy with the saturation channel replaced.
    #[must_use]
    pub fn with_saturation(self, s: f64) -> Self {
        Self {
            s: s.clamp(0.0, 100.0),
            ..self
        }
    }

    /// Convert back to sRGB.
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        let h = (self.h.rem_euclid(360.0)) / 360.0;
        let s = (self.s / 100.0).clamp(0.0, 1.0);
        let l = (self.l / 100.0).clamp(0.0, 1.0);

        fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
            if t < 0.0 {
                t += 1.0;
            }
            if t > 1.0 {
                t -= 1.0;
            }
            if t < 1.0 / 6.0 {
                p + (q - p) * 6.0 * t
            } else if t < 1.0 / 2.0 {
                q
            } else if t < 2.0 / 3.0 {
                p + (q - p) * (2.0 / 3.0 - t) * 6.0
            } else {
                p
            }
        }

        if s == 0.0 {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let v = (l * 255.0).round() as u8;
            return Rgb { r: v, g: v, b: v };
        }
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Rgb {
            r: (hue_to_channel(p, q, h + 1.0 / 3.0) * 255.0).round() as u8,
            g: (hue_to_channel(p, q, h) * 255.0).round() as u8,
            b: (hue_to_channel(p, q, h - 1.0 / 3.0) * 255.0).round() as u8,
        }
    }
}

/// Whether a CSS color reads as a dark background.
///
/// Unparseable input counts as light, matching the renderer's "fall back to
/// defaults" posture.
#[must_use]
pub fn is_dark_background(css: &str) -> bool {
    Rgb::parse(css).is_some_and(|rgb| rgb.brightness() < DARK_BRIGHTNESS_THRESHOLD)
}

/// Whether text on this background needs a light foreground (WCAG luminance).
#[must_use]
pub fn needs_light_foreground(css: &str) -> bool {
    Rgb::parse(css).is_some_and(|rgb| rgb.relative_luminance() < DARK_LUMINANCE_THRESHOLD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_six_digits() {
        assert_eq!(
            Rgb::parse("#4f46e5"),
            Some(Rgb {
                r: 0x4f,
                g: 0x46,
                b: 0xe5
            })
        );
    }

    #[test]
    fn test_parse_hex_three_digits() {
        assert_eq!(
            Rgb::parse("#fff"),
            Some(Rgb {
                r: 255,
                g: 255,
                b: 255
            })
        );
    }

    #[test]
    fn test_parse_rgb_function() {
        assert_eq!(
            Rgb::parse("rgb(17, 24, 39)"),
            Some(Rgb {
                r: 17,
                g: 24,
                b: 39
            })
        );
        assert_eq!(
            Rgb::parse("rgba(255, 0, 0, 0.5)"),
            Some(Rgb { r: 255, g: 0, b: 0 })
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(Rgb::parse("not-a-color"), None);
        assert_eq!(Rgb::parse("#12"), None);
    }

    #[test]
    fn test_brightness_thresholds() {
        assert!(is_dark_background("#111827"));
        assert!(!is_dark_background("#ffffff"));
        assert!(!is_dark_background("garbage"));
    }

    #[test]
    fn test_relative_luminance_extremes() {
        let white = Rgb {
            r: 255,
            g: 255,
            b: 255,
        };
        let black = Rgb { r: 0, g: 0, b: 0 };
        assert!((white.relative_luminance() - 1.0).abs() < 1e-6);
        assert!(black.relative_luminance() < 1e-6);
    }

    #[test]
    fn test_needs_light_foreground() {
        assert!(needs_light_foreground("#1e293b"));
        assert!(!needs_light_foreground("#f8fafc"));
    }

    #[test]
    fn test_hsl_round_trip_preserves_hue() {
        let rgb = Rgb {
            r: 0x4f,
            g: 0x46,
            b: 0xe5,
        };
        let hsl = rgb.to_hsl();
        let back = hsl.to_rgb();
        assert!((i32::from(back.r) - i32::from(rgb.r)).abs() <= 2);
        assert!((i32::from(back.g) - i32::from(rgb.g)).abs() <= 2);
        assert!((i32::from(back.b) - i32::from(rgb.b)).abs() <= 2);
    }

    #[test]
    fn test_lighten_only_touches_lightness() {
        let hsl = Rgb {
            r: 0x4f,
            g: 0x46,
            b: 0xe5,
        }
        .to_hsl();
        let lighter = hsl.with_lightness(hsl.l + (100.0 - hsl.l) * 0.5);
        assert!((lighter.h - hsl.h).abs() < f64::EPSILON);
        assert!((lighter.s - hsl.s).abs() < f64::EPSILON);
        assert!(lighter.l > hsl.l);
    }

    #[test]
    fn test_token_resolution() {
        assert_eq!(ColorValue::token("indigo").resolve("#000000"), "#4f46e5");
        assert_eq!(ColorValue::literal("#123456").resolve("#000000"), "#123456");
        assert_eq!(ColorValue::token("bogus").resolve("#000000"), "#000000");
    }

    #[test]
    fn test_color_value_serde_shape() {
        let v: ColorValue = serde_json::from_str("\"#4f46e5\"").unwrap();
        assert_eq!(v, ColorValue::literal("#4f46e5"));
        assert_eq!(serde_json::to_string(&v).unwrap(), "\"#4f46e5\"");

        let t: ColorValue = serde_json::from_str("\"teal\"").unwrap();
        assert_eq!(t, ColorValue::token("teal"));
    }
}
