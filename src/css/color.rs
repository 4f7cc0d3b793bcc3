//! Color utilities shared by every concern.
//!
//! One place for hex parsing, rgba conversion, and contrast selection.
//! Validation is deliberately shallow: hex values are checked for length
//! and digits only.

use std::fmt;

use crate::resolve::format_number;

/// Luminance above which dark text is used.
pub const CONTRAST_THRESHOLD: f64 = 186.0;

/// Text color on light backgrounds.
pub const DARK_TEXT: &str = "#111111";

/// Text color on dark backgrounds.
pub const LIGHT_TEXT: &str = "#ffffff";

/// An opaque sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rgb` or `#rrggbb` (the `#` is optional).
    pub fn parse_hex(input: &str) -> Option<Self> {
        let hex = input.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        match hex.len() {
            3 => {
                let mut digits = hex.chars().map(|c| c.to_digit(16).map(|d| d as u8 * 17));
                Some(Self::new(digits.next()??, digits.next()??, digits.next()??))
            }
            6 => Some(Self::new(
                u8::from_str_radix(&hex[0..2], 16).ok()?,
                u8::from_str_radix(&hex[2..4], 16).ok()?,
                u8::from_str_radix(&hex[4..6], 16).ok()?,
            )),
            _ => None,
        }
    }

    /// `rgba(r, g, b, a)` with alpha clamped to `0..=1`.
    pub fn to_rgba(&self, alpha: f64) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.r,
            self.g,
            self.b,
            format_number(alpha.clamp(0.0, 1.0))
        )
    }

    /// Perceptual luminance `0.299R + 0.587G + 0.114B`, in `0..=255`.
    pub fn luminance(&self) -> f64 {
        0.299 * f64::from(self.r) + 0.587 * f64::from(self.g) + 0.114 * f64::from(self.b)
    }

    /// Readable text color on top of this color.
    pub fn contrast_text(&self) -> &'static str {
        if self.luminance() > CONTRAST_THRESHOLD {
            DARK_TEXT
        } else {
            LIGHT_TEXT
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Convert a hex color to `rgba()`, or `None` if it is not hex.
pub fn hex_to_rgba(hex: &str, alpha: f64) -> Option<String> {
    Rgb::parse_hex(hex).map(|c| c.to_rgba(alpha))
}

/// Convert a color to `rgba()` when it is hex, otherwise return it as-is.
pub fn with_alpha(color: &str, alpha: f64) -> String {
    hex_to_rgba(color, alpha).unwrap_or_else(|| color.to_string())
}

/// Contrast text for a hex background, or `None` if it is not hex.
pub fn contrast_text_for(hex: &str) -> Option<&'static str> {
    Rgb::parse_hex(hex).map(|c| c.contrast_text())
}

/// Accept a color string for output, or reject it.
///
/// Accepted: 3 or 6 digit hex (a missing `#` is added), `rgb()`, `rgba()`,
/// `hsl()`, `hsla()` with numeric arguments, and `transparent`.
pub fn sanitize_color(input: &str) -> Option<String> {
    let s = input.trim();
    if s.is_empty() {
        return None;
    }

    if s.eq_ignore_ascii_case("transparent") {
        return Some("transparent".to_string());
    }

    let hex = s.strip_prefix('#').unwrap_or(s);
    if matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Some(format!("#{}", hex));
    }

    let lower = s.to_ascii_lowercase();
    for func in ["rgba(", "rgb(", "hsla(", "hsl("] {
        if let Some(args) = lower.strip_prefix(func).and_then(|r| r.strip_suffix(')')) {
            let ok = !args.trim().is_empty()
                && args
                    .chars()
                    .all(|c| c.is_ascii_digit() || " .,%/".contains(c) || c == 'd' || c == 'e' || c == 'g');
            return ok.then(|| lower.clone());
        }
    }

    None
}
