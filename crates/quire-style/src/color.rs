//! Hex color parsing and formatting.
//!
//! Theme files carry colors as CSS-ish strings. Only 3 and 6 digit hex
//! values are analyzable: `#fff`, `#1a1a1a`, `1A1A1A`. Everything else
//! (`transparent`, `rgba(...)`, gradients) is kept verbatim by the theme
//! model but is invisible to the color math.
//!
//! # Example
//!
//! ```rust
//! use quire_style::color::{normalize_hex, Rgb};
//!
//! let c = Rgb::parse_hex("#f80").unwrap();
//! assert_eq!(c, Rgb(255, 136, 0));
//! assert_eq!(c.to_hex(), "#ff8800");
//!
//! assert_eq!(normalize_hex(" #ABC "), Some("#aabbcc".to_string()));
//! assert_eq!(normalize_hex("transparent"), None);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StyleError;

/// An sRGB color triplet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);

    /// Parses a 3 or 6 digit hex color.
    ///
    /// The `#` prefix is optional, digits are case-insensitive and
    /// surrounding whitespace is ignored. 3-digit values are expanded
    /// (`#f80` → `#ff8800`).
    pub fn parse_hex(s: &str) -> Result<Self, StyleError> {
        let trimmed = s.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);

        // from_str_radix accepts a leading '+', so check the digits up front.
        // This also guarantees the byte slicing below stays on char boundaries.
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(StyleError::InvalidColor(s.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| StyleError::InvalidColor(s.to_string()))
        };

        match hex.len() {
            3 => Ok(Rgb(
                channel(0..1)? * 17,
                channel(1..2)? * 17,
                channel(2..3)? * 17,
            )),
            6 => Ok(Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            _ => Err(StyleError::InvalidColor(s.to_string())),
        }
    }

    /// Parses `s`, substituting `fallback` when it is not analyzable.
    pub fn parse_or(s: &str, fallback: Rgb) -> Rgb {
        Self::parse_hex(s).unwrap_or(fallback)
    }

    /// Formats as lowercase `#rrggbb`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

impl TryFrom<String> for Rgb {
    type Error = StyleError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse_hex(&s)
    }
}

impl From<Rgb> for String {
    fn from(c: Rgb) -> Self {
        c.to_hex()
    }
}

/// Parses an optional color string, returning `None` when it is absent or
/// not analyzable.
pub fn parse_color(value: Option<&str>) -> Option<Rgb> {
    value.and_then(|v| Rgb::parse_hex(v).ok())
}

/// Rewrites a 3 or 6 digit hex color into canonical `#rrggbb` form.
pub fn normalize_hex(s: &str) -> Option<String> {
    Rgb::parse_hex(s).ok().map(|c| c.to_hex())
}

/// Formats a translucent CSS color, e.g. `rgba(59, 130, 246, 0.125)`.
pub fn rgba(color: Rgb, alpha: f64) -> String {
    format!(
        "rgba({}, {}, {}, {})",
        color.0,
        color.1,
        color.2,
        alpha.clamp(0.0, 1.0)
    )
}
