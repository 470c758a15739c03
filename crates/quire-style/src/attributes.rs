//! Style attribute sets and merging logic.
//!
//! [`StyleAttributes`] is the per-surface bundle a theme carries: text and
//! background colors, a font reference, a border color and an alignment.
//! Every field is optional; absence means "inherit from the fallback chain".
//!
//! Colors are stored as the raw strings found in the theme so that values
//! the color math cannot analyze (gradients, `transparent`) survive a
//! round trip. Use the `*_rgb` accessors to get analyzable colors.
//!
//! # Attribute Merging
//!
//! The merge uses `Option<T>` semantics: `Some` values in the override
//! replace base values, `None` values preserve the base.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::{parse_color, Rgb};
use crate::error::StyleError;

/// Horizontal alignment of a text block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    #[default]
    Center,
    Right,
}

impl Align {
    pub fn as_str(&self) -> &'static str {
        match self {
            Align::Left => "left",
            Align::Center => "center",
            Align::Right => "right",
        }
    }
}

impl fmt::Display for Align {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Align {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "left" | "start" => Ok(Align::Left),
            "center" | "centre" | "middle" => Ok(Align::Center),
            "right" | "end" => Ok(Align::Right),
            other => Err(format!(
                "invalid alignment '{}': expected left, center or right",
                other
            )),
        }
    }
}

/// Visual attributes for one theme surface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleAttributes {
    /// Text color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Background color (may be a gradient).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    /// Font family reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
    /// Border color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
    /// Text alignment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<Align>,
}

impl StyleAttributes {
    /// Creates empty attributes (all None).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, value: impl Into<String>) -> Self {
        self.text = Some(value.into());
        self
    }

    pub fn with_background(mut self, value: impl Into<String>) -> Self {
        self.background = Some(value.into());
        self
    }

    pub fn with_font(mut self, value: impl Into<String>) -> Self {
        self.font = Some(value.into());
        self
    }

    pub fn with_border(mut self, value: impl Into<String>) -> Self {
        self.border = Some(value.into());
        self
    }

    pub fn with_align(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }

    /// Parses attributes from a YAML mapping.
    ///
    /// Accepted keys: `text` (alias `color`), `background` (alias `bg`),
    /// `font`, `border`, `align`.
    pub fn parse_mapping(map: &serde_yaml::Mapping, surface: &str) -> Result<Self, StyleError> {
        let mut attrs = StyleAttributes::new();

        for (key, value) in map {
            let key_str = key.as_str().ok_or_else(|| StyleError::InvalidDefinition {
                surface: surface.to_string(),
                message: format!("non-string key in surface definition: {:?}", key),
            })?;
            attrs.set_attribute(key_str, value, surface)?;
        }

        Ok(attrs)
    }

    /// Sets a single attribute from a YAML value.
    fn set_attribute(
        &mut self,
        name: &str,
        value: &serde_yaml::Value,
        surface: &str,
    ) -> Result<(), StyleError> {
        match name {
            "text" | "color" => self.text = Some(scalar(value, name, surface)?),
            "background" | "bg" => self.background = Some(scalar(value, name, surface)?),
            "font" => self.font = Some(scalar(value, name, surface)?),
            "border" => self.border = Some(scalar(value, name, surface)?),
            "align" => {
                let raw = scalar(value, name, surface)?;
                let align = raw
                    .parse::<Align>()
                    .map_err(|message| StyleError::InvalidDefinition {
                        surface: surface.to_string(),
                        message,
                    })?;
                self.align = Some(align);
            }
            _ => {
                return Err(StyleError::InvalidDefinition {
                    surface: surface.to_string(),
                    message: format!("unknown attribute '{}'", name),
                })
            }
        }
        Ok(())
    }

    /// Overlays `other` onto `self`; `Some` values in `other` win.
    pub fn merge(&self, other: &StyleAttributes) -> StyleAttributes {
        StyleAttributes {
            text: other.text.clone().or_else(|| self.text.clone()),
            background: other.background.clone().or_else(|| self.background.clone()),
            font: other.font.clone().or_else(|| self.font.clone()),
            border: other.border.clone().or_else(|| self.border.clone()),
            align: other.align.or(self.align),
        }
    }

    /// Returns true if no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.text.is_none()
            && self.background.is_none()
            && self.font.is_none()
            && self.border.is_none()
            && self.align.is_none()
    }

    /// Text color, if set and analyzable.
    pub fn text_rgb(&self) -> Option<Rgb> {
        parse_color(self.text.as_deref())
    }

    /// Background color, if set and analyzable.
    pub fn background_rgb(&self) -> Option<Rgb> {
        parse_color(self.background.as_deref())
    }

    /// Border color, if set and analyzable.
    pub fn border_rgb(&self) -> Option<Rgb> {
        parse_color(self.border.as_deref())
    }
}

fn scalar(value: &serde_yaml::Value, name: &str, surface: &str) -> Result<String, StyleError> {
    match value {
        serde_yaml::Value::String(s) => Ok(s.clone()),
        serde_yaml::Value::Number(n) => Ok(n.to_string()),
        _ => Err(StyleError::InvalidDefinition {
            surface: surface.to_string(),
            message: format!("attribute '{}' must be a string", name),
        }),
    }
}
