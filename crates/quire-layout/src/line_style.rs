//! Line styles for decorative separators.
//!
//! A [`LineStyle`] is either a solid stroke or a tiled vector ornament. The
//! catalog also answers the `themed` question: which line goes with the
//! active theme.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use quire_style::Rgb;
use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::types::LineRef;

/// Id of the line style used when nothing else resolves.
pub const DEFAULT_LINE_STYLE: &str = "classic-solid";

static BUILTIN: Lazy<LineStyleCatalog> = Lazy::new(|| {
    LineStyleCatalog::from_yaml(include_str!("../catalog/line_styles.yaml"))
        .unwrap_or_else(|e| panic!("built-in line styles are invalid: {}", e))
});

static HARD_DEFAULT: Lazy<LineStyle> = Lazy::new(|| LineStyle {
    id: DEFAULT_LINE_STYLE.to_string(),
    name: "Classic".to_string(),
    kind: LineKind::Solid { thickness: 2.0 },
    themes: Vec::new(),
    color_customizable: true,
    default_color: None,
});

/// How a line is drawn.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LineKind {
    Solid {
        thickness: f64,
    },
    Vector {
        tile_width: f64,
        tile_height: f64,
        #[serde(default)]
        repeatable: bool,
    },
}

impl LineKind {
    /// Rendered height of the line.
    pub fn height(&self) -> f64 {
        match self {
            LineKind::Solid { thickness } => *thickness,
            LineKind::Vector { tile_height, .. } => *tile_height,
        }
    }

    pub fn is_repeatable_vector(&self) -> bool {
        matches!(
            self,
            LineKind::Vector {
                repeatable: true,
                ..
            }
        )
    }
}

fn default_true() -> bool {
    true
}

/// A catalog entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub kind: LineKind,
    /// Theme names this style belongs to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub themes: Vec<String>,
    #[serde(default = "default_true")]
    pub color_customizable: bool,
    /// Fixed color used when the style is not color-customizable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_color: Option<Rgb>,
}

impl LineStyle {
    pub fn height(&self) -> f64 {
        self.kind.height()
    }

    pub fn is_tagged(&self, theme: &str) -> bool {
        self.themes.iter().any(|t| t == theme)
    }
}

/// Ordered collection of line styles.
#[derive(Clone, Debug, Default)]
pub struct LineStyleCatalog {
    styles: Vec<LineStyle>,
}

impl LineStyleCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in line styles.
    pub fn builtin() -> &'static LineStyleCatalog {
        &BUILTIN
    }

    /// Parses a YAML list of line styles.
    pub fn from_yaml(yaml: &str) -> Result<Self, LayoutError> {
        let styles: Vec<LineStyle> =
            serde_yaml::from_str(yaml).map_err(|e| LayoutError::Parse {
                what: "line styles".to_string(),
                message: e.to_string(),
            })?;

        let mut catalog = Self::new();
        for style in styles {
            catalog.add(style)?;
        }
        Ok(catalog)
    }

    /// Adds a style. Ids must be unique and dimensions positive.
    pub fn add(&mut self, style: LineStyle) -> Result<(), LayoutError> {
        let invalid = |message: &str| LayoutError::InvalidLineStyle {
            id: style.id.clone(),
            message: message.to_string(),
        };
        if self.get(&style.id).is_some() {
            return Err(invalid("duplicate id"));
        }
        let positive = match &style.kind {
            LineKind::Solid { thickness } => *thickness > 0.0,
            LineKind::Vector {
                tile_width,
                tile_height,
                ..
            } => *tile_width > 0.0 && *tile_height > 0.0,
        };
        if !positive {
            return Err(invalid("dimensions must be positive"));
        }
        self.styles.push(style);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&LineStyle> {
        self.styles.iter().find(|s| s.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LineStyle> {
        self.styles.iter()
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// The catalog's `classic-solid`, or a built-in stand-in.
    pub fn default_style(&self) -> &LineStyle {
        self.get(DEFAULT_LINE_STYLE).unwrap_or(&HARD_DEFAULT)
    }

    /// Resolves a reference for the given theme. Never fails.
    ///
    /// `themed` picks among styles tagged with `theme`: a repeatable vector if
    /// there is one, else the first tagged style, else the default style. An
    /// unknown concrete id also degrades to the default style.
    pub fn resolve(&self, line: &LineRef, theme: &str) -> &LineStyle {
        match line {
            LineRef::Style(id) => self.get(id).unwrap_or_else(|| {
                tracing::debug!(line_style = %id, "unknown line style");
                self.default_style()
            }),
            LineRef::Themed => {
                let mut tagged = self.styles.iter().filter(|s| s.is_tagged(theme)).peekable();
                let first = tagged.peek().copied();
                tagged
                    .find(|s| s.kind.is_repeatable_vector())
                    .or(first)
                    .unwrap_or_else(|| {
                        tracing::debug!(theme, "no line style tagged for theme");
                        self.default_style()
                    })
            }
        }
    }
}
