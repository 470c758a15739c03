//! Theme struct: a named bundle of per-surface style attributes.
//!
//! A theme is identified by name and never mutated after construction;
//! switching themes replaces the whole value.
//!
//! # From YAML
//!
//! ```rust
//! use quire_style::{Surface, Theme};
//!
//! let theme = Theme::from_yaml("midnight", r##"
//! page:
//!   background: "#0f172a"
//!   text: "#e2e8f0"
//! title:
//!   text: "#7dd3fc"
//!   font: Playfair Display
//!   align: center
//! "##).unwrap();
//!
//! assert_eq!(theme.name(), "midnight");
//! assert_eq!(theme.surface(Surface::Title).font.as_deref(), Some("Playfair Display"));
//! ```

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::attributes::StyleAttributes;
use crate::color::Rgb;
use crate::error::StyleError;

/// Page background assumed when a theme's is missing or not analyzable.
pub const DEFAULT_PAGE_BACKGROUND: Rgb = Rgb::WHITE;

/// Accent used when no theme color is analyzable.
pub const DEFAULT_ACCENT: Rgb = Rgb(0x3b, 0x82, 0xf6);

static EMPTY_ATTRIBUTES: Lazy<StyleAttributes> = Lazy::new(StyleAttributes::default);

/// A themed region of the document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Surface {
    /// The canvas behind everything.
    Page,
    /// Document title.
    Title,
    /// Date line under the title.
    Date,
    /// Content section (one per slot).
    Section,
    /// Section heading strip.
    Heading,
}

impl Surface {
    pub const ALL: [Surface; 5] = [
        Surface::Page,
        Surface::Title,
        Surface::Date,
        Surface::Section,
        Surface::Heading,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Surface::Page => "page",
            Surface::Title => "title",
            Surface::Date => "date",
            Surface::Section => "section",
            Surface::Heading => "heading",
        }
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Surface {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Surface::ALL
            .iter()
            .copied()
            .find(|surface| surface.as_str() == s)
            .ok_or_else(|| format!("unknown surface '{}'", s))
    }
}

/// A named collection of surface styles.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    name: String,
    /// Source file path, when loaded from disk.
    source_path: Option<PathBuf>,
    surfaces: HashMap<Surface, StyleAttributes>,
}

impl Theme {
    /// Creates an empty theme with the given name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source_path: None,
            surfaces: HashMap::new(),
        }
    }

    /// Sets the attributes of one surface, returning `self` for chaining.
    pub fn with_surface(mut self, surface: Surface, attributes: StyleAttributes) -> Self {
        self.surfaces.insert(surface, attributes);
        self
    }

    /// Creates a theme from YAML content.
    ///
    /// The document is a mapping from surface name to attribute mapping.
    /// Unknown surfaces and unknown attributes are errors.
    pub fn from_yaml(name: &str, yaml: &str) -> Result<Self, StyleError> {
        let root: serde_yaml::Value =
            serde_yaml::from_str(yaml).map_err(|e| StyleError::Parse {
                theme: name.to_string(),
                message: e.to_string(),
            })?;

        let mapping = match root {
            serde_yaml::Value::Mapping(m) => m,
            serde_yaml::Value::Null => serde_yaml::Mapping::new(),
            other => {
                return Err(StyleError::Parse {
                    theme: name.to_string(),
                    message: format!("expected a mapping of surfaces, got {:?}", other),
                })
            }
        };

        let mut theme = Theme::named(name);
        for (key, value) in &mapping {
            let key_str = key.as_str().ok_or_else(|| StyleError::Parse {
                theme: name.to_string(),
                message: format!("non-string surface name: {:?}", key),
            })?;
            let surface: Surface =
                key_str
                    .parse()
                    .map_err(|_| StyleError::UnknownSurface {
                        theme: name.to_string(),
                        surface: key_str.to_string(),
                    })?;
            let attrs = match value {
                serde_yaml::Value::Mapping(m) => StyleAttributes::parse_mapping(m, key_str)?,
                serde_yaml::Value::Null => StyleAttributes::new(),
                _ => {
                    return Err(StyleError::InvalidDefinition {
                        surface: key_str.to_string(),
                        message: "expected a mapping of attributes".to_string(),
                    })
                }
            };
            theme.surfaces.insert(surface, attrs);
        }

        Ok(theme)
    }

    /// Loads a theme from a YAML file.
    ///
    /// The theme name is derived from the filename (without extension).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, StyleError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| StyleError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("untitled");

        let mut theme = Self::from_yaml(name, &content)?;
        theme.source_path = Some(path.to_path_buf());
        Ok(theme)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the source file path, if this theme was loaded from a file.
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// Attributes for a surface; an unset surface yields empty attributes.
    pub fn surface(&self, surface: Surface) -> &StyleAttributes {
        self.surfaces.get(&surface).unwrap_or(&EMPTY_ATTRIBUTES)
    }

    /// Analyzable page background, or [`DEFAULT_PAGE_BACKGROUND`].
    pub fn page_background(&self) -> Rgb {
        self.surface(Surface::Page)
            .background_rgb()
            .unwrap_or(DEFAULT_PAGE_BACKGROUND)
    }

    /// The single representative color used for cross-surface tinting.
    ///
    /// First analyzable entry of: title text, heading background, section
    /// border, heading text; else [`DEFAULT_ACCENT`].
    pub fn accent(&self) -> Rgb {
        let title = self.surface(Surface::Title);
        let heading = self.surface(Surface::Heading);
        let section = self.surface(Surface::Section);

        title
            .text_rgb()
            .or_else(|| heading.background_rgb())
            .or_else(|| section.border_rgb())
            .or_else(|| heading.text_rgb())
            .unwrap_or(DEFAULT_ACCENT)
    }
}
