//! Output formats.
//!
//! Documents are stored as JSON or YAML; command output can additionally be
//! rendered as plain text for the terminal.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use quire_layout::DecorativeElement;
use quire_style::{CalendarStyle, Overrides};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{DocumentError, Result};

/// How data is written out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Text,
    Json,
    Yaml,
}

impl Format {
    /// Picks a structured format from a file extension. Unknown extensions
    /// are treated as YAML.
    pub fn for_path(path: &Path) -> Format {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Format::Json,
            _ => Format::Yaml,
        }
    }

    pub fn is_structured(&self) -> bool {
        matches!(self, Format::Json | Format::Yaml)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Format::Text => "text",
            Format::Json => "json",
            Format::Yaml => "yaml",
        })
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Format::Text),
            "json" => Ok(Format::Json),
            "yaml" | "yml" => Ok(Format::Yaml),
            _ => Err(format!("unknown format '{}': expected text, json or yaml", s)),
        }
    }
}

/// Serializes `data` in a structured format.
pub fn serialize<T: Serialize>(data: &T, format: Format) -> Result<String> {
    match format {
        Format::Json => Ok(serde_json::to_string_pretty(data)?),
        Format::Yaml => Ok(serde_yaml::to_string(data)?),
        Format::Text => Err(DocumentError::UnsupportedFormat(format.to_string())),
    }
}

/// Parses `content` in a structured format.
pub fn deserialize<T: DeserializeOwned>(content: &str, format: Format) -> Result<T> {
    match format {
        Format::Json => Ok(serde_json::from_str(content)?),
        Format::Yaml => Ok(serde_yaml::from_str(content)?),
        Format::Text => Err(DocumentError::UnsupportedFormat(format.to_string())),
    }
}

/// One line per element: key, line style, effective frame and color.
pub fn render_decorations(elements: &[DecorativeElement]) -> String {
    elements
        .iter()
        .map(|e| {
            let f = &e.frame;
            let mut line = format!(
                "{}  {}  x={:.1} y={:.1} w={:.1} h={:.1}  {}",
                e.key, e.line_style, f.x, f.y, f.width, f.height, e.color
            );
            if e.color_customized {
                line.push_str("  (custom color)");
            }
            if !e.adjustment.is_zero() {
                line.push_str("  (adjusted)");
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One line per calendar field, marking pinned values.
pub fn render_calendar(style: &CalendarStyle, overrides: &Overrides) -> String {
    style
        .iter()
        .map(|(field, value)| {
            if overrides.is_pinned(field) {
                format!("{:<26} {}  (pinned)", field.as_str(), value)
            } else {
                format!("{:<26} {}", field.as_str(), value)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
