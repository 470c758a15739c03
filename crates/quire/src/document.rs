//! The document snapshot and the two user-driven flows.
//!
//! A [`Document`] is an immutable snapshot: each flow takes `&self` and
//! returns a new document together with a report of what changed.
//!
//! - [`Document::apply_layout`]: switch template/variant, re-resolve
//!   decorations and reallocate content blocks.
//! - [`Document::apply_theme`]: switch theme, reconcile calendar overrides
//!   and re-resolve decorations for the new theme.

use std::path::Path;

use quire_layout::{
    reallocate_content, ContentBlock, DecorationResolver, DecorativeElement, LayoutTemplate,
    Variant,
};
use quire_style::{
    apply_overrides, derive_surface_style, merge_overrides, CalendarField, CalendarStyle,
    Overrides, Theme,
};
use serde::{Deserialize, Serialize};

use crate::error::{DocumentError, Result};
use crate::output::{self, Format};
use crate::settings::{Catalogs, Settings};

/// A document's layout, theme and content.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub template: String,
    pub variant: String,
    pub theme: String,
    #[serde(default)]
    pub blocks: Vec<ContentBlock>,
    #[serde(default)]
    pub decorations: Vec<DecorativeElement>,
    #[serde(default, skip_serializing_if = "Overrides::is_empty")]
    pub calendar_overrides: Overrides,
}

/// What [`Document::apply_layout`] did.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LayoutReport {
    /// Template actually applied (after fallback).
    pub template: String,
    /// Variant actually applied (after fallback).
    pub variant: String,
    /// Whether content blocks were reallocated.
    pub reallocated: bool,
    pub decorations: usize,
}

/// What [`Document::apply_theme`] did.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ThemeReport {
    /// Theme actually applied (after fallback).
    pub theme: String,
    /// Calendar pins dropped because they matched the old theme's derivation.
    pub cleared: Vec<CalendarField>,
    /// The calendar style now in effect.
    pub calendar: CalendarStyle,
}

impl Document {
    /// An empty document. Decorations appear on the first `apply_layout`.
    pub fn new(
        template: impl Into<String>,
        variant: impl Into<String>,
        theme: impl Into<String>,
    ) -> Self {
        Self {
            template: template.into(),
            variant: variant.into(),
            theme: theme.into(),
            blocks: Vec::new(),
            decorations: Vec::new(),
            calendar_overrides: Overrides::new(),
        }
    }

    pub fn with_block(mut self, block: ContentBlock) -> Self {
        self.blocks.push(block);
        self
    }

    /// Switches template and variant.
    ///
    /// Decorations are resolved for the new variant (manual tweaks on
    /// matching keys survive). Blocks are reallocated when the variant has
    /// targets and the block count matches the slot count.
    pub fn apply_layout(
        &self,
        template_id: &str,
        variant: &str,
        settings: &Settings,
        catalogs: &Catalogs,
    ) -> Result<(Document, LayoutReport)> {
        let (template, variant) = catalogs
            .layouts
            .resolve(template_id, variant)
            .ok_or(DocumentError::EmptyCatalog)?;
        let theme = catalogs.themes.resolve(&self.theme);

        let decorations = self.resolve_decorations(template, variant, theme, settings, catalogs);

        let (blocks, reallocated) = match &variant.targets {
            Some(targets) if targets.len() == self.blocks.len() => {
                (reallocate_content(&self.blocks, targets), true)
            }
            _ => (self.blocks.clone(), false),
        };

        tracing::info!(
            template = %template.id,
            variant = %variant.name,
            reallocated,
            "applied layout"
        );

        let report = LayoutReport {
            template: template.id.clone(),
            variant: variant.name.clone(),
            reallocated,
            decorations: decorations.len(),
        };
        let document = Document {
            template: template.id.clone(),
            variant: variant.name.clone(),
            blocks,
            decorations,
            ..self.clone()
        };
        Ok((document, report))
    }

    /// Switches theme.
    ///
    /// Calendar pins equal to the old theme's derivation are cleared; all
    /// other pins are kept. Decorations are re-resolved so themed lines and
    /// accent colors follow the new theme.
    pub fn apply_theme(
        &self,
        theme_name: &str,
        settings: &Settings,
        catalogs: &Catalogs,
    ) -> Result<(Document, ThemeReport)> {
        let old_theme = catalogs.themes.resolve(&self.theme);
        let new_theme = catalogs.themes.resolve(theme_name);

        let old = derive_surface_style(old_theme, &settings.contrast);
        let new = derive_surface_style(new_theme, &settings.contrast);
        let outcome = merge_overrides(&new, &old, &self.calendar_overrides);

        let (template, variant) = catalogs
            .layouts
            .resolve(&self.template, &self.variant)
            .ok_or(DocumentError::EmptyCatalog)?;
        let decorations =
            self.resolve_decorations(template, variant, new_theme, settings, catalogs);

        tracing::info!(
            from = old_theme.name(),
            to = new_theme.name(),
            cleared = outcome.cleared.len(),
            "applied theme"
        );

        let report = ThemeReport {
            theme: new_theme.name().to_string(),
            cleared: outcome.cleared,
            calendar: outcome.effective,
        };
        let document = Document {
            theme: new_theme.name().to_string(),
            decorations,
            calendar_overrides: outcome.overrides,
            ..self.clone()
        };
        Ok((document, report))
    }

    /// The calendar style currently in effect: derivation plus pins.
    pub fn calendar_style(&self, settings: &Settings, catalogs: &Catalogs) -> CalendarStyle {
        let theme = catalogs.themes.resolve(&self.theme);
        apply_overrides(
            &derive_surface_style(theme, &settings.contrast),
            &self.calendar_overrides,
        )
    }

    /// Finds a decoration by element id.
    pub fn decoration_mut(&mut self, id: &str) -> Option<&mut DecorativeElement> {
        self.decorations.iter_mut().find(|e| e.id == id)
    }

    /// Parses a document from a string.
    pub fn from_str_as(content: &str, format: Format) -> Result<Self> {
        output::deserialize(content, format)
    }

    /// Serializes the document.
    pub fn to_string_as(&self, format: Format) -> Result<String> {
        output::serialize(self, format)
    }

    /// Loads a document, choosing JSON or YAML by extension.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| DocumentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_str_as(&content, Format::for_path(path))
    }

    /// Saves a document, choosing JSON or YAML by extension.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = self.to_string_as(Format::for_path(path))?;
        std::fs::write(path, content).map_err(|source| DocumentError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    fn resolve_decorations(
        &self,
        template: &LayoutTemplate,
        variant: &Variant,
        theme: &Theme,
        settings: &Settings,
        catalogs: &Catalogs,
    ) -> Vec<DecorativeElement> {
        DecorationResolver::new(&catalogs.lines, &settings.canvas).resolve(
            template,
            variant,
            theme,
            &self.decorations,
        )
    }
}
