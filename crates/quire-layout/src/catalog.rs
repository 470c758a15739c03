//! Layout template catalog.
//!
//! Templates are validated on the way in, so anything reachable through a
//! catalog satisfies [`LayoutTemplate::validate`].

use std::path::Path;

use once_cell::sync::Lazy;

use crate::error::LayoutError;
use crate::types::{LayoutTemplate, Variant};

static BUILTIN: Lazy<LayoutCatalog> = Lazy::new(|| {
    LayoutCatalog::from_yaml(include_str!("../catalog/templates.yaml"))
        .unwrap_or_else(|e| panic!("built-in templates are invalid: {}", e))
});

/// An ordered collection of validated templates.
#[derive(Clone, Debug, Default)]
pub struct LayoutCatalog {
    templates: Vec<LayoutTemplate>,
}

impl LayoutCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in templates. `single` is first and therefore the default.
    pub fn builtin() -> &'static LayoutCatalog {
        &BUILTIN
    }

    /// Parses and validates a YAML list of templates.
    pub fn from_yaml(yaml: &str) -> Result<Self, LayoutError> {
        let templates: Vec<LayoutTemplate> =
            serde_yaml::from_str(yaml).map_err(|e| LayoutError::Parse {
                what: "templates".to_string(),
                message: e.to_string(),
            })?;

        let mut catalog = Self::new();
        for template in templates {
            catalog.add(template)?;
        }
        Ok(catalog)
    }

    /// Reads a YAML template list from disk and adds every entry.
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, LayoutError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| LayoutError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let loaded = Self::from_yaml(&content)?;
        let count = loaded.templates.len();
        for template in loaded.templates {
            self.replace(template);
        }
        Ok(count)
    }

    /// Validates and adds a template. Ids must be unique.
    pub fn add(&mut self, template: LayoutTemplate) -> Result<(), LayoutError> {
        template.validate()?;
        if self.get(&template.id).is_some() {
            return Err(LayoutError::InvalidTemplate {
                template: template.id,
                message: "duplicate id".to_string(),
            });
        }
        self.templates.push(template);
        Ok(())
    }

    /// Adds an already validated template, replacing one with the same id.
    fn replace(&mut self, template: LayoutTemplate) {
        match self.templates.iter_mut().find(|t| t.id == template.id) {
            Some(existing) => *existing = template,
            None => self.templates.push(template),
        }
    }

    pub fn get(&self, id: &str) -> Option<&LayoutTemplate> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// Looks up a template and variant, falling back to the first template
    /// and the template's first variant on a miss.
    ///
    /// `None` only for an empty catalog.
    pub fn resolve(&self, id: &str, variant: &str) -> Option<(&LayoutTemplate, &Variant)> {
        let template = match self.get(id) {
            Some(t) => t,
            None => {
                let fallback = self.templates.first()?;
                tracing::debug!(requested = id, fallback = %fallback.id, "unknown template");
                fallback
            }
        };
        let variant = template.resolve_variant(variant)?;
        Some((template, variant))
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.templates.iter().map(|t| t.id.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &LayoutTemplate> {
        self.templates.iter()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
