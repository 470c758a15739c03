//! Settings and catalog assembly.
//!
//! Settings are read from YAML. Every field has a default, so an empty file
//! (or no file at all) is valid:
//!
//! ```yaml
//! contrast:
//!   min_ratio: 7.0
//! canvas:
//!   width: 1600
//! theme_dirs:
//!   - ~/.config/quire/themes
//! template_files:
//!   - ./layouts.yaml
//! ```

use std::path::{Path, PathBuf};

use quire_layout::{CanvasGeometry, LayoutCatalog, LineStyleCatalog};
use quire_style::{ContrastSettings, ThemeCatalog};
use serde::{Deserialize, Serialize};

use crate::error::{DocumentError, Result};

/// User-tunable settings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub contrast: ContrastSettings,
    pub canvas: CanvasGeometry,
    /// Directories of extra theme files. Earlier directories win on name clashes.
    pub theme_dirs: Vec<PathBuf>,
    /// Extra template list files, applied in order.
    pub template_files: Vec<PathBuf>,
}

impl Settings {
    /// Parses settings from YAML content.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Loads settings from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| DocumentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_yaml(&content)?;
        tracing::debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Built-in catalogs extended with the configured theme directories and
    /// template files.
    pub fn catalogs(&self) -> Result<Catalogs> {
        let mut catalogs = Catalogs::builtin();
        // Later adds replace earlier ones, so walk the directories backwards.
        for dir in self.theme_dirs.iter().rev() {
            let count = catalogs.themes.load_dir(dir)?;
            tracing::debug!(dir = %dir.display(), count, "loaded theme directory");
        }
        for file in &self.template_files {
            let count = catalogs.layouts.load_file(file)?;
            tracing::debug!(file = %file.display(), count, "loaded templates");
        }
        Ok(catalogs)
    }
}

/// The catalogs a document is resolved against.
#[derive(Clone, Debug)]
pub struct Catalogs {
    pub themes: ThemeCatalog,
    pub layouts: LayoutCatalog,
    pub lines: LineStyleCatalog,
}

impl Catalogs {
    /// Copies of the built-in catalogs.
    pub fn builtin() -> Self {
        Self {
            themes: ThemeCatalog::builtin().clone(),
            layouts: LayoutCatalog::builtin().clone(),
            lines: LineStyleCatalog::builtin().clone(),
        }
    }
}

impl Default for Catalogs {
    fn default() -> Self {
        Self::builtin()
    }
}
