//! Theme catalog: name → [`Theme`] lookup with fallback.
//!
//! The catalog starts from the built-in themes and can be extended with
//! YAML files from any number of directories.
//!
//! # Resolution
//!
//! 1. Themes added later replace earlier ones with the same name.
//! 2. Within a directory, `.yaml` wins over `.yml` for the same stem.
//! 3. [`ThemeCatalog::resolve`] never fails: an unknown name falls back to
//!    the first theme in the catalog (the default theme).
//!
//! ```rust
//! use quire_style::ThemeCatalog;
//!
//! let catalog = ThemeCatalog::builtin();
//! assert_eq!(catalog.resolve("midnight").name(), "midnight");
//! assert_eq!(catalog.resolve("no-such-theme").name(), "classic");
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;

use super::theme::Theme;
use crate::error::StyleError;

/// Recognized theme file extensions in priority order (highest first).
pub const THEME_EXTENSIONS: &[&str] = &["yaml", "yml"];

/// Name of the theme used when nothing else resolves.
pub const DEFAULT_THEME: &str = "classic";

const BUILTIN_THEMES: &[(&str, &str)] = &[
    ("classic", include_str!("../../themes/classic.yaml")),
    ("midnight", include_str!("../../themes/midnight.yaml")),
    ("paper", include_str!("../../themes/paper.yaml")),
    ("sunrise", include_str!("../../themes/sunrise.yaml")),
    ("chalkboard", include_str!("../../themes/chalkboard.yaml")),
];

static BUILTIN: Lazy<ThemeCatalog> = Lazy::new(|| {
    let mut catalog = ThemeCatalog::new();
    for (name, yaml) in BUILTIN_THEMES {
        let theme = Theme::from_yaml(name, yaml)
            .unwrap_or_else(|e| panic!("built-in theme '{}' is invalid: {}", name, e));
        catalog.add(theme);
    }
    catalog
});

static FALLBACK: Lazy<Theme> = Lazy::new(|| Theme::named(DEFAULT_THEME));

/// An ordered collection of themes.
#[derive(Debug, Clone, Default)]
pub struct ThemeCatalog {
    themes: Vec<Theme>,
}

impl ThemeCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in themes. `classic` is first and therefore the default.
    pub fn builtin() -> &'static ThemeCatalog {
        &BUILTIN
    }

    /// Adds a theme, replacing any existing theme with the same name in place.
    pub fn add(&mut self, theme: Theme) {
        match self.themes.iter_mut().find(|t| t.name() == theme.name()) {
            Some(existing) => *existing = theme,
            None => self.themes.push(theme),
        }
    }

    /// Loads every theme file found directly inside `dir`.
    ///
    /// Returns the number of themes added or replaced.
    pub fn load_dir<P: AsRef<Path>>(&mut self, dir: P) -> Result<usize, StyleError> {
        let dir = dir.as_ref();
        let entries = std::fs::read_dir(dir).map_err(|source| StyleError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        // stem -> (extension priority, path)
        let mut chosen: HashMap<String, (usize, PathBuf)> = HashMap::new();
        for entry in entries {
            let entry = entry.map_err(|source| StyleError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let Some(priority) = extension_priority(&path) else {
                continue;
            };
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            match chosen.get(stem) {
                Some((existing, _)) if *existing <= priority => {}
                _ => {
                    chosen.insert(stem.to_string(), (priority, path.clone()));
                }
            }
        }

        let mut paths: Vec<PathBuf> = chosen.into_values().map(|(_, p)| p).collect();
        paths.sort();

        let count = paths.len();
        for path in paths {
            let theme = Theme::from_file(&path)?;
            tracing::debug!(theme = theme.name(), path = %path.display(), "loaded theme");
            self.add(theme);
        }
        Ok(count)
    }

    /// Looks up a theme by exact name.
    pub fn get(&self, name: &str) -> Option<&Theme> {
        self.themes.iter().find(|t| t.name() == name)
    }

    /// Looks up a theme, falling back to the default theme on a miss.
    pub fn resolve(&self, name: &str) -> &Theme {
        if let Some(theme) = self.get(name) {
            return theme;
        }
        let fallback = self.default_theme();
        tracing::debug!(requested = name, fallback = fallback.name(), "unknown theme");
        fallback
    }

    /// The first theme, or an empty `classic` theme for an empty catalog.
    pub fn default_theme(&self) -> &Theme {
        self.themes.first().unwrap_or(&FALLBACK)
    }

    /// Theme names in catalog order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.themes.iter().map(|t| t.name())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Theme> {
        self.themes.iter()
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}

/// Priority of a path's extension (0 is highest), `None` if not a theme file.
fn extension_priority(path: &Path) -> Option<usize> {
    let ext = path.extension()?.to_str()?;
    THEME_EXTENSIONS.iter().position(|e| *e == ext)
}
