//! # Quire Style - colors, themes and contrast-safe derived styles
//!
//! `quire-style` holds the color side of a quire document:
//!
//! - **Color math**: hex parsing, relative luminance, contrast ratio, mixing
//!   and contrast enforcement ([`color`], [`contrast`]).
//! - **Themes**: named per-surface attribute bundles loaded from YAML, with a
//!   catalog of built-ins ([`Theme`], [`ThemeCatalog`]).
//! - **Calendar derivation**: a full, readable calendar palette computed from
//!   any theme ([`derive_surface_style`]).
//! - **Override provenance**: user pins that survive theme switches only when
//!   they carry user intent ([`merge_overrides`]).
//!
//! All derivation is pure and infallible. Colors that are not 3 or 6 digit
//! hex values (gradients, `transparent`) are "not analyzable" and replaced by
//! documented defaults rather than reported as errors.
//!
//! ## Quick start
//!
//! ```rust
//! use quire_style::{derive_surface_style, CalendarField, ContrastSettings, ThemeCatalog};
//!
//! let theme = ThemeCatalog::builtin().resolve("midnight");
//! let style = derive_surface_style(theme, &ContrastSettings::default());
//! assert!(style.get(CalendarField::CellText).is_some());
//! ```

pub mod attributes;
pub mod calendar;
pub mod color;
pub mod contrast;
mod error;
pub mod provenance;
pub mod theme;

pub use attributes::{Align, StyleAttributes};
pub use calendar::{
    derive_surface_style, CalendarField, CalendarStyle, ContrastSettings, Overrides,
};
pub use color::{normalize_hex, Rgb};
pub use contrast::{contrast_ratio, ensure_contrast, mix, relative_luminance};
pub use error::{Result, StyleError};
pub use provenance::{apply_overrides, merge_overrides, MergeOutcome};
pub use theme::{Surface, Theme, ThemeCatalog, DEFAULT_THEME};
