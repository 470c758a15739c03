//! Themes and the theme catalog.
//!
//! A [`Theme`] bundles [`StyleAttributes`](crate::StyleAttributes) for the
//! document surfaces (page, title, date, section, heading). Themes are
//! replaced wholesale when the user switches, never edited in place.
//!
//! ```yaml
//! page:
//!   background: "#0f172a"
//!   text: "#e2e8f0"
//! title:
//!   text: "#7dd3fc"
//!   font: Playfair Display
//!   align: center
//! heading:
//!   background: "#1e3a5f"
//!   text: "#e0f2fe"
//! ```

mod catalog;
#[allow(clippy::module_inception)]
mod theme;

pub use catalog::{ThemeCatalog, DEFAULT_THEME, THEME_EXTENSIONS};
pub use theme::{Surface, Theme, DEFAULT_ACCENT, DEFAULT_PAGE_BACKGROUND};
