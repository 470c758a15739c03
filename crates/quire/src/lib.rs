//! # Quire - document layouts with adaptive theming
//!
//! `quire` ties the style and layout crates together around a [`Document`]
//! snapshot and its two flows:
//!
//! - **Select template + variant** ([`Document::apply_layout`]): resolves
//!   decorative separators and reallocates content blocks so longer blocks
//!   land in larger slots.
//! - **Select theme** ([`Document::apply_theme`]): derives a contrast-safe
//!   calendar style from the new theme, drops calendar pins that only echoed
//!   the old theme and re-resolves decorations.
//!
//! ```rust
//! use quire::{Catalogs, Document, Settings};
//! use quire_layout::ContentBlock;
//!
//! let settings = Settings::default();
//! let catalogs = Catalogs::builtin();
//!
//! let doc = Document::new("single", "classic", "classic")
//!     .with_block(ContentBlock::new("a", "Short", "..."))
//!     .with_block(ContentBlock::new("b", "Long", "a much longer body of text"));
//!
//! let (doc, report) = doc.apply_layout("duo", "lead-left", &settings, &catalogs).unwrap();
//! assert!(report.reallocated);
//! assert_eq!(doc.blocks[0].id, "b");
//!
//! let (doc, _) = doc.apply_theme("midnight", &settings, &catalogs).unwrap();
//! assert_eq!(doc.theme, "midnight");
//! ```

mod document;
mod error;
pub mod output;
mod settings;

pub use document::{Document, LayoutReport, ThemeReport};
pub use error::{DocumentError, Result};
pub use output::Format;
pub use settings::{Catalogs, Settings};
