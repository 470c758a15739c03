//! # Quire Layout - grid templates, decorations and content reallocation
//!
//! This crate handles the structural side of a quire document:
//!
//! - **Templates**: grids of named regions (`title`, `date`, `slot-N`) with
//!   one or more [`Variant`]s ([`LayoutTemplate`], [`LayoutCatalog`]).
//! - **Line styles**: the separators a variant asks for, including the
//!   theme-dependent `themed` line ([`LineStyleCatalog`]).
//! - **Decoration resolution**: positioned separator elements that keep
//!   manual tweaks across re-application ([`resolve_decorations`]).
//! - **Reallocation**: reordering content so long blocks land in large
//!   slots ([`reallocate_content`]).
//!
//! Loading catalog data can fail; resolution cannot. Unknown templates,
//! variants and line styles fall back to the catalog defaults and emit a
//! `tracing` debug event.

mod catalog;
mod decoration;
mod error;
mod geometry;
mod grid;
mod line_style;
mod reallocate;
mod types;

pub use catalog::LayoutCatalog;
pub use decoration::{
    resolve_decorations, Adjustment, DecorationKey, DecorationResolver, DecorativeElement, Frame,
    MIN_VISIBLE_WIDTH,
};
pub use error::{LayoutError, Result};
pub use geometry::{Band, CanvasGeometry};
pub use grid::{CellRect, GridAreas, Region};
pub use line_style::{LineKind, LineStyle, LineStyleCatalog, DEFAULT_LINE_STYLE};
pub use reallocate::{plan_slots, reallocate, reallocate_content, ContentBlock, Weighted};
pub use types::{
    DecorationDescriptor, LayoutTemplate, LineRef, Placement, Variant, KEY_SEPARATOR,
};
