//! Calendar widget styling derived from the active theme.
//!
//! [`derive_surface_style`] produces a [`CalendarStyle`]: one CSS-ready value
//! per [`CalendarField`]. Users pin individual fields through [`Overrides`];
//! see [`crate::provenance`] for how pins survive theme switches.

mod derive;
mod exceptions;
mod field;

pub use derive::{
    derive_surface_style, ContrastSettings, LIGHT_CELL_BACKGROUND, MIN_CELL_SEPARATION,
};
pub use exceptions::{palette as exception_palette, Palette};
pub use field::{CalendarField, CalendarStyle, Overrides};
