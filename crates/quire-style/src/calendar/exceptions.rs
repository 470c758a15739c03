//! Themes whose calendar is hand-tuned rather than derived.

use super::field::{CalendarField, CalendarStyle};

pub type Palette = &'static [(CalendarField, &'static str)];

const CHALKBOARD: Palette = &[
    (CalendarField::HeaderText, "#f5f1e6"),
    (CalendarField::WeekdayBackground, "#2f4a3a"),
    (CalendarField::WeekdayText, "#f5f1e6"),
    (CalendarField::CellBackground, "#2b3f33"),
    (CalendarField::CellText, "#ece8dc"),
    (CalendarField::CellBorder, "#5d7465"),
    (CalendarField::WeekendBackground, "rgba(245, 241, 230, 0.08)"),
    (CalendarField::WeekendText, "#f5f1e6"),
    (CalendarField::OutsideMonthText, "#9aa89e"),
];

const EXCEPTIONS: &[(&str, Palette)] = &[("chalkboard", CHALKBOARD)];

/// The fixed palette for `theme_name`, if it has one.
pub fn palette(theme_name: &str) -> Option<Palette> {
    EXCEPTIONS
        .iter()
        .find(|(name, _)| *name == theme_name)
        .map(|(_, palette)| *palette)
}

/// Overwrites derived fields with the theme's fixed palette, if any.
pub(crate) fn apply(theme_name: &str, style: &mut CalendarStyle) {
    if let Some(palette) = palette(theme_name) {
        tracing::trace!(theme = theme_name, fields = palette.len(), "applying calendar exception");
        for (field, value) in palette {
            style.set(*field, *value);
        }
    }
}
