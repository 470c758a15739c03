//! Override provenance across theme switches.
//!
//! A pinned calendar field survives a theme switch only if the user really
//! chose it. A pin whose value is exactly what the *old* theme derived for
//! that field carries no user intent (it was most likely captured from the
//! derived style) and is dropped so the field follows the new theme.
//!
//! ```rust
//! use quire_style::{merge_overrides, CalendarField, CalendarStyle, Overrides};
//!
//! let old = CalendarStyle::new().with(CalendarField::CellText, "#111111");
//! let new = CalendarStyle::new().with(CalendarField::CellText, "#eeeeee");
//!
//! let mut pins = Overrides::new();
//! pins.pin(CalendarField::CellText, "#111111");
//!
//! let outcome = merge_overrides(&new, &old, &pins);
//! assert_eq!(outcome.cleared, vec![CalendarField::CellText]);
//! assert_eq!(outcome.effective.get(CalendarField::CellText), Some("#eeeeee"));
//! ```

use serde::{Deserialize, Serialize};

use crate::calendar::{CalendarField, CalendarStyle, Overrides};

/// Result of reconciling pins with a new derivation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeOutcome {
    /// The style to render: new derivation with surviving pins on top.
    pub effective: CalendarStyle,
    /// Fields whose pins were dropped, in field order.
    pub cleared: Vec<CalendarField>,
    /// Pins that survived, values unchanged.
    pub overrides: Overrides,
}

/// Reconciles `overrides` against a theme switch from `old` to `new`.
///
/// A pin is cleared iff its value is string-equal to `old`'s value for the
/// same field. Every other pin is kept verbatim.
pub fn merge_overrides(
    new: &CalendarStyle,
    old: &CalendarStyle,
    overrides: &Overrides,
) -> MergeOutcome {
    let mut kept = Overrides::new();
    let mut cleared = Vec::new();

    for (field, value) in overrides.iter() {
        if old.get(field) == Some(value) {
            tracing::debug!(%field, value, "clearing override equal to previous derivation");
            cleared.push(field);
        } else {
            kept.pin(field, value);
        }
    }

    MergeOutcome {
        effective: apply_overrides(new, &kept),
        cleared,
        overrides: kept,
    }
}

/// Overlays `overrides` on `derived` without any clearing.
pub fn apply_overrides(derived: &CalendarStyle, overrides: &Overrides) -> CalendarStyle {
    let mut effective = derived.clone();
    for (field, value) in overrides.iter() {
        effective.set(field, value);
    }
    effective
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style(pairs: &[(CalendarField, &str)]) -> CalendarStyle {
        pairs.iter().map(|(f, v)| (*f, v.to_string())).collect()
    }

    #[test]
    fn user_choice_survives() {
        let old = style(&[(CalendarField::CellBorder, "#cbd5e1")]);
        let new = style(&[(CalendarField::CellBorder, "#334155")]);
        let mut pins = Overrides::new();
        pins.pin(CalendarField::CellBorder, "#ff00aa");

        let outcome = merge_overrides(&new, &old, &pins);
        assert!(outcome.cleared.is_empty());
        assert_eq!(outcome.overrides, pins);
        assert_eq!(outcome.effective.get(CalendarField::CellBorder), Some("#ff00aa"));
    }

    #[test]
    fn match_is_exact_string_equality() {
        let old = style(&[(CalendarField::CellText, "#111111")]);
        let new = style(&[(CalendarField::CellText, "#eeeeee")]);
        let mut pins = Overrides::new();
        pins.pin(CalendarField::CellText, "#111");

        let outcome = merge_overrides(&new, &old, &pins);
        assert!(outcome.cleared.is_empty());
        assert_eq!(outcome.effective.get(CalendarField::CellText), Some("#111"));
    }

    #[test]
    fn unpinned_fields_track_new_derivation() {
        let old = style(&[
            (CalendarField::HeaderText, "#1e3a8a"),
            (CalendarField::WeekdayText, "#ffffff"),
        ]);
        let new = style(&[
            (CalendarField::HeaderText, "#7dd3fc"),
            (CalendarField::WeekdayText, "#e0f2fe"),
        ]);
        let mut pins = Overrides::new();
        pins.pin(CalendarField::WeekdayText, "#ffffff");
        pins.pin(CalendarField::OutsideMonthOpacity, "0.3");

        let outcome = merge_overrides(&new, &old, &pins);
        assert_eq!(outcome.cleared, vec![CalendarField::WeekdayText]);
        assert_eq!(outcome.overrides.len(), 1);
        assert_eq!(outcome.effective.get(CalendarField::HeaderText), Some("#7dd3fc"));
        assert_eq!(outcome.effective.get(CalendarField::WeekdayText), Some("#e0f2fe"));
        assert_eq!(outcome.effective.get(CalendarField::OutsideMonthOpacity), Some("0.3"));
    }

    #[test]
    fn apply_overrides_never_clears() {
        let derived = style(&[(CalendarField::CellText, "#111111")]);
        let mut pins = Overrides::new();
        pins.pin(CalendarField::CellText, "#111111");
        let effective = apply_overrides(&derived, &pins);
        assert_eq!(effective, derived);
        assert!(pins.is_pinned(CalendarField::CellText));
    }
}
