//! Calendar style fields and the field → value maps built on them.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One independently overridable property of the embedded calendar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CalendarField {
    HeaderText,
    WeekdayBackground,
    WeekdayText,
    CellBackground,
    CellText,
    CellBorder,
    WeekendBackground,
    WeekendText,
    OutsideMonthText,
    OutsideMonthBackground,
    OutsideMonthOpacity,
}

impl CalendarField {
    pub const ALL: [CalendarField; 11] = [
        CalendarField::HeaderText,
        CalendarField::WeekdayBackground,
        CalendarField::WeekdayText,
        CalendarField::CellBackground,
        CalendarField::CellText,
        CalendarField::CellBorder,
        CalendarField::WeekendBackground,
        CalendarField::WeekendText,
        CalendarField::OutsideMonthText,
        CalendarField::OutsideMonthBackground,
        CalendarField::OutsideMonthOpacity,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CalendarField::HeaderText => "header-text",
            CalendarField::WeekdayBackground => "weekday-background",
            CalendarField::WeekdayText => "weekday-text",
            CalendarField::CellBackground => "cell-background",
            CalendarField::CellText => "cell-text",
            CalendarField::CellBorder => "cell-border",
            CalendarField::WeekendBackground => "weekend-background",
            CalendarField::WeekendText => "weekend-text",
            CalendarField::OutsideMonthText => "outside-month-text",
            CalendarField::OutsideMonthBackground => "outside-month-background",
            CalendarField::OutsideMonthOpacity => "outside-month-opacity",
        }
    }
}

impl fmt::Display for CalendarField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalendarField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CalendarField::ALL
            .iter()
            .copied()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| format!("unknown calendar field '{}'", s))
    }
}

/// A derived (or effective) calendar style: one string per field.
///
/// Values are CSS-ready strings: hex colors, `rgba(...)` tints and a plain
/// number for the outside-month opacity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarStyle(BTreeMap<CalendarField, String>);

impl CalendarStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: CalendarField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn set(&mut self, field: CalendarField, value: impl Into<String>) {
        self.0.insert(field, value.into());
    }

    pub fn with(mut self, field: CalendarField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (CalendarField, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(CalendarField, String)> for CalendarStyle {
    fn from_iter<I: IntoIterator<Item = (CalendarField, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// User pins on calendar fields. A present entry wins over derivation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Overrides(BTreeMap<CalendarField, String>);

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pins `field` to `value`, returning the previous pin if any.
    pub fn pin(&mut self, field: CalendarField, value: impl Into<String>) -> Option<String> {
        self.0.insert(field, value.into())
    }

    /// Removes the pin on `field`, returning its value if it was pinned.
    pub fn unpin(&mut self, field: CalendarField) -> Option<String> {
        self.0.remove(&field)
    }

    pub fn get(&self, field: CalendarField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_pinned(&self, field: CalendarField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (CalendarField, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(CalendarField, String)> for Overrides {
    fn from_iter<I: IntoIterator<Item = (CalendarField, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
