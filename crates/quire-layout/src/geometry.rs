//! Heuristic canvas geometry.
//!
//! Text is not measured. Title, date and slot rows get fixed estimated
//! heights and separators are placed relative to those estimates.

use quire_style::Align;
use serde::{Deserialize, Serialize};

/// Separator length class, as a fraction of the canvas width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Band {
    Short,
    Medium,
    Long,
}

/// Canvas dimensions and layout estimates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasGeometry {
    pub width: f64,
    pub padding: f64,
    pub title_height: f64,
    pub date_height: f64,
    pub row_gap: f64,
    pub slot_row_height: f64,
    pub short_band: f64,
    pub medium_band: f64,
    pub long_band: f64,
    /// Lower bound for content and separator widths.
    pub min_width: f64,
}

impl Default for CanvasGeometry {
    fn default() -> Self {
        Self {
            width: 1200.0,
            padding: 48.0,
            title_height: 72.0,
            date_height: 32.0,
            row_gap: 24.0,
            slot_row_height: 240.0,
            short_band: 0.2,
            medium_band: 0.4,
            long_band: 0.8,
            min_width: 8.0,
        }
    }
}

impl CanvasGeometry {
    fn floor(&self) -> f64 {
        self.min_width.max(0.0)
    }

    /// Canvas width minus padding, never below `min_width`.
    pub fn content_width(&self) -> f64 {
        let content = self.width - 2.0 * self.padding;
        if content < self.floor() {
            tracing::debug!(width = self.width, padding = self.padding, "degenerate content width");
        }
        content.max(self.floor())
    }

    /// Separator width for a band, clamped to `[min_width, content_width]`.
    pub fn band_width(&self, band: Band) -> f64 {
        let fraction = match band {
            Band::Short => self.short_band,
            Band::Medium => self.medium_band,
            Band::Long => self.long_band,
        };
        (self.width * fraction).max(self.floor()).min(self.content_width())
    }

    /// Left edge of an element of width `w` under `align`.
    pub fn x_for(&self, align: Align, w: f64) -> f64 {
        match align {
            Align::Left => self.padding,
            Align::Center => (self.width - w) / 2.0,
            Align::Right => self.width - self.padding - w,
        }
    }

    pub fn after_title_baseline(&self) -> f64 {
        self.padding + self.title_height + self.row_gap / 2.0
    }

    pub fn after_date_baseline(&self) -> f64 {
        self.after_title_baseline() + self.date_height + self.row_gap
    }

    /// Top of the first slot row.
    pub fn content_start(&self) -> f64 {
        self.padding + self.title_height + self.date_height + 2.0 * self.row_gap
    }

    /// Bottom of the slot row at `ordinal` (0-based).
    pub fn slot_row_bottom(&self, ordinal: usize) -> f64 {
        let i = ordinal as f64;
        self.content_start() + (i + 1.0) * self.slot_row_height + i * self.row_gap
    }

    /// Baseline of a separator below the slot row at `ordinal`.
    pub fn after_slot_row_baseline(&self, ordinal: usize) -> f64 {
        self.slot_row_bottom(ordinal) + self.row_gap / 2.0
    }
}
