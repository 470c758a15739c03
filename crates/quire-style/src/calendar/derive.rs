//! Derives a readable calendar style from a theme.
//!
//! Every surface of the calendar widget is computed from the theme's page
//! background and accent with contrast enforcement on the text/background
//! pairs, so switching themes never leaves unreadable text behind.

use serde::{Deserialize, Serialize};

use super::exceptions;
use super::field::{CalendarField, CalendarStyle};
use crate::color::{rgba, Rgb};
use crate::contrast::{
    best_pole, composite, contrast_ratio, ensure_contrast, is_dark, mix, DEFAULT_MIN_RATIO,
};
use crate::theme::{Surface, Theme};

/// Cell background used on light pages when the theme's section is unusable.
pub const LIGHT_CELL_BACKGROUND: Rgb = Rgb(0xfc, 0xfc, 0xfd);

/// Minimum contrast between section and page for the section to be reused.
pub const MIN_CELL_SEPARATION: f64 = 1.2;

const WEEKDAY_ACCENT_MIX: f64 = 0.3;
const WEEKDAY_PAGE_SHIFT: f64 = 0.15;
const DARK_CELL_LIFT: f64 = 0.08;
const BORDER_MIX: f64 = 0.18;
const WEEKEND_ALPHA_LIGHT: f64 = 0.125;
const WEEKEND_ALPHA_DARK: f64 = 0.18;
const OUTSIDE_TEXT_FADE: f64 = 0.45;
const OUTSIDE_BACKGROUND_MIX: f64 = 0.5;

/// Contrast thresholds used during derivation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContrastSettings {
    /// Minimum ratio for header, cell and weekend text.
    pub min_ratio: f64,
    /// Minimum ratio for the weekday strip.
    pub weekday_min_ratio: f64,
    /// Page luminance below which the theme counts as dark.
    pub dark_threshold: f64,
}

impl Default for ContrastSettings {
    fn default() -> Self {
        Self {
            min_ratio: DEFAULT_MIN_RATIO,
            weekday_min_ratio: 4.0,
            dark_threshold: 0.35,
        }
    }
}

/// Computes the full calendar style for `theme`.
///
/// Never fails: non-analyzable theme colors fall back to the page default,
/// the accent or the better of black/white.
pub fn derive_surface_style(theme: &Theme, settings: &ContrastSettings) -> CalendarStyle {
    let page = theme.page_background();
    let accent = theme.accent();
    let dark = is_dark(page, settings.dark_threshold);

    let page_attrs = theme.surface(Surface::Page);
    let title = theme.surface(Surface::Title);
    let section = theme.surface(Surface::Section);
    let heading = theme.surface(Surface::Heading);

    let header = ensure_contrast(title.text_rgb().unwrap_or(accent), page, settings.min_ratio);

    let (weekday_bg, weekday_text) = weekday_strip(
        heading.background_rgb(),
        heading.text_rgb(),
        page,
        accent,
        settings.weekday_min_ratio,
    );

    let cell_bg = match section.background_rgb() {
        Some(bg) if contrast_ratio(bg, page) >= MIN_CELL_SEPARATION => bg,
        _ if dark => mix(page, Rgb::WHITE, DARK_CELL_LIFT),
        _ => LIGHT_CELL_BACKGROUND,
    };
    let cell_text = section
        .text_rgb()
        .or_else(|| page_attrs.text_rgb())
        .unwrap_or_else(|| best_pole(cell_bg));
    let cell_text = ensure_contrast(cell_text, cell_bg, settings.min_ratio);
    let border = section
        .border_rgb()
        .unwrap_or_else(|| mix(cell_bg, cell_text, BORDER_MIX));

    let weekend_alpha = if dark {
        WEEKEND_ALPHA_DARK
    } else {
        WEEKEND_ALPHA_LIGHT
    };
    let weekend_surface = composite(accent, cell_bg, weekend_alpha);
    let weekend_text = ensure_contrast(cell_text, weekend_surface, settings.min_ratio);

    let outside_text = mix(cell_text, cell_bg, OUTSIDE_TEXT_FADE);
    let outside_bg = mix(cell_bg, page, OUTSIDE_BACKGROUND_MIX);
    let outside_opacity = if dark { "0.5" } else { "0.6" };

    let mut style = CalendarStyle::new()
        .with(CalendarField::HeaderText, header.to_hex())
        .with(CalendarField::WeekdayBackground, weekday_bg.to_hex())
        .with(CalendarField::WeekdayText, weekday_text.to_hex())
        .with(CalendarField::CellBackground, cell_bg.to_hex())
        .with(CalendarField::CellText, cell_text.to_hex())
        .with(CalendarField::CellBorder, border.to_hex())
        .with(CalendarField::WeekendBackground, rgba(accent, weekend_alpha))
        .with(CalendarField::WeekendText, weekend_text.to_hex())
        .with(CalendarField::OutsideMonthText, outside_text.to_hex())
        .with(CalendarField::OutsideMonthBackground, outside_bg.to_hex())
        .with(CalendarField::OutsideMonthOpacity, outside_opacity);

    exceptions::apply(theme.name(), &mut style);
    style
}

/// Weekday strip background and text.
///
/// A pair below `min_ratio` first gets its background eased toward the page;
/// if that is not enough the text is pushed toward black or white.
fn weekday_strip(
    heading_bg: Option<Rgb>,
    heading_text: Option<Rgb>,
    page: Rgb,
    accent: Rgb,
    min_ratio: f64,
) -> (Rgb, Rgb) {
    let mut bg = heading_bg.unwrap_or_else(|| mix(page, accent, WEEKDAY_ACCENT_MIX));
    let mut text = heading_text.unwrap_or_else(|| best_pole(bg));

    if contrast_ratio(text, bg) < min_ratio {
        bg = mix(bg, page, WEEKDAY_PAGE_SHIFT);
        if contrast_ratio(text, bg) < min_ratio {
            tracing::debug!(bg = %bg, text = %text, "weekday strip pushed to minimum contrast");
            text = ensure_contrast(text, bg, min_ratio);
        }
    }
    (bg, text)
}
