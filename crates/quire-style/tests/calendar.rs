//! Calendar derivation and override reconciliation across built-in themes.

use quire_style::contrast::contrast_ratio;
use quire_style::{
    derive_surface_style, merge_overrides, CalendarField, CalendarStyle, ContrastSettings,
    Overrides, Rgb, StyleAttributes, Surface, Theme, ThemeCatalog,
};

fn rgb(style: &CalendarStyle, field: CalendarField) -> Rgb {
    Rgb::parse_hex(style.get(field).unwrap()).unwrap()
}

fn derive(name: &str) -> CalendarStyle {
    derive_surface_style(
        ThemeCatalog::builtin().resolve(name),
        &ContrastSettings::default(),
    )
}

#[test]
fn builtin_themes_meet_contrast_minimums() {
    for theme in ThemeCatalog::builtin().iter() {
        let style = derive_surface_style(theme, &ContrastSettings::default());

        let header = contrast_ratio(rgb(&style, CalendarField::HeaderText), theme.page_background());
        assert!(header >= 4.5, "{} header {}", theme.name(), header);

        let weekday = contrast_ratio(
            rgb(&style, CalendarField::WeekdayText),
            rgb(&style, CalendarField::WeekdayBackground),
        );
        assert!(weekday >= 4.0, "{} weekday {}", theme.name(), weekday);

        let cell = contrast_ratio(
            rgb(&style, CalendarField::CellText),
            rgb(&style, CalendarField::CellBackground),
        );
        assert!(cell >= 4.5, "{} cell {}", theme.name(), cell);
    }
}

#[test]
fn dark_page_with_transparent_title_stays_readable() {
    let theme = Theme::named("ink")
        .with_surface(Surface::Page, StyleAttributes::new().with_background("#1a1a1a"))
        .with_surface(Surface::Title, StyleAttributes::new().with_text("transparent"));
    let style = derive_surface_style(&theme, &ContrastSettings::default());

    let page = Rgb(0x1a, 0x1a, 0x1a);
    assert!(contrast_ratio(rgb(&style, CalendarField::HeaderText), page) >= 4.5);
    assert_eq!(style.get(CalendarField::OutsideMonthOpacity), Some("0.5"));
    assert_eq!(
        style.get(CalendarField::WeekendBackground),
        Some("rgba(59, 130, 246, 0.18)")
    );
}

#[test]
fn paper_gradient_title_falls_back_to_accent_chain() {
    let paper = ThemeCatalog::builtin().resolve("paper");
    // Title is a gradient and there is no heading, so the section border leads.
    assert_eq!(paper.accent(), Rgb(0xc8, 0xbf, 0xae));
    let style = derive("paper");
    assert!(contrast_ratio(rgb(&style, CalendarField::HeaderText), paper.page_background()) >= 4.5);
}

#[test]
fn chalkboard_uses_fixed_palette() {
    let style = derive("chalkboard");
    assert_eq!(style.get(CalendarField::HeaderText), Some("#f5f1e6"));
    assert_eq!(style.get(CalendarField::WeekdayBackground), Some("#2f4a3a"));
    assert_eq!(style.get(CalendarField::CellBackground), Some("#2b3f33"));
    assert_eq!(
        style.get(CalendarField::WeekendBackground),
        Some("rgba(245, 241, 230, 0.08)")
    );
    assert_eq!(style.get(CalendarField::OutsideMonthText), Some("#9aa89e"));
    // Fields outside the palette are still derived.
    assert_eq!(style.get(CalendarField::OutsideMonthOpacity), Some("0.5"));
}

#[test]
fn theme_switch_clears_captured_pins_and_keeps_choices() {
    let classic = derive("classic");
    let midnight = derive("midnight");

    let mut pins = Overrides::new();
    // Captured from the classic derivation: carries no user intent.
    pins.pin(
        CalendarField::CellBorder,
        classic.get(CalendarField::CellBorder).unwrap(),
    );
    // A deliberate choice.
    pins.pin(CalendarField::WeekendText, "#be123c");

    let outcome = merge_overrides(&midnight, &classic, &pins);

    assert_eq!(outcome.cleared, vec![CalendarField::CellBorder]);
    assert!(!outcome.overrides.is_pinned(CalendarField::CellBorder));
    assert_eq!(outcome.overrides.get(CalendarField::WeekendText), Some("#be123c"));
    assert_eq!(
        outcome.effective.get(CalendarField::CellBorder),
        midnight.get(CalendarField::CellBorder)
    );
    assert_eq!(outcome.effective.get(CalendarField::WeekendText), Some("#be123c"));
    assert_eq!(
        outcome.effective.get(CalendarField::HeaderText),
        midnight.get(CalendarField::HeaderText)
    );
}

#[test]
fn derivation_is_deterministic() {
    for name in ["classic", "midnight", "paper", "sunrise", "chalkboard"] {
        assert_eq!(derive(name), derive(name));
    }
}
