//! End-to-end document flows over the built-in catalogs.

use quire::{Catalogs, Document, Format, Settings};
use quire_layout::{ContentBlock, Placement};
use quire_style::contrast::contrast_ratio;
use quire_style::{CalendarField, Rgb};
use tempfile::TempDir;

fn block(id: &str, chars: usize) -> ContentBlock {
    ContentBlock::new(id, "", "x".repeat(chars))
}

fn trio_document() -> (Document, Settings, Catalogs) {
    let settings = Settings::default();
    let catalogs = Catalogs::builtin();
    let doc = Document::new("single", "classic", "classic")
        .with_block(block("b0", 610))
        .with_block(block("b1", 1195))
        .with_block(block("b2", 605));
    let (doc, _) = doc
        .apply_layout("trio", "feature", &settings, &catalogs)
        .unwrap();
    (doc, settings, catalogs)
}

#[test]
fn layout_reallocates_and_decorates() {
    let (doc, _, _) = trio_document();
    let ids: Vec<&str> = doc.blocks.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["b1", "b2", "b0"]);
    assert_eq!(doc.decorations.len(), 3);
    assert_eq!(doc.decorations[2].key.placement, Placement::BetweenSlots);
}

#[test]
fn layout_with_mismatched_block_count_keeps_order() {
    let settings = Settings::default();
    let catalogs = Catalogs::builtin();
    let doc = Document::new("single", "classic", "classic")
        .with_block(block("a", 10))
        .with_block(block("b", 2000));
    let (doc, report) = doc
        .apply_layout("trio", "feature", &settings, &catalogs)
        .unwrap();
    assert!(!report.reallocated);
    assert_eq!(doc.blocks[0].id, "a");
}

#[test]
fn theme_switch_recolors_decorations_and_keeps_tweaks() {
    let (mut doc, settings, catalogs) = trio_document();
    let id = doc.decorations[0].id.clone();
    doc.decoration_mut(&id).unwrap().nudge(0.0, 12.0);

    let (doc, report) = doc.apply_theme("midnight", &settings, &catalogs).unwrap();
    assert_eq!(report.theme, "midnight");
    assert_eq!(doc.decorations[0].id, id);
    assert_eq!(doc.decorations[0].line_style, "midnight-stars");
    assert_eq!(doc.decorations[0].adjustment.dy, 12.0);
    assert_eq!(doc.decorations[0].color, "#7dd3fc");
}

#[test]
fn theme_switch_clears_only_echoed_pins() {
    let (mut doc, settings, catalogs) = trio_document();
    let classic = doc.calendar_style(&settings, &catalogs);
    doc.calendar_overrides.pin(
        CalendarField::HeaderText,
        classic.get(CalendarField::HeaderText).unwrap(),
    );
    doc.calendar_overrides
        .pin(CalendarField::CellBorder, "#ff6600");

    let (doc, report) = doc.apply_theme("sunrise", &settings, &catalogs).unwrap();
    assert_eq!(report.cleared, vec![CalendarField::HeaderText]);
    assert!(!doc.calendar_overrides.is_pinned(CalendarField::HeaderText));
    assert_eq!(
        report.calendar.get(CalendarField::CellBorder),
        Some("#ff6600")
    );

    let effective = doc.calendar_style(&settings, &catalogs);
    assert_eq!(effective, report.calendar);
    let header = Rgb::parse_hex(effective.get(CalendarField::HeaderText).unwrap()).unwrap();
    assert!(contrast_ratio(header, Rgb(0xff, 0xf7, 0xed)) >= 4.5);
}

#[test]
fn unknown_theme_falls_back_to_default() {
    let (doc, settings, catalogs) = trio_document();
    let (doc, report) = doc.apply_theme("vaporwave", &settings, &catalogs).unwrap();
    assert_eq!(report.theme, "classic");
    assert_eq!(doc.theme, "classic");
}

#[test]
fn document_round_trips_through_files() {
    let (mut doc, _, _) = trio_document();
    doc.calendar_overrides
        .pin(CalendarField::WeekendText, "#be123c");
    let id = doc.decorations[1].id.clone();
    doc.decoration_mut(&id).unwrap().resize(24.0);

    let dir = TempDir::new().unwrap();
    for name in ["doc.json", "doc.yaml"] {
        let path = dir.path().join(name);
        doc.save(&path).unwrap();
        assert_eq!(Document::load(&path).unwrap(), doc);
    }
}

#[test]
fn user_templates_round_trip_through_files() {
    let dir = TempDir::new().unwrap();
    let layouts = dir.path().join("layouts.yaml");
    std::fs::write(
        &layouts,
        "- id: news-letter\n  slots: 1\n  areas: [title, slot-1]\n  variants:\n    - name: plain\n      decorations: [{ placement: after-title }]\n",
    )
    .unwrap();
    let settings = Settings {
        template_files: vec![layouts.clone()],
        ..Settings::default()
    };
    let catalogs = settings.catalogs().unwrap();
    let (doc, _) = Document::new("single", "classic", "classic")
        .apply_layout("news-letter", "plain", &settings, &catalogs)
        .unwrap();
    assert_eq!(doc.decorations[0].key.to_string(), "news-letter:plain:after-title:0");

    let path = dir.path().join("doc.json");
    doc.save(&path).unwrap();
    assert_eq!(Document::load(&path).unwrap(), doc);

    // Ids that would break the key format never reach a catalog.
    std::fs::write(
        &layouts,
        "- id: \"news:letter\"\n  slots: 1\n  areas: [title, slot-1]\n  variants: [{ name: plain }]\n",
    )
    .unwrap();
    assert!(settings.catalogs().is_err());
}

#[test]
fn document_rejects_text_format() {
    let (doc, _, _) = trio_document();
    assert!(doc.to_string_as(Format::Text).is_err());
}

#[test]
fn stricter_contrast_settings_flow_into_calendar() {
    let (doc, _, catalogs) = trio_document();
    let strict = Settings::from_yaml("contrast:\n  min_ratio: 7.0\n").unwrap();
    let style = doc.calendar_style(&strict, &catalogs);
    let text = Rgb::parse_hex(style.get(CalendarField::CellText).unwrap()).unwrap();
    let bg = Rgb::parse_hex(style.get(CalendarField::CellBackground).unwrap()).unwrap();
    assert!(contrast_ratio(text, bg) >= 7.0);
}
