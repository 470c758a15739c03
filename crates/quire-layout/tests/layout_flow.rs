//! Template switches across the built-in catalogs.

use quire_layout::{
    reallocate_content, resolve_decorations, CanvasGeometry, ContentBlock, LayoutCatalog,
    LineStyleCatalog, Placement,
};
use quire_style::ThemeCatalog;

fn blocks(weights: &[usize]) -> Vec<ContentBlock> {
    weights
        .iter()
        .enumerate()
        .map(|(i, w)| ContentBlock::new(format!("b{}", i), "", "a".repeat(*w)))
        .collect()
}

#[test]
fn keys_are_unique_within_every_variant() {
    let theme = ThemeCatalog::builtin().resolve("classic");
    for template in LayoutCatalog::builtin().iter() {
        for variant in &template.variants {
            let elements = resolve_decorations(
                template,
                variant,
                theme,
                &[],
                LineStyleCatalog::builtin(),
                &CanvasGeometry::default(),
            );
            let mut keys: Vec<String> = elements.iter().map(|e| e.key.to_string()).collect();
            let total = keys.len();
            keys.sort();
            keys.dedup();
            assert_eq!(keys.len(), total, "{}:{}", template.id, variant.name);
        }
    }
}

#[test]
fn right_aligned_separators_end_at_padding() {
    let (template, variant) = LayoutCatalog::builtin().resolve("trio", "feature").unwrap();
    let geometry = CanvasGeometry::default();
    let elements = resolve_decorations(
        template,
        variant,
        ThemeCatalog::builtin().resolve("paper"),
        &[],
        LineStyleCatalog::builtin(),
        &geometry,
    );
    for element in elements
        .iter()
        .filter(|e| !e.key.placement.is_slot_separator())
    {
        assert_eq!(
            element.frame.x + element.frame.width,
            geometry.width - geometry.padding
        );
    }
    let between = elements
        .iter()
        .find(|e| e.key.placement == Placement::BetweenSlots)
        .unwrap();
    assert_eq!(between.frame.x, (geometry.width - between.frame.width) / 2.0);
}

#[test]
fn switching_variant_starts_fresh_decorations() {
    let catalog = LayoutCatalog::builtin();
    let theme = ThemeCatalog::builtin().resolve("classic");
    let lines = LineStyleCatalog::builtin();
    let geometry = CanvasGeometry::default();

    let (t, feature) = catalog.resolve("trio", "feature").unwrap();
    let mut first = resolve_decorations(t, feature, theme, &[], lines, &geometry);
    first[0].nudge(0.0, 30.0);

    let (t, stacked) = catalog.resolve("trio", "stacked").unwrap();
    let second = resolve_decorations(t, stacked, theme, &first, lines, &geometry);
    assert!(second.iter().all(|e| e.adjustment.is_zero()));
    assert!(second.iter().all(|e| e.id.starts_with("deco:trio:stacked:")));
}

#[test]
fn trio_feature_reallocation_matches_targets() {
    let (_, variant) = LayoutCatalog::builtin().resolve("trio", "feature").unwrap();
    let targets = variant.targets.as_deref().unwrap();
    let out = reallocate_content(&blocks(&[610, 1195, 605]), targets);
    let ids: Vec<&str> = out.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["b1", "b2", "b0"]);
}

#[test]
fn mosaic_places_longest_block_in_feature_slot() {
    let (_, variant) = LayoutCatalog::builtin().resolve("mosaic", "gallery").unwrap();
    let targets = variant.targets.as_deref().unwrap();
    let out = reallocate_content(&blocks(&[300, 420, 1500, 390, 510]), targets);
    assert_eq!(out[0].id, "b2");
}
