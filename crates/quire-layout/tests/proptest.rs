//! Property-based tests for reallocation and decoration resolution.

use proptest::prelude::*;
use quire_layout::{
    plan_slots, reallocate_content, resolve_decorations, CanvasGeometry, ContentBlock,
    LayoutCatalog, LineStyleCatalog,
};
use quire_style::ThemeCatalog;

fn blocks_and_targets() -> impl Strategy<Value = (Vec<ContentBlock>, Vec<u32>)> {
    (1usize..8).prop_flat_map(|n| {
        (
            prop::collection::vec(("[a-z ]{0,20}", "[a-z ]{0,200}"), n),
            prop::collection::vec(0u32..2000, n),
        )
            .prop_map(|(texts, targets)| {
                let blocks = texts
                    .into_iter()
                    .enumerate()
                    .map(|(i, (title, body))| ContentBlock::new(format!("b{}", i), title, body))
                    .collect();
                (blocks, targets)
            })
    })
}

proptest! {
    /// The plan is a permutation of the item indices.
    #[test]
    fn plan_is_a_bijection(
        weights in prop::collection::vec(0usize..5000, 0..10),
        seed in prop::collection::vec(0u32..5000, 10),
    ) {
        let targets = &seed[..weights.len()];
        let mut plan = plan_slots(&weights, targets).unwrap();
        plan.sort_unstable();
        prop_assert_eq!(plan, (0..weights.len()).collect::<Vec<_>>());
    }

    /// Reallocation only permutes blocks and is deterministic.
    #[test]
    fn reallocation_permutes_deterministically((blocks, targets) in blocks_and_targets()) {
        let once = reallocate_content(&blocks, &targets);
        let again = reallocate_content(&blocks, &targets);
        prop_assert_eq!(&once, &again);

        let mut before: Vec<&str> = blocks.iter().map(|b| b.id.as_str()).collect();
        let mut after: Vec<&str> = once.iter().map(|b| b.id.as_str()).collect();
        before.sort_unstable();
        after.sort_unstable();
        prop_assert_eq!(before, after);
    }

    /// Mismatched counts never reorder.
    #[test]
    fn mismatch_is_identity((blocks, targets) in blocks_and_targets(), extra in 0u32..2000) {
        let mut longer = targets.clone();
        longer.push(extra);
        prop_assert_eq!(reallocate_content(&blocks, &longer), blocks);
    }

    /// Feeding a resolution back in yields the same elements, for every
    /// built-in template, variant and theme.
    #[test]
    fn resolution_is_idempotent(
        template_index in 0usize..5,
        variant_index in 0usize..2,
        theme_index in 0usize..5,
        width in 200.0f64..3000.0,
    ) {
        let catalog = LayoutCatalog::builtin();
        let template = catalog.iter().nth(template_index).unwrap();
        let variant = &template.variants[variant_index % template.variants.len()];
        let theme = ThemeCatalog::builtin().iter().nth(theme_index).unwrap();
        let geometry = CanvasGeometry { width, ..CanvasGeometry::default() };
        let lines = LineStyleCatalog::builtin();

        let first = resolve_decorations(template, variant, theme, &[], lines, &geometry);
        let second = resolve_decorations(template, variant, theme, &first, lines, &geometry);
        prop_assert_eq!(first, second);
    }
}
