//! Decoration resolution.
//!
//! Turns a variant's [`DecorationDescriptor`]s into positioned
//! [`DecorativeElement`]s. Resolution is repeatable: elements from a
//! previous application are matched by [`DecorationKey`] and keep their id,
//! any user-chosen color and any manual geometry adjustment, while the base
//! geometry and theme-driven color are recomputed every time.
//!
//! ```rust
//! use quire_layout::{resolve_decorations, CanvasGeometry, LayoutCatalog, LineStyleCatalog};
//! use quire_style::ThemeCatalog;
//!
//! let (template, variant) = LayoutCatalog::builtin().resolve("trio", "feature").unwrap();
//! let theme = ThemeCatalog::builtin().resolve("midnight");
//! let elements = resolve_decorations(
//!     template,
//!     variant,
//!     theme,
//!     &[],
//!     LineStyleCatalog::builtin(),
//!     &CanvasGeometry::default(),
//! );
//! assert_eq!(elements.len(), variant.decorations.len());
//! ```

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use quire_style::{Align, Theme};
use serde::{Deserialize, Serialize};

use crate::geometry::{Band, CanvasGeometry};
use crate::line_style::{LineStyle, LineStyleCatalog};
use crate::types::{LayoutTemplate, Placement, Variant, KEY_SEPARATOR};

/// Narrowest width a manual resize can produce.
pub const MIN_VISIBLE_WIDTH: f64 = 1.0;

/// Stable identity of a decoration across re-applications.
///
/// Rendered as `templateId:variantName:placement:slotIndex`. `slotIndex` is
/// K for `after-slot-K` and the occurrence index of the placement within the
/// variant otherwise. A repeated `after-slot-K` takes `max(N, K) + n` for its
/// n-th repeat, N being the template's slot count.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DecorationKey {
    pub template: String,
    pub variant: String,
    pub placement: Placement,
    pub index: usize,
}

impl fmt::Display for DecorationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = KEY_SEPARATOR;
        write!(
            f,
            "{}{sep}{}{sep}{}{sep}{}",
            self.template, self.variant, self.placement, self.index
        )
    }
}

impl FromStr for DecorationKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(KEY_SEPARATOR).collect();
        let [template, variant, placement, index] = parts.as_slice() else {
            return Err(format!("Invalid decoration key: '{}'.", s));
        };
        Ok(Self {
            template: template.to_string(),
            variant: variant.to_string(),
            placement: placement.parse()?,
            index: index
                .parse()
                .map_err(|_| format!("Invalid decoration index in '{}'.", s))?,
        })
    }
}

impl TryFrom<String> for DecorationKey {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<DecorationKey> for String {
    fn from(key: DecorationKey) -> Self {
        key.to_string()
    }
}

/// Position and size on the canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Frame {
    /// This frame with a manual adjustment applied.
    pub fn adjusted(&self, adjustment: &Adjustment) -> Frame {
        Frame {
            x: self.x + adjustment.dx,
            y: self.y + adjustment.dy,
            width: (self.width + adjustment.dwidth).max(MIN_VISIBLE_WIDTH),
            height: self.height,
        }
    }
}

/// Manual geometry tweak recorded on an element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Adjustment {
    pub dx: f64,
    pub dy: f64,
    pub dwidth: f64,
}

impl Adjustment {
    pub fn is_zero(&self) -> bool {
        self.dx == 0.0 && self.dy == 0.0 && self.dwidth == 0.0
    }
}

/// A positioned separator owned by the layout system.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DecorativeElement {
    pub id: String,
    pub key: DecorationKey,
    pub line_style: String,
    /// Geometry computed from the layout, before manual adjustment.
    pub base: Frame,
    /// Effective geometry: `base` with `adjustment` applied.
    pub frame: Frame,
    pub color: String,
    #[serde(default)]
    pub color_customized: bool,
    #[serde(default, skip_serializing_if = "Adjustment::is_zero")]
    pub adjustment: Adjustment,
    #[serde(default = "system_owned")]
    pub system_owned: bool,
}

fn system_owned() -> bool {
    true
}

impl DecorativeElement {
    /// Moves the element, remembering the offset for later re-applications.
    pub fn nudge(&mut self, dx: f64, dy: f64) {
        self.adjustment.dx += dx;
        self.adjustment.dy += dy;
        self.frame = self.base.adjusted(&self.adjustment);
    }

    /// Widens (or narrows, with a negative delta) the element.
    pub fn resize(&mut self, dwidth: f64) {
        self.adjustment.dwidth += dwidth;
        self.frame = self.base.adjusted(&self.adjustment);
    }

    /// Sets a user-chosen color that survives theme changes.
    ///
    /// Line styles that are not color-customizable drop it on the next
    /// resolution.
    pub fn recolor(&mut self, color: impl Into<String>) {
        self.color = color.into();
        self.color_customized = true;
    }

    /// Drops manual geometry changes.
    pub fn reset_adjustment(&mut self) {
        self.adjustment = Adjustment::default();
        self.frame = self.base;
    }

    /// System-owned elements cannot be removed by ordinary deletion.
    pub fn is_deletable(&self) -> bool {
        !self.system_owned
    }
}

/// Resolves decorations against a line-style catalog and canvas geometry.
#[derive(Clone, Copy, Debug)]
pub struct DecorationResolver<'a> {
    catalog: &'a LineStyleCatalog,
    geometry: &'a CanvasGeometry,
}

impl<'a> DecorationResolver<'a> {
    pub fn new(catalog: &'a LineStyleCatalog, geometry: &'a CanvasGeometry) -> Self {
        Self { catalog, geometry }
    }

    /// One element per descriptor of `variant`, in descriptor order.
    pub fn resolve(
        &self,
        template: &LayoutTemplate,
        variant: &Variant,
        theme: &Theme,
        previous: &[DecorativeElement],
    ) -> Vec<DecorativeElement> {
        let by_key: HashMap<&DecorationKey, &DecorativeElement> =
            previous.iter().map(|e| (&e.key, e)).collect();

        let mut occurrences: HashMap<Placement, usize> = HashMap::new();
        let mut elements = Vec::with_capacity(variant.decorations.len());

        for descriptor in &variant.decorations {
            let placement = descriptor.placement;
            let seen = occurrences.entry(placement).or_insert(0);
            let n = *seen;
            *seen += 1;
            let index = match placement {
                Placement::AfterSlot(k) if n == 0 => k,
                // Repeats land past every slot number so they never collide with K.
                Placement::AfterSlot(k) => {
                    tracing::debug!(
                        template = %template.id,
                        slot = k,
                        "repeated after-slot placement"
                    );
                    template.slots.max(k) + n
                }
                _ => n,
            };
            let key = DecorationKey {
                template: template.id.clone(),
                variant: variant.name.clone(),
                placement,
                index,
            };

            let style = self.catalog.resolve(&descriptor.line, theme.name());
            let base = self.base_frame(template, variant, placement, style);
            let prior = by_key.get(&key).copied();

            let element = match prior {
                Some(prev) => {
                    tracing::trace!(key = %key, "reusing decoration");
                    let keep_color = prev.color_customized && style.color_customizable;
                    if prev.color_customized && !keep_color {
                        tracing::debug!(
                            key = %key,
                            style = %style.id,
                            "line style has a fixed color"
                        );
                    }
                    DecorativeElement {
                        id: prev.id.clone(),
                        line_style: style.id.clone(),
                        base,
                        frame: base.adjusted(&prev.adjustment),
                        color: if keep_color {
                            prev.color.clone()
                        } else {
                            default_color(style, theme)
                        },
                        color_customized: keep_color,
                        adjustment: prev.adjustment,
                        system_owned: true,
                        key,
                    }
                }
                None => {
                    tracing::trace!(key = %key, "new decoration");
                    DecorativeElement {
                        id: format!("deco:{}", key),
                        line_style: style.id.clone(),
                        base,
                        frame: base,
                        color: default_color(style, theme),
                        color_customized: false,
                        adjustment: Adjustment::default(),
                        system_owned: true,
                        key,
                    }
                }
            };
            elements.push(element);
        }

        elements
    }

    fn base_frame(
        &self,
        template: &LayoutTemplate,
        variant: &Variant,
        placement: Placement,
        style: &LineStyle,
    ) -> Frame {
        let g = self.geometry;
        let (align, band) = match placement {
            Placement::AfterTitle => (variant.title_align.unwrap_or_default(), Band::Medium),
            Placement::AfterDate => (variant.date_align.unwrap_or_default(), Band::Short),
            _ => (Align::Center, Band::Long),
        };

        let last_row = template.areas.slot_rows().len().saturating_sub(1);
        let baseline = match placement {
            Placement::AfterTitle => g.after_title_baseline(),
            Placement::AfterDate => g.after_date_baseline(),
            Placement::BeforeSlots => g.content_start(),
            Placement::BetweenSlots => g.after_slot_row_baseline(0),
            Placement::AfterSlots => g.after_slot_row_baseline(last_row),
            Placement::AfterSlot(k) => {
                let ordinal = template.areas.slot_row_ordinal(k).unwrap_or_else(|| {
                    tracing::debug!(template = %template.id, slot = k, "slot not in grid");
                    last_row
                });
                g.after_slot_row_baseline(ordinal)
            }
        };

        let width = g.band_width(band);
        let height = style.height();
        Frame {
            x: g.x_for(align, width),
            y: baseline - height / 2.0,
            width,
            height,
        }
    }
}

/// Color for an element without a user-chosen color.
fn default_color(style: &LineStyle, theme: &Theme) -> String {
    match style.default_color {
        Some(fixed) if !style.color_customizable => fixed.to_hex(),
        _ => theme.accent().to_hex(),
    }
}

/// Resolves `variant`'s decorations for `theme`, carrying over manual tweaks
/// from `previous`.
pub fn resolve_decorations(
    template: &LayoutTemplate,
    variant: &Variant,
    theme: &Theme,
    previous: &[DecorativeElement],
    catalog: &LineStyleCatalog,
    geometry: &CanvasGeometry,
) -> Vec<DecorativeElement> {
    DecorationResolver::new(catalog, geometry).resolve(template, variant, theme, previous)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::LayoutCatalog;
    use crate::types::LineRef;
    use quire_style::ThemeCatalog;

    fn resolve(
        template: &str,
        variant: &str,
        theme: &str,
        previous: &[DecorativeElement],
    ) -> Vec<DecorativeElement> {
        let (t, v) = LayoutCatalog::builtin().resolve(template, variant).unwrap();
        resolve_decorations(
            t,
            v,
            ThemeCatalog::builtin().resolve(theme),
            previous,
            LineStyleCatalog::builtin(),
            &CanvasGeometry::default(),
        )
    }

    #[test]
    fn test_key_round_trip() {
        let key: DecorationKey = "trio:feature:after-slot-2:2".parse().unwrap();
        assert_eq!(key.placement, Placement::AfterSlot(2));
        assert_eq!(key.to_string(), "trio:feature:after-slot-2:2");
        assert!("trio:feature:after-title".parse::<DecorationKey>().is_err());
        assert!("a:b:sideways:0".parse::<DecorationKey>().is_err());
    }

    #[test]
    fn test_one_element_per_descriptor_in_order() {
        let elements = resolve("trio", "feature", "classic", &[]);
        let keys: Vec<String> = elements.iter().map(|e| e.key.to_string()).collect();
        assert_eq!(
            keys,
            vec![
                "trio:feature:after-title:0",
                "trio:feature:after-date:0",
                "trio:feature:between-slots:0",
            ]
        );
        assert_eq!(elements[0].id, "deco:trio:feature:after-title:0");
        assert!(elements.iter().all(|e| !e.is_deletable()));
    }

    #[test]
    fn test_repeated_placements_get_distinct_keys() {
        let template = LayoutCatalog::builtin().get("duo").unwrap();
        let variant = Variant::new("twice")
            .with_decoration(Placement::AfterTitle, LineRef::Themed)
            .with_decoration(Placement::AfterTitle, LineRef::style("hairline"));
        let elements = resolve_decorations(
            template,
            &variant,
            ThemeCatalog::builtin().resolve("classic"),
            &[],
            LineStyleCatalog::builtin(),
            &CanvasGeometry::default(),
        );
        assert_eq!(elements[0].key.index, 0);
        assert_eq!(elements[1].key.index, 1);
        assert_ne!(elements[0].id, elements[1].id);
    }

    #[test]
    fn test_repeated_after_slot_gets_distinct_keys() {
        let template = LayoutCatalog::builtin().get("duo").unwrap();
        let variant = Variant::new("twice")
            .with_decoration(Placement::AfterSlot(1), LineRef::Themed)
            .with_decoration(Placement::AfterSlot(1), LineRef::style("dashed"));
        let theme = ThemeCatalog::builtin().resolve("classic");
        let lines = LineStyleCatalog::builtin();
        let geometry = CanvasGeometry::default();

        let first = resolve_decorations(template, &variant, theme, &[], lines, &geometry);
        assert_eq!(first[0].key.index, 1);
        assert_eq!(first[1].key.index, 3);
        assert_ne!(first[0].key, first[1].key);
        assert_ne!(first[0].id, first[1].id);

        let mut edited = first.clone();
        edited[1].nudge(0.0, 12.0);
        let second = resolve_decorations(template, &variant, theme, &edited, lines, &geometry);
        assert_eq!(second[0].id, first[0].id);
        assert_eq!(second[1].id, first[1].id);
        assert!(second[0].adjustment.is_zero());
        assert_eq!(second[1].adjustment.dy, 12.0);
    }

    #[test]
    fn test_right_aligned_title_separator() {
        let g = CanvasGeometry::default();
        let elements = resolve("trio", "feature", "classic", &[]);
        let title = &elements[0].frame;
        assert_eq!(title.width, 480.0);
        assert_eq!(title.x + title.width, g.width - g.padding);
        // classic-solid is 2 thick, centered on the baseline.
        assert_eq!(title.y, 131.0);
    }

    #[test]
    fn test_slot_separator_rows() {
        // trio rows: slot-1|slot-2 then slot-1|slot-3; slot-1 ends on the second row.
        let elements = resolve("trio", "stacked", "classic", &[]);
        let after_slot_1 = &elements[1];
        assert_eq!(after_slot_1.key.placement, Placement::AfterSlot(1));
        assert_eq!(after_slot_1.key.index, 1);
        // dashed tile height 2: baseline 716, y 715.
        assert_eq!(after_slot_1.frame.y, 715.0);
        assert_eq!(after_slot_1.frame.width, 960.0);
        assert_eq!(after_slot_1.frame.x, 120.0);
    }

    #[test]
    fn test_themed_line_and_colors() {
        let elements = resolve("trio", "feature", "midnight", &[]);
        assert_eq!(elements[0].line_style, "midnight-stars");
        assert_eq!(elements[0].color, "#7dd3fc");
        assert_eq!(elements[0].frame.height, 8.0);

        let chalk = resolve("single", "classic", "chalkboard", &[]);
        assert_eq!(chalk[0].line_style, "chalk-dash");
        assert_eq!(chalk[0].color, "#f5f1e6");
    }

    #[test]
    fn test_reapplication_is_idempotent() {
        let first = resolve("quad", "headline", "sunrise", &[]);
        let second = resolve("quad", "headline", "sunrise", &first);
        assert_eq!(first, second);
    }

    #[test]
    fn test_manual_tweaks_survive_reapplication() {
        let mut first = resolve("trio", "feature", "classic", &[]);
        first[0].nudge(10.0, -4.0);
        first[0].resize(40.0);
        first[1].recolor("#ff0000");

        let second = resolve("trio", "feature", "midnight", &first);
        assert_eq!(second[0].id, first[0].id);
        assert_eq!(second[0].adjustment, first[0].adjustment);
        assert_eq!(second[0].frame.x, second[0].base.x + 10.0);
        assert_eq!(second[0].frame.width, second[0].base.width + 40.0);
        assert_eq!(second[1].color, "#ff0000");
        assert!(second[1].color_customized);
        // Not customized: follows the new theme.
        assert_eq!(second[2].color, "#7dd3fc");
    }

    #[test]
    fn test_fixed_color_style_drops_user_color() {
        let mut first = resolve("single", "classic", "chalkboard", &[]);
        assert_eq!(first[0].line_style, "chalk-dash");
        let fixed = first[0].color.clone();
        first[0].recolor("#ff0000");

        let second = resolve("single", "classic", "chalkboard", &first);
        assert_eq!(second[0].id, first[0].id);
        assert_eq!(second[0].color, fixed);
        assert!(!second[0].color_customized);
    }

    #[test]
    fn test_reset_adjustment_restores_base() {
        let mut elements = resolve("single", "classic", "classic", &[]);
        let e = &mut elements[0];
        e.nudge(5.0, 5.0);
        e.resize(-10_000.0);
        assert_eq!(e.frame.width, MIN_VISIBLE_WIDTH);
        e.reset_adjustment();
        assert_eq!(e.frame, e.base);
        assert!(e.adjustment.is_zero());
    }

    #[test]
    fn test_element_serde_uses_string_key() {
        let elements = resolve("single", "classic", "classic", &[]);
        let json = serde_json::to_value(&elements[0]).unwrap();
        assert_eq!(json["key"], "single:classic:after-title:0");
        assert_eq!(json["system_owned"], true);
        let back: DecorativeElement = serde_json::from_value(json).unwrap();
        assert_eq!(back, elements[0]);
    }
}
