//! Layout template types.
//!
//! A [`LayoutTemplate`] is a grid of regions plus one or more [`Variant`]s.
//! Variants share the template's grid and differ in sizing directives,
//! alignment hints, decorations and the relative size of each slot.
//!
//! ```yaml
//! id: duo
//! name: Duo
//! slots: 2
//! areas:
//!   - title title
//!   - date date
//!   - slot-1 slot-2
//! variants:
//!   - name: balanced
//!     columns: [1fr, 1fr]
//!     decorations:
//!       - { placement: after-title, line: themed }
//!       - { placement: between-slots, line: hairline }
//!     targets: [800, 800]
//! ```

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use quire_style::Align;
use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::grid::{GridAreas, Region};

/// Where a decoration sits relative to the document structure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Placement {
    AfterTitle,
    AfterDate,
    BeforeSlots,
    BetweenSlots,
    AfterSlots,
    /// After the grid row holding slot K (1-based).
    AfterSlot(usize),
}

impl Placement {
    /// True for placements positioned relative to the slot rows.
    pub fn is_slot_separator(&self) -> bool {
        !matches!(self, Placement::AfterTitle | Placement::AfterDate)
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Placement::AfterTitle => f.write_str("after-title"),
            Placement::AfterDate => f.write_str("after-date"),
            Placement::BeforeSlots => f.write_str("before-slots"),
            Placement::BetweenSlots => f.write_str("between-slots"),
            Placement::AfterSlots => f.write_str("after-slots"),
            Placement::AfterSlot(k) => write!(f, "after-slot-{}", k),
        }
    }
}

impl FromStr for Placement {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "after-title" => Ok(Placement::AfterTitle),
            "after-date" => Ok(Placement::AfterDate),
            "before-slots" => Ok(Placement::BeforeSlots),
            "between-slots" => Ok(Placement::BetweenSlots),
            "after-slots" => Ok(Placement::AfterSlots),
            _ => s
                .strip_prefix("after-slot-")
                .and_then(|k| k.parse::<usize>().ok())
                .filter(|k| *k >= 1)
                .map(Placement::AfterSlot)
                .ok_or_else(|| format!("Invalid placement: '{}'.", s)),
        }
    }
}

impl TryFrom<String> for Placement {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Placement> for String {
    fn from(p: Placement) -> Self {
        p.to_string()
    }
}

/// Reference to a line style: a concrete catalog id or the `themed` sentinel.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LineRef {
    /// Resolved against the active theme at application time.
    #[default]
    Themed,
    Style(String),
}

impl LineRef {
    pub const THEMED: &'static str = "themed";

    pub fn style(id: impl Into<String>) -> Self {
        LineRef::Style(id.into())
    }
}

impl fmt::Display for LineRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineRef::Themed => f.write_str(Self::THEMED),
            LineRef::Style(id) => f.write_str(id),
        }
    }
}

impl From<String> for LineRef {
    fn from(s: String) -> Self {
        if s == Self::THEMED {
            LineRef::Themed
        } else {
            LineRef::Style(s)
        }
    }
}

impl From<LineRef> for String {
    fn from(r: LineRef) -> Self {
        r.to_string()
    }
}

/// One decoration requested by a variant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecorationDescriptor {
    pub placement: Placement,
    #[serde(default)]
    pub line: LineRef,
}

impl DecorationDescriptor {
    pub fn new(placement: Placement, line: LineRef) -> Self {
        Self { placement, line }
    }
}

/// A parameterization of a template.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    pub name: String,
    /// Column sizing directives, e.g. `1fr`, `2fr`, `320px`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub columns: Vec<String>,
    /// Row sizing directives.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rows: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_align: Option<Align>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_align: Option<Align>,
    #[serde(default)]
    pub decorations: Vec<DecorationDescriptor>,
    /// Relative size of each slot, indexed by slot number - 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<u32>>,
}

impl Variant {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
            rows: Vec::new(),
            title_align: None,
            date_align: None,
            decorations: Vec::new(),
            targets: None,
        }
    }

    pub fn with_decoration(mut self, placement: Placement, line: LineRef) -> Self {
        self.decorations.push(DecorationDescriptor::new(placement, line));
        self
    }

    pub fn with_targets(mut self, targets: Vec<u32>) -> Self {
        self.targets = Some(targets);
        self
    }

    pub fn with_title_align(mut self, align: Align) -> Self {
        self.title_align = Some(align);
        self
    }

    pub fn with_date_align(mut self, align: Align) -> Self {
        self.date_align = Some(align);
        self
    }
}

/// Separator between the fields of a decoration key.
pub const KEY_SEPARATOR: char = ':';

/// A structural grid template.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutTemplate {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Number of content slots.
    pub slots: usize,
    pub areas: GridAreas,
    pub variants: Vec<Variant>,
}

impl LayoutTemplate {
    /// Looks up a variant by exact name.
    pub fn variant(&self, name: &str) -> Option<&Variant> {
        self.variants.iter().find(|v| v.name == name)
    }

    /// Looks up a variant, falling back to the first one on a miss.
    ///
    /// `None` only for a template without variants, which validation rejects.
    pub fn resolve_variant(&self, name: &str) -> Option<&Variant> {
        if let Some(variant) = self.variant(name) {
            return Some(variant);
        }
        let fallback = self.variants.first();
        if let Some(f) = fallback {
            tracing::debug!(
                template = %self.id,
                requested = name,
                fallback = %f.name,
                "unknown variant"
            );
        }
        fallback
    }

    /// Checks the structural rules every catalog template must satisfy.
    ///
    /// - slots 1..=N each appear exactly once, as a rectangle
    /// - `title` and `date`, when present, are rectangles
    /// - id and variant names are non-empty and contain no `:`
    /// - at least one variant, names unique
    /// - targets, when given, have exactly N entries
    /// - `after-slot-K` has 1 ≤ K ≤ N and appears at most once per variant
    pub fn validate(&self) -> Result<(), LayoutError> {
        let fail = |message: String| LayoutError::InvalidTemplate {
            template: self.id.clone(),
            message,
        };

        if self.id.is_empty() || self.id.contains(KEY_SEPARATOR) {
            return Err(fail(format!(
                "template ids must be non-empty and free of '{}'",
                KEY_SEPARATOR
            )));
        }

        if self.slots == 0 {
            return Err(fail("a template needs at least one slot".to_string()));
        }

        let present = self.areas.slots();
        let expected: std::collections::BTreeSet<usize> = (1..=self.slots).collect();
        if present != expected {
            return Err(fail(format!(
                "grid declares slots {:?}, expected 1..={}",
                present, self.slots
            )));
        }

        let mut regions: Vec<Region> = (1..=self.slots).map(Region::Slot).collect();
        regions.extend([Region::Title, Region::Date]);
        for region in regions {
            if self.areas.bounds(region).is_some() && !self.areas.is_rectangular(region) {
                return Err(fail(format!("region '{}' is not a rectangle", region)));
            }
        }

        if self.variants.is_empty() {
            return Err(fail("a template needs at least one variant".to_string()));
        }

        let mut names = HashSet::new();
        for variant in &self.variants {
            if variant.name.is_empty() || variant.name.contains(KEY_SEPARATOR) {
                return Err(fail(format!(
                    "variant name '{}' must be non-empty and free of '{}'",
                    variant.name, KEY_SEPARATOR
                )));
            }
            if !names.insert(variant.name.as_str()) {
                return Err(fail(format!("duplicate variant '{}'", variant.name)));
            }

            if let Some(targets) = &variant.targets {
                if targets.len() != self.slots {
                    return Err(fail(format!(
                        "variant '{}' has {} targets for {} slots",
                        variant.name,
                        targets.len(),
                        self.slots
                    )));
                }
            }

            let mut after_slots = HashSet::new();
            for descriptor in &variant.decorations {
                if let Placement::AfterSlot(k) = descriptor.placement {
                    if k > self.slots {
                        return Err(fail(format!(
                            "variant '{}' places a decoration after slot {} of {}",
                            variant.name, k, self.slots
                        )));
                    }
                    if !after_slots.insert(k) {
                        return Err(fail(format!(
                            "variant '{}' repeats after-slot-{}",
                            variant.name, k
                        )));
                    }
                }
            }
        }

        Ok(())
    }
}
