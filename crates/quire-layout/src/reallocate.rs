//! Content reallocation.
//!
//! When a template changes, existing content blocks are permuted so that the
//! heaviest content lands in the largest slots. Blocks are only reordered,
//! never created, dropped or edited.
//!
//! The assignment is greedy: slots are visited from the largest target down
//! and each takes the unassigned block whose weight is closest to its target.
//!
//! ```rust
//! use quire_layout::plan_slots;
//!
//! // Slot 0 is large, slots 1 and 2 are small.
//! let plan = plan_slots(&[610, 1195, 605], &[1200, 600, 600]).unwrap();
//! assert_eq!(plan, vec![1, 2, 0]);
//! ```

use serde::{Deserialize, Serialize};

/// Anything with a content weight.
pub trait Weighted {
    fn weight(&self) -> usize;
}

/// A titled block of text occupying one slot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBlock {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
}

impl ContentBlock {
    pub fn new(id: impl Into<String>, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            body: body.into(),
        }
    }
}

impl Weighted for ContentBlock {
    /// Character count of title and body.
    fn weight(&self) -> usize {
        self.title.chars().count() + self.body.chars().count()
    }
}

/// Plans which item goes in which slot.
///
/// Returns `plan` where `plan[slot]` is the index of the item for that slot,
/// or `None` when the counts differ and the order should be left alone.
pub fn plan_slots(weights: &[usize], targets: &[u32]) -> Option<Vec<usize>> {
    if weights.len() != targets.len() {
        tracing::debug!(
            items = weights.len(),
            slots = targets.len(),
            "slot count mismatch, keeping order"
        );
        return None;
    }

    let mut slots: Vec<usize> = (0..targets.len()).collect();
    // Stable: equal targets keep slot order.
    slots.sort_by(|a, b| targets[*b].cmp(&targets[*a]));

    let mut taken = vec![false; weights.len()];
    let mut plan: Vec<Option<usize>> = vec![None; targets.len()];

    for slot in slots {
        let target = targets[slot] as usize;
        let best = weights
            .iter()
            .enumerate()
            .filter(|(i, _)| !taken[*i])
            .min_by_key(|(_, w)| w.abs_diff(target))
            .map(|(i, _)| i);
        if let Some(i) = best {
            taken[i] = true;
            plan[slot] = Some(i);
        }
    }

    // Anything still open takes the remaining items in ascending order.
    let mut leftovers = (0..weights.len()).filter(|i| !taken[*i]);
    Some(
        plan.into_iter()
            .map(|p| p.or_else(|| leftovers.next()).unwrap_or_default())
            .collect(),
    )
}

/// Reorders `items` to fit `targets`. Mismatched counts return the input order.
pub fn reallocate<T: Weighted + Clone>(items: &[T], targets: &[u32]) -> Vec<T> {
    let weights: Vec<usize> = items.iter().map(Weighted::weight).collect();
    match plan_slots(&weights, targets) {
        Some(plan) => plan.into_iter().map(|i| items[i].clone()).collect(),
        None => items.to_vec(),
    }
}

/// [`reallocate`] for content blocks.
pub fn reallocate_content(blocks: &[ContentBlock], targets: &[u32]) -> Vec<ContentBlock> {
    reallocate(blocks, targets)
}
