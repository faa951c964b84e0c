//! Seeded picks with a soft guard against repeating the previous choice

use crate::{
    algorithm::{constraints::Outfit, random::Mulberry32},
    catalog::item::{CatalogItem, Slot},
    io::configuration::NO_REPEAT_MAX_DRAWS,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-slot id of the previous pick
///
/// Only ever a hint against immediate repeats, never a constraint.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LastSelection(BTreeMap<Slot, String>);

impl LastSelection {
    /// Record every filled slot of an outfit
    pub fn from_outfit(outfit: &Outfit<'_>) -> Self {
        Self(
            outfit
                .items()
                .map(|(slot, item)| (slot, item.id.clone()))
                .collect(),
        )
    }

    /// Id previously chosen for a slot
    pub fn get(&self, slot: Slot) -> Option<&str> {
        self.0.get(&slot).map(String::as_str)
    }

    /// Remember the id chosen for a slot
    pub fn set(&mut self, slot: Slot, id: impl Into<String>) {
        self.0.insert(slot, id.into());
    }

    /// Whether nothing has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Pick an element at `floor(draw * len)`
///
/// Consumes exactly one draw for a non-empty pool and none otherwise.
pub fn pick_deterministic<'p, T>(pool: &'p [T], rng: &mut Mulberry32) -> Option<&'p T> {
    if pool.is_empty() {
        return None;
    }
    let index = (rng.next_f64() * pool.len() as f64) as usize;
    pool.get(index)
}

/// Pick an item, steering away from the id chosen last time
///
/// Tries up to `NO_REPEAT_MAX_DRAWS` seeded draws, then falls back to the
/// first item with a different id, then to the first item.
pub fn pick_no_repeat<'c>(
    pool: &[&'c CatalogItem],
    rng: &mut Mulberry32,
    last_id: Option<&str>,
) -> Option<&'c CatalogItem> {
    match pool {
        [] => return None,
        [only] => return Some(*only),
        _ => {}
    }

    let differs = |item: &CatalogItem| last_id.is_none_or(|last| item.id != last);

    for _ in 0..pool.len().min(NO_REPEAT_MAX_DRAWS) {
        if let Some(&candidate) = pick_deterministic(pool, rng) {
            if differs(candidate) {
                return Some(candidate);
            }
        }
    }

    pool.iter()
        .copied()
        .find(|item| differs(item))
        .or_else(|| pool.first().copied())
}
