//! Per-slot substitution that keeps the whole outfit valid

use crate::{
    algorithm::{
        constraints::{Outfit, is_valid},
        selection::LastSelection,
    },
    catalog::{item::Slot, partition::Pools},
};

/// Way to step through a pool
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Next item, wrapping to the first
    Forward,
    /// Previous item, wrapping to the last
    Backward,
}

impl Direction {
    /// Index one step away from `index` in a circular sequence of `len`
    pub const fn step_from(self, index: usize, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        match self {
            Self::Forward => (index + 1) % len,
            Self::Backward => (index + len - 1) % len,
        }
    }
}

/// Outcome of a cycling request
#[derive(Clone, Debug)]
pub struct Cycled<'c> {
    /// Outfit after the request; unchanged when nothing validated
    pub outfit: Outfit<'c>,
    /// Selection memory with the cycled slot updated on success
    pub last_selection: LastSelection,
    /// Whether a substitute was accepted
    pub changed: bool,
}

/// Replace one slot's item with the next candidate that keeps the outfit valid
///
/// Walks the slot's pool circularly from the current item for at most twice
/// the pool length. Other slots are never touched. When no candidate
/// validates, the outfit comes back unchanged.
pub fn cycle_slot<'c>(
    outfit: &Outfit<'c>,
    pools: &Pools<'c>,
    slot: Slot,
    direction: Direction,
    last: &LastSelection,
) -> Cycled<'c> {
    let pool = pools.candidates(slot);
    let unchanged = Cycled {
        outfit: *outfit,
        last_selection: last.clone(),
        changed: false,
    };
    if pool.is_empty() {
        return unchanged;
    }

    let mut index = outfit
        .id(slot)
        .and_then(|id| pool.iter().position(|item| item.id == id))
        .unwrap_or(0);

    for _ in 0..pool.len() * 2 {
        index = direction.step_from(index, pool.len());
        let Some(&candidate) = pool.get(index) else {
            break;
        };
        let next = outfit.with(slot, candidate);
        if is_valid(&next) {
            let mut last_selection = last.clone();
            last_selection.set(slot, candidate.id.as_str());
            tracing::debug!(%slot, id = %candidate.id, "cycled slot");
            return Cycled {
                outfit: next,
                last_selection,
                changed: true,
            };
        }
    }

    tracing::debug!(%slot, "no valid substitute found");
    unchanged
}
