//! Slot-filling composer with bounded retries and a relaxed fallback

use crate::{
    algorithm::{
        constraints::{Outfit, accepts, is_valid},
        random::Mulberry32,
        selection::{LastSelection, pick_no_repeat},
        style::{Style, narrow_to_style, resolve_target_style},
    },
    catalog::{item::Slot, partition::Pools},
    io::{
        configuration::{MAX_COMPOSE_ATTEMPTS, THROWAWAY_DRAWS_PER_RETRY},
        error::Result,
    },
};
use serde::Serialize;

/// Optional slots a composition should fill
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ComposeOptions {
    /// Fill the outerwear slot; a complete outfit then needs one
    pub include_outerwear: bool,
    /// Fill the overshirt slot
    pub include_overshirt: bool,
}

impl Default for ComposeOptions {
    fn default() -> Self {
        Self {
            include_outerwear: false,
            include_overshirt: true,
        }
    }
}

impl ComposeOptions {
    /// Slots in the order they are filled
    pub fn fill_order(self) -> Vec<Slot> {
        let mut order = vec![Slot::TopBase];
        if self.include_overshirt {
            order.push(Slot::TopOvershirt);
        }
        order.extend([Slot::Bottom, Slot::Shoes]);
        if self.include_outerwear {
            order.push(Slot::Outerwear);
        }
        order
    }
}

/// How the returned outfit was obtained
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// A slot-filling pass produced a complete valid outfit
    Composed,
    /// Assembled from the last pass and first pool items; still valid
    Relaxed,
    /// Best effort with outerwear removed; validity not guaranteed
    OuterwearDropped,
}

/// Result of one composition
#[derive(Clone, Copy, Debug)]
pub struct Composition<'c> {
    /// Chosen items
    pub outfit: Outfit<'c>,
    /// Target style the pools were narrowed to; cycling reuses it
    pub style: Style,
    /// Slot-filling passes performed
    pub attempts: usize,
    /// Whether and how the fallback path was taken
    pub outcome: Outcome,
}

/// Compose one outfit from the pools
///
/// Resolves the target style and narrows the pools to it once; every pass
/// and the fallback draw only from the narrowed pools. Runs a slot-filling
/// pass, and while the result is incomplete or breaks a rule, discards two
/// draws and runs a fresh pass, up to `MAX_COMPOSE_ATTEMPTS` more times.
/// After that the last pass is patched with first pool items; if that is
/// still invalid, outerwear is dropped and the outfit is returned as is.
///
/// # Errors
///
/// Returns `InsufficientCatalog` if a required slot has no items at all
pub fn compose<'c>(
    pools: &Pools<'c>,
    last: &LastSelection,
    options: ComposeOptions,
    rng: &mut Mulberry32,
) -> Result<Composition<'c>> {
    pools.require_core_slots()?;

    let style = resolve_target_style(pools, options.include_outerwear);
    let pools = &narrow_to_style(pools, style);
    let mut outfit = fill_pass(pools, last, options, rng);
    let mut attempts = 1;

    for _ in 0..MAX_COMPOSE_ATTEMPTS {
        if is_complete(&outfit, pools, options) && is_valid(&outfit) {
            tracing::debug!(attempts, %style, "composed outfit");
            return Ok(Composition {
                outfit,
                style,
                attempts,
                outcome: Outcome::Composed,
            });
        }
        rng.discard(THROWAWAY_DRAWS_PER_RETRY);
        outfit = fill_pass(pools, last, options, rng);
        attempts += 1;
    }

    let mut fallback = Outfit::default();
    for slot in options.fill_order() {
        fallback.set(slot, outfit.get(slot).or_else(|| pools.first_for(slot)));
    }

    if is_valid(&fallback) {
        tracing::debug!(attempts, %style, "composition settled on relaxed fallback");
        return Ok(Composition {
            outfit: fallback,
            style,
            attempts,
            outcome: Outcome::Relaxed,
        });
    }

    fallback.outerwear = None;
    tracing::warn!(attempts, %style, "no valid outfit found; returning best effort without outerwear");
    Ok(Composition {
        outfit: fallback,
        style,
        attempts,
        outcome: Outcome::OuterwearDropped,
    })
}

/// One pass over the fill order producing a fresh outfit
///
/// A slot whose acceptable candidates run out is still filled from its whole
/// (style-narrowed) pool; the outfit check after the pass rejects it.
fn fill_pass<'c>(
    pools: &Pools<'c>,
    last: &LastSelection,
    options: ComposeOptions,
    rng: &mut Mulberry32,
) -> Outfit<'c> {
    let mut outfit = Outfit::default();

    for slot in options.fill_order() {
        let pool = pools.candidates(slot);
        let acceptable: Vec<_> = pool
            .iter()
            .copied()
            .filter(|&item| accepts(&outfit, slot, item))
            .collect();

        let choice = pick_no_repeat(&acceptable, rng, last.get(slot))
            .or_else(|| pick_no_repeat(pool, rng, last.get(slot)));
        outfit.set(slot, choice);
    }

    outfit
}

/// Required slots filled, plus every optional slot that was asked for and can be
fn is_complete(outfit: &Outfit<'_>, pools: &Pools<'_>, options: ComposeOptions) -> bool {
    let required = Slot::ALL
        .into_iter()
        .filter(|slot| slot.is_required())
        .all(|slot| outfit.get(slot).is_some());
    let overshirt = !options.include_overshirt
        || pools.top_overshirt.is_empty()
        || outfit.top_overshirt.is_some();
    let outerwear = !options.include_outerwear || outfit.outerwear.is_some();

    required && overshirt && outerwear
}
