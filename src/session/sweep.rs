//! Composes a run of consecutive seeds and tallies the outcomes

use crate::{
    algorithm::{
        composer::{ComposeOptions, Outcome, compose},
        constraints::is_valid,
        random::Mulberry32,
        selection::LastSelection,
    },
    catalog::{item::Catalog, partition::partition},
    io::error::{Result, invalid_parameter},
};
use serde::Serialize;
use std::collections::BTreeSet;

/// Aggregate of one seed sweep
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SweepSummary {
    /// First seed composed
    pub start_seed: u32,
    /// Number of seeds composed
    pub seeds: usize,
    /// Outfits produced by a regular pass
    pub composed: usize,
    /// Outfits produced by the relaxed fallback
    pub relaxed: usize,
    /// Outfits returned with outerwear dropped
    pub outerwear_dropped: usize,
    /// Returned outfits that break a rule
    pub invalid: usize,
    /// Distinct outfits seen across the sweep
    pub distinct: usize,
    /// Slot-filling passes summed over every seed
    pub total_attempts: usize,
}

/// Compose `count` consecutive seeds starting at `start_seed`
///
/// Selection memory carries over from one seed to the next the way it does
/// across repeated remixes. `on_step` runs after every seed.
///
/// # Errors
///
/// Returns `InvalidParameter` for a zero count and `InsufficientCatalog` if
/// a required slot has no items
pub fn run_sweep<F>(
    catalog: &Catalog,
    start_seed: u32,
    count: usize,
    options: ComposeOptions,
    mut on_step: F,
) -> Result<SweepSummary>
where
    F: FnMut(usize),
{
    if count == 0 {
        return Err(invalid_parameter("count", &count, &"must be at least 1"));
    }

    let pools = partition(catalog.items());
    pools.require_core_slots()?;

    let mut summary = SweepSummary {
        start_seed,
        seeds: count,
        ..SweepSummary::default()
    };
    let mut last = LastSelection::default();
    let mut seen = BTreeSet::new();
    let mut seed = start_seed;

    for step in 0..count {
        let mut rng = Mulberry32::new(seed);
        let composition = compose(&pools, &last, options, &mut rng)?;

        match composition.outcome {
            Outcome::Composed => summary.composed += 1,
            Outcome::Relaxed => summary.relaxed += 1,
            Outcome::OuterwearDropped => summary.outerwear_dropped += 1,
        }
        if !is_valid(&composition.outfit) {
            summary.invalid += 1;
        }
        summary.total_attempts += composition.attempts;

        last = LastSelection::from_outfit(&composition.outfit);
        seen.insert(last.clone());
        seed = seed.wrapping_add(1);
        on_step(step + 1);
    }

    summary.distinct = seen.len();
    tracing::info!(
        seeds = summary.seeds,
        composed = summary.composed,
        relaxed = summary.relaxed,
        outerwear_dropped = summary.outerwear_dropped,
        distinct = summary.distinct,
        "seed sweep finished"
    );
    Ok(summary)
}
