//! Scores the accessory catalog against a composed outfit

use crate::{
    algorithm::{constraints::Outfit, cycler::Direction, random::Mulberry32, selection},
    catalog::accessory::AccessorySet,
    io::configuration::{COLOR_MATCH_SCORE, FLOOR_SCORE, PAIRING_SHORTLIST, STYLE_MATCH_SCORE},
};

/// Accessory set with its compatibility score
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoredPairing<'a> {
    /// The scored set
    pub set: &'a AccessorySet,
    /// Accumulated score, never below `FLOOR_SCORE`
    pub score: u32,
}

/// Score every set against the outfit, best first
///
/// Ties keep catalog order.
pub fn score_pairings<'a>(outfit: &Outfit<'_>, catalog: &'a [AccessorySet]) -> Vec<ScoredPairing<'a>> {
    let styles = outfit.style_tags();
    let palette = outfit.palette();

    let mut scored: Vec<_> = catalog
        .iter()
        .map(|set| {
            let style_hits = set
                .styles
                .iter()
                .filter(|tag| styles.contains(tag.as_str()))
                .count() as u32;
            let color_hits = set
                .colors
                .iter()
                .filter(|tag| palette.contains(tag.as_str()))
                .count() as u32;
            let score = style_hits * STYLE_MATCH_SCORE + color_hits * COLOR_MATCH_SCORE;

            ScoredPairing {
                set,
                score: if score == 0 { FLOOR_SCORE } else { score },
            }
        })
        .collect();

    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored
}

/// Draw one set uniformly from the best-scoring shortlist
pub fn choose_pairing<'a>(
    outfit: &Outfit<'_>,
    catalog: &'a [AccessorySet],
    rng: &mut Mulberry32,
) -> Option<&'a AccessorySet> {
    let scored = score_pairings(outfit, catalog);
    let shortlist = scored.get(..PAIRING_SHORTLIST.min(scored.len()))?;
    let chosen = selection::pick_deterministic(shortlist, rng)?;

    tracing::debug!(
        id = %chosen.set.id,
        score = chosen.score,
        shortlist = shortlist.len(),
        "chose accessory pairing"
    );
    Some(chosen.set)
}

/// Neighbor of the current set in catalog order, wrapping around
///
/// An unknown or missing current set counts as the first one, so a forward
/// step lands on the second set and a backward step on the last.
pub fn cycle_pairing<'a>(
    catalog: &'a [AccessorySet],
    current_id: Option<&str>,
    direction: Direction,
) -> Option<&'a AccessorySet> {
    let current = current_id
        .and_then(|id| catalog.iter().position(|set| set.id == id))
        .unwrap_or(0);
    catalog.get(direction.step_from(current, catalog.len()))
}
