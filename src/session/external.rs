//! Boundary for outfits produced outside the composer
//!
//! An external recommender hands back slot ids only. They are resolved
//! against the live catalog before anything downstream sees them, and any
//! failure falls back to the seeded composer.

use crate::{
    algorithm::{
        composer::{ComposeOptions, Composition, compose},
        constraints::{Outfit, Violation, violations},
        random::Mulberry32,
        selection::LastSelection,
    },
    catalog::{
        item::{Catalog, Slot},
        partition::Pools,
    },
    io::error::{ClosetError, Result},
};
use serde::{Deserialize, Deserializer, Serialize};

/// Id-only outfit as returned by an external recommender
///
/// Blank ids in optional slots mean the slot is empty. Unknown fields are
/// ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotSelection {
    /// Base top id
    pub top_base: String,
    /// Overshirt id
    #[serde(default, deserialize_with = "blank_as_none")]
    pub top_overshirt: Option<String>,
    /// Outerwear id
    #[serde(default, deserialize_with = "blank_as_none")]
    pub outerwear: Option<String>,
    /// Bottom id
    pub bottom: String,
    /// Shoes id
    pub shoes: String,
}

fn blank_as_none<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let id = Option::<String>::deserialize(deserializer)?;
    Ok(id.filter(|id| !id.trim().is_empty()))
}

impl SlotSelection {
    /// Id supplied for a slot
    pub fn id(&self, slot: Slot) -> Option<&str> {
        match slot {
            Slot::TopBase => Some(self.top_base.as_str()),
            Slot::TopOvershirt => self.top_overshirt.as_deref(),
            Slot::Outerwear => self.outerwear.as_deref(),
            Slot::Bottom => Some(self.bottom.as_str()),
            Slot::Shoes => Some(self.shoes.as_str()),
        }
    }
}

/// External selection mapped onto catalog items
#[derive(Clone, Debug)]
pub struct ResolvedSelection<'c> {
    /// Items named by the selection
    pub outfit: Outfit<'c>,
    /// Rules the selection breaks; reported, not enforced
    pub violations: Vec<Violation>,
}

impl ResolvedSelection<'_> {
    /// Whether the selection satisfies every rule
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Map every id of a selection onto the catalog
///
/// # Errors
///
/// Returns `UnknownItem` for an id missing from the catalog and
/// `SlotMismatch` for an id whose item belongs to another slot
pub fn resolve_selection<'c>(
    selection: &SlotSelection,
    catalog: &'c Catalog,
) -> Result<ResolvedSelection<'c>> {
    let mut outfit = Outfit::default();

    for slot in Slot::ALL {
        let Some(id) = selection.id(slot) else {
            continue;
        };
        let item = catalog.get(id).ok_or_else(|| ClosetError::UnknownItem {
            slot,
            id: id.to_string(),
        })?;
        if item.slot != slot {
            return Err(ClosetError::SlotMismatch {
                slot,
                id: id.to_string(),
                actual: item.slot,
            });
        }
        outfit.set(slot, Some(item));
    }

    let violations = violations(&outfit);
    if !violations.is_empty() {
        tracing::debug!(count = violations.len(), "external selection breaks outfit rules");
    }

    Ok(ResolvedSelection { outfit, violations })
}

/// Where a final outfit came from
#[derive(Clone, Debug)]
pub enum Resolution<'c> {
    /// The external selection resolved cleanly
    External(ResolvedSelection<'c>),
    /// The composer stood in for a missing or unusable selection
    Composed(Composition<'c>),
}

impl<'c> Resolution<'c> {
    /// Outfit regardless of its producer
    pub const fn outfit(&self) -> &Outfit<'c> {
        match self {
            Self::External(resolved) => &resolved.outfit,
            Self::Composed(composition) => &composition.outfit,
        }
    }
}

/// Accept an external selection, or compose when it is absent or unresolvable
///
/// # Errors
///
/// Returns `InsufficientCatalog` when the composer has to step in and a
/// required slot has no items
pub fn resolve_or_compose<'c>(
    selection: Option<&SlotSelection>,
    catalog: &'c Catalog,
    pools: &Pools<'c>,
    last: &LastSelection,
    options: ComposeOptions,
    rng: &mut Mulberry32,
) -> Result<Resolution<'c>> {
    if let Some(selection) = selection {
        match resolve_selection(selection, catalog) {
            Ok(resolved) => return Ok(Resolution::External(resolved)),
            Err(err) => tracing::warn!("external selection rejected, composing instead: {err}"),
        }
    }

    compose(pools, last, options, rng).map(Resolution::Composed)
}
