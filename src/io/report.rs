//! Serializable result shape handed to renderers and exporters

use crate::{
    algorithm::{
        composer::{Composition, Outcome},
        constraints::{Outfit, violations},
        style::Style,
    },
    catalog::{
        accessory::{AccessoryItem, AccessorySet},
        item::CatalogItem,
    },
    io::error::Result,
};
use serde::Serialize;
use std::io::Write;

/// Chosen item as the renderer needs it
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ItemReport {
    /// Item id
    pub id: String,
    /// Display name
    pub name: String,
    /// Picture reference
    pub asset: String,
}

impl From<&CatalogItem> for ItemReport {
    fn from(item: &CatalogItem) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            asset: item.asset.clone(),
        }
    }
}

/// One piece of the attached accessory set
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AccessoryPieceReport {
    /// Display name
    pub name: String,
    /// Picture reference
    pub asset: String,
    /// Placement marker
    pub position: String,
}

impl From<&AccessoryItem> for AccessoryPieceReport {
    fn from(piece: &AccessoryItem) -> Self {
        Self {
            name: piece.name.clone(),
            asset: piece.asset.clone(),
            position: piece.position.clone(),
        }
    }
}

/// Attached accessory set
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AccessoryReport {
    /// Set id
    pub id: String,
    /// Display name
    pub name: String,
    /// Pieces in render order
    pub items: Vec<AccessoryPieceReport>,
}

impl From<&AccessorySet> for AccessoryReport {
    fn from(set: &AccessorySet) -> Self {
        Self {
            id: set.id.clone(),
            name: set.name.clone(),
            items: set.items.iter().map(AccessoryPieceReport::from).collect(),
        }
    }
}

/// Outfit plus everything known about how it was produced
///
/// Every slot is always present, `null` when empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OutfitReport {
    /// Base top
    pub top_base: Option<ItemReport>,
    /// Overshirt
    pub top_overshirt: Option<ItemReport>,
    /// Outerwear
    pub outerwear: Option<ItemReport>,
    /// Bottom
    pub bottom: Option<ItemReport>,
    /// Shoes
    pub shoes: Option<ItemReport>,
    /// Whether every rule holds
    pub valid: bool,
    /// Descriptions of the broken rules
    pub violations: Vec<String>,
    /// Seed the outfit was composed with
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,
    /// Target style of the composition
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<Style>,
    /// How the composer arrived at the outfit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<Outcome>,
    /// Slot-filling passes used
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attempts: Option<usize>,
    /// Whether a cycling request changed the outfit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changed: Option<bool>,
    /// Attached accessory set
    pub accessory: Option<AccessoryReport>,
}

impl OutfitReport {
    /// Describe an outfit and check it against every rule
    pub fn new(outfit: &Outfit<'_>) -> Self {
        let broken = violations(outfit);
        let item = |chosen: Option<&CatalogItem>| chosen.map(ItemReport::from);

        Self {
            top_base: item(outfit.top_base),
            top_overshirt: item(outfit.top_overshirt),
            outerwear: item(outfit.outerwear),
            bottom: item(outfit.bottom),
            shoes: item(outfit.shoes),
            valid: broken.is_empty(),
            violations: broken.iter().map(ToString::to_string).collect(),
            seed: None,
            style: None,
            outcome: None,
            attempts: None,
            changed: None,
            accessory: None,
        }
    }

    /// Describe a composer result drawn with `seed`
    pub fn from_composition(composition: &Composition<'_>, seed: u32) -> Self {
        Self {
            seed: Some(seed),
            style: Some(composition.style),
            outcome: Some(composition.outcome),
            attempts: Some(composition.attempts),
            ..Self::new(&composition.outfit)
        }
    }

    /// Attach the accessory set, if any
    #[must_use]
    pub fn with_accessory(mut self, set: Option<&AccessorySet>) -> Self {
        self.accessory = set.map(AccessoryReport::from);
        self
    }

    /// Record whether a cycling request changed the outfit
    #[must_use]
    pub const fn with_changed(mut self, changed: bool) -> Self {
        self.changed = Some(changed);
        self
    }
}

/// Write a value as pretty JSON followed by a newline
///
/// # Errors
///
/// Returns an error if serialization or the write fails
pub fn write_json<W, T>(mut writer: W, value: &T) -> Result<()>
where
    W: Write,
    T: Serialize + ?Sized,
{
    serde_json::to_writer_pretty(&mut writer, value)?;
    writeln!(writer)?;
    Ok(())
}
