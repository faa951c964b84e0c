//! Catalog items, outfit slots and tag normalization at the manifest boundary

use crate::io::error::{ClosetError, Result, invalid_parameter, invalid_record};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::collections::btree_set;
use std::fmt;
use std::str::FromStr;

/// Named role an item fills in an outfit
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    /// Innermost top layer (tees, polos, crewnecks)
    TopBase,
    /// Shirt or mid layer worn over the base
    TopOvershirt,
    /// Jacket or coat
    Outerwear,
    /// Trousers, jeans, shorts
    Bottom,
    /// Footwear
    Shoes,
}

impl Slot {
    /// Every slot in display order
    pub const ALL: [Self; 5] = [
        Self::TopBase,
        Self::TopOvershirt,
        Self::Outerwear,
        Self::Bottom,
        Self::Shoes,
    ];

    /// Wire name of the slot
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TopBase => "top_base",
            Self::TopOvershirt => "top_overshirt",
            Self::Outerwear => "outerwear",
            Self::Bottom => "bottom",
            Self::Shoes => "shoes",
        }
    }

    /// Slots that must be filled for any outfit to exist
    pub const fn is_required(self) -> bool {
        matches!(self, Self::TopBase | Self::Bottom | Self::Shoes)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Slot {
    type Err = ClosetError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|slot| slot.as_str() == s)
            .ok_or_else(|| invalid_parameter("slot", &s, &"not a known outfit slot"))
    }
}

/// Canonical set of lowercase tags
///
/// Manifests deliver tags as loosely shaped lists; everything is folded into
/// this ordered set once, so core logic never inspects the input container.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TagSet(BTreeSet<String>);

impl TagSet {
    /// Build a color tag set, folding the `gray` spelling into `grey`
    pub fn colors<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        tags.into_iter()
            .map(|tag| {
                let tag = tag.as_ref().trim().to_lowercase();
                if tag == "gray" { "grey".to_string() } else { tag }
            })
            .collect()
    }

    /// Whether the tag is present
    pub fn contains(&self, tag: &str) -> bool {
        self.0.contains(tag)
    }

    /// Whether no tags are present
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of tags
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate tags in sorted order
    pub fn iter(&self) -> btree_set::Iter<'_, String> {
        self.0.iter()
    }
}

impl<S: AsRef<str>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|tag| tag.as_ref().trim().to_lowercase())
                .filter(|tag| !tag.is_empty())
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a TagSet {
    type Item = &'a String;
    type IntoIter = btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Immutable clothing item owned by the catalog
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogItem {
    /// Stable identifier
    pub id: String,
    /// Display name, also the input of base-top classification
    pub name: String,
    /// Slot the item can fill
    pub slot: Slot,
    /// Color and material tags
    pub colors: TagSet,
    /// Aesthetic tags
    pub styles: TagSet,
    /// Opaque reference to the item's picture
    pub asset: String,
}

impl CatalogItem {
    /// Create an untagged item
    pub fn new(id: impl Into<String>, name: impl Into<String>, slot: Slot) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            slot,
            colors: TagSet::default(),
            styles: TagSet::default(),
            asset: String::new(),
        }
    }

    /// Replace the color tags
    #[must_use]
    pub fn with_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.colors = TagSet::colors(colors);
        self
    }

    /// Replace the style tags
    #[must_use]
    pub fn with_styles<I, S>(mut self, styles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.styles = styles.into_iter().collect();
        self
    }

    /// Replace the asset reference
    #[must_use]
    pub fn with_asset(mut self, asset: impl Into<String>) -> Self {
        self.asset = asset.into();
        self
    }
}

/// Item record as written by the manifest builder or an upload collaborator
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestRecord {
    /// Stable identifier
    #[serde(default)]
    pub id: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Coarse category (`top`, `jacket`, `pants`, ...) or an exact slot name
    #[serde(default)]
    pub category: String,
    /// `base` or `overshirt` when the category is `top`
    #[serde(default)]
    pub top_layer: Option<String>,
    /// Picture reference
    #[serde(default, alias = "asset")]
    pub file: Option<String>,
    /// Color tags
    #[serde(default, alias = "colors")]
    pub color_hints: Option<Vec<String>>,
    /// Style tags
    #[serde(default, alias = "styles")]
    pub style_hints: Option<Vec<String>>,
}

impl ManifestRecord {
    /// Map the record's category onto an outfit slot
    pub fn slot(&self) -> Option<Slot> {
        let category = self.category.trim().to_lowercase();
        let layer = self
            .top_layer
            .as_deref()
            .map(|layer| layer.trim().to_lowercase());

        match category.as_str() {
            "top" => match layer.as_deref() {
                Some("base") => Some(Slot::TopBase),
                Some("overshirt") => Some(Slot::TopOvershirt),
                _ => None,
            },
            "jacket" => Some(Slot::Outerwear),
            "pants" => Some(Slot::Bottom),
            exact => exact.parse().ok(),
        }
    }

    /// Normalize into a catalog item
    ///
    /// # Errors
    ///
    /// Returns an error if the id is blank or the category maps to no slot
    pub fn into_item(self) -> Result<CatalogItem> {
        if self.id.trim().is_empty() {
            return Err(invalid_record(&self.name, &"missing id"));
        }
        let Some(slot) = self.slot() else {
            return Err(invalid_record(
                &self.id,
                &format!("unrecognized category '{}'", self.category),
            ));
        };

        Ok(CatalogItem {
            id: self.id,
            name: self.name,
            slot,
            colors: TagSet::colors(self.color_hints.unwrap_or_default()),
            styles: self.style_hints.unwrap_or_default().into_iter().collect(),
            asset: self.file.unwrap_or_default(),
        })
    }
}

/// Read-only item collection handed to the core
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    items: Vec<CatalogItem>,
    skipped: usize,
}

impl Catalog {
    /// Wrap already normalized items
    pub const fn new(items: Vec<CatalogItem>) -> Self {
        Self { items, skipped: 0 }
    }

    /// Normalize manifest records, skipping any that cannot be placed in a slot
    pub fn from_records(records: Vec<ManifestRecord>) -> Self {
        let mut items = Vec::with_capacity(records.len());
        let mut skipped = 0;

        for record in records {
            match record.into_item() {
                Ok(item) => items.push(item),
                Err(err) => {
                    tracing::warn!("skipping catalog record: {err}");
                    skipped += 1;
                }
            }
        }

        Self { items, skipped }
    }

    /// All items in catalog order
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Look up an item by id
    pub fn get(&self, id: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Number of records dropped during normalization
    pub const fn skipped(&self) -> usize {
        self.skipped
    }

    /// Number of usable items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog holds no usable items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
