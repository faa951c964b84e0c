//! Accessory sets scored against composed outfits

use crate::catalog::item::TagSet;
use serde::Deserialize;

/// One piece of an accessory set
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccessoryItem {
    /// Display name
    pub name: String,
    /// Picture reference
    pub asset: String,
    /// Where the renderer places the piece
    pub position: String,
}

/// Bundle of complementary items with its own tags
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccessorySet {
    /// Stable identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Aesthetic tags matched against the outfit's styles
    pub styles: TagSet,
    /// Color tags matched against the outfit's palette
    pub colors: TagSet,
    /// Pieces in render order
    pub items: Vec<AccessoryItem>,
}

impl AccessorySet {
    /// Create an untagged, empty set
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
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
}

/// Accessory piece as stored in the pairings file
#[derive(Clone, Debug, Default, Deserialize)]
pub struct AccessoryItemRecord {
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Picture reference
    #[serde(default, alias = "asset")]
    pub file: String,
    /// Placement marker
    #[serde(default)]
    pub position: Option<String>,
}

/// Accessory set as stored in the pairings file
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessoryRecord {
    /// Stable identifier
    pub id: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Style tags
    #[serde(default, alias = "styles")]
    pub style_hints: Option<Vec<String>>,
    /// Color tags
    #[serde(default, alias = "colors")]
    pub color_hints: Option<Vec<String>>,
    /// Pieces of the set
    #[serde(default)]
    pub items: Vec<AccessoryItemRecord>,
}

impl From<AccessoryRecord> for AccessorySet {
    fn from(record: AccessoryRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            styles: record.style_hints.unwrap_or_default().into_iter().collect(),
            colors: TagSet::colors(record.color_hints.unwrap_or_default()),
            items: record
                .items
                .into_iter()
                .map(|piece| AccessoryItem {
                    name: piece.name,
                    asset: piece.file,
                    position: piece.position.unwrap_or_default(),
                })
                .collect(),
        }
    }
}
