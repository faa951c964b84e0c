//! Splits a flat catalog into per-slot pools

use crate::catalog::item::{CatalogItem, Slot};
use crate::io::error::{ClosetError, Result};

/// Tokens marking a base top as crewneck-like
const CREWNECK_TOKENS: [&str; 2] = ["crewneck", "crew"];
/// Tokens marking a base top as tee-like
const TEE_TOKENS: [&str; 6] = ["tee", "tshirt", "polo", "henley", "tank", "wide"];

/// Refinement of the base-top slot
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BaseTopKind {
    /// Tees, polos, henleys and similar
    Tee,
    /// Crewneck sweaters and knits
    Crewneck,
}

/// Decides which refined base-top pool an item belongs to
///
/// Alternative tagging schemes plug in here without touching the composer.
pub trait BaseTopClassifier {
    /// Classify a base top, `None` when it fits neither refined pool
    fn classify(&self, item: &CatalogItem) -> Option<BaseTopKind>;
}

/// Default classifier working on tokens of the item name
///
/// Crewneck tokens win over tee tokens when both appear.
#[derive(Clone, Copy, Debug, Default)]
pub struct NameTokenClassifier;

impl BaseTopClassifier for NameTokenClassifier {
    fn classify(&self, item: &CatalogItem) -> Option<BaseTopKind> {
        let tokens = name_tokens(&item.name);
        let has_any = |vocabulary: &[&str]| {
            tokens
                .iter()
                .any(|token| vocabulary.contains(&token.as_str()))
        };

        if has_any(&CREWNECK_TOKENS) {
            Some(BaseTopKind::Crewneck)
        } else if has_any(&TEE_TOKENS) {
            Some(BaseTopKind::Tee)
        } else {
            None
        }
    }
}

/// Lowercase the name and split it on every run of non-alphanumeric characters
pub fn name_tokens(name: &str) -> Vec<String> {
    name.to_lowercase()
        .split(|c: char| !c.is_ascii_lowercase() && !c.is_ascii_digit())
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Catalog partitioned into slot pools, each kept in catalog order
#[derive(Clone, Debug, Default)]
pub struct Pools<'c> {
    /// Every base top, classified or not
    pub top_base: Vec<&'c CatalogItem>,
    /// Tee-like base tops
    pub top_base_tee: Vec<&'c CatalogItem>,
    /// Crewneck-like base tops
    pub top_base_crewneck: Vec<&'c CatalogItem>,
    /// Overshirts and mid layers
    pub top_overshirt: Vec<&'c CatalogItem>,
    /// Jackets and coats
    pub outerwear: Vec<&'c CatalogItem>,
    /// Bottoms
    pub bottom: Vec<&'c CatalogItem>,
    /// Footwear
    pub shoes: Vec<&'c CatalogItem>,
}

impl<'c> Pools<'c> {
    /// Pool the composer and cycler draw from for a slot
    ///
    /// Base tops are drawn from the tee-like refinement.
    pub fn candidates(&self, slot: Slot) -> &[&'c CatalogItem] {
        match slot {
            Slot::TopBase => &self.top_base_tee,
            Slot::TopOvershirt => &self.top_overshirt,
            Slot::Outerwear => &self.outerwear,
            Slot::Bottom => &self.bottom,
            Slot::Shoes => &self.shoes,
        }
    }

    /// First item usable for a slot when nothing better was chosen
    pub fn first_for(&self, slot: Slot) -> Option<&'c CatalogItem> {
        self.candidates(slot)
            .first()
            .or_else(|| match slot {
                Slot::TopBase => self.top_base.first(),
                _ => None,
            })
            .copied()
    }

    /// Ensure every required slot has at least one item
    ///
    /// # Errors
    ///
    /// Returns `InsufficientCatalog` naming the first empty required slot
    pub fn require_core_slots(&self) -> Result<()> {
        let empty = [
            (Slot::TopBase, self.top_base.is_empty()),
            (Slot::Bottom, self.bottom.is_empty()),
            (Slot::Shoes, self.shoes.is_empty()),
        ]
        .into_iter()
        .find_map(|(slot, is_empty)| is_empty.then_some(slot));

        match empty {
            Some(slot) => Err(ClosetError::InsufficientCatalog { slot }),
            None => Ok(()),
        }
    }
}

/// Partition items with the default name-token classifier
pub fn partition(items: &[CatalogItem]) -> Pools<'_> {
    partition_with(items, &NameTokenClassifier)
}

/// Partition items with a caller-supplied base-top classifier
pub fn partition_with<'c, C>(items: &'c [CatalogItem], classifier: &C) -> Pools<'c>
where
    C: BaseTopClassifier + ?Sized,
{
    let mut pools = Pools::default();

    for item in items {
        match item.slot {
            Slot::TopBase => {
                pools.top_base.push(item);
                match classifier.classify(item) {
                    Some(BaseTopKind::Crewneck) => pools.top_base_crewneck.push(item),
                    Some(BaseTopKind::Tee) => pools.top_base_tee.push(item),
                    None => {}
                }
            }
            Slot::TopOvershirt => pools.top_overshirt.push(item),
            Slot::Outerwear => pools.outerwear.push(item),
            Slot::Bottom => pools.bottom.push(item),
            Slot::Shoes => pools.shoes.push(item),
        }
    }

    tracing::debug!(
        tees = pools.top_base_tee.len(),
        crewnecks = pools.top_base_crewneck.len(),
        overshirts = pools.top_overshirt.len(),
        outerwear = pools.outerwear.len(),
        bottoms = pools.bottom.len(),
        shoes = pools.shoes.len(),
        "partitioned catalog"
    );

    pools
}
