//! Compatibility rules an outfit must satisfy
//!
//! There is a single predicate. The composer evaluates it on a partial outfit
//! with one candidate substituted in, fallback and cycling evaluate it on the
//! finished outfit. Every rule is monotone in the set of chosen items, so the
//! partial check can only reject earlier, never accept something the whole
//! check would refuse.

use crate::catalog::item::{CatalogItem, Slot};
use std::collections::BTreeSet;
use std::fmt;

/// Style tag incompatible with each of `CLASHES_WITH_FORMAL`
pub const FORMAL_STYLE: &str = "formal";
/// Style tags that clash with formal pieces
pub const CLASHES_WITH_FORMAL: [&str; 2] = ["sport", "street"];
/// Color pairs that may not appear together anywhere in the outfit
pub const BLACKLISTED_COLOR_PAIRS: [(&str, &str); 2] = [("navy", "black"), ("blue", "black")];
/// Colors subject to the loud-color cap
pub const LOUD_COLORS: [&str; 4] = ["red", "yellow", "purple", "orange"];
/// Loud colors allowed in one outfit
pub const MAX_LOUD_COLORS: usize = 1;
/// Material tag checked by the denim rule
pub const DENIM: &str = "denim";

/// Item chosen for every slot, `None` where the slot is empty
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Outfit<'c> {
    /// Base top
    pub top_base: Option<&'c CatalogItem>,
    /// Overshirt or mid layer
    pub top_overshirt: Option<&'c CatalogItem>,
    /// Jacket or coat
    pub outerwear: Option<&'c CatalogItem>,
    /// Bottom
    pub bottom: Option<&'c CatalogItem>,
    /// Footwear
    pub shoes: Option<&'c CatalogItem>,
}

impl<'c> Outfit<'c> {
    /// Item in a slot
    pub const fn get(&self, slot: Slot) -> Option<&'c CatalogItem> {
        match slot {
            Slot::TopBase => self.top_base,
            Slot::TopOvershirt => self.top_overshirt,
            Slot::Outerwear => self.outerwear,
            Slot::Bottom => self.bottom,
            Slot::Shoes => self.shoes,
        }
    }

    /// Put an item into a slot or clear it
    pub const fn set(&mut self, slot: Slot, item: Option<&'c CatalogItem>) {
        match slot {
            Slot::TopBase => self.top_base = item,
            Slot::TopOvershirt => self.top_overshirt = item,
            Slot::Outerwear => self.outerwear = item,
            Slot::Bottom => self.bottom = item,
            Slot::Shoes => self.shoes = item,
        }
    }

    /// Copy of the outfit with one slot replaced
    #[must_use]
    pub const fn with(mut self, slot: Slot, item: &'c CatalogItem) -> Self {
        self.set(slot, Some(item));
        self
    }

    /// Filled slots in display order
    pub fn items(&self) -> impl Iterator<Item = (Slot, &'c CatalogItem)> + use<'c> {
        let outfit = *self;
        Slot::ALL
            .into_iter()
            .filter_map(move |slot| outfit.get(slot).map(|item| (slot, item)))
    }

    /// Id of the item in a slot
    pub fn id(&self, slot: Slot) -> Option<&'c str> {
        self.get(slot).map(|item| item.id.as_str())
    }

    /// Union of the color tags of every chosen item
    pub fn palette(&self) -> BTreeSet<&'c str> {
        self.items()
            .flat_map(|(_, item)| item.colors.iter().map(String::as_str))
            .collect()
    }

    /// Union of the style tags of every chosen item
    pub fn style_tags(&self) -> BTreeSet<&'c str> {
        self.items()
            .flat_map(|(_, item)| item.styles.iter().map(String::as_str))
            .collect()
    }

    /// Color tags of both top layers combined
    pub fn top_palette(&self) -> BTreeSet<&'c str> {
        [self.top_base, self.top_overshirt]
            .into_iter()
            .flatten()
            .flat_map(|item| item.colors.iter().map(String::as_str))
            .collect()
    }
}

/// Reason an outfit is rejected
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Violation {
    /// Two non-shoe items combine a formal tag with sport or street
    StyleConflict {
        /// Slot of the first item
        first: Slot,
        /// Slot of the second item
        second: Slot,
    },
    /// Both colors of a forbidden pair are present
    ColorBlacklist {
        /// The forbidden pair
        pair: (&'static str, &'static str),
    },
    /// More loud colors than allowed
    LoudColors {
        /// Loud colors present
        count: usize,
    },
    /// Denim in the top layers and in the bottom
    DenimOnDenim,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StyleConflict { first, second } => {
                write!(f, "style conflict between '{first}' and '{second}'")
            }
            Self::ColorBlacklist { pair } => {
                write!(f, "colors '{}' and '{}' may not be combined", pair.0, pair.1)
            }
            Self::LoudColors { count } => {
                write!(
                    f,
                    "{count} loud colors present (at most {MAX_LOUD_COLORS} allowed)"
                )
            }
            Self::DenimOnDenim => f.write_str("denim top with denim bottom"),
        }
    }
}

/// Whether two items clash stylistically; shoes never clash
pub fn is_style_conflict(a: &CatalogItem, b: &CatalogItem) -> bool {
    if a.slot == Slot::Shoes || b.slot == Slot::Shoes {
        return false;
    }
    let has = |tag: &str| a.styles.contains(tag) || b.styles.contains(tag);
    has(FORMAL_STYLE) && CLASHES_WITH_FORMAL.iter().any(|&tag| has(tag))
}

fn style_conflict(outfit: &Outfit<'_>) -> Option<Violation> {
    let items: Vec<_> = outfit.items().collect();
    items.iter().enumerate().find_map(|(i, &(first, a))| {
        items
            .iter()
            .skip(i + 1)
            .find(|&&(_, b)| is_style_conflict(a, b))
            .map(|&(second, _)| Violation::StyleConflict { first, second })
    })
}

fn color_blacklist(outfit: &Outfit<'_>) -> Option<Violation> {
    let palette = outfit.palette();
    BLACKLISTED_COLOR_PAIRS
        .into_iter()
        .find(|(a, b)| palette.contains(a) && palette.contains(b))
        .map(|pair| Violation::ColorBlacklist { pair })
}

fn loud_colors(outfit: &Outfit<'_>) -> Option<Violation> {
    let palette = outfit.palette();
    let count = LOUD_COLORS
        .iter()
        .filter(|color| palette.contains(*color))
        .count();
    (count > MAX_LOUD_COLORS).then_some(Violation::LoudColors { count })
}

fn denim_on_denim(outfit: &Outfit<'_>) -> Option<Violation> {
    let bottom_is_denim = outfit.bottom.is_some_and(|item| item.colors.contains(DENIM));
    (bottom_is_denim && outfit.top_palette().contains(DENIM)).then_some(Violation::DenimOnDenim)
}

/// Rules in evaluation order
const RULES: [fn(&Outfit<'_>) -> Option<Violation>; 4] =
    [style_conflict, color_blacklist, loud_colors, denim_on_denim];

/// First rule the outfit breaks
pub fn find_violation(outfit: &Outfit<'_>) -> Option<Violation> {
    RULES.iter().find_map(|rule| rule(outfit))
}

/// Every rule the outfit breaks
pub fn violations(outfit: &Outfit<'_>) -> Vec<Violation> {
    RULES.iter().filter_map(|rule| rule(outfit)).collect()
}

/// Whole-outfit validity; empty slots never violate anything
pub fn is_valid(outfit: &Outfit<'_>) -> bool {
    find_violation(outfit).is_none()
}

/// Incremental acceptability of a candidate against a partial outfit
pub fn accepts<'c>(partial: &Outfit<'c>, slot: Slot, candidate: &'c CatalogItem) -> bool {
    is_valid(&partial.with(slot, candidate))
}
