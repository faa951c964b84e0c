//! Dominant aesthetic the composer should prefer

use crate::catalog::item::CatalogItem;
use crate::catalog::partition::Pools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Aesthetic a composition can target
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Style {
    /// Tailored pieces
    Formal,
    /// Everyday pieces; the fallback target
    Casual,
    /// Streetwear
    Street,
    /// Athletic pieces
    Sport,
}

/// Order in which target styles are tried
pub const STYLE_PRIORITY: [Style; 4] = [Style::Formal, Style::Casual, Style::Street, Style::Sport];

impl Style {
    /// Tag naming the style on catalog items
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Formal => "formal",
            Self::Casual => "casual",
            Self::Street => "street",
            Self::Sport => "sport",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether an item carries the style tag or no style tags at all
pub fn matches_style(item: &CatalogItem, style: Style) -> bool {
    item.styles.is_empty() || item.styles.contains(style.as_str())
}

fn any_matching(pool: &[&CatalogItem], style: Style) -> bool {
    pool.iter().any(|item| matches_style(item, style))
}

/// Whether a complete outfit in this style can be drawn from the pools
///
/// Needs a tee-like base, a second top layer (overshirt or crewneck),
/// a bottom, shoes and, when required, outerwear.
pub fn is_feasible(pools: &Pools<'_>, style: Style, require_outerwear: bool) -> bool {
    let has_base = any_matching(&pools.top_base_tee, style);
    let has_layer = any_matching(&pools.top_overshirt, style)
        || any_matching(&pools.top_base_crewneck, style);
    let has_common = any_matching(&pools.bottom, style) && any_matching(&pools.shoes, style);
    let has_outerwear = !require_outerwear || any_matching(&pools.outerwear, style);

    has_base && has_layer && has_common && has_outerwear
}

/// First feasible style in priority order, `Casual` when none is
pub fn resolve_target_style(pools: &Pools<'_>, require_outerwear: bool) -> Style {
    let style = STYLE_PRIORITY
        .into_iter()
        .find(|&style| is_feasible(pools, style, require_outerwear))
        .unwrap_or(Style::Casual);

    tracing::debug!(%style, require_outerwear, "resolved target style");
    style
}

/// Pools cut down to items matching the style
///
/// Each pool is relaxed back to its full contents on its own when nothing in
/// it matches. Composition, its fallback and slot cycling all draw from the
/// narrowed pools, so a style chosen once bounds every later pick.
pub fn narrow_to_style<'c>(pools: &Pools<'c>, style: Style) -> Pools<'c> {
    let narrow = |pool: &[&'c CatalogItem]| -> Vec<&'c CatalogItem> {
        let styled: Vec<_> = pool
            .iter()
            .copied()
            .filter(|item| matches_style(item, style))
            .collect();
        if styled.is_empty() { pool.to_vec() } else { styled }
    };

    Pools {
        top_base: narrow(&pools.top_base),
        top_base_tee: narrow(&pools.top_base_tee),
        top_base_crewneck: narrow(&pools.top_base_crewneck),
        top_overshirt: narrow(&pools.top_overshirt),
        outerwear: narrow(&pools.outerwear),
        bottom: narrow(&pools.bottom),
        shoes: narrow(&pools.shoes),
    }
}
