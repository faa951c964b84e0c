//! Session context threaded through every core call
//!
//! Holds what the interactive front end used to keep in globals: the seed
//! counter, the slot toggles and the per-slot memory of previous picks. Each
//! operation takes the session, runs one synchronous core call and writes the
//! new seed and selection memory back.

use crate::{
    algorithm::{
        composer::{ComposeOptions, Composition, compose},
        constraints::Outfit,
        cycler::{Direction, cycle_slot},
        pairing::{choose_pairing, cycle_pairing},
        random::Mulberry32,
        selection::LastSelection,
        style::{Style, narrow_to_style},
    },
    catalog::{
        accessory::AccessorySet,
        item::{Catalog, Slot},
        partition::partition,
    },
    io::{
        configuration::{DEFAULT_SEED, REGENERATE_SEED_STEP, REMIX_SEED_STEP},
        error::Result,
    },
};
use serde::{Deserialize, Serialize};

/// User action that produces a new outfit
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Shuffle to a neighboring seed
    Remix,
    /// First outfit of a session
    Create,
    /// Turn the outerwear slot on or off
    ToggleOuterwear,
    /// Turn the overshirt slot on or off
    ToggleOvershirt,
}

impl Action {
    /// Increment applied to the seed before composing
    pub const fn seed_step(self) -> u32 {
        match self {
            Self::Remix => REMIX_SEED_STEP,
            Self::Create | Self::ToggleOuterwear | Self::ToggleOvershirt => REGENERATE_SEED_STEP,
        }
    }
}

/// Outfit plus optional accessory set for the renderer
#[derive(Clone, Debug)]
pub struct Recommendation<'c, 'a> {
    /// Composer result
    pub composition: Composition<'c>,
    /// Attached accessory set, when accessories are on and any exist
    pub pairing: Option<&'a AccessorySet>,
    /// Seed the composition was drawn with
    pub seed: u32,
}

/// Explicit state carried between core calls and persisted by the caller
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Session {
    /// Seed of the most recent composition
    pub seed: u32,
    /// Whether outerwear is part of the outfit
    pub include_outerwear: bool,
    /// Whether an overshirt is part of the outfit
    pub include_overshirt: bool,
    /// Whether an accessory set is attached
    pub include_accessories: bool,
    /// Ids of the current outfit, also the anti-repeat hint
    pub last_selection: LastSelection,
    /// Target style of the current outfit; slot cycling stays inside it
    pub style: Option<Style>,
    /// Id of the attached accessory set
    pub accessory_id: Option<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            include_outerwear: false,
            include_overshirt: true,
            include_accessories: false,
            last_selection: LastSelection::default(),
            style: None,
            accessory_id: None,
        }
    }
}

impl Session {
    /// Apply an action's toggle and seed step, returning the new seed
    pub const fn advance(&mut self, action: Action) -> u32 {
        match action {
            Action::ToggleOuterwear => self.include_outerwear = !self.include_outerwear,
            Action::ToggleOvershirt => self.include_overshirt = !self.include_overshirt,
            Action::Remix | Action::Create => {}
        }
        self.seed = self.seed.wrapping_add(action.seed_step());
        self.seed
    }

    /// Slot options implied by the toggles
    pub const fn options(&self) -> ComposeOptions {
        ComposeOptions {
            include_outerwear: self.include_outerwear,
            include_overshirt: self.include_overshirt,
        }
    }

    /// Generator for the current seed
    pub const fn generator(&self) -> Mulberry32 {
        Mulberry32::new(self.seed)
    }

    /// Outfit described by the remembered ids
    ///
    /// Ids that no longer exist in the catalog leave their slot empty.
    pub fn current_outfit<'c>(&self, catalog: &'c Catalog) -> Outfit<'c> {
        let mut outfit = Outfit::default();
        for slot in Slot::ALL {
            let item = self
                .last_selection
                .get(slot)
                .and_then(|id| catalog.get(id))
                .filter(|item| item.slot == slot);
            outfit.set(slot, item);
        }
        outfit
    }

    /// Advance the seed for an action and compose a fresh outfit
    ///
    /// The accessory pairer draws from the same generator right after the
    /// composer, so both are reproducible from the seed alone.
    ///
    /// # Errors
    ///
    /// Returns `InsufficientCatalog` if a required slot has no items
    pub fn regenerate<'c, 'a>(
        &mut self,
        action: Action,
        catalog: &'c Catalog,
        accessories: &'a [AccessorySet],
    ) -> Result<Recommendation<'c, 'a>> {
        let pools = partition(catalog.items());
        pools.require_core_slots()?;

        let seed = self.advance(action);
        let mut rng = self.generator();
        tracing::debug!(?action, seed, "regenerating outfit");

        let composition = compose(&pools, &self.last_selection, self.options(), &mut rng)?;
        let pairing = if self.include_accessories {
            choose_pairing(&composition.outfit, accessories, &mut rng)
        } else {
            None
        };

        self.last_selection = LastSelection::from_outfit(&composition.outfit);
        self.style = Some(composition.style);
        self.accessory_id = pairing.map(|set| set.id.clone());

        Ok(Recommendation {
            composition,
            pairing,
            seed,
        })
    }

    /// Step one slot of the current outfit to its next valid candidate
    ///
    /// Candidates come from the pools narrowed to the style of the last
    /// composition, or from the full pools when no style is known. Returns
    /// the outfit after the request and whether it changed.
    pub fn cycle<'c>(
        &mut self,
        catalog: &'c Catalog,
        slot: Slot,
        direction: Direction,
    ) -> (Outfit<'c>, bool) {
        let all = partition(catalog.items());
        let pools = match self.style {
            Some(style) => narrow_to_style(&all, style),
            None => all,
        };
        let current = self.current_outfit(catalog);
        let cycled = cycle_slot(&current, &pools, slot, direction, &self.last_selection);

        self.last_selection = cycled.last_selection;
        (cycled.outfit, cycled.changed)
    }

    /// Step to the neighboring accessory set
    ///
    /// Stepping attaches accessories if they were off.
    pub fn cycle_accessory<'a>(
        &mut self,
        accessories: &'a [AccessorySet],
        direction: Direction,
    ) -> Option<&'a AccessorySet> {
        let next = cycle_pairing(accessories, self.accessory_id.as_deref(), direction);
        if let Some(set) = next {
            self.include_accessories = true;
            self.accessory_id = Some(set.id.clone());
        }
        next
    }

    /// Turn accessories on or off without recomposing the outfit
    ///
    /// Turning them on pairs against the current outfit with a generator for
    /// the current seed; the seed itself does not move.
    pub fn toggle_accessories<'a>(
        &mut self,
        catalog: &Catalog,
        accessories: &'a [AccessorySet],
    ) -> Option<&'a AccessorySet> {
        self.include_accessories = !self.include_accessories;
        if !self.include_accessories {
            self.accessory_id = None;
            return None;
        }

        let outfit = self.current_outfit(catalog);
        let pairing = choose_pairing(&outfit, accessories, &mut self.generator());
        self.accessory_id = pairing.map(|set| set.id.clone());
        pairing
    }

    /// Currently attached accessory set
    pub fn current_accessory<'a>(&self, accessories: &'a [AccessorySet]) -> Option<&'a AccessorySet> {
        let id = self.accessory_id.as_deref()?;
        accessories.iter().find(|set| set.id == id)
    }
}
