//! Command-line interface driving one core call per invocation
//!
//! Every command loads the catalog and session, runs a single synchronous
//! core operation, persists the session when it changed and prints the
//! result as JSON.

use crate::algorithm::composer::ComposeOptions;
use crate::algorithm::cycler::Direction;
use crate::catalog::{accessory::AccessorySet, item::Catalog, item::Slot, partition::partition};
use crate::io::configuration::{
    DEFAULT_CATALOG_PATH, DEFAULT_SEED, DEFAULT_SESSION_PATH, DEFAULT_SWEEP_COUNT,
};
use crate::io::error::Result;
use crate::io::loader::{load_accessories, load_catalog, load_selection, load_session, save_session};
use crate::io::progress::SweepProgress;
use crate::io::report::{OutfitReport, write_json};
use crate::session::external::{Resolution, resolve_or_compose, resolve_selection};
use crate::session::state::{Action, Session};
use crate::session::sweep::run_sweep;
use clap::{Parser, Subcommand, ValueEnum};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "closetmix")]
#[command(
    author,
    version,
    about = "Compose rule-checked outfits from a tagged clothing catalog"
)]
/// Command-line arguments for the outfit composer
pub struct Cli {
    /// Catalog manifest (JSON array or object with an `items` field)
    #[arg(short, long, global = true, default_value = DEFAULT_CATALOG_PATH)]
    pub catalog: PathBuf,

    /// Accessory sets file; without it no accessories are attached
    #[arg(short, long, global = true)]
    pub accessories: Option<PathBuf>,

    /// Session file holding seed, toggles and previous picks
    #[arg(short, long, global = true, default_value = DEFAULT_SESSION_PATH)]
    pub session: PathBuf,

    /// Suppress progress output and warnings
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Operation to run
    #[command(subcommand)]
    pub command: Command,
}

/// Operations exposed on the command line
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Advance the seed and compose a new outfit
    Compose {
        /// Action deciding the seed step and which toggle flips
        #[arg(value_enum, default_value_t = ActionArg::Remix)]
        action: ActionArg,
    },

    /// Step one slot or the accessory set to its next valid option
    Cycle {
        /// Slot or accessory set to change
        #[arg(value_enum)]
        target: CycleTarget,

        /// Direction to step in
        #[arg(value_enum, default_value_t = Step::Next)]
        step: Step,
    },

    /// Turn accessories on or off, keeping the current outfit
    Accessories,

    /// Resolve an externally produced selection and report rule violations
    Check {
        /// JSON file with one item id per slot
        selection: PathBuf,

        /// Compose from the session instead of failing on unresolvable ids
        #[arg(long)]
        fallback: bool,
    },

    /// Compose a run of consecutive seeds and summarize the outcomes
    Sweep {
        /// First seed
        #[arg(long, default_value_t = DEFAULT_SEED)]
        start: u32,

        /// Number of seeds
        #[arg(short = 'n', long, default_value_t = DEFAULT_SWEEP_COUNT)]
        count: usize,

        /// Require outerwear in every outfit
        #[arg(long)]
        outerwear: bool,
    },
}

/// Regenerating actions selectable on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionArg {
    /// Neighboring seed
    Remix,
    /// Start over
    Create,
    /// Flip outerwear and recompose
    ToggleOuterwear,
    /// Flip the overshirt and recompose
    ToggleOvershirt,
}

impl From<ActionArg> for Action {
    fn from(action: ActionArg) -> Self {
        match action {
            ActionArg::Remix => Self::Remix,
            ActionArg::Create => Self::Create,
            ActionArg::ToggleOuterwear => Self::ToggleOuterwear,
            ActionArg::ToggleOvershirt => Self::ToggleOvershirt,
        }
    }
}

/// What a cycling request changes
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleTarget {
    /// Base top
    #[value(alias = "top_base")]
    TopBase,
    /// Overshirt
    #[value(alias = "top_overshirt")]
    TopOvershirt,
    /// Outerwear
    Outerwear,
    /// Bottom
    Bottom,
    /// Shoes
    Shoes,
    /// Accessory set
    Accessory,
}

impl CycleTarget {
    /// Outfit slot targeted, `None` for the accessory set
    pub const fn slot(self) -> Option<Slot> {
        match self {
            Self::TopBase => Some(Slot::TopBase),
            Self::TopOvershirt => Some(Slot::TopOvershirt),
            Self::Outerwear => Some(Slot::Outerwear),
            Self::Bottom => Some(Slot::Bottom),
            Self::Shoes => Some(Slot::Shoes),
            Self::Accessory => None,
        }
    }
}

/// Cycling direction on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Forward through the pool
    Next,
    /// Backward through the pool
    Prev,
}

impl From<Step> for Direction {
    fn from(step: Step) -> Self {
        match step {
            Step::Next => Self::Forward,
            Step::Prev => Self::Backward,
        }
    }
}

/// Executes one parsed command against the files it names
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a runner for parsed arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the command, printing its JSON result on stdout
    ///
    /// # Errors
    ///
    /// Returns an error if loading, composing or writing fails
    pub fn run(&self) -> Result<()> {
        let stdout = std::io::stdout();
        self.run_with(stdout.lock())
    }

    /// Run the command, writing its JSON result to `out`
    ///
    /// # Errors
    ///
    /// Returns an error if loading, composing or writing fails
    pub fn run_with<W: Write>(&self, out: W) -> Result<()> {
        let catalog = load_catalog(&self.cli.catalog)?;
        let accessories = load_accessories(self.cli.accessories.as_deref())?;

        match &self.cli.command {
            Command::Compose { action } => self.compose(&catalog, &accessories, *action, out),
            Command::Cycle { target, step } => {
                self.cycle(&catalog, &accessories, *target, (*step).into(), out)
            }
            Command::Accessories => self.toggle_accessories(&catalog, &accessories, out),
            Command::Check {
                selection,
                fallback,
            } => self.check(&catalog, selection, *fallback, out),
            Command::Sweep {
                start,
                count,
                outerwear,
            } => self.sweep(&catalog, *start, *count, *outerwear, out),
        }
    }

    fn compose<W: Write>(
        &self,
        catalog: &Catalog,
        accessories: &[AccessorySet],
        action: ActionArg,
        out: W,
    ) -> Result<()> {
        let mut session = load_session(&self.cli.session)?;
        let recommendation = session.regenerate(action.into(), catalog, accessories)?;
        let report = OutfitReport::from_composition(&recommendation.composition, recommendation.seed)
            .with_accessory(recommendation.pairing);

        save_session(&self.cli.session, &session)?;
        write_json(out, &report)
    }

    fn cycle<W: Write>(
        &self,
        catalog: &Catalog,
        accessories: &[AccessorySet],
        target: CycleTarget,
        direction: Direction,
        out: W,
    ) -> Result<()> {
        let mut session = self.session_with_outfit(catalog, accessories)?;

        let report = if let Some(slot) = target.slot() {
            let (outfit, changed) = session.cycle(catalog, slot, direction);
            OutfitReport::new(&outfit)
                .with_accessory(session.current_accessory(accessories))
                .with_changed(changed)
        } else {
            let set = session.cycle_accessory(accessories, direction);
            OutfitReport::new(&session.current_outfit(catalog))
                .with_accessory(set)
                .with_changed(set.is_some())
        };

        save_session(&self.cli.session, &session)?;
        write_json(out, &report)
    }

    fn toggle_accessories<W: Write>(
        &self,
        catalog: &Catalog,
        accessories: &[AccessorySet],
        out: W,
    ) -> Result<()> {
        let mut session = self.session_with_outfit(catalog, accessories)?;
        let set = session.toggle_accessories(catalog, accessories);
        let report = OutfitReport::new(&session.current_outfit(catalog)).with_accessory(set);

        save_session(&self.cli.session, &session)?;
        write_json(out, &report)
    }

    fn check<W: Write>(
        &self,
        catalog: &Catalog,
        selection_path: &Path,
        fallback: bool,
        out: W,
    ) -> Result<()> {
        let selection = load_selection(selection_path)?;

        let report = if fallback {
            let session = load_session(&self.cli.session)?;
            let pools = partition(catalog.items());
            let resolution = resolve_or_compose(
                Some(&selection),
                catalog,
                &pools,
                &session.last_selection,
                session.options(),
                &mut session.generator(),
            )?;
            match resolution {
                Resolution::External(resolved) => OutfitReport::new(&resolved.outfit),
                Resolution::Composed(composition) => {
                    OutfitReport::from_composition(&composition, session.seed)
                }
            }
        } else {
            OutfitReport::new(&resolve_selection(&selection, catalog)?.outfit)
        };

        write_json(out, &report)
    }

    fn sweep<W: Write>(
        &self,
        catalog: &Catalog,
        start: u32,
        count: usize,
        outerwear: bool,
        out: W,
    ) -> Result<()> {
        let options = ComposeOptions {
            include_outerwear: outerwear,
            ..ComposeOptions::default()
        };
        let progress = SweepProgress::new(count, start, self.cli.quiet);
        let summary = run_sweep(catalog, start, count, options, |done| progress.update(done))?;
        progress.finish();

        write_json(out, &summary)
    }

    /// Session with a composed outfit, creating one if none exists yet
    fn session_with_outfit(
        &self,
        catalog: &Catalog,
        accessories: &[AccessorySet],
    ) -> Result<Session> {
        let mut session = load_session(&self.cli.session)?;
        if session.last_selection.is_empty() {
            tracing::info!("no outfit in session yet, composing one first");
            session.regenerate(Action::Create, catalog, accessories)?;
        }
        Ok(session)
    }
}
