//! Algorithm constants and runtime configuration defaults

// Composition retry policy
/// Full slot-filling passes attempted after the first before falling back
pub const MAX_COMPOSE_ATTEMPTS: usize = 8;
/// Generator draws discarded between passes to escape repeating cycles
pub const THROWAWAY_DRAWS_PER_RETRY: usize = 2;

/// Upper bound on draws spent avoiding the previous pick for a slot
pub const NO_REPEAT_MAX_DRAWS: usize = 8;

// Accessory scoring
/// Score added for every accessory style tag present in the outfit
pub const STYLE_MATCH_SCORE: u32 = 10;
/// Score added for every accessory color tag present in the outfit
pub const COLOR_MATCH_SCORE: u32 = 5;
/// Score assigned to sets sharing nothing with the outfit
pub const FLOOR_SCORE: u32 = 1;
/// Number of best-scoring accessory sets drawn from
pub const PAIRING_SHORTLIST: usize = 3;

// Seed advancement contract; fixtures depend on these exact steps
/// Seed increment applied before a remix
pub const REMIX_SEED_STEP: u32 = 1;
/// Seed increment applied before any other regenerating action
pub const REGENERATE_SEED_STEP: u32 = 17;

// Default values for configurable parameters
/// Seed of a fresh session
pub const DEFAULT_SEED: u32 = 0;
/// Number of consecutive seeds composed by a sweep
pub const DEFAULT_SWEEP_COUNT: usize = 100;
/// Catalog manifest read when no path is given
pub const DEFAULT_CATALOG_PATH: &str = "manifest.json";
/// Session file read and rewritten when no path is given
pub const DEFAULT_SESSION_PATH: &str = ".closetmix-session.json";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
/// Sweeps shorter than this run without a progress bar
pub const MIN_SWEEP_FOR_PROGRESS: usize = 20;
