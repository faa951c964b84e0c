/// Alternative outfit producers resolved against the catalog
pub mod external;
/// Session context threaded through every core call
pub mod state;
/// Batch composition over consecutive seeds
pub mod sweep;
