/// Command-line parsing and command execution
pub mod cli;
/// Algorithm constants and defaults
pub mod configuration;
/// Error type and context helpers
pub mod error;
/// JSON file loading and saving
pub mod loader;
/// Progress display for seed sweeps
pub mod progress;
/// Serializable result shape
pub mod report;
