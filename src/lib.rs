//! Deterministic outfit composition from a tagged clothing catalog
//!
//! The catalog is split into per-slot pools, a dominant style is resolved, and
//! a seeded composer fills every slot under a fixed rule set, retrying and
//! falling back within a bounded search. An accessory set can be paired with
//! the result, and single slots can be cycled without breaking validity.

#![forbid(unsafe_code)]

/// Outfit rules, seeded selection, composition, pairing and cycling
pub mod algorithm;
/// Catalog items, accessory sets and slot partitioning
pub mod catalog;
/// Input/output operations and error handling
pub mod io;
/// Session state, external producers and seed sweeps
pub mod session;

pub use io::error::{ClosetError, Result};
