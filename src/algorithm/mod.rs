/// Slot-filling composer with retry and fallback
pub mod composer;
/// Outfit rules and the shared validity predicate
pub mod constraints;
/// Per-slot substitution preserving validity
pub mod cycler;
/// Accessory scoring and selection
pub mod pairing;
/// Bit-exact seeded generator
pub mod random;
/// Seeded picks with repeat avoidance
pub mod selection;
/// Target style resolution
pub mod style;
