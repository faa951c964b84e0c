/// Accessory sets paired with composed outfits
pub mod accessory;
/// Catalog items, slots and manifest records
pub mod item;
/// Per-slot pools and base-top classification
pub mod partition;
