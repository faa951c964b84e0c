//! JSON loading and saving for catalogs, accessory sets, sessions and selections

use crate::{
    catalog::{
        accessory::{AccessoryRecord, AccessorySet},
        item::{Catalog, ManifestRecord},
    },
    io::error::{Result, WithPath},
    session::{external::SlotSelection, state::Session},
};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Manifests come either as a bare array or wrapped in an `items` field
#[derive(Deserialize)]
#[serde(untagged)]
enum Manifest<T> {
    Bare(Vec<T>),
    Wrapped { items: Vec<T> },
}

impl<T> Manifest<T> {
    fn into_records(self) -> Vec<T> {
        match self {
            Self::Bare(records) | Self::Wrapped { items: records } => records,
        }
    }
}

/// Parse a catalog manifest from JSON text
///
/// Records that cannot be placed in a slot are skipped with a warning.
///
/// # Errors
///
/// Returns a parse error if the text is not a manifest at all
pub fn parse_catalog(json: &str) -> Result<Catalog> {
    let manifest: Manifest<ManifestRecord> = serde_json::from_str(json)?;
    Ok(Catalog::from_records(manifest.into_records()))
}

/// Read a catalog manifest from disk
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let text = fs::read_to_string(path).with_path(path, "read catalog")?;
    let manifest: Manifest<ManifestRecord> =
        serde_json::from_str(&text).with_path(path, "parse catalog")?;
    let catalog = Catalog::from_records(manifest.into_records());

    tracing::info!(
        path = %path.display(),
        items = catalog.len(),
        skipped = catalog.skipped(),
        "loaded catalog"
    );
    Ok(catalog)
}

/// Read accessory sets; no path means no accessories
///
/// # Errors
///
/// Returns an error if a given file cannot be read or parsed
pub fn load_accessories(path: Option<&Path>) -> Result<Vec<AccessorySet>> {
    let Some(path) = path else {
        return Ok(Vec::new());
    };

    let text = fs::read_to_string(path).with_path(path, "read accessories")?;
    let manifest: Manifest<AccessoryRecord> =
        serde_json::from_str(&text).with_path(path, "parse accessories")?;
    let sets: Vec<AccessorySet> = manifest
        .into_records()
        .into_iter()
        .map(AccessorySet::from)
        .collect();

    tracing::info!(path = %path.display(), sets = sets.len(), "loaded accessories");
    Ok(sets)
}

/// Read the session file, starting fresh when it does not exist yet
///
/// # Errors
///
/// Returns an error if an existing file cannot be read or parsed
pub fn load_session(path: &Path) -> Result<Session> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no session file, starting fresh");
        return Ok(Session::default());
    }

    let text = fs::read_to_string(path).with_path(path, "read session")?;
    serde_json::from_str(&text).with_path(path, "parse session")
}

/// Write the session file
///
/// # Errors
///
/// Returns an error if the session cannot be serialized or written
pub fn save_session(path: &Path, session: &Session) -> Result<()> {
    let text = serde_json::to_string_pretty(session).with_path(path, "serialize session")?;
    fs::write(path, text).with_path(path, "write session")?;
    tracing::debug!(path = %path.display(), seed = session.seed, "saved session");
    Ok(())
}

/// Read an externally produced slot selection
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed
pub fn load_selection(path: &Path) -> Result<SlotSelection> {
    let text = fs::read_to_string(path).with_path(path, "read selection")?;
    serde_json::from_str(&text).with_path(path, "parse selection")
}
