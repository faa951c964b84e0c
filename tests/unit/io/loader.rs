//! Tests for reading and writing the JSON documents around the core

#[cfg(test)]
mod tests {
    use closetmix::ClosetError;
    use closetmix::catalog::item::Slot;
    use closetmix::io::loader::{
        load_accessories, load_catalog, load_selection, load_session, parse_catalog, save_session,
    };
    use closetmix::session::state::Session;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    const MANIFEST: &str = r#"[
        {"id": "tee", "name": "White Tee", "category": "top", "topLayer": "base",
         "file": "tee.png", "colorHints": ["White"], "styleHints": ["casual"]},
        {"id": "jeans", "name": "Jeans", "category": "pants", "colors": ["denim", "blue"]},
        {"id": "boots", "name": "Boots", "category": "shoes"},
        {"id": "hat", "name": "Hat", "category": "hat"}
    ]"#;

    fn write(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        assert!(fs::write(&path, contents).is_ok(), "fixture write failed");
        path
    }

    // Tests a bare array manifest loads and skips unplaceable records
    // Verified by failing on the unknown category
    #[test]
    fn test_load_bare_manifest() {
        let Ok(dir) = TempDir::new() else {
            unreachable!("temp dir available");
        };
        let path = write(&dir, "manifest.json", MANIFEST);

        let Ok(catalog) = load_catalog(&path) else {
            unreachable!("manifest is valid");
        };

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.skipped(), 1);
        let jeans = catalog.get("jeans");
        assert_eq!(jeans.map(|found| found.slot), Some(Slot::Bottom));
        assert!(jeans.is_some_and(|found| found.colors.contains("denim")));
        assert_eq!(catalog.get("tee").map(|found| found.asset.as_str()), Some("tee.png"));
    }

    // Tests manifests wrapped in an items object load the same way
    // Verified by only accepting bare arrays
    #[test]
    fn test_parse_wrapped_manifest() {
        let wrapped = format!(r#"{{"items": {MANIFEST}}}"#);

        let catalog = parse_catalog(&wrapped);

        assert_eq!(catalog.map(|catalog| catalog.len()).ok(), Some(3));
        assert!(parse_catalog("{\"things\": []}").is_err());
    }

    // Tests missing and malformed files report their path
    // Verified by dropping the path from file errors
    #[test]
    fn test_catalog_errors_carry_path() {
        let Ok(dir) = TempDir::new() else {
            unreachable!("temp dir available");
        };
        let missing = dir.path().join("absent.json");
        let malformed = write(&dir, "broken.json", "[{");

        assert!(matches!(
            load_catalog(&missing),
            Err(ClosetError::FileSystem { operation: "read catalog", .. })
        ));
        assert!(matches!(
            load_catalog(&malformed),
            Err(ClosetError::Parse { path, .. }) if path == malformed
        ));
    }

    // Tests accessory files are optional
    // Verified by requiring an accessory path
    #[test]
    fn test_load_accessories() {
        let Ok(dir) = TempDir::new() else {
            unreachable!("temp dir available");
        };
        let path = write(
            &dir,
            "pairings.json",
            r#"[{"id": "watch", "name": "Watch", "styleHints": ["minimal"],
                 "items": [{"name": "Watch", "file": "watch.png", "position": "wrist"}]}]"#,
        );

        assert!(load_accessories(None).is_ok_and(|sets| sets.is_empty()));
        let Ok(sets) = load_accessories(Some(&path)) else {
            unreachable!("pairings file is valid");
        };
        assert_eq!(sets.len(), 1);
        assert!(sets.first().is_some_and(|set| set.styles.contains("minimal")));
    }

    // Tests sessions start fresh and survive a save and load
    // Verified by not writing the seed
    #[test]
    fn test_session_persistence() {
        let Ok(dir) = TempDir::new() else {
            unreachable!("temp dir available");
        };
        let path = dir.path().join("session.json");

        assert_eq!(load_session(&path).ok(), Some(Session::default()));

        let mut session = Session {
            seed: 34,
            include_outerwear: true,
            ..Session::default()
        };
        session.last_selection.set(Slot::Shoes, "boots");
        assert!(save_session(&path, &session).is_ok());

        assert_eq!(load_session(&path).ok(), Some(session));
    }

    // Tests external selections load from disk
    // Verified by requiring the optional slots
    #[test]
    fn test_load_selection() {
        let Ok(dir) = TempDir::new() else {
            unreachable!("temp dir available");
        };
        let path = write(
            &dir,
            "selection.json",
            r#"{"top_base": "tee", "bottom": "jeans", "shoes": "boots"}"#,
        );

        let Ok(selection) = load_selection(&path) else {
            unreachable!("selection is valid");
        };
        assert_eq!(selection.id(Slot::TopBase), Some("tee"));
        assert_eq!(selection.id(Slot::Outerwear), None);
        assert!(load_selection(Path::new("/nonexistent/selection.json")).is_err());
    }
}
