//! Tests for resolving externally produced selections

#[cfg(test)]
mod tests {
    use crate::unit::{item, scenario_catalog};
    use closetmix::ClosetError;
    use closetmix::algorithm::composer::ComposeOptions;
    use closetmix::algorithm::constraints::Violation;
    use closetmix::algorithm::random::Mulberry32;
    use closetmix::algorithm::selection::LastSelection;
    use closetmix::catalog::item::{Catalog, Slot};
    use closetmix::catalog::partition::partition;
    use closetmix::session::external::{
        Resolution, SlotSelection, resolve_or_compose, resolve_selection,
    };

    fn scenario_selection() -> SlotSelection {
        SlotSelection {
            top_base: "tee-white".to_string(),
            top_overshirt: Some("shirt-black".to_string()),
            outerwear: None,
            bottom: "chino-black".to_string(),
            shoes: "derby-black".to_string(),
        }
    }

    // Tests a well-formed selection resolves onto catalog items
    // Verified by skipping optional slots during resolution
    #[test]
    fn test_resolve_valid_selection() {
        let catalog = scenario_catalog();

        let Ok(resolved) = resolve_selection(&scenario_selection(), &catalog) else {
            unreachable!("every id exists in the scenario catalog");
        };

        assert!(resolved.is_valid());
        assert_eq!(resolved.outfit.id(Slot::TopOvershirt), Some("shirt-black"));
        assert!(resolved.outfit.outerwear.is_none());
    }

    // Tests dangling ids are rejected with the slot they were given for
    // Verified by silently leaving unknown slots empty
    #[test]
    fn test_unknown_id() {
        let catalog = scenario_catalog();
        let selection = SlotSelection {
            shoes: "loafer".to_string(),
            ..scenario_selection()
        };

        assert!(matches!(
            resolve_selection(&selection, &catalog),
            Err(ClosetError::UnknownItem { slot: Slot::Shoes, id }) if id == "loafer"
        ));
    }

    // Tests ids placed in the wrong slot are rejected
    // Verified by accepting any existing id
    #[test]
    fn test_slot_mismatch() {
        let catalog = scenario_catalog();
        let selection = SlotSelection {
            bottom: "derby-black".to_string(),
            ..scenario_selection()
        };

        assert!(matches!(
            resolve_selection(&selection, &catalog),
            Err(ClosetError::SlotMismatch {
                slot: Slot::Bottom,
                actual: Slot::Shoes,
                ..
            })
        ));
    }

    // Tests rule violations are reported rather than rejected
    // Verified by returning an error for invalid selections
    #[test]
    fn test_violations_are_reported() {
        let catalog = Catalog::new(vec![
            item("navy-tee", Slot::TopBase, &["navy"], &[]),
            item("black-jeans", Slot::Bottom, &["black"], &[]),
            item("boots", Slot::Shoes, &[], &[]),
        ]);
        let selection = SlotSelection {
            top_base: "navy-tee".to_string(),
            top_overshirt: None,
            outerwear: None,
            bottom: "black-jeans".to_string(),
            shoes: "boots".to_string(),
        };

        let Ok(resolved) = resolve_selection(&selection, &catalog) else {
            unreachable!("ids exist and sit in their slots");
        };

        assert!(!resolved.is_valid());
        assert!(matches!(
            resolved.violations.first(),
            Some(Violation::ColorBlacklist { .. })
        ));
    }

    // Tests blank optional ids deserialize as empty slots
    // Verified by keeping blank strings as ids
    #[test]
    fn test_blank_optional_ids() {
        let json = r#"{
            "top_base": "tee-white",
            "top_overshirt": "",
            "bottom": "chino-black",
            "shoes": "derby-black",
            "reason": "ignored"
        }"#;

        let Ok(selection) = serde_json::from_str::<SlotSelection>(json) else {
            unreachable!("fixture is a valid selection");
        };

        assert_eq!(selection.top_overshirt, None);
        assert_eq!(selection.outerwear, None);
        assert_eq!(selection.id(Slot::Bottom), Some("chino-black"));
    }

    // Tests an unusable selection falls back to the composer
    // Verified by propagating the resolution error
    #[test]
    fn test_resolve_or_compose_falls_back() {
        let catalog = scenario_catalog();
        let pools = partition(catalog.items());
        let broken = SlotSelection {
            top_base: "nope".to_string(),
            ..scenario_selection()
        };

        let fallback = resolve_or_compose(
            Some(&broken),
            &catalog,
            &pools,
            &LastSelection::default(),
            ComposeOptions::default(),
            &mut Mulberry32::new(0),
        );
        assert!(matches!(fallback, Ok(Resolution::Composed(_))));

        let accepted = resolve_or_compose(
            Some(&scenario_selection()),
            &catalog,
            &pools,
            &LastSelection::default(),
            ComposeOptions::default(),
            &mut Mulberry32::new(0),
        );
        let Ok(resolution) = accepted else {
            unreachable!("selection resolves");
        };
        assert!(matches!(resolution, Resolution::External(_)));
        assert_eq!(resolution.outfit().id(Slot::TopBase), Some("tee-white"));

        let absent = resolve_or_compose(
            None,
            &catalog,
            &pools,
            &LastSelection::default(),
            ComposeOptions::default(),
            &mut Mulberry32::new(0),
        );
        assert!(matches!(absent, Ok(Resolution::Composed(_))));
    }
}
