//! Tests for the serialized result shape

#[cfg(test)]
mod tests {
    use crate::unit::{item, scenario_catalog};
    use closetmix::algorithm::composer::{ComposeOptions, compose};
    use closetmix::algorithm::constraints::Outfit;
    use closetmix::algorithm::random::Mulberry32;
    use closetmix::algorithm::selection::LastSelection;
    use closetmix::catalog::accessory::AccessorySet;
    use closetmix::catalog::item::Slot;
    use closetmix::catalog::partition::partition;
    use closetmix::io::report::{OutfitReport, write_json};
    use serde_json::Value;

    fn to_value(report: &OutfitReport) -> Value {
        let mut buffer = Vec::new();
        assert!(write_json(&mut buffer, report).is_ok());
        serde_json::from_slice(&buffer).unwrap_or(Value::Null)
    }

    // Tests composer metadata and every slot are serialized
    // Verified by skipping empty slots during serialization
    #[test]
    fn test_composition_report() {
        let catalog = scenario_catalog();
        let pools = partition(catalog.items());
        let Ok(composition) = compose(
            &pools,
            &LastSelection::default(),
            ComposeOptions::default(),
            &mut Mulberry32::new(0),
        ) else {
            unreachable!("scenario catalog covers every required slot");
        };

        let report = OutfitReport::from_composition(&composition, 0);
        let value = to_value(&report);

        assert_eq!(value["top_base"]["id"], "tee-white");
        assert_eq!(value["top_base"]["asset"], "tee-white.png");
        assert_eq!(value["outerwear"], Value::Null);
        assert_eq!(value["style"], "casual");
        assert_eq!(value["outcome"], "composed");
        assert_eq!(value["seed"], 0);
        assert_eq!(value["valid"], true);
        assert!(value.get("changed").is_none());
    }

    // Tests violations and cycling flags reach the report
    // Verified by reporting every outfit as valid
    #[test]
    fn test_violating_outfit_report() {
        let navy = item("navy", Slot::TopBase, &["navy"], &[]);
        let black = item("black", Slot::Bottom, &["black"], &[]);
        let outfit = Outfit::default()
            .with(Slot::TopBase, &navy)
            .with(Slot::Bottom, &black);

        let report = OutfitReport::new(&outfit).with_changed(false);

        assert!(!report.valid);
        assert_eq!(report.violations.len(), 1);
        assert_eq!(report.changed, Some(false));
        assert!(report.seed.is_none());
        assert!(report.shoes.is_none());
    }

    // Tests the accessory set and its pieces are attached
    // Verified by dropping the pieces from the accessory report
    #[test]
    fn test_accessory_report() {
        let Ok(set) = serde_json::from_str::<closetmix::catalog::accessory::AccessoryRecord>(
            r#"{"id": "watch", "name": "Watch", "items": [{"name": "Watch", "file": "watch.png"}]}"#,
        )
        .map(AccessorySet::from) else {
            unreachable!("fixture is a valid record");
        };

        let report = OutfitReport::new(&Outfit::default()).with_accessory(Some(&set));
        let value = to_value(&report);

        assert_eq!(value["accessory"]["id"], "watch");
        assert_eq!(value["accessory"]["items"][0]["asset"], "watch.png");
        assert_eq!(OutfitReport::new(&Outfit::default()).with_accessory(None).accessory, None);
    }
}
