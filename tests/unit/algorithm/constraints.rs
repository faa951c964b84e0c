//! Tests for the four outfit rules and both granularities of the check

#[cfg(test)]
mod tests {
    use crate::unit::item;
    use closetmix::algorithm::constraints::{
        Outfit, Violation, accepts, find_violation, is_style_conflict, is_valid, violations,
    };
    use closetmix::catalog::item::Slot;

    // Tests formal clashes with sport and street across non-shoe items
    // Verified by removing street from the clash list
    #[test]
    fn test_formal_conflicts_with_sport_and_street() {
        let blazer = item("blazer", Slot::Outerwear, &[], &["formal"]);
        let joggers = item("joggers", Slot::Bottom, &[], &["sport"]);
        let cargo = item("cargo", Slot::Bottom, &[], &["street"]);
        let chinos = item("chinos", Slot::Bottom, &[], &["casual"]);

        assert!(is_style_conflict(&blazer, &joggers));
        assert!(is_style_conflict(&blazer, &cargo));
        assert!(!is_style_conflict(&blazer, &chinos));
    }

    // Tests shoes never take part in style conflicts
    // Verified by only exempting the first argument
    #[test]
    fn test_shoes_are_exempt_from_style_conflicts() {
        let shirt = item("oxford", Slot::TopBase, &[], &["formal"]);
        let sneakers = item("sneakers", Slot::Shoes, &[], &["sport"]);

        assert!(!is_style_conflict(&shirt, &sneakers));
        assert!(!is_style_conflict(&sneakers, &shirt));

        let outfit = Outfit::default()
            .with(Slot::TopBase, &shirt)
            .with(Slot::Shoes, &sneakers);
        assert!(is_valid(&outfit));
    }

    // Tests an item carrying both tags conflicts with any partner
    // Verified by checking tags per item instead of the union
    #[test]
    fn test_style_conflict_uses_tag_union() {
        let hybrid = item("hybrid", Slot::TopBase, &[], &["formal", "street"]);
        let plain = item("plain", Slot::Bottom, &[], &[]);

        let outfit = Outfit::default()
            .with(Slot::TopBase, &hybrid)
            .with(Slot::Bottom, &plain);

        assert_eq!(
            find_violation(&outfit),
            Some(Violation::StyleConflict {
                first: Slot::TopBase,
                second: Slot::Bottom,
            })
        );
    }

    // Tests both blacklisted color pairs
    // Verified by removing the blue/black pair
    #[test]
    fn test_color_blacklist() {
        let navy = item("navy-tee", Slot::TopBase, &["navy"], &[]);
        let blue = item("blue-tee", Slot::TopBase, &["Blue"], &[]);
        let black = item("black-jeans", Slot::Bottom, &["black"], &[]);

        let navy_black = Outfit::default()
            .with(Slot::TopBase, &navy)
            .with(Slot::Bottom, &black);
        let blue_black = Outfit::default()
            .with(Slot::TopBase, &blue)
            .with(Slot::Bottom, &black);

        assert_eq!(
            find_violation(&navy_black),
            Some(Violation::ColorBlacklist {
                pair: ("navy", "black")
            })
        );
        assert_eq!(
            find_violation(&blue_black),
            Some(Violation::ColorBlacklist {
                pair: ("blue", "black")
            })
        );
    }

    // Tests at most one loud color is allowed
    // Verified by raising the cap to two
    #[test]
    fn test_loud_color_cap() {
        let red = item("red-tee", Slot::TopBase, &["red"], &[]);
        let red_shoe = item("red-shoe", Slot::Shoes, &["red"], &[]);
        let yellow = item("yellow-pants", Slot::Bottom, &["yellow"], &[]);

        let same_loud = Outfit::default()
            .with(Slot::TopBase, &red)
            .with(Slot::Shoes, &red_shoe);
        assert!(is_valid(&same_loud));

        let two_loud = same_loud.with(Slot::Bottom, &yellow);
        assert_eq!(
            find_violation(&two_loud),
            Some(Violation::LoudColors { count: 2 })
        );
    }

    // Tests denim on both halves is rejected, denim outerwear is not counted
    // Verified by including outerwear in the top palette
    #[test]
    fn test_denim_on_denim() {
        let denim_shirt = item("denim-shirt", Slot::TopOvershirt, &["denim"], &[]);
        let denim_jacket = item("denim-jacket", Slot::Outerwear, &["denim"], &[]);
        let jeans = item("jeans", Slot::Bottom, &["denim", "blue"], &[]);

        let jacket_and_jeans = Outfit::default()
            .with(Slot::Outerwear, &denim_jacket)
            .with(Slot::Bottom, &jeans);
        assert!(is_valid(&jacket_and_jeans));

        let shirt_and_jeans = jacket_and_jeans.with(Slot::TopOvershirt, &denim_shirt);
        assert_eq!(find_violation(&shirt_and_jeans), Some(Violation::DenimOnDenim));
    }

    // Tests every broken rule is reported in rule order
    // Verified by stopping after the first violation
    #[test]
    fn test_violations_lists_every_rule() {
        let top = item("top", Slot::TopBase, &["navy", "red", "denim"], &["formal"]);
        let bottom = item("bottom", Slot::Bottom, &["black", "orange", "denim"], &["sport"]);

        let outfit = Outfit::default()
            .with(Slot::TopBase, &top)
            .with(Slot::Bottom, &bottom);
        let found = violations(&outfit);

        assert_eq!(found.len(), 4);
        assert!(matches!(found.first(), Some(Violation::StyleConflict { .. })));
        assert_eq!(found.last(), Some(&Violation::DenimOnDenim));
        assert!(found.iter().all(|violation| !violation.to_string().is_empty()));
    }

    // Tests the incremental check agrees with the whole-outfit check
    // Verified by checking the candidate alone
    #[test]
    fn test_accepts_matches_whole_outfit_validity() {
        let navy = item("navy-tee", Slot::TopBase, &["navy"], &[]);
        let black = item("black-jeans", Slot::Bottom, &["black"], &[]);
        let grey = item("grey-jeans", Slot::Bottom, &["grey"], &[]);

        let partial = Outfit::default().with(Slot::TopBase, &navy);

        assert!(!accepts(&partial, Slot::Bottom, &black));
        assert!(accepts(&partial, Slot::Bottom, &grey));
        assert!(is_valid(&Outfit::default()));
    }

    // Tests outfit accessors over filled slots
    // Verified by including empty slots in items()
    #[test]
    fn test_outfit_accessors() {
        let tee = item("tee", Slot::TopBase, &["white"], &["casual"]);
        let shirt = item("shirt", Slot::TopOvershirt, &["olive"], &["minimal"]);
        let shoes = item("shoes", Slot::Shoes, &["white"], &["casual"]);

        let mut outfit = Outfit::default()
            .with(Slot::TopBase, &tee)
            .with(Slot::TopOvershirt, &shirt)
            .with(Slot::Shoes, &shoes);

        assert_eq!(outfit.items().count(), 3);
        assert_eq!(outfit.id(Slot::TopOvershirt), Some("shirt"));
        assert_eq!(outfit.palette().into_iter().collect::<Vec<_>>(), vec!["olive", "white"]);
        assert_eq!(outfit.style_tags().len(), 2);
        assert_eq!(outfit.top_palette().len(), 2);

        outfit.set(Slot::TopOvershirt, None);
        assert_eq!(outfit.get(Slot::TopOvershirt), None);
        assert_eq!(outfit.top_palette().into_iter().collect::<Vec<_>>(), vec!["white"]);
    }
}
