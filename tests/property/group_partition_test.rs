//! Property-based tests for the tab grouping.
//!
//! The partition property: for any requested subset of the canonical group
//! names, every catalog entry lands in exactly one group, and `OTHERS`
//! holds exactly the entries matched by no named group.

use std::collections::HashMap;

use proptest::prelude::*;

use colorbrowser::browsers::tab_browser::{build_groups, CANONICAL_GROUPS, OTHERS_GROUP};
use colorbrowser::catalog::ColorCatalog;

/// A random subset of the canonical names, keeping canonical order.
fn arb_group_subset() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(any::<bool>(), CANONICAL_GROUPS.len()).prop_map(|mask| {
        CANONICAL_GROUPS
            .iter()
            .zip(mask)
            .filter(|(_, keep)| *keep)
            .map(|(name, _)| name.to_string())
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    // **Partition property**
    //
    // Every entry appears in exactly one group; group order follows the
    // request; OTHERS comes last and holds the complement.
    #[test]
    fn build_groups_partitions_the_catalog(names in arb_group_subset()) {
        let catalog = ColorCatalog::load().unwrap();
        let groups = build_groups(&catalog, &names);

        prop_assert_eq!(groups.len(), names.len() + 1);
        for (group, requested) in groups.iter().zip(&names) {
            prop_assert_eq!(&group.name, requested);
        }
        prop_assert_eq!(&groups.last().unwrap().name, OTHERS_GROUP);

        let mut seen: HashMap<&str, usize> = HashMap::new();
        for group in &groups {
            for entry in &group.entries {
                *seen.entry(entry.id.as_str()).or_insert(0) += 1;
            }
        }
        for entry in catalog.iter() {
            prop_assert_eq!(
                seen.get(entry.id.as_str()).copied(),
                Some(1),
                "{} must appear exactly once",
                entry.id
            );
        }
        let total: usize = groups.iter().map(|g| g.entries.len()).sum();
        prop_assert_eq!(total, catalog.len());
    }

    // **OTHERS is exactly the complement**
    //
    // An entry is in OTHERS iff no requested name prefixes it (with the
    // first-claim rule, "prefixes it" and "claims it" coincide).
    #[test]
    fn others_holds_exactly_the_unmatched(names in arb_group_subset()) {
        let catalog = ColorCatalog::load().unwrap();
        let groups = build_groups(&catalog, &names);
        let others = &groups.last().unwrap().entries;

        for entry in catalog.iter() {
            let matched = names
                .iter()
                .any(|n| entry.id.contains(n.as_str()) && entry.id.starts_with(n.as_str()));
            let in_others = others.iter().any(|e| e.id == entry.id);
            prop_assert_eq!(matched, !in_others, "entry {}", entry.id);
        }
    }

    // **Named groups keep catalog order**
    #[test]
    fn group_entries_preserve_catalog_order(names in arb_group_subset()) {
        let catalog = ColorCatalog::load().unwrap();
        let groups = build_groups(&catalog, &names);

        let position = |id: &str| catalog.iter().position(|e| e.id == id).unwrap();
        for group in &groups {
            let positions: Vec<usize> = group.entries.iter().map(|e| position(&e.id)).collect();
            let mut sorted = positions.clone();
            sorted.sort_unstable();
            prop_assert_eq!(positions, sorted, "group {} out of order", group.name);
        }
    }
}
