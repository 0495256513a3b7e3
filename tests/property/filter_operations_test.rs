//! Property-based tests for tab filter operations.
//!
//! These drive the browser through random filter sequences and check the
//! state invariants: the active set is always a canonical-order subset,
//! `ALL` always restores the full set, and a zero-match term never changes
//! what is displayed.

use std::sync::Arc;

use proptest::prelude::*;

use colorbrowser::browsers::tab_browser::{
    TabBrowserTrait, TabFilterBrowser, CANONICAL_GROUPS, OTHERS_GROUP,
};
use colorbrowser::catalog::ColorCatalog;
use colorbrowser::shell::{Clipboard, Notifier, RenderHost};
use colorbrowser::types::view::ViewTree;

#[derive(Default)]
struct NullShell;

impl Clipboard for NullShell {
    fn set_clipboard(&mut self, _text: &str) {}
}

impl Notifier for NullShell {
    fn notify(&mut self, _message: &str) {}
}

impl RenderHost for NullShell {
    fn render(&mut self, _view: &ViewTree) {}

    fn set_busy(&mut self, _busy: bool) {}
}

/// Filter terms: real name fragments, ALL in assorted casings, junk.
fn arb_filter_term() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => prop_oneof![
            Just("red".to_string()),
            Just("blue".to_string()),
            Just("grey".to_string()),
            Just("deep".to_string()),
            Just("light".to_string()),
            Just("e".to_string()),
            Just("purple".to_string()),
        ],
        2 => prop_oneof![
            Just("all".to_string()),
            Just("ALL".to_string()),
            Just(" All ".to_string()),
        ],
        2 => "[a-z]{1,8}",
        1 => Just(String::new()),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn filter_sequences_keep_invariants(terms in prop::collection::vec(arb_filter_term(), 1..20)) {
        let catalog = Arc::new(ColorCatalog::load().unwrap());
        let mut browser = TabFilterBrowser::new(catalog);
        let mut shell = NullShell;

        for term in &terms {
            let before = browser.state().active_groups.clone();
            let changed = browser.filter(term, &mut shell);

            let active = &browser.state().active_groups;

            // Invariant: the active set is never empty and is always a
            // subset of the canonical names, in canonical order.
            prop_assert!(!active.is_empty());
            let mut last_index = 0usize;
            for name in active {
                let index = CANONICAL_GROUPS
                    .iter()
                    .position(|n| *n == name.as_str())
                    .expect("active group must be canonical");
                prop_assert!(active.iter().filter(|n| *n == name).count() == 1);
                if name != &active[0] {
                    prop_assert!(index > last_index);
                }
                last_index = index;
            }

            // Invariant: displayed groups mirror the active set, plus OTHERS.
            let groups = browser.groups();
            prop_assert_eq!(groups.len(), active.len() + 1);
            prop_assert_eq!(&groups.last().unwrap().name, OTHERS_GROUP);

            let needle = term.trim().to_lowercase();
            if needle == "all" {
                prop_assert_eq!(active.len(), CANONICAL_GROUPS.len());
                prop_assert!(changed);
            } else if !changed {
                // Zero-match or empty term: nothing moved.
                prop_assert_eq!(active, &before);
            } else {
                // Every surviving name actually matches the needle.
                for name in active {
                    prop_assert!(name.replace('_', " ").to_lowercase().contains(&needle));
                }
            }
        }

        // ALL always recovers the full canonical set, whatever happened.
        prop_assert!(browser.filter("ALL", &mut shell));
        prop_assert_eq!(browser.state().active_groups.len(), CANONICAL_GROUPS.len());
    }
}
