//! Property-based tests for the grid search.
//!
//! Two properties from the design:
//! - containment correctness: an entry is in the result set iff the
//!   lowercased term is a substring of its raw value or lowercased id;
//! - batching associativity: concatenating the batched appends, in order,
//!   equals the single-shot unbatched result for the same term.

use std::sync::Arc;

use proptest::prelude::*;

use colorbrowser::browsers::grid_browser::{
    search_colors, GridBrowserTrait, GridSearchBrowser, BATCH_SIZE,
};
use colorbrowser::catalog::ColorCatalog;
use colorbrowser::shell::{Clipboard, Notifier, RenderHost};
use colorbrowser::types::view::ViewTree;

#[derive(Default)]
struct RecordingShell {
    renders: Vec<ViewTree>,
}

impl Clipboard for RecordingShell {
    fn set_clipboard(&mut self, _text: &str) {}
}

impl Notifier for RecordingShell {
    fn notify(&mut self, _message: &str) {}
}

impl RenderHost for RecordingShell {
    fn render(&mut self, view: &ViewTree) {
        self.renders.push(view.clone());
    }

    fn set_busy(&mut self, _busy: bool) {}
}

/// Terms biased toward real fragments of the palette: family names, shade
/// digits, hex pieces, plus arbitrary short strings.
fn arb_term() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => prop_oneof![
            Just("red".to_string()),
            Just("BLUE".to_string()),
            Just("grey".to_string()),
            Just("accent".to_string()),
            Just("ff".to_string()),
            Just("00".to_string()),
            Just("deep".to_string()),
            Just("_1".to_string()),
            Just("#".to_string()),
        ],
        2 => "[a-z0-9_#]{1,6}",
        1 => ".{0,4}",
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    // **Substring-containment correctness**
    //
    // For every catalog entry E and term T: E is in the results iff
    // T.lower() is a substring of E.value or of E.id.lower().
    #[test]
    fn search_matches_exactly_the_containing_entries(term in arb_term()) {
        let catalog = ColorCatalog::load().unwrap();
        let needle = term.to_lowercase();

        let results: Vec<String> = search_colors(&catalog, &term)
            .map(|e| e.id.clone())
            .collect();
        let expected: Vec<String> = catalog
            .iter()
            .filter(|e| {
                !needle.is_empty()
                    && (e.value.contains(&needle) || e.id.to_lowercase().contains(&needle))
            })
            .map(|e| e.id.clone())
            .collect();

        prop_assert_eq!(results, expected);
    }

    // **Batching associativity**
    //
    // Running the browser (which appends in batches of 40 and renders after
    // each batch) must end in exactly the single-shot result; every
    // intermediate render is a prefix growing by at most one batch.
    #[test]
    fn batched_result_equals_single_shot(term in arb_term()) {
        let catalog = Arc::new(ColorCatalog::load().unwrap());
        let mut browser = GridSearchBrowser::new(catalog.clone());
        let mut shell = RecordingShell::default();

        let ran = browser.submit_query(&term, &mut shell);
        prop_assert_eq!(ran, !term.is_empty());

        let single_shot: Vec<String> = search_colors(&catalog, &term)
            .map(|e| e.id.clone())
            .collect();
        let batched: Vec<String> = browser
            .state()
            .results
            .iter()
            .map(|e| e.id.clone())
            .collect();
        prop_assert_eq!(&batched, &single_shot);

        let mut previous = 0usize;
        for view in &shell.renders {
            let count = match view {
                ViewTree::Grid { items, .. } => items.len(),
                other => panic!("unexpected view {:?}", other),
            };
            prop_assert!(count >= previous);
            prop_assert!(count - previous <= BATCH_SIZE);
            previous = count;
        }
        if ran {
            prop_assert_eq!(previous, single_shot.len());
        }
    }

    // The guard makes search a total operation: no term can panic or leave
    // the browser stuck in `Searching`.
    #[test]
    fn search_always_returns_to_idle(term in ".{0,8}") {
        let catalog = Arc::new(ColorCatalog::load().unwrap());
        let mut browser = GridSearchBrowser::new(catalog);
        let mut shell = RecordingShell::default();

        browser.submit_query(&term, &mut shell);
        prop_assert!(!browser.is_searching());
    }
}
