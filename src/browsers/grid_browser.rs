//! Grid-search browser (version 1).
//!
//! Free-text substring search over the catalog, rendered as a grid of color
//! tiles. Results are appended in fixed-size batches with a render after
//! each batch, so long result sets appear progressively instead of in one
//! atomic update.

use std::sync::Arc;

use crate::catalog::ColorCatalog;
use crate::shell::Shell;
use crate::types::browse::SearchState;
use crate::types::color::ColorEntry;
use crate::types::view::{ViewItem, ViewTree};

/// Number of results appended per render pass.
pub const BATCH_SIZE: usize = 40;

/// Trait defining the grid-search browser interface.
pub trait GridBrowserTrait {
    /// Attempts the `Idle -> Searching` transition. Returns `false` without
    /// touching any state when the term is empty or a search is already in
    /// progress.
    fn begin_query(&mut self, term: &str) -> bool;
    /// Drains the pending search to completion, rendering after each batch.
    fn run(&mut self, shell: &mut dyn Shell);
    /// `begin_query` + `run` in one call. Returns whether a search ran.
    fn submit_query(&mut self, term: &str, shell: &mut dyn Shell) -> bool;
    fn state(&self) -> &SearchState;
    fn is_searching(&self) -> bool;
    fn render(&self) -> ViewTree;
}

/// Yields every catalog entry matching `term`, lazily, in catalog order.
///
/// The term is lowercased once; an entry matches if the needle is contained
/// in the raw display value or in the lowercased identifier. An empty term
/// matches nothing.
pub fn search_colors<'a>(
    catalog: &'a ColorCatalog,
    term: &str,
) -> impl Iterator<Item = &'a ColorEntry> + 'a {
    let needle = term.to_lowercase();
    catalog.iter().filter(move |entry| {
        !needle.is_empty()
            && (entry.value.contains(&needle) || entry.id.to_lowercase().contains(&needle))
    })
}

/// The grid-search browser. Owns its query state; reads the shared catalog.
pub struct GridSearchBrowser {
    catalog: Arc<ColorCatalog>,
    state: SearchState,
}

impl GridSearchBrowser {
    pub fn new(catalog: Arc<ColorCatalog>) -> Self {
        Self {
            catalog,
            state: SearchState::default(),
        }
    }

    fn status_line(&self) -> String {
        format!("Colors found: {}", self.state.results.len())
    }

    fn tile(entry: &ColorEntry) -> ViewItem {
        ViewItem {
            label: entry.value.clone(),
            background: None,
            foreground: Some(entry.value.clone()),
            copy_text: entry.id.clone(),
        }
    }
}

impl GridBrowserTrait for GridSearchBrowser {
    fn begin_query(&mut self, term: &str) -> bool {
        if term.is_empty() || self.state.is_searching {
            return false;
        }
        self.state.query = term.to_string();
        self.state.results.clear();
        self.state.is_searching = true;
        true
    }

    fn run(&mut self, shell: &mut dyn Shell) {
        if !self.state.is_searching {
            return;
        }

        let query = self.state.query.clone();
        let mut matches = search_colors(&self.catalog, &query);
        loop {
            let batch: Vec<ColorEntry> = matches.by_ref().take(BATCH_SIZE).cloned().collect();
            if batch.is_empty() {
                break;
            }
            self.state.results.extend(batch);
            shell.render(&self.render());
        }

        self.state.is_searching = false;
        if self.state.results.is_empty() {
            shell.notify("No colors found");
        }
        shell.render(&self.render());
    }

    fn submit_query(&mut self, term: &str, shell: &mut dyn Shell) -> bool {
        if !self.begin_query(term) {
            return false;
        }
        self.run(shell);
        true
    }

    fn state(&self) -> &SearchState {
        &self.state
    }

    fn is_searching(&self) -> bool {
        self.state.is_searching
    }

    /// Pure view of the current state: one tile per result, the running
    /// status line, and the input gate driven by the search latch.
    fn render(&self) -> ViewTree {
        ViewTree::Grid {
            input_enabled: !self.state.is_searching,
            status: self.status_line(),
            items: self.state.results.iter().map(Self::tile).collect(),
        }
    }
}
