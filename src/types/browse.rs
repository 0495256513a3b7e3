use serde::{Deserialize, Serialize};

use super::color::{ColorEntry, ColorGroup};

/// Which browser the shell is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    /// Version 1: searchable grid.
    GridSearch,
    /// Version 2: filterable tabs.
    TabFilter,
}

/// State owned by the grid-search browser.
///
/// `results` is recomputed wholesale on each submission. `is_searching` is
/// the re-entrancy latch: while true, new submissions are rejected and the
/// host keeps the query input disabled.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    pub query: String,
    pub results: Vec<ColorEntry>,
    pub is_searching: bool,
}

/// State owned by the tab-filter browser.
///
/// `group_names` is the fixed canonical set; `active_groups` is the current
/// filter result (a subset, or the full set). `groups` is rebuilt wholesale
/// from `active_groups` on every filter change, never patched.
#[derive(Debug, Clone)]
pub struct TabGroupState {
    pub group_names: Vec<String>,
    pub active_groups: Vec<String>,
    pub groups: Vec<ColorGroup>,
}
