//! Tab-filter browser (version 2).
//!
//! Groups the catalog into named tabs by identifier prefix, with a filter
//! field that narrows the visible tab set by name substring. The literal
//! term `ALL` restores every tab.

use std::collections::HashSet;
use std::sync::Arc;

use crate::catalog::ColorCatalog;
use crate::shell::Shell;
use crate::types::browse::TabGroupState;
use crate::types::color::{ColorEntry, ColorGroup};
use crate::types::view::{TabView, ViewItem, ViewTree};

/// The fallback group holding entries matched by no named group.
pub const OTHERS_GROUP: &str = "OTHERS";

/// The fixed canonical tab set, in display order.
///
/// `BLUE_GREY` is listed ahead of `BLUE`: group assignment is
/// first-match-wins, and `BLUE` is a true prefix of every `BLUE_GREY_*`
/// identifier, so the longer name must get first claim for the partition to
/// come out right. No other pair of names overlaps on the fixed palette.
pub const CANONICAL_GROUPS: &[&str] = &[
    "RED",
    "BLACK",
    "WHITE",
    "PINK",
    "PURPLE",
    "DEEP_PURPLE",
    "INDIGO",
    "BLUE_GREY",
    "BLUE",
    "LIGHT_BLUE",
    "GREY",
    "CYAN",
    "TEAL",
    "GREEN",
    "LIGHT_GREEN",
    "LIME",
    "YELLOW",
    "AMBER",
    "ORANGE",
    "DEEP_ORANGE",
    "BROWN",
];

/// Trait defining the tab-filter browser interface.
pub trait TabBrowserTrait {
    /// Applies a filter term to the visible tab set. Returns `false` when
    /// the term matched no group name (the displayed tabs stay unchanged).
    fn filter(&mut self, term: &str, shell: &mut dyn Shell) -> bool;
    fn state(&self) -> &TabGroupState;
    fn groups(&self) -> &[ColorGroup];
    fn render(&self) -> ViewTree;
}

/// Partitions the catalog into the requested groups, in order, with the
/// `OTHERS` group appended last.
///
/// An entry belongs to a named group when its id contains the group name as
/// a substring AND starts with it; the double check mirrors the original
/// palette scan and is kept as-is. Each entry is claimed by the first group
/// that matches it.
pub fn build_groups(catalog: &ColorCatalog, names: &[String]) -> Vec<ColorGroup> {
    let mut groups: Vec<ColorGroup> = Vec::with_capacity(names.len() + 1);
    let mut found: HashSet<&str> = HashSet::new();

    for name in names {
        let mut group = ColorGroup::new(name.clone());
        for entry in catalog.iter() {
            if found.contains(entry.id.as_str()) {
                continue;
            }
            if entry.id.contains(name.as_str()) && entry.id.starts_with(name.as_str()) {
                group.entries.push(entry.clone());
                found.insert(entry.id.as_str());
            }
        }
        groups.push(group);
    }

    let mut others = ColorGroup::new(OTHERS_GROUP);
    others.entries = catalog
        .iter()
        .filter(|entry| !found.contains(entry.id.as_str()))
        .cloned()
        .collect();
    groups.push(others);

    groups
}

/// The tab-filter browser. Owns the active-group selection and the grouped
/// contents; reads the shared catalog.
pub struct TabFilterBrowser {
    catalog: Arc<ColorCatalog>,
    state: TabGroupState,
}

impl TabFilterBrowser {
    /// Creates the browser showing the full canonical tab set.
    pub fn new(catalog: Arc<ColorCatalog>) -> Self {
        let group_names: Vec<String> = CANONICAL_GROUPS.iter().map(|s| s.to_string()).collect();
        let groups = build_groups(&catalog, &group_names);
        Self {
            catalog,
            state: TabGroupState {
                active_groups: group_names.clone(),
                group_names,
                groups,
            },
        }
    }

    fn tile(entry: &ColorEntry) -> ViewItem {
        ViewItem {
            label: entry.id.clone(),
            background: Some(entry.value.clone()),
            foreground: None,
            copy_text: entry.namespaced(),
        }
    }
}

impl TabBrowserTrait for TabFilterBrowser {
    fn filter(&mut self, term: &str, shell: &mut dyn Shell) -> bool {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return false;
        }

        let filtered: Vec<String> = if needle == "all" {
            self.state.group_names.clone()
        } else {
            self.state
                .group_names
                .iter()
                .filter(|name| name.replace('_', " ").to_lowercase().contains(&needle))
                .cloned()
                .collect()
        };

        // A zero-match filter leaves the displayed tabs unchanged.
        if filtered.is_empty() {
            return false;
        }

        shell.set_busy(true);
        self.state.groups = build_groups(&self.catalog, &filtered);
        self.state.active_groups = filtered;
        shell.set_busy(false);
        shell.render(&self.render());
        true
    }

    fn state(&self) -> &TabGroupState {
        &self.state
    }

    fn groups(&self) -> &[ColorGroup] {
        &self.state.groups
    }

    /// Pure view of the current state: one tab per group (`OTHERS` last),
    /// one swatch tile per entry carrying the namespaced clipboard payload.
    fn render(&self) -> ViewTree {
        ViewTree::Tabs {
            tabs: self
                .state
                .groups
                .iter()
                .map(|group| TabView {
                    title: group.title(),
                    items: group.entries.iter().map(Self::tile).collect(),
                })
                .collect(),
        }
    }
}
