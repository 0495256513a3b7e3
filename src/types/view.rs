use serde::{Deserialize, Serialize};

/// A single display tile: label, colors, and the clipboard payload that the
/// shell delivers back when the tile is selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewItem {
    pub label: String,
    /// Background fill, when the tile is drawn as a color swatch.
    pub background: Option<String>,
    /// Text color, when the label itself carries the color.
    pub foreground: Option<String>,
    /// Text copied to the clipboard when the tile is clicked.
    pub copy_text: String,
}

/// One tab of the tab-filter view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabView {
    pub title: String,
    pub items: Vec<ViewItem>,
}

/// The tree of visible children handed to the render collaborator.
///
/// Rendering is an idempotent replace: the host swaps its visible children
/// for exactly this tree, nothing is patched incrementally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum ViewTree {
    Grid {
        /// False while a search is draining; the host disables the input.
        input_enabled: bool,
        status: String,
        items: Vec<ViewItem>,
    },
    Tabs {
        tabs: Vec<TabView>,
    },
}
