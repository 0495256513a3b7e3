use serde::{Deserialize, Serialize};

/// A single named color from the palette.
///
/// `id` is the canonical identifier (e.g. `"RED_200"`); `value` is the
/// renderable lowercase hex token (e.g. `"#ef9a9a"`, or an 8-digit token
/// like `"#8a000000"` for translucent entries).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorEntry {
    pub id: String,
    pub value: String,
}

impl ColorEntry {
    pub fn new(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
        }
    }

    /// The namespaced label used as the clipboard payload in the tab view.
    pub fn namespaced(&self) -> String {
        format!("colors.{}", self.id)
    }
}

/// A named bucket of catalog entries sharing an identifier prefix.
///
/// The reserved name `"OTHERS"` holds every entry matched by no named group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorGroup {
    pub name: String,
    pub entries: Vec<ColorEntry>,
}

impl ColorGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Tab title: the group name with underscores replaced by spaces.
    pub fn title(&self) -> String {
        self.name.replace('_', " ")
    }
}
