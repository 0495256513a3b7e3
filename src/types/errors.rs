use std::fmt;

// === CatalogError ===

/// Errors raised while building the color catalog at startup.
///
/// All of these are fatal: the browser cannot run without its palette.
#[derive(Debug)]
pub enum CatalogError {
    /// The palette table contained no entries.
    EmptyPalette,
    /// An entry at the given position had an empty identifier.
    EmptyId(usize),
    /// Two entries shared the same identifier.
    DuplicateId(String),
    /// An entry's display value was not a well-formed hex color token.
    MalformedValue { id: String, value: String },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::EmptyPalette => write!(f, "Palette is empty"),
            CatalogError::EmptyId(index) => {
                write!(f, "Palette entry {} has an empty identifier", index)
            }
            CatalogError::DuplicateId(id) => write!(f, "Duplicate color identifier: {}", id),
            CatalogError::MalformedValue { id, value } => {
                write!(f, "Malformed color value for {}: {}", id, value)
            }
        }
    }
}

impl std::error::Error for CatalogError {}

// === SettingsError ===

/// Errors related to loading the optional settings file.
#[derive(Debug)]
pub enum SettingsError {
    /// An I/O error occurred while reading the settings file.
    IoError(String),
    /// The settings file exists but could not be parsed.
    SerializationError(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}
