use thiserror::Error;

// === ExtractError ===

/// Errors related to parsing a bookmarks export.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// A built-in CSS selector failed to compile.
    #[error("Invalid selector: {0}")]
    Selector(String),
}

// === CategorizeError ===

/// Errors related to categorizing a single bookmark.
#[derive(Debug, Error)]
pub enum CategorizeError {
    /// The bookmark URL could not be parsed.
    #[error("Invalid bookmark URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
    /// The bookmark URL parsed but carries no hostname.
    #[error("Bookmark URL has no host: {0}")]
    MissingHost(String),
}

// === ImportError ===

/// Errors related to importing a bookmarks file.
#[derive(Debug, Error)]
pub enum ImportError {
    /// Reading the bookmarks file failed.
    #[error("Failed to read bookmarks file: {0}")]
    Io(#[from] std::io::Error),
    /// Extracting links from the file failed.
    #[error(transparent)]
    Extract(#[from] ExtractError),
}

// === SelectionError ===

/// Errors related to changing the gallery selection.
#[derive(Debug, Error)]
pub enum SelectionError {
    /// The selection kind is not one of category, sub_category or folder.
    #[error("Unknown selection kind: {0}")]
    UnknownKind(String),
    /// A required selection field was not supplied.
    #[error("Missing selection field: {0}")]
    MissingField(&'static str),
}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// An I/O error occurred while reading settings.
    #[error("Settings I/O error: {0}")]
    Io(String),
    /// Failed to serialize or deserialize settings.
    #[error("Settings serialization error: {0}")]
    Serialization(String),
    /// The provided settings key is invalid.
    #[error("Invalid settings key: {0}")]
    InvalidKey(String),
    /// The provided settings value is invalid.
    #[error("Invalid settings value: {0}")]
    InvalidValue(String),
}
