use serde::{Deserialize, Serialize};

use super::filter::SortOrder;

/// Top-level gallery settings container.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GallerySettings {
    pub import: ImportSettings,
    pub categorization: CategorizationSettings,
    pub view: ViewSettings,
    pub logging: LoggingSettings,
}

/// Defaults substituted while extracting links.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ImportSettings {
    pub untitled_label: String,
    pub uncategorized_folder: String,
}

impl Default for ImportSettings {
    fn default() -> Self {
        Self {
            untitled_label: "Untitled".to_string(),
            uncategorized_folder: "Uncategorized".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CategorizationSettings {
    /// Catch-all category for links nothing else matched.
    pub fallback_category: String,
    /// Whether hostname markers are consulted after the keyword table.
    pub domain_heuristics: bool,
}

impl Default for CategorizationSettings {
    fn default() -> Self {
        Self {
            fallback_category: "Other".to_string(),
            domain_heuristics: true,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewSettings {
    pub sort_order: SortOrder,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default `tracing` filter directive; `RUST_LOG` takes precedence.
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: "bookmark_gallery=info".to_string(),
        }
    }
}
