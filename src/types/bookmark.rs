use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::category::Classification;

/// A link pulled out of a bookmarks export, before it has been categorized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedLink {
    pub title: String,
    pub url: String,
    pub date_added: DateTime<Utc>,
    pub folder: String,
}

/// Represents an imported, categorized bookmark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: String,
    pub title: String,
    pub url: String,
    pub date_added: DateTime<Utc>,
    pub folder: String,
    pub category: String,
    pub sub_category: Option<String>,
    pub description: String,
}

impl Bookmark {
    /// Builds a bookmark from a parsed link and its classification, assigning a fresh id.
    pub fn new(link: ParsedLink, classification: Classification) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: link.title,
            url: link.url,
            date_added: link.date_added,
            folder: link.folder,
            category: classification.category,
            sub_category: classification.sub_category,
            description: classification.description,
        }
    }
}

/// Counts reported after an import replaced the gallery contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportSummary {
    pub total: usize,
    /// Links whose URL could not be categorized and got the catch-all category.
    pub fallback_count: usize,
    pub category_count: usize,
    pub folder_count: usize,
}
