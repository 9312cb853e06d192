use serde::{Deserialize, Serialize};

use super::bookmark::Bookmark;

/// The sidebar selection narrowing the gallery to one category, sub-category or folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Selection {
    Category { category: String },
    SubCategory { category: String, sub_category: String },
    Folder { folder: String },
}

impl Selection {
    pub fn category(category: &str) -> Self {
        Selection::Category {
            category: category.to_string(),
        }
    }

    pub fn sub_category(category: &str, sub_category: &str) -> Self {
        Selection::SubCategory {
            category: category.to_string(),
            sub_category: sub_category.to_string(),
        }
    }

    pub fn folder(folder: &str) -> Self {
        Selection::Folder {
            folder: folder.to_string(),
        }
    }

    /// Returns true if the bookmark belongs to this selection.
    pub fn matches(&self, bookmark: &Bookmark) -> bool {
        match self {
            Selection::Category { category } => bookmark.category == *category,
            Selection::SubCategory {
                category,
                sub_category,
            } => {
                bookmark.category == *category
                    && bookmark.sub_category.as_deref() == Some(sub_category.as_str())
            }
            Selection::Folder { folder } => bookmark.folder == *folder,
        }
    }
}

/// Number of bookmarks carrying one distinct label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub label: String,
    pub count: usize,
    /// Sub-category counts; only populated for category tallies.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Tally>,
}

/// Order in which visible bookmarks are returned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    /// Order of appearance in the imported file.
    #[default]
    Document,
    NewestFirst,
    OldestFirst,
    Title,
}
