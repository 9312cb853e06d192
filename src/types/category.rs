use serde::{Deserialize, Serialize};

/// Result of categorizing one bookmark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub category: String,
    pub sub_category: Option<String>,
    pub description: String,
}

impl Classification {
    pub fn new(category: &str, sub_category: Option<&str>, description: &str) -> Self {
        Self {
            category: category.to_string(),
            sub_category: sub_category.map(str::to_string),
            description: description.to_string(),
        }
    }
}

/// One entry of the ordered pattern table.
///
/// A `Leaf` matches when any of its lowercase patterns is a substring of the
/// searched text. A `Group` resolves through its children in declaration
/// order and reports its own label as the category, with the matching child
/// as the sub-category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CategoryRule {
    Leaf {
        label: String,
        patterns: Vec<String>,
        description: String,
    },
    Group {
        label: String,
        children: Vec<CategoryRule>,
    },
}

impl CategoryRule {
    pub fn leaf(label: &str, patterns: &[&str], description: &str) -> Self {
        CategoryRule::Leaf {
            label: label.to_string(),
            patterns: patterns.iter().map(|p| p.to_lowercase()).collect(),
            description: description.to_string(),
        }
    }

    pub fn group(label: &str, children: Vec<CategoryRule>) -> Self {
        CategoryRule::Group {
            label: label.to_string(),
            children,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryRule::Leaf { label, .. } | CategoryRule::Group { label, .. } => label,
        }
    }
}

/// Maps hostnames containing `marker` to a fixed category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainRule {
    pub marker: String,
    pub category: String,
    pub description: String,
}

impl DomainRule {
    pub fn new(marker: &str, category: &str, description: &str) -> Self {
        Self {
            marker: marker.to_lowercase(),
            category: category.to_string(),
            description: description.to_string(),
        }
    }
}
