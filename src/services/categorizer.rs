//! Categorizer for Bookmark Gallery.
//!
//! Classifies a bookmark by matching its lowercased title and URL against an
//! ordered keyword table. The first matching rule wins, so the table order is
//! part of its meaning. Links nothing matches fall through to hostname markers
//! and finally to a generic per-host category.

use url::Url;

use crate::types::category::{CategoryRule, Classification, DomainRule};
use crate::types::errors::CategorizeError;
use crate::types::settings::CategorizationSettings;

/// Trait defining categorization operations.
pub trait CategorizerTrait {
    fn categorize(&self, title: &str, url: &str) -> Result<Classification, CategorizeError>;
    fn unrecognized(&self) -> Classification;
}

/// Keyword-table categorizer.
pub struct Categorizer {
    rules: Vec<CategoryRule>,
    domain_rules: Vec<DomainRule>,
    fallback_category: String,
    domain_heuristics: bool,
}

impl Categorizer {
    /// Creates a categorizer with the built-in keyword and domain tables.
    pub fn new(settings: &CategorizationSettings) -> Self {
        Self::with_rules(Self::default_rules(), Self::default_domain_rules(), settings)
    }

    pub fn with_rules(
        rules: Vec<CategoryRule>,
        domain_rules: Vec<DomainRule>,
        settings: &CategorizationSettings,
    ) -> Self {
        Self {
            rules,
            domain_rules,
            fallback_category: settings.fallback_category.clone(),
            domain_heuristics: settings.domain_heuristics,
        }
    }

    pub fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }

    /// The built-in keyword table. Development is a group and comes first, so
    /// its sub-groups are consulted before any flat category.
    pub fn default_rules() -> Vec<CategoryRule> {
        vec![
            CategoryRule::group(
                "Development",
                vec![
                    CategoryRule::leaf(
                        "AI & Machine Learning",
                        &[
                            "copilot", "openai", "chatgpt", "anthropic", "huggingface",
                            "machine learning", "deep learning", "pytorch", "tensorflow",
                            "kaggle", "llm",
                        ],
                        "AI assistants, models and machine learning resources",
                    ),
                    CategoryRule::leaf(
                        "Source Control",
                        &["github", "gitlab", "bitbucket", "codeberg", "sourcehut"],
                        "Code hosting and version control",
                    ),
                    CategoryRule::leaf(
                        "Documentation",
                        &[
                            "docs.rs", "readthedocs", "developer.mozilla", "documentation",
                            "api reference", "/docs/",
                        ],
                        "Reference documentation for languages and libraries",
                    ),
                    CategoryRule::leaf(
                        "Programming",
                        &[
                            "stackoverflow", "stackexchange", "programming", "rust-lang",
                            "python", "javascript", "typescript", "npmjs", "crates.io",
                            "code",
                        ],
                        "Programming languages, Q&A and developer tooling",
                    ),
                ],
            ),
            CategoryRule::leaf(
                "News & Media",
                &[
                    "news", "bbc.", "cnn.", "nytimes", "reuters", "theguardian",
                    "washingtonpost", "medium.com", "substack",
                ],
                "News outlets, magazines and newsletters",
            ),
            CategoryRule::leaf(
                "Video & Music",
                &[
                    "youtube", "youtu.be", "netflix", "twitch", "vimeo", "spotify",
                    "soundcloud", "podcast",
                ],
                "Streaming video, music and podcasts",
            ),
            CategoryRule::leaf(
                "Social",
                &[
                    "twitter", "facebook", "instagram", "linkedin", "reddit", "mastodon",
                    "tiktok", "discord",
                ],
                "Social networks and communities",
            ),
            CategoryRule::leaf(
                "Shopping",
                &["amazon", "ebay", "etsy", "aliexpress", "shop", "store", "cart"],
                "Online stores and marketplaces",
            ),
            CategoryRule::leaf(
                "Learning",
                &[
                    "wikipedia", "coursera", "udemy", "edx.org", "khanacademy", "tutorial",
                    "course", "learn",
                ],
                "Courses, tutorials and encyclopedias",
            ),
            CategoryRule::leaf(
                "Finance",
                &["bank", "paypal", "finance", "invest", "stock", "crypto", "coinbase"],
                "Banking, payments and investing",
            ),
            CategoryRule::leaf(
                "Travel",
                &[
                    "booking.com", "airbnb", "tripadvisor", "expedia", "flight", "hotel",
                    "maps.google", "travel",
                ],
                "Trips, lodging and maps",
            ),
            CategoryRule::leaf(
                "Productivity",
                &[
                    "notion.so", "trello", "asana", "calendar", "drive.google", "docs.google",
                    "dropbox", "todoist", "slack",
                ],
                "Workspace, planning and file-sharing tools",
            ),
        ]
    }

    /// Hostname markers consulted when no keyword matched.
    pub fn default_domain_rules() -> Vec<DomainRule> {
        vec![
            DomainRule::new(".gov", "Government", "Official government resource"),
            DomainRule::new(".edu", "Education", "Academic or educational institution"),
            DomainRule::new("wiki", "Reference", "Wiki or community reference"),
            DomainRule::new("blog", "Blogs", "Personal or company blog"),
            DomainRule::new(".org", "Organizations", "Non-profit or community organization"),
        ]
    }

    fn match_rules(&self, text: &str) -> Option<Classification> {
        self.rules.iter().find_map(|rule| resolve_rule(rule, text))
    }

    fn match_domain(&self, host: &str) -> Option<Classification> {
        if !self.domain_heuristics {
            return None;
        }
        let host = host.to_lowercase();
        self.domain_rules
            .iter()
            .find(|rule| !rule.marker.is_empty() && host.contains(rule.marker.as_str()))
            .map(|rule| Classification::new(&rule.category, None, &rule.description))
    }
}

impl Default for Categorizer {
    fn default() -> Self {
        Self::new(&CategorizationSettings::default())
    }
}

impl CategorizerTrait for Categorizer {
    /// Classifies one bookmark.
    ///
    /// Keyword matches never look at the URL structure, but the hostname
    /// fallbacks do, so an unparseable URL without a keyword hit is an error.
    fn categorize(&self, title: &str, url: &str) -> Result<Classification, CategorizeError> {
        let text = format!("{} {}", title, url).to_lowercase();
        if let Some(found) = self.match_rules(&text) {
            return Ok(found);
        }

        let parsed = Url::parse(url).map_err(|e| CategorizeError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        let host = parsed
            .host_str()
            .ok_or_else(|| CategorizeError::MissingHost(url.to_string()))?;

        if let Some(found) = self.match_domain(host) {
            return Ok(found);
        }

        let domain = host.strip_prefix("www.").unwrap_or(host);
        Ok(Classification::new(
            &self.fallback_category,
            Some(domain),
            &format!("Resource from {}", domain),
        ))
    }

    /// Catch-all classification for links that could not be categorized.
    fn unrecognized(&self) -> Classification {
        Classification::new(&self.fallback_category, None, "Unrecognized link")
    }
}

/// Depth-first, declaration-order resolution of one table entry. A group
/// reports itself as the category and its deepest matching leaf as the
/// sub-category.
fn resolve_rule(rule: &CategoryRule, text: &str) -> Option<Classification> {
    match rule {
        CategoryRule::Leaf {
            label,
            patterns,
            description,
        } => patterns
            .iter()
            .any(|p| !p.is_empty() && text.contains(p.as_str()))
            .then(|| Classification::new(label, None, description)),
        CategoryRule::Group { label, children } => {
            children.iter().find_map(|child| resolve_rule(child, text)).map(|found| {
                Classification {
                    category: label.clone(),
                    sub_category: Some(found.sub_category.unwrap_or(found.category)),
                    description: found.description,
                }
            })
        }
    }
}
