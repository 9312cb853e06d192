// Bookmark Gallery services
// Services provide the stateless core: extraction, categorization, filtering and settings.

pub mod bookmark_extractor;
pub mod bookmark_filter;
pub mod categorizer;
pub mod settings_engine;
