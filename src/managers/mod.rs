// Bookmark Gallery state managers
// Managers hold mutable view state between requests.

pub mod gallery_manager;
