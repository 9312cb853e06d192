//! Unit tests for the GalleryManager public API.
//!
//! These tests exercise search, selection toggling, tallies and list
//! replacement through `GalleryManagerTrait`.

use chrono::{DateTime, Utc};

use bookmark_gallery::managers::gallery_manager::{GalleryManager, GalleryManagerTrait};
use bookmark_gallery::types::bookmark::Bookmark;
use bookmark_gallery::types::filter::{Selection, SortOrder};

fn bookmark(title: &str, url: &str, category: &str, sub: Option<&str>, folder: &str) -> Bookmark {
    Bookmark {
        id: format!("id-{}", title),
        title: title.to_string(),
        url: url.to_string(),
        date_added: DateTime::<Utc>::default(),
        folder: folder.to_string(),
        category: category.to_string(),
        sub_category: sub.map(str::to_string),
        description: String::new(),
    }
}

/// Helper: a gallery holding a small mixed list.
fn setup() -> GalleryManager {
    let mut gallery = GalleryManager::new(SortOrder::Document);
    gallery.replace(vec![
        bookmark("Rust Book", "https://doc.rust-lang.org/book/", "Development", Some("Documentation"), "Reading"),
        bookmark("ripgrep", "https://github.com/BurntSushi/ripgrep", "Development", Some("Source Control"), "Tools"),
        bookmark("BBC News", "https://www.bbc.co.uk/news", "News & Media", None, "Reading"),
        bookmark("Rust subreddit", "https://www.reddit.com/r/rust/", "Social", None, "Tools"),
    ]);
    gallery
}

fn titles(gallery: &GalleryManager) -> Vec<String> {
    gallery.visible().iter().map(|b| b.title.clone()).collect()
}

#[test]
fn test_no_search_no_selection_shows_everything() {
    let gallery = setup();
    assert_eq!(gallery.visible().len(), 4);
}

#[test]
fn test_search_matches_title_or_url_case_insensitively() {
    let mut gallery = setup();
    gallery.set_search_term("RUST");
    assert_eq!(titles(&gallery), ["Rust Book", "Rust subreddit"]);

    gallery.set_search_term("burntsushi");
    assert_eq!(titles(&gallery), ["ripgrep"]);
}

#[test]
fn test_search_and_selection_are_combined() {
    let mut gallery = setup();
    gallery.set_search_term("rust");
    gallery.toggle_selection(Selection::category("Development"));
    assert_eq!(titles(&gallery), ["Rust Book"]);
}

#[test]
fn test_sub_category_selection() {
    let mut gallery = setup();
    gallery.toggle_selection(Selection::sub_category("Development", "Source Control"));
    assert_eq!(titles(&gallery), ["ripgrep"]);
}

#[test]
fn test_folder_selection() {
    let mut gallery = setup();
    gallery.toggle_selection(Selection::folder("Reading"));
    assert_eq!(titles(&gallery), ["Rust Book", "BBC News"]);
}

/// Selecting the active selection again clears the filter.
#[test]
fn test_toggling_same_selection_twice_clears_it() {
    let mut gallery = setup();

    let active = gallery.toggle_selection(Selection::folder("Tools")).cloned();
    assert_eq!(active, Some(Selection::folder("Tools")));
    assert_eq!(gallery.visible().len(), 2);

    let active = gallery.toggle_selection(Selection::folder("Tools")).cloned();
    assert_eq!(active, None);
    assert_eq!(gallery.visible().len(), 4);
}

#[test]
fn test_selecting_a_different_value_replaces_selection() {
    let mut gallery = setup();
    gallery.toggle_selection(Selection::folder("Tools"));
    gallery.toggle_selection(Selection::category("News & Media"));
    assert_eq!(gallery.selection(), Some(&Selection::category("News & Media")));
    assert_eq!(titles(&gallery), ["BBC News"]);

    gallery.clear_selection();
    assert!(gallery.selection().is_none());
}

#[test]
fn test_tallies_count_distinct_values() {
    let gallery = setup();

    let categories = gallery.category_tallies();
    let summary: Vec<(&str, usize)> = categories.iter().map(|t| (t.label.as_str(), t.count)).collect();
    assert_eq!(summary, [("Development", 2), ("News & Media", 1), ("Social", 1)]);
    assert_eq!(categories[0].children.len(), 2);

    let folders = gallery.folder_tallies();
    let summary: Vec<(&str, usize)> = folders.iter().map(|t| (t.label.as_str(), t.count)).collect();
    assert_eq!(summary, [("Reading", 2), ("Tools", 2)]);
}

/// Replacing the list discards the old one entirely and drops a selection
/// nothing in the new list matches.
#[test]
fn test_replace_discards_previous_list() {
    let mut gallery = setup();
    gallery.set_search_term("rust");
    gallery.toggle_selection(Selection::folder("Tools"));

    gallery.replace(vec![bookmark("Rustlings", "https://github.com/rust-lang/rustlings", "Development", Some("Source Control"), "Practice")]);

    assert_eq!(gallery.bookmarks().len(), 1);
    assert!(gallery.selection().is_none());
    assert_eq!(gallery.search_term(), "rust");
    assert_eq!(titles(&gallery), ["Rustlings"]);
}

#[test]
fn test_replace_keeps_selection_that_still_matches() {
    let mut gallery = setup();
    gallery.toggle_selection(Selection::category("Social"));
    gallery.replace(vec![bookmark("Mastodon", "https://mastodon.social/", "Social", None, "Inbox")]);
    assert_eq!(gallery.selection(), Some(&Selection::category("Social")));
}

#[test]
fn test_sort_order_applies_to_visible() {
    let mut gallery = setup();
    gallery.set_sort_order(SortOrder::Title);
    assert_eq!(titles(&gallery), ["BBC News", "ripgrep", "Rust Book", "Rust subreddit"]);
}
