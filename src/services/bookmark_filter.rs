//! Search, selection and tally logic behind the gallery view.
//!
//! Everything here is a pure function over a bookmark slice; the
//! [`GalleryManager`](crate::managers::gallery_manager::GalleryManager) owns the
//! state these functions are applied to.

use std::collections::HashMap;

use crate::types::bookmark::Bookmark;
use crate::types::filter::{Selection, SortOrder, Tally};

/// Case-insensitive substring match against title or URL.
pub fn matches_search(bookmark: &Bookmark, search_term: &str) -> bool {
    let needle = search_term.to_lowercase();
    bookmark.title.to_lowercase().contains(&needle) || bookmark.url.to_lowercase().contains(&needle)
}

/// Returns the bookmarks matching both the search term and the selection,
/// in their original order. No selection lets every record through.
pub fn filter_bookmarks<'a>(
    bookmarks: &'a [Bookmark],
    search_term: &str,
    selection: Option<&Selection>,
) -> Vec<&'a Bookmark> {
    bookmarks
        .iter()
        .filter(|b| matches_search(b, search_term))
        .filter(|b| selection.map_or(true, |s| s.matches(b)))
        .collect()
}

pub fn sort_bookmarks(items: &mut [&Bookmark], order: SortOrder) {
    match order {
        SortOrder::Document => {}
        SortOrder::NewestFirst => items.sort_by(|a, b| b.date_added.cmp(&a.date_added)),
        SortOrder::OldestFirst => items.sort_by(|a, b| a.date_added.cmp(&b.date_added)),
        SortOrder::Title => items.sort_by_cached_key(|b| b.title.to_lowercase()),
    }
}

/// Bookmark counts per category, each with its sub-category counts, in order
/// of first appearance.
pub fn category_tallies(bookmarks: &[Bookmark]) -> Vec<Tally> {
    tally_by(bookmarks.iter(), |b| Some(b.category.as_str()))
        .into_iter()
        .map(|mut tally| {
            tally.children = tally_by(
                bookmarks.iter().filter(|b| b.category == tally.label),
                |b| b.sub_category.as_deref(),
            );
            tally
        })
        .collect()
}

/// Bookmark counts per folder, in order of first appearance.
pub fn folder_tallies(bookmarks: &[Bookmark]) -> Vec<Tally> {
    tally_by(bookmarks.iter(), |b| Some(b.folder.as_str()))
}

fn tally_by<'a, I, F>(bookmarks: I, key: F) -> Vec<Tally>
where
    I: Iterator<Item = &'a Bookmark>,
    F: Fn(&'a Bookmark) -> Option<&'a str>,
{
    let mut tallies: Vec<Tally> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for label in bookmarks.filter_map(key) {
        match index.get(label) {
            Some(&pos) => tallies[pos].count += 1,
            None => {
                index.insert(label, tallies.len());
                tallies.push(Tally {
                    label: label.to_string(),
                    count: 1,
                    children: Vec::new(),
                });
            }
        }
    }
    tallies
}
