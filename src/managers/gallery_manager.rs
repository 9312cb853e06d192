//! Gallery Manager for Bookmark Gallery.
//!
//! Owns the view state: the imported bookmark list, the search term and the
//! sidebar selection. The list is only ever replaced as a whole.

use tracing::debug;

use crate::services::bookmark_filter;
use crate::types::bookmark::Bookmark;
use crate::types::filter::{Selection, SortOrder, Tally};

/// Trait defining gallery view operations.
pub trait GalleryManagerTrait {
    fn replace(&mut self, bookmarks: Vec<Bookmark>);
    fn bookmarks(&self) -> &[Bookmark];
    fn set_search_term(&mut self, term: &str);
    fn search_term(&self) -> &str;
    /// Selects `selection`, or clears it if it is already the active selection.
    fn toggle_selection(&mut self, selection: Selection) -> Option<&Selection>;
    fn clear_selection(&mut self);
    fn selection(&self) -> Option<&Selection>;
    fn set_sort_order(&mut self, order: SortOrder);
    /// Bookmarks passing the search term and the selection, in the configured order.
    fn visible(&self) -> Vec<&Bookmark>;
    fn category_tallies(&self) -> Vec<Tally>;
    fn folder_tallies(&self) -> Vec<Tally>;
}

/// In-memory gallery state.
#[derive(Debug, Default)]
pub struct GalleryManager {
    bookmarks: Vec<Bookmark>,
    search_term: String,
    selection: Option<Selection>,
    sort_order: SortOrder,
}

impl GalleryManager {
    pub fn new(sort_order: SortOrder) -> Self {
        Self {
            sort_order,
            ..Self::default()
        }
    }
}

impl GalleryManagerTrait for GalleryManager {
    /// Swaps in a freshly imported list. The search term survives; a selection
    /// that no longer matches any bookmark is dropped.
    fn replace(&mut self, bookmarks: Vec<Bookmark>) {
        self.bookmarks = bookmarks;
        if let Some(selection) = &self.selection {
            if !self.bookmarks.iter().any(|b| selection.matches(b)) {
                debug!("Dropping stale selection {:?}", selection);
                self.selection = None;
            }
        }
    }

    fn bookmarks(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    fn set_search_term(&mut self, term: &str) {
        self.search_term = term.to_string();
    }

    fn search_term(&self) -> &str {
        &self.search_term
    }

    fn toggle_selection(&mut self, selection: Selection) -> Option<&Selection> {
        if self.selection.as_ref() == Some(&selection) {
            self.selection = None;
        } else {
            self.selection = Some(selection);
        }
        self.selection.as_ref()
    }

    fn clear_selection(&mut self) {
        self.selection = None;
    }

    fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    fn set_sort_order(&mut self, order: SortOrder) {
        self.sort_order = order;
    }

    fn visible(&self) -> Vec<&Bookmark> {
        let mut items = bookmark_filter::filter_bookmarks(
            &self.bookmarks,
            &self.search_term,
            self.selection.as_ref(),
        );
        bookmark_filter::sort_bookmarks(&mut items, self.sort_order);
        items
    }

    fn category_tallies(&self) -> Vec<Tally> {
        bookmark_filter::category_tallies(&self.bookmarks)
    }

    fn folder_tallies(&self) -> Vec<Tally> {
        bookmark_filter::folder_tallies(&self.bookmarks)
    }
}
