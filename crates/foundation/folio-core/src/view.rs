//! Per-page view state
//!
//! A [`PageView`] is mounted when a listing page is shown and dropped when it
//! goes away. It owns the page's [`FilterState`] and [`Selection`]; nothing
//! here outlives the page.

use crate::catalog::Catalog;
use crate::entry::{CatalogEntry, EntryId};
use crate::filter::{Category, FilterState};
use crate::selection::Selection;

#[derive(Debug, Clone)]
pub struct PageView<'a> {
    catalog: &'a Catalog,
    filter: FilterState,
    selection: Selection,
    revealed: bool,
}

impl<'a> PageView<'a> {
    /// Mount a view with the catalog's default filter and no selection
    pub fn mount(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            filter: FilterState::for_catalog(catalog),
            selection: Selection::new(),
            revealed: false,
        }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.set_query(query);
    }

    pub fn set_category(&mut self, category: Category) {
        self.filter.set_category(category);
    }

    pub fn select(&mut self, id: impl Into<EntryId>) {
        self.selection.select(id);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Entries passing the current filter, in catalog order
    pub fn visible(&self) -> Vec<&'a CatalogEntry> {
        self.filter.apply(self.catalog)
    }

    /// Visible entries split into (featured, regular), both in catalog order
    pub fn visible_by_feature(&self) -> (Vec<&'a CatalogEntry>, Vec<&'a CatalogEntry>) {
        self.visible().into_iter().partition(|e| e.is_featured())
    }

    /// The selected entry, if it exists in this catalog
    pub fn selected(&self) -> Option<&'a CatalogEntry> {
        self.selection.resolve(self.catalog)
    }

    /// Whether the entrance animation should still play.
    ///
    /// Pure presentation hint: it never affects filtering or selection.
    pub fn plays_entrance(&self) -> bool {
        !self.revealed
    }

    /// Record that the content has already been shown once
    pub fn mark_revealed(&mut self) {
        self.revealed = true;
    }
}
