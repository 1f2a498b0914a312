//! List Page Store
//!
//! Uses Leptos reactive_stores so the table, the counters and the filter
//! controls each track only the field they read.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::filter::FilterOutcome;
use crate::models::{FilterState, ItemRow, SearchScope, SortMode};

/// Row snapshot and filter inputs of a filterable list
#[derive(Clone, Debug, Default, Store)]
pub struct ListState {
    /// All rows, in page order
    pub rows: Vec<ItemRow>,
    pub filter: FilterState,
}

impl ListState {
    pub fn new(rows: Vec<ItemRow>) -> Self {
        Self { rows, filter: FilterState::default() }
    }

    pub fn with_search_scope(rows: Vec<ItemRow>, search_scope: SearchScope) -> Self {
        Self { rows, filter: FilterState { search_scope, ..FilterState::default() } }
    }
}

/// Type alias for the store
pub type ListStore = Store<ListState>;

// ========================
// Store Helper Functions
// ========================

/// Empty string means "all categories"
pub fn store_set_category(store: &ListStore, category: String) {
    store.filter().write().category_filter = Some(category).filter(|c| !c.is_empty());
}

pub fn store_set_search(store: &ListStore, term: String) {
    store.filter().write().search_term = term;
}

pub fn store_set_sort(store: &ListStore, mode: SortMode) {
    store.filter().write().sort_mode = mode;
}

pub fn store_clear_filters(store: &ListStore) {
    store.filter().write().clear();
}

/// Visible rows and counts; pages wrap this in a single `Memo`
pub fn store_outcome(store: &ListStore) -> FilterOutcome {
    let filter = store.filter().get();
    let rows = store.rows().read();
    filter.apply(&rows)
}
