//! List Filtering
//!
//! Category filter, substring search and name sorting over the rows of a
//! server-rendered table.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::models::{FilterState, ItemRow, SearchScope, SortMode};

/// Result of running the filter chain over a row snapshot
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterOutcome {
    /// Row indices to show, in display order
    pub visible: Vec<usize>,
    pub total: usize,
}

impl FilterOutcome {
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// "No matches" placeholder: only when there was something to filter
    pub fn show_empty_placeholder(&self) -> bool {
        self.visible.is_empty() && self.total > 0
    }
}

/// Filter and order `all` for display.
///
/// A row is kept when it matches the category filter (if any) and contains
/// the search term (if any) in its name, or in its category too when `scope`
/// allows. Matching is case-insensitive. Sorting is stable; `SortMode::None`
/// restores page order.
pub fn apply_filters<'a>(
    all: &'a [ItemRow],
    category_filter: Option<&str>,
    search_term: &str,
    sort_mode: SortMode,
    scope: SearchScope,
) -> Vec<&'a ItemRow> {
    let category = category_filter
        .map(str::to_lowercase)
        .filter(|c| !c.is_empty());
    let term = search_term.trim().to_lowercase();

    let mut visible: Vec<&ItemRow> = all
        .iter()
        .filter(|row| match &category {
            Some(c) => row.normalized_category == *c,
            None => true,
        })
        .filter(|row| {
            term.is_empty()
                || row.normalized_name.contains(&term)
                || (scope == SearchScope::NameAndCategory && row.normalized_category.contains(&term))
        })
        .collect();

    match sort_mode {
        SortMode::NameAsc => visible.sort_by(|a, b| collate(&a.normalized_name, &b.normalized_name)),
        SortMode::NameDesc => visible.sort_by(|a, b| collate(&b.normalized_name, &a.normalized_name)),
        SortMode::None => visible.sort_by_key(|row| row.index),
    }

    visible
}

impl FilterState {
    pub fn apply(&self, all: &[ItemRow]) -> FilterOutcome {
        let visible = apply_filters(
            all,
            self.category_filter.as_deref(),
            &self.search_term,
            self.sort_mode,
            self.search_scope,
        );
        FilterOutcome {
            visible: visible.iter().map(|row| row.index).collect(),
            total: all.len(),
        }
    }

    /// Reset the inputs; the page's search scope stays
    pub fn clear(&mut self) {
        *self = FilterState { search_scope: self.search_scope, ..FilterState::default() };
    }
}

/// Distinct display categories, sorted, for the filter dropdown
pub fn unique_categories(all: &[ItemRow]) -> Vec<String> {
    all.iter()
        .map(|row| row.category.clone())
        .filter(|c| !c.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(target_arch = "wasm32")]
fn collate(a: &str, b: &str) -> Ordering {
    let locales = js_sys::Array::new();
    let options = js_sys::Object::new();
    js_sys::JsString::from(a)
        .locale_compare(b, &locales, &options)
        .cmp(&0)
}

#[cfg(not(target_arch = "wasm32"))]
fn collate(a: &str, b: &str) -> Ordering {
    a.cmp(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<ItemRow> {
        vec![
            ItemRow::new(0, "Hammer", "Tools"),
            ItemRow::new(1, "Drill", "Tools"),
            ItemRow::new(2, "Mug", "Kitchen"),
        ]
    }

    fn names(rows: &[&ItemRow]) -> Vec<String> {
        rows.iter().map(|r| r.display_name.clone()).collect()
    }

    #[test]
    fn test_category_filter_keeps_page_order() {
        let items = sample();
        let visible = apply_filters(&items, Some("Tools"), "", SortMode::None, SearchScope::NameAndCategory);
        assert_eq!(names(&visible), vec!["Hammer", "Drill"]);
    }

    #[test]
    fn test_search_matches_name() {
        let items = sample();
        let visible = apply_filters(&items, None, "dr", SortMode::None, SearchScope::NameAndCategory);
        assert_eq!(names(&visible), vec!["Drill"]);
    }

    #[test]
    fn test_search_matches_category_and_ignores_case() {
        let items = sample();
        let visible = apply_filters(&items, None, "  KITCH ", SortMode::None, SearchScope::NameAndCategory);
        assert_eq!(names(&visible), vec!["Mug"]);
    }

    #[test]
    fn test_both_predicates_must_match() {
        let items = sample();
        let visible = apply_filters(&items, Some("kitchen"), "dr", SortMode::None, SearchScope::NameAndCategory);
        assert!(visible.is_empty());
    }

    #[test]
    fn test_sort_desc() {
        let items = vec![ItemRow::new(0, "Drill", "Tools"), ItemRow::new(1, "Hammer", "Tools")];
        let visible = apply_filters(&items, None, "", SortMode::NameDesc, SearchScope::NameAndCategory);
        assert_eq!(names(&visible), vec!["Hammer", "Drill"]);
    }

    #[test]
    fn test_sort_asc_then_none_restores_order() {
        let items = sample();
        let asc = apply_filters(&items, None, "", SortMode::NameAsc, SearchScope::NameAndCategory);
        assert_eq!(names(&asc), vec!["Drill", "Hammer", "Mug"]);
        let none = apply_filters(&items, None, "", SortMode::None, SearchScope::NameAndCategory);
        assert_eq!(names(&none), vec!["Hammer", "Drill", "Mug"]);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let items = sample();
        for mode in [SortMode::NameAsc, SortMode::NameDesc] {
            let once: Vec<ItemRow> = apply_filters(&items, None, "", mode, SearchScope::NameAndCategory)
                .into_iter()
                .cloned()
                .collect();
            let twice = apply_filters(&once, None, "", mode, SearchScope::NameAndCategory);
            assert_eq!(names(&twice), once.iter().map(|r| r.display_name.clone()).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_outcome_counts_and_placeholder() {
        let items = sample();
        let state = FilterState {
            category_filter: Some("Tools".to_string()),
            ..Default::default()
        };
        let outcome = state.apply(&items);
        assert_eq!(outcome.visible, vec![0, 1]);
        assert_eq!(outcome.visible_count(), 2);
        assert_eq!(outcome.total, 3);
        assert!(!outcome.show_empty_placeholder());

        let none = FilterState { search_term: "zzz".to_string(), ..Default::default() }.apply(&items);
        assert!(none.show_empty_placeholder());

        let empty: Vec<ItemRow> = Vec::new();
        assert!(!FilterState::default().apply(&empty).show_empty_placeholder());
    }

    #[test]
    fn test_name_only_search_ignores_category() {
        let users = vec![
            ItemRow::new(0, "Alice Cohen", "Manager"),
            ItemRow::new(1, "Bob Levi", "User"),
        ];
        let visible = apply_filters(&users, None, "man", SortMode::None, SearchScope::NameOnly);
        assert!(visible.is_empty());

        let visible = apply_filters(&users, None, "lev", SortMode::None, SearchScope::NameOnly);
        assert_eq!(names(&visible), vec!["Bob Levi"]);

        // The role still filters through the dropdown
        let visible = apply_filters(&users, Some("manager"), "", SortMode::None, SearchScope::NameOnly);
        assert_eq!(names(&visible), vec!["Alice Cohen"]);
    }

    #[test]
    fn test_output_is_subset_matching_predicates() {
        let items = sample();
        for term in ["", "m", "o", "tools", "x"] {
            for category in [None, Some("Tools"), Some("Kitchen")] {
                let visible = apply_filters(&items, category, term, SortMode::NameAsc, SearchScope::NameAndCategory);
                for row in &visible {
                    assert!(items.contains(row));
                    if let Some(c) = category {
                        assert_eq!(row.normalized_category, c.to_lowercase());
                    }
                    assert!(row.normalized_name.contains(term) || row.normalized_category.contains(term));
                }
            }
        }
    }

    #[test]
    fn test_clear_resets_inputs_but_keeps_scope() {
        let mut state = FilterState {
            category_filter: Some("Tools".to_string()),
            search_term: "dr".to_string(),
            sort_mode: SortMode::NameDesc,
            search_scope: SearchScope::NameOnly,
        };
        state.clear();
        assert_eq!(
            state,
            FilterState { search_scope: SearchScope::NameOnly, ..Default::default() }
        );
    }

    #[test]
    fn test_unique_categories_sorted() {
        let items = sample();
        assert_eq!(unique_categories(&items), vec!["Kitchen", "Tools"]);
    }
}
