//! Filter Bar Component
//!
//! Category dropdown, debounced search box, sort dropdown and counters for a
//! list backed by a `ListStore`.

use leptos::prelude::*;

use crate::config::SEARCH_DEBOUNCE_MS;
use crate::filter::{unique_categories, FilterOutcome};
use crate::models::SortMode;
use crate::store::{
    store_clear_filters, store_set_category, store_set_search, store_set_sort, ListStateStoreFields, ListStore,
};
use crate::timing::Debouncer;

#[component]
pub fn FilterBar(
    store: ListStore,
    /// Label of the "no filter" option, e.g. "All Responsibilities"
    #[prop(into)] all_label: String,
    #[prop(into, default = "Search...".to_string())] placeholder: String,
    /// Show the name sort dropdown
    #[prop(default = true)] sortable: bool,
) -> impl IntoView {
    let debouncer = Debouncer::new(SEARCH_DEBOUNCE_MS);
    // What the user typed; the store only sees it after the debounce
    let (search_text, set_search_text) = signal(String::new());

    let categories = Memo::new(move |_| unique_categories(&store.rows().read()));

    let on_search = move |term: String| {
        set_search_text.set(term.clone());
        debouncer.call(move || store_set_search(&store, term));
    };

    let on_clear = move |_| {
        debouncer.cancel();
        set_search_text.set(String::new());
        store_clear_filters(&store);
    };

    view! {
        <div class="filters-container">
            <select
                id="categoryFilter"
                class="filter-select"
                prop:value=move || store.filter().read().category_filter.clone().unwrap_or_default()
                on:change=move |ev| store_set_category(&store, event_target_value(&ev))
            >
                <option value="">{all_label}</option>
                {move || categories.get().into_iter().map(|category| {
                    let value = category.clone();
                    view! { <option value=value>{category}</option> }
                }).collect_view()}
            </select>

            <input
                id="searchItems"
                type="text"
                class="search-input"
                placeholder=placeholder
                autocomplete="off"
                prop:value=move || search_text.get()
                on:input=move |ev| on_search(event_target_value(&ev))
            />

            <Show when=move || sortable>
                <select
                    id="sortItems"
                    class="filter-select"
                    prop:value=move || store.filter().read().sort_mode.as_value()
                    on:change=move |ev| store_set_sort(&store, SortMode::from_value(&event_target_value(&ev)))
                >
                    <option value="">"Default order"</option>
                    <option value="name-asc">"Name (A-Z)"</option>
                    <option value="name-desc">"Name (Z-A)"</option>
                </select>
            </Show>

            <button type="button" class="btn btn-clear-filters" on:click=on_clear>
                "Clear"
            </button>
        </div>
    }
}

/// "Showing N of M" line under a filtered list
#[component]
pub fn FilterCount(
    outcome: Memo<FilterOutcome>,
    #[prop(into)] noun: String,
) -> impl IntoView {
    view! {
        <p class="item-count">
            "Showing "
            <span id="filteredItemCount">{move || outcome.with(FilterOutcome::visible_count)}</span>
            " of "
            <span id="totalItemCount">{move || outcome.with(|o| o.total)}</span>
            " " {noun}
        </p>
    }
}
