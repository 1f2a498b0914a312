//! My Items Page
//!
//! Items currently held by the user, filterable by responsibility, each with
//! a return button.

use leptos::prelude::*;
use reactive_stores::Store;
use serde::Deserialize;

use crate::api::ItemAction;
use crate::components::{FilterBar, FilterCount, ItemActionDialog, PendingItemAction};
use crate::context::use_app_context;
use crate::modal::ModalController;
use crate::models::{InventoryItem, ItemRow};
use crate::filter::FilterOutcome;
use crate::store::{store_outcome, ListState};

#[derive(Debug, Clone, Default, Deserialize)]
struct UserItemsData {
    #[serde(default)]
    items: Vec<InventoryItem>,
}

#[component]
pub fn UserItemsPage() -> impl IntoView {
    let ctx = use_app_context();
    let data: UserItemsData = ctx.page_data();

    let rows: Vec<ItemRow> = data
        .items
        .iter()
        .enumerate()
        .map(|(index, item)| ItemRow::new(index, &item.name, &item.responsibility_name))
        .collect();
    let items = StoredValue::new(data.items);
    let store = Store::new(ListState::new(rows));
    let modal = ModalController::<PendingItemAction>::new();

    let outcome = Memo::new(move |_| store_outcome(&store));
    let has_items = move || outcome.with(|o| o.total > 0);
    let show_placeholder = move || outcome.with(FilterOutcome::show_empty_placeholder);

    let on_return = move |item: &InventoryItem| {
        modal.open(PendingItemAction {
            action: ItemAction::Return,
            item_id: item.id,
            item_name: item.name.clone(),
        });
    };

    view! {
        <div class="user-items-page">
            <Show
                when=has_items
                fallback=|| view! { <p class="no-items">"You don't have any items yet."</p> }
            >
                <FilterBar store=store all_label="All Responsibilities" placeholder="Search items..." />
                <FilterCount outcome=outcome noun="items" />

                <div class="items-table-container" class:hidden=show_placeholder>
                    <table class="items-table">
                        <thead>
                            <tr>
                                <th>"Item"</th>
                                <th>"Responsibility"</th>
                                <th>"Status"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || outcome.with(|o| o.visible.clone())
                                key=|index| *index
                                children=move |index| {
                                    let item = items.with_value(|items| items[index].clone());
                                    let name = item.name.clone();
                                    view! {
                                        <tr class="item-row">
                                            <td class="item-name">{name}</td>
                                            <td class="item-responsibility">{item.responsibility_name.clone()}</td>
                                            <td class="item-status">{item.status.clone()}</td>
                                            <td>
                                                <button
                                                    type="button"
                                                    class="btn btn-return"
                                                    on:click=move |_| on_return(&item)
                                                >
                                                    "Return"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>

                <div id="noFilteredItems" class="no-results" class:hidden=move || !show_placeholder()>
                    <p>"No items match your filters."</p>
                </div>
            </Show>

            <ItemActionDialog modal=modal />
        </div>
    }
}
