//! Responsibility View Page
//!
//! Read-only item list of one responsibility. Users request available items
//! and return the ones they hold.

use leptos::prelude::*;
use serde::Deserialize;

use crate::api::ItemAction;
use crate::components::{ItemActionDialog, PendingItemAction};
use crate::context::use_app_context;
use crate::modal::ModalController;
use crate::models::InventoryItem;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponsibilityViewData {
    #[serde(default)]
    responsibility_name: String,
    #[serde(default)]
    items: Vec<InventoryItem>,
}

#[component]
pub fn ResponsibilityViewPage() -> impl IntoView {
    let ctx = use_app_context();
    let data: ResponsibilityViewData = ctx.page_data();
    let modal = ModalController::<PendingItemAction>::new();

    let open = move |action: ItemAction, item: &InventoryItem| {
        modal.open(PendingItemAction {
            action,
            item_id: item.id,
            item_name: item.name.clone(),
        });
    };

    let is_empty = data.items.is_empty();
    let rows = data
        .items
        .into_iter()
        .map(|item| {
            let request_item = item.clone();
            let return_item = item.clone();
            view! {
                <div class="item-card">
                    <span class="item-name">{item.name}</span>
                    <span class="item-status">{item.status}</span>
                    {item.can_request.then(|| view! {
                        <button
                            type="button"
                            class="btn btn-request"
                            on:click=move |_| open(ItemAction::Request, &request_item)
                        >
                            "Request"
                        </button>
                    })}
                    {item.can_return.then(|| view! {
                        <button
                            type="button"
                            class="btn btn-return"
                            on:click=move |_| open(ItemAction::Return, &return_item)
                        >
                            "Return"
                        </button>
                    })}
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="responsibility-view-page">
            <h2 class="responsibility-title">{data.responsibility_name}</h2>
            {if is_empty {
                view! { <p class="no-items">"No items in this responsibility."</p> }.into_any()
            } else {
                view! { <div class="items-list">{rows}</div> }.into_any()
            }}
            <ItemActionDialog modal=modal />
        </div>
    }
}
