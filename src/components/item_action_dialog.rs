//! Item Action Dialog Component
//!
//! Confirms an item request or return. On success the server's message is
//! stashed and the page reloads to pick up the new item state.

use leptos::prelude::*;

use crate::api::{self, ItemAction};
use crate::components::ConfirmDialog;
use crate::context::use_app_context;
use crate::dom;
use crate::modal::{ModalController, Outcome};
use crate::models::ToastKind;

/// Item the user is about to request or return
#[derive(Debug, Clone, PartialEq)]
pub struct PendingItemAction {
    pub action: ItemAction,
    pub item_id: u64,
    pub item_name: String,
}

#[component]
pub fn ItemActionDialog(modal: ModalController<PendingItemAction>) -> impl IntoView {
    let ctx = use_app_context();

    let message = Signal::derive(move || {
        modal
            .pending()
            .map(|p| p.action.prompt(&p.item_name))
            .unwrap_or_default()
    });
    let confirm_label = Signal::derive(move || {
        match modal.pending().map(|p| p.action) {
            Some(ItemAction::Return) => "Return",
            _ => "Request",
        }
        .to_string()
    });

    let pending_label = Signal::derive(move || {
        modal
            .pending()
            .map(|p| p.action.pending_label())
            .unwrap_or("Processing...")
            .to_string()
    });

    let on_confirm = move |_: ()| {
        modal.confirm(ctx.toaster, |pending: PendingItemAction| async move {
            match api::submit_item_action(pending.action, pending.item_id).await {
                Ok(message) => {
                    dom::stash_flash(&message, ToastKind::Success);
                    dom::reload_page();
                    Ok(Outcome::Silent)
                }
                Err(e) => Err(e.report("An error occurred while processing your request")),
            }
        });
    };

    view! {
        <ConfirmDialog
            id="itemActionModal"
            title="Please Confirm".to_string()
            open=Signal::derive(move || modal.is_open())
            message=message
            confirm_label=confirm_label
            pending_label=pending_label
            busy=Signal::derive(move || modal.is_submitting())
            on_confirm=on_confirm
            on_cancel=move |_| modal.close()
        />
    }
}
