//! Responsibility Management Page
//!
//! A manager's view of one responsibility: its description, its items, and
//! the pending item requests. Every change is a form post answered with a
//! redirect back to this page.

use leptos::ev;
use leptos::prelude::*;
use serde::Deserialize;

use crate::components::{CharCounter, ConfirmDialog, ModalFrame, TabBar, TabPanel};
use crate::config::endpoints;
use crate::context::use_app_context;
use crate::dom::{query_param, submit_post_form};
use crate::modal::ModalController;
use crate::validation::{validate_description, validate_item_name, validate_status, RESPONSIBILITY_DESCRIPTION_COUNTER};

const ITEM_STATUSES: [&str; 3] = ["Available", "In Use", "Unavailable"];

const ITEMS_TAB: &str = "items";
const REQUESTS_TAB: &str = "requests";

#[derive(Debug, Clone, Default, Deserialize)]
struct ManagedItem {
    id: u64,
    name: String,
    #[serde(default)]
    status: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ItemRequest {
    id: u64,
    user_name: String,
    item_name: String,
    /// "request" or "return"
    request_type: String,
}

impl ItemRequest {
    fn is_return(&self) -> bool {
        self.request_type.eq_ignore_ascii_case("return")
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponsibilityManageData {
    #[serde(default)]
    responsibility_name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    items: Vec<ManagedItem>,
    #[serde(default)]
    requests: Vec<ItemRequest>,
}

/// Action waiting in the shared confirmation modal
#[derive(Debug, Clone, PartialEq)]
struct PendingConfirmation {
    title: &'static str,
    message: String,
    button_text: &'static str,
    button_class: &'static str,
    /// Last path segment of the form post
    action: &'static str,
    field: (&'static str, u64),
    /// Redirect back to the requests tab
    from_requests: bool,
}

impl PendingConfirmation {
    fn delete_item(item_id: u64, item_name: &str) -> Self {
        Self {
            title: "Delete Item",
            message: format!("Are you sure you want to delete \"{}\"? This action cannot be undone.", item_name),
            button_text: "Delete",
            button_class: "btn btn-remove",
            action: "delete-item",
            field: ("itemId", item_id),
            from_requests: false,
        }
    }

    fn approve(request: &ItemRequest) -> Self {
        let verb = if request.is_return() { "accept return of" } else { "give" };
        Self {
            title: "Approve Request",
            message: format!(
                "Are you sure you want to approve {}'s request to {} \"{}\"?",
                request.user_name, verb, request.item_name
            ),
            button_text: "Approve Request",
            button_class: "btn btn-assign",
            action: "approve-request",
            field: ("requestId", request.id),
            from_requests: true,
        }
    }

    fn deny(request: &ItemRequest) -> Self {
        let what = if request.is_return() { "return request for" } else { "request for" };
        Self {
            title: "Deny Request",
            message: format!(
                "Are you sure you want to deny {}'s {} \"{}\"?",
                request.user_name, what, request.item_name
            ),
            button_text: "Deny Request",
            button_class: "btn btn-remove",
            action: "deny-request",
            field: ("requestId", request.id),
            from_requests: true,
        }
    }

    fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![(self.field.0, self.field.1.to_string())];
        if self.from_requests {
            fields.push(("activeTab", REQUESTS_TAB.to_string()));
        }
        fields
    }
}

/// Item being added (`item_id` empty) or edited
#[derive(Debug, Clone, PartialEq, Default)]
struct ItemDraft {
    item_id: Option<u64>,
    name: String,
    status: String,
}

#[component]
pub fn ResponsibilityManagePage() -> impl IntoView {
    let ctx = use_app_context();
    let data: ResponsibilityManageData = ctx.page_data();
    let Some(responsibility_id) = ctx.responsibility_id() else {
        log::warn!("responsibility page without a responsibility id");
        return ().into_any();
    };

    let initial_tab = match query_param("tab").as_deref() {
        Some(REQUESTS_TAB) => REQUESTS_TAB,
        _ => ITEMS_TAB,
    };
    let active = RwSignal::new(initial_tab);

    let confirmation = ModalController::<PendingConfirmation>::new();
    let item_modal = ModalController::<ItemDraft>::new();
    let description_open = RwSignal::new(false);
    let description = StoredValue::new(data.description.clone());

    let request_count = data.requests.len();

    let items = data
        .items
        .into_iter()
        .map(|item| {
            let draft = ItemDraft { item_id: Some(item.id), name: item.name.clone(), status: item.status.clone() };
            let delete = PendingConfirmation::delete_item(item.id, &item.name);
            view! {
                <tr class="item-row">
                    <td class="item-name">{item.name}</td>
                    <td class="item-status">{item.status}</td>
                    <td class="item-actions">
                        <button type="button" class="btn btn-edit" on:click=move |_| item_modal.open(draft.clone())>
                            "Edit"
                        </button>
                        <button type="button" class="btn btn-remove" on:click=move |_| confirmation.open(delete.clone())>
                            "Delete"
                        </button>
                    </td>
                </tr>
            }
        })
        .collect_view();

    let requests = data
        .requests
        .into_iter()
        .map(|request| {
            let approve = PendingConfirmation::approve(&request);
            let deny = PendingConfirmation::deny(&request);
            let kind = if request.is_return() { "Return" } else { "Request" };
            view! {
                <tr class="request-row">
                    <td>{request.user_name}</td>
                    <td>{request.item_name}</td>
                    <td class="request-type">{kind}</td>
                    <td class="request-actions">
                        <button type="button" class="btn btn-assign" on:click=move |_| confirmation.open(approve.clone())>
                            "Approve"
                        </button>
                        <button type="button" class="btn btn-remove" on:click=move |_| confirmation.open(deny.clone())>
                            "Deny"
                        </button>
                    </td>
                </tr>
            }
        })
        .collect_view();

    let on_confirm = move |_: ()| {
        if let Some(pending) = confirmation.pending() {
            submit_post_form(
                &endpoints::responsibility_manage(responsibility_id, pending.action),
                &pending.form_fields(),
            );
            confirmation.close();
        }
    };

    view! {
        <div class="responsibility-manage-page" data-responsibility-id=responsibility_id.to_string()>
            <header class="responsibility-header">
                <h2>{data.responsibility_name}</h2>
                <p class="responsibility-description">
                    {move || {
                        let text = description.get_value();
                        if text.is_empty() { "No description".to_string() } else { text }
                    }}
                </p>
                <button type="button" class="btn btn-edit" on:click=move |_| description_open.set(true)>
                    "Edit Description"
                </button>
            </header>

            <TabBar tabs=vec![(ITEMS_TAB, "Items"), (REQUESTS_TAB, "Requests")] active=active />

            <TabPanel id=ITEMS_TAB active=active>
                <button
                    type="button"
                    class="btn btn-add-item"
                    on:click=move |_| item_modal.open(ItemDraft::default())
                >
                    "+ Add Item"
                </button>
                <table class="items-table">
                    <tbody>{items}</tbody>
                </table>
            </TabPanel>

            <TabPanel id=REQUESTS_TAB active=active>
                {(request_count == 0).then(|| view! { <p class="no-requests">"No pending requests."</p> })}
                <table class="requests-table">
                    <tbody>{requests}</tbody>
                </table>
            </TabPanel>

            <ItemFormModal responsibility_id=responsibility_id modal=item_modal />
            <EditDescriptionModal responsibility_id=responsibility_id description=description open=description_open />

            <ConfirmDialog
                id="confirmationModal"
                title=Signal::derive(move || confirmation.pending().map(|p| p.title).unwrap_or_default().to_string())
                open=Signal::derive(move || confirmation.is_open())
                message=Signal::derive(move || confirmation.pending().map(|p| p.message).unwrap_or_default())
                confirm_label=Signal::derive(move || {
                    confirmation.pending().map(|p| p.button_text).unwrap_or("Confirm").to_string()
                })
                button_class=Signal::derive(move || {
                    confirmation.pending().map(|p| p.button_class).unwrap_or("btn btn-confirm").to_string()
                })
                on_confirm=on_confirm
                on_cancel=move |_| confirmation.close()
            />
        </div>
    }
    .into_any()
}

/// Add-item and edit-item modal
#[component]
fn ItemFormModal(responsibility_id: u64, modal: ModalController<ItemDraft>) -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (status, set_status) = signal(String::new());
    let (error, set_error) = signal(None::<String>);

    Effect::new(move |_| {
        if let Some(draft) = modal.pending() {
            set_name.set(draft.name);
            set_status.set(draft.status);
            set_error.set(None);
        }
    });

    let is_edit = move || modal.pending().is_some_and(|d| d.item_id.is_some());

    let on_save = move |_| {
        let Some(draft) = modal.pending() else {
            return;
        };
        let checked = validate_item_name(&name.get_untracked())
            .and_then(|name| validate_status(&status.get_untracked()).map(|status| (name, status)));
        let (item_name, item_status) = match checked {
            Ok(fields) => fields,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };
        set_error.set(None);
        let mut fields = vec![("itemName", item_name), ("status", item_status)];
        let action = match draft.item_id {
            Some(item_id) => {
                fields.insert(0, ("itemId", item_id.to_string()));
                "update-item"
            }
            None => "add-item",
        };
        submit_post_form(&endpoints::responsibility_manage(responsibility_id, action), &fields);
    };

    view! {
        <ModalFrame
            id="itemModal"
            open=Signal::derive(move || modal.is_open())
            on_close=move |_| modal.close()
        >
            <h3 class="modal-title">{move || if is_edit() { "Edit Item" } else { "Add Item" }}</h3>
            <label for="itemName">"Item Name"</label>
            <input
                id="itemName"
                type="text"
                class="modal-input"
                maxlength="32"
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <label for="itemStatus">"Status"</label>
            <select
                id="itemStatus"
                class="modal-select"
                prop:value=move || status.get()
                on:change=move |ev| set_status.set(event_target_value(&ev))
            >
                <option value="">"Select status..."</option>
                {ITEM_STATUSES.iter().map(|s| view! { <option value=*s>{*s}</option> }).collect_view()}
            </select>
            <div class="modal-error" class:hidden=move || error.with(Option::is_none)>
                {move || error.get()}
            </div>
            <div class="modal-actions">
                <button type="button" class="btn btn-cancel" on:click=move |_| modal.close()>
                    "Cancel"
                </button>
                <button type="button" class="btn btn-confirm" on:click=on_save>
                    {move || if is_edit() { "Save Changes" } else { "Add Item" }}
                </button>
            </div>
        </ModalFrame>
    }
}

#[component]
fn EditDescriptionModal(
    responsibility_id: u64,
    description: StoredValue<String>,
    open: RwSignal<bool>,
) -> impl IntoView {
    let (text, set_text) = signal(String::new());
    let (error, set_error) = signal(None::<String>);

    Effect::new(move |_| {
        if open.get() {
            set_text.set(description.get_value());
            set_error.set(None);
        }
    });

    let on_save = move |_: ev::MouseEvent| {
        let value = text.get_untracked();
        if let Err(e) = validate_description(&value) {
            set_error.set(Some(e.to_string()));
            return;
        }
        submit_post_form(
            &endpoints::responsibility_manage(responsibility_id, "update-description"),
            &[("description", value)],
        );
    };

    view! {
        <ModalFrame
            id="editDescriptionModal"
            title="Edit Description"
            open=open
            on_close=move |_| open.set(false)
        >
            <textarea
                id="descriptionText"
                class="modal-textarea"
                prop:value=move || text.get()
                on:input=move |ev| set_text.set(event_target_value(&ev))
            />
            <CharCounter text=text thresholds=RESPONSIBILITY_DESCRIPTION_COUNTER />
            <div id="editDescriptionError" class="modal-error" class:hidden=move || error.with(Option::is_none)>
                {move || error.get()}
            </div>
            <div class="modal-actions">
                <button type="button" class="btn btn-cancel" on:click=move |_| open.set(false)>
                    "Cancel"
                </button>
                <button type="button" class="btn btn-confirm" on:click=on_save>
                    "Save"
                </button>
            </div>
        </ModalFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(request_type: &str) -> ItemRequest {
        ItemRequest {
            id: 9,
            user_name: "Dana".to_string(),
            item_name: "Tripod".to_string(),
            request_type: request_type.to_string(),
        }
    }

    #[test]
    fn test_approve_wording_follows_request_type() {
        assert_eq!(
            PendingConfirmation::approve(&request("request")).message,
            "Are you sure you want to approve Dana's request to give \"Tripod\"?"
        );
        assert_eq!(
            PendingConfirmation::approve(&request("return")).message,
            "Are you sure you want to approve Dana's request to accept return of \"Tripod\"?"
        );
    }

    #[test]
    fn test_deny_wording_follows_request_type() {
        assert_eq!(
            PendingConfirmation::deny(&request("return")).message,
            "Are you sure you want to deny Dana's return request for \"Tripod\"?"
        );
    }

    #[test]
    fn test_request_decisions_return_to_requests_tab() {
        let fields = PendingConfirmation::deny(&request("request")).form_fields();
        assert_eq!(
            fields,
            vec![("requestId", "9".to_string()), ("activeTab", "requests".to_string())]
        );

        let fields = PendingConfirmation::delete_item(4, "Tripod").form_fields();
        assert_eq!(fields, vec![("itemId", "4".to_string())]);
    }
}
