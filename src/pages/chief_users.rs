//! Chief User List Page
//!
//! All users with a role filter and name search. The chief assigns a
//! responsibility to a user or takes it away; both are plain form posts.

use leptos::ev;
use leptos::prelude::*;
use reactive_stores::Store;
use serde::Deserialize;

use crate::components::{ConfirmDialog, FilterBar, ModalFrame};
use crate::config::endpoints;
use crate::context::use_app_context;
use crate::dom::submit_post_form;
use crate::modal::ModalController;
use crate::filter::FilterOutcome;
use crate::models::{ItemRow, SearchScope, UserSummary};
use crate::store::{store_outcome, ListState};
use crate::validation::validate_responsibility_name;

#[derive(Debug, Clone, Default, Deserialize)]
struct ChiefUsersData {
    #[serde(default)]
    users: Vec<UserSummary>,
}

/// User targeted by the assign or remove modal
#[derive(Debug, Clone, PartialEq)]
struct UserTarget {
    user_id: u64,
    user_name: String,
    responsibility_name: Option<String>,
}

impl From<&UserSummary> for UserTarget {
    fn from(user: &UserSummary) -> Self {
        Self {
            user_id: user.id,
            user_name: user.full_name.clone(),
            responsibility_name: user.responsibility_name.clone(),
        }
    }
}

#[component]
pub fn ChiefUsersPage() -> impl IntoView {
    let ctx = use_app_context();
    let data: ChiefUsersData = ctx.page_data();

    // The role is the dropdown category; the search box only looks at names
    let rows: Vec<ItemRow> = data
        .users
        .iter()
        .enumerate()
        .map(|(index, user)| ItemRow::new(index, &user.full_name, &user.role))
        .collect();
    let users = StoredValue::new(data.users);
    let store = Store::new(ListState::with_search_scope(rows, SearchScope::NameOnly));

    let assign_modal = ModalController::<UserTarget>::new();
    let remove_modal = ModalController::<UserTarget>::new();

    let outcome = Memo::new(move |_| store_outcome(&store));
    let total = move || outcome.with(|o| o.total);
    let showing = move || {
        let count = outcome.with(FilterOutcome::visible_count);
        (count < total()).then(|| format!(" (Showing {})", count))
    };
    let show_placeholder = move || outcome.with(FilterOutcome::show_empty_placeholder);

    view! {
        <div class="chief-users-page">
            <h2>
                "Users "
                <span id="totalUserCount">{move || format!("({})", total())}</span>
                <span id="filteredUserCount">{showing}</span>
            </h2>

            <FilterBar store=store all_label="All Roles" placeholder="Search users..." sortable=false />

            <ul class="user-list">
                <For
                    each=move || outcome.with(|o| o.visible.clone())
                    key=|index| *index
                    children=move |index| {
                        let user = users.with_value(|users| users[index].clone());
                        let target = UserTarget::from(&user);
                        view! {
                            <li class="user-item">
                                <span class="user-name">{user.full_name.clone()}</span>
                                <span class="user-role">{user.role.clone()}</span>
                                {match user.responsibility_name.clone() {
                                    Some(name) => view! {
                                        <span class="user-responsibility">{name}</span>
                                        <button
                                            type="button"
                                            class="btn btn-remove"
                                            on:click=move |_| remove_modal.open(target.clone())
                                        >
                                            "Remove"
                                        </button>
                                    }.into_any(),
                                    None => view! {
                                        <button
                                            type="button"
                                            class="btn btn-assign"
                                            on:click=move |_| assign_modal.open(target.clone())
                                        >
                                            "Assign"
                                        </button>
                                    }.into_any(),
                                }}
                            </li>
                        }
                    }
                />
            </ul>

            <div id="noFilteredUsers" class="no-results" class:show=show_placeholder>
                <h3>"No users found"</h3>
                <p>"Try adjusting your filters or search query."</p>
            </div>

            <AssignResponsibilityModal modal=assign_modal />
            <ConfirmDialog
                id="removeModal"
                title="Remove Responsibility".to_string()
                open=Signal::derive(move || remove_modal.is_open())
                message=Signal::derive(move || {
                    remove_modal
                        .pending()
                        .map(|t| format!(
                            "Remove responsibility from: {} (Responsibility: {})",
                            t.user_name,
                            t.responsibility_name.unwrap_or_default()
                        ))
                        .unwrap_or_default()
                })
                confirm_label="Remove".to_string()
                button_class="btn btn-danger".to_string()
                on_confirm=move |_| {
                    if let Some(target) = remove_modal.pending() {
                        submit_post_form(
                            endpoints::REMOVE_RESPONSIBILITY,
                            &[("userId", target.user_id.to_string())],
                        );
                    }
                }
                on_cancel=move |_| remove_modal.close()
            />
        </div>
    }
}

#[component]
fn AssignResponsibilityModal(modal: ModalController<UserTarget>) -> impl IntoView {
    let ctx = use_app_context();
    let (name, set_name) = signal(String::new());

    // A fresh modal starts with an empty input
    Effect::new(move |_| {
        if modal.is_open() {
            set_name.set(String::new());
        }
    });

    let confirm = move || {
        let Some(target) = modal.pending() else {
            return;
        };
        match validate_responsibility_name(&name.get_untracked()) {
            Ok(responsibility_name) => submit_post_form(
                endpoints::ASSIGN_RESPONSIBILITY,
                &[
                    ("userId", target.user_id.to_string()),
                    ("responsibilityName", responsibility_name),
                ],
            ),
            Err(e) => ctx.toaster.error(e.to_string()),
        }
    };

    let on_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            confirm();
        }
    };

    view! {
        <ModalFrame
            id="assignModal"
            title="Assign Responsibility"
            open=Signal::derive(move || modal.is_open())
            on_close=move |_| modal.close()
        >
            <p class="modal-message">
                {move || modal.pending().map(|t| format!("Assign responsibility to: {}", t.user_name))}
            </p>
            <input
                id="responsibilityName"
                type="text"
                class="modal-input"
                placeholder="Responsibility name"
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
                on:keydown=on_keydown
            />
            <div class="modal-actions">
                <button type="button" class="btn btn-cancel" on:click=move |_| modal.close()>
                    "Cancel"
                </button>
                <button type="button" class="btn btn-confirm" on:click=move |_| confirm()>
                    "Assign"
                </button>
            </div>
        </ModalFrame>
    }
}
