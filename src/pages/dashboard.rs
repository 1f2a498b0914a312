//! Dashboard Page
//!
//! Event cards with the chief's create-event form and delete confirmation.

use leptos::ev;
use leptos::prelude::*;
use serde::Deserialize;

use crate::components::ConfirmDialog;
use crate::config::{endpoints, UserRole};
use crate::context::use_app_context;
use crate::dom::submit_post_form;
use crate::modal::ModalController;
use crate::models::EventSummary;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DashboardData {
    #[serde(default)]
    events: Vec<EventSummary>,
    /// Set when the server rejected the last create-event post
    #[serde(default)]
    form_error: Option<String>,
    #[serde(default)]
    event_name: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Clone, PartialEq)]
struct DeleteTarget {
    event_id: u64,
    event_name: String,
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_app_context();
    let data: DashboardData = ctx.page_data();
    let is_chief = ctx.role() == UserRole::Chief;

    let delete_modal = ModalController::<DeleteTarget>::new();
    // A rejected create keeps the form open with what was typed
    let form_open = RwSignal::new(data.form_error.is_some());
    let form_error = RwSignal::new(data.form_error);
    let (event_name, set_event_name) = signal(data.event_name);
    let (description, set_description) = signal(data.description);

    let hide_form = move || {
        form_open.set(false);
        form_error.set(None);
        set_event_name.set(String::new());
        set_description.set(String::new());
    };

    let _ = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && form_open.get_untracked() {
            hide_form();
        }
    });

    let is_empty = data.events.is_empty();
    let cards = data
        .events
        .into_iter()
        .map(|event| {
            let target = DeleteTarget { event_id: event.id, event_name: event.name.clone() };
            view! {
                <div class="event-card">
                    <a href=format!("/event/view/{}", event.id) class="event-link">
                        <h3 class="event-name">{event.name}</h3>
                    </a>
                    <span class="event-status">{event.status}</span>
                    <p class="event-description">{event.description.unwrap_or_default()}</p>
                    {is_chief.then(|| view! {
                        <button
                            type="button"
                            class="btn btn-delete"
                            on:click=move |_| delete_modal.open(target.clone())
                        >
                            "Delete"
                        </button>
                    })}
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="dashboard-page">
            {is_chief.then(|| view! {
                <button
                    id="createEventBtn"
                    type="button"
                    class="btn btn-create"
                    class:hidden=move || form_open.get()
                    on:click=move |_| form_open.set(true)
                >
                    "+ Create Event"
                </button>

                <div id="eventFormContainer" class="event-form-container" class:show=move || form_open.get()>
                    <form method="post" action=endpoints::CREATE_EVENT>
                        <input
                            id="eventName"
                            name="eventName"
                            type="text"
                            placeholder="Event name"
                            prop:value=move || event_name.get()
                            on:input=move |ev| set_event_name.set(event_target_value(&ev))
                        />
                        <textarea
                            id="description"
                            name="description"
                            placeholder="Description (optional)"
                            prop:value=move || description.get()
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                        />
                        {move || form_error.get().map(|e| view! { <div class="event-form-error">{e}</div> })}
                        <div class="form-actions">
                            <button type="button" class="btn btn-cancel" on:click=move |_| hide_form()>
                                "Cancel"
                            </button>
                            <button type="submit" class="btn btn-confirm">"Create"</button>
                        </div>
                    </form>
                </div>
            })}

            {if is_empty {
                view! { <p class="no-events">"No events yet."</p> }.into_any()
            } else {
                view! { <div class="events-grid">{cards}</div> }.into_any()
            }}

            <ConfirmDialog
                id="deleteModal"
                title="Delete Event".to_string()
                open=Signal::derive(move || delete_modal.is_open())
                message=Signal::derive(move || {
                    delete_modal
                        .pending()
                        .map(|t| format!("Are you sure you want to delete \"{}\"? This action cannot be undone.", t.event_name))
                        .unwrap_or_default()
                })
                confirm_label="Delete".to_string()
                button_class="btn btn-danger".to_string()
                on_confirm=move |_| {
                    if let Some(target) = delete_modal.pending() {
                        submit_post_form(endpoints::DELETE_EVENT, &[("eventId", target.event_id.to_string())]);
                    }
                }
                on_cancel=move |_| delete_modal.close()
            />
        </div>
    }
}
