//! Event Detail Page
//!
//! Responsibilities attached to an event, lifecycle transitions and the
//! edit form. Responsibility changes update the list in place; lifecycle
//! changes and edits reload the page.

use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::Deserialize;

use crate::api::{self, LifecycleAction};
use crate::components::{CharCounter, ConfirmDialog, ModalFrame};
use crate::config::{UserRole, ACTION_GUARD_MS, RELOAD_AFTER_TOAST_MS, RELOAD_SILENT_MS};
use crate::context::use_app_context;
use crate::dom::reload_after;
use crate::modal::{ModalController, Outcome};
use crate::models::{EventStatus, EventSummary, ResponsibilityOption, ResponsibilitySummary};
use crate::timing::ActionGuard;
use crate::validation::{validate_event_form, EVENT_DESCRIPTION_COUNTER};

/// Manager badges shown per responsibility before collapsing into "+N more"
const MANAGER_BADGES: usize = 2;

#[derive(Debug, Clone, Default, Deserialize)]
struct EventDetailData {
    #[serde(default)]
    event: Option<EventSummary>,
    #[serde(default)]
    responsibilities: Vec<ResponsibilitySummary>,
}

/// First managers by name, plus how many were left out
fn manager_badges(managers: &[String]) -> (&[String], Option<usize>) {
    if managers.len() > MANAGER_BADGES {
        (&managers[..MANAGER_BADGES], Some(managers.len() - MANAGER_BADGES))
    } else {
        (managers, None)
    }
}

/// (title, message, confirm label) of a lifecycle confirmation
fn lifecycle_prompt(action: LifecycleAction, event_name: &str) -> (&'static str, String, &'static str) {
    match action {
        LifecycleAction::Activate => (
            "Activate Event",
            format!("Are you sure you want to activate \"{}\"? Responsibilities can no longer be changed afterwards.", event_name),
            "Activate",
        ),
        LifecycleAction::SwitchToReturn => (
            "Switch to Return Mode",
            format!("Switch \"{}\" to equipment return mode?", event_name),
            "Switch",
        ),
        LifecycleAction::SwitchToActive => (
            "Switch to Active Mode",
            format!("Switch \"{}\" back to active mode?", event_name),
            "Switch",
        ),
        LifecycleAction::Complete => (
            "Complete Event",
            format!("Are you sure you want to complete \"{}\"? This cannot be undone.", event_name),
            "Complete",
        ),
    }
}

/// Transitions offered in each lifecycle stage
fn available_transitions(status: EventStatus) -> &'static [LifecycleAction] {
    match status {
        EventStatus::NotActive => &[LifecycleAction::Activate],
        EventStatus::Active => &[LifecycleAction::SwitchToReturn],
        EventStatus::EquipmentReturn => &[LifecycleAction::SwitchToActive, LifecycleAction::Complete],
        EventStatus::Completed => &[],
    }
}

#[component]
pub fn EventDetailPage() -> impl IntoView {
    let ctx = use_app_context();
    let data: EventDetailData = ctx.page_data();

    let Some(event) = data.event else {
        log::warn!("event page without event data");
        return ().into_any();
    };
    let event_id = ctx.event_id().unwrap_or(event.id);
    let status = event.status();
    let is_chief = ctx.role() == UserRole::Chief;

    let responsibilities = RwSignal::new(data.responsibilities);
    let event = StoredValue::new(event);

    let lifecycle_modal = ModalController::<LifecycleAction>::new();
    let guard = ActionGuard::new(ACTION_GUARD_MS);
    let remove_modal = ModalController::<ResponsibilitySummary>::new();
    let add_modal = ModalController::<Vec<ResponsibilityOption>>::new();
    let edit_open = RwSignal::new(false);

    let open_lifecycle = move |action: LifecycleAction| {
        if guard.is_busy() {
            return;
        }
        if action == LifecycleAction::Activate && responsibilities.with(Vec::is_empty) {
            ctx.toaster.error("Event must have at least one responsibility before activation");
            return;
        }
        lifecycle_modal.open(action);
    };

    let confirm_lifecycle = move |_: ()| {
        guard.run(|| {
            lifecycle_modal.confirm(ctx.toaster, move |action: LifecycleAction| async move {
                match api::transition_event(event_id, action).await {
                    Ok(()) => match action.success_message() {
                        Some(message) => {
                            reload_after(RELOAD_AFTER_TOAST_MS);
                            Ok(Outcome::Success(message.to_string()))
                        }
                        None => {
                            reload_after(RELOAD_SILENT_MS);
                            Ok(Outcome::Silent)
                        }
                    },
                    Err(e) => Err(e.report(action.network_message())),
                }
            });
        });
    };

    let confirm_remove = move |_: ()| {
        remove_modal.confirm(ctx.toaster, move |target: ResponsibilitySummary| async move {
            match api::remove_event_responsibility(event_id, target.id).await {
                Ok(updated) => {
                    responsibilities.set(updated);
                    Ok(Outcome::Success("Responsibility removed successfully!".to_string()))
                }
                Err(e) => Err(e.report("Error removing responsibility")),
            }
        });
    };

    let lifecycle_buttons = move || {
        available_transitions(status)
            .iter()
            .copied()
            .map(|action| {
                let (title, _, _) = lifecycle_prompt(action, "");
                view! {
                    <button
                        type="button"
                        class="btn btn-lifecycle"
                        data-action=action.path_segment()
                        disabled=move || guard.is_busy()
                        on:click=move |_| open_lifecycle(action)
                    >
                        {title}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <div class="event-detail-page">
            <header class="event-header">
                <h2 class="event-name">{event.with_value(|e| e.name.clone())}</h2>
                <span class="event-status">{event.with_value(|e| e.status.clone())}</span>
                <p class="event-description">
                    {event.with_value(|e| e.description.clone().unwrap_or_else(|| "No description".to_string()))}
                </p>
                <Show when=move || is_chief>
                    <div class="event-actions">
                        {status.is_editable().then(|| view! {
                            <button type="button" class="btn btn-edit" on:click=move |_| edit_open.set(true)>
                                "Edit Event"
                            </button>
                        })}
                        {lifecycle_buttons}
                    </div>
                </Show>
            </header>

            <section class="responsibilities-section">
                <div class="section-header">
                    <h3>"Responsibilities"</h3>
                    {(is_chief && status.is_editable()).then(|| view! {
                        <AddResponsibilityButton event_id=event_id modal=add_modal />
                    })}
                </div>
                <ResponsibilityList
                    responsibilities=responsibilities
                    removable=is_chief && status.is_editable()
                    on_remove=move |resp: ResponsibilitySummary| remove_modal.open(resp)
                />
            </section>

            <AddResponsibilityModal event_id=event_id modal=add_modal responsibilities=responsibilities />

            <ConfirmDialog
                id="removeResponsibilityModal"
                title="Remove Responsibility".to_string()
                open=Signal::derive(move || remove_modal.is_open())
                message=Signal::derive(move || {
                    remove_modal
                        .pending()
                        .map(|r| format!("Remove \"{}\" from this event?", r.name))
                        .unwrap_or_default()
                })
                confirm_label="Remove".to_string()
                button_class="btn btn-danger".to_string()
                busy=Signal::derive(move || remove_modal.is_submitting())
                on_confirm=confirm_remove
                on_cancel=move |_| remove_modal.close()
            />

            <ConfirmDialog
                id="lifecycleModal"
                title=Signal::derive(move || {
                    lifecycle_modal
                        .pending()
                        .map(|action| lifecycle_prompt(action, "").0)
                        .unwrap_or_default()
                        .to_string()
                })
                open=Signal::derive(move || lifecycle_modal.is_open())
                message=Signal::derive(move || {
                    lifecycle_modal
                        .pending()
                        .map(|action| event.with_value(|e| lifecycle_prompt(action, &e.name).1))
                        .unwrap_or_default()
                })
                confirm_label=Signal::derive(move || {
                    lifecycle_modal
                        .pending()
                        .map(|action| lifecycle_prompt(action, "").2)
                        .unwrap_or("Confirm")
                        .to_string()
                })
                pending_label=Signal::derive(move || {
                    lifecycle_modal
                        .pending()
                        .map(|action| action.pending_label())
                        .unwrap_or("Processing...")
                        .to_string()
                })
                busy=Signal::derive(move || lifecycle_modal.is_submitting())
                on_confirm=confirm_lifecycle
                on_cancel=move |_| lifecycle_modal.close()
            />

            <EditEventModal event_id=event_id event=event open=edit_open />
        </div>
    }
    .into_any()
}

#[component]
fn ResponsibilityList(
    responsibilities: RwSignal<Vec<ResponsibilitySummary>>,
    removable: bool,
    #[prop(into)] on_remove: Callback<ResponsibilitySummary>,
) -> impl IntoView {
    view! {
        <div id="responsibilitiesContainer" class="responsibilities-container">
            <Show
                when=move || responsibilities.with(|r| !r.is_empty())
                fallback=|| view! {
                    <div class="no-responsibilities" id="emptyState">"No responsibilities assigned yet"</div>
                }
            >
                <For
                    each=move || responsibilities.get()
                    key=|resp| resp.id
                    children=move |resp| {
                        let (shown, extra) = manager_badges(&resp.managers);
                        let badges = shown
                            .iter()
                            .map(|name| view! { <span class="manager-badge">{name.clone()}</span> })
                            .collect_view();
                        let extra = extra.map(|n| view! {
                            <span class="manager-badge manager-counter">{format!("+{} more", n)}</span>
                        });
                        let has_managers = !resp.managers.is_empty();
                        let target = resp.clone();
                        view! {
                            <div class="responsibility-item">
                                {removable.then(|| view! {
                                    <button
                                        type="button"
                                        class="remove-responsibility-btn"
                                        aria-label="Remove responsibility"
                                        on:click=move |_| on_remove.run(target.clone())
                                    >
                                        "×"
                                    </button>
                                })}
                                <div class="responsibility-name">{resp.name.clone()}</div>
                                <div
                                    class="responsibility-description"
                                    class:no-description=resp.description.is_none()
                                >
                                    {resp.description.clone().unwrap_or_else(|| "No description".to_string())}
                                </div>
                                <div class="responsibility-managers">
                                    {if has_managers {
                                        view! { {badges}{extra} }.into_any()
                                    } else {
                                        view! { <div class="no-managers">"No managers assigned"</div> }.into_any()
                                    }}
                                </div>
                                <div class="responsibility-actions">
                                    <a href=format!("/responsibility/view/{}", resp.id) class="view-responsibility-btn">
                                        "View Details"
                                    </a>
                                </div>
                            </div>
                        }
                    }
                />
            </Show>
        </div>
    }
}

/// Loads the responsibilities that can still be added, then opens the picker
#[component]
fn AddResponsibilityButton(event_id: u64, modal: ModalController<Vec<ResponsibilityOption>>) -> impl IntoView {
    let ctx = use_app_context();
    let loading = RwSignal::new(false);

    let on_click = move |_| {
        if loading.get_untracked() || modal.is_open() {
            return;
        }
        loading.set(true);
        spawn_local(async move {
            match api::list_available_responsibilities(event_id).await {
                Ok(options) if options.is_empty() => ctx.toaster.info(
                    "No responsibilities available to add. All responsibilities are already assigned to this event.",
                ),
                Ok(options) => modal.open(options),
                Err(e) => ctx.toaster.api_error(&e, "Error loading available responsibilities"),
            }
            loading.set(false);
        });
    };

    view! {
        <button
            type="button"
            class="btn btn-add-responsibility"
            disabled=move || loading.get()
            on:click=on_click
        >
            {move || if loading.get() { "Loading..." } else { "+ Add Responsibility" }}
        </button>
    }
}

#[component]
fn AddResponsibilityModal(
    event_id: u64,
    modal: ModalController<Vec<ResponsibilityOption>>,
    responsibilities: RwSignal<Vec<ResponsibilitySummary>>,
) -> impl IntoView {
    let ctx = use_app_context();
    let (selected, set_selected) = signal(String::new());

    Effect::new(move |_| {
        if modal.is_open() {
            set_selected.set(String::new());
        }
    });

    let on_add = move |_| {
        let Ok(responsibility_id) = selected.get_untracked().parse::<u64>() else {
            ctx.toaster.error("Please select a responsibility");
            return;
        };
        modal.confirm(ctx.toaster, move |_options| async move {
            match api::add_event_responsibility(event_id, responsibility_id).await {
                Ok(updated) => {
                    responsibilities.set(updated);
                    Ok(Outcome::Silent)
                }
                Err(e) => Err(e.report("Error adding responsibility")),
            }
        });
    };

    view! {
        <ModalFrame
            id="addResponsibilityModal"
            title="Add Responsibility"
            open=Signal::derive(move || modal.is_open())
            on_close=move |_| modal.close()
        >
            <select
                id="responsibilitySelect"
                class="modal-select"
                prop:value=move || selected.get()
                on:change=move |ev| set_selected.set(event_target_value(&ev))
            >
                <option value="">"Choose a responsibility..."</option>
                {move || modal.pending().unwrap_or_default().into_iter().map(|option| {
                    view! { <option value=option.id.to_string()>{option.name}</option> }
                }).collect_view()}
            </select>
            <div class="modal-actions">
                <button type="button" class="btn btn-cancel" on:click=move |_| modal.close()>
                    "Cancel"
                </button>
                <button
                    type="button"
                    class="btn btn-confirm"
                    disabled=move || modal.is_submitting()
                    on:click=on_add
                >
                    {move || if modal.is_submitting() { "Adding..." } else { "Add" }}
                </button>
            </div>
        </ModalFrame>
    }
}

#[component]
fn EditEventModal(event_id: u64, event: StoredValue<EventSummary>, open: RwSignal<bool>) -> impl IntoView {
    let ctx = use_app_context();
    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let saving = RwSignal::new(false);

    // Prefill from the current event each time the modal opens
    Effect::new(move |_| {
        if open.get() {
            event.with_value(|e| {
                set_name.set(e.name.clone());
                set_description.set(e.description.clone().unwrap_or_default());
            });
            set_error.set(None);
        }
    });

    let close = move || {
        open.set(false);
        set_error.set(None);
    };

    let on_save = move |_| {
        if saving.get_untracked() {
            return;
        }
        let (name, description) =
            match validate_event_form(&name.get_untracked(), &description.get_untracked()) {
                Ok(fields) => fields,
                Err(e) => {
                    set_error.set(Some(e.to_string()));
                    return;
                }
            };
        saving.set(true);
        spawn_local(async move {
            match api::edit_event(event_id, &name, &description).await {
                Ok(()) => {
                    ctx.toaster.success("Event updated successfully!");
                    close();
                    reload_after(RELOAD_AFTER_TOAST_MS);
                }
                Err(e) => set_error.set(Some(e.report("Error updating event"))),
            }
            saving.set(false);
        });
    };

    view! {
        <ModalFrame
            id="editEventModal"
            title="Edit Event"
            open=open
            on_close=move |_| close()
        >
            <label for="editEventName">"Event Name"</label>
            <input
                id="editEventName"
                type="text"
                class="modal-input"
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <label for="editDescription">"Description"</label>
            <textarea
                id="editDescription"
                class="modal-textarea"
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            />
            <CharCounter text=description thresholds=EVENT_DESCRIPTION_COUNTER />
            <div id="editEventError" class="modal-error" class:hidden=move || error.with(Option::is_none)>
                {move || error.get()}
            </div>
            <div class="modal-actions">
                <button type="button" class="btn btn-cancel" on:click=move |_| close()>
                    "Cancel"
                </button>
                <button type="button" class="btn btn-confirm" disabled=move || saving.get() on:click=on_save>
                    {move || if saving.get() { "Saving..." } else { "Save Changes" }}
                </button>
            </div>
        </ModalFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_manager_badges_collapse_after_two() {
        let managers = names(&["Ana", "Ben", "Cleo", "Dov"]);
        let (shown, extra) = manager_badges(&managers);
        assert_eq!(shown, &managers[..2]);
        assert_eq!(extra, Some(2));

        let managers = names(&["Ana", "Ben"]);
        let (shown, extra) = manager_badges(&managers);
        assert_eq!(shown.len(), 2);
        assert_eq!(extra, None);
    }

    #[test]
    fn test_transitions_follow_lifecycle() {
        assert_eq!(available_transitions(EventStatus::NotActive), &[LifecycleAction::Activate]);
        assert_eq!(available_transitions(EventStatus::Active), &[LifecycleAction::SwitchToReturn]);
        assert_eq!(
            available_transitions(EventStatus::EquipmentReturn),
            &[LifecycleAction::SwitchToActive, LifecycleAction::Complete]
        );
        assert!(available_transitions(EventStatus::Completed).is_empty());
    }

    #[test]
    fn test_lifecycle_prompt_names_event() {
        let (title, message, label) = lifecycle_prompt(LifecycleAction::Complete, "Spring Gala");
        assert_eq!(title, "Complete Event");
        assert!(message.contains("\"Spring Gala\""));
        assert_eq!(label, "Complete");
    }
}
