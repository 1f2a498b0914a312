//! User Info Page
//!
//! Profile details with modals to change the name and the phone number. Both
//! forms post natively; a failed check cancels the submit and shows a toast.

use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use serde::Deserialize;

use crate::components::ModalFrame;
use crate::config::{endpoints, MODAL_FOCUS_DELAY_MS, PHONE_DIGITS};
use crate::context::use_app_context;
use crate::timing::after;
use crate::validation::{validate_person_name, validate_phone};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserInfoData {
    #[serde(default)]
    first_name: String,
    #[serde(default)]
    last_name: String,
    #[serde(default)]
    email_address: String,
    #[serde(default)]
    phone_number: String,
    #[serde(default)]
    role: String,
}

#[component]
pub fn UserInfoPage() -> impl IntoView {
    let ctx = use_app_context();
    let data: UserInfoData = ctx.page_data();

    let name_open = RwSignal::new(false);
    let phone_open = RwSignal::new(false);
    let full_name = format!("{} {}", data.first_name, data.last_name);
    let phone_number = data.phone_number.clone();

    view! {
        <div class="user-info-page">
            <section class="info-section">
                <h3>"Name"</h3>
                <p class="info-value">{full_name}</p>
                <button type="button" class="change-btn" on:click=move |_| name_open.set(true)>
                    "Change"
                </button>
            </section>
            <section class="info-section">
                <h3>"Email"</h3>
                <p class="info-value">{data.email_address}</p>
            </section>
            <section class="info-section">
                <h3>"Phone Number"</h3>
                <p class="info-value">{phone_number}</p>
                <button type="button" class="change-btn" on:click=move |_| phone_open.set(true)>
                    "Change"
                </button>
            </section>
            <section class="info-section">
                <h3>"Role"</h3>
                <p class="info-value">{data.role}</p>
            </section>

            <ChangeNameModal open=name_open first_name=data.first_name last_name=data.last_name />
            <ChangePhoneModal open=phone_open phone_number=data.phone_number />
        </div>
    }
}

/// Focus `input` shortly after its modal opens
fn focus_on_open(open: RwSignal<bool>, input: NodeRef<html::Input>) {
    Effect::new(move |_| {
        if !open.get() {
            return;
        }
        after(MODAL_FOCUS_DELAY_MS, move || {
            if let Some(el) = input.get_untracked() {
                if let Err(e) = el.focus() {
                    log::warn!("focusing modal input failed: {:?}", e);
                }
            }
        });
    });
}

#[component]
fn ChangeNameModal(open: RwSignal<bool>, first_name: String, last_name: String) -> impl IntoView {
    let ctx = use_app_context();
    let (first, set_first) = signal(first_name);
    let (last, set_last) = signal(last_name);
    let first_ref = NodeRef::<html::Input>::new();
    focus_on_open(open, first_ref);

    let on_submit = move |ev: ev::SubmitEvent| {
        if let Err(e) = validate_person_name(&first.get_untracked(), &last.get_untracked()) {
            ev.prevent_default();
            ctx.toaster.error(e.to_string());
        }
    };

    view! {
        <ModalFrame id="nameModal" title="Change Name" open=open on_close=move |_| open.set(false)>
            <form method="post" action=endpoints::CHANGE_NAME on:submit=on_submit>
                <label for="firstName">"First Name"</label>
                <input
                    id="firstName"
                    name="firstName"
                    type="text"
                    maxlength="20"
                    required
                    node_ref=first_ref
                    prop:value=move || first.get()
                    on:input=move |ev| set_first.set(event_target_value(&ev))
                />
                <label for="lastName">"Last Name"</label>
                <input
                    id="lastName"
                    name="lastName"
                    type="text"
                    maxlength="20"
                    required
                    prop:value=move || last.get()
                    on:input=move |ev| set_last.set(event_target_value(&ev))
                />
                <div class="modal-actions">
                    <button type="button" class="cancel-btn" on:click=move |_| open.set(false)>
                        "Cancel"
                    </button>
                    <button type="submit" class="submit-btn">"Save"</button>
                </div>
            </form>
        </ModalFrame>
    }
}

#[component]
fn ChangePhoneModal(open: RwSignal<bool>, phone_number: String) -> impl IntoView {
    let ctx = use_app_context();
    let (phone, set_phone) = signal(phone_number);
    let phone_ref = NodeRef::<html::Input>::new();
    focus_on_open(open, phone_ref);

    let on_submit = move |ev: ev::SubmitEvent| {
        if let Err(e) = validate_phone(&phone.get_untracked()) {
            ev.prevent_default();
            ctx.toaster.error(e.to_string());
        }
    };

    view! {
        <ModalFrame id="phoneModal" title="Change Phone Number" open=open on_close=move |_| open.set(false)>
            <form method="post" action=endpoints::CHANGE_PHONE on:submit=on_submit>
                <label for="newPhoneNumber">"Phone Number"</label>
                <input
                    id="newPhoneNumber"
                    name="phoneNumber"
                    type="tel"
                    inputmode="numeric"
                    maxlength=PHONE_DIGITS.to_string()
                    required
                    node_ref=phone_ref
                    prop:value=move || phone.get()
                    on:input=move |ev| set_phone.set(event_target_value(&ev))
                />
                <div class="modal-actions">
                    <button type="button" class="cancel-btn" on:click=move |_| open.set(false)>
                        "Cancel"
                    </button>
                    <button type="submit" class="submit-btn">"Save"</button>
                </div>
            </form>
        </ModalFrame>
    }
}
