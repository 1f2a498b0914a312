//! Toast Host Component
//!
//! The single toast element of the page.

use leptos::ev;
use leptos::prelude::*;

use crate::toast::Toaster;

#[component]
pub fn ToastHost(toaster: Toaster) -> impl IntoView {
    let state = toaster.state();

    // Escape dismisses the toast
    let _ = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            toaster.hide();
        }
    });

    view! {
        <div id="toast" class=move || state.with(|s| s.class()) role="status" aria-live="polite">
            <span id="toastMessage">{move || state.with(|s| s.message.clone())}</span>
            <button id="toastClose" type="button" aria-label="Close" on:click=move |_| toaster.hide()>
                "×"
            </button>
        </div>
    }
}
