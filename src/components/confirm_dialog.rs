//! Confirm Dialog Component
//!
//! Yes/no modal with a message and a confirm button that shows a pending
//! label while its action runs.

use leptos::prelude::*;

use crate::components::ModalFrame;

/// Confirmation modal
///
/// # Arguments
/// * `message` - Prompt shown in the body
/// * `busy` - True while the confirmed action runs; disables the button
/// * `on_confirm` / `on_cancel` - Button callbacks; `on_cancel` also handles
///   overlay click and Escape
#[component]
pub fn ConfirmDialog(
    #[prop(into)] id: String,
    #[prop(into)] title: Signal<String>,
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] message: Signal<String>,
    #[prop(into)] confirm_label: Signal<String>,
    #[prop(into, default = Signal::stored("Processing...".to_string()))] pending_label: Signal<String>,
    #[prop(into, default = Signal::stored("btn btn-confirm".to_string()))] button_class: Signal<String>,
    #[prop(into, default = Signal::stored(false))] busy: Signal<bool>,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <ModalFrame id=id open=open on_close=on_cancel>
            <h3 class="modal-title">{move || title.get()}</h3>
            <p class="modal-message">{move || message.get()}</p>
            <div class="modal-actions">
                <button type="button" class="btn btn-cancel" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
                <button
                    type="button"
                    class=move || button_class.get()
                    disabled=move || busy.get()
                    on:click=move |_| on_confirm.run(())
                >
                    {move || if busy.get() { pending_label.get() } else { confirm_label.get() }}
                </button>
            </div>
        </ModalFrame>
    }
}
