//! Modal Frame Component
//!
//! Overlay + dialog box shared by every modal. Clicking the overlay itself
//! or pressing Escape calls `on_close`.

use leptos::ev;
use leptos::prelude::*;

#[component]
pub fn ModalFrame(
    #[prop(into)] id: String,
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(optional, into)] title: Option<String>,
    children: Children,
) -> impl IntoView {
    let _ = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && open.get_untracked() {
            on_close.run(());
        }
    });

    // Only a click that lands on the overlay, not inside the dialog
    let on_overlay_click = move |ev: web_sys::MouseEvent| {
        if ev.target() == ev.current_target() {
            on_close.run(());
        }
    };

    view! {
        <div id=id class="modal" class:show=move || open.get() on:click=on_overlay_click>
            <div class="modal-content" role="dialog" aria-modal="true">
                <button type="button" class="modal-close" aria-label="Close" on:click=move |_| on_close.run(())>
                    "×"
                </button>
                {title.map(|t| view! { <h3 class="modal-title">{t}</h3> })}
                {children()}
            </div>
        </div>
    }
}
