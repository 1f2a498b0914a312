//! Tab Bar Component
//!
//! Row of tab buttons; the active tab id lives in the caller's signal.

use leptos::prelude::*;

#[component]
pub fn TabBar(
    /// (tab id, label) pairs
    tabs: Vec<(&'static str, &'static str)>,
    active: RwSignal<&'static str>,
    #[prop(optional, into)] on_switch: Option<Callback<&'static str>>,
) -> impl IntoView {
    view! {
        <div class="tab-bar">
            {tabs.into_iter().map(|(id, label)| {
                let is_active = move || active.get() == id;
                view! {
                    <button
                        type="button"
                        class=move || if is_active() { "tab-button active" } else { "tab-button" }
                        data-tab=id
                        on:click=move |_| {
                            active.set(id);
                            if let Some(cb) = on_switch {
                                cb.run(id);
                            }
                        }
                    >
                        {label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

/// Panel shown only while its tab is active
#[component]
pub fn TabPanel(
    id: &'static str,
    active: RwSignal<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div id=id class="tab-content" class:active=move || active.get() == id>
            {children()}
        </div>
    }
}
