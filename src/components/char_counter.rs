//! Character Counter Component

use leptos::prelude::*;

use crate::validation::{counter_text, CounterThresholds};

/// "n/200 characters" under a description field, coloured near the limit
#[component]
pub fn CharCounter(
    #[prop(into)] text: Signal<String>,
    thresholds: CounterThresholds,
) -> impl IntoView {
    let class = move || text.with(|t| thresholds.level(t.chars().count()).class());
    view! {
        <div class=class>{move || text.with(|t| counter_text(t))}</div>
    }
}
