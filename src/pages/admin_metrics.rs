//! Admin Metrics Page
//!
//! Three tabs of pie charts. All counts load on page start; a tab's chart is
//! drawn the first time the tab is shown with its data available.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::charts::{pie_slices, ChartSpec, PieChart, CHART_SPECS};
use crate::components::{TabBar, TabPanel};
use crate::config::CHART_DRAW_DELAY_MS;
use crate::models::CountSnapshot;
use crate::timing::after;

#[component]
pub fn AdminMetricsPage() -> impl IntoView {
    let active = RwSignal::new(CHART_SPECS[0].tab);
    let tabs = CHART_SPECS.iter().map(|spec| (spec.tab, spec.title)).collect::<Vec<_>>();

    view! {
        <div class="admin-metrics-page">
            <TabBar tabs=tabs active=active />
            {CHART_SPECS
                .into_iter()
                .map(|spec| view! {
                    <TabPanel id=spec.tab active=active>
                        <MetricsChart spec=spec active=active />
                    </TabPanel>
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn MetricsChart(spec: ChartSpec, active: RwSignal<&'static str>) -> impl IntoView {
    let snapshot = RwSignal::new(None::<CountSnapshot>);
    let canvas_ref = NodeRef::<html::Canvas>::new();
    let chart = StoredValue::new_local(None::<PieChart>);
    let scheduled = StoredValue::new(false);

    spawn_local(async move {
        match api::fetch_counts(spec.url).await {
            Ok(counts) => snapshot.set(Some(counts)),
            Err(e) => log::error!("loading {} failed: {}", spec.title, e),
        }
    });

    // Draw once: on the first time this tab is active with data loaded
    Effect::new(move |_| {
        let is_active = active.get() == spec.tab;
        let loaded = snapshot.with(Option::is_some);
        if !is_active || !loaded || scheduled.get_value() {
            return;
        }
        scheduled.set_value(true);
        after(CHART_DRAW_DELAY_MS, move || {
            let Some(canvas) = canvas_ref.get_untracked() else {
                return;
            };
            let slices = snapshot.with_untracked(|s| {
                s.as_ref().map(|s| pie_slices(&spec, s)).unwrap_or_default()
            });
            match PieChart::draw(&canvas, &slices) {
                Ok(drawn) => chart.set_value(Some(drawn)),
                Err(e) => log::error!("drawing {} chart failed: {:?}", spec.title, e),
            }
        });
    });

    let count = move |key: &'static str| {
        snapshot.with(|s| s.as_ref().map(|s| s.count(key)).unwrap_or(0))
    };
    let total = move || snapshot.with(|s| s.as_ref().map(|s| s.total).unwrap_or(0));
    let is_empty = move || snapshot.with(|s| s.as_ref().is_some_and(|s| s.total == 0));

    view! {
        <div class="metrics-chart">
            <h3>{spec.title}</h3>
            <div class="chart-container">
                <canvas id=spec.canvas_id node_ref=canvas_ref></canvas>
                <div class="chart-empty" class:show=is_empty>{spec.empty_message}</div>
            </div>
            <ul class="chart-legend">
                {spec.legends.iter().map(|legend| view! {
                    <li class="legend-item">
                        <span class="legend-color" style=format!("background-color: {}", legend.color)></span>
                        <span class="legend-label">{legend.label}</span>
                        <span class="legend-count" id=format!("{}Count", legend.key)>
                            {move || count(legend.key)}
                        </span>
                    </li>
                }).collect_view()}
            </ul>
            <p class="chart-total">"Total: " {total}</p>
        </div>
    }
}
