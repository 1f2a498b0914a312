//! Metrics Charts
//!
//! Pie charts of the admin metrics, drawn by the page's Chart.js.

use serde::Serialize;
use serde_json::json;
use wasm_bindgen::prelude::*;

use crate::config::endpoints;
use crate::models::CountSnapshot;

#[wasm_bindgen]
extern "C" {
    /// Chart.js constructor loaded by the page
    #[wasm_bindgen(js_name = Chart)]
    pub type JsChart;

    #[wasm_bindgen(constructor, js_class = "Chart", catch)]
    fn new(canvas: &web_sys::HtmlCanvasElement, config: JsValue) -> Result<JsChart, JsValue>;

    #[wasm_bindgen(method)]
    fn destroy(this: &JsChart);
}

/// One legend entry of a chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegendSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub color: &'static str,
}

/// A metrics tab: where its data comes from and how it is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartSpec {
    pub tab: &'static str,
    pub canvas_id: &'static str,
    pub title: &'static str,
    pub url: &'static str,
    pub legends: &'static [LegendSpec],
    pub empty_message: &'static str,
}

pub const CHART_SPECS: [ChartSpec; 3] = [
    ChartSpec {
        tab: "tab1",
        canvas_id: "userRoleChart",
        title: "User Roles",
        url: endpoints::METRICS_USER_ROLES,
        legends: &[
            LegendSpec { key: "chief", label: "Chief", color: "#007bff" },
            LegendSpec { key: "manager", label: "Manager", color: "#28a745" },
            LegendSpec { key: "user", label: "User", color: "#fd7e14" },
        ],
        empty_message: "No users in system",
    },
    ChartSpec {
        tab: "tab2",
        canvas_id: "itemStatusChart",
        title: "Item Status",
        url: endpoints::METRICS_ITEM_STATUS,
        legends: &[
            LegendSpec { key: "available", label: "Available", color: "#28a745" },
            LegendSpec { key: "inUse", label: "In Use", color: "#ffc107" },
            LegendSpec { key: "unavailable", label: "Unavailable", color: "#dc3545" },
        ],
        empty_message: "No items in system",
    },
    ChartSpec {
        tab: "tab3",
        canvas_id: "eventStatusChart",
        title: "Event Status",
        url: endpoints::METRICS_EVENT_STATUS,
        legends: &[
            LegendSpec { key: "notActive", label: "Not Active", color: "#6c757d" },
            LegendSpec { key: "active", label: "Active", color: "#007bff" },
            LegendSpec { key: "equipmentReturn", label: "Equipment Return", color: "#17a2b8" },
        ],
        empty_message: "No events in system",
    },
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub value: u64,
    pub color: &'static str,
    pub percentage: f64,
}

/// Slices with a non-zero count, in legend order
pub fn pie_slices(spec: &ChartSpec, snapshot: &CountSnapshot) -> Vec<PieSlice> {
    if snapshot.total == 0 {
        return Vec::new();
    }
    spec.legends
        .iter()
        .map(|legend| (legend, snapshot.count(legend.key)))
        .filter(|(_, value)| *value > 0)
        .map(|(legend, value)| PieSlice {
            label: legend.label.to_string(),
            value,
            color: legend.color,
            percentage: (value as f64 / snapshot.total as f64 * 1000.0).round() / 10.0,
        })
        .collect()
}

/// Chart.js configuration for the slices, or the grey placeholder disc
fn chart_config(slices: &[PieSlice]) -> serde_json::Value {
    if slices.is_empty() {
        return json!({
            "type": "pie",
            "data": {
                "labels": ["No Data"],
                "datasets": [{
                    "data": [1],
                    "backgroundColor": ["#e9ecef"],
                    "borderColor": ["#dee2e6"],
                    "borderWidth": 2
                }]
            },
            "options": {
                "responsive": true,
                "maintainAspectRatio": true,
                "plugins": { "legend": { "display": false }, "tooltip": { "enabled": false } }
            }
        });
    }
    json!({
        "type": "pie",
        "data": {
            "labels": slices.iter().map(|s| format!("{} ({:.1}%)", s.label, s.percentage)).collect::<Vec<_>>(),
            "datasets": [{
                "data": slices.iter().map(|s| s.value).collect::<Vec<_>>(),
                "backgroundColor": slices.iter().map(|s| s.color).collect::<Vec<_>>(),
                "borderColor": "#ffffff",
                "borderWidth": 2
            }]
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": true,
            "plugins": {
                "legend": { "display": false },
                "tooltip": { "backgroundColor": "#333333", "titleColor": "#ffffff", "bodyColor": "#ffffff" }
            },
            "animation": {
                "animateRotate": true,
                "animateScale": true,
                "duration": 1200,
                "easing": "easeInOutQuart"
            }
        }
    })
}

/// A drawn chart; destroyed when dropped so a canvas never holds two
pub struct PieChart {
    chart: JsChart,
}

impl PieChart {
    pub fn draw(canvas: &web_sys::HtmlCanvasElement, slices: &[PieSlice]) -> Result<Self, JsValue> {
        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        let config = chart_config(slices)
            .serialize(&serializer)
            .map_err(JsValue::from)?;
        let chart = JsChart::new(canvas, config)?;
        Ok(Self { chart })
    }
}

impl Drop for PieChart {
    fn drop(&mut self) {
        self.chart.destroy();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn snapshot(pairs: &[(&str, u64)]) -> CountSnapshot {
        let counts: HashMap<String, u64> = pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect();
        let total = counts.values().sum();
        CountSnapshot { counts, total }
    }

    #[test]
    fn test_slices_skip_zero_counts() {
        let spec = &CHART_SPECS[0];
        let slices = pie_slices(spec, &snapshot(&[("chief", 1), ("manager", 0), ("user", 3)]));
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].label, "Chief");
        assert_eq!(slices[0].percentage, 25.0);
        assert_eq!(slices[1].label, "User");
        assert_eq!(slices[1].color, "#fd7e14");
    }

    #[test]
    fn test_zero_total_has_no_slices() {
        let spec = &CHART_SPECS[2];
        assert!(pie_slices(spec, &CountSnapshot::default()).is_empty());
        let config = chart_config(&[]);
        assert_eq!(config["data"]["labels"][0], "No Data");
    }

    #[test]
    fn test_config_labels_include_percentage() {
        let spec = &CHART_SPECS[1];
        let slices = pie_slices(spec, &snapshot(&[("available", 2), ("inUse", 1)]));
        let config = chart_config(&slices);
        assert_eq!(config["data"]["labels"][0], "Available (66.7%)");
        assert_eq!(config["data"]["datasets"][0]["data"][1], 1);
    }

    #[test]
    fn test_specs_cover_three_tabs() {
        let tabs: Vec<_> = CHART_SPECS.iter().map(|s| s.tab).collect();
        assert_eq!(tabs, vec!["tab1", "tab2", "tab3"]);
    }
}
