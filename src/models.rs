//! Frontend Models
//!
//! View models derived from page data and the data structures returned by the
//! server endpoints.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A table row as seen by the filter engine.
///
/// `category` is whatever grouping column the page filters on: the
/// responsibility on the items pages, the role on the user list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRow {
    /// Position in the page as rendered by the server
    pub index: usize,
    pub display_name: String,
    pub normalized_name: String,
    pub category: String,
    pub normalized_category: String,
}

impl ItemRow {
    pub fn new(index: usize, name: &str, category: &str) -> Self {
        let display_name = name.trim().to_string();
        let category = category.trim().to_string();
        Self {
            index,
            normalized_name: display_name.to_lowercase(),
            normalized_category: category.to_lowercase(),
            display_name,
            category,
        }
    }
}

/// Sort order selected in the sort dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    #[default]
    None,
    NameAsc,
    NameDesc,
}

impl SortMode {
    /// Parse the `<select>` value; anything unknown keeps page order
    pub fn from_value(value: &str) -> Self {
        match value {
            "name-asc" => SortMode::NameAsc,
            "name-desc" => SortMode::NameDesc,
            _ => SortMode::None,
        }
    }

    pub fn as_value(&self) -> &'static str {
        match self {
            SortMode::None => "",
            SortMode::NameAsc => "name-asc",
            SortMode::NameDesc => "name-desc",
        }
    }
}

/// Columns the search box looks at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchScope {
    #[default]
    NameAndCategory,
    /// The category is only a dropdown filter (the role on the user list)
    NameOnly,
}

/// Current filter inputs of a list page
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub category_filter: Option<String>,
    pub search_term: String,
    pub sort_mode: SortMode,
    /// Fixed per page; survives `clear`
    pub search_scope: SearchScope,
}

/// Toast flavours, mapped to `toast-{kind}` CSS classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    #[default]
    Success,
    Error,
    Info,
    Warning,
}

impl ToastKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Info => "info",
            ToastKind::Warning => "warning",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "success" => Some(ToastKind::Success),
            "error" => Some(ToastKind::Error),
            "info" => Some(ToastKind::Info),
            "warning" => Some(ToastKind::Warning),
            _ => None,
        }
    }
}

/// Aggregate counts returned by the `/admin/metrics/*` endpoints.
///
/// The three endpoints name their fields differently; aliases fold them into
/// one shape.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct CountSnapshot {
    #[serde(alias = "roleCounts", alias = "statusCounts")]
    pub counts: HashMap<String, u64>,
    #[serde(alias = "totalUsers", alias = "totalItems", alias = "totalEvents")]
    pub total: u64,
}

impl CountSnapshot {
    pub fn count(&self, key: &str) -> u64 {
        self.counts.get(key).copied().unwrap_or(0)
    }
}

/// Responsibility attached to an event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponsibilitySummary {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub managers: Vec<String>,
}

/// Entry of the "add responsibility" picker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponsibilityOption {
    pub id: u64,
    pub name: String,
}

/// Item owned by (or requestable by) the current user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub responsibility_name: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub can_request: bool,
    #[serde(default)]
    pub can_return: bool,
}

/// User entry on the chief's user list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: u64,
    pub full_name: String,
    pub role: String,
    #[serde(default)]
    pub responsibility_name: Option<String>,
}

/// Event card on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventSummary {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: String,
}

/// Lifecycle stage of an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStatus {
    NotActive,
    Active,
    EquipmentReturn,
    Completed,
}

impl EventStatus {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "active" => EventStatus::Active,
            "equipment return" | "equipment-return" => EventStatus::EquipmentReturn,
            "completed" | "complete" => EventStatus::Completed,
            _ => EventStatus::NotActive,
        }
    }

    /// Responsibilities and details can only change before activation
    pub fn is_editable(&self) -> bool {
        *self == EventStatus::NotActive
    }
}

impl EventSummary {
    pub fn status(&self) -> EventStatus {
        EventStatus::parse(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_row_normalizes() {
        let row = ItemRow::new(2, "  Hammer ", "Tools");
        assert_eq!(row.display_name, "Hammer");
        assert_eq!(row.normalized_name, "hammer");
        assert_eq!(row.normalized_category, "tools");
        assert_eq!(row.index, 2);
    }

    #[test]
    fn test_sort_mode_values() {
        assert_eq!(SortMode::from_value("name-asc"), SortMode::NameAsc);
        assert_eq!(SortMode::from_value("name-desc"), SortMode::NameDesc);
        assert_eq!(SortMode::from_value(""), SortMode::None);
        assert_eq!(SortMode::from_value("bogus"), SortMode::None);
        assert_eq!(SortMode::NameDesc.as_value(), "name-desc");
    }

    #[test]
    fn test_count_snapshot_aliases() {
        let users: CountSnapshot = serde_json::from_str(
            r#"{"roleCounts":{"chief":1,"manager":2,"user":4},"totalUsers":7}"#,
        )
        .unwrap();
        assert_eq!(users.total, 7);
        assert_eq!(users.count("manager"), 2);

        let items: CountSnapshot = serde_json::from_str(
            r#"{"statusCounts":{"available":3},"totalItems":3}"#,
        )
        .unwrap();
        assert_eq!(items.count("available"), 3);
        assert_eq!(items.count("inUse"), 0);
    }

    #[test]
    fn test_event_status_parse() {
        assert_eq!(EventStatus::parse("not-active"), EventStatus::NotActive);
        assert_eq!(EventStatus::parse("Active"), EventStatus::Active);
        assert_eq!(EventStatus::parse("equipment return"), EventStatus::EquipmentReturn);
        assert!(EventStatus::NotActive.is_editable());
        assert!(!EventStatus::EquipmentReturn.is_editable());
    }

    #[test]
    fn test_toast_kind_parse() {
        assert_eq!(ToastKind::parse("warning"), Some(ToastKind::Warning));
        assert_eq!(ToastKind::parse("loud"), None);
        assert_eq!(ToastKind::Error.as_str(), "error");
    }
}
