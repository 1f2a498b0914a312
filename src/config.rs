//! Page Configuration
//!
//! Timing constants, validation limits, and the per-page bootstrap data the
//! server embeds next to the mount element.

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Default toast lifetime
pub const TOAST_DURATION_MS: u32 = 6000;
/// Search input debounce
pub const SEARCH_DEBOUNCE_MS: u32 = 300;
/// Lifecycle buttons stay disabled this long after a click
pub const ACTION_GUARD_MS: u32 = 2000;
/// Delay before showing a toast stashed across a reload
pub const FLASH_DELAY_MS: u32 = 300;
/// Reload delay after a change that shows its own toast
pub const RELOAD_AFTER_TOAST_MS: u32 = 1000;
/// Reload delay after a silent change
pub const RELOAD_SILENT_MS: u32 = 500;
/// Charts are built once the tab panel is laid out
pub const CHART_DRAW_DELAY_MS: u32 = 100;
/// Input focus after a form modal opens
pub const MODAL_FOCUS_DELAY_MS: u32 = 100;

pub const ITEM_NAME_MAX: usize = 32;
pub const EVENT_NAME_MAX: usize = 100;
pub const DESCRIPTION_MAX: usize = 200;
pub const PHONE_DIGITS: usize = 10;

/// Element the app mounts into
pub const MOUNT_ID: &str = "app";
/// `<script type="application/json">` carrying page data
pub const PAGE_DATA_ID: &str = "page-data";

/// Which screen the server rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    UserItems,
    ResponsibilityView,
    ResponsibilityManage,
    ChiefUsers,
    EventDetail,
    Dashboard,
    AdminMetrics,
    Auth,
    UserInfo,
}

impl PageKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "user-items" => Some(PageKind::UserItems),
            "responsibility-view" => Some(PageKind::ResponsibilityView),
            "responsibility-manage" => Some(PageKind::ResponsibilityManage),
            "chief-users" => Some(PageKind::ChiefUsers),
            "event" => Some(PageKind::EventDetail),
            "dashboard" => Some(PageKind::Dashboard),
            "admin" => Some(PageKind::AdminMetrics),
            "auth" => Some(PageKind::Auth),
            "user-info" => Some(PageKind::UserInfo),
            _ => None,
        }
    }
}

/// Role of the signed-in user as reported by the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserRole {
    Admin,
    Chief,
    Manager,
    #[default]
    User,
}

impl UserRole {
    pub fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "admin" => UserRole::Admin,
            "chief" => UserRole::Chief,
            "manager" => UserRole::Manager,
            _ => UserRole::User,
        }
    }
}

/// Bootstrap configuration for the mounted page
#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    pub kind: PageKind,
    pub role: UserRole,
    pub event_id: Option<u64>,
    pub responsibility_id: Option<u64>,
    /// Raw JSON from the page-data block, `Value::Null` when absent
    pub data: Value,
}

impl PageConfig {
    /// Build from the mount element's `data-*` attributes.
    ///
    /// `attr` looks up an attribute by name (without the `data-` prefix).
    pub fn from_attributes(attr: impl Fn(&str) -> Option<String>, data: Value) -> Option<Self> {
        let kind = attr("page").as_deref().and_then(PageKind::parse)?;
        Some(Self {
            kind,
            role: attr("user-role").map(|r| UserRole::parse(&r)).unwrap_or_default(),
            event_id: attr("event-id").and_then(|v| v.trim().parse().ok()),
            responsibility_id: attr("responsibility-id").and_then(|v| v.trim().parse().ok()),
            data,
        })
    }

    /// Deserialize the page data block; missing fields fall back to `Default`
    pub fn page_data<T: DeserializeOwned + Default>(&self) -> T {
        if self.data.is_null() {
            return T::default();
        }
        match serde_json::from_value(self.data.clone()) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("page data did not match {:?}: {}", self.kind, e);
                T::default()
            }
        }
    }
}

// ========================
// Endpoints
// ========================

pub mod endpoints {
    pub const METRICS_USER_ROLES: &str = "/admin/metrics/user-roles";
    pub const METRICS_ITEM_STATUS: &str = "/admin/metrics/item-status";
    pub const METRICS_EVENT_STATUS: &str = "/admin/metrics/event-status";

    pub const REQUEST_ITEM: &str = "/user/request-item";
    pub const RETURN_ITEM: &str = "/user/return-item";

    pub const LOGIN: &str = "/login";
    pub const REGISTER: &str = "/register";
    pub const CHANGE_NAME: &str = "/change-name";
    pub const CHANGE_PHONE: &str = "/change-phone";

    pub const CREATE_EVENT: &str = "/chief/events/create";
    pub const DELETE_EVENT: &str = "/chief/events/delete";
    pub const ASSIGN_RESPONSIBILITY: &str = "/chief/assign-responsibility";
    pub const REMOVE_RESPONSIBILITY: &str = "/chief/remove-responsibility";

    pub fn event(event_id: u64, action: &str) -> String {
        format!("/chief/events/{}/{}", event_id, action)
    }

    pub fn responsibility_manage(responsibility_id: u64, action: &str) -> String {
        format!("/responsibility-manage/{}/{}", responsibility_id, action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::collections::HashMap;

    fn attrs(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_page_config_from_attributes() {
        let config = PageConfig::from_attributes(
            attrs(&[("page", "event"), ("event-id", "42"), ("user-role", "Chief")]),
            Value::Null,
        )
        .unwrap();
        assert_eq!(config.kind, PageKind::EventDetail);
        assert_eq!(config.event_id, Some(42));
        assert_eq!(config.role, UserRole::Chief);
        assert_eq!(config.responsibility_id, None);
    }

    #[test]
    fn test_user_info_page_kind() {
        let config = PageConfig::from_attributes(attrs(&[("page", "user-info")]), Value::Null).unwrap();
        assert_eq!(config.kind, PageKind::UserInfo);
    }

    #[test]
    fn test_unknown_page_is_none() {
        assert!(PageConfig::from_attributes(attrs(&[("page", "nope")]), Value::Null).is_none());
        assert!(PageConfig::from_attributes(attrs(&[]), Value::Null).is_none());
    }

    #[test]
    fn test_page_data_falls_back_to_default() {
        #[derive(Deserialize, Default, Debug, PartialEq)]
        struct Data {
            #[serde(default)]
            names: Vec<String>,
        }

        let config = PageConfig::from_attributes(
            attrs(&[("page", "dashboard")]),
            serde_json::json!({ "names": ["a", "b"] }),
        )
        .unwrap();
        assert_eq!(config.page_data::<Data>().names, vec!["a", "b"]);

        let broken = PageConfig { data: serde_json::json!({ "names": 3 }), ..config.clone() };
        assert_eq!(broken.page_data::<Data>(), Data::default());

        let empty = PageConfig { data: Value::Null, ..config };
        assert_eq!(empty.page_data::<Data>(), Data::default());
    }

    #[test]
    fn test_endpoint_builders() {
        assert_eq!(endpoints::event(7, "activate"), "/chief/events/7/activate");
        assert_eq!(
            endpoints::responsibility_manage(3, "add-item"),
            "/responsibility-manage/3/add-item"
        );
    }
}
