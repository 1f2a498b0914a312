//! Page Glue
//!
//! Reading the server-rendered bootstrap, carrying toasts across reloads,
//! and navigating form posts.

use wasm_bindgen::JsCast;

use crate::config::{PageConfig, MOUNT_ID, PAGE_DATA_ID};
use crate::models::ToastKind;

const FLASH_MESSAGE_KEY: &str = "toastMessage";
const FLASH_KIND_KEY: &str = "toastType";

fn document() -> Option<web_sys::Document> {
    web_sys::window()?.document()
}

pub fn mount_element() -> Option<web_sys::HtmlElement> {
    document()?
        .get_element_by_id(MOUNT_ID)?
        .dyn_into::<web_sys::HtmlElement>()
        .ok()
}

/// Read `data-*` attributes of the mount element and the page-data block
pub fn read_page_config(mount: &web_sys::HtmlElement) -> Option<PageConfig> {
    let data = document()
        .and_then(|doc| doc.get_element_by_id(PAGE_DATA_ID))
        .and_then(|el| el.text_content())
        .map(|text| match serde_json::from_str(&text) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("ignoring unreadable page data: {}", e);
                serde_json::Value::Null
            }
        })
        .unwrap_or(serde_json::Value::Null);

    PageConfig::from_attributes(|name| mount.get_attribute(&format!("data-{}", name)), data)
}

// ========================
// Flash Messages
// ========================

/// Toast to show on the next page load
pub fn stash_flash(message: &str, kind: ToastKind) {
    let storage = web_sys::window().and_then(|w| w.session_storage().ok().flatten());
    let Some(storage) = storage else {
        log::warn!("session storage unavailable, flash dropped: {}", message);
        return;
    };
    for (key, value) in [(FLASH_MESSAGE_KEY, message), (FLASH_KIND_KEY, kind.as_str())] {
        if let Err(e) = storage.set_item(key, value) {
            log::warn!("storing {} failed: {:?}", key, e);
        }
    }
}

/// Take (and clear) the toast stashed by the previous page
pub fn take_flash() -> Option<(String, ToastKind)> {
    let storage = web_sys::window()?.session_storage().ok()??;
    let message = storage.get_item(FLASH_MESSAGE_KEY).ok()??;
    let kind = storage.get_item(FLASH_KIND_KEY).ok()??;
    for key in [FLASH_MESSAGE_KEY, FLASH_KIND_KEY] {
        if let Err(e) = storage.remove_item(key) {
            log::warn!("clearing {} failed: {:?}", key, e);
        }
    }
    // Anything but success was shown as an error
    Some((message, ToastKind::parse(&kind).filter(|k| *k == ToastKind::Success).unwrap_or(ToastKind::Error)))
}

/// `?success=...` / `?error=...` left by a redirect
pub fn query_flash() -> Vec<(String, ToastKind)> {
    let Some(search) = web_sys::window().and_then(|w| w.location().search().ok()) else {
        return Vec::new();
    };
    let Ok(params) = web_sys::UrlSearchParams::new_with_str(&search) else {
        return Vec::new();
    };
    [("success", ToastKind::Success), ("error", ToastKind::Error)]
        .into_iter()
        .filter_map(|(key, kind)| params.get(key).filter(|m| !m.is_empty()).map(|m| (m, kind)))
        .collect()
}

pub fn query_param(name: &str) -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    web_sys::UrlSearchParams::new_with_str(&search).ok()?.get(name)
}

// ========================
// Navigation
// ========================

pub fn reload_page() {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().reload() {
            log::error!("reload failed: {:?}", e);
        }
    }
}

pub fn reload_after(ms: u32) {
    crate::timing::after(ms, reload_page);
}

/// Submit a regular POST form; the server answers with a redirect
pub fn submit_post_form(action: &str, fields: &[(&str, String)]) {
    if let Err(e) = build_and_submit(action, fields) {
        log::error!("form post to {} failed: {:?}", action, e);
    }
}

fn build_and_submit(action: &str, fields: &[(&str, String)]) -> Result<(), wasm_bindgen::JsValue> {
    let doc = document().ok_or("no document")?;
    let body = doc.body().ok_or("no body")?;
    let form: web_sys::HtmlFormElement = doc.create_element("form")?.dyn_into()?;
    form.set_method("POST");
    form.set_action(action);
    form.set_attribute("hidden", "")?;
    for (name, value) in fields {
        let input: web_sys::HtmlInputElement = doc.create_element("input")?.dyn_into()?;
        input.set_type("hidden");
        input.set_name(name);
        input.set_value(value);
        form.append_child(&input)?;
    }
    body.append_child(&form)?;
    form.submit()
}
