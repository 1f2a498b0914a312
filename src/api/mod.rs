//! Server API
//!
//! Thin async wrappers over the server's JSON and form endpoints, organized
//! by domain.

mod event;
mod item;
mod metrics;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::error::ApiError;
use crate::models::ResponsibilitySummary;

// Re-export all public items
pub use event::*;
pub use item::*;
pub use metrics::*;

// ========================
// Response Shapes
// ========================

/// JSON reply of the mutating `/chief/events/*` endpoints
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ActionResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub responsibilities: Option<Vec<ResponsibilitySummary>>,
}

impl ActionResponse {
    /// `success: false` becomes `Rejected` with the server's message, or
    /// `fallback` when it sent none
    pub fn into_result(self, fallback: &str) -> Result<Self, ApiError> {
        if self.success {
            return Ok(self);
        }
        let message = self
            .message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| fallback.to_string());
        Err(ApiError::Rejected(message))
    }
}

/// `"status:message"` reply of the `/user/*-item` endpoints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub ok: bool,
    pub message: String,
}

impl StatusLine {
    pub fn parse(body: &str) -> Self {
        let (status, message) = body.split_once(':').unwrap_or((body, ""));
        Self {
            ok: status.trim() == "success",
            message: message.trim().to_string(),
        }
    }

    pub fn into_result(self) -> Result<String, ApiError> {
        if self.ok {
            Ok(self.message)
        } else {
            Err(ApiError::Rejected(self.message))
        }
    }
}

/// `application/x-www-form-urlencoded` body
pub fn encode_form(fields: &[(&str, String)]) -> String {
    fields
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                utf8_percent_encode(key, NON_ALPHANUMERIC),
                utf8_percent_encode(value, NON_ALPHANUMERIC)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

// ========================
// Transport
// ========================

async fn send(method: &str, path: &str, body: Option<String>) -> Result<Response, ApiError> {
    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;

    let init = RequestInit::new();
    init.set_method(method);
    if let Some(body) = &body {
        init.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(path, &init).map_err(ApiError::network)?;
    let headers = request.headers();
    headers.set("Accept", "application/json").map_err(ApiError::network)?;
    if body.is_some() {
        headers
            .set("Content-Type", "application/x-www-form-urlencoded")
            .map_err(ApiError::network)?;
    }

    let value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(ApiError::network)?;
    value.dyn_into::<Response>().map_err(ApiError::network)
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let ok = response.ok();
    let promise = response.json().map_err(ApiError::network)?;
    let parsed = match JsFuture::from(promise).await {
        Ok(json) => serde_wasm_bindgen::from_value(json).map_err(ApiError::decode),
        Err(e) => Err(ApiError::network(e)),
    };
    // A rejection body is still useful on a 4xx; only report the status
    // when nothing could be read.
    match parsed {
        Err(_) if !ok => Err(ApiError::Http(status)),
        other => other,
    }
}

async fn read_text(response: Response) -> Result<String, ApiError> {
    let promise = response.text().map_err(ApiError::network)?;
    let text = JsFuture::from(promise).await.map_err(ApiError::network)?;
    text.as_string()
        .ok_or_else(|| ApiError::Decode("response body is not text".to_string()))
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = send("GET", path, None).await?;
    read_json(response).await
}

pub async fn post_form_json<T: DeserializeOwned>(
    path: &str,
    fields: &[(&str, String)],
) -> Result<T, ApiError> {
    let response = send("POST", path, Some(encode_form(fields))).await?;
    read_json(response).await
}

pub async fn post_form_text(path: &str, fields: &[(&str, String)]) -> Result<StatusLine, ApiError> {
    let response = send("POST", path, Some(encode_form(fields))).await?;
    let body = read_text(response).await?;
    Ok(StatusLine::parse(&body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_line_parse() {
        let line = StatusLine::parse("success:Item request submitted successfully");
        assert!(line.ok);
        assert_eq!(line.message, "Item request submitted successfully");

        let line = StatusLine::parse("error:Item is not available");
        assert!(!line.ok);
        assert_eq!(line.into_result(), Err(ApiError::Rejected("Item is not available".to_string())));
    }

    #[test]
    fn test_status_line_keeps_colons_in_message() {
        let line = StatusLine::parse("error:Denied: event is active");
        assert_eq!(line.message, "Denied: event is active");
    }

    #[test]
    fn test_status_line_without_separator() {
        let line = StatusLine::parse("success");
        assert!(line.ok);
        assert_eq!(line.message, "");
        assert!(!StatusLine::parse("<html>").ok);
    }

    #[test]
    fn test_action_response_into_result() {
        let ok: ActionResponse = serde_json::from_str(
            r#"{"success":true,"message":"Responsibility added successfully",
                "responsibilities":[{"id":3,"name":"Audio","description":null,"managers":["Dana Levi"]}]}"#,
        )
        .unwrap();
        let ok = ok.into_result("Error adding responsibility").unwrap();
        let list = ok.responsibilities.unwrap();
        assert_eq!(list[0].name, "Audio");
        assert_eq!(list[0].description, None);
        assert_eq!(list[0].managers, vec!["Dana Levi"]);

        let denied: ActionResponse = serde_json::from_str(r#"{"success":false,"message":"Access denied"}"#).unwrap();
        assert_eq!(denied.into_result("x"), Err(ApiError::Rejected("Access denied".to_string())));

        let bare: ActionResponse = serde_json::from_str(r#"{"success":false}"#).unwrap();
        assert_eq!(
            bare.into_result("Failed to activate event"),
            Err(ApiError::Rejected("Failed to activate event".to_string()))
        );
    }

    #[test]
    fn test_encode_form() {
        let body = encode_form(&[("eventName", "Spring Gala".to_string()), ("description", "a&b=c".to_string())]);
        assert_eq!(body, "eventName=Spring%20Gala&description=a%26b%3Dc");
    }
}
