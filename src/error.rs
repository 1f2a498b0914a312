//! Error Types
//!
//! Failures of server calls and client-side form checks.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failure of a request to the server
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// fetch rejected or the browser APIs were unavailable
    #[error("network error: {0}")]
    Network(String),

    #[error("server responded with status {0}")]
    Http(u16),

    #[error("malformed response: {0}")]
    Decode(String),

    /// The server handled the request and said no
    #[error("{0}")]
    Rejected(String),
}

impl ApiError {
    pub fn network(err: JsValue) -> Self {
        ApiError::Network(
            err.as_string()
                .unwrap_or_else(|| format!("{:?}", err)),
        )
    }

    pub fn decode(err: impl std::fmt::Display) -> Self {
        ApiError::Decode(err.to_string())
    }

    /// Text for the error toast: server messages verbatim, `generic` otherwise
    pub fn user_message(&self, generic: &str) -> String {
        match self {
            ApiError::Rejected(message) if !message.is_empty() => message.clone(),
            _ => generic.to_string(),
        }
    }

    /// Log the failure and return the toast text
    pub fn report(&self, generic: &str) -> String {
        log::error!("{}: {}", generic, self);
        self.user_message(generic)
    }
}

/// Client-side form check that blocks submission
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("{field} cannot exceed {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("Item name can only contain letters, numbers, spaces and the .#()- symbols")]
    InvalidItemName,

    #[error("Please select a {0}")]
    NotSelected(&'static str),

    #[error("Please enter a {0}")]
    Missing(&'static str),

    #[error("{0} must contain only letters and be 1-20 characters long")]
    InvalidPersonName(&'static str),

    #[error("Phone number must be exactly {0} digits")]
    InvalidPhone(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_server_text() {
        let err = ApiError::Rejected("Item already requested".to_string());
        assert_eq!(err.user_message("fallback"), "Item already requested");

        let err = ApiError::Rejected(String::new());
        assert_eq!(err.user_message("fallback"), "fallback");

        let err = ApiError::Network("offline".to_string());
        assert_eq!(err.user_message("An error occurred"), "An error occurred");
    }

    #[test]
    fn test_validation_messages() {
        assert_eq!(ValidationError::Required("Event name").to_string(), "Event name is required");
        assert_eq!(
            ValidationError::TooLong { field: "Description", max: 200 }.to_string(),
            "Description cannot exceed 200 characters"
        );
        assert_eq!(ValidationError::NotSelected("status").to_string(), "Please select a status");
        assert_eq!(
            ValidationError::Missing("responsibility name").to_string(),
            "Please enter a responsibility name"
        );
        assert_eq!(
            ValidationError::InvalidPersonName("First name").to_string(),
            "First name must contain only letters and be 1-20 characters long"
        );
        assert_eq!(ValidationError::InvalidPhone(10).to_string(), "Phone number must be exactly 10 digits");
    }
}
