//! Form Validation
//!
//! Checks run before a form is submitted. A failing check never reaches the
//! network.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::{DESCRIPTION_MAX, EVENT_NAME_MAX, ITEM_NAME_MAX, PHONE_DIGITS};
use crate::error::ValidationError;

static ITEM_NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9 .#()-]+$").expect("valid item name pattern"));

static PERSON_NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]{1,20}$").expect("valid person name pattern"));

/// Returns the trimmed item name
pub fn validate_item_name(name: &str) -> Result<String, ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::Required("Item name"));
    }
    if name.chars().count() > ITEM_NAME_MAX {
        return Err(ValidationError::TooLong { field: "Item name", max: ITEM_NAME_MAX });
    }
    if !ITEM_NAME_PATTERN.is_match(name) {
        return Err(ValidationError::InvalidItemName);
    }
    Ok(name.to_string())
}

pub fn validate_status(status: &str) -> Result<String, ValidationError> {
    if status.is_empty() {
        return Err(ValidationError::NotSelected("status"));
    }
    Ok(status.to_string())
}

/// Trimmed (name, description) of the event edit form
pub fn validate_event_form(name: &str, description: &str) -> Result<(String, String), ValidationError> {
    let name = name.trim();
    let description = description.trim();
    if name.is_empty() {
        return Err(ValidationError::Required("Event name"));
    }
    if name.chars().count() > EVENT_NAME_MAX {
        return Err(ValidationError::TooLong { field: "Event name", max: EVENT_NAME_MAX });
    }
    validate_description(description)?;
    Ok((name.to_string(), description.to_string()))
}

pub fn validate_description(description: &str) -> Result<(), ValidationError> {
    if description.chars().count() > DESCRIPTION_MAX {
        return Err(ValidationError::TooLong { field: "Description", max: DESCRIPTION_MAX });
    }
    Ok(())
}

pub fn validate_responsibility_name(name: &str) -> Result<String, ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::Missing("responsibility name"));
    }
    Ok(name.to_string())
}

/// Trimmed (first, last) of the change-name form: letters only, 1-20 each
pub fn validate_person_name(first: &str, last: &str) -> Result<(String, String), ValidationError> {
    let first = first.trim();
    let last = last.trim();
    if !PERSON_NAME_PATTERN.is_match(first) {
        return Err(ValidationError::InvalidPersonName("First name"));
    }
    if !PERSON_NAME_PATTERN.is_match(last) {
        return Err(ValidationError::InvalidPersonName("Last name"));
    }
    Ok((first.to_string(), last.to_string()))
}

/// Exactly ten digits, nothing else
pub fn validate_phone(phone: &str) -> Result<String, ValidationError> {
    let phone = phone.trim();
    if phone.len() != PHONE_DIGITS || !phone.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidPhone(PHONE_DIGITS));
    }
    Ok(phone.to_string())
}

/// Keep digits only, at most ten of them
pub fn sanitize_phone(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(PHONE_DIGITS)
        .collect()
}

// ========================
// Character Counter
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterLevel {
    Normal,
    Warning,
    Danger,
}

impl CounterLevel {
    pub fn class(&self) -> &'static str {
        match self {
            CounterLevel::Normal => "char-counter",
            CounterLevel::Warning => "char-counter warning",
            CounterLevel::Danger => "char-counter danger",
        }
    }
}

/// Thresholds at which a counter changes colour.
///
/// The event editor switches strictly above its thresholds, the
/// responsibility editor at them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterThresholds {
    pub warning: usize,
    pub danger: usize,
    pub inclusive: bool,
}

pub const EVENT_DESCRIPTION_COUNTER: CounterThresholds =
    CounterThresholds { warning: 160, danger: 180, inclusive: false };

pub const RESPONSIBILITY_DESCRIPTION_COUNTER: CounterThresholds =
    CounterThresholds { warning: 150, danger: 180, inclusive: true };

impl CounterThresholds {
    pub fn level(&self, length: usize) -> CounterLevel {
        let reached = |limit: usize| if self.inclusive { length >= limit } else { length > limit };
        if reached(self.danger) {
            CounterLevel::Danger
        } else if reached(self.warning) {
            CounterLevel::Warning
        } else {
            CounterLevel::Normal
        }
    }
}

pub fn counter_text(text: &str) -> String {
    format!("{}/{} characters", text.chars().count(), DESCRIPTION_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_name_rules() {
        assert_eq!(validate_item_name("  Drill #2 (red) ").unwrap(), "Drill #2 (red)");
        assert_eq!(validate_item_name("   "), Err(ValidationError::Required("Item name")));
        assert_eq!(
            validate_item_name(&"a".repeat(33)),
            Err(ValidationError::TooLong { field: "Item name", max: 32 })
        );
        assert!(validate_item_name(&"a".repeat(32)).is_ok());
        assert_eq!(validate_item_name("Drill!"), Err(ValidationError::InvalidItemName));
        assert_eq!(validate_item_name("Mug_1"), Err(ValidationError::InvalidItemName));
    }

    #[test]
    fn test_event_form_rules() {
        assert_eq!(
            validate_event_form(" Gala ", " Night "),
            Ok(("Gala".to_string(), "Night".to_string()))
        );
        assert_eq!(validate_event_form("", "x"), Err(ValidationError::Required("Event name")));
        assert!(validate_event_form(&"n".repeat(101), "").is_err());
        assert_eq!(
            validate_event_form("Gala", &"d".repeat(201)),
            Err(ValidationError::TooLong { field: "Description", max: 200 })
        );
    }

    #[test]
    fn test_status_and_responsibility_required() {
        assert!(validate_status("").is_err());
        assert_eq!(validate_status("available").unwrap(), "available");
        assert!(validate_responsibility_name("  ").is_err());
        assert_eq!(validate_responsibility_name(" Audio ").unwrap(), "Audio");
    }

    #[test]
    fn test_person_name_rules() {
        assert_eq!(
            validate_person_name(" Ada ", "Lovelace"),
            Ok(("Ada".to_string(), "Lovelace".to_string()))
        );
        assert_eq!(validate_person_name("", "Lovelace"), Err(ValidationError::InvalidPersonName("First name")));
        assert_eq!(validate_person_name("Ada", "Love-lace"), Err(ValidationError::InvalidPersonName("Last name")));
        assert_eq!(validate_person_name("Ada2", "L"), Err(ValidationError::InvalidPersonName("First name")));
        assert!(validate_person_name(&"a".repeat(20), "b").is_ok());
        assert!(validate_person_name(&"a".repeat(21), "b").is_err());
    }

    #[test]
    fn test_phone_needs_exactly_ten_digits() {
        assert_eq!(validate_phone(" 0541234567 ").unwrap(), "0541234567");
        assert_eq!(validate_phone("054123456"), Err(ValidationError::InvalidPhone(10)));
        assert!(validate_phone("05412345678").is_err());
        assert!(validate_phone("054-123456").is_err());
    }

    #[test]
    fn test_sanitize_phone() {
        assert_eq!(sanitize_phone("(054) 123-4567"), "0541234567");
        assert_eq!(sanitize_phone("123456789012"), "1234567890");
        assert_eq!(sanitize_phone("abc"), "");
    }

    #[test]
    fn test_counter_levels() {
        assert_eq!(EVENT_DESCRIPTION_COUNTER.level(160), CounterLevel::Normal);
        assert_eq!(EVENT_DESCRIPTION_COUNTER.level(161), CounterLevel::Warning);
        assert_eq!(EVENT_DESCRIPTION_COUNTER.level(181), CounterLevel::Danger);
        assert_eq!(RESPONSIBILITY_DESCRIPTION_COUNTER.level(149), CounterLevel::Normal);
        assert_eq!(RESPONSIBILITY_DESCRIPTION_COUNTER.level(150), CounterLevel::Warning);
        assert_eq!(RESPONSIBILITY_DESCRIPTION_COUNTER.level(180), CounterLevel::Danger);
        assert_eq!(counter_text("hello"), "5/200 characters");
    }
}
