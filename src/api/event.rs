//! Event Endpoints
//!
//! Responsibilities of an event, its lifecycle transitions, and editing.

use crate::config::endpoints;
use crate::error::ApiError;
use crate::models::{ResponsibilityOption, ResponsibilitySummary};

use super::{get_json, post_form_json, ActionResponse};

/// Event lifecycle transitions triggered from the event page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleAction {
    Activate,
    SwitchToReturn,
    SwitchToActive,
    Complete,
}

impl LifecycleAction {
    pub fn path_segment(&self) -> &'static str {
        match self {
            LifecycleAction::Activate => "activate",
            LifecycleAction::SwitchToReturn => "switch-to-return",
            LifecycleAction::SwitchToActive => "switch-to-active",
            LifecycleAction::Complete => "complete",
        }
    }

    pub fn failure_message(&self) -> &'static str {
        match self {
            LifecycleAction::Activate => "Failed to activate event",
            LifecycleAction::SwitchToReturn => "Failed to switch to return mode",
            LifecycleAction::SwitchToActive => "Failed to switch to active mode",
            LifecycleAction::Complete => "Failed to complete event",
        }
    }

    pub fn network_message(&self) -> &'static str {
        match self {
            LifecycleAction::Activate => "An error occurred while activating the event",
            LifecycleAction::SwitchToReturn => "An error occurred while switching to return mode",
            LifecycleAction::SwitchToActive => "An error occurred while switching to active mode",
            LifecycleAction::Complete => "An error occurred while completing the event",
        }
    }

    /// Label of the confirm button while the request runs
    pub fn pending_label(&self) -> &'static str {
        match self {
            LifecycleAction::Activate => "Activating...",
            LifecycleAction::SwitchToReturn | LifecycleAction::SwitchToActive => "Switching...",
            LifecycleAction::Complete => "Completing...",
        }
    }

    /// Only activation announces itself; the rest reload silently
    pub fn success_message(&self) -> Option<&'static str> {
        match self {
            LifecycleAction::Activate => Some("Event activated successfully!"),
            _ => None,
        }
    }
}

pub async fn list_available_responsibilities(event_id: u64) -> Result<Vec<ResponsibilityOption>, ApiError> {
    get_json(&endpoints::event(event_id, "available-responsibilities")).await
}

pub async fn add_event_responsibility(
    event_id: u64,
    responsibility_id: u64,
) -> Result<Vec<ResponsibilitySummary>, ApiError> {
    let response: ActionResponse = post_form_json(
        &endpoints::event(event_id, "add-responsibility"),
        &[("responsibilityId", responsibility_id.to_string())],
    )
    .await?;
    let response = response.into_result("Error adding responsibility")?;
    Ok(response.responsibilities.unwrap_or_default())
}

pub async fn remove_event_responsibility(
    event_id: u64,
    responsibility_id: u64,
) -> Result<Vec<ResponsibilitySummary>, ApiError> {
    let response: ActionResponse = post_form_json(
        &endpoints::event(event_id, "remove-responsibility"),
        &[("responsibilityId", responsibility_id.to_string())],
    )
    .await?;
    let response = response.into_result("Error removing responsibility")?;
    Ok(response.responsibilities.unwrap_or_default())
}

pub async fn transition_event(event_id: u64, action: LifecycleAction) -> Result<(), ApiError> {
    let response: ActionResponse =
        post_form_json(&endpoints::event(event_id, action.path_segment()), &[]).await?;
    response.into_result(action.failure_message())?;
    Ok(())
}

pub async fn edit_event(event_id: u64, name: &str, description: &str) -> Result<(), ApiError> {
    let response: ActionResponse = post_form_json(
        &endpoints::event(event_id, "edit"),
        &[
            ("eventName", name.to_string()),
            ("description", description.to_string()),
        ],
    )
    .await?;
    response.into_result("Error updating event")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle_paths() {
        assert_eq!(LifecycleAction::SwitchToReturn.path_segment(), "switch-to-return");
        assert_eq!(
            endpoints::event(5, LifecycleAction::Complete.path_segment()),
            "/chief/events/5/complete"
        );
    }

    #[test]
    fn test_only_activation_has_success_toast() {
        assert!(LifecycleAction::Activate.success_message().is_some());
        assert!(LifecycleAction::SwitchToActive.success_message().is_none());
        assert!(LifecycleAction::Complete.success_message().is_none());
    }
}
