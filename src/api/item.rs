//! Item Endpoints
//!
//! Requesting and returning items. Both reply with a `status:message` line.

use crate::config::endpoints;
use crate::error::ApiError;

use super::post_form_text;

/// Direction of an item request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemAction {
    Request,
    Return,
}

impl ItemAction {
    pub fn path(&self) -> &'static str {
        match self {
            ItemAction::Request => endpoints::REQUEST_ITEM,
            ItemAction::Return => endpoints::RETURN_ITEM,
        }
    }

    pub fn prompt(&self, item_name: &str) -> String {
        match self {
            ItemAction::Request => format!("Are you sure you want to request \"{}\"?", item_name),
            ItemAction::Return => format!("Are you sure you want to return \"{}\"?", item_name),
        }
    }

    pub fn pending_label(&self) -> &'static str {
        match self {
            ItemAction::Request => "Requesting...",
            ItemAction::Return => "Processing...",
        }
    }
}

/// Returns the server's confirmation text
pub async fn submit_item_action(action: ItemAction, item_id: u64) -> Result<String, ApiError> {
    post_form_text(action.path(), &[("itemId", item_id.to_string())])
        .await?
        .into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompts() {
        assert_eq!(
            ItemAction::Return.prompt("Drill"),
            "Are you sure you want to return \"Drill\"?"
        );
        assert_eq!(ItemAction::Request.path(), "/user/request-item");
    }
}
