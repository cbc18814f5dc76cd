//! Session commands - requests from the UI layer

use super::types::NavigationDirection;
use serde::{Deserialize, Serialize};

/// Reference to a committed plate, by id or by plate number
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum PlateRef {
    Number(u32),
    Id(String),
}

/// Command payload variants
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionCommand {
    // ========== Builder ==========
    AddItem {
        menu_item_id: String,
        portions: i32,
    },
    RemoveItem {
        menu_item_id: String,
    },
    UpdatePortions {
        menu_item_id: String,
        portions: i32,
    },
    /// Discard the in-progress plate ("start over")
    ClearPlate,

    // ========== Bridge ==========
    /// Move the in-progress plate into the cart
    CommitPlate,
    EditPlate {
        plate: PlateRef,
    },
    CancelEdit,
    Navigate {
        direction: NavigationDirection,
    },

    // ========== Cart ==========
    RemoveCartPlate {
        plate: PlateRef,
    },
    UpdateCartItem {
        plate: PlateRef,
        menu_item_id: String,
        portions: i32,
    },

    // ========== Availability ==========
    SetAvailability {
        menu_item_id: String,
        available: bool,
    },
    RemoveUnavailable,
}

impl SessionCommand {
    /// Short name for logging
    pub fn kind(&self) -> &'static str {
        match self {
            SessionCommand::AddItem { .. } => "add_item",
            SessionCommand::RemoveItem { .. } => "remove_item",
            SessionCommand::UpdatePortions { .. } => "update_portions",
            SessionCommand::ClearPlate => "clear_plate",
            SessionCommand::CommitPlate => "commit_plate",
            SessionCommand::EditPlate { .. } => "edit_plate",
            SessionCommand::CancelEdit => "cancel_edit",
            SessionCommand::Navigate { .. } => "navigate",
            SessionCommand::RemoveCartPlate { .. } => "remove_cart_plate",
            SessionCommand::UpdateCartItem { .. } => "update_cart_item",
            SessionCommand::SetAvailability { .. } => "set_availability",
            SessionCommand::RemoveUnavailable => "remove_unavailable",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_add_item() {
        let cmd: SessionCommand =
            serde_json::from_str(r#"{"type":"ADD_ITEM","menu_item_id":"rice","portions":2}"#)
                .unwrap();
        assert_eq!(
            cmd,
            SessionCommand::AddItem {
                menu_item_id: "rice".to_string(),
                portions: 2
            }
        );
        assert_eq!(cmd.kind(), "add_item");
    }

    #[test]
    fn test_plate_ref_number_or_id() {
        let cmd: SessionCommand =
            serde_json::from_str(r#"{"type":"EDIT_PLATE","plate":2}"#).unwrap();
        assert_eq!(
            cmd,
            SessionCommand::EditPlate {
                plate: PlateRef::Number(2)
            }
        );

        let cmd: SessionCommand =
            serde_json::from_str(r#"{"type":"REMOVE_CART_PLATE","plate":"abc"}"#).unwrap();
        assert_eq!(
            cmd,
            SessionCommand::RemoveCartPlate {
                plate: PlateRef::Id("abc".to_string())
            }
        );
    }

    #[test]
    fn test_unit_variant() {
        let cmd: SessionCommand = serde_json::from_str(r#"{"type":"NAVIGATE","direction":"BACK"}"#)
            .unwrap();
        assert_eq!(
            cmd,
            SessionCommand::Navigate {
                direction: NavigationDirection::Back
            }
        );
        let cmd: SessionCommand = serde_json::from_str(r#"{"type":"CLEAR_PLATE"}"#).unwrap();
        assert_eq!(cmd, SessionCommand::ClearPlate);
    }
}
