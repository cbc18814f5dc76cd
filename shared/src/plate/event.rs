//! Plate events - plain-data signals emitted after command processing
//!
//! Each event is meant to drive a user-facing notification but carries no
//! presentation payload: only plate numbers, cap values and item names.

use super::types::PlateLocation;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Event payload variants
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlateEvent {
    // ========== Builder ==========
    PlateCreated {
        plate_id: String,
        plate_number: u32,
    },

    ItemAdded {
        plate_number: u32,
        menu_item_id: String,
        item_name: String,
        /// Portions the customer asked for
        requested: i32,
        /// Portions actually placed on the plate
        applied: i32,
    },

    /// Adding an item overflowed the shared cap: the current plate was sealed
    /// and committed, and a new plate now holds the added item.
    NewPlateCreated {
        filled_plate_id: String,
        filled_plate_number: u32,
        new_plate_id: String,
        new_plate_number: u32,
        cap: i32,
    },

    PortionsUpdated {
        location: PlateLocation,
        plate_number: u32,
        menu_item_id: String,
        portions: i32,
    },

    /// A portion update was reduced to fit the plate's shared cap
    PortionsClipped {
        location: PlateLocation,
        plate_number: u32,
        menu_item_id: String,
        item_name: String,
        requested: i32,
        applied: i32,
        cap: i32,
    },

    ItemRemoved {
        location: PlateLocation,
        plate_number: u32,
        menu_item_id: String,
        item_name: String,
    },

    /// The plate lost its last item and no longer exists
    PlateDestroyed {
        location: PlateLocation,
        plate_id: String,
        plate_number: u32,
    },

    BuilderCleared {
        #[serde(skip_serializing_if = "Option::is_none")]
        plate_number: Option<u32>,
    },

    // ========== Cart ==========
    PlateCommitted {
        plate_id: String,
        plate_number: u32,
        /// Index in the cart
        position: usize,
    },

    PlateRemovedFromCart {
        plate_id: String,
        plate_number: u32,
    },

    // ========== Editing ==========
    EditStarted {
        plate_id: String,
        plate_number: u32,
    },

    EditCancelled {
        plate_id: String,
        plate_number: u32,
        /// Whether the original plate went back into the cart unchanged
        recommitted: bool,
    },

    ViewChanged {
        view_index: usize,
        view_count: usize,
        #[serde(skip_serializing_if = "Option::is_none")]
        plate_number: Option<u32>,
    },

    // ========== Availability ==========
    ItemsFlagged {
        menu_item_id: String,
        available: bool,
        affected_lines: usize,
    },

    UnavailableRemoved {
        removed_lines: usize,
        destroyed_plates: Vec<u32>,
    },

    // ========== Checkout ==========
    CheckoutCompleted {
        plate_ids: Vec<String>,
        total: Decimal,
        reference: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_tag_shape() {
        let event = PlateEvent::NewPlateCreated {
            filled_plate_id: "a".to_string(),
            filled_plate_number: 1,
            new_plate_id: "b".to_string(),
            new_plate_number: 2,
            cap: 3,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "NEW_PLATE_CREATED");
        assert_eq!(json["filled_plate_number"], 1);
        assert_eq!(json["cap"], 3);
    }

    #[test]
    fn test_builder_cleared_omits_missing_number() {
        let json = serde_json::to_value(PlateEvent::BuilderCleared { plate_number: None }).unwrap();
        assert_eq!(json["type"], "BUILDER_CLEARED");
        assert!(json.get("plate_number").is_none());
    }
}
