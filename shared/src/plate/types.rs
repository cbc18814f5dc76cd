//! Shared types for plate composition

use crate::models::MenuItem;
use serde::{Deserialize, Serialize};

// ============================================================================
// Line Item
// ============================================================================

/// One menu item on a plate
///
/// The menu item is a snapshot taken at add time. Price and availability
/// changes reach it only through availability reconciliation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    pub menu_item: MenuItem,
    pub portions: i32,
}

impl LineItem {
    pub fn new(menu_item: MenuItem, portions: i32) -> Self {
        Self {
            menu_item,
            portions,
        }
    }

    #[inline]
    pub fn menu_item_id(&self) -> &str {
        &self.menu_item.id
    }

    #[inline]
    pub fn is_takeaway(&self) -> bool {
        self.menu_item.is_takeaway()
    }

    #[inline]
    pub fn is_available(&self) -> bool {
        self.menu_item.available
    }
}

// ============================================================================
// Plate
// ============================================================================

/// One orderable bundle of menu items
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plate {
    /// Opaque token, unique within a session
    pub id: String,
    /// Session-wide increasing number, starting at 1
    pub plate_number: u32,
    /// Line items, unique by menu item id
    pub items: Vec<LineItem>,
    /// Creation time (Unix milliseconds)
    pub created_at: i64,
}

impl Plate {
    /// Create a plate holding a single line item
    pub fn new(plate_number: u32, first: LineItem) -> Self {
        Self {
            id: crate::util::new_plate_id(),
            plate_number,
            items: vec![first],
            created_at: crate::util::now_millis(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find_item(&self, menu_item_id: &str) -> Option<&LineItem> {
        self.items.iter().find(|l| l.menu_item_id() == menu_item_id)
    }

    pub fn position(&self, menu_item_id: &str) -> Option<usize> {
        self.items
            .iter()
            .position(|l| l.menu_item_id() == menu_item_id)
    }

    /// Total portions across all line items, takeaway or not
    pub fn portion_count(&self) -> i32 {
        self.items.iter().map(|l| l.portions).sum()
    }
}

// ============================================================================
// Location / Navigation
// ============================================================================

/// Where a plate currently lives
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlateLocation {
    /// The builder's in-progress plate
    Builder,
    /// A committed plate in the cart
    Cart,
}

/// Direction for plate-by-plate navigation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NavigationDirection {
    Back,
    Forward,
}

/// A flagged line item together with the plate that holds it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UnavailableLine {
    pub location: PlateLocation,
    pub plate_id: String,
    pub plate_number: u32,
    pub line: LineItem,
}
