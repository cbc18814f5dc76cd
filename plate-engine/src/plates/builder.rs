//! PlateBuilder - owns the single in-progress plate
//!
//! Items are added, removed and updated here while the customer browses the
//! catalog. An add that overflows the plate's shared takeaway cap seals the
//! current plate and starts a new one (auto-split) instead of failing.

use super::capacity::{self, PortionChange};
use super::error::{PlateError, PlateResult};
use shared::models::MenuItem;
use shared::plate::{LineItem, Plate};

/// Result of [`PlateBuilder::add_item`]
#[derive(Debug, Clone, PartialEq)]
pub struct AddOutcome {
    /// Plate number now holding the item
    pub plate_number: u32,
    /// A fresh plate was started for this add (first add or auto-split)
    pub plate_created: bool,
    /// Portions the customer asked for
    pub requested: i32,
    /// Portions placed on the plate after clipping to the item's own cap
    pub applied: i32,
    /// Set when the add overflowed and the previous plate was sealed
    pub split: Option<SplitInfo>,
}

impl AddOutcome {
    /// Whether the add triggered an auto-split
    pub fn new_plate_created(&self) -> bool {
        self.split.is_some()
    }

    /// Number of the plate sealed by an auto-split
    pub fn filled_plate_number(&self) -> Option<u32> {
        self.split.as_ref().map(|s| s.filled_plate.plate_number)
    }
}

/// The plate sealed by an auto-split, handed back to the caller
#[derive(Debug, Clone, PartialEq)]
pub struct SplitInfo {
    pub filled_plate: Plate,
    pub cap: i32,
}

/// Result of [`PlateBuilder::remove_item`]
#[derive(Debug, Clone, PartialEq)]
pub enum RemoveOutcome {
    NotFound,
    Removed { plate_number: u32, line: LineItem },
    /// The removed line was the last one; the plate no longer exists
    PlateDestroyed { plate: Plate, line: LineItem },
}

/// Owns at most one uncommitted plate and the session's plate numbering
#[derive(Debug, Clone)]
pub struct PlateBuilder {
    current: Option<Plate>,
    next_plate_number: u32,
}

impl Default for PlateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PlateBuilder {
    pub fn new() -> Self {
        Self {
            current: None,
            next_plate_number: 1,
        }
    }

    pub fn current_plate(&self) -> Option<&Plate> {
        self.current.as_ref()
    }

    pub(crate) fn current_plate_mut(&mut self) -> Option<&mut Plate> {
        self.current.as_mut()
    }

    /// Number the next created plate will get
    pub fn next_plate_number(&self) -> u32 {
        self.next_plate_number
    }

    fn allocate_plate_number(&mut self) -> u32 {
        let number = self.next_plate_number;
        self.next_plate_number += 1;
        number
    }

    fn start_plate(&mut self, menu_item: &MenuItem, portions: i32) -> Plate {
        let applied = menu_item.clip_to_own_cap(portions);
        let number = self.allocate_plate_number();
        let plate = Plate::new(number, LineItem::new(menu_item.clone(), applied));
        tracing::debug!(
            plate_id = %plate.id,
            plate_number = number,
            menu_item_id = %menu_item.id,
            portions = applied,
            "Plate created"
        );
        plate
    }

    /// Add `portions` of `menu_item` to the in-progress plate.
    ///
    /// Creates the plate when none exists. When the add would overflow the
    /// plate's shared cap, the current plate is sealed untouched and returned
    /// in [`AddOutcome::split`], and a new plate holding only this item
    /// becomes current.
    pub fn add_item(&mut self, menu_item: &MenuItem, portions: i32) -> PlateResult<AddOutcome> {
        if portions <= 0 {
            return Err(PlateError::InvalidPortions(portions));
        }
        if !menu_item.available {
            return Err(PlateError::ItemUnavailable {
                menu_item_id: menu_item.id.clone(),
                name: menu_item.name.clone(),
            });
        }

        let Some(current) = self.current.as_mut() else {
            let plate = self.start_plate(menu_item, portions);
            let outcome = AddOutcome {
                plate_number: plate.plate_number,
                plate_created: true,
                requested: portions,
                applied: plate.items[0].portions,
                split: None,
            };
            self.current = Some(plate);
            return Ok(outcome);
        };

        if let Some(cap) = capacity::overflow_cap(current, menu_item, portions) {
            let plate = self.start_plate(menu_item, portions);
            let applied = plate.items[0].portions;
            let plate_number = plate.plate_number;
            let filled_plate = self.current.replace(plate).ok_or(PlateError::EmptyPlate)?;
            tracing::info!(
                filled_plate_number = filled_plate.plate_number,
                new_plate_number = plate_number,
                cap,
                "Plate capacity reached, started a new plate"
            );
            return Ok(AddOutcome {
                plate_number,
                plate_created: true,
                requested: portions,
                applied,
                split: Some(SplitInfo { filled_plate, cap }),
            });
        }

        match current.position(&menu_item.id) {
            Some(idx) => {
                let line = &mut current.items[idx];
                line.portions = line
                    .portions
                    .checked_add(portions)
                    .ok_or(PlateError::InvalidPortions(portions))?;
            }
            None => current
                .items
                .push(LineItem::new(menu_item.clone(), portions)),
        }

        Ok(AddOutcome {
            plate_number: current.plate_number,
            plate_created: false,
            requested: portions,
            applied: portions,
            split: None,
        })
    }

    /// Remove a line from the in-progress plate. Absent items are a no-op.
    pub fn remove_item(&mut self, menu_item_id: &str) -> RemoveOutcome {
        match self.update_item_portions(menu_item_id, 0) {
            Ok(BuilderUpdate::Removed { plate_number, line }) => {
                RemoveOutcome::Removed { plate_number, line }
            }
            Ok(BuilderUpdate::PlateDestroyed { plate, line }) => {
                RemoveOutcome::PlateDestroyed { plate, line }
            }
            _ => RemoveOutcome::NotFound,
        }
    }

    /// Set a line's portions in place.
    ///
    /// `new_portions ≤ 0` removes the line. Requests above the room left by
    /// the plate's other takeaway lines are clipped; a plate already
    /// saturated by other lines rejects the update. Never splits.
    pub fn update_item_portions(
        &mut self,
        menu_item_id: &str,
        new_portions: i32,
    ) -> PlateResult<BuilderUpdate> {
        let Some(plate) = self.current.as_mut() else {
            return Ok(BuilderUpdate::NotFound);
        };
        let plate_number = plate.plate_number;

        match capacity::apply_portion_update(plate, menu_item_id, new_portions)? {
            PortionChange::NotFound => Ok(BuilderUpdate::NotFound),
            PortionChange::Removed {
                line,
                plate_emptied: false,
            } => Ok(BuilderUpdate::Removed { plate_number, line }),
            PortionChange::Removed {
                line,
                plate_emptied: true,
            } => {
                let plate = self.current.take().ok_or(PlateError::EmptyPlate)?;
                tracing::debug!(plate_id = %plate.id, plate_number, "Plate emptied and destroyed");
                Ok(BuilderUpdate::PlateDestroyed { plate, line })
            }
            PortionChange::Updated {
                requested,
                applied,
                clipped_to_cap,
            } => Ok(BuilderUpdate::Updated {
                plate_number,
                requested,
                applied,
                clipped_to_cap,
            }),
        }
    }

    /// Replace the in-progress plate wholesale, keeping its plate number.
    ///
    /// Returns the plate that was current before, if any.
    pub fn load_plate(&mut self, plate: Plate) -> PlateResult<Option<Plate>> {
        if plate.is_empty() {
            return Err(PlateError::EmptyPlate);
        }
        self.next_plate_number = self.next_plate_number.max(plate.plate_number + 1);
        Ok(self.current.replace(plate))
    }

    /// Discard the in-progress plate unconditionally
    pub fn clear(&mut self) -> Option<Plate> {
        self.current.take()
    }
}

/// Result of [`PlateBuilder::update_item_portions`]
#[derive(Debug, Clone, PartialEq)]
pub enum BuilderUpdate {
    NotFound,
    Updated {
        plate_number: u32,
        requested: i32,
        applied: i32,
        clipped_to_cap: Option<i32>,
    },
    Removed {
        plate_number: u32,
        line: LineItem,
    },
    PlateDestroyed {
        plate: Plate,
        line: LineItem,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plates::capacity::{plate_capacity, takeaway_portion_total};
    use rust_decimal::Decimal;

    fn takeaway(id: &str, cap: i32) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: id.to_uppercase(),
            price: Decimal::new(1000, 2),
            available: true,
            max_portions_per_takeaway: Some(cap),
        }
    }

    fn drink(id: &str) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: id.to_uppercase(),
            price: Decimal::new(200, 2),
            available: true,
            max_portions_per_takeaway: None,
        }
    }

    fn assert_within_capacity(builder: &PlateBuilder) {
        if let Some(plate) = builder.current_plate() {
            assert!(!plate.is_empty());
            if let Some(cap) = plate_capacity(plate) {
                assert!(takeaway_portion_total(plate) <= cap);
            }
        }
    }

    #[test]
    fn test_first_add_creates_plate() {
        let mut builder = PlateBuilder::new();
        let outcome = builder.add_item(&takeaway("x", 3), 2).unwrap();
        assert!(outcome.plate_created);
        assert!(!outcome.new_plate_created());
        assert_eq!(outcome.plate_number, 1);
        assert_eq!(builder.next_plate_number(), 2);
        assert_eq!(builder.current_plate().unwrap().items[0].portions, 2);
    }

    #[test]
    fn test_first_add_clipped_to_own_cap() {
        let mut builder = PlateBuilder::new();
        let outcome = builder.add_item(&takeaway("x", 3), 7).unwrap();
        assert_eq!(outcome.requested, 7);
        assert_eq!(outcome.applied, 3);
        assert_within_capacity(&builder);
    }

    #[test]
    fn test_overflow_splits_into_new_plate() {
        let mut builder = PlateBuilder::new();
        let x = takeaway("x", 3);
        builder.add_item(&x, 2).unwrap();

        let outcome = builder.add_item(&x, 2).unwrap();
        assert!(outcome.new_plate_created());
        assert_eq!(outcome.filled_plate_number(), Some(1));
        assert_eq!(outcome.plate_number, 2);
        assert_eq!(outcome.applied, 2);

        let split = outcome.split.unwrap();
        assert_eq!(split.cap, 3);
        assert_eq!(split.filled_plate.items.len(), 1);
        assert_eq!(split.filled_plate.items[0].portions, 2);

        let current = builder.current_plate().unwrap();
        assert_eq!(current.plate_number, 2);
        assert_eq!(current.items[0].portions, 2);
        assert_ne!(current.id, split.filled_plate.id);
    }

    #[test]
    fn test_split_plate_clips_to_new_item_cap() {
        let mut builder = PlateBuilder::new();
        builder.add_item(&takeaway("x", 3), 3).unwrap();
        let outcome = builder.add_item(&takeaway("z", 2), 5).unwrap();
        assert!(outcome.new_plate_created());
        assert_eq!(outcome.applied, 2);
        assert_within_capacity(&builder);
    }

    #[test]
    fn test_merge_same_item_within_cap() {
        let mut builder = PlateBuilder::new();
        let x = takeaway("x", 5);
        builder.add_item(&x, 2).unwrap();
        let outcome = builder.add_item(&x, 3).unwrap();
        assert!(!outcome.plate_created);
        let plate = builder.current_plate().unwrap();
        assert_eq!(plate.items.len(), 1);
        assert_eq!(plate.items[0].portions, 5);
    }

    #[test]
    fn test_existing_cap_governs_new_line() {
        let mut builder = PlateBuilder::new();
        builder.add_item(&takeaway("x", 5), 1).unwrap();
        let outcome = builder.add_item(&takeaway("z", 2), 3).unwrap();
        assert!(!outcome.new_plate_created());
        assert_eq!(outcome.applied, 3);
        assert_eq!(takeaway_portion_total(builder.current_plate().unwrap()), 4);
    }

    #[test]
    fn test_drinks_never_trigger_split() {
        let mut builder = PlateBuilder::new();
        builder.add_item(&takeaway("x", 3), 3).unwrap();
        for _ in 0..5 {
            let outcome = builder.add_item(&drink("cola"), 10).unwrap();
            assert!(!outcome.new_plate_created());
        }
        let plate = builder.current_plate().unwrap();
        assert_eq!(plate.plate_number, 1);
        assert_eq!(plate.find_item("cola").unwrap().portions, 50);
        assert_eq!(takeaway_portion_total(plate), 3);
    }

    #[test]
    fn test_takeaway_overflowing_drink_plate_splits() {
        let mut builder = PlateBuilder::new();
        builder.add_item(&drink("cola"), 1).unwrap();
        let outcome = builder.add_item(&takeaway("x", 3), 5).unwrap();
        assert!(outcome.new_plate_created());
        assert_eq!(outcome.filled_plate_number(), Some(1));
        assert_eq!(outcome.plate_number, 2);
        assert_eq!(outcome.applied, 3);

        let split = outcome.split.unwrap();
        assert_eq!(split.cap, 3);
        assert_eq!(split.filled_plate.items.len(), 1);
        assert_eq!(split.filled_plate.items[0].menu_item.id, "cola");

        let current = builder.current_plate().unwrap();
        assert_eq!(current.items.len(), 1);
        assert_eq!(current.items[0].menu_item.id, "x");
        assert_eq!(current.items[0].portions, 3);
    }

    #[test]
    fn test_takeaway_fitting_drink_plate_merges() {
        let mut builder = PlateBuilder::new();
        builder.add_item(&drink("cola"), 1).unwrap();
        let outcome = builder.add_item(&takeaway("x", 3), 3).unwrap();
        assert!(!outcome.plate_created);
        assert_eq!(outcome.applied, 3);
        assert_eq!(builder.current_plate().unwrap().items.len(), 2);
        assert_within_capacity(&builder);
    }

    #[test]
    fn test_portion_overflow_rejected_without_panic() {
        let mut builder = PlateBuilder::new();
        builder.add_item(&drink("cola"), 1).unwrap();
        assert_eq!(
            builder.add_item(&drink("cola"), i32::MAX).unwrap_err(),
            PlateError::InvalidPortions(i32::MAX)
        );
        assert_eq!(builder.current_plate().unwrap().items[0].portions, 1);

        let mut builder = PlateBuilder::new();
        builder.add_item(&takeaway("x", 3), 2).unwrap();
        let outcome = builder.add_item(&takeaway("x", 3), i32::MAX).unwrap();
        assert!(outcome.new_plate_created());
        assert_eq!(outcome.applied, 3);
        assert_within_capacity(&builder);
    }

    #[test]
    fn test_unavailable_item_rejected_without_change() {
        let mut builder = PlateBuilder::new();
        let mut x = takeaway("x", 3);
        x.available = false;
        let err = builder.add_item(&x, 1).unwrap_err();
        assert!(matches!(err, PlateError::ItemUnavailable { .. }));
        assert!(builder.current_plate().is_none());
        assert_eq!(builder.next_plate_number(), 1);
    }

    #[test]
    fn test_non_positive_portions_rejected() {
        let mut builder = PlateBuilder::new();
        assert_eq!(
            builder.add_item(&drink("cola"), 0).unwrap_err(),
            PlateError::InvalidPortions(0)
        );
        assert_eq!(
            builder.add_item(&drink("cola"), -2).unwrap_err(),
            PlateError::InvalidPortions(-2)
        );
    }

    #[test]
    fn test_remove_last_item_destroys_plate() {
        let mut builder = PlateBuilder::new();
        builder.add_item(&takeaway("x", 3), 1).unwrap();
        builder.add_item(&drink("cola"), 1).unwrap();

        assert!(matches!(
            builder.remove_item("cola"),
            RemoveOutcome::Removed { plate_number: 1, .. }
        ));
        assert!(matches!(
            builder.remove_item("x"),
            RemoveOutcome::PlateDestroyed { .. }
        ));
        assert!(builder.current_plate().is_none());
        assert_eq!(builder.remove_item("x"), RemoveOutcome::NotFound);
    }

    #[test]
    fn test_update_clips_and_reports() {
        let mut builder = PlateBuilder::new();
        builder.add_item(&takeaway("x", 3), 1).unwrap();
        let update = builder.update_item_portions("x", 5).unwrap();
        assert_eq!(
            update,
            BuilderUpdate::Updated {
                plate_number: 1,
                requested: 5,
                applied: 3,
                clipped_to_cap: Some(3)
            }
        );
        assert_within_capacity(&builder);
    }

    #[test]
    fn test_update_never_creates_plate() {
        let mut builder = PlateBuilder::new();
        builder.add_item(&takeaway("x", 3), 3).unwrap();
        builder.update_item_portions("x", 9).unwrap();
        assert_eq!(builder.next_plate_number(), 2);
    }

    #[test]
    fn test_update_to_zero_destroys_plate() {
        let mut builder = PlateBuilder::new();
        builder.add_item(&takeaway("x", 3), 2).unwrap();
        let update = builder.update_item_portions("x", 0).unwrap();
        assert!(matches!(update, BuilderUpdate::PlateDestroyed { .. }));
        assert!(builder.current_plate().is_none());
    }

    #[test]
    fn test_update_without_plate_is_noop() {
        let mut builder = PlateBuilder::new();
        assert_eq!(
            builder.update_item_portions("x", 2).unwrap(),
            BuilderUpdate::NotFound
        );
    }

    #[test]
    fn test_numbering_monotonic_across_clear() {
        let mut builder = PlateBuilder::new();
        builder.add_item(&drink("cola"), 1).unwrap();
        builder.clear();
        let outcome = builder.add_item(&drink("cola"), 1).unwrap();
        assert_eq!(outcome.plate_number, 2);
        builder.remove_item("cola");
        let outcome = builder.add_item(&drink("cola"), 1).unwrap();
        assert_eq!(outcome.plate_number, 3);
    }

    #[test]
    fn test_load_plate_keeps_number() {
        let mut builder = PlateBuilder::new();
        let plate = Plate::new(7, LineItem::new(takeaway("x", 3), 2));
        assert_eq!(builder.load_plate(plate).unwrap(), None);
        assert_eq!(builder.current_plate().unwrap().plate_number, 7);
        assert_eq!(builder.next_plate_number(), 8);

        // Loading an older plate never rewinds numbering
        let older = Plate::new(2, LineItem::new(takeaway("x", 3), 1));
        let previous = builder.load_plate(older).unwrap();
        assert_eq!(previous.map(|p| p.plate_number), Some(7));
        assert_eq!(builder.next_plate_number(), 8);
    }

    #[test]
    fn test_load_empty_plate_rejected() {
        let mut builder = PlateBuilder::new();
        builder.add_item(&drink("cola"), 1).unwrap();
        let mut empty = Plate::new(5, LineItem::new(drink("water"), 1));
        empty.items.clear();
        assert_eq!(builder.load_plate(empty).unwrap_err(), PlateError::EmptyPlate);
        assert_eq!(builder.current_plate().unwrap().plate_number, 1);
        assert_eq!(builder.next_plate_number(), 2);
    }
}
