//! CartLedger - ordered collection of committed plates
//!
//! Insertion order is checkout order. The ledger never holds an empty plate
//! and never holds two plates with the same id.

use super::capacity::{self, PortionChange};
use super::error::{PlateError, PlateResult};
use crate::plate_money;
use rust_decimal::Decimal;
use shared::plate::{LineItem, Plate};

/// Result of [`CartLedger::update_item_in_plate`]
#[derive(Debug, Clone, PartialEq)]
pub enum LedgerUpdate {
    PlateNotFound,
    ItemNotFound,
    Updated {
        plate_number: u32,
        requested: i32,
        applied: i32,
        clipped_to_cap: Option<i32>,
    },
    ItemRemoved {
        plate_number: u32,
        line: LineItem,
    },
    /// The plate lost its last item and was dropped from the ledger
    PlateRemoved {
        index: usize,
        plate: Plate,
        line: LineItem,
    },
}

#[derive(Debug, Clone, Default)]
pub struct CartLedger {
    plates: Vec<Plate>,
}

impl CartLedger {
    pub fn new() -> Self {
        Self::default()
    }

    fn check_insertable(&self, plate: &Plate) -> PlateResult<()> {
        if plate.is_empty() {
            return Err(PlateError::EmptyPlate);
        }
        if self.contains(&plate.id) {
            return Err(PlateError::DuplicatePlate(plate.id.clone()));
        }
        Ok(())
    }

    /// Append a finished plate at the end. Returns its index.
    pub fn append(&mut self, plate: Plate) -> PlateResult<usize> {
        self.check_insertable(&plate)?;
        tracing::debug!(plate_id = %plate.id, plate_number = plate.plate_number, "Plate appended to cart");
        self.plates.push(plate);
        Ok(self.plates.len() - 1)
    }

    /// Insert a plate at `index` (clamped to the end). Returns its index.
    pub fn insert(&mut self, index: usize, plate: Plate) -> PlateResult<usize> {
        self.check_insertable(&plate)?;
        let index = index.min(self.plates.len());
        tracing::debug!(plate_id = %plate.id, plate_number = plate.plate_number, index, "Plate inserted into cart");
        self.plates.insert(index, plate);
        Ok(index)
    }

    /// Remove the plate with that id, returning it with its former index.
    /// Absent ids are a no-op.
    pub fn remove(&mut self, plate_id: &str) -> Option<(usize, Plate)> {
        let index = self.position(plate_id)?;
        Some((index, self.plates.remove(index)))
    }

    /// Update one line of one committed plate.
    ///
    /// Same semantics as the builder's portion update, scoped to that plate's
    /// own shared cap. A plate left without items is dropped.
    pub fn update_item_in_plate(
        &mut self,
        plate_id: &str,
        menu_item_id: &str,
        new_portions: i32,
    ) -> PlateResult<LedgerUpdate> {
        let Some(index) = self.position(plate_id) else {
            return Ok(LedgerUpdate::PlateNotFound);
        };
        let plate = &mut self.plates[index];
        let plate_number = plate.plate_number;

        match capacity::apply_portion_update(plate, menu_item_id, new_portions)? {
            PortionChange::NotFound => Ok(LedgerUpdate::ItemNotFound),
            PortionChange::Removed {
                line,
                plate_emptied: false,
            } => Ok(LedgerUpdate::ItemRemoved { plate_number, line }),
            PortionChange::Removed {
                line,
                plate_emptied: true,
            } => {
                let plate = self.plates.remove(index);
                tracing::debug!(plate_id = %plate.id, plate_number, "Cart plate emptied and removed");
                Ok(LedgerUpdate::PlateRemoved { index, plate, line })
            }
            PortionChange::Updated {
                requested,
                applied,
                clipped_to_cap,
            } => Ok(LedgerUpdate::Updated {
                plate_number,
                requested,
                applied,
                clipped_to_cap,
            }),
        }
    }

    /// Sum of `price × portions` over every line of every plate
    pub fn total(&self) -> Decimal {
        plate_money::cart_total(&self.plates)
    }

    /// Number of committed plates (orderable units, not item count)
    pub fn plate_count(&self) -> usize {
        self.plates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plates.is_empty()
    }

    pub fn plates(&self) -> &[Plate] {
        &self.plates
    }

    pub(crate) fn plates_mut(&mut self) -> &mut [Plate] {
        &mut self.plates
    }

    pub fn get(&self, plate_id: &str) -> Option<&Plate> {
        self.plates.iter().find(|p| p.id == plate_id)
    }

    pub fn get_by_number(&self, plate_number: u32) -> Option<&Plate> {
        self.plates.iter().find(|p| p.plate_number == plate_number)
    }

    pub fn position(&self, plate_id: &str) -> Option<usize> {
        self.plates.iter().position(|p| p.id == plate_id)
    }

    pub fn contains(&self, plate_id: &str) -> bool {
        self.position(plate_id).is_some()
    }
}
