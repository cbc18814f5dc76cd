//! AvailabilityReconciler - applies live availability changes to plates
//!
//! Flagged lines stay on their plates: checkout blocks on them and the
//! customer decides how to resolve. Bulk removal reuses the ordinary removal
//! paths so emptied plates disappear the usual way.

use super::builder::{PlateBuilder, RemoveOutcome};
use super::error::PlateResult;
use super::ledger::{CartLedger, LedgerUpdate};
use shared::message::AvailabilityChanged;
use shared::plate::{Plate, PlateLocation, UnavailableLine};

/// Set the availability snapshot of every line for `menu_item_id` on one
/// plate. Returns how many lines changed.
pub fn mark_availability(plate: &mut Plate, menu_item_id: &str, available: bool) -> usize {
    let mut changed = 0;
    for line in plate
        .items
        .iter_mut()
        .filter(|l| l.menu_item_id() == menu_item_id && l.menu_item.available != available)
    {
        line.menu_item.available = available;
        changed += 1;
    }
    changed
}

/// Flagged lines across builder and cart, builder first
pub fn unavailable_items(builder: &PlateBuilder, ledger: &CartLedger) -> Vec<UnavailableLine> {
    let builder_lines = builder
        .current_plate()
        .into_iter()
        .map(|p| (PlateLocation::Builder, p));
    let cart_lines = ledger.plates().iter().map(|p| (PlateLocation::Cart, p));

    builder_lines
        .chain(cart_lines)
        .flat_map(|(location, plate)| {
            plate
                .items
                .iter()
                .filter(|l| !l.is_available())
                .map(move |line| UnavailableLine {
                    location,
                    plate_id: plate.id.clone(),
                    plate_number: plate.plate_number,
                    line: line.clone(),
                })
        })
        .collect()
}

/// What [`AvailabilityReconciler::remove_all_unavailable`] did
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RemovalReport {
    pub removed_lines: usize,
    /// Plates destroyed because their last line was removed
    pub destroyed_plates: Vec<DestroyedPlate>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DestroyedPlate {
    pub location: PlateLocation,
    pub plate: Plate,
    /// Former cart index (cart plates only)
    pub cart_index: Option<usize>,
}

/// Mutable view over one session's builder and cart
pub struct AvailabilityReconciler<'a> {
    builder: &'a mut PlateBuilder,
    ledger: &'a mut CartLedger,
}

impl<'a> AvailabilityReconciler<'a> {
    pub fn new(builder: &'a mut PlateBuilder, ledger: &'a mut CartLedger) -> Self {
        Self { builder, ledger }
    }

    /// Apply one availability event. Returns how many lines changed.
    pub fn apply(&mut self, event: &AvailabilityChanged) -> usize {
        let mut changed = 0;
        if let Some(plate) = self.builder.current_plate_mut() {
            changed += mark_availability(plate, &event.menu_item_id, event.available);
        }
        for plate in self.ledger.plates_mut() {
            changed += mark_availability(plate, &event.menu_item_id, event.available);
        }
        if changed > 0 {
            tracing::info!(
                menu_item_id = %event.menu_item_id,
                available = event.available,
                changed,
                "Availability change applied to plates"
            );
        }
        changed
    }

    pub fn unavailable_items(&self) -> Vec<UnavailableLine> {
        unavailable_items(self.builder, self.ledger)
    }

    /// Remove every flagged line from builder and cart
    pub fn remove_all_unavailable(&mut self) -> PlateResult<RemovalReport> {
        let mut report = RemovalReport::default();

        for flagged in self.unavailable_items() {
            match flagged.location {
                PlateLocation::Builder => match self.builder.remove_item(flagged.line.menu_item_id()) {
                    RemoveOutcome::NotFound => {}
                    RemoveOutcome::Removed { .. } => report.removed_lines += 1,
                    RemoveOutcome::PlateDestroyed { plate, .. } => {
                        report.removed_lines += 1;
                        report.destroyed_plates.push(DestroyedPlate {
                            location: PlateLocation::Builder,
                            plate,
                            cart_index: None,
                        });
                    }
                },
                PlateLocation::Cart => {
                    let update = self.ledger.update_item_in_plate(
                        &flagged.plate_id,
                        flagged.line.menu_item_id(),
                        0,
                    )?;
                    match update {
                        LedgerUpdate::ItemRemoved { .. } => report.removed_lines += 1,
                        LedgerUpdate::PlateRemoved { index, plate, .. } => {
                            report.removed_lines += 1;
                            report.destroyed_plates.push(DestroyedPlate {
                                location: PlateLocation::Cart,
                                plate,
                                cart_index: Some(index),
                            });
                        }
                        _ => {}
                    }
                }
            }
        }

        if report.removed_lines > 0 {
            tracing::info!(
                removed_lines = report.removed_lines,
                destroyed_plates = report.destroyed_plates.len(),
                "Unavailable items removed"
            );
        }
        Ok(report)
    }
}
