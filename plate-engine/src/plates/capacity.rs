//! Takeaway capacity rules
//!
//! A plate carries at most one shared cap, taken from whichever takeaway line
//! it already holds. Capacity-exempt lines never count toward that cap and are
//! never clipped by it.

use super::error::{PlateError, PlateResult};
use shared::models::MenuItem;
use shared::plate::{LineItem, Plate};

/// Sum of portions over the plate's takeaway lines
pub fn takeaway_portion_total(plate: &Plate) -> i32 {
    plate
        .items
        .iter()
        .filter(|l| l.is_takeaway())
        .map(|l| l.portions)
        .fold(0, i32::saturating_add)
}

/// Cap of the first takeaway line on the plate, if any
pub fn plate_capacity(plate: &Plate) -> Option<i32> {
    plate
        .items
        .iter()
        .find_map(|l| l.menu_item.max_portions_per_takeaway)
}

/// Cap that governs the plate once `candidate` is added.
///
/// The plate's existing cap always wins over the candidate's own cap.
pub fn shared_capacity(plate: &Plate, candidate: &MenuItem) -> Option<i32> {
    plate_capacity(plate).or(candidate.max_portions_per_takeaway)
}

/// Returns the governing cap when adding `portions` of `candidate` would
/// overflow the plate, `None` when the add fits.
///
/// A plate with no takeaway lines takes the candidate's own cap, so a
/// drinks-only plate overflows as soon as the request alone exceeds it.
pub fn overflow_cap(plate: &Plate, candidate: &MenuItem, portions: i32) -> Option<i32> {
    let cap = shared_capacity(plate, candidate)?;
    let incoming = if candidate.is_takeaway() { portions } else { 0 };
    match takeaway_portion_total(plate).checked_add(incoming) {
        Some(total) => (total > cap).then_some(cap),
        None => Some(cap),
    }
}

/// Outcome of a portion update against one plate
#[derive(Debug, Clone, PartialEq)]
pub enum PortionChange {
    /// No line for that menu item; nothing changed
    NotFound,
    /// The line was removed (requested portions ≤ 0)
    Removed { line: LineItem, plate_emptied: bool },
    /// The line now holds `applied` portions
    Updated {
        requested: i32,
        applied: i32,
        /// Governing cap, present only when the request was clipped
        clipped_to_cap: Option<i32>,
    },
}

/// Apply an in-place portion update to one plate.
///
/// Never splits: a request that would overflow the shared cap is clipped to
/// the room left by the other takeaway lines, or rejected with
/// [`PlateError::LimitExceeded`] when there is no room at all.
pub fn apply_portion_update(
    plate: &mut Plate,
    menu_item_id: &str,
    new_portions: i32,
) -> PlateResult<PortionChange> {
    let Some(idx) = plate.position(menu_item_id) else {
        return Ok(PortionChange::NotFound);
    };

    if new_portions <= 0 {
        let line = plate.items.remove(idx);
        return Ok(PortionChange::Removed {
            line,
            plate_emptied: plate.is_empty(),
        });
    }

    let line = &plate.items[idx];
    let cap = if line.is_takeaway() {
        plate_capacity(plate)
    } else {
        None
    };

    let Some(cap) = cap else {
        plate.items[idx].portions = new_portions;
        return Ok(PortionChange::Updated {
            requested: new_portions,
            applied: new_portions,
            clipped_to_cap: None,
        });
    };

    let other_takeaway = takeaway_portion_total(plate) - line.portions;
    if other_takeaway >= cap {
        return Err(PlateError::LimitExceeded {
            cap,
            plate_number: plate.plate_number,
            item_name: line.menu_item.name.clone(),
        });
    }

    let applied = new_portions.min(cap - other_takeaway);
    plate.items[idx].portions = applied;
    Ok(PortionChange::Updated {
        requested: new_portions,
        applied,
        clipped_to_cap: (applied < new_portions).then_some(cap),
    })
}
