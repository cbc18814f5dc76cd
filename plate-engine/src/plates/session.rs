//! StorefrontSession - one customer's builder, cart, and the editing bridge
//!
//! A plate lives in exactly one place at a time: the builder or the cart.
//! Committing moves it builder → cart; editing moves it cart → builder and
//! remembers where it came from so it can return to the same position.
//!
//! # Concurrency
//!
//! The session assumes a single mutator. Hosts that share it across threads
//! wrap it in [`SharedSession`] and hold the lock for exactly one operation.

use std::sync::Arc;

use parking_lot::Mutex;
use rust_decimal::Decimal;

use super::builder::{AddOutcome, BuilderUpdate, PlateBuilder, RemoveOutcome};
use super::error::{PlateError, PlateResult};
use super::ledger::{CartLedger, LedgerUpdate};
use super::reconciler::{self, AvailabilityReconciler, RemovalReport};
use crate::core::{AbandonedEditPolicy, EngineConfig};
use crate::plate_money;
use shared::message::AvailabilityChanged;
use shared::models::MenuItem;
use shared::plate::{
    NavigationDirection, Plate, PlateLocation, PlateRef, SessionSnapshot, UnavailableLine,
};

/// Session handle for multi-threaded hosts
pub type SharedSession = Arc<Mutex<StorefrontSession>>;

/// A committed plate pulled back into the builder
#[derive(Debug, Clone)]
struct EditingState {
    plate_id: String,
    /// Cart index the plate was taken from
    slot: usize,
    /// The plate as it was when the edit started
    original: Plate,
}

/// Where a plate landed in the cart
#[derive(Debug, Clone, PartialEq)]
pub struct CommitOutcome {
    pub plate_id: String,
    pub plate_number: u32,
    pub position: usize,
}

/// Result of [`StorefrontSession::add_item`]
#[derive(Debug, Clone, PartialEq)]
pub struct SessionAdd {
    pub outcome: AddOutcome,
    /// Set when an auto-split sealed the previous plate into the cart
    pub committed: Option<CommitOutcome>,
}

/// Result of [`StorefrontSession::edit`]
#[derive(Debug, Clone, PartialEq)]
pub enum EditOutcome {
    NotFound,
    Started {
        plate_id: String,
        plate_number: u32,
        /// The in-progress plate committed to make room, if there was one
        parked: Option<CommitOutcome>,
    },
}

/// Result of [`StorefrontSession::cancel_edit`]
#[derive(Debug, Clone, PartialEq)]
pub struct CancelOutcome {
    pub plate_id: String,
    pub plate_number: u32,
    pub recommitted: bool,
}

/// Result of [`StorefrontSession::navigate`]
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationOutcome {
    pub view_index: usize,
    pub view_count: usize,
    /// Plate now on screen; `None` for the empty "new plate" slot
    pub plate_number: Option<u32>,
    pub parked: Option<CommitOutcome>,
}

#[derive(Debug, Clone)]
pub struct StorefrontSession {
    builder: PlateBuilder,
    ledger: CartLedger,
    editing: Option<EditingState>,
    policy: AbandonedEditPolicy,
}

impl Default for StorefrontSession {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

impl StorefrontSession {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            builder: PlateBuilder::new(),
            ledger: CartLedger::new(),
            editing: None,
            policy: config.abandoned_edit_policy,
        }
    }

    /// Wrap into a lockable handle
    pub fn into_shared(self) -> SharedSession {
        Arc::new(Mutex::new(self))
    }

    pub fn builder(&self) -> &PlateBuilder {
        &self.builder
    }

    pub fn ledger(&self) -> &CartLedger {
        &self.ledger
    }

    pub fn current_plate(&self) -> Option<&Plate> {
        self.builder.current_plate()
    }

    /// Id of the committed plate currently being edited
    pub fn editing_plate_id(&self) -> Option<&str> {
        self.editing.as_ref().map(|e| e.plate_id.as_str())
    }

    // ========== Builder ==========

    /// Add an item to the in-progress plate. An auto-split commits the sealed
    /// plate to the cart before returning.
    pub fn add_item(&mut self, menu_item: &MenuItem, portions: i32) -> PlateResult<SessionAdd> {
        let outcome = self.builder.add_item(menu_item, portions)?;
        let Some(split) = &outcome.split else {
            return Ok(SessionAdd {
                outcome,
                committed: None,
            });
        };
        match self.insert_committed(split.filled_plate.clone()) {
            Ok(committed) => Ok(SessionAdd {
                outcome,
                committed: Some(committed),
            }),
            Err(e) => {
                // The sealed plate goes back into the builder; the fresh one is dropped
                self.builder.load_plate(split.filled_plate.clone())?;
                Err(e)
            }
        }
    }

    pub fn remove_item(&mut self, menu_item_id: &str) -> RemoveOutcome {
        let outcome = self.builder.remove_item(menu_item_id);
        if let RemoveOutcome::PlateDestroyed { plate, .. } = &outcome {
            self.forget_edit_of(&plate.id);
        }
        outcome
    }

    pub fn update_item_portions(
        &mut self,
        menu_item_id: &str,
        new_portions: i32,
    ) -> PlateResult<BuilderUpdate> {
        let update = self.builder.update_item_portions(menu_item_id, new_portions)?;
        if let BuilderUpdate::PlateDestroyed { plate, .. } = &update {
            self.forget_edit_of(&plate.id);
        }
        Ok(update)
    }

    /// Discard the in-progress plate ("start over")
    pub fn clear_plate(&mut self) -> Option<Plate> {
        self.editing = None;
        self.builder.clear()
    }

    // ========== Bridge ==========

    /// Commit the in-progress plate to the cart and clear the builder.
    ///
    /// A plate that came out of the cart for editing returns to its old
    /// position; any other plate is appended. If the cart rejects the plate
    /// the builder is left untouched.
    pub fn checkout_plate(&mut self) -> PlateResult<CommitOutcome> {
        self.commit_current()?.ok_or(PlateError::EmptyPlate)
    }

    fn commit_current(&mut self) -> PlateResult<Option<CommitOutcome>> {
        let Some(plate) = self.builder.current_plate() else {
            return Ok(None);
        };
        let committed = self.insert_committed(plate.clone())?;
        self.builder.clear();
        Ok(Some(committed))
    }

    fn insert_committed(&mut self, plate: Plate) -> PlateResult<CommitOutcome> {
        let plate_id = plate.id.clone();
        let plate_number = plate.plate_number;
        let returning_slot = self
            .editing
            .as_ref()
            .filter(|e| e.plate_id == plate_id)
            .map(|e| e.slot);

        let position = match returning_slot {
            Some(slot) => {
                let position = self.ledger.insert(slot, plate)?;
                self.editing = None;
                position
            }
            None => self.ledger.append(plate)?,
        };

        tracing::info!(%plate_id, plate_number, position, "Plate committed to cart");
        Ok(CommitOutcome {
            plate_id,
            plate_number,
            position,
        })
    }

    /// Pull a committed plate back into the builder for editing.
    ///
    /// The plate leaves the cart until it is committed again or the edit is
    /// cancelled. An in-progress plate already in the builder is committed
    /// first so it is never lost.
    pub fn edit(&mut self, plate_id: &str) -> PlateResult<EditOutcome> {
        if !self.ledger.contains(plate_id) {
            return Ok(EditOutcome::NotFound);
        }

        let parked = self.commit_current()?;

        let Some((slot, plate)) = self.ledger.remove(plate_id) else {
            return Ok(EditOutcome::NotFound);
        };
        let original = plate.clone();
        let plate_number = plate.plate_number;

        if let Err(e) = self.builder.load_plate(plate) {
            // Unreachable for cart plates; put it back regardless
            self.ledger.insert(slot, original)?;
            return Err(e);
        }

        tracing::info!(%plate_id, plate_number, slot, "Plate pulled back for editing");
        self.editing = Some(EditingState {
            plate_id: plate_id.to_string(),
            slot,
            original,
        });
        Ok(EditOutcome::Started {
            plate_id: plate_id.to_string(),
            plate_number,
            parked,
        })
    }

    /// Abandon the current edit.
    ///
    /// With [`AbandonedEditPolicy::Recommit`] the original plate returns to
    /// its old cart position unchanged; with `Discard` it is dropped.
    /// Returns `None` when no edit is in progress.
    pub fn cancel_edit(&mut self) -> PlateResult<Option<CancelOutcome>> {
        let Some(editing) = self.editing.take() else {
            return Ok(None);
        };

        if self
            .builder
            .current_plate()
            .is_some_and(|p| p.id == editing.plate_id)
        {
            self.builder.clear();
        }

        let plate_number = editing.original.plate_number;
        let recommitted = match self.policy {
            AbandonedEditPolicy::Recommit => {
                self.ledger.insert(editing.slot, editing.original)?;
                true
            }
            AbandonedEditPolicy::Discard => false,
        };

        tracing::info!(plate_id = %editing.plate_id, plate_number, recommitted, "Edit cancelled");
        Ok(Some(CancelOutcome {
            plate_id: editing.plate_id,
            plate_number,
            recommitted,
        }))
    }

    /// Position of the on-screen plate among cart plates plus the trailing
    /// "new plate" slot.
    pub fn view_index(&self) -> usize {
        self.editing
            .as_ref()
            .map(|e| e.slot)
            .unwrap_or(self.ledger.plate_count())
    }

    pub fn view_count(&self) -> usize {
        self.ledger.plate_count() + 1 + usize::from(self.editing.is_some())
    }

    pub fn can_navigate(&self, direction: NavigationDirection) -> bool {
        match direction {
            NavigationDirection::Back => self.view_index() > 0,
            NavigationDirection::Forward => self.view_index() + 1 < self.view_count(),
        }
    }

    /// Move the viewed plate one step back or forward.
    ///
    /// The builder always holds the on-screen plate: the plate being left is
    /// committed back to the cart and the newly viewed committed plate is
    /// pulled into the builder. First and last positions block further
    /// movement in their direction.
    pub fn navigate(&mut self, direction: NavigationDirection) -> PlateResult<NavigationOutcome> {
        if !self.can_navigate(direction) {
            return Err(PlateError::NavigationBlocked(direction));
        }

        let position = self.view_index();
        // Cart plates before the builder keep their index when it commits,
        // and the plate right after it sits at `position` before the commit.
        let target_index = match direction {
            NavigationDirection::Back => Some(position - 1),
            NavigationDirection::Forward => {
                (position < self.ledger.plate_count()).then_some(position)
            }
        };
        let target_id = target_index
            .and_then(|i| self.ledger.plates().get(i))
            .map(|p| p.id.clone());

        let parked = self.commit_current()?;
        if let Some(id) = target_id {
            self.edit(&id)?;
        }

        let outcome = NavigationOutcome {
            view_index: self.view_index(),
            view_count: self.view_count(),
            plate_number: self.builder.current_plate().map(|p| p.plate_number),
            parked,
        };
        tracing::debug!(
            ?direction,
            view_index = outcome.view_index,
            view_count = outcome.view_count,
            "Navigated plates"
        );
        Ok(outcome)
    }

    // ========== Cart ==========

    /// Resolve a plate number or id to the id of a committed plate
    pub fn resolve_plate_ref(&self, plate: &PlateRef) -> Option<String> {
        match plate {
            PlateRef::Number(number) => self.ledger.get_by_number(*number),
            PlateRef::Id(id) => self.ledger.get(id),
        }
        .map(|p| p.id.clone())
    }

    /// Remove a committed plate. Absent ids are a no-op.
    pub fn remove_cart_plate(&mut self, plate_id: &str) -> Option<Plate> {
        let (index, plate) = self.ledger.remove(plate_id)?;
        self.on_cart_removed(index);
        tracing::info!(%plate_id, plate_number = plate.plate_number, "Plate removed from cart");
        Some(plate)
    }

    pub fn update_cart_item(
        &mut self,
        plate_id: &str,
        menu_item_id: &str,
        new_portions: i32,
    ) -> PlateResult<LedgerUpdate> {
        let update = self
            .ledger
            .update_item_in_plate(plate_id, menu_item_id, new_portions)?;
        if let LedgerUpdate::PlateRemoved { index, .. } = &update {
            self.on_cart_removed(*index);
        }
        Ok(update)
    }

    /// Drop plates paid by an accepted checkout wherever they now live.
    ///
    /// A paid plate pulled back for editing while the payment was in flight
    /// is cleared from the builder and its edit is ended, so it can never be
    /// committed again. Returns the plates that were dropped.
    pub fn settle_checkout(&mut self, plate_ids: &[String]) -> Vec<Plate> {
        let mut settled = Vec::with_capacity(plate_ids.len());
        for plate_id in plate_ids {
            if let Some(plate) = self.remove_cart_plate(plate_id) {
                settled.push(plate);
                continue;
            }
            if self
                .builder
                .current_plate()
                .is_some_and(|p| &p.id == plate_id)
                && let Some(plate) = self.builder.clear()
            {
                tracing::info!(%plate_id, plate_number = plate.plate_number, "Paid plate cleared from builder");
                settled.push(plate);
            }
            self.forget_edit_of(plate_id);
        }
        settled
    }

    fn on_cart_removed(&mut self, index: usize) {
        if let Some(editing) = self.editing.as_mut()
            && index < editing.slot
        {
            editing.slot -= 1;
        }
    }

    fn forget_edit_of(&mut self, plate_id: &str) {
        if self.editing_plate_id() == Some(plate_id) {
            tracing::debug!(%plate_id, "Edited plate emptied, edit discarded");
            self.editing = None;
        }
    }

    pub fn cart_total(&self) -> Decimal {
        self.ledger.total()
    }

    pub fn current_plate_total(&self) -> Decimal {
        self.builder
            .current_plate()
            .map(plate_money::plate_total)
            .unwrap_or(Decimal::ZERO)
    }

    pub fn plate_count(&self) -> usize {
        self.ledger.plate_count()
    }

    // ========== Availability ==========

    /// Apply an availability change to every plate in the session.
    /// Returns how many lines changed.
    pub fn apply_availability(&mut self, event: &AvailabilityChanged) -> usize {
        if let Some(editing) = self.editing.as_mut() {
            reconciler::mark_availability(
                &mut editing.original,
                &event.menu_item_id,
                event.available,
            );
        }
        AvailabilityReconciler::new(&mut self.builder, &mut self.ledger).apply(event)
    }

    pub fn unavailable_items(&self) -> Vec<UnavailableLine> {
        reconciler::unavailable_items(&self.builder, &self.ledger)
    }

    pub fn remove_all_unavailable(&mut self) -> PlateResult<RemovalReport> {
        let report =
            AvailabilityReconciler::new(&mut self.builder, &mut self.ledger).remove_all_unavailable()?;
        for destroyed in &report.destroyed_plates {
            match (destroyed.location, destroyed.cart_index) {
                (PlateLocation::Cart, Some(index)) => self.on_cart_removed(index),
                _ => self.forget_edit_of(&destroyed.plate.id),
            }
        }
        Ok(report)
    }

    // ========== Snapshot ==========

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            current_plate: self.builder.current_plate().cloned(),
            editing_plate_id: self.editing_plate_id().map(str::to_string),
            cart: self.ledger.plates().to_vec(),
            cart_total: self.cart_total(),
            current_plate_total: self.current_plate_total(),
            plate_count: self.plate_count(),
            view_index: self.view_index(),
            view_count: self.view_count(),
            unavailable: self.unavailable_items(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn takeaway(id: &str, price: i64, cap: i32) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: id.to_uppercase(),
            price: Decimal::new(price, 2),
            available: true,
            max_portions_per_takeaway: Some(cap),
        }
    }

    fn drink(id: &str, price: i64) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: id.to_uppercase(),
            price: Decimal::new(price, 2),
            available: true,
            max_portions_per_takeaway: None,
        }
    }

    /// Cart with plates 1, 2, 3 (one item each), builder empty
    fn session_with_three_plates() -> StorefrontSession {
        let mut session = StorefrontSession::default();
        for id in ["a", "b", "c"] {
            session.add_item(&takeaway(id, 500, 3), 1).unwrap();
            session.checkout_plate().unwrap();
        }
        session
    }

    fn cart_numbers(session: &StorefrontSession) -> Vec<u32> {
        session
            .ledger()
            .plates()
            .iter()
            .map(|p| p.plate_number)
            .collect()
    }

    #[test]
    fn test_checkout_plate_moves_builder_to_cart() {
        let mut session = StorefrontSession::default();
        session.add_item(&takeaway("x", 500, 3), 2).unwrap();
        let committed = session.checkout_plate().unwrap();
        assert_eq!(committed.plate_number, 1);
        assert_eq!(committed.position, 0);
        assert!(session.current_plate().is_none());
        assert_eq!(session.plate_count(), 1);
    }

    #[test]
    fn test_checkout_without_plate_is_rejected() {
        let mut session = StorefrontSession::default();
        assert_eq!(session.checkout_plate().unwrap_err(), PlateError::EmptyPlate);
    }

    #[test]
    fn test_auto_split_commits_filled_plate() {
        let mut session = StorefrontSession::default();
        let x = takeaway("x", 500, 3);
        session.add_item(&x, 2).unwrap();
        let add = session.add_item(&x, 2).unwrap();

        assert!(add.outcome.new_plate_created());
        assert_eq!(add.outcome.filled_plate_number(), Some(1));
        let committed = add.committed.unwrap();
        assert_eq!(committed.plate_number, 1);
        assert_eq!(session.ledger().plates()[0].items[0].portions, 2);
        assert_eq!(session.current_plate().unwrap().plate_number, 2);
    }

    #[test]
    fn test_takeaway_overflowing_drink_plate_commits_drinks() {
        let mut session = StorefrontSession::default();
        session.add_item(&drink("cola", 200), 1).unwrap();
        let add = session.add_item(&takeaway("x", 500, 3), 5).unwrap();
        assert!(add.outcome.new_plate_created());
        assert_eq!(add.outcome.filled_plate_number(), Some(1));
        assert_eq!(add.committed.map(|c| c.plate_number), Some(1));
        assert_eq!(session.ledger().plates()[0].items[0].menu_item.id, "cola");
        assert_eq!(session.current_plate().unwrap().items[0].portions, 3);
    }

    #[test]
    fn test_failed_split_commit_restores_sealed_plate() {
        let mut session = StorefrontSession::default();
        session.add_item(&takeaway("x", 500, 3), 3).unwrap();
        let sealed = session.current_plate().unwrap().clone();
        session.ledger.append(sealed.clone()).unwrap();

        let err = session.add_item(&takeaway("x", 500, 3), 1).unwrap_err();
        assert_eq!(err, PlateError::DuplicatePlate(sealed.id.clone()));
        assert_eq!(session.current_plate(), Some(&sealed));
        assert_eq!(session.plate_count(), 1);
    }

    #[test]
    fn test_edit_round_trip_preserves_plate() {
        let mut session = session_with_three_plates();
        let target = session.ledger().plates()[1].clone();
        let total_before = session.cart_total();

        let outcome = session.edit(&target.id).unwrap();
        assert!(matches!(outcome, EditOutcome::Started { plate_number: 2, .. }));
        assert_eq!(session.plate_count(), 2);
        assert!(!session.ledger().contains(&target.id));
        assert_eq!(session.current_plate(), Some(&target));

        let committed = session.checkout_plate().unwrap();
        assert_eq!(committed.position, 1);
        assert_eq!(session.ledger().plates()[1], target);
        assert_eq!(session.cart_total(), total_before);
        assert!(session.editing_plate_id().is_none());
    }

    #[test]
    fn test_edit_missing_plate_is_noop() {
        let mut session = session_with_three_plates();
        assert_eq!(session.edit("missing").unwrap(), EditOutcome::NotFound);
        assert_eq!(session.plate_count(), 3);
    }

    #[test]
    fn test_edit_parks_in_progress_plate() {
        let mut session = session_with_three_plates();
        session.add_item(&drink("cola", 200), 1).unwrap();
        let first_id = session.ledger().plates()[0].id.clone();

        let outcome = session.edit(&first_id).unwrap();
        match outcome {
            EditOutcome::Started { parked, .. } => {
                assert_eq!(parked.map(|p| p.plate_number), Some(4));
            }
            other => panic!("expected edit, got {:?}", other),
        }
        assert_eq!(cart_numbers(&session), vec![2, 3, 4]);
        assert_eq!(session.current_plate().unwrap().plate_number, 1);
    }

    #[test]
    fn test_cancel_edit_recommits_original() {
        let mut session = session_with_three_plates();
        let target = session.ledger().plates()[1].clone();
        session.edit(&target.id).unwrap();
        session.update_item_portions("b", 3).unwrap();

        let cancel = session.cancel_edit().unwrap().unwrap();
        assert!(cancel.recommitted);
        assert_eq!(cart_numbers(&session), vec![1, 2, 3]);
        assert_eq!(session.ledger().plates()[1], target);
        assert!(session.current_plate().is_none());
    }

    #[test]
    fn test_cancel_edit_discard_policy() {
        let config = EngineConfig::default().with_policy(AbandonedEditPolicy::Discard);
        let mut session = StorefrontSession::new(&config);
        session.add_item(&takeaway("a", 500, 3), 1).unwrap();
        let committed = session.checkout_plate().unwrap();
        session.edit(&committed.plate_id).unwrap();

        let cancel = session.cancel_edit().unwrap().unwrap();
        assert!(!cancel.recommitted);
        assert_eq!(session.plate_count(), 0);
        assert!(session.current_plate().is_none());
    }

    #[test]
    fn test_cancel_without_edit_is_noop() {
        let mut session = StorefrontSession::default();
        assert_eq!(session.cancel_edit().unwrap(), None);
    }

    #[test]
    fn test_emptying_edited_plate_discards_edit() {
        let mut session = session_with_three_plates();
        let target_id = session.ledger().plates()[0].id.clone();
        session.edit(&target_id).unwrap();
        assert!(matches!(
            session.remove_item("a"),
            RemoveOutcome::PlateDestroyed { .. }
        ));
        assert!(session.editing_plate_id().is_none());
        assert_eq!(session.cancel_edit().unwrap(), None);
        assert_eq!(cart_numbers(&session), vec![2, 3]);
    }

    #[test]
    fn test_split_while_editing_returns_plate_to_slot() {
        let mut session = session_with_three_plates();
        let target_id = session.ledger().plates()[0].id.clone();
        session.edit(&target_id).unwrap();

        let add = session.add_item(&takeaway("a", 500, 3), 3).unwrap();
        assert!(add.outcome.new_plate_created());
        assert_eq!(add.committed.unwrap().position, 0);
        assert_eq!(cart_numbers(&session), vec![1, 2, 3]);
        assert_eq!(session.current_plate().unwrap().plate_number, 4);
        assert!(session.editing_plate_id().is_none());
    }

    #[test]
    fn test_navigate_back_and_forward() {
        let mut session = session_with_three_plates();
        assert_eq!(session.view_index(), 3);
        assert_eq!(session.view_count(), 4);
        assert!(!session.can_navigate(NavigationDirection::Forward));

        let nav = session.navigate(NavigationDirection::Back).unwrap();
        assert_eq!(nav.plate_number, Some(3));
        assert_eq!(nav.view_index, 2);
        assert_eq!(nav.view_count, 4);

        let nav = session.navigate(NavigationDirection::Back).unwrap();
        assert_eq!(nav.plate_number, Some(2));
        assert_eq!(nav.view_index, 1);
        assert_eq!(cart_numbers(&session), vec![1, 3]);

        let nav = session.navigate(NavigationDirection::Back).unwrap();
        assert_eq!(nav.plate_number, Some(1));
        assert_eq!(nav.view_index, 0);
        assert_eq!(
            session.navigate(NavigationDirection::Back).unwrap_err(),
            PlateError::NavigationBlocked(NavigationDirection::Back)
        );

        let nav = session.navigate(NavigationDirection::Forward).unwrap();
        assert_eq!(nav.plate_number, Some(2));
        assert_eq!(nav.view_index, 1);
        assert_eq!(cart_numbers(&session), vec![1, 3]);

        session.navigate(NavigationDirection::Forward).unwrap();
        let nav = session.navigate(NavigationDirection::Forward).unwrap();
        assert_eq!(nav.plate_number, None);
        assert_eq!(nav.view_index, 3);
        assert_eq!(cart_numbers(&session), vec![1, 2, 3]);
        assert!(session.current_plate().is_none());
    }

    #[test]
    fn test_navigate_back_commits_fresh_plate() {
        let mut session = session_with_three_plates();
        session.add_item(&drink("cola", 200), 1).unwrap();

        let nav = session.navigate(NavigationDirection::Back).unwrap();
        assert_eq!(nav.parked.map(|p| p.plate_number), Some(4));
        assert_eq!(nav.plate_number, Some(3));
        assert_eq!(cart_numbers(&session), vec![1, 2, 4]);
        assert_eq!(session.view_index(), 2);
    }

    #[test]
    fn test_navigation_blocked_on_single_slot() {
        let mut session = StorefrontSession::default();
        assert!(session.navigate(NavigationDirection::Back).is_err());
        assert!(session.navigate(NavigationDirection::Forward).is_err());
    }

    #[test]
    fn test_cart_removal_before_slot_shifts_return_position() {
        let mut session = session_with_three_plates();
        let first_id = session.ledger().plates()[0].id.clone();
        let third_id = session.ledger().plates()[2].id.clone();
        session.edit(&third_id).unwrap();
        assert_eq!(session.view_index(), 2);

        session.remove_cart_plate(&first_id).unwrap();
        assert_eq!(session.view_index(), 1);

        let committed = session.checkout_plate().unwrap();
        assert_eq!(committed.position, 1);
        assert_eq!(cart_numbers(&session), vec![2, 3]);
    }

    #[test]
    fn test_resolve_plate_ref() {
        let session = session_with_three_plates();
        let second_id = session.ledger().plates()[1].id.clone();
        assert_eq!(session.resolve_plate_ref(&PlateRef::Number(2)), Some(second_id.clone()));
        assert_eq!(
            session.resolve_plate_ref(&PlateRef::Id(second_id.clone())),
            Some(second_id)
        );
        assert_eq!(session.resolve_plate_ref(&PlateRef::Number(9)), None);
    }

    #[test]
    fn test_update_cart_item_removing_plate() {
        let mut session = session_with_three_plates();
        let id = session.ledger().plates()[0].id.clone();
        let update = session.update_cart_item(&id, "a", 0).unwrap();
        assert!(matches!(update, LedgerUpdate::PlateRemoved { index: 0, .. }));
        assert_eq!(cart_numbers(&session), vec![2, 3]);
    }

    #[test]
    fn test_availability_reaches_edit_original() {
        let mut session = session_with_three_plates();
        let id = session.ledger().plates()[0].id.clone();
        session.edit(&id).unwrap();

        assert_eq!(
            session.apply_availability(&AvailabilityChanged::new("a", false)),
            1
        );
        session.cancel_edit().unwrap();
        let flagged = session.unavailable_items();
        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged[0].location, PlateLocation::Cart);
        assert_eq!(flagged[0].plate_number, 1);
    }

    #[test]
    fn test_remove_all_unavailable_adjusts_edit_slot() {
        let mut session = session_with_three_plates();
        let third_id = session.ledger().plates()[2].id.clone();
        session.edit(&third_id).unwrap();

        session.apply_availability(&AvailabilityChanged::new("a", false));
        let report = session.remove_all_unavailable().unwrap();
        assert_eq!(report.destroyed_plates.len(), 1);
        assert_eq!(session.view_index(), 1);

        session.checkout_plate().unwrap();
        assert_eq!(cart_numbers(&session), vec![2, 3]);
    }

    #[test]
    fn test_snapshot_totals() {
        let mut session = StorefrontSession::default();
        session.add_item(&takeaway("x", 1250, 3), 2).unwrap();
        session.checkout_plate().unwrap();
        session.add_item(&drink("cola", 199), 2).unwrap();

        let snapshot = session.snapshot();
        assert_eq!(snapshot.cart_total, Decimal::new(2500, 2));
        assert_eq!(snapshot.current_plate_total, Decimal::new(398, 2));
        assert_eq!(snapshot.plate_count, 1);
        assert!(snapshot.can_checkout());
        assert_eq!(snapshot.view_index, 1);
        assert_eq!(snapshot.view_count, 2);
    }
}
