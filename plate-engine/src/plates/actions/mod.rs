//! Command action implementations
//!
//! Each action implements the `CommandHandler` trait and handles
//! one specific command type.

use enum_dispatch::enum_dispatch;

use super::error::PlateResult;
use super::session::CommitOutcome;
use super::traits::{CommandContext, CommandHandler};
use shared::message::AvailabilityChanged;
use shared::plate::{PlateEvent, PlateLocation, SessionCommand};

mod add_item;
mod cancel_edit;
mod clear_plate;
mod commit_plate;
mod edit_plate;
mod navigate;
mod remove_cart_plate;
mod remove_item;
mod remove_unavailable;
mod set_availability;
mod update_cart_item;
mod update_portions;

pub use add_item::AddItemAction;
pub use cancel_edit::CancelEditAction;
pub use clear_plate::ClearPlateAction;
pub use commit_plate::CommitPlateAction;
pub use edit_plate::EditPlateAction;
pub use navigate::NavigateAction;
pub use remove_cart_plate::RemoveCartPlateAction;
pub use remove_item::RemoveItemAction;
pub use remove_unavailable::RemoveUnavailableAction;
pub use set_availability::SetAvailabilityAction;
pub use update_cart_item::UpdateCartItemAction;
pub use update_portions::UpdatePortionsAction;

/// SessionAction enum - dispatches to concrete action implementations
#[enum_dispatch(CommandHandler)]
#[derive(Debug, Clone)]
pub enum SessionAction {
    AddItem(AddItemAction),
    RemoveItem(RemoveItemAction),
    UpdatePortions(UpdatePortionsAction),
    ClearPlate(ClearPlateAction),
    CommitPlate(CommitPlateAction),
    EditPlate(EditPlateAction),
    CancelEdit(CancelEditAction),
    Navigate(NavigateAction),
    RemoveCartPlate(RemoveCartPlateAction),
    UpdateCartItem(UpdateCartItemAction),
    SetAvailability(SetAvailabilityAction),
    RemoveUnavailable(RemoveUnavailableAction),
}

/// Convert SessionCommand to SessionAction
///
/// This is the ONLY place with a match on SessionCommand.
impl From<&SessionCommand> for SessionAction {
    fn from(cmd: &SessionCommand) -> Self {
        match cmd {
            SessionCommand::AddItem {
                menu_item_id,
                portions,
            } => SessionAction::AddItem(AddItemAction {
                menu_item_id: menu_item_id.clone(),
                portions: *portions,
            }),
            SessionCommand::RemoveItem { menu_item_id } => {
                SessionAction::RemoveItem(RemoveItemAction {
                    menu_item_id: menu_item_id.clone(),
                })
            }
            SessionCommand::UpdatePortions {
                menu_item_id,
                portions,
            } => SessionAction::UpdatePortions(UpdatePortionsAction {
                menu_item_id: menu_item_id.clone(),
                portions: *portions,
            }),
            SessionCommand::ClearPlate => SessionAction::ClearPlate(ClearPlateAction),
            SessionCommand::CommitPlate => SessionAction::CommitPlate(CommitPlateAction),
            SessionCommand::EditPlate { plate } => SessionAction::EditPlate(EditPlateAction {
                plate: plate.clone(),
            }),
            SessionCommand::CancelEdit => SessionAction::CancelEdit(CancelEditAction),
            SessionCommand::Navigate { direction } => SessionAction::Navigate(NavigateAction {
                direction: *direction,
            }),
            SessionCommand::RemoveCartPlate { plate } => {
                SessionAction::RemoveCartPlate(RemoveCartPlateAction {
                    plate: plate.clone(),
                })
            }
            SessionCommand::UpdateCartItem {
                plate,
                menu_item_id,
                portions,
            } => SessionAction::UpdateCartItem(UpdateCartItemAction {
                plate: plate.clone(),
                menu_item_id: menu_item_id.clone(),
                portions: *portions,
            }),
            SessionCommand::SetAvailability {
                menu_item_id,
                available,
            } => SessionAction::SetAvailability(SetAvailabilityAction {
                change: AvailabilityChanged::new(menu_item_id.clone(), *available),
            }),
            SessionCommand::RemoveUnavailable => {
                SessionAction::RemoveUnavailable(RemoveUnavailableAction)
            }
        }
    }
}

/// Run one command against a session.
pub fn dispatch(ctx: &mut CommandContext<'_>, command: &SessionCommand) -> PlateResult<Vec<PlateEvent>> {
    let action = SessionAction::from(command);
    match action.execute(ctx) {
        Ok(events) => {
            tracing::debug!(command = command.kind(), events = events.len(), "Command executed");
            Ok(events)
        }
        Err(e) => {
            tracing::warn!(command = command.kind(), error = %e, "Command rejected");
            Err(e)
        }
    }
}

fn committed_event(committed: &CommitOutcome) -> PlateEvent {
    PlateEvent::PlateCommitted {
        plate_id: committed.plate_id.clone(),
        plate_number: committed.plate_number,
        position: committed.position,
    }
}

fn portion_events(
    location: PlateLocation,
    plate_number: u32,
    menu_item_id: &str,
    item_name: String,
    requested: i32,
    applied: i32,
    clipped_to_cap: Option<i32>,
) -> Vec<PlateEvent> {
    let mut events = vec![PlateEvent::PortionsUpdated {
        location,
        plate_number,
        menu_item_id: menu_item_id.to_string(),
        portions: applied,
    }];
    if let Some(cap) = clipped_to_cap {
        events.push(PlateEvent::PortionsClipped {
            location,
            plate_number,
            menu_item_id: menu_item_id.to_string(),
            item_name,
            requested,
            applied,
            cap,
        });
    }
    events
}
