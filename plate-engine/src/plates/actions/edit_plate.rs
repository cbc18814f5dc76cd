//! EditPlate command handler
//!
//! Pulls a committed plate back into the builder. Unknown plates are a no-op.

use crate::plates::error::PlateResult;
use crate::plates::session::EditOutcome;
use crate::plates::traits::{CommandContext, CommandHandler};
use shared::plate::{PlateEvent, PlateRef};

#[derive(Debug, Clone)]
pub struct EditPlateAction {
    pub plate: PlateRef,
}

impl CommandHandler for EditPlateAction {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> PlateResult<Vec<PlateEvent>> {
        let Some(plate_id) = ctx.session.resolve_plate_ref(&self.plate) else {
            tracing::debug!(plate = ?self.plate, "Edit requested for unknown plate");
            return Ok(vec![]);
        };

        let events = match ctx.session.edit(&plate_id)? {
            EditOutcome::NotFound => vec![],
            EditOutcome::Started {
                plate_id,
                plate_number,
                parked,
            } => {
                let mut events: Vec<PlateEvent> =
                    parked.iter().map(super::committed_event).collect();
                events.push(PlateEvent::EditStarted {
                    plate_id,
                    plate_number,
                });
                events
            }
        };
        Ok(events)
    }
}
