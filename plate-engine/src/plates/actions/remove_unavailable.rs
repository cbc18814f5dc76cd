//! RemoveUnavailable command handler

use crate::plates::error::PlateResult;
use crate::plates::traits::{CommandContext, CommandHandler};
use shared::plate::PlateEvent;

#[derive(Debug, Clone)]
pub struct RemoveUnavailableAction;

impl CommandHandler for RemoveUnavailableAction {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> PlateResult<Vec<PlateEvent>> {
        let report = ctx.session.remove_all_unavailable()?;

        let mut events: Vec<PlateEvent> = report
            .destroyed_plates
            .iter()
            .map(|destroyed| PlateEvent::PlateDestroyed {
                location: destroyed.location,
                plate_id: destroyed.plate.id.clone(),
                plate_number: destroyed.plate.plate_number,
            })
            .collect();
        events.push(PlateEvent::UnavailableRemoved {
            removed_lines: report.removed_lines,
            destroyed_plates: report
                .destroyed_plates
                .iter()
                .map(|d| d.plate.plate_number)
                .collect(),
        });
        Ok(events)
    }
}
