//! CancelEdit command handler

use crate::plates::error::PlateResult;
use crate::plates::traits::{CommandContext, CommandHandler};
use shared::plate::PlateEvent;

#[derive(Debug, Clone)]
pub struct CancelEditAction;

impl CommandHandler for CancelEditAction {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> PlateResult<Vec<PlateEvent>> {
        Ok(ctx
            .session
            .cancel_edit()?
            .map(|cancel| PlateEvent::EditCancelled {
                plate_id: cancel.plate_id,
                plate_number: cancel.plate_number,
                recommitted: cancel.recommitted,
            })
            .into_iter()
            .collect())
    }
}
