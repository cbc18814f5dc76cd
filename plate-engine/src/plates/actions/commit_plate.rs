//! CommitPlate command handler

use crate::plates::error::PlateResult;
use crate::plates::traits::{CommandContext, CommandHandler};
use shared::plate::PlateEvent;

#[derive(Debug, Clone)]
pub struct CommitPlateAction;

impl CommandHandler for CommitPlateAction {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> PlateResult<Vec<PlateEvent>> {
        let committed = ctx.session.checkout_plate()?;
        Ok(vec![super::committed_event(&committed)])
    }
}
