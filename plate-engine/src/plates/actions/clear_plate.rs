//! ClearPlate command handler
//!
//! Drops the in-progress plate. A plate pulled out of the cart for editing
//! is dropped with it.

use crate::plates::error::PlateResult;
use crate::plates::traits::{CommandContext, CommandHandler};
use shared::plate::PlateEvent;

#[derive(Debug, Clone)]
pub struct ClearPlateAction;

impl CommandHandler for ClearPlateAction {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> PlateResult<Vec<PlateEvent>> {
        let cleared = ctx.session.clear_plate();
        Ok(vec![PlateEvent::BuilderCleared {
            plate_number: cleared.map(|p| p.plate_number),
        }])
    }
}
