//! RemoveCartPlate command handler

use crate::plates::error::PlateResult;
use crate::plates::traits::{CommandContext, CommandHandler};
use shared::plate::{PlateEvent, PlateRef};

#[derive(Debug, Clone)]
pub struct RemoveCartPlateAction {
    pub plate: PlateRef,
}

impl CommandHandler for RemoveCartPlateAction {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> PlateResult<Vec<PlateEvent>> {
        let removed = ctx
            .session
            .resolve_plate_ref(&self.plate)
            .and_then(|id| ctx.session.remove_cart_plate(&id));

        Ok(removed
            .map(|plate| PlateEvent::PlateRemovedFromCart {
                plate_id: plate.id,
                plate_number: plate.plate_number,
            })
            .into_iter()
            .collect())
    }
}
