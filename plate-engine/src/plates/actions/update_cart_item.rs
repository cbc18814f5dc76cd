//! UpdateCartItem command handler
//!
//! Edits one line of one committed plate in place. The other plates are
//! untouched; a plate left empty leaves the cart.

use crate::plates::error::PlateResult;
use crate::plates::ledger::LedgerUpdate;
use crate::plates::traits::{CommandContext, CommandHandler};
use crate::utils::validation;
use shared::plate::{PlateEvent, PlateLocation, PlateRef};

#[derive(Debug, Clone)]
pub struct UpdateCartItemAction {
    pub plate: PlateRef,
    pub menu_item_id: String,
    pub portions: i32,
}

impl CommandHandler for UpdateCartItemAction {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> PlateResult<Vec<PlateEvent>> {
        validation::validate_portion_update(self.portions, ctx.config.max_portions_per_line)?;

        let Some(plate_id) = ctx.session.resolve_plate_ref(&self.plate) else {
            return Ok(vec![]);
        };

        let update = ctx
            .session
            .update_cart_item(&plate_id, &self.menu_item_id, self.portions)?;

        let events = match update {
            LedgerUpdate::PlateNotFound | LedgerUpdate::ItemNotFound => vec![],
            LedgerUpdate::Updated {
                plate_number,
                requested,
                applied,
                clipped_to_cap,
            } => {
                let item_name = ctx
                    .session
                    .ledger()
                    .get(&plate_id)
                    .and_then(|p| p.find_item(&self.menu_item_id))
                    .map(|line| line.menu_item.name.clone())
                    .unwrap_or_default();
                super::portion_events(
                    PlateLocation::Cart,
                    plate_number,
                    &self.menu_item_id,
                    item_name,
                    requested,
                    applied,
                    clipped_to_cap,
                )
            }
            LedgerUpdate::ItemRemoved { plate_number, line } => vec![PlateEvent::ItemRemoved {
                location: PlateLocation::Cart,
                plate_number,
                menu_item_id: line.menu_item.id,
                item_name: line.menu_item.name,
            }],
            LedgerUpdate::PlateRemoved { plate, line, .. } => vec![
                PlateEvent::ItemRemoved {
                    location: PlateLocation::Cart,
                    plate_number: plate.plate_number,
                    menu_item_id: line.menu_item.id,
                    item_name: line.menu_item.name,
                },
                PlateEvent::PlateDestroyed {
                    location: PlateLocation::Cart,
                    plate_id: plate.id,
                    plate_number: plate.plate_number,
                },
            ],
        };
        Ok(events)
    }
}
