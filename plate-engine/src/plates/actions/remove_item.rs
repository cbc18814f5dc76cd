//! RemoveItem command handler

use crate::plates::builder::RemoveOutcome;
use crate::plates::error::PlateResult;
use crate::plates::traits::{CommandContext, CommandHandler};
use shared::plate::{PlateEvent, PlateLocation};

#[derive(Debug, Clone)]
pub struct RemoveItemAction {
    pub menu_item_id: String,
}

impl CommandHandler for RemoveItemAction {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> PlateResult<Vec<PlateEvent>> {
        let events = match ctx.session.remove_item(&self.menu_item_id) {
            RemoveOutcome::NotFound => vec![],
            RemoveOutcome::Removed { plate_number, line } => vec![PlateEvent::ItemRemoved {
                location: PlateLocation::Builder,
                plate_number,
                menu_item_id: line.menu_item.id,
                item_name: line.menu_item.name,
            }],
            RemoveOutcome::PlateDestroyed { plate, line } => vec![
                PlateEvent::ItemRemoved {
                    location: PlateLocation::Builder,
                    plate_number: plate.plate_number,
                    menu_item_id: line.menu_item.id,
                    item_name: line.menu_item.name,
                },
                PlateEvent::PlateDestroyed {
                    location: PlateLocation::Builder,
                    plate_id: plate.id,
                    plate_number: plate.plate_number,
                },
            ],
        };
        Ok(events)
    }
}
