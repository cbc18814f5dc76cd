//! UpdatePortions command handler
//!
//! Sets the absolute portion count of a builder line. Zero removes the line.

use crate::plates::builder::BuilderUpdate;
use crate::plates::error::PlateResult;
use crate::plates::traits::{CommandContext, CommandHandler};
use crate::utils::validation;
use shared::plate::{PlateEvent, PlateLocation};

#[derive(Debug, Clone)]
pub struct UpdatePortionsAction {
    pub menu_item_id: String,
    pub portions: i32,
}

impl CommandHandler for UpdatePortionsAction {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> PlateResult<Vec<PlateEvent>> {
        validation::validate_portion_update(self.portions, ctx.config.max_portions_per_line)?;

        let update = ctx
            .session
            .update_item_portions(&self.menu_item_id, self.portions)?;

        let events = match update {
            BuilderUpdate::NotFound => vec![],
            BuilderUpdate::Updated {
                plate_number,
                requested,
                applied,
                clipped_to_cap,
            } => {
                let item_name = ctx
                    .session
                    .current_plate()
                    .and_then(|p| p.find_item(&self.menu_item_id))
                    .map(|line| line.menu_item.name.clone())
                    .unwrap_or_default();
                super::portion_events(
                    PlateLocation::Builder,
                    plate_number,
                    &self.menu_item_id,
                    item_name,
                    requested,
                    applied,
                    clipped_to_cap,
                )
            }
            BuilderUpdate::Removed { plate_number, line } => vec![PlateEvent::ItemRemoved {
                location: PlateLocation::Builder,
                plate_number,
                menu_item_id: line.menu_item.id,
                item_name: line.menu_item.name,
            }],
            BuilderUpdate::PlateDestroyed { plate, line } => vec![
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
