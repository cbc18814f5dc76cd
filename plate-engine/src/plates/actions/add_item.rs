//! AddItem command handler
//!
//! Resolves the menu item through the catalog and adds it to the builder.
//! An overflow seals the current plate into the cart and starts a new one.

use crate::plates::error::{PlateError, PlateResult};
use crate::plates::traits::{CommandContext, CommandHandler};
use crate::utils::validation;
use shared::plate::{PlateEvent, PlateLocation};

#[derive(Debug, Clone)]
pub struct AddItemAction {
    pub menu_item_id: String,
    pub portions: i32,
}

impl CommandHandler for AddItemAction {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> PlateResult<Vec<PlateEvent>> {
        validation::validate_portions(self.portions, ctx.config.max_portions_per_line)?;

        let menu_item = ctx
            .catalog
            .get(&self.menu_item_id)
            .ok_or_else(|| PlateError::MenuItemNotFound(self.menu_item_id.clone()))?;

        let add = ctx.session.add_item(&menu_item, self.portions)?;
        let outcome = &add.outcome;
        let current_id = ctx
            .session
            .current_plate()
            .map(|p| p.id.clone())
            .unwrap_or_default();

        let mut events = Vec::with_capacity(4);
        if let Some(committed) = &add.committed {
            events.push(PlateEvent::PlateCommitted {
                plate_id: committed.plate_id.clone(),
                plate_number: committed.plate_number,
                position: committed.position,
            });
        }
        match &outcome.split {
            Some(split) => {
                tracing::info!(
                    filled_plate = split.filled_plate.plate_number,
                    new_plate = outcome.plate_number,
                    cap = split.cap,
                    "Plate full, started a new plate"
                );
                events.push(PlateEvent::NewPlateCreated {
                    filled_plate_id: split.filled_plate.id.clone(),
                    filled_plate_number: split.filled_plate.plate_number,
                    new_plate_id: current_id,
                    new_plate_number: outcome.plate_number,
                    cap: split.cap,
                });
            }
            None if outcome.plate_created => {
                events.push(PlateEvent::PlateCreated {
                    plate_id: current_id,
                    plate_number: outcome.plate_number,
                });
            }
            None => {}
        }

        events.push(PlateEvent::ItemAdded {
            plate_number: outcome.plate_number,
            menu_item_id: menu_item.id.clone(),
            item_name: menu_item.name.clone(),
            requested: outcome.requested,
            applied: outcome.applied,
        });

        if outcome.applied < outcome.requested
            && let Some(cap) = menu_item.max_portions_per_takeaway
        {
            events.push(PlateEvent::PortionsClipped {
                location: PlateLocation::Builder,
                plate_number: outcome.plate_number,
                menu_item_id: menu_item.id.clone(),
                item_name: menu_item.name,
                requested: outcome.requested,
                applied: outcome.applied,
                cap,
            });
        }

        Ok(events)
    }
}
