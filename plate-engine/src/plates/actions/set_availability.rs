//! SetAvailability command handler
//!
//! Applies one availability notification to the catalog and every plate in
//! the session. Flagged lines stay in place until the customer resolves them.

use crate::plates::error::PlateResult;
use crate::plates::traits::{CommandContext, CommandHandler};
use shared::message::AvailabilityChanged;
use shared::plate::PlateEvent;

#[derive(Debug, Clone)]
pub struct SetAvailabilityAction {
    pub change: AvailabilityChanged,
}

impl CommandHandler for SetAvailabilityAction {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> PlateResult<Vec<PlateEvent>> {
        let change = &self.change;
        if !ctx
            .catalog
            .set_availability(&change.menu_item_id, change.available)
        {
            tracing::debug!(menu_item_id = %change.menu_item_id, "Availability change for item not in catalog");
        }

        let affected_lines = ctx.session.apply_availability(change);
        if affected_lines > 0 {
            tracing::info!(
                menu_item_id = %change.menu_item_id,
                available = change.available,
                affected_lines,
                "Availability flagged on session plates"
            );
        }

        Ok(vec![PlateEvent::ItemsFlagged {
            menu_item_id: change.menu_item_id.clone(),
            available: change.available,
            affected_lines,
        }])
    }
}
