//! Navigate command handler

use crate::plates::error::PlateResult;
use crate::plates::traits::{CommandContext, CommandHandler};
use shared::plate::{NavigationDirection, PlateEvent};

#[derive(Debug, Clone)]
pub struct NavigateAction {
    pub direction: NavigationDirection,
}

impl CommandHandler for NavigateAction {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> PlateResult<Vec<PlateEvent>> {
        let nav = ctx.session.navigate(self.direction)?;
        let mut events: Vec<PlateEvent> = nav.parked.iter().map(super::committed_event).collect();
        events.push(PlateEvent::ViewChanged {
            view_index: nav.view_index,
            view_count: nav.view_count,
            plate_number: nav.plate_number,
        });
        Ok(events)
    }
}
