//! Command handling traits
//!
//! A [`SessionCommand`](shared::plate::SessionCommand) is converted into a
//! concrete action, executed against a [`CommandContext`], and yields the
//! plate events the UI turns into notifications.

use enum_dispatch::enum_dispatch;

use super::error::PlateResult;
use super::session::StorefrontSession;
use crate::catalog::MenuCatalog;
use crate::core::EngineConfig;
use shared::plate::PlateEvent;

/// Everything an action may touch while it runs
pub struct CommandContext<'a> {
    pub session: &'a mut StorefrontSession,
    pub catalog: &'a dyn MenuCatalog,
    pub config: &'a EngineConfig,
}

impl<'a> CommandContext<'a> {
    pub fn new(
        session: &'a mut StorefrontSession,
        catalog: &'a dyn MenuCatalog,
        config: &'a EngineConfig,
    ) -> Self {
        Self {
            session,
            catalog,
            config,
        }
    }
}

/// Executes one command as a single synchronous session mutation.
///
/// No-op outcomes (unknown plate, unknown line) return an empty event list.
#[enum_dispatch]
pub trait CommandHandler {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> PlateResult<Vec<PlateEvent>>;
}
