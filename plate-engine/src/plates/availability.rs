//! Availability listener
//!
//! Drains availability notifications from a push channel and applies each
//! one to the catalog and the session as a single locked mutation.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use super::session::SharedSession;
use crate::catalog::MenuCatalog;
use shared::message::AvailabilityChanged;

/// Spawn the listener task.
///
/// Runs until the channel closes or `shutdown` is cancelled. Returns the
/// number of notifications applied.
pub fn spawn_listener(
    session: SharedSession,
    catalog: Arc<dyn MenuCatalog>,
    mut rx: mpsc::Receiver<AvailabilityChanged>,
    shutdown: CancellationToken,
) -> JoinHandle<usize> {
    tokio::spawn(async move {
        tracing::info!("Availability listener started");
        let mut applied = 0usize;
        loop {
            tokio::select! {
                _ = shutdown.cancelled() => {
                    tracing::info!("Availability listener shutting down");
                    break;
                }
                msg = rx.recv() => {
                    let Some(change) = msg else {
                        tracing::info!("Availability channel closed");
                        break;
                    };
                    catalog.set_availability(&change.menu_item_id, change.available);
                    let affected = session.lock().apply_availability(&change);
                    tracing::debug!(
                        menu_item_id = %change.menu_item_id,
                        available = change.available,
                        affected,
                        "Availability change applied"
                    );
                    applied += 1;
                }
            }
        }
        applied
    })
}
