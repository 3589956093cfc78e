//! Tick pump background task

use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, error, info};

use super::ticker::Generation;
use crate::state::{AppState, TickOutcome};

/// Background task that feeds host ticks into the timer, one at a time.
///
/// The ticker inside `state` holds the sending half of `ticks`, so the
/// channel stays open for as long as this task runs; stop it by aborting
/// its join handle.
pub async fn tick_pump_task(
    state: Arc<AppState>,
    mut ticks: mpsc::UnboundedReceiver<Generation>,
) {
    info!("Starting tick pump task");

    while let Some(generation) = ticks.recv().await {
        match state.apply_tick(generation) {
            Ok(TickOutcome::Expired) => {
                info!("Countdown for generation {} finished", generation);
            }
            Ok(outcome) => {
                debug!("Tick for generation {}: {:?}", generation, outcome);
            }
            Err(e) => {
                error!("Failed to apply tick: {}", e);
            }
        }
    }
}
