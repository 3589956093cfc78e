//! Host tick source: periodic, cancellable tick delivery

use std::time::Duration;

use tokio::{
    sync::mpsc,
    task::AbortHandle,
    time::{interval_at, Instant, MissedTickBehavior},
};
use tracing::debug;

/// Identifies one scheduled tick stream
pub type Generation = u64;

/// A source of periodic ticks.
///
/// `schedule` starts delivering `generation` once per period, the first
/// delivery one full period after scheduling. Dropping the returned handle
/// cancels the stream: no tick for that generation is produced afterwards.
pub trait TickScheduler {
    type Handle;

    fn schedule(&mut self, generation: Generation) -> Self::Handle;
}

/// Tick source backed by a tokio interval task
#[derive(Debug, Clone)]
pub struct TokioTicker {
    period: Duration,
    tick_tx: mpsc::UnboundedSender<Generation>,
}

impl TokioTicker {
    /// Create a ticker and the receiving end its ticks are delivered to
    pub fn new(period: Duration) -> (Self, mpsc::UnboundedReceiver<Generation>) {
        let (tick_tx, tick_rx) = mpsc::unbounded_channel();
        (Self { period, tick_tx }, tick_rx)
    }
}

impl TickScheduler for TokioTicker {
    type Handle = TickTask;

    fn schedule(&mut self, generation: Generation) -> TickTask {
        let period = self.period;
        let tick_tx = self.tick_tx.clone();

        let task = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                interval.tick().await;
                if tick_tx.send(generation).is_err() {
                    debug!("Tick receiver closed, stopping generation {}", generation);
                    break;
                }
            }
        });

        TickTask {
            generation,
            abort: task.abort_handle(),
        }
    }
}

/// Owned handle to a running interval task; aborts the task on drop
#[derive(Debug)]
pub struct TickTask {
    generation: Generation,
    abort: AbortHandle,
}

impl Drop for TickTask {
    fn drop(&mut self) {
        debug!("Cancelling tick generation {}", self.generation);
        self.abort.abort();
    }
}
