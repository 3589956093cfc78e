//! Main application state management

use std::{
    sync::{Arc, Mutex, MutexGuard},
    time::{Duration, Instant},
};
use chrono::{DateTime, Utc};
use tokio::sync::{mpsc, watch};
use tracing::{error, info, warn};

use super::{DurationPreset, TickOutcome, TimerController, TimerState};
use crate::{
    error::AppError,
    tasks::ticker::{Generation, TokioTicker},
};

/// Main application state that owns the meditation timer
#[derive(Debug)]
pub struct AppState {
    /// The one live countdown; ticks and requests are serialized by this lock
    timer: Mutex<TimerController<TokioTicker>>,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    pub last_action: Arc<Mutex<Option<String>>>,
    pub last_action_time: Arc<Mutex<Option<DateTime<Utc>>>>,
    /// Channel for timer updates
    pub timer_update_tx: watch::Sender<TimerState>,
    /// Keep the receiver alive to prevent channel closure
    pub _timer_update_rx: watch::Receiver<TimerState>,
}

impl AppState {
    /// Create a new AppState with an idle timer.
    ///
    /// The returned receiver carries ticks and must be handed to
    /// [`tick_pump_task`](crate::tasks::tick_pump_task).
    pub fn new(
        port: u16,
        host: String,
        tick_period: Duration,
    ) -> (Self, mpsc::UnboundedReceiver<Generation>) {
        let (ticker, tick_rx) = TokioTicker::new(tick_period);
        let timer = TimerController::new(ticker);
        let (timer_update_tx, timer_update_rx) = watch::channel(timer.snapshot());

        let state = Self {
            timer: Mutex::new(timer),
            start_time: Instant::now(),
            port,
            host,
            last_action: Arc::new(Mutex::new(None)),
            last_action_time: Arc::new(Mutex::new(None)),
            timer_update_tx,
            _timer_update_rx: timer_update_rx,
        };
        (state, tick_rx)
    }

    fn lock_timer(&self) -> Result<MutexGuard<'_, TimerController<TokioTicker>>, AppError> {
        self.timer.lock().map_err(|e| {
            error!("Failed to lock timer state: {}", e);
            AppError::StatePoisoned(e.to_string())
        })
    }

    /// Apply an operation to the timer.
    ///
    /// The action is recorded and the snapshot published only when the
    /// operation reports that it changed the timer.
    fn update_timer<F>(&self, action: &str, updater: F) -> Result<(bool, TimerState), AppError>
    where
        F: FnOnce(&mut TimerController<TokioTicker>) -> bool,
    {
        let mut timer = self.lock_timer()?;
        let changed = updater(&mut timer);
        let snapshot = timer.snapshot();
        drop(timer); // Release the lock early

        if changed {
            self.record_action(action);
            self.publish(snapshot.clone());
        }
        Ok((changed, snapshot))
    }

    fn record_action(&self, action: &str) {
        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action.to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }
    }

    fn publish(&self, snapshot: TimerState) {
        if let Err(e) = self.timer_update_tx.send(snapshot) {
            warn!("Failed to send timer update: {}", e);
        }
    }

    /// Start the countdown. The flag is false when it was already running.
    pub fn start_timer(&self) -> Result<(bool, TimerState), AppError> {
        self.update_timer("start", |timer| timer.start())
    }

    /// Pause the countdown. The flag is false when it was already paused.
    pub fn pause_timer(&self) -> Result<(bool, TimerState), AppError> {
        self.update_timer("pause", |timer| timer.pause())
    }

    /// Pick a new duration from raw minutes, rejecting anything but a preset
    pub fn select_duration(&self, minutes: u32) -> Result<TimerState, AppError> {
        let preset = DurationPreset::try_from(minutes)?;
        let (_, snapshot) = self.update_timer("select-duration", |timer| {
            timer.select_duration(preset);
            true
        })?;
        Ok(snapshot)
    }

    /// Deliver one tick from the pump
    pub fn apply_tick(&self, generation: Generation) -> Result<TickOutcome, AppError> {
        let mut timer = self.lock_timer()?;
        let outcome = timer.tick_for(generation);
        let snapshot = timer.snapshot();
        drop(timer);

        match outcome {
            TickOutcome::Ignored => {}
            TickOutcome::Counted { .. } => self.publish(snapshot),
            TickOutcome::Expired => {
                info!("Meditation timer expired");
                self.record_action("expired");
                self.publish(snapshot);
            }
        }
        Ok(outcome)
    }

    /// Get current timer state
    pub fn get_timer_state(&self) -> Result<TimerState, AppError> {
        self.lock_timer().map(|timer| timer.snapshot())
    }

    /// Observe every published timer change
    pub fn subscribe_timer(&self) -> watch::Receiver<TimerState> {
        self.timer_update_tx.subscribe()
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        format_uptime(self.start_time.elapsed())
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }
}

fn format_uptime(duration: Duration) -> String {
    let hours = duration.as_secs() / 3600;
    let minutes = (duration.as_secs() % 3600) / 60;
    let seconds = duration.as_secs() % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}
