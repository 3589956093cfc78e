//! Error types shared by the timer core and the application state

use thiserror::Error;

/// Errors raised by the timer core
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimerError {
    /// The requested duration is not one of the fixed presets
    #[error("Unsupported duration: {minutes} minutes (expected one of 5, 10, 15, 20)")]
    UnsupportedDuration { minutes: u32 },
}

/// Errors raised while operating on the shared application state
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Timer error: {0}")]
    Timer(#[from] TimerError),

    /// A thread panicked while holding the timer lock
    #[error("Failed to lock timer state: {0}")]
    StatePoisoned(String),
}
