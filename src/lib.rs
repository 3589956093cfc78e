//! Kriya Meditation - A meditation timer and Kriya Yoga library served over HTTP
//!
//! This library provides the meditation countdown state machine, the tick
//! source that drives it, and the static articles and guru content.

pub mod config;
pub mod error;
pub mod state;
pub mod api;
pub mod content;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, TimerError};
pub use state::{AppState, DurationPreset, TimerController, TimerState};
pub use api::create_router;
pub use utils::signals::shutdown_signal;
