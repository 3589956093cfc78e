//! State management module
//!
//! This module contains the meditation timer state machine and the shared
//! application state that owns it.

pub mod preset;
pub mod controller;
pub mod timer_state;
pub mod app_state;

// Re-export main types
pub use preset::DurationPreset;
pub use controller::{TickOutcome, TimerController};
pub use timer_state::TimerState;
pub use app_state::AppState;
