//! Background tasks module
//!
//! This module contains the tick source and the task that feeds its ticks
//! into the meditation timer.

pub mod ticker;
pub mod tick_pump;

// Re-export main types and functions
pub use ticker::{Generation, TickScheduler, TickTask, TokioTicker};
pub use tick_pump::tick_pump_task;
