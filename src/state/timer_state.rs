//! Timer snapshot structure published to observers

use serde::{Deserialize, Serialize};

use super::DurationPreset;

/// Point-in-time copy of the meditation countdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    pub selected_duration_minutes: DurationPreset,
    pub remaining_seconds: u32,
    pub is_running: bool,
    pub formatted_remaining: String,
}

impl TimerState {
    /// Create a snapshot, deriving the `MM:SS` rendering from the remaining seconds
    pub fn new(selected: DurationPreset, remaining_seconds: u32, is_running: bool) -> Self {
        Self {
            selected_duration_minutes: selected,
            remaining_seconds,
            is_running,
            formatted_remaining: format_remaining(remaining_seconds),
        }
    }
}

impl Default for TimerState {
    fn default() -> Self {
        let preset = DurationPreset::default();
        Self::new(preset, preset.seconds(), false)
    }
}

/// Render seconds as zero-padded `MM:SS`
pub fn format_remaining(remaining_seconds: u32) -> String {
    format!("{:02}:{:02}", remaining_seconds / 60, remaining_seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(format_remaining(0), "00:00");
        assert_eq!(format_remaining(59), "00:59");
        assert_eq!(format_remaining(297), "04:57");
        assert_eq!(format_remaining(1200), "20:00");
    }

    #[test]
    fn default_snapshot_is_idle_ten_minutes() {
        let state = TimerState::default();
        assert_eq!(state.selected_duration_minutes, DurationPreset::Ten);
        assert_eq!(state.remaining_seconds, 600);
        assert!(!state.is_running);
        assert_eq!(state.formatted_remaining, "10:00");
    }

    #[test]
    fn serializes_preset_as_number() {
        let value = serde_json::to_value(TimerState::default()).unwrap();
        assert_eq!(value["selected_duration_minutes"], 10);
        assert_eq!(value["remaining_seconds"], 600);
        assert_eq!(value["is_running"], false);
    }
}
