//! Fixed meditation duration presets

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TimerError;

/// One of the allowed meditation lengths, serialized as plain minutes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum DurationPreset {
    Five,
    #[default]
    Ten,
    Fifteen,
    Twenty,
}

impl DurationPreset {
    /// All presets in display order
    pub const ALL: [DurationPreset; 4] = [
        DurationPreset::Five,
        DurationPreset::Ten,
        DurationPreset::Fifteen,
        DurationPreset::Twenty,
    ];

    pub fn minutes(self) -> u32 {
        match self {
            DurationPreset::Five => 5,
            DurationPreset::Ten => 10,
            DurationPreset::Fifteen => 15,
            DurationPreset::Twenty => 20,
        }
    }

    /// Full countdown length for this preset
    pub fn seconds(self) -> u32 {
        self.minutes() * 60
    }

    /// Preset lengths in minutes, in display order
    pub fn all_minutes() -> Vec<u32> {
        Self::ALL.iter().map(|preset| preset.minutes()).collect()
    }
}

impl TryFrom<u32> for DurationPreset {
    type Error = TimerError;

    fn try_from(minutes: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.minutes() == minutes)
            .ok_or(TimerError::UnsupportedDuration { minutes })
    }
}

impl From<DurationPreset> for u32 {
    fn from(preset: DurationPreset) -> Self {
        preset.minutes()
    }
}

impl fmt::Display for DurationPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} minutes", self.minutes())
    }
}
