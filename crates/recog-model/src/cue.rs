//! Subtitle cues: timed caption units.

use serde::{Deserialize, Serialize};

use crate::time::TimePoint;

/// What a cue represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CueKind {
    /// Transcribed speech.
    Speech,
    /// Audible but untranscribed sound (background noise, music,
    /// non-speech vocalization). Content is empty by definition.
    Gap,
}

/// One timed caption unit.
///
/// `index` is 0 until final assembly, which assigns the 1-based
/// sequential index exactly once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cue {
    pub index: usize,
    pub start: TimePoint,
    pub end: TimePoint,
    pub content: String,
    pub kind: CueKind,
}

impl Cue {
    /// Create an unindexed speech cue.
    pub fn speech(start: TimePoint, end: TimePoint, content: impl Into<String>) -> Self {
        Self {
            index: 0,
            start,
            end,
            content: content.into(),
            kind: CueKind::Speech,
        }
    }

    /// Create an unindexed gap cue spanning an unvoiced interval.
    pub fn gap(start: TimePoint, end: TimePoint) -> Self {
        Self {
            index: 0,
            start,
            end,
            content: String::new(),
            kind: CueKind::Gap,
        }
    }

    /// Spoken span in microseconds.
    pub fn duration_micros(&self) -> u64 {
        self.end.saturating_micros_since(self.start)
    }

    /// Spoken span in fractional seconds.
    pub fn duration_secs(&self) -> f64 {
        self.duration_micros() as f64 / 1e6
    }

    pub fn is_gap(&self) -> bool {
        self.kind == CueKind::Gap
    }
}
