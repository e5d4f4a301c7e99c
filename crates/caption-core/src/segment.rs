//! Duration-bounded segmentation of a word timeline into speech cues.
//!
//! # Algorithm
//!
//! An open accumulator folds over the words in order:
//! 1. The first word of an empty accumulator sets the cue start.
//! 2. Word text is appended, single-space-joined.
//! 3. The cue end extends to the word's end.
//! 4. When `end − start` reaches the configured ceiling, the cue closes
//!    and the accumulator resets.
//!
//! A non-empty accumulator always closes at the end of the result, so
//! cues never span recognition-result boundaries. The ceiling check runs
//! only after a word is included: a single word longer than the ceiling
//! still becomes its own cue rather than being dropped or truncated.

use voxsub_model::cue::Cue;
use voxsub_model::time::TimePoint;

use crate::config::CaptionConfig;
use crate::timeline::{Word, WordTimeline};

/// Splits one word timeline into speech cues under the duration ceiling.
#[derive(Debug, Clone)]
pub struct SegmentBuilder {
    max_cue_duration_micros: u64,
}

/// The open cue being accumulated. Passed by value through the fold;
/// `close` consumes it.
#[derive(Debug, Default)]
struct OpenCue {
    start: Option<TimePoint>,
    end: Option<TimePoint>,
    content: String,
}

impl OpenCue {
    fn push(mut self, word: &Word) -> Self {
        if self.start.is_none() {
            self.start = Some(word.start);
        }
        if !self.content.is_empty() {
            self.content.push(' ');
        }
        self.content.push_str(&word.text);
        self.end = Some(word.end);
        self
    }

    fn duration_micros(&self) -> u64 {
        match (self.start, self.end) {
            (Some(start), Some(end)) => end.saturating_micros_since(start),
            _ => 0,
        }
    }

    fn close(self) -> Option<Cue> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => {
                Some(Cue::speech(start, end, self.content.trim().to_string()))
            }
            _ => None,
        }
    }
}

impl SegmentBuilder {
    pub fn new(config: &CaptionConfig) -> Self {
        Self {
            max_cue_duration_micros: config.max_cue_duration_micros(),
        }
    }

    /// Partition the timeline into speech cues.
    ///
    /// Always emits at least one cue, since timelines are never empty.
    pub fn segment(&self, timeline: &WordTimeline) -> Vec<Cue> {
        let mut cues = Vec::new();
        let mut open = OpenCue::default();

        for word in timeline.words() {
            open = open.push(word);
            if open.duration_micros() >= self.max_cue_duration_micros {
                cues.extend(open.close());
                open = OpenCue::default();
            }
        }

        // Trailing words under the ceiling still close at the result
        // boundary.
        cues.extend(open.close());
        cues
    }
}
