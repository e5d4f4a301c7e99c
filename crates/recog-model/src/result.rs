//! Recognition dump wire types.
//!
//! A dump is the serialized response of the upstream recognizer's
//! long-running operation: an ordered list of results, each holding
//! ranked alternatives with word-level timings. Results are time-ordered
//! by construction of the recognizer — result *n*'s words all end at or
//! before result *n+1*'s words begin — and the pipeline trusts that
//! ordering rather than re-sorting.
//!
//! Timestamps are `Option` at this layer: a dump may omit them, and the
//! engine decides whether that is fatal (it is — see the caption engine).

use serde::{Deserialize, Serialize};

use crate::time::TimePoint;

/// A full recognizer response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognitionDump {
    #[serde(default)]
    pub results: Vec<RecognitionResult>,
}

/// One unit of recognizer output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognitionResult {
    #[serde(default)]
    pub alternatives: Vec<Alternative>,
}

/// One ranked hypothesis for a result. Only the top alternative is
/// consumed downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alternative {
    #[serde(default)]
    pub transcript: Option<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub words: Vec<WordInfo>,
}

/// A recognized word with its timing offsets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordInfo {
    pub word: String,
    #[serde(default)]
    pub start_time: Option<TimePoint>,
    #[serde(default)]
    pub end_time: Option<TimePoint>,
}

impl RecognitionDump {
    /// Parse a dump from its JSON serialization.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Total number of words across all top alternatives.
    pub fn word_count(&self) -> usize {
        self.results
            .iter()
            .filter_map(RecognitionResult::top_alternative)
            .map(|alt| alt.words.len())
            .sum()
    }

    /// End time of the last timed word, if any.
    pub fn last_word_end(&self) -> Option<TimePoint> {
        self.results
            .iter()
            .filter_map(RecognitionResult::top_alternative)
            .flat_map(|alt| alt.words.iter())
            .filter_map(|w| w.end_time)
            .last()
    }
}

impl RecognitionResult {
    /// The best-ranked alternative, if the recognizer produced one.
    pub fn top_alternative(&self) -> Option<&Alternative> {
        self.alternatives.first()
    }
}
