//! Engine configuration.

use serde::{Deserialize, Serialize};

use voxsub_model::time::MICROS_PER_SEC;

/// Parameters for one segmentation pass.
///
/// Supplied by the caller and threaded through each component
/// explicitly; the engine reads no environment or global state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CaptionConfig {
    /// Ceiling on a speech cue's spoken span (seconds).
    pub max_cue_duration_secs: f64,

    /// Minimum unexplained interval between recognized spans before a
    /// gap cue is considered (seconds).
    pub gap_threshold_secs: f64,

    /// RMS amplitude (i16 scale) at or below which a gap counts as true
    /// silence and stays unrepresented in the output.
    pub silence_energy_floor: f64,
}

impl Default for CaptionConfig {
    fn default() -> Self {
        Self {
            max_cue_duration_secs: 6.0,
            gap_threshold_secs: 2.0,
            silence_energy_floor: 50.0,
        }
    }
}

impl CaptionConfig {
    /// Duration ceiling in microseconds.
    pub fn max_cue_duration_micros(&self) -> u64 {
        secs_to_micros(self.max_cue_duration_secs)
    }

    /// Gap threshold in microseconds.
    pub fn gap_threshold_micros(&self) -> u64 {
        secs_to_micros(self.gap_threshold_secs)
    }
}

fn secs_to_micros(secs: f64) -> u64 {
    (secs.max(0.0) * MICROS_PER_SEC as f64).round() as u64
}
