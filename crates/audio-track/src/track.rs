//! In-memory waveform with millisecond-indexed slicing.

use voxsub_common::error::{CaptionError, CaptionResult};

/// A decoded mono audio track.
///
/// Samples are raw 16-bit amplitudes; the RMS metric is reported in the
/// same units, so a silence floor of 50 means "RMS amplitude 50 on the
/// i16 scale".
#[derive(Debug, Clone)]
pub struct AudioTrack {
    samples: Vec<i16>,
    sample_rate: u32,
}

impl AudioTrack {
    /// Wrap already-decoded mono samples.
    pub fn from_samples(samples: Vec<i16>, sample_rate: u32) -> CaptionResult<Self> {
        if sample_rate == 0 {
            return Err(CaptionError::audio("sample rate must be non-zero"));
        }
        Ok(Self {
            samples,
            sample_rate,
        })
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn len_samples(&self) -> usize {
        self.samples.len()
    }

    /// Track length in whole milliseconds.
    pub fn duration_ms(&self) -> u64 {
        self.samples.len() as u64 * 1_000 / self.sample_rate as u64
    }

    pub fn duration_secs(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }

    /// Samples covering `[start_ms, end_ms)`, clamped to the recorded
    /// range. A window past the end of the track degrades to whatever
    /// audio exists rather than failing.
    pub fn slice_ms(&self, start_ms: u64, end_ms: u64) -> &[i16] {
        if end_ms > self.duration_ms() {
            tracing::debug!(
                start_ms,
                end_ms,
                track_ms = self.duration_ms(),
                "window extends past decoded audio; clamping"
            );
        }
        let start = self.sample_index(start_ms);
        let end = self.sample_index(end_ms);
        if start >= end {
            return &[];
        }
        &self.samples[start..end]
    }

    /// RMS amplitude of the window `[start_ms, end_ms)`, clamped to the
    /// recorded range. An empty window reads as 0.0 (silence).
    pub fn rms_between_ms(&self, start_ms: u64, end_ms: u64) -> f64 {
        rms(self.slice_ms(start_ms, end_ms))
    }

    fn sample_index(&self, ms: u64) -> usize {
        let index = ms * self.sample_rate as u64 / 1_000;
        (index as usize).min(self.samples.len())
    }
}

/// Root-mean-square amplitude of a sample window.
pub fn rms(samples: &[i16]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum_sq: f64 = samples.iter().map(|&s| (s as f64) * (s as f64)).sum();
    (sum_sq / samples.len() as f64).sqrt()
}
