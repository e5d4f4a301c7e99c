//! Gap analysis: unvoiced cues for audible-but-untranscribed intervals.
//!
//! Between the previously closed cue and the next result's first word
//! there may be an interval the recognizer produced nothing for. If the
//! interval is long enough, the decoded audio decides its fate: loud
//! enough means something audible went untranscribed and an empty cue
//! marks it; at or below the floor it is true silence and stays
//! unrepresented. A short interval produces nothing either way — the
//! engine does not distinguish "no gap" from "short silent gap".

use voxsub_audio::track::AudioTrack;
use voxsub_model::cue::Cue;
use voxsub_model::time::TimePoint;

use crate::config::CaptionConfig;

/// Decides whether the boundary before the next recognized span gets an
/// unvoiced cue.
#[derive(Debug, Clone)]
pub struct GapAnalyzer {
    gap_threshold_micros: u64,
    silence_energy_floor: f64,
}

impl GapAnalyzer {
    pub fn new(config: &CaptionConfig) -> Self {
        Self {
            gap_threshold_micros: config.gap_threshold_micros(),
            silence_energy_floor: config.silence_energy_floor,
        }
    }

    /// Inspect the interval `[previous_end, next_start]`.
    ///
    /// Returns the gap cue to insert, or `None` when the interval is too
    /// short or reads as true silence. The audio window is clamped to
    /// the decoded range by the track itself.
    pub fn analyze(
        &self,
        previous_end: TimePoint,
        next_start: TimePoint,
        audio: &AudioTrack,
    ) -> Option<Cue> {
        let gap_micros = next_start.saturating_micros_since(previous_end);
        if gap_micros <= self.gap_threshold_micros {
            return None;
        }

        let loudness = audio.rms_between_ms(previous_end.total_millis(), next_start.total_millis());
        if loudness > self.silence_energy_floor {
            tracing::debug!(
                start_secs = previous_end.as_secs_f64(),
                end_secs = next_start.as_secs_f64(),
                loudness,
                "Marking audible untranscribed gap"
            );
            Some(Cue::gap(previous_end, next_start))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer() -> GapAnalyzer {
        GapAnalyzer::new(&CaptionConfig::default())
    }

    /// 20s track: silence except `[loud_from_ms, loud_to_ms)` at the
    /// given amplitude.
    fn track_with_loud_region(loud_from_ms: u64, loud_to_ms: u64, amplitude: i16) -> AudioTrack {
        let rate = 1_000u32; // one sample per millisecond
        let mut samples = vec![0i16; 20_000];
        for sample in &mut samples[loud_from_ms as usize..loud_to_ms as usize] {
            *sample = amplitude;
        }
        AudioTrack::from_samples(samples, rate).unwrap()
    }

    #[test]
    fn test_loud_gap_produces_cue() {
        let audio = track_with_loud_region(10_000, 13_500, 80);
        let cue = analyzer()
            .analyze(TimePoint::new(10, 0), TimePoint::new(13, 500_000), &audio)
            .expect("gap cue");

        assert!(cue.is_gap());
        assert_eq!(cue.start, TimePoint::new(10, 0));
        assert_eq!(cue.end, TimePoint::new(13, 500_000));
        assert!(cue.content.is_empty());
    }

    #[test]
    fn test_quiet_gap_produces_nothing() {
        let audio = track_with_loud_region(10_000, 13_500, 20);
        assert!(analyzer()
            .analyze(TimePoint::new(10, 0), TimePoint::new(13, 500_000), &audio)
            .is_none());
    }

    #[test]
    fn test_short_gap_skips_audio_entirely() {
        // 1.5s gap over a loud region: under the threshold, no cue.
        let audio = track_with_loud_region(0, 20_000, 500);
        assert!(analyzer()
            .analyze(TimePoint::new(10, 0), TimePoint::new(11, 500_000), &audio)
            .is_none());
    }

    #[test]
    fn test_gap_at_threshold_produces_nothing() {
        let audio = track_with_loud_region(0, 20_000, 500);
        assert!(analyzer()
            .analyze(TimePoint::new(10, 0), TimePoint::new(12, 0), &audio)
            .is_none());
    }

    #[test]
    fn test_loudness_at_floor_counts_as_silence() {
        let audio = track_with_loud_region(10_000, 14_000, 50);
        assert!(analyzer()
            .analyze(TimePoint::new(10, 0), TimePoint::new(14, 0), &audio)
            .is_none());
    }

    #[test]
    fn test_window_past_decoded_audio_is_clamped() {
        // Track ends at 20s; window reaches to 25s. The clamped slice is
        // loud, so the cue still spans the full requested interval.
        let audio = track_with_loud_region(19_000, 20_000, 500);
        let cue = analyzer()
            .analyze(TimePoint::new(19, 0), TimePoint::new(25, 0), &audio)
            .expect("gap cue");
        assert_eq!(cue.end, TimePoint::new(25, 0));
    }

    #[test]
    fn test_out_of_order_boundary_reads_as_no_gap() {
        let audio = track_with_loud_region(0, 20_000, 500);
        assert!(analyzer()
            .analyze(TimePoint::new(13, 0), TimePoint::new(10, 0), &audio)
            .is_none());
    }
}
