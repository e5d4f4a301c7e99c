//! The single-pass caption engine.

use voxsub_audio::track::AudioTrack;
use voxsub_common::error::CaptionResult;
use voxsub_model::cue::Cue;
use voxsub_model::result::RecognitionResult;
use voxsub_model::time::TimePoint;

use crate::config::CaptionConfig;
use crate::gap::GapAnalyzer;
use crate::segment::SegmentBuilder;
use crate::sequence::finalize_cues;
use crate::timeline::WordTimeline;

/// Runs segmentation and gap synthesis over an ordered result list.
pub struct CaptionEngine {
    segmenter: SegmentBuilder,
    gaps: GapAnalyzer,
}

impl CaptionEngine {
    /// Create an engine with the given configuration.
    pub fn new(config: CaptionConfig) -> Self {
        Self {
            segmenter: SegmentBuilder::new(&config),
            gaps: GapAnalyzer::new(&config),
        }
    }

    /// Create an engine with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(CaptionConfig::default())
    }

    /// Generate the final cue track for a recognizer response.
    ///
    /// One forward fold over the results: each usable result first gets
    /// a gap decision against the previously closed cue, then its words
    /// are segmented into speech cues. `previous_end` advances with
    /// every closed cue — gap cues included — so exactly one gap
    /// decision happens per inter-result boundary. Skippable results
    /// leave it untouched, which means the next gap decision spans the
    /// skipped result's silence too.
    pub fn generate(
        &self,
        results: &[RecognitionResult],
        audio: &AudioTrack,
    ) -> CaptionResult<Vec<Cue>> {
        tracing::info!(results = results.len(), "Generating cue track");

        let mut cues: Vec<Cue> = Vec::new();
        let mut previous_end: Option<TimePoint> = None;

        for (result_index, result) in results.iter().enumerate() {
            let Some(timeline) = WordTimeline::from_result(result, result_index)? else {
                tracing::warn!(result = result_index, "Skipping result with no usable words");
                continue;
            };

            if let Some(prev) = previous_end {
                if let Some(gap_cue) = self.gaps.analyze(prev, timeline.first_start(), audio) {
                    previous_end = Some(gap_cue.end);
                    cues.push(gap_cue);
                }
            }

            let speech = self.segmenter.segment(&timeline);
            if let Some(last) = speech.last() {
                previous_end = Some(last.end);
            }
            cues.extend(speech);
        }

        let cues = finalize_cues(cues)?;
        tracing::info!(cues = cues.len(), "Cue track complete");
        Ok(cues)
    }
}
