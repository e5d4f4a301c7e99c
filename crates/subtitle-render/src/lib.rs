//! Voxsub Subtitle Rendering
//!
//! Serializes a finished cue track:
//! - **SRT:** block composition with sanitized content, plus a parser
//!   for round-tripping emitted files
//! - **Transcript:** plain text, one line per cue, with dictionary-based
//!   word correction applied at this edge only
//! - **Correction:** the injected lookup capability and its map-backed
//!   implementation

pub mod correction;
pub mod srt;
pub mod transcript;

pub use correction::{CorrectionLexicon, MapLexicon, NoopLexicon};
pub use srt::*;
pub use transcript::*;

use std::path::Path;

use voxsub_common::error::CaptionResult;
use voxsub_model::cue::Cue;

/// Write the cue track as an SRT file.
pub fn save_subtitles(cues: &[Cue], path: &Path) -> CaptionResult<()> {
    std::fs::write(path, srt::compose(cues))?;
    tracing::info!(path = %path.display(), cues = cues.len(), "Wrote subtitles");
    Ok(())
}

/// Write the corrected plain transcript.
pub fn save_transcript(
    cues: &[Cue],
    lexicon: &dyn CorrectionLexicon,
    path: &Path,
) -> CaptionResult<()> {
    std::fs::write(path, transcript::compose_transcript(cues, lexicon))?;
    tracing::info!(path = %path.display(), "Wrote transcript");
    Ok(())
}
