//! Final cue assembly: ordering enforcement and 1-based indexing.

use voxsub_common::error::{CaptionError, CaptionResult};
use voxsub_model::cue::Cue;

/// Order the accumulated cues and assign their final indices.
///
/// A well-formed single pass already produces cues in chronological
/// order, making the sort a no-op; it is enforced here anyway so a
/// reordering upstream cannot silently corrupt the track. Overlapping
/// cues are rejected rather than repaired.
pub fn finalize_cues(mut cues: Vec<Cue>) -> CaptionResult<Vec<Cue>> {
    cues.sort_by_key(|cue| (cue.start, cue.end));

    for pair in cues.windows(2) {
        if pair[0].end > pair[1].start {
            return Err(CaptionError::OverlappingCues {
                end_secs: pair[0].end.as_secs_f64(),
                start_secs: pair[1].start.as_secs_f64(),
            });
        }
    }

    for (position, cue) in cues.iter_mut().enumerate() {
        cue.index = position + 1;
    }
    Ok(cues)
}
