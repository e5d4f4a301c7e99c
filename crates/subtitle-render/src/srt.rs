//! SRT composition and parsing.

use voxsub_common::error::{CaptionError, CaptionResult};
use voxsub_model::cue::Cue;
use voxsub_model::time::TimePoint;

/// Generate SRT content from a finalized cue track.
///
/// Content is sanitized here, not during segmentation; cue timing and
/// indices are emitted as-is.
pub fn compose(cues: &[Cue]) -> String {
    let mut output = String::new();

    for cue in cues {
        output.push_str(&format!("{}\n", cue.index));
        output.push_str(&format!(
            "{} --> {}\n",
            format_srt_time(cue.start),
            format_srt_time(cue.end),
        ));
        output.push_str(&sanitize_content(&cue.content));
        output.push_str("\n\n");
    }

    output
}

/// Strip characters the SRT grammar cannot carry inside a content line:
/// control characters (including embedded line breaks) become spaces,
/// whitespace runs collapse, and the ends are trimmed. Idempotent.
pub fn sanitize_content(content: &str) -> String {
    let replaced: String = content
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();
    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Format a time point as an SRT timestamp: HH:MM:SS,mmm.
/// Sub-millisecond digits are truncated.
pub fn format_srt_time(t: TimePoint) -> String {
    let total_ms = t.total_millis();
    let hours = total_ms / 3_600_000;
    let minutes = (total_ms % 3_600_000) / 60_000;
    let seconds = (total_ms % 60_000) / 1000;
    let millis = total_ms % 1000;
    format!("{hours:02}:{minutes:02}:{seconds:02},{millis:03}")
}

/// Parse SRT content back into cues.
///
/// The SRT grammar does not encode cue kind; it is inferred from the
/// content (empty content reads as a gap cue).
pub fn parse(input: &str) -> CaptionResult<Vec<Cue>> {
    let mut cues = Vec::new();
    let mut lines = input.lines();

    loop {
        // Skip separator lines between blocks.
        let index_line = match lines.find(|line| !line.trim().is_empty()) {
            Some(line) => line.trim().trim_start_matches('\u{feff}'),
            None => break,
        };
        let index: usize = index_line
            .parse()
            .map_err(|_| CaptionError::render(format!("invalid cue index line: {index_line:?}")))?;

        let timing_line = lines
            .next()
            .ok_or_else(|| CaptionError::render(format!("cue {index} is missing a timing line")))?;
        let (start, end) = parse_timing_line(timing_line.trim())?;

        let mut content_lines: Vec<&str> = Vec::new();
        for line in lines.by_ref() {
            if line.trim().is_empty() {
                break;
            }
            content_lines.push(line.trim());
        }

        let content = content_lines.join(" ");
        let mut cue = if content.is_empty() {
            Cue::gap(start, end)
        } else {
            Cue::speech(start, end, content)
        };
        cue.index = index;
        cues.push(cue);
    }

    Ok(cues)
}

fn parse_timing_line(line: &str) -> CaptionResult<(TimePoint, TimePoint)> {
    let (start, end) = line
        .split_once(" --> ")
        .ok_or_else(|| CaptionError::render(format!("invalid timing line: {line:?}")))?;
    Ok((parse_srt_time(start.trim())?, parse_srt_time(end.trim())?))
}

fn parse_srt_time(text: &str) -> CaptionResult<TimePoint> {
    let bad = || CaptionError::render(format!("invalid SRT timestamp: {text:?}"));

    let (clock, millis) = text.split_once(',').ok_or_else(bad)?;
    let mut fields = clock.split(':');
    let hours: u64 = fields.next().ok_or_else(bad)?.parse().map_err(|_| bad())?;
    let minutes: u64 = fields.next().ok_or_else(bad)?.parse().map_err(|_| bad())?;
    let seconds: u64 = fields.next().ok_or_else(bad)?.parse().map_err(|_| bad())?;
    if fields.next().is_some() || minutes > 59 || seconds > 59 {
        return Err(bad());
    }
    let millis: u64 = millis.parse().map_err(|_| bad())?;
    if millis > 999 {
        return Err(bad());
    }

    let total_ms = ((hours * 60 + minutes) * 60 + seconds) * 1_000 + millis;
    Ok(TimePoint::from_micros(total_ms * 1_000))
}
