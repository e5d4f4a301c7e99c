//! Plain-transcript rendering with word correction.

use voxsub_model::cue::Cue;

use crate::correction::CorrectionLexicon;

/// Render the cue track as a plain transcript: one line per cue, in
/// order, with corrections applied. A gap cue contributes an
/// intentionally blank line, keeping line numbers aligned with cue
/// indices.
pub fn compose_transcript(cues: &[Cue], lexicon: &dyn CorrectionLexicon) -> String {
    let mut output = String::new();
    for cue in cues {
        output.push_str(&correct_text(cue.content.trim(), lexicon));
        output.push('\n');
    }
    output
}

/// Correct a line word by word.
///
/// Each word is stripped of leading/trailing sentence punctuation
/// before lookup; the stripped form is what ends up in the transcript,
/// corrected or not.
pub fn correct_text(text: &str, lexicon: &dyn CorrectionLexicon) -> String {
    text.split_whitespace()
        .map(|word| correct_word(word, lexicon))
        .collect::<Vec<_>>()
        .join(" ")
}

fn correct_word(word: &str, lexicon: &dyn CorrectionLexicon) -> String {
    let stripped = word.trim_matches(|c: char| matches!(c, '.' | ',' | '!' | '?'));
    match lexicon.lookup(stripped) {
        Some(corrected) => corrected.to_string(),
        None => stripped.to_string(),
    }
}
