//! Word timelines: the validated word sequence of one recognition result.

use voxsub_common::error::{CaptionError, CaptionResult};
use voxsub_model::result::RecognitionResult;
use voxsub_model::time::TimePoint;

/// A recognized word with validated, non-optional timing.
#[derive(Debug, Clone, PartialEq)]
pub struct Word {
    pub text: String,
    pub start: TimePoint,
    pub end: TimePoint,
}

/// The ordered word sequence of one result's top alternative.
#[derive(Debug, Clone)]
pub struct WordTimeline {
    words: Vec<Word>,
}

impl WordTimeline {
    /// Flatten a recognition result into its word timeline.
    ///
    /// Returns `Ok(None)` when the result has no alternatives or the top
    /// alternative has no words — the result is skippable and must not
    /// advance any carried-over timing state. A word without both
    /// timestamps is fatal: durations downstream would be meaningless.
    pub fn from_result(
        result: &RecognitionResult,
        result_index: usize,
    ) -> CaptionResult<Option<Self>> {
        let Some(alternative) = result.top_alternative() else {
            return Ok(None);
        };
        if alternative.words.is_empty() {
            return Ok(None);
        }

        let mut words = Vec::with_capacity(alternative.words.len());
        for (word_index, info) in alternative.words.iter().enumerate() {
            let (Some(start), Some(end)) = (info.start_time, info.end_time) else {
                return Err(CaptionError::MissingTimestamp {
                    result: result_index,
                    word: word_index,
                    text: info.word.clone(),
                });
            };
            words.push(Word {
                text: info.word.trim().to_string(),
                start,
                end,
            });
        }

        Ok(Some(Self { words }))
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Start of the first word. Timelines are never empty.
    pub fn first_start(&self) -> TimePoint {
        self.words[0].start
    }

    /// End of the last word.
    pub fn last_end(&self) -> TimePoint {
        self.words[self.words.len() - 1].end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxsub_model::result::{Alternative, WordInfo};

    fn timed_word(text: &str, start: f64, end: f64) -> WordInfo {
        WordInfo {
            word: text.to_string(),
            start_time: Some(TimePoint::from_secs_f64(start)),
            end_time: Some(TimePoint::from_secs_f64(end)),
        }
    }

    fn result_with_words(words: Vec<WordInfo>) -> RecognitionResult {
        RecognitionResult {
            alternatives: vec![Alternative {
                transcript: None,
                confidence: None,
                words,
            }],
        }
    }

    #[test]
    fn test_empty_result_is_skippable() {
        let result = RecognitionResult {
            alternatives: vec![],
        };
        assert!(WordTimeline::from_result(&result, 0).unwrap().is_none());

        let result = result_with_words(vec![]);
        assert!(WordTimeline::from_result(&result, 0).unwrap().is_none());
    }

    #[test]
    fn test_words_flattened_in_order() {
        let result = result_with_words(vec![
            timed_word("bir", 0.0, 1.0),
            timed_word("iki", 1.0, 4.5),
        ]);
        let timeline = WordTimeline::from_result(&result, 0).unwrap().unwrap();

        assert_eq!(timeline.words().len(), 2);
        assert_eq!(timeline.first_start(), TimePoint::ZERO);
        assert_eq!(timeline.last_end(), TimePoint::new(4, 500_000));
    }

    #[test]
    fn test_word_text_is_trimmed() {
        let result = result_with_words(vec![timed_word("  merhaba ", 0.0, 1.0)]);
        let timeline = WordTimeline::from_result(&result, 0).unwrap().unwrap();
        assert_eq!(timeline.words()[0].text, "merhaba");
    }

    #[test]
    fn test_missing_timestamp_is_fatal() {
        let mut word = timed_word("bir", 0.0, 1.0);
        word.end_time = None;
        let result = result_with_words(vec![timed_word("sen", 0.0, 0.5), word]);

        let err = WordTimeline::from_result(&result, 3).unwrap_err();
        match err {
            CaptionError::MissingTimestamp { result, word, text } => {
                assert_eq!(result, 3);
                assert_eq!(word, 1);
                assert_eq!(text, "bir");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
