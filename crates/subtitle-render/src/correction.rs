//! Dictionary-based word correction.
//!
//! The lexicon is an external collaborator: a flat known-word to
//! corrected-word mapping with a naive prefix fallback. The caption
//! engine never consults it; only transcript rendering does.

use std::collections::BTreeMap;

/// Injected lookup capability for word correction.
pub trait CorrectionLexicon {
    /// The corrected form of `word`, if the lexicon knows one.
    fn lookup(&self, word: &str) -> Option<&str>;
}

/// A lexicon that corrects nothing.
pub struct NoopLexicon;

impl CorrectionLexicon for NoopLexicon {
    fn lookup(&self, _word: &str) -> Option<&str> {
        None
    }
}

/// Map-backed lexicon with prefix fallback.
///
/// Exact matches win; otherwise the first entry (in key order) whose
/// three-character prefix the word starts with supplies the correction.
/// Prefixes are taken per character, not per byte — the corpus is
/// Turkish.
#[derive(Debug, Clone, Default)]
pub struct MapLexicon {
    entries: BTreeMap<String, String>,
}

impl MapLexicon {
    pub fn new(entries: BTreeMap<String, String>) -> Self {
        Self { entries }
    }

    /// Parse a lexicon from a JSON object of word→correction pairs.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl CorrectionLexicon for MapLexicon {
    fn lookup(&self, word: &str) -> Option<&str> {
        if let Some(hit) = self.entries.get(word) {
            return Some(hit.as_str());
        }
        self.entries.iter().find_map(|(key, value)| {
            let prefix: String = key.chars().take(3).collect();
            (!prefix.is_empty() && word.starts_with(&prefix)).then_some(value.as_str())
        })
    }
}
