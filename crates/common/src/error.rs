//! Error types shared across Voxsub crates.

use std::path::PathBuf;

/// Top-level error type for Voxsub operations.
#[derive(Debug, thiserror::Error)]
pub enum CaptionError {
    /// A word in the recognition dump carries no usable timing. The
    /// segmentation pass cannot compute durations past this point and
    /// aborts rather than defaulting to zero.
    #[error("missing timestamp on word {word} ({text:?}) of result {result}")]
    MissingTimestamp {
        result: usize,
        word: usize,
        text: String,
    },

    /// Two cues in the final sequence overlap in time.
    #[error("overlapping cues: one ends at {end_secs}s, the next starts at {start_secs}s")]
    OverlappingCues { end_secs: f64, start_secs: f64 },

    #[error("Audio error: {message}")]
    Audio { message: String },

    #[error("Recognition dump error: {message}")]
    Dump { message: String },

    #[error("Render error: {message}")]
    Render { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using CaptionError.
pub type CaptionResult<T> = Result<T, CaptionError>;

impl CaptionError {
    pub fn audio(msg: impl Into<String>) -> Self {
        Self::Audio {
            message: msg.into(),
        }
    }

    pub fn dump(msg: impl Into<String>) -> Self {
        Self::Dump {
            message: msg.into(),
        }
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }
}
