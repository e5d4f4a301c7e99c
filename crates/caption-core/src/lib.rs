//! Voxsub Caption Engine
//!
//! Turns time-ordered recognition results into a subtitle cue track:
//! - **WordTimeline:** flatten a result's top alternative into timed words
//! - **SegmentBuilder:** group words into speech cues under a duration ceiling
//! - **GapAnalyzer:** synthesize unvoiced cues for audible-but-untranscribed
//!   gaps, using decoded audio energy to tell noise from true silence
//! - **CueSequencer:** final ordering check and 1-based re-indexing
//!
//! The whole engine is one synchronous forward pass. State between steps
//! (the previous cue's end, the open accumulator) moves by value through
//! the pass; there are no ambient globals and exactly one writer.

pub mod config;
pub mod engine;
pub mod gap;
pub mod segment;
pub mod sequence;
pub mod timeline;

pub use config::CaptionConfig;
pub use engine::CaptionEngine;
pub use gap::GapAnalyzer;
pub use segment::SegmentBuilder;
pub use sequence::finalize_cues;
pub use timeline::{Word, WordTimeline};
