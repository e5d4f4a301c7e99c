//! Voxsub Data Model
//!
//! Types shared by the caption pipeline:
//! - [`TimePoint`](time::TimePoint): exact seconds+microseconds timestamps
//! - Recognition dump wire types ([`result`])
//! - Subtitle cues ([`cue`])
//!
//! Recognition results are produced once by the external recognizer and
//! never mutated here; cues are produced by the caption engine and
//! re-indexed exactly once at final assembly.

pub mod cue;
pub mod result;
pub mod time;

pub use cue::*;
pub use result::*;
pub use time::*;
