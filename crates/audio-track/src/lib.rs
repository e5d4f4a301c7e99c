//! Voxsub Audio Track
//!
//! The decoded waveform the gap analyzer samples for loudness:
//! - **Track:** mono i16 samples held fully in memory for O(1)
//!   millisecond-windowed lookups
//! - **WAV loading:** 16/24/32-bit integer and float formats, downmixed
//!   to mono on load
//!
//! Source clips are bounded in length (minutes, not hours), so trading
//! memory for random access is fine.

pub mod track;
pub mod wav;

pub use track::*;
pub use wav::*;
