//! Trip progress tracking
//!
//! Remembers the distance at the start of the current leg so the remaining
//! distance can be shown as progress.

pub mod baseline;

pub use baseline::{DistanceBaseline, Progress};
