//! Photometric, geometric and two-image operations.

pub mod compose;
pub mod geometry;
pub mod levels;

pub use compose::{blend, paste};
pub use geometry::{crop, mirror, rotate};
pub use levels::{brighten, negative, stats, threshold, LevelRange};
