//! Low-level building blocks for custom pixel pipelines.
//!
//! These expose the counted pixel accessor, the lazy pair walk used by the
//! matcher and the per-pixel window mean. Most users should prefer the
//! top-level `locate`, `blur` and `ops` functions.

pub use crate::image::access::PixelAccessor;
pub use crate::instrument::{CounterSnapshot, Counters};
pub use crate::search::region::{matches, pixel_pairs, PixelPairs};
