//! Neighborhood filters.

pub(crate) mod mean;

#[cfg(feature = "rayon")]
pub mod rayon;

pub use mean::{blur, mean_filtered};
