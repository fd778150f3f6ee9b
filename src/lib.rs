//! GrayKit is a small toolkit for 8-bit grayscale images.
//!
//! It provides an owned pixel buffer with raw PGM I/O, exact subimage search,
//! a uniform mean filter and a handful of photometric and geometric
//! operations. Pixel touches and search comparisons are counted in a
//! caller-owned [`Counters`] value; the `rayon` feature adds a row-parallel
//! filter.

pub mod filter;
pub mod image;
mod instrument;
pub mod lowlevel;
pub mod ops;
pub mod search;
mod trace;
pub mod util;

pub use filter::{blur, mean_filtered};
pub use crate::image::access::PixelAccessor;
#[cfg(feature = "image-io")]
pub use crate::image::io;
pub use crate::image::pgm::{load_pgm, read_pgm, save_pgm, write_pgm};
pub use crate::image::{PixelBuffer, Region, PIX_MAX};
pub use instrument::{CounterSnapshot, Counters};
pub use search::locate::locate;
pub use search::region::matches;
pub use search::{Anchor, AnchorRange, LocateConfig};
pub use util::{GrayKitError, GrayKitResult};
