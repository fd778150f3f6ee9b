//! Rayon-parallel mean filter (feature-gated).
//!
//! Output rows are computed in parallel, each from the unfiltered source, so
//! the result is byte-identical to [`mean_filtered`](super::mean_filtered)
//! and the counter totals are the same.

use crate::filter::mean::{copy_back, window_mean};
use crate::image::access::PixelAccessor;
use crate::image::PixelBuffer;
use crate::instrument::Counters;
use crate::trace::trace_span;
use crate::util::GrayKitResult;
use rayon::prelude::*;

/// Row-parallel variant of [`mean_filtered`](super::mean_filtered).
pub fn mean_filtered_par(
    image: &PixelBuffer,
    dx: usize,
    dy: usize,
    counters: &Counters,
) -> GrayKitResult<PixelBuffer> {
    let mut out = image.blank_like()?;
    let width = image.width();
    if width == 0 {
        return Ok(out);
    }
    let px = PixelAccessor::new(counters);

    out.data_mut()
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, slot) in row.iter_mut().enumerate() {
                *slot = window_mean(image, x, y, dx, dy, px);
            }
            // One store per output pixel, as in the sequential filter.
            counters.add_pixel_accesses(row.len() as u64);
        });
    Ok(out)
}

/// Row-parallel variant of [`blur`](super::blur).
pub fn blur_par(
    image: &mut PixelBuffer,
    dx: usize,
    dy: usize,
    counters: &Counters,
) -> GrayKitResult<()> {
    let _span = trace_span!("blur_par", dx = dx, dy = dy).entered();
    let filtered = mean_filtered_par(image, dx, dy, counters)?;
    copy_back(image, &filtered, PixelAccessor::new(counters));
    Ok(())
}
