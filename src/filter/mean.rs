//! Uniform mean (box) filter.
//!
//! Each output pixel is the rounded mean of the `(2dx+1) x (2dy+1)` window
//! centred on it, restricted to positions inside the image. Windows near the
//! border shrink instead of padding with zeros. All reads come from the
//! unfiltered source and all writes go to a separate buffer.

use crate::image::access::PixelAccessor;
use crate::image::PixelBuffer;
use crate::instrument::Counters;
use crate::trace::{trace_event, trace_span};
use crate::util::math::round_mean;
use crate::util::GrayKitResult;

/// Returns a blurred copy of `image`; the source is left unchanged.
///
/// Every window pixel read and every output pixel written counts as one
/// pixel access.
pub fn mean_filtered(
    image: &PixelBuffer,
    dx: usize,
    dy: usize,
    counters: &Counters,
) -> GrayKitResult<PixelBuffer> {
    let px = PixelAccessor::new(counters);
    let mut out = image.blank_like()?;
    for y in 0..image.height() {
        for x in 0..image.width() {
            let level = window_mean(image, x, y, dx, dy, px);
            px.set(&mut out, x, y, level);
        }
    }
    Ok(out)
}

/// Blurs `image` in place with a `(2dx+1) x (2dy+1)` mean filter.
///
/// The filtered result is computed into a temporary buffer and then copied
/// back pixel by pixel. If the temporary cannot be allocated the error is
/// returned and `image` is untouched.
pub fn blur(
    image: &mut PixelBuffer,
    dx: usize,
    dy: usize,
    counters: &Counters,
) -> GrayKitResult<()> {
    let _span = trace_span!(
        "blur",
        width = image.width(),
        height = image.height(),
        dx = dx,
        dy = dy
    )
    .entered();
    let filtered = mean_filtered(image, dx, dy, counters)?;
    copy_back(image, &filtered, PixelAccessor::new(counters));
    trace_event!("blur_done", pixmem = counters.pixel_accesses());
    Ok(())
}

/// Rounded mean of the in-bounds part of the window around `(x, y)`,
/// saturated at the image maxval.
pub(crate) fn window_mean(
    image: &PixelBuffer,
    x: usize,
    y: usize,
    dx: usize,
    dy: usize,
    px: PixelAccessor<'_>,
) -> u8 {
    // Positions past the far edges would fail `valid_pos`; clamping the loop
    // bounds skips exactly those.
    let k_end = x.saturating_add(dx).min(image.width() - 1);
    let l_end = y.saturating_add(dy).min(image.height() - 1);

    let mut sum = 0u64;
    let mut count = 0u64;
    for k in x.saturating_sub(dx)..=k_end {
        for l in y.saturating_sub(dy)..=l_end {
            sum += u64::from(px.get(image, k, l));
            count += 1;
        }
    }
    round_mean(sum, count).min(u64::from(image.maxval())) as u8
}

pub(crate) fn copy_back(image: &mut PixelBuffer, filtered: &PixelBuffer, px: PixelAccessor<'_>) {
    for y in 0..image.height() {
        for x in 0..image.width() {
            let level = px.get(filtered, x, y);
            px.set(image, x, y, level);
        }
    }
}
