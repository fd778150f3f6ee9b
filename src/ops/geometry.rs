//! Geometric transformations.
//!
//! Each returns a freshly allocated image and leaves the source unchanged.
//! Pixels move through [`PixelAccessor`], one read and one write per pixel.

use crate::image::access::PixelAccessor;
use crate::image::{PixelBuffer, Region};
use crate::instrument::Counters;
use crate::trace::trace_span;
use crate::util::GrayKitResult;

/// Rotates 90 degrees anticlockwise; the result is `height x width`.
pub fn rotate(image: &PixelBuffer, counters: &Counters) -> GrayKitResult<PixelBuffer> {
    let _span = trace_span!("rotate").entered();
    let px = PixelAccessor::new(counters);
    let (width, height) = (image.width(), image.height());
    let mut out = PixelBuffer::new(height, width, image.maxval())?;
    for x in 0..width {
        for y in 0..height {
            let level = px.get(image, x, y);
            px.set(&mut out, y, width - x - 1, level);
        }
    }
    Ok(out)
}

/// Flips left to right.
pub fn mirror(image: &PixelBuffer, counters: &Counters) -> GrayKitResult<PixelBuffer> {
    let _span = trace_span!("mirror").entered();
    let px = PixelAccessor::new(counters);
    let width = image.width();
    let mut out = image.blank_like()?;
    for x in 0..width {
        for y in 0..image.height() {
            let level = px.get(image, width - x - 1, y);
            px.set(&mut out, x, y, level);
        }
    }
    Ok(out)
}

/// Copies `region` out of `image`.
///
/// # Panics
/// If `region` does not lie completely inside `image`.
pub fn crop(
    image: &PixelBuffer,
    region: Region,
    counters: &Counters,
) -> GrayKitResult<PixelBuffer> {
    assert!(
        region.fits_in(image),
        "crop region {region:?} outside {}x{} image",
        image.width(),
        image.height()
    );
    let _span = trace_span!("crop", width = region.width, height = region.height).entered();
    let px = PixelAccessor::new(counters);
    let mut out = PixelBuffer::new(region.width, region.height, image.maxval())?;
    for i in 0..region.width {
        for j in 0..region.height {
            let level = px.get(image, region.x + i, region.y + j);
            px.set(&mut out, i, j, level);
        }
    }
    Ok(out)
}
