//! Operations combining two images.
//!
//! Both modify `base` in place and require `overlay` to fit completely at the
//! given position.

use crate::image::access::PixelAccessor;
use crate::image::PixelBuffer;
use crate::instrument::Counters;
use crate::util::math::saturate_level;

fn assert_fits(base: &PixelBuffer, x: usize, y: usize, overlay: &PixelBuffer) {
    assert!(
        base.valid_rect(x, y, overlay.width(), overlay.height()),
        "{}x{} overlay does not fit at ({x}, {y}) in {}x{} image",
        overlay.width(),
        overlay.height(),
        base.width(),
        base.height()
    );
}

/// Copies `overlay` into `base` with its top-left corner at `(x, y)`.
///
/// Levels are copied verbatim, so `overlay.maxval()` must not exceed
/// `base.maxval()` for the result to stay in range.
///
/// # Panics
/// If `overlay` does not fit inside `base` at `(x, y)`.
pub fn paste(
    base: &mut PixelBuffer,
    x: usize,
    y: usize,
    overlay: &PixelBuffer,
    counters: &Counters,
) {
    assert_fits(base, x, y, overlay);
    let px = PixelAccessor::new(counters);
    for i in 0..overlay.width() {
        for j in 0..overlay.height() {
            let level = px.get(overlay, i, j);
            px.set(base, x + i, y + j, level);
        }
    }
}

/// Blends `overlay` into `base` at `(x, y)` as `base*(1-alpha) + overlay*alpha`.
///
/// `alpha` outside `[0, 1]` is allowed; results saturate to `[0, maxval]`.
///
/// # Panics
/// If `overlay` does not fit inside `base` at `(x, y)`.
pub fn blend(
    base: &mut PixelBuffer,
    x: usize,
    y: usize,
    overlay: &PixelBuffer,
    alpha: f64,
    counters: &Counters,
) {
    assert_fits(base, x, y, overlay);
    let px = PixelAccessor::new(counters);
    let maxval = base.maxval();
    for i in 0..overlay.width() {
        for j in 0..overlay.height() {
            let under = f64::from(px.get(base, x + i, y + j));
            let over = f64::from(px.get(overlay, i, j));
            let level = saturate_level(under * (1.0 - alpha) + over * alpha, maxval);
            px.set(base, x + i, y + j, level);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{blend, paste};
    use crate::image::PixelBuffer;
    use crate::instrument::Counters;

    #[test]
    fn paste_overwrites_region() {
        let counters = Counters::new();
        let mut base = PixelBuffer::new(3, 3, 255).unwrap();
        let overlay = PixelBuffer::from_vec(vec![1, 2, 3, 4], 2, 2, 255).unwrap();
        paste(&mut base, 1, 1, &overlay, &counters);
        assert_eq!(base.as_slice(), &[0u8, 0, 0, 0, 1, 2, 0, 3, 4]);
        assert_eq!(counters.pixel_accesses(), 8);
    }

    #[test]
    fn blend_mixes_and_saturates() {
        let counters = Counters::new();
        let mut base = PixelBuffer::from_vec(vec![100, 200], 2, 1, 200).unwrap();
        let overlay = PixelBuffer::from_vec(vec![0, 100], 2, 1, 200).unwrap();
        blend(&mut base, 0, 0, &overlay, 0.25, &counters);
        assert_eq!(base.as_slice(), &[75u8, 175]);

        blend(&mut base, 0, 0, &overlay, -1.0, &counters);
        assert_eq!(base.as_slice(), &[150u8, 200]);

        blend(&mut base, 0, 0, &overlay, 3.0, &counters);
        assert_eq!(base.as_slice(), &[0u8, 0]);
    }

    #[test]
    #[should_panic(expected = "does not fit")]
    fn paste_outside_panics() {
        let counters = Counters::new();
        let mut base = PixelBuffer::new(2, 2, 255).unwrap();
        let overlay = PixelBuffer::new(2, 2, 255).unwrap();
        paste(&mut base, 1, 0, &overlay, &counters);
    }
}
