//! Pixel-level transformations.
//!
//! These change gray levels but never geometry. They run in place over the
//! flat storage and never fail.

use crate::image::PixelBuffer;
use crate::util::math::saturate_level;

/// Darkest and brightest levels present in an image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelRange {
    pub min: u8,
    pub max: u8,
}

/// Returns the minimum and maximum levels, or `None` for an empty image.
pub fn stats(image: &PixelBuffer) -> Option<LevelRange> {
    let (&first, rest) = image.as_slice().split_first()?;
    let mut range = LevelRange {
        min: first,
        max: first,
    };
    for &level in rest {
        if range.min == 0 && range.max == image.maxval() {
            break;
        }
        range.min = range.min.min(level);
        range.max = range.max.max(level);
    }
    Some(range)
}

/// Replaces every level `p` with `maxval - p`.
pub fn negative(image: &mut PixelBuffer) {
    let maxval = image.maxval();
    for level in image.data_mut() {
        *level = maxval - *level;
    }
}

/// Maps levels below `thr` to black and the rest to white (maxval).
pub fn threshold(image: &mut PixelBuffer, thr: u8) {
    let maxval = image.maxval();
    for level in image.data_mut() {
        *level = if *level < thr { 0 } else { maxval };
    }
}

/// Multiplies every level by `factor`, rounding and saturating at maxval.
///
/// # Panics
/// If `factor` is negative or not finite.
pub fn brighten(image: &mut PixelBuffer, factor: f64) {
    assert!(
        factor.is_finite() && factor >= 0.0,
        "brighten factor must be finite and non-negative, got {factor}"
    );
    let maxval = image.maxval();
    for level in image.data_mut() {
        *level = saturate_level(f64::from(*level) * factor, maxval);
    }
}

#[cfg(test)]
mod tests {
    use super::{brighten, negative, stats, threshold, LevelRange};
    use crate::image::PixelBuffer;

    fn ramp() -> PixelBuffer {
        PixelBuffer::from_vec(vec![10, 50, 90, 130, 170, 200], 3, 2, 200).unwrap()
    }

    #[test]
    fn stats_reports_extremes() {
        assert_eq!(stats(&ramp()), Some(LevelRange { min: 10, max: 200 }));
        let flat = PixelBuffer::from_vec(vec![7; 4], 2, 2, 9).unwrap();
        assert_eq!(stats(&flat), Some(LevelRange { min: 7, max: 7 }));
        assert_eq!(stats(&PixelBuffer::new(0, 4, 255).unwrap()), None);
    }

    #[test]
    fn stats_finds_minimum_after_a_new_maximum() {
        let img = PixelBuffer::from_vec(vec![5, 9, 1], 3, 1, 255).unwrap();
        assert_eq!(stats(&img), Some(LevelRange { min: 1, max: 9 }));
    }

    #[test]
    fn negative_twice_is_identity() {
        let mut img = ramp();
        negative(&mut img);
        assert_eq!(img.as_slice(), &[190u8, 150, 110, 70, 30, 0]);
        negative(&mut img);
        assert_eq!(img, ramp());
    }

    #[test]
    fn threshold_splits_at_thr() {
        let mut img = ramp();
        threshold(&mut img, 130);
        assert_eq!(img.as_slice(), &[0u8, 0, 0, 200, 200, 200]);
    }

    #[test]
    fn brighten_rounds_and_saturates() {
        let mut img = ramp();
        brighten(&mut img, 1.25);
        assert_eq!(img.as_slice(), &[13u8, 63, 113, 163, 200, 200]);

        let mut img = ramp();
        brighten(&mut img, 0.0);
        assert!(img.as_slice().iter().all(|&v| v == 0));
    }

    #[test]
    #[should_panic(expected = "non-negative")]
    fn brighten_rejects_negative_factor() {
        brighten(&mut ramp(), -0.5);
    }
}
