//! Bounds-checked single-pixel access with access counting.
//!
//! These are the primitives the search, filter and geometric operations use
//! to touch pixels. Each call counts as exactly one pixel access. Positions
//! must satisfy [`PixelBuffer::valid_pos`]; anything else is a caller bug and
//! panics.

use crate::image::PixelBuffer;
use crate::instrument::Counters;

/// Counting reader/writer for individual pixels.
#[derive(Clone, Copy, Debug)]
pub struct PixelAccessor<'c> {
    counters: &'c Counters,
}

impl<'c> PixelAccessor<'c> {
    /// Creates an accessor that records into `counters`.
    pub fn new(counters: &'c Counters) -> Self {
        Self { counters }
    }

    /// Returns the counters this accessor records into.
    pub fn counters(&self) -> &'c Counters {
        self.counters
    }

    /// Reads the level at `(x, y)`.
    ///
    /// # Panics
    /// If `(x, y)` lies outside `image`.
    #[inline]
    pub fn get(&self, image: &PixelBuffer, x: usize, y: usize) -> u8 {
        assert!(
            image.valid_pos(x, y),
            "pixel ({x}, {y}) outside {}x{} image",
            image.width(),
            image.height()
        );
        self.counters.add_pixel_accesses(1);
        image.as_slice()[image.index(x, y)]
    }

    /// Stores `level` at `(x, y)` without clamping.
    ///
    /// # Panics
    /// If `(x, y)` lies outside `image`.
    #[inline]
    pub fn set(&self, image: &mut PixelBuffer, x: usize, y: usize, level: u8) {
        assert!(
            image.valid_pos(x, y),
            "pixel ({x}, {y}) outside {}x{} image",
            image.width(),
            image.height()
        );
        debug_assert!(level <= image.maxval(), "level {level} above maxval");
        self.counters.add_pixel_accesses(1);
        let idx = image.index(x, y);
        image.data_mut()[idx] = level;
    }
}

#[cfg(test)]
mod tests {
    use super::PixelAccessor;
    use crate::image::PixelBuffer;
    use crate::instrument::Counters;

    #[test]
    fn get_and_set_count_one_access_each() {
        let counters = Counters::new();
        let px = PixelAccessor::new(&counters);
        let mut img = PixelBuffer::new(3, 2, 255).unwrap();

        px.set(&mut img, 2, 1, 77);
        assert_eq!(px.get(&img, 2, 1), 77);
        assert_eq!(img.as_slice()[5], 77);
        assert_eq!(counters.pixel_accesses(), 2);
        assert_eq!(counters.comparisons(), 0);
    }

    #[test]
    #[should_panic(expected = "outside 3x2 image")]
    fn get_outside_panics() {
        let counters = Counters::new();
        let img = PixelBuffer::new(3, 2, 255).unwrap();
        PixelAccessor::new(&counters).get(&img, 3, 0);
    }

    #[test]
    #[should_panic(expected = "outside 3x2 image")]
    fn set_outside_panics() {
        let counters = Counters::new();
        let mut img = PixelBuffer::new(3, 2, 255).unwrap();
        PixelAccessor::new(&counters).set(&mut img, 0, 2, 1);
    }
}
