//! Exact comparison of a pattern against one placement in a base image.

use crate::image::access::PixelAccessor;
use crate::image::PixelBuffer;
use crate::instrument::Counters;

/// Lazy walk over the pixel pairs of a pattern placed at `(x, y)` in `base`.
///
/// Yields `(base_level, pattern_level)` column by column: the outer index runs
/// over pattern columns and the inner index over pattern rows. Each yielded
/// pair costs two pixel accesses; nothing is read until the iterator is
/// advanced.
pub struct PixelPairs<'a, 'c> {
    base: &'a PixelBuffer,
    pattern: &'a PixelBuffer,
    x: usize,
    y: usize,
    i: usize,
    j: usize,
    accessor: PixelAccessor<'c>,
}

impl Iterator for PixelPairs<'_, '_> {
    type Item = (u8, u8);

    fn next(&mut self) -> Option<Self::Item> {
        if self.pattern.height() == 0 || self.i >= self.pattern.width() {
            return None;
        }
        let (i, j) = (self.i, self.j);
        self.j += 1;
        if self.j == self.pattern.height() {
            self.j = 0;
            self.i += 1;
        }
        let base_level = self.accessor.get(self.base, self.x + i, self.y + j);
        let pattern_level = self.accessor.get(self.pattern, i, j);
        Some((base_level, pattern_level))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.pattern.height() == 0 {
            0
        } else {
            (self.pattern.width() - self.i) * self.pattern.height() - self.j
        };
        (remaining, Some(remaining))
    }
}

/// Returns the pair walk for `pattern` at `(x, y)`.
///
/// # Panics
/// If the whole pattern does not fit inside `base` at `(x, y)`.
pub fn pixel_pairs<'a, 'c>(
    base: &'a PixelBuffer,
    x: usize,
    y: usize,
    pattern: &'a PixelBuffer,
    accessor: PixelAccessor<'c>,
) -> PixelPairs<'a, 'c> {
    assert!(
        base.valid_rect(x, y, pattern.width(), pattern.height()),
        "pattern {}x{} does not fit at ({x}, {y})",
        pattern.width(),
        pattern.height()
    );
    PixelPairs {
        base,
        pattern,
        x,
        y,
        i: 0,
        j: 0,
        accessor,
    }
}

/// Returns true if `pattern` equals the region of `base` anchored at `(x, y)`.
///
/// A placement that does not fit returns false without reading any pixel.
/// Otherwise every pair examined adds one to the comparison count and the
/// walk stops at the first mismatch.
///
/// # Panics
/// If `(x, y)` is not a valid position in `base`.
pub fn matches(
    base: &PixelBuffer,
    x: usize,
    y: usize,
    pattern: &PixelBuffer,
    counters: &Counters,
) -> bool {
    assert!(
        base.valid_pos(x, y),
        "anchor ({x}, {y}) outside {}x{} image",
        base.width(),
        base.height()
    );
    if !base.valid_rect(x, y, pattern.width(), pattern.height()) {
        return false;
    }
    pixel_pairs(base, x, y, pattern, PixelAccessor::new(counters))
        .inspect(|_| counters.add_comparisons(1))
        .all(|(b, p)| b == p)
}
