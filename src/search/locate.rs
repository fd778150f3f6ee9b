//! Exhaustive subimage search.

use crate::image::PixelBuffer;
use crate::instrument::Counters;
use crate::search::region::matches;
use crate::search::{Anchor, AnchorRange, LocateConfig};
use crate::trace::{trace_event, trace_span};

/// Finds the first anchor at which `pattern` occurs exactly in `base`.
///
/// Anchors are swept with the column as the outer index and the row as the
/// inner one, so the result is the smallest `x`, then the smallest `y`. Each
/// anchor tried adds one to the comparison count on top of the pixel
/// comparisons made by [`matches`]. A pattern larger than `base` in either
/// dimension returns `None` without counting anything.
pub fn locate(
    base: &PixelBuffer,
    pattern: &PixelBuffer,
    cfg: &LocateConfig,
    counters: &Counters,
) -> Option<Anchor> {
    let _span = trace_span!(
        "locate",
        base_w = base.width(),
        base_h = base.height(),
        pattern_w = pattern.width(),
        pattern_h = pattern.height()
    )
    .entered();

    let (xs, ys) = anchor_counts(base, pattern, cfg.anchors)?;
    for x in 0..xs {
        for y in 0..ys {
            counters.add_comparisons(1);
            if matches(base, x, y, pattern, counters) {
                trace_event!("locate_hit", x = x, y = y);
                return Some(Anchor { x, y });
            }
        }
    }
    trace_event!("locate_miss", anchors = xs * ys);
    None
}

/// Number of anchor columns and rows swept for this pair of images.
///
/// Anchors are always valid positions in `base`, which only restricts the
/// inclusive range for zero-sized patterns.
fn anchor_counts(
    base: &PixelBuffer,
    pattern: &PixelBuffer,
    range: AnchorRange,
) -> Option<(usize, usize)> {
    let slack_x = base.width().checked_sub(pattern.width())?;
    let slack_y = base.height().checked_sub(pattern.height())?;
    match range {
        AnchorRange::Inclusive => Some((
            (slack_x + 1).min(base.width()),
            (slack_y + 1).min(base.height()),
        )),
        AnchorRange::Exclusive => Some((slack_x, slack_y)),
    }
}
