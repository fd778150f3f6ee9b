//! Rounding and saturation helpers for gray levels.

/// Rounds `sum / count` half away from zero using integer arithmetic.
///
/// `count` must be non-zero.
pub(crate) fn round_mean(sum: u64, count: u64) -> u64 {
    (2 * sum + count) / (2 * count)
}

/// Saturates a real-valued level to `[0, maxval]` and rounds it.
pub(crate) fn saturate_level(value: f64, maxval: u8) -> u8 {
    if value > f64::from(maxval) {
        maxval
    } else if value < 0.0 {
        0
    } else {
        value.round() as u8
    }
}
