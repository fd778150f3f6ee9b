//! Exact subimage search.
//!
//! `region` compares one placement pixel by pixel; `locate` sweeps every
//! anchor and reports the first placement that matches.

pub(crate) mod locate;
pub(crate) mod region;

/// Top-left coordinates of a pattern placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Anchor {
    /// Column of the pattern's left edge.
    pub x: usize,
    /// Row of the pattern's top edge.
    pub y: usize,
}

/// Which anchors the search sweeps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AnchorRange {
    /// Every anchor at which the pattern fits, up to and including the one
    /// where its far edges touch the base's far edges.
    #[default]
    Inclusive,
    /// Stops one anchor short in each axis: `x < base_w - pattern_w` and
    /// `y < base_h - pattern_h`. Placements flush with the right or bottom
    /// edge are never tried, so a pattern as wide or as tall as the base is
    /// never found.
    Exclusive,
}

/// Configuration for [`locate`](crate::locate).
#[derive(Clone, Copy, Debug, Default)]
pub struct LocateConfig {
    /// Anchor bounds convention.
    pub anchors: AnchorRange,
}
