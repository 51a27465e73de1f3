//! Pixel-to-percent delta resolution.
//!
//! The track extent must be measured fresh for every conversion; the host
//! surface can resize independently of any panel interaction, so a cached
//! extent would skew every later conversion.

/// Convert a raw pixel movement into a percentage-of-track delta.
///
/// A non-positive extent means the host has not laid the group out yet (or
/// measured it mid-teardown); the movement resolves to zero and the
/// interaction becomes a no-op.
#[must_use]
pub fn percent_delta(raw_px: f64, track_extent_px: f64) -> f64 {
    if track_extent_px <= 0.0 {
        return 0.0;
    }
    raw_px / track_extent_px * 100.0
}

/// Convert a percent figure into pixels on the same track.
#[must_use]
pub fn percent_to_px(percent: f64, track_extent_px: f64) -> f64 {
    if track_extent_px <= 0.0 {
        return 0.0;
    }
    percent / 100.0 * track_extent_px
}
