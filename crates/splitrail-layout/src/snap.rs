//! Snap-to-collapse evaluation.
//!
//! Panels with a non-zero snap band can collapse entirely instead of sitting
//! pinned at their minimum size. The evaluator inspects one drag sample and
//! either produces a full collapse/re-expand transition, absorbs the sample
//! while a collapse is latched, or passes control through to the constraint
//! propagator.
//!
//! State machine per (panel, adjacent-splitter) pair:
//!
//! ```text
//! Expanded  --(at min + pointer past collapse threshold)-->  Collapsed
//! Collapsed --(pointer past re-expansion threshold)------->  Expanded (at min)
//! ```
//!
//! No other transitions exist. Keyboard steps never reach this module; snap
//! thresholds are pointer-position comparisons against pixel offsets from
//! [`TrackGeometry`], and a keyboard step has no pointer.
//!
//! Threshold geometry (negative-direction drag shown; positive mirrors it
//! from trailing edges):
//!
//! - Collapse: the start panel sits at exactly `min` and the pointer crosses
//!   below `band.origin + px(min + snap) / 2` — the midpoint of the panel's
//!   min-plus-snap band measured from its leading edge.
//! - Re-expand: the pointer re-crosses above the midpoint of the end panel's
//!   own minimum-size band, whose leading edge coincides with the collapsed
//!   panel's former position.

use splitrail_core::{Axis, TrackGeometry};

use crate::delta::percent_to_px;
use crate::registry::PanelRecord;
use crate::size::{PanelSize, SizeVector};

/// Outcome of evaluating one drag sample against the snap rules.
#[derive(Debug, Clone, PartialEq)]
pub enum SnapStep {
    /// A panel collapsed; the new vector is authoritative.
    Collapse(SizeVector),
    /// A collapsed panel re-expanded to exactly its minimum size.
    Expand(SizeVector),
    /// A collapse is latched and the sample did not cross the re-expansion
    /// threshold; the drag is absorbed without movement.
    Hold,
    /// No snap condition met; defer to the constraint propagator.
    PassThrough,
}

/// Evaluate one drag sample at `splitter_index`.
///
/// `pointer_px` is the pointer's absolute position along `axis`, in the same
/// coordinate space as the bands reported by `geometry`.
#[must_use]
pub fn evaluate<G: TrackGeometry + ?Sized>(
    records: &[PanelRecord],
    sizes: &SizeVector,
    splitter_index: usize,
    percent_delta: f64,
    pointer_px: f64,
    axis: Axis,
    geometry: &G,
) -> SnapStep {
    let start = splitter_index;
    let end = splitter_index + 1;
    if end >= records.len() || records.len() != sizes.len() {
        return SnapStep::PassThrough;
    }
    let start_c = records[start].constraints;
    let end_c = records[end].constraints;
    let track = geometry.track_extent(axis);
    if track <= 0.0 {
        return SnapStep::PassThrough;
    }

    // Latched: start panel collapsed. Everything at this splitter is held
    // until the pointer crosses the re-expansion threshold.
    if sizes[start].is_collapsed() && start_c.snap_enabled() {
        if percent_delta > 0.0
            && let Some(end_band) = geometry.panel_band(end, axis)
            && let Some(end_size) = sizes[end].as_sized()
        {
            let threshold = end_band.origin + percent_to_px(end_c.min, track) / 2.0;
            // The end panel must still be able to give the minimum back
            // without dipping under its own floor.
            if pointer_px > threshold && end_size - start_c.min >= end_c.min {
                let mut next = sizes.as_slice().to_vec();
                next[start] = PanelSize::Sized(start_c.min);
                next[end] = PanelSize::Sized(end_size - start_c.min);
                return SnapStep::Expand(SizeVector::new(next));
            }
        }
        return SnapStep::Hold;
    }

    // Latched: end panel collapsed (mirror, measured from trailing edges).
    if sizes[end].is_collapsed() && end_c.snap_enabled() {
        if percent_delta < 0.0
            && let Some(start_band) = geometry.panel_band(start, axis)
            && let Some(start_size) = sizes[start].as_sized()
        {
            let threshold = start_band.trailing() - percent_to_px(start_c.min, track) / 2.0;
            if pointer_px < threshold && start_size - end_c.min >= start_c.min {
                let mut next = sizes.as_slice().to_vec();
                next[end] = PanelSize::Sized(end_c.min);
                next[start] = PanelSize::Sized(start_size - end_c.min);
                return SnapStep::Expand(SizeVector::new(next));
            }
        }
        return SnapStep::Hold;
    }

    // Collapse: start panel, negative drag.
    if percent_delta < 0.0
        && start_c.snap_enabled()
        && let Some(start_size) = sizes[start].as_sized()
        && start_size == start_c.min
        && let Some(start_band) = geometry.panel_band(start, axis)
        && let Some(end_size) = sizes[end].as_sized()
    {
        let threshold =
            start_band.origin + percent_to_px(start_c.min + start_c.snap, track) / 2.0;
        // The whole prior size moves to the neighbor; skip when that would
        // push the neighbor past its ceiling.
        if pointer_px < threshold && end_size + start_size <= end_c.max {
            let mut next = sizes.as_slice().to_vec();
            next[start] = PanelSize::Collapsed;
            next[end] = PanelSize::Sized(end_size + start_size);
            return SnapStep::Collapse(SizeVector::new(next));
        }
    }

    // Collapse: end panel, positive drag.
    if percent_delta > 0.0
        && end_c.snap_enabled()
        && let Some(end_size) = sizes[end].as_sized()
        && end_size == end_c.min
        && let Some(end_band) = geometry.panel_band(end, axis)
        && let Some(start_size) = sizes[start].as_sized()
    {
        let threshold = end_band.trailing() - percent_to_px(end_c.min + end_c.snap, track) / 2.0;
        if pointer_px > threshold && start_size + end_size <= start_c.max {
            let mut next = sizes.as_slice().to_vec();
            next[end] = PanelSize::Collapsed;
            next[start] = PanelSize::Sized(start_size + end_size);
            return SnapStep::Collapse(SizeVector::new(next));
        }
    }

    SnapStep::PassThrough
}
