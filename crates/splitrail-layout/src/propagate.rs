//! Cascading constraint propagation across a splitter.
//!
//! A drag at splitter `i` walks two cursors outward from the panel pair
//! `(i, i + 1)`: the start cursor moves backward, the end cursor forward.
//! Each iteration moves as much of the remaining delta as the current pair
//! allows; when a panel lands on a bound the cursor steps past it, so a
//! resize can reach panels two or more positions away once immediate
//! neighbors saturate.
//!
//! # Invariants
//!
//! 1. The effective total of the returned vector equals the input total.
//! 2. No visible panel is moved past its own bounds.
//! 3. Saturating panels land exactly on their bound (assignment, not
//!    arithmetic, so later equality checks are exact).
//! 4. Residual delta that no panel can absorb is discarded, not queued.
//! 5. Collapsed panels neither give nor take; cursors step past them.

use crate::registry::PanelRecord;
use crate::size::{PanelSize, SizeVector};

/// Redistribute `percent_delta` across the chains adjacent to
/// `splitter_index`.
///
/// Pure: takes the prior vector and returns a new one. A zero delta, an
/// out-of-range splitter index, or a record/vector length mismatch returns
/// the input unchanged.
#[must_use]
pub fn adjust(
    records: &[PanelRecord],
    sizes: &SizeVector,
    splitter_index: usize,
    percent_delta: f64,
) -> SizeVector {
    let mut next: Vec<PanelSize> = sizes.as_slice().to_vec();
    if percent_delta == 0.0 || records.len() != next.len() || splitter_index + 1 >= next.len() {
        return SizeVector::new(next);
    }

    let shrink_start = percent_delta < 0.0;
    let mut remaining = percent_delta.abs();
    let mut start = splitter_index as isize;
    let mut end = splitter_index + 1;

    while remaining > 0.0 {
        while start >= 0 && next[start as usize].is_collapsed() {
            start -= 1;
        }
        while end < next.len() && next[end].is_collapsed() {
            end += 1;
        }
        if start < 0 || end >= next.len() {
            break;
        }
        let start_idx = start as usize;

        let Some(start_size) = next[start_idx].as_sized() else {
            break;
        };
        let Some(end_size) = next[end].as_sized() else {
            break;
        };
        let start_c = &records[start_idx].constraints;
        let end_c = &records[end].constraints;

        // Room on each side of the splitter for this direction.
        let (give, take) = if shrink_start {
            (start_size - start_c.min, end_c.max - end_size)
        } else {
            (start_c.max - start_size, end_size - end_c.min)
        };
        let give = give.max(0.0);
        let take = take.max(0.0);
        let step = remaining.min(give).min(take);

        let (new_start, new_end) = if shrink_start {
            (
                if step > 0.0 && step >= give {
                    start_c.min
                } else {
                    start_size - step
                },
                if step > 0.0 && step >= take {
                    end_c.max
                } else {
                    end_size + step
                },
            )
        } else {
            (
                if step > 0.0 && step >= give {
                    start_c.max
                } else {
                    start_size + step
                },
                if step > 0.0 && step >= take {
                    end_c.min
                } else {
                    end_size - step
                },
            )
        };

        next[start_idx] = PanelSize::Sized(new_start);
        next[end] = PanelSize::Sized(new_end);
        remaining -= step;

        // Cascade past panels that just saturated (or were already out of
        // room, including allocator-quirk sizes outside their own bounds).
        let (start_done, end_done) = if shrink_start {
            (new_start <= start_c.min, new_end >= end_c.max)
        } else {
            (new_start >= start_c.max, new_end <= end_c.min)
        };
        if start_done {
            start -= 1;
        }
        if end_done {
            end += 1;
        }
    }

    if remaining > 0.0 {
        tracing::trace!(splitter = splitter_index, residual = remaining, "chain exhausted, residual delta discarded");
    }
    SizeVector::new(next)
}
