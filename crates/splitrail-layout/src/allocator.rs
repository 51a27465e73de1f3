//! Initial size allocation.
//!
//! Panels carrying an explicit initial size get it verbatim. The remaining
//! budget is split evenly among the rest in layout order, each share clamped
//! to the panel's bounds and to whatever budget is still unconsumed. The last
//! panel without an explicit size absorbs the residual unconditionally so the
//! total lands on exactly 100 despite clamping upstream.
//!
//! Known quirk, preserved on purpose: because the residual is absorbed
//! unconditionally, the last unassigned panel's own bounds can be violated
//! when earlier panels overconsume the budget. Correcting this would change
//! observable layout for existing configurations, so it stays.

use crate::registry::PanelRecord;
use crate::size::{PanelSize, SizeVector};

/// Compute the initial size vector for the given panels.
///
/// If every panel has an explicit initial size the vector is those values
/// verbatim, with no correction toward 100.
#[must_use]
pub fn initial_sizes(records: &[PanelRecord]) -> SizeVector {
    let mut slots: Vec<Option<f64>> = records
        .iter()
        .map(|record| record.constraints.initial)
        .collect();

    let mut remaining = 100.0;
    let mut unassigned = 0usize;
    for slot in &slots {
        match slot {
            Some(explicit) => remaining -= explicit,
            None => unassigned += 1,
        }
    }

    if unassigned == 0 {
        return slots
            .into_iter()
            .map(|slot| PanelSize::Sized(slot.unwrap_or(0.0)))
            .collect();
    }

    let share = remaining / unassigned as f64;
    let mut left = unassigned;
    for (index, slot) in slots.iter_mut().enumerate() {
        if slot.is_some() {
            continue;
        }
        if left == 1 {
            // Residual absorption: whatever is left, bounds or not.
            *slot = Some(remaining);
        } else {
            let constraints = &records[index].constraints;
            let size = share
                .max(constraints.min)
                .min(remaining)
                .min(constraints.max);
            remaining -= size;
            *slot = Some(size);
        }
        left -= 1;
    }

    slots
        .into_iter()
        .map(|slot| PanelSize::Sized(slot.unwrap_or(0.0)))
        .collect()
}
