//! Registration-time configuration errors.
//!
//! The resize algorithm itself is infallible by design: exhausted chains
//! discard residual delta and unknown ids are no-ops (ids may transiently
//! reference elements mid-unregistration). Only self-contradictory panel
//! configurations are rejected, and they are rejected at registration so bad
//! state never reaches the allocator.

use std::fmt;

use crate::registry::{PanelId, SplitterId};

/// Errors surfaced when registering panels or splitters.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// `min > max`, or either bound outside `0..=100` percent.
    InvalidBounds { id: PanelId, min: f64, max: f64 },
    /// Explicit initial size outside the panel's own bounds.
    InitialOutOfBounds {
        id: PanelId,
        initial: f64,
        min: f64,
        max: f64,
    },
    /// Snap band must be zero (disabled) or positive.
    NegativeSnapBand { id: PanelId, snap: f64 },
    /// Splitter ids must be unique; order defines panel adjacency.
    DuplicateSplitterId { id: SplitterId },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBounds { id, min, max } => write!(
                f,
                "invalid bounds for panel {id}: min {min} / max {max} must satisfy 0 <= min <= max <= 100"
            ),
            Self::InitialOutOfBounds {
                id,
                initial,
                min,
                max,
            } => write!(
                f,
                "initial size {initial} for panel {id} violates bounds [min={min}, max={max}]"
            ),
            Self::NegativeSnapBand { id, snap } => {
                write!(f, "negative snap band {snap} for panel {id}")
            }
            Self::DuplicateSplitterId { id } => {
                write!(f, "splitter id {id} is already registered")
            }
        }
    }
}

impl std::error::Error for LayoutError {}
