//! Panel group engine.
//!
//! One [`PanelGroup`] owns the registries and the authoritative size vector
//! for a single row (or column) of panels. It is single-threaded and
//! single-writer: every interaction event triggers exactly one full
//! recomputation, and the vector is replaced wholesale so callers never
//! observe a partial update. Nested groups are independent instances.

use serde::{Deserialize, Serialize};
use splitrail_core::{Axis, TrackGeometry};

use crate::allocator;
use crate::delta;
use crate::error::LayoutError;
use crate::propagate;
use crate::registry::{PanelConstraints, PanelId, PanelRecord, PanelRegistry, SplitterId, SplitterRegistry};
use crate::size::SizeVector;
use crate::snap::{self, SnapStep};

/// One pointer sample: movement plus absolute position, both in pixels along
/// the group's axis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DragSample {
    /// Signed movement since the previous sample.
    pub delta_px: f64,
    /// Absolute pointer position, in the same coordinate space as the bands
    /// reported by the group's [`TrackGeometry`].
    pub pointer_px: f64,
}

/// Derived range semantics for one splitter, for assistive-technology
/// exposure (`valuenow` / `valuemin` / `valuemax`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SplitterRange {
    /// Cumulative effective size through the start panel.
    pub now: f64,
    /// Sum of minimums through the start panel.
    pub min: f64,
    /// 100 minus the sum of minimums after the start panel.
    pub max: f64,
}

/// A self-contained group of panels separated by splitters.
#[derive(Debug, Clone, Default)]
pub struct PanelGroup {
    axis: Axis,
    panels: PanelRegistry,
    splitters: SplitterRegistry,
    sizes: SizeVector,
}

impl PanelGroup {
    /// Create an empty group resizing along `axis`.
    #[must_use]
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            ..Self::default()
        }
    }

    /// The group's resize axis.
    #[must_use]
    pub const fn axis(&self) -> Axis {
        self.axis
    }

    /// Current authoritative size vector.
    #[must_use]
    pub fn sizes(&self) -> &SizeVector {
        &self.sizes
    }

    /// Registered panels in layout order.
    #[must_use]
    pub fn panels(&self) -> &[PanelRecord] {
        self.panels.records()
    }

    /// Registered splitter ids in layout order.
    #[must_use]
    pub fn splitters(&self) -> &[SplitterId] {
        self.splitters.ids()
    }

    /// Layout index of a panel id.
    #[must_use]
    pub fn panel_index(&self, id: &PanelId) -> Option<usize> {
        self.panels.index_of(id)
    }

    /// Layout index of a splitter id.
    #[must_use]
    pub fn splitter_index(&self, id: &SplitterId) -> Option<usize> {
        self.splitters.index_of(id)
    }

    // -----------------------------------------------------------------------
    // Registration
    // -----------------------------------------------------------------------

    /// Register a panel (or replace an existing one in place), then
    /// recompute the size vector from scratch.
    ///
    /// Any panel-set change resets manual resizes: the vector always comes
    /// back from the allocator so indices stay aligned with the registry.
    pub fn register_panel(
        &mut self,
        id: PanelId,
        constraints: PanelConstraints,
    ) -> Result<(), LayoutError> {
        self.panels.register(id.clone(), constraints)?;
        tracing::trace!(panel = %id, "panel registered");
        self.reallocate();
        Ok(())
    }

    /// Remove a panel and its size slot. Unknown ids are a no-op.
    pub fn unregister_panel(&mut self, id: &PanelId) -> bool {
        let removed = self.panels.unregister(id).is_some();
        if removed {
            tracing::trace!(panel = %id, "panel unregistered");
            self.reallocate();
        }
        removed
    }

    /// Append a splitter; call order defines panel adjacency.
    pub fn register_splitter(&mut self, id: SplitterId) -> Result<(), LayoutError> {
        self.splitters.register(id.clone())?;
        tracing::trace!(splitter = %id, "splitter registered");
        Ok(())
    }

    /// Remove a splitter. Unknown ids are a no-op.
    pub fn unregister_splitter(&mut self, id: &SplitterId) -> bool {
        self.splitters.unregister(id).is_some()
    }

    fn reallocate(&mut self) {
        self.sizes = allocator::initial_sizes(self.panels.records());
    }

    // -----------------------------------------------------------------------
    // Interaction
    // -----------------------------------------------------------------------

    /// Apply one pointer drag sample at a splitter.
    ///
    /// Resolves the pixel movement against the fresh track extent, gives the
    /// snap evaluator first refusal, and otherwise propagates the percent
    /// delta through the panel chains. Unknown splitter ids return the
    /// unchanged vector.
    pub fn apply_drag<G: TrackGeometry + ?Sized>(
        &mut self,
        splitter: &SplitterId,
        sample: DragSample,
        geometry: &G,
    ) -> &SizeVector {
        let Some(index) = self.splitters.index_of(splitter) else {
            tracing::trace!(splitter = %splitter, "drag on unknown splitter ignored");
            return &self.sizes;
        };
        let extent = geometry.track_extent(self.axis);
        let percent = delta::percent_delta(sample.delta_px, extent);
        match snap::evaluate(
            self.panels.records(),
            &self.sizes,
            index,
            percent,
            sample.pointer_px,
            self.axis,
            geometry,
        ) {
            SnapStep::Collapse(next) => {
                tracing::debug!(splitter = index, "panel snapped closed");
                self.sizes = next;
            }
            SnapStep::Expand(next) => {
                tracing::debug!(splitter = index, "panel snapped open");
                self.sizes = next;
            }
            SnapStep::Hold => {}
            SnapStep::PassThrough => {
                self.sizes = propagate::adjust(self.panels.records(), &self.sizes, index, percent);
            }
        }
        &self.sizes
    }

    /// Apply a direct percentage step at a splitter (keyboard path).
    ///
    /// Bypasses both the delta resolver and the snap evaluator: there is no
    /// pointer to compare against snap thresholds. Unknown splitter ids
    /// return the unchanged vector.
    pub fn apply_step(&mut self, splitter: &SplitterId, percent_step: f64) -> &SizeVector {
        let Some(index) = self.splitters.index_of(splitter) else {
            return &self.sizes;
        };
        self.sizes = propagate::adjust(self.panels.records(), &self.sizes, index, percent_step);
        &self.sizes
    }

    /// Derived range view over one splitter for assistive technology.
    ///
    /// Read-only over the size vector and constraint records; nothing is
    /// stored separately.
    #[must_use]
    pub fn splitter_range(&self, splitter: &SplitterId) -> Option<SplitterRange> {
        let index = self.splitters.index_of(splitter)?;
        let records = self.panels.records();
        let now = self
            .sizes
            .iter()
            .take(index + 1)
            .map(|size| size.effective())
            .sum();
        let min = records
            .iter()
            .take(index + 1)
            .map(|record| record.constraints.min)
            .sum();
        let max = 100.0
            - records
                .iter()
                .skip(index + 1)
                .map(|record| record.constraints.min)
                .sum::<f64>();
        Some(SplitterRange { now, min, max })
    }
}
