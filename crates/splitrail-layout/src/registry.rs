//! Ordered panel and splitter registries.
//!
//! Registration order is layout order: the splitter at index `i` always
//! operates on the panel pair `(i, i + 1)`. Splitters carry no size state of
//! their own.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

// ---------------------------------------------------------------------------
// Ids
// ---------------------------------------------------------------------------

/// Stable identifier for a panel, unique within its group.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PanelId(String);

impl PanelId {
    /// Wrap a host-supplied id.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The raw string form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PanelId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// Stable identifier for a splitter, unique within its group.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SplitterId(String);

impl SplitterId {
    /// Wrap a host-supplied id.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The raw string form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SplitterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SplitterId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

// ---------------------------------------------------------------------------
// Constraints
// ---------------------------------------------------------------------------

/// Per-panel size bounds and snap band, all in percent of the track.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelConstraints {
    /// Smallest size the panel can be resized to.
    pub min: f64,
    /// Largest size the panel can be resized to.
    pub max: f64,
    /// Extra band beyond `min` within which a drag fully collapses the
    /// panel. `0.0` disables snapping.
    #[serde(default)]
    pub snap: f64,
    /// Explicit starting size; panels without one share the leftover budget.
    #[serde(default)]
    pub initial: Option<f64>,
}

impl Default for PanelConstraints {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            snap: 0.0,
            initial: None,
        }
    }
}

impl PanelConstraints {
    /// Constraints with explicit bounds and no snap or initial size.
    #[must_use]
    pub fn bounded(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            ..Self::default()
        }
    }

    /// Set the snap band.
    #[must_use]
    pub fn with_snap(mut self, snap: f64) -> Self {
        self.snap = snap;
        self
    }

    /// Set the explicit initial size.
    #[must_use]
    pub fn with_initial(mut self, initial: f64) -> Self {
        self.initial = Some(initial);
        self
    }

    /// Whether snap-to-collapse applies to this panel.
    #[must_use]
    pub fn snap_enabled(&self) -> bool {
        self.snap > 0.0
    }

    /// Validate the configuration for a given panel id.
    pub fn validate(&self, id: &PanelId) -> Result<(), LayoutError> {
        if !(0.0..=100.0).contains(&self.min)
            || !(0.0..=100.0).contains(&self.max)
            || self.min > self.max
        {
            return Err(LayoutError::InvalidBounds {
                id: id.clone(),
                min: self.min,
                max: self.max,
            });
        }
        if self.snap < 0.0 {
            return Err(LayoutError::NegativeSnapBand {
                id: id.clone(),
                snap: self.snap,
            });
        }
        if let Some(initial) = self.initial
            && !(self.min..=self.max).contains(&initial)
        {
            return Err(LayoutError::InitialOutOfBounds {
                id: id.clone(),
                initial,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// One registered panel: id plus validated constraints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelRecord {
    pub id: PanelId,
    pub constraints: PanelConstraints,
}

// ---------------------------------------------------------------------------
// Registries
// ---------------------------------------------------------------------------

/// Ordered list of panel records. Registration order is layout order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PanelRegistry {
    records: Vec<PanelRecord>,
}

impl PanelRegistry {
    /// Register a panel, validating its constraints.
    ///
    /// Re-registering an existing id replaces the record in place so the
    /// panel keeps its position in layout order.
    pub fn register(
        &mut self,
        id: PanelId,
        constraints: PanelConstraints,
    ) -> Result<(), LayoutError> {
        constraints.validate(&id)?;
        if let Some(existing) = self.records.iter_mut().find(|r| r.id == id) {
            existing.constraints = constraints;
        } else {
            self.records.push(PanelRecord { id, constraints });
        }
        Ok(())
    }

    /// Remove a panel, returning its former index.
    pub fn unregister(&mut self, id: &PanelId) -> Option<usize> {
        let index = self.index_of(id)?;
        self.records.remove(index);
        Some(index)
    }

    /// Layout index of a panel id.
    #[must_use]
    pub fn index_of(&self, id: &PanelId) -> Option<usize> {
        self.records.iter().position(|r| &r.id == id)
    }

    /// Record at a layout index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&PanelRecord> {
        self.records.get(index)
    }

    /// All records in layout order.
    #[must_use]
    pub fn records(&self) -> &[PanelRecord] {
        &self.records
    }

    /// Number of registered panels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Ordered list of splitter ids.
///
/// The splitter at index `i` is implicitly associated with the panel pair
/// `(i, i + 1)`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SplitterRegistry {
    ids: Vec<SplitterId>,
}

impl SplitterRegistry {
    /// Append a splitter in call order.
    pub fn register(&mut self, id: SplitterId) -> Result<(), LayoutError> {
        if self.ids.contains(&id) {
            return Err(LayoutError::DuplicateSplitterId { id });
        }
        self.ids.push(id);
        Ok(())
    }

    /// Remove a splitter, returning its former index.
    pub fn unregister(&mut self, id: &SplitterId) -> Option<usize> {
        let index = self.index_of(id)?;
        self.ids.remove(index);
        Some(index)
    }

    /// Index of a splitter id.
    #[must_use]
    pub fn index_of(&self, id: &SplitterId) -> Option<usize> {
        self.ids.iter().position(|existing| existing == id)
    }

    /// All splitter ids in registration order.
    #[must_use]
    pub fn ids(&self) -> &[SplitterId] {
        &self.ids
    }

    /// Number of registered splitters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // ---- Constraint validation ----

    #[test]
    fn default_constraints_are_valid() {
        let id = PanelId::new("p");
        assert!(PanelConstraints::default().validate(&id).is_ok());
    }

    #[test]
    fn min_above_max_rejected() {
        let id = PanelId::new("p");
        let err = PanelConstraints::bounded(60.0, 40.0)
            .validate(&id)
            .unwrap_err();
        assert!(matches!(err, LayoutError::InvalidBounds { .. }));
    }

    #[test]
    fn bounds_outside_budget_rejected() {
        let id = PanelId::new("p");
        assert!(
            PanelConstraints::bounded(-1.0, 50.0)
                .validate(&id)
                .is_err()
        );
        assert!(
            PanelConstraints::bounded(0.0, 101.0)
                .validate(&id)
                .is_err()
        );
    }

    #[test]
    fn initial_outside_bounds_rejected() {
        let id = PanelId::new("p");
        let err = PanelConstraints::bounded(20.0, 60.0)
            .with_initial(10.0)
            .validate(&id)
            .unwrap_err();
        assert!(matches!(err, LayoutError::InitialOutOfBounds { .. }));
    }

    #[test]
    fn initial_on_bound_accepted() {
        let id = PanelId::new("p");
        assert!(
            PanelConstraints::bounded(20.0, 60.0)
                .with_initial(20.0)
                .validate(&id)
                .is_ok()
        );
    }

    #[test]
    fn negative_snap_rejected() {
        let id = PanelId::new("p");
        let err = PanelConstraints::default()
            .with_snap(-5.0)
            .validate(&id)
            .unwrap_err();
        assert!(matches!(err, LayoutError::NegativeSnapBand { .. }));
    }

    #[test]
    fn snap_enabled_only_when_positive() {
        assert!(!PanelConstraints::default().snap_enabled());
        assert!(PanelConstraints::default().with_snap(15.0).snap_enabled());
    }

    // ---- Panel registry ----

    #[test]
    fn register_preserves_order() {
        let mut reg = PanelRegistry::default();
        reg.register(PanelId::new("a"), PanelConstraints::default())
            .unwrap();
        reg.register(PanelId::new("b"), PanelConstraints::default())
            .unwrap();
        reg.register(PanelId::new("c"), PanelConstraints::default())
            .unwrap();
        assert_eq!(reg.index_of(&PanelId::new("b")), Some(1));
        assert_eq!(reg.len(), 3);
    }

    #[test]
    fn reregister_replaces_in_place() {
        let mut reg = PanelRegistry::default();
        reg.register(PanelId::new("a"), PanelConstraints::default())
            .unwrap();
        reg.register(PanelId::new("b"), PanelConstraints::default())
            .unwrap();
        reg.register(PanelId::new("a"), PanelConstraints::bounded(10.0, 50.0))
            .unwrap();
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.index_of(&PanelId::new("a")), Some(0));
        assert_eq!(reg.get(0).unwrap().constraints.max, 50.0);
    }

    #[test]
    fn register_rejects_invalid_without_mutating() {
        let mut reg = PanelRegistry::default();
        let err = reg.register(PanelId::new("a"), PanelConstraints::bounded(80.0, 20.0));
        assert!(err.is_err());
        assert!(reg.is_empty());
    }

    #[test]
    fn unregister_returns_index() {
        let mut reg = PanelRegistry::default();
        reg.register(PanelId::new("a"), PanelConstraints::default())
            .unwrap();
        reg.register(PanelId::new("b"), PanelConstraints::default())
            .unwrap();
        assert_eq!(reg.unregister(&PanelId::new("a")), Some(0));
        assert_eq!(reg.index_of(&PanelId::new("b")), Some(0));
        assert_eq!(reg.unregister(&PanelId::new("missing")), None);
    }

    // ---- Splitter registry ----

    #[test]
    fn splitters_append_in_call_order() {
        let mut reg = SplitterRegistry::default();
        reg.register(SplitterId::new("s0")).unwrap();
        reg.register(SplitterId::new("s1")).unwrap();
        assert_eq!(reg.index_of(&SplitterId::new("s1")), Some(1));
    }

    #[test]
    fn duplicate_splitter_rejected() {
        let mut reg = SplitterRegistry::default();
        reg.register(SplitterId::new("s0")).unwrap();
        let err = reg.register(SplitterId::new("s0")).unwrap_err();
        assert!(matches!(err, LayoutError::DuplicateSplitterId { .. }));
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn splitter_unregister() {
        let mut reg = SplitterRegistry::default();
        reg.register(SplitterId::new("s0")).unwrap();
        assert_eq!(reg.unregister(&SplitterId::new("s0")), Some(0));
        assert!(reg.is_empty());
    }

    // ---- Serde ----

    #[test]
    fn panel_id_serde_transparent() {
        let json = serde_json::to_string(&PanelId::new("left")).unwrap();
        assert_eq!(json, "\"left\"");
    }

    #[test]
    fn constraints_serde_defaults() {
        let parsed: PanelConstraints = serde_json::from_str(r#"{"min": 5.0, "max": 80.0}"#).unwrap();
        assert_eq!(parsed.snap, 0.0);
        assert_eq!(parsed.initial, None);
    }
}
