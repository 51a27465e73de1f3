//! Panel size state and the shared size vector.
//!
//! A collapsed panel is an explicit variant rather than a reserved numeric
//! sentinel, so the snap state machine is directly representable and a
//! collapsed slot can never be mistaken for a tiny-but-visible panel.

use serde::{Deserialize, Serialize};

use crate::registry::PanelRecord;

/// Size state of one panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelSize {
    /// Visible, holding this many percent of the track.
    Sized(f64),
    /// Fully collapsed; contributes zero to the budget while keeping its
    /// slot in the vector.
    Collapsed,
}

impl PanelSize {
    /// Budget contribution: the percent for `Sized`, zero for `Collapsed`.
    #[must_use]
    pub const fn effective(self) -> f64 {
        match self {
            Self::Sized(percent) => percent,
            Self::Collapsed => 0.0,
        }
    }

    /// Whether the panel is collapsed.
    #[must_use]
    pub const fn is_collapsed(self) -> bool {
        matches!(self, Self::Collapsed)
    }

    /// The percent value, if visible.
    #[must_use]
    pub const fn as_sized(self) -> Option<f64> {
        match self {
            Self::Sized(percent) => Some(percent),
            Self::Collapsed => None,
        }
    }
}

/// Ordered percent allocation, one entry per registered panel.
///
/// The vector is replaced wholesale on every recomputation: each step takes
/// the prior vector plus constraints and returns a new one, so callers get a
/// simple identity-change signal and never observe a partial update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SizeVector {
    entries: Vec<PanelSize>,
}

impl SizeVector {
    /// Wrap an entry list.
    #[must_use]
    pub fn new(entries: Vec<PanelSize>) -> Self {
        Self { entries }
    }

    /// Entry at a layout index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<PanelSize> {
        self.entries.get(index).copied()
    }

    /// All entries in layout order.
    #[must_use]
    pub fn as_slice(&self) -> &[PanelSize] {
        &self.entries
    }

    /// Number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the vector has no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries.
    pub fn iter(&self) -> impl Iterator<Item = PanelSize> + '_ {
        self.entries.iter().copied()
    }

    /// Sum of effective sizes (collapsed panels contribute zero).
    #[must_use]
    pub fn effective_total(&self) -> f64 {
        self.entries.iter().map(|size| size.effective()).sum()
    }

    /// Whether the budget invariant holds: the effective total is 100
    /// within `tolerance`. Trivially true for an empty vector.
    #[must_use]
    pub fn budget_conserved(&self, tolerance: f64) -> bool {
        self.is_empty() || (self.effective_total() - 100.0).abs() <= tolerance
    }

    /// Diagnostic check that every visible panel sits within its bounds.
    ///
    /// Not enforced by the allocator (see the residual-absorption rule), so
    /// callers wanting a guarantee must check after initial allocation.
    #[must_use]
    pub fn within_bounds(&self, records: &[PanelRecord], tolerance: f64) -> bool {
        self.entries
            .iter()
            .zip(records)
            .all(|(size, record)| match size {
                PanelSize::Collapsed => true,
                PanelSize::Sized(percent) => {
                    *percent >= record.constraints.min - tolerance
                        && *percent <= record.constraints.max + tolerance
                }
            })
    }
}

impl FromIterator<PanelSize> for SizeVector {
    fn from_iter<I: IntoIterator<Item = PanelSize>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl std::ops::Index<usize> for SizeVector {
    type Output = PanelSize;

    fn index(&self, index: usize) -> &PanelSize {
        &self.entries[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{PanelConstraints, PanelId};

    fn record(min: f64, max: f64) -> PanelRecord {
        PanelRecord {
            id: PanelId::new("p"),
            constraints: PanelConstraints::bounded(min, max),
        }
    }

    #[test]
    fn effective_of_collapsed_is_zero() {
        assert_eq!(PanelSize::Collapsed.effective(), 0.0);
        assert_eq!(PanelSize::Sized(37.5).effective(), 37.5);
    }

    #[test]
    fn as_sized_filters_collapsed() {
        assert_eq!(PanelSize::Sized(10.0).as_sized(), Some(10.0));
        assert_eq!(PanelSize::Collapsed.as_sized(), None);
    }

    #[test]
    fn effective_total_skips_collapsed() {
        let vector = SizeVector::new(vec![
            PanelSize::Sized(60.0),
            PanelSize::Collapsed,
            PanelSize::Sized(40.0),
        ]);
        assert_eq!(vector.effective_total(), 100.0);
        assert!(vector.budget_conserved(1e-9));
    }

    #[test]
    fn budget_conserved_empty_vector() {
        assert!(SizeVector::default().budget_conserved(1e-9));
    }

    #[test]
    fn budget_violation_detected() {
        let vector = SizeVector::new(vec![PanelSize::Sized(60.0), PanelSize::Sized(30.0)]);
        assert!(!vector.budget_conserved(1e-9));
    }

    #[test]
    fn within_bounds_ignores_collapsed() {
        let records = [record(10.0, 50.0), record(0.0, 100.0)];
        let vector = SizeVector::new(vec![PanelSize::Collapsed, PanelSize::Sized(100.0)]);
        assert!(vector.within_bounds(&records, 1e-9));
    }

    #[test]
    fn within_bounds_flags_violation() {
        let records = [record(10.0, 50.0)];
        let vector = SizeVector::new(vec![PanelSize::Sized(60.0)]);
        assert!(!vector.within_bounds(&records, 1e-9));
    }

    #[test]
    fn serde_shape() {
        let vector = SizeVector::new(vec![PanelSize::Sized(30.0), PanelSize::Collapsed]);
        let json = serde_json::to_string(&vector).unwrap();
        assert_eq!(json, r#"[{"sized":30.0},"collapsed"]"#);
        let back: SizeVector = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vector);
    }
}
