//! One-dimensional track geometry.
//!
//! A panel group lays its panels out along a single axis. Everything the
//! engine needs from the host is expressed here: which axis is active, the
//! pixel span each panel currently occupies, and the pixel length of the
//! whole track.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Axis
// ---------------------------------------------------------------------------

/// The axis a panel group resizes along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Panels sit side by side; the track extent is the group width.
    #[default]
    Horizontal,
    /// Panels stack top to bottom; the track extent is the group height.
    Vertical,
}

impl Axis {
    /// Select the active component of an `(x, y)` pair.
    #[must_use]
    pub const fn pick(self, pair: (f64, f64)) -> f64 {
        match self {
            Self::Horizontal => pair.0,
            Self::Vertical => pair.1,
        }
    }

    /// The perpendicular axis.
    #[must_use]
    pub const fn cross(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// Short label for diagnostics.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Band
// ---------------------------------------------------------------------------

/// A pixel span along one axis: leading edge plus extent.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Band {
    /// Leading-edge offset in pixels, measured from the track origin.
    pub origin: f64,
    /// Length in pixels. Zero is valid (a fully collapsed panel).
    pub extent: f64,
}

impl Band {
    /// Create a band from leading edge and extent.
    #[must_use]
    pub const fn new(origin: f64, extent: f64) -> Self {
        Self { origin, extent }
    }

    /// Trailing-edge offset (exclusive).
    #[must_use]
    pub fn trailing(self) -> f64 {
        self.origin + self.extent
    }

    /// Offset of the band's midpoint.
    #[must_use]
    pub fn midpoint(self) -> f64 {
        self.origin + self.extent / 2.0
    }

    /// Whether a position falls inside the band.
    #[must_use]
    pub fn contains(self, position: f64) -> bool {
        position >= self.origin && position < self.trailing()
    }

    /// Whether the band has zero (or negative) extent.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.extent <= 0.0
    }
}

// ---------------------------------------------------------------------------
// TrackGeometry
// ---------------------------------------------------------------------------

/// Pixel-measurement capability supplied by the rendering layer.
///
/// Implementations must answer with fresh measurements on every call. The
/// engine never caches a track extent: the host surface can resize
/// independently of any panel interaction, so a cached extent would skew
/// every subsequent pixel-to-percent conversion.
pub trait TrackGeometry {
    /// Pixel length of the whole group along `axis`.
    fn track_extent(&self, axis: Axis) -> f64;

    /// Pixel band currently occupied by the panel at `index` along `axis`,
    /// or `None` when the panel is not laid out (unknown index, detached
    /// host node).
    fn panel_band(&self, index: usize, axis: Axis) -> Option<Band>;
}

/// Fixed geometry backed by plain values.
///
/// Intended for headless hosts and tests; real hosts measure live surfaces
/// instead.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticTrack {
    extent: f64,
    bands: Vec<Band>,
}

impl StaticTrack {
    /// Build a track with the given extent and per-panel bands.
    #[must_use]
    pub fn new(extent: f64, bands: impl IntoIterator<Item = Band>) -> Self {
        Self {
            extent,
            bands: bands.into_iter().collect(),
        }
    }

    /// Build a track whose bands are derived from percent shares laid end
    /// to end from the track origin.
    #[must_use]
    pub fn from_percents(extent: f64, percents: &[f64]) -> Self {
        let mut bands = Vec::with_capacity(percents.len());
        let mut cursor = 0.0;
        for &percent in percents {
            let len = percent / 100.0 * extent;
            bands.push(Band::new(cursor, len));
            cursor += len;
        }
        Self { extent, bands }
    }
}

impl TrackGeometry for StaticTrack {
    fn track_extent(&self, _axis: Axis) -> f64 {
        self.extent
    }

    fn panel_band(&self, index: usize, _axis: Axis) -> Option<Band> {
        self.bands.get(index).copied()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
