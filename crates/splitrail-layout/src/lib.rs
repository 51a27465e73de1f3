#![forbid(unsafe_code)]

//! Resizable panel layout engine.
//!
//! A [`PanelGroup`] manages a single row or column of panels whose sizes are
//! percentages of a shared track summing to 100. Dragging a splitter moves
//! budget between the panel chains on either side of it, cascading past
//! panels that hit their bounds; panels configured with a snap band can
//! collapse to zero and re-expand as the pointer crosses their thresholds.
//!
//! The engine is headless. Pixel measurements come in through the
//! [`TrackGeometry`] trait from `splitrail-core`, and every interaction
//! produces a fresh immutable [`SizeVector`] snapshot.
//!
//! ```
//! use splitrail_layout::{
//!     DragSample, PanelConstraints, PanelGroup, PanelId, SplitterId,
//! };
//! use splitrail_core::{Axis, StaticTrack};
//!
//! let mut group = PanelGroup::new(Axis::Horizontal);
//! group.register_panel(PanelId::new("nav"), PanelConstraints::bounded(10.0, 40.0))?;
//! group.register_panel(PanelId::new("main"), PanelConstraints::default())?;
//! group.register_splitter(SplitterId::new("s0"))?;
//!
//! let track = StaticTrack::from_percents(800.0, &[45.0, 55.0]);
//! group.apply_drag(
//!     &SplitterId::new("s0"),
//!     DragSample { delta_px: -80.0, pointer_px: 280.0 },
//!     &track,
//! );
//! assert!(group.sizes().budget_conserved(1e-9));
//! # Ok::<(), splitrail_layout::LayoutError>(())
//! ```

pub mod allocator;
pub mod delta;
pub mod error;
pub mod group;
pub mod propagate;
pub mod registry;
pub mod size;
pub mod snap;

pub use splitrail_core::{Axis, Band, StaticTrack, TrackGeometry};

pub use error::LayoutError;
pub use group::{DragSample, PanelGroup, SplitterRange};
pub use registry::{PanelConstraints, PanelId, PanelRecord, SplitterId};
pub use size::{PanelSize, SizeVector};
pub use snap::SnapStep;
