#![forbid(unsafe_code)]

//! Geometry primitives shared by splitrail layout engines and their hosts.
//!
//! The layout engine itself is host-agnostic: it reasons in percent of a
//! one-dimensional track and only touches pixels through the types in this
//! crate. Hosts (a DOM renderer, a terminal grid, a test harness) implement
//! [`TrackGeometry`] to answer pixel queries.

pub mod geometry;

pub use geometry::{Axis, Band, StaticTrack, TrackGeometry};
