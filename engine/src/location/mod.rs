//! Location Module
//!
//! Where an entity is in the room grid: the coarse room/surface/facing and
//! the fine continuous offset and partial turn that ride on top of it.
//!
//! # Submodules
//!
//! - [`coarse`] - Integer room coordinates, resting surface, facing
//! - [`fine`] - Sub-room offsets, partial turns, normalization and local movement

pub mod coarse;
pub mod fine;

pub use coarse::{CellKey, CoarseLocation, LocalAxis, LocalDirection};
pub use fine::{FINE_MAX, FINE_MIN, FineLocation, apply_quarter_turns};
