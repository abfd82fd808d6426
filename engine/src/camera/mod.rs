//! Camera Module
//!
//! Viewer-relative placement: where every object appears in the first-person
//! frame of whoever is looking. Window-system agnostic; it only deals with
//! locations and math.

pub mod placement;

pub use placement::{Transform, compute_placement, compute_placement_with, view_matrix};
