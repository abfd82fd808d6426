//! Topology Module
//!
//! Direction algebra and the orientation lookup for entities resting on the
//! six inner faces of a cube room.
//!
//! # Submodules
//!
//! - [`direction`] - The closed 8-value direction set, opposite and quarter turns
//! - [`orientation`] - (surface, rotation) pairs as rotation matrices and turn counts

pub mod direction;
pub mod orientation;

pub use direction::{Direction, opposite, rotate_left, rotate_right};
pub use orientation::{
    basis, effective_rotation, quarter_turns, reference_rotation, turns_from_reference,
};
