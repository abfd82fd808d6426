//! Physics Module
//!
//! Move resolution for entities travelling between cube rooms. Built from
//! scratch over the closed direction set: there is no continuous collision
//! here, only per-cell interaction between a mover and the objects sharing
//! its room.
//!
//! # Unit System
//!
//! **1 step = 1 room** by default. Fine offsets are in room units; world units
//! only appear once a location is placed relative to a viewer.
//!
//! # Submodules
//!
//! - [`interaction`] - The `Interaction` value, zones and the `Interactor` seam
//! - [`resolve`] - Folding contributions into a decision and applying it

pub mod interaction;
pub mod resolve;

pub use interaction::{
    Contribution, Interaction, Interactor, ZONE_CENTER, ZONE_CONTACT, ZONE_FAR, ZONE_NEAR,
    surface_zone,
};
pub use resolve::{MovementConfig, Resolution, ResolutionOutcome, resolve_cell, resolve_step};
