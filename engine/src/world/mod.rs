//! World Module
//!
//! World-space configuration for the room grid.
//!
//! ## Room Grid
//! Rooms are unit cells addressed by integer (east, above, north). When
//! drawn, one room spans `room_size` world units and the camera sits a
//! small distance behind the viewer's eye.

pub mod grid;

pub use grid::{CAMERA_PULL_BACK, HALF_ROOM, PlacementConfig, ROOM_SIZE};
