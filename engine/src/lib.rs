//! Cube Rooms Engine Library
//!
//! Spatial topology and move resolution for a world built from cube-shaped
//! rooms. Every entity sits in a room, is mounted on one of its six faces
//! (or floats at the center) and faces one of the four directions along
//! that face.
//!
//! # Modules
//!
//! - [`topology`] - Direction algebra and orientation bases
//! - [`location`] - Coarse (room) and fine (sub-room) locations
//! - [`camera`] - Viewer-relative placement of objects
//! - [`physics`] - Per-object interactions and move resolution
//! - [`world`] - Room grid placement configuration
//! - [`game`] - Object kinds, engine configuration and the world arena
//!
//! # Example
//!
//! ```ignore
//! use cube_rooms_engine::game::{EngineConfig, Object, ObjectKind, World};
//! use cube_rooms_engine::location::CoarseLocation;
//! use cube_rooms_engine::topology::Direction;
//!
//! let mut world = World::new(EngineConfig::default());
//! world.spawn(Object::new(
//!     ObjectKind::StoneWall,
//!     CoarseLocation::new(0, 0, 0, Direction::Below, Direction::North),
//! ));
//! let me = world.spawn_player(CoarseLocation::new(0, 0, 0, Direction::Below, Direction::North).into());
//! let outcome = world.resolve_move(me, Direction::North)?;
//! ```

pub mod camera;
pub mod location;
pub mod physics;
pub mod topology;
pub mod world;

// Game-specific modules (located in src/game/ directory)
#[path = "../../src/game/mod.rs"]
pub mod game;

pub use camera::{Transform, compute_placement};
pub use location::{CoarseLocation, FineLocation};
pub use physics::{Interaction, Interactor, ResolutionOutcome};
pub use topology::Direction;
pub use world::PlacementConfig;
