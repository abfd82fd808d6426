//! Game Module
//!
//! Object rules, engine configuration and the world arena that build on top
//! of the engine's topology, location and resolution layers.

pub mod config;
pub mod error;
pub mod objects;
pub mod world;

pub use config::EngineConfig;
pub use error::{ConfigError, WorldError};
pub use objects::{LightConfig, Object, ObjectKind, SensorConfig};
pub use world::{Mover, MoverId, ObjectId, World};
