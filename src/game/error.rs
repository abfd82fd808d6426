//! Error Types
//!
//! Failures of the loader-facing surface: configuration text, object lists
//! and handle lookups. Move resolution and placement never fail.

use thiserror::Error;

use super::objects::ObjectKind;
use super::world::{MoverId, ObjectId};
use crate::topology::Direction;

/// Errors from parsing or validating an [`EngineConfig`](super::config::EngineConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: &'static str },
}

/// Errors from building or querying a [`World`](super::world::World).
#[derive(Debug, Error)]
pub enum WorldError {
    #[error("{kind} cannot rest on {surface} facing {rotation}")]
    InvalidOrientation {
        kind: ObjectKind,
        surface: Direction,
        rotation: Direction,
    },
    #[error("no object with id {0}")]
    UnknownObject(ObjectId),
    #[error("{kind} {id} has no on/off state")]
    NotStateful { id: ObjectId, kind: ObjectKind },
    #[error("no mover with id {0}")]
    UnknownMover(MoverId),
    #[error("world JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
