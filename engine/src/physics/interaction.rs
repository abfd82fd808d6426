//! Interaction Protocol
//!
//! The value passed through every object at a cell when a mover tries to
//! travel in a direction. The engine fills in the inputs, each object writes
//! its own contribution into the outputs, and the resolver folds those
//! contributions into one decision.
//!
//! ## Zones
//! A zone places an object along the travel axis, from -3 (the surface
//! behind the mover) through 0 (the room center, or spanning the axis) to
//! +3 (the surface the mover is heading into). Smaller magnitudes are closer
//! to the mover and win when objects disagree about where travel continues.

use serde::{Deserialize, Serialize};

use crate::location::{CoarseLocation, FineLocation};
use crate::topology::Direction;

/// Surface ahead of the mover along the travel axis.
pub const ZONE_FAR: i8 = 3;
/// Partway toward a surface, mover still out of reach.
pub const ZONE_NEAR: i8 = 2;
/// In contact with the mover.
pub const ZONE_CONTACT: i8 = 1;
/// Room center, or spanning the whole travel axis.
pub const ZONE_CENTER: i8 = 0;

/// Zone of something mounted on `surface` for travel along `direction`.
///
/// ±3 when the surface is ahead/behind, 0 when it runs alongside.
pub fn surface_zone(surface: Direction, direction: Direction) -> i8 {
    match surface.sign_along(direction) {
        1 => ZONE_FAR,
        -1 => -ZONE_FAR,
        _ => ZONE_CENTER,
    }
}

/// One object's effect on a move, as written by `interact`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contribution {
    pub zone: i8,
    pub supports: bool,
    pub blocks: bool,
    pub next_direction: Direction,
    pub next_rotation: Option<Direction>,
}

/// A single move attempt as seen by the objects at the mover's cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interaction {
    /// Requested travel direction
    pub direction: Direction,
    /// Where the mover is right now
    pub location: FineLocation,
    pub zone: i8,
    pub supports: bool,
    pub blocks: bool,
    /// Where travel continues if not blocked (defaults to `direction`)
    pub next_direction: Direction,
    /// New facing, set only by objects that turn the mover
    pub next_rotation: Option<Direction>,
}

impl Interaction {
    pub fn new(direction: Direction, location: FineLocation) -> Self {
        Self {
            direction,
            location,
            zone: ZONE_CENTER,
            supports: false,
            blocks: false,
            next_direction: direction,
            next_rotation: None,
        }
    }

    /// Clear the outputs before handing the interaction to the next object.
    pub fn reset_outputs(&mut self) {
        self.zone = ZONE_CENTER;
        self.supports = false;
        self.blocks = false;
        self.next_direction = self.direction;
        self.next_rotation = None;
    }

    #[inline]
    pub fn mover(&self) -> &CoarseLocation {
        &self.location.coarse
    }

    /// True when the current object sent travel somewhere else.
    #[inline]
    pub fn redirects(&self) -> bool {
        self.next_direction != self.direction
    }

    /// True when the current object turned the mover.
    #[inline]
    pub fn rotates(&self) -> bool {
        self.next_rotation.is_some()
    }

    pub fn contribution(&self) -> Contribution {
        Contribution {
            zone: self.zone,
            supports: self.supports,
            blocks: self.blocks,
            next_direction: self.next_direction,
            next_rotation: self.next_rotation,
        }
    }
}

/// Anything that can take part in move resolution.
///
/// Implementations must not panic; an object with nothing to say leaves the
/// outputs as they are.
pub trait Interactor {
    fn interact(&self, interaction: &mut Interaction);

    /// Short label used in trace output.
    fn label(&self) -> &'static str {
        "object"
    }
}
