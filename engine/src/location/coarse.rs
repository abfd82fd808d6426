//! Coarse Location
//!
//! Integer room coordinates plus the surface an entity rests on and the way
//! it faces on that surface.

use glam::{IVec3, Mat3, Vec3};
use serde::{Deserialize, Serialize};

use crate::topology::{Direction, basis, effective_rotation};

/// Key of a room in the grid, `(east, above, north)`.
pub type CellKey = IVec3;

/// A direction relative to an entity's own surface and facing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocalDirection {
    Forward,
    Back,
    Left,
    Right,
    Up,
    Down,
}

/// One of the three local axes. Positive deltas go right, up and forward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocalAxis {
    Right,
    Up,
    Forward,
}

impl LocalAxis {
    /// Unit vector of the axis in the canonical local frame.
    pub fn unit(self) -> Vec3 {
        match self {
            LocalAxis::Right => Vec3::X,
            LocalAxis::Up => Vec3::Y,
            LocalAxis::Forward => Vec3::Z,
        }
    }
}

/// Room coordinates, resting surface and facing.
///
/// `rotation` is expected to be perpendicular to `surface` (or CENTER/NONE
/// when the surface is). Other combinations are tolerated and read with the
/// surface's reference facing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CoarseLocation {
    pub east: i32,
    pub above: i32,
    pub north: i32,
    pub surface: Direction,
    pub rotation: Direction,
}

static_assertions::assert_impl_all!(CoarseLocation: Copy, Send, Sync);

impl CoarseLocation {
    pub fn new(
        east: i32,
        above: i32,
        north: i32,
        surface: Direction,
        rotation: Direction,
    ) -> Self {
        Self {
            east,
            above,
            north,
            surface,
            rotation,
        }
    }

    /// A location in the middle of a room with no surface.
    pub fn centered(east: i32, above: i32, north: i32) -> Self {
        Self::new(east, above, north, Direction::Center, Direction::None)
    }

    #[inline]
    pub fn cell(&self) -> CellKey {
        IVec3::new(self.east, self.above, self.north)
    }

    /// Room coordinates as floats, in room units.
    #[inline]
    pub fn cell_vec3(&self) -> Vec3 {
        self.cell().as_vec3()
    }

    /// Same orientation, moved to another room.
    pub fn with_cell(self, cell: CellKey) -> Self {
        Self {
            east: cell.x,
            above: cell.y,
            north: cell.z,
            ..self
        }
    }

    /// Same room, new surface and facing.
    pub fn with_orientation(self, surface: Direction, rotation: Direction) -> Self {
        Self {
            surface,
            rotation,
            ..self
        }
    }

    /// Room one step away along an axis direction. Non-axis directions stay put.
    pub fn neighbor(&self, direction: Direction) -> CellKey {
        self.cell() + direction.to_ivec3()
    }

    /// True when `rotation` lies in the plane of `surface`, or both are unset.
    pub fn is_valid(&self) -> bool {
        if self.surface.is_axis() {
            self.rotation.is_perpendicular_to(self.surface)
        } else {
            !self.rotation.is_axis()
                || self.rotation.is_perpendicular_to(Direction::Below)
        }
    }

    /// Local-to-world orientation matrix.
    #[inline]
    pub fn basis(&self) -> Mat3 {
        basis(self.surface, self.rotation)
    }

    /// The mover's "down": the surface it rests on, NONE if it has none.
    pub fn down(&self) -> Direction {
        if self.surface.is_axis() {
            self.surface
        } else {
            Direction::None
        }
    }

    /// The mover's "up", ABOVE when it has no surface.
    pub fn up(&self) -> Direction {
        if self.surface.is_axis() {
            self.surface.opposite()
        } else {
            Direction::Above
        }
    }

    /// World direction corresponding to a local one.
    pub fn world_direction(&self, local: LocalDirection) -> Direction {
        let surface = if self.surface.is_axis() {
            self.surface
        } else {
            Direction::Below
        };
        let forward = effective_rotation(self.surface, self.rotation);
        match local {
            LocalDirection::Forward => forward,
            LocalDirection::Back => forward.opposite(),
            LocalDirection::Right => Direction::rotate_right(surface, forward),
            LocalDirection::Left => Direction::rotate_left(surface, forward),
            LocalDirection::Up => surface.opposite(),
            LocalDirection::Down => surface,
        }
    }
}
