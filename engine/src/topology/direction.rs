//! Direction Algebra
//!
//! The closed set of eight directions used for surfaces, facings and moves,
//! and the quarter-turn operations defined over them.
//!
//! ## World axes
//! - EAST / WEST   -> +x / -x
//! - ABOVE / BELOW -> +y / -y
//! - NORTH / SOUTH -> +z / -z
//!
//! CENTER and NONE carry no axis. Every operation here is total: combinations
//! that make no physical sense return their input unchanged.

use glam::{IVec3, Vec3};
use serde::{Deserialize, Serialize};

/// One of the six axis directions, the room center, or no direction at all.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    None = 0,
    North = 1,
    South = 2,
    East = 3,
    West = 4,
    Above = 5,
    Below = 6,
    Center = 7,
}

static_assertions::assert_eq_size!(Direction, u8);

impl Direction {
    /// All eight values, in declaration order.
    pub const ALL: [Direction; 8] = [
        Direction::None,
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::Above,
        Direction::Below,
        Direction::Center,
    ];

    /// The six axis directions (the faces of a room).
    pub const AXES: [Direction; 6] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::Above,
        Direction::Below,
    ];

    /// True for the six axis directions.
    #[inline]
    pub fn is_axis(self) -> bool {
        !matches!(self, Direction::None | Direction::Center)
    }

    /// The paired direction. CENTER and NONE are their own opposites.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            Direction::Above => Direction::Below,
            Direction::Below => Direction::Above,
            Direction::Center => Direction::Center,
            Direction::None => Direction::None,
        }
    }

    /// Integer unit vector in world axes (zero for CENTER and NONE).
    pub fn to_ivec3(self) -> IVec3 {
        match self {
            Direction::East => IVec3::X,
            Direction::West => IVec3::NEG_X,
            Direction::Above => IVec3::Y,
            Direction::Below => IVec3::NEG_Y,
            Direction::North => IVec3::Z,
            Direction::South => IVec3::NEG_Z,
            Direction::Center | Direction::None => IVec3::ZERO,
        }
    }

    /// Float unit vector in world axes (zero for CENTER and NONE).
    #[inline]
    pub fn to_vec3(self) -> Vec3 {
        self.to_ivec3().as_vec3()
    }

    /// Inverse of [`Direction::to_ivec3`]. Anything that is not a unit axis
    /// vector maps to NONE, except the zero vector which maps to CENTER.
    pub fn from_ivec3(v: IVec3) -> Direction {
        match (v.x, v.y, v.z) {
            (1, 0, 0) => Direction::East,
            (-1, 0, 0) => Direction::West,
            (0, 1, 0) => Direction::Above,
            (0, -1, 0) => Direction::Below,
            (0, 0, 1) => Direction::North,
            (0, 0, -1) => Direction::South,
            (0, 0, 0) => Direction::Center,
            _ => Direction::None,
        }
    }

    /// True when both are axis directions at right angles to each other.
    #[inline]
    pub fn is_perpendicular_to(self, other: Direction) -> bool {
        self.is_axis() && other.is_axis() && self.to_ivec3().dot(other.to_ivec3()) == 0
    }

    /// +1 when `self` equals `along`, -1 when it is the opposite, 0 otherwise.
    pub fn sign_along(self, along: Direction) -> i32 {
        self.to_ivec3().dot(along.to_ivec3())
    }

    /// Quarter turn to the right for someone standing on `surface`.
    ///
    /// `d == surface`, `d == opposite(surface)`, and any non-axis input on
    /// either side are returned unchanged.
    pub fn rotate_right(surface: Direction, d: Direction) -> Direction {
        if !d.is_perpendicular_to(surface) {
            return d;
        }
        // up x forward = right, with up being away from the surface
        let up = surface.opposite().to_ivec3();
        Direction::from_ivec3(up.cross(d.to_ivec3()))
    }

    /// Quarter turn to the left for someone standing on `surface`.
    pub fn rotate_left(surface: Direction, d: Direction) -> Direction {
        if !d.is_perpendicular_to(surface) {
            return d;
        }
        let up = surface.opposite().to_ivec3();
        Direction::from_ivec3(d.to_ivec3().cross(up))
    }

    /// `n` right quarter turns; negative `n` turns left.
    pub fn rotate_right_n(surface: Direction, d: Direction, n: i32) -> Direction {
        let mut out = d;
        for _ in 0..n.rem_euclid(4) {
            out = Direction::rotate_right(surface, out);
        }
        out
    }

    /// Lower-case display name.
    pub fn name(self) -> &'static str {
        match self {
            Direction::None => "none",
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
            Direction::Above => "above",
            Direction::Below => "below",
            Direction::Center => "center",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Free-function form of [`Direction::opposite`].
#[inline]
pub fn opposite(d: Direction) -> Direction {
    d.opposite()
}

/// Free-function form of [`Direction::rotate_right`].
#[inline]
pub fn rotate_right(surface: Direction, d: Direction) -> Direction {
    Direction::rotate_right(surface, d)
}

/// Free-function form of [`Direction::rotate_left`].
#[inline]
pub fn rotate_left(surface: Direction, d: Direction) -> Direction {
    Direction::rotate_left(surface, d)
}
