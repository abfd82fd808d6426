//! Orientation Lookup
//!
//! Maps a (surface, rotation) pair onto a rotation of the canonical pose.
//! The canonical pose rests on BELOW and faces NORTH, so its local axes
//! (right, up, forward) coincide with world (east, above, north).

use glam::{IVec3, Mat3};

use super::direction::Direction;

/// Facing used when a surface is given without a usable rotation, and the
/// origin that quarter-turn counts on that surface are measured from.
pub fn reference_rotation(surface: Direction) -> Direction {
    match surface {
        Direction::Below | Direction::Above | Direction::Center | Direction::None => {
            Direction::North
        }
        Direction::North | Direction::South | Direction::East | Direction::West => {
            Direction::Above
        }
    }
}

/// The surface actually used for orientation: CENTER/NONE rest canonically.
#[inline]
fn effective_surface(surface: Direction) -> Direction {
    if surface.is_axis() {
        surface
    } else {
        Direction::Below
    }
}

/// The rotation actually used: anything not lying in the surface plane
/// falls back to the surface's reference facing.
pub fn effective_rotation(surface: Direction, rotation: Direction) -> Direction {
    let surface = effective_surface(surface);
    if rotation.is_perpendicular_to(surface) {
        rotation
    } else {
        reference_rotation(surface)
    }
}

/// Integer basis with columns (right, up, forward) in world axes.
pub fn basis_ivec(surface: Direction, rotation: Direction) -> [IVec3; 3] {
    let forward = effective_rotation(surface, rotation).to_ivec3();
    let up = effective_surface(surface).opposite().to_ivec3();
    let right = up.cross(forward);
    [right, up, forward]
}

/// Local-to-world rotation matrix for a (surface, rotation) pair.
///
/// Always orthonormal, including for CENTER/NONE and misuse, so callers can
/// transpose instead of invert.
pub fn basis(surface: Direction, rotation: Direction) -> Mat3 {
    let [right, up, forward] = basis_ivec(surface, rotation);
    Mat3::from_cols(right.as_vec3(), up.as_vec3(), forward.as_vec3())
}

/// Number of right quarter turns (0-3) that take `from` onto `to` on
/// `surface`. Pairs that cannot be related that way give 0.
pub fn quarter_turns(surface: Direction, from: Direction, to: Direction) -> u8 {
    let surface = effective_surface(surface);
    let mut current = from;
    for turns in 0..4u8 {
        if current == to {
            return turns;
        }
        current = Direction::rotate_right(surface, current);
    }
    0
}

/// Quarter turns of `rotation` away from the surface's reference facing.
pub fn turns_from_reference(surface: Direction, rotation: Direction) -> u8 {
    quarter_turns(surface, reference_rotation(surface), rotation)
}
