//! Fine Location
//!
//! Continuous sub-room position and partial turns layered on top of a
//! [`CoarseLocation`].
//!
//! ## Ranges
//! - Fine offsets live in [-0.5, 0.5) room units per world axis.
//! - Fine rotations are quarter-turn fractions in (-1, 1) about the local
//!   (right, up, forward) axes. At most one of them is non-zero.
//!
//! Crossing either range moves the excess into the coarse location, so a
//! mover that walks or turns continuously ends up on the integer grid with
//! no jump in its rendered transform.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};
use std::f32::consts::FRAC_PI_2;

use super::coarse::{CoarseLocation, LocalAxis};
use crate::topology::{Direction, effective_rotation};

/// Lower bound of a normalized fine offset (inclusive).
pub const FINE_MIN: f32 = -0.5;
/// Upper bound of a normalized fine offset (exclusive).
pub const FINE_MAX: f32 = 0.5;

/// Coarse location plus continuous offset and partial rotation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FineLocation {
    pub coarse: CoarseLocation,
    /// (east, above, north) offset inside the room, in room units
    pub fine: Vec3,
    /// Partial turns about (right, up, forward), in quarter turns
    pub fine_rotation: Vec3,
}

static_assertions::assert_impl_all!(FineLocation: Copy, Send, Sync);

impl From<CoarseLocation> for FineLocation {
    fn from(coarse: CoarseLocation) -> Self {
        Self {
            coarse,
            fine: Vec3::ZERO,
            fine_rotation: Vec3::ZERO,
        }
    }
}

impl FineLocation {
    pub fn new(coarse: CoarseLocation, fine: Vec3) -> Self {
        Self {
            coarse,
            fine,
            fine_rotation: Vec3::ZERO,
        }
    }

    /// Absolute position in room units (cell plus offset).
    #[inline]
    pub fn position(&self) -> Vec3 {
        self.coarse.cell_vec3() + self.fine
    }

    /// True when every offset is in range and at most one partial turn is set.
    pub fn is_normalized(&self) -> bool {
        let offsets_ok = self
            .fine
            .to_array()
            .iter()
            .all(|f| (FINE_MIN..FINE_MAX).contains(f));
        let turns = self.fine_rotation.to_array();
        let turns_ok = turns.iter().all(|t| t.abs() < 1.0)
            && turns.iter().filter(|t| **t != 0.0).count() <= 1;
        offsets_ok && turns_ok
    }

    /// The single active partial turn as (axis, amount), if any.
    ///
    /// Axes are checked right, up, forward; the first non-zero one wins.
    pub fn active_turn(&self) -> Option<(LocalAxis, f32)> {
        first_turn(self.fine_rotation)
    }

    /// Partial turn as a rotation in the local frame.
    pub fn fine_quat(&self) -> Quat {
        match self.active_turn() {
            Some((LocalAxis::Right, t)) => Quat::from_rotation_x(t * FRAC_PI_2),
            Some((LocalAxis::Up, t)) => Quat::from_rotation_y(t * FRAC_PI_2),
            Some((LocalAxis::Forward, t)) => Quat::from_rotation_z(t * FRAC_PI_2),
            None => Quat::IDENTITY,
        }
    }

    /// Wrap offsets into [-0.5, 0.5) and partial turns into (-1, 1), carrying
    /// whole units into the coarse location.
    pub fn normalize(self) -> Self {
        let mut out = self;

        let (de, fx) = wrap_offset(out.fine.x);
        let (da, fy) = wrap_offset(out.fine.y);
        let (dn, fz) = wrap_offset(out.fine.z);
        out.coarse.east = out.coarse.east.wrapping_add(de);
        out.coarse.above = out.coarse.above.wrapping_add(da);
        out.coarse.north = out.coarse.north.wrapping_add(dn);
        out.fine = Vec3::new(fx, fy, fz);

        let turn = sanitize(out.fine_rotation);
        out.fine_rotation = Vec3::ZERO;
        if let Some((axis, amount)) = first_turn(turn) {
            let whole = amount.trunc();
            let rest = amount - whole;
            out.coarse = apply_quarter_turns(out.coarse, axis, whole as i32);
            out.fine_rotation = axis.unit() * rest;
        }
        out
    }

    /// Move along a world direction by `delta` room units, then normalize.
    pub fn translate(self, direction: Direction, delta: f32) -> Self {
        Self {
            fine: self.fine + direction.to_vec3() * delta,
            ..self
        }
        .normalize()
    }

    /// Move along one of the mover's local axes by `delta` room units.
    ///
    /// This is the only conversion from local motion to world coordinates;
    /// positive `Forward` always follows `coarse.rotation`.
    pub fn advance(self, axis: LocalAxis, delta: f32) -> Self {
        let world = self.coarse.basis() * (axis.unit() * delta);
        Self {
            fine: self.fine + world,
            ..self
        }
        .normalize()
    }

    /// Continue a partial turn about one local axis by `amount` quarter turns.
    ///
    /// A turn already in progress about a different axis is dropped.
    pub fn turn(self, axis: LocalAxis, amount: f32) -> Self {
        let current = match self.active_turn() {
            Some((active, t)) if active == axis => t,
            _ => 0.0,
        };
        Self {
            fine_rotation: axis.unit() * (current + amount),
            ..self
        }
        .normalize()
    }
}

/// Split an offset into a whole-room carry and a remainder in [-0.5, 0.5).
fn wrap_offset(value: f32) -> (i32, f32) {
    if !value.is_finite() {
        tracing::warn!(value, "non-finite fine offset reset to room center");
        return (0, 0.0);
    }
    let mut carry = (value - FINE_MIN).floor();
    let mut rest = value - carry;
    // Rounding near a boundary can push the remainder one unit out of range
    if rest >= FINE_MAX {
        carry += 1.0;
        rest -= 1.0;
    } else if rest < FINE_MIN {
        carry -= 1.0;
        rest += 1.0;
    }
    (carry as i32, rest)
}

fn first_turn(turns: Vec3) -> Option<(LocalAxis, f32)> {
    if turns.x != 0.0 {
        Some((LocalAxis::Right, turns.x))
    } else if turns.y != 0.0 {
        Some((LocalAxis::Up, turns.y))
    } else if turns.z != 0.0 {
        Some((LocalAxis::Forward, turns.z))
    } else {
        None
    }
}

fn sanitize(turns: Vec3) -> Vec3 {
    if turns.is_finite() {
        turns
    } else {
        tracing::warn!(?turns, "non-finite fine rotation reset");
        Vec3::ZERO
    }
}

/// Apply whole quarter turns about a local axis to the coarse orientation.
///
/// Positive turns: right (up axis), nose down (right axis), right side down
/// (forward axis).
pub fn apply_quarter_turns(coarse: CoarseLocation, axis: LocalAxis, turns: i32) -> CoarseLocation {
    let steps = turns.rem_euclid(4);
    let mut out = coarse;
    for _ in 0..steps {
        out = quarter_turn(out, axis);
    }
    out
}

fn quarter_turn(coarse: CoarseLocation, axis: LocalAxis) -> CoarseLocation {
    if !coarse.surface.is_axis() {
        // Without a surface only turning in the horizontal plane means anything
        return match axis {
            LocalAxis::Up => {
                let facing = effective_rotation(Direction::Below, coarse.rotation);
                let rotation = if coarse.rotation.is_axis() {
                    Direction::rotate_right(Direction::Below, facing)
                } else {
                    coarse.rotation
                };
                coarse.with_orientation(coarse.surface, rotation)
            }
            LocalAxis::Right | LocalAxis::Forward => coarse,
        };
    }
    let surface = coarse.surface;
    let rotation = effective_rotation(surface, coarse.rotation);
    let (surface, rotation) = match axis {
        LocalAxis::Up => (surface, Direction::rotate_right(surface, rotation)),
        LocalAxis::Right => (rotation.opposite(), surface),
        LocalAxis::Forward => (Direction::rotate_right(surface, rotation), rotation),
    };
    coarse.with_orientation(surface, rotation)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floor_north() -> FineLocation {
        CoarseLocation::new(0, 0, 0, Direction::Below, Direction::North).into()
    }

    #[test]
    fn test_wrap_offset() {
        assert_eq!(wrap_offset(0.0), (0, 0.0));
        assert_eq!(wrap_offset(0.5), (1, -0.5));
        assert_eq!(wrap_offset(-0.5), (0, -0.5));
        assert_eq!(wrap_offset(1.0), (1, 0.0));
        assert_eq!(wrap_offset(-1.25), (-1, -0.25));
        assert_eq!(wrap_offset(f32::NAN), (0, 0.0));
    }

    #[test]
    fn test_normalize_carries_into_coarse() {
        let loc = FineLocation::new(
            CoarseLocation::new(0, 0, 0, Direction::Below, Direction::North),
            Vec3::new(0.75, -0.75, 2.0),
        )
        .normalize();
        assert_eq!(loc.coarse.east, 1);
        assert_eq!(loc.coarse.above, -1);
        assert_eq!(loc.coarse.north, 2);
        assert!((loc.fine - Vec3::new(-0.25, 0.25, 0.0)).length() < 1e-6);
        assert!(loc.is_normalized());
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let loc = FineLocation::new(
            CoarseLocation::new(3, -1, 7, Direction::East, Direction::North),
            Vec3::new(0.49, -0.5, 0.1),
        );
        assert_eq!(loc.normalize(), loc);
        assert_eq!(loc.normalize().normalize(), loc.normalize());
    }

    #[test]
    fn test_advance_forward_follows_rotation() {
        let loc = floor_north().advance(LocalAxis::Forward, 1.0);
        assert_eq!(loc.coarse.north, 1);
        assert_eq!(loc.coarse.east, 0);

        let on_wall: FineLocation =
            CoarseLocation::new(0, 0, 0, Direction::North, Direction::Above).into();
        let climbed = on_wall.advance(LocalAxis::Forward, 1.0);
        assert_eq!(climbed.coarse.above, 1);
        let right = on_wall.advance(LocalAxis::Right, 1.0);
        assert_eq!(
            right.coarse.cell() - on_wall.coarse.cell(),
            on_wall
                .coarse
                .world_direction(crate::location::LocalDirection::Right)
                .to_ivec3()
        );
    }

    #[test]
    fn test_full_yaw_turns_right() {
        let loc = floor_north().turn(LocalAxis::Up, 0.5).turn(LocalAxis::Up, 0.5);
        assert_eq!(loc.coarse.rotation, Direction::East);
        assert_eq!(loc.fine_rotation, Vec3::ZERO);
    }

    #[test]
    fn test_pitch_transitions_surface() {
        let down = floor_north().turn(LocalAxis::Right, 1.0);
        assert_eq!(down.coarse.surface, Direction::South);
        assert_eq!(down.coarse.rotation, Direction::Below);

        let up = floor_north().turn(LocalAxis::Right, -1.0);
        assert_eq!(up.coarse.surface, Direction::North);
        assert_eq!(up.coarse.rotation, Direction::Above);
    }

    #[test]
    fn test_roll_transitions_surface() {
        let right = floor_north().turn(LocalAxis::Forward, 1.0);
        assert_eq!(right.coarse.surface, Direction::East);
        assert_eq!(right.coarse.rotation, Direction::North);
        let left = floor_north().turn(LocalAxis::Forward, -1.0);
        assert_eq!(left.coarse.surface, Direction::West);
    }

    #[test]
    fn test_single_partial_turn_kept() {
        let mut loc = floor_north();
        loc.fine_rotation = Vec3::new(0.0, 0.25, 0.5);
        let loc = loc.normalize();
        assert_eq!(loc.fine_rotation, Vec3::new(0.0, 0.25, 0.0));
        assert!(loc.is_normalized());
    }

    #[test]
    fn test_turn_about_new_axis_drops_old() {
        let loc = floor_north()
            .turn(LocalAxis::Up, 0.25)
            .turn(LocalAxis::Right, 0.5);
        assert_eq!(loc.fine_rotation, Vec3::new(0.5, 0.0, 0.0));
    }
}
