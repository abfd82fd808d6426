//! Relative Placement Transform
//!
//! Expresses an object's position and orientation in a viewer's own
//! first-person frame, where the viewer's surface is "down" and its facing is
//! "forward". Rendering places meshes with it; sensors, lights and the
//! player-proximity check read its translation.
//!
//! ## Steps
//! 1. Cell displacement minus the viewer's fine offset (plus the object's),
//!    scaled by the room size: a world-frame displacement.
//! 2. Object orientation: canonical pose (on BELOW, facing NORTH) rotated
//!    onto the object's own (surface, rotation), then its partial turn.
//! 3. Re-base onto the viewer: undo the viewer's (surface, rotation), then
//!    its single partial turn (right, up, forward axis; first non-zero).
//! 4. Pull the camera back so geometry never sits exactly at the eye.
//!
//! Every basis here is an exact signed permutation matrix, so re-basing uses
//! a transpose and nothing divides.

use glam::{Mat3, Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::location::FineLocation;
use crate::world::PlacementConfig;

/// Placement of an object in a viewer's frame.
///
/// Local axes: +x right, +y up, +z forward.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    /// Model matrix for the renderer.
    pub fn to_mat4(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.translation)
    }

    #[inline]
    pub fn rotation_matrix(&self) -> Mat3 {
        Mat3::from_quat(self.rotation)
    }

    /// Distance from the camera to the object's origin.
    #[inline]
    pub fn distance(&self) -> f32 {
        self.translation.length()
    }

    /// Cosine between the camera's forward axis and the direction to the
    /// object. 1.0 dead ahead, -1.0 directly behind, 0.0 at the camera.
    pub fn facing_cos(&self) -> f32 {
        let len = self.translation.length();
        if len <= f32::EPSILON {
            return 0.0;
        }
        self.translation.z / len
    }

    /// World direction the object's local +z (its facing) points in the
    /// viewer frame.
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }
}

/// Viewer-relative placement with the default room size and pull-back.
pub fn compute_placement(object: &FineLocation, viewer: &FineLocation) -> Transform {
    compute_placement_with(&PlacementConfig::default(), object, viewer)
}

/// Viewer-relative placement with explicit sizing.
pub fn compute_placement_with(
    config: &PlacementConfig,
    object: &FineLocation,
    viewer: &FineLocation,
) -> Transform {
    let world = config.displacement(
        viewer.coarse.cell(),
        viewer.fine,
        object.coarse.cell(),
        object.fine,
    );

    let object_orientation = object.coarse.basis() * Mat3::from_quat(object.fine_quat());

    let view = Mat3::from_quat(viewer.fine_quat()).transpose() * viewer.coarse.basis().transpose();

    let local = view * world;
    let rotation = view * object_orientation;

    Transform {
        translation: local - config.pull_back_vector(),
        rotation: Quat::from_mat3(&rotation).normalize(),
    }
}

/// View matrix that takes world displacements into the viewer's frame,
/// pull-back included. Handy for renderers that batch world-space geometry.
pub fn view_matrix(config: &PlacementConfig, viewer: &FineLocation) -> Mat4 {
    let view = Mat3::from_quat(viewer.fine_quat()).transpose() * viewer.coarse.basis().transpose();
    Mat4::from_translation(-config.pull_back_vector()) * Mat4::from_mat3(view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::{CoarseLocation, LocalAxis};
    use crate::topology::Direction;

    fn at(east: i32, above: i32, north: i32, surface: Direction, rotation: Direction) -> FineLocation {
        CoarseLocation::new(east, above, north, surface, rotation).into()
    }

    #[test]
    fn test_object_ahead_is_forward() {
        let viewer = at(0, 0, 0, Direction::Below, Direction::North);
        let object = at(0, 0, 1, Direction::Below, Direction::North);
        let t = compute_placement(&object, &viewer);
        assert!((t.translation - Vec3::new(0.0, 0.0, 2.1)).length() < 1e-5);
        assert!(t.facing_cos() > 0.99);
    }

    #[test]
    fn test_object_to_the_east_is_right_when_facing_north() {
        let viewer = at(0, 0, 0, Direction::Below, Direction::North);
        let object = at(1, 0, 0, Direction::Center, Direction::None);
        let t = compute_placement(&object, &viewer);
        assert!((t.translation - Vec3::new(2.0, 0.0, 0.1)).length() < 1e-5);
    }

    #[test]
    fn test_viewer_on_wall_sees_above_as_forward() {
        // Standing on the north wall looking up: the room above is ahead,
        // the room to the south is overhead.
        let viewer = at(0, 0, 0, Direction::North, Direction::Above);
        let above = compute_placement(&at(0, 1, 0, Direction::Center, Direction::None), &viewer);
        assert!((above.translation - Vec3::new(0.0, 0.0, 2.1)).length() < 1e-5);
        let south = compute_placement(&at(0, 0, -1, Direction::Center, Direction::None), &viewer);
        assert!((south.translation - Vec3::new(0.0, 2.0, 0.1)).length() < 1e-5);
    }

    #[test]
    fn test_half_turn_puts_object_behind() {
        let viewer = at(0, 0, 0, Direction::Below, Direction::North)
            .turn(LocalAxis::Up, 0.5)
            .turn(LocalAxis::Up, 0.5)
            .turn(LocalAxis::Up, 0.5)
            .turn(LocalAxis::Up, 0.5);
        assert_eq!(viewer.coarse.rotation, Direction::South);
        let object = at(0, 0, 1, Direction::Center, Direction::None);
        let t = compute_placement(&object, &viewer);
        assert!(t.facing_cos() < -0.99);
    }

    #[test]
    fn test_partial_turn_is_continuous_across_wrap() {
        let object = at(1, 0, 2, Direction::East, Direction::Above);
        let base = at(0, 0, 0, Direction::Below, Direction::North);
        let almost = base.turn(LocalAxis::Up, 0.999);
        let wrapped = base.turn(LocalAxis::Up, 1.001);
        assert_eq!(wrapped.coarse.rotation, Direction::East);
        let a = compute_placement(&object, &almost);
        let b = compute_placement(&object, &wrapped);
        assert!((a.translation - b.translation).length() < 0.05);
        assert!(a.rotation_matrix().abs_diff_eq(b.rotation_matrix(), 0.01));
    }

    #[test]
    fn test_view_matrix_agrees_with_placement() {
        let config = PlacementConfig::default();
        let viewer = at(0, 0, 0, Direction::West, Direction::South).turn(LocalAxis::Right, 0.3);
        let object = at(2, -1, 1, Direction::Center, Direction::None);
        let t = compute_placement_with(&config, &object, &viewer);
        let world = config.displacement(viewer.coarse.cell(), viewer.fine, object.coarse.cell(), object.fine);
        let via_matrix = view_matrix(&config, &viewer).transform_point3(world);
        assert!((via_matrix - t.translation).length() < 1e-4);
    }
}
