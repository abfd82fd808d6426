//! Room Grid Configuration
//!
//! World-space sizing shared by placement, sensors and lights.
//!
//! ## Room Size
//! Every room is a cube 2 world units across, so a surface sits 1 unit from
//! the room center. Fine offsets are stored in room units and scaled by
//! `room_size` when converted to world space.

use glam::{IVec3, Vec3};
use serde::{Deserialize, Serialize};

/// Full width of a room in world units.
pub const ROOM_SIZE: f32 = 2.0;
/// Distance from a room center to any of its surfaces.
pub const HALF_ROOM: f32 = ROOM_SIZE * 0.5;
/// How far the camera sits behind the eye point along the viewer's forward.
pub const CAMERA_PULL_BACK: f32 = 0.1;

/// Placement scaling and camera offset.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    /// Room width in world units (Default: 2.0)
    pub room_size: f32,
    /// Camera pull-back distance in world units (Default: 0.1)
    pub camera_pull_back: f32,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            room_size: ROOM_SIZE,
            camera_pull_back: CAMERA_PULL_BACK,
        }
    }
}

impl PlacementConfig {
    /// Pull-back as a vector in the viewer's local frame (behind the eye).
    #[inline]
    pub fn pull_back_vector(&self) -> Vec3 {
        Vec3::new(0.0, 0.0, -self.camera_pull_back)
    }

    /// Distance from a room center to its surfaces.
    #[inline]
    pub fn half_room(&self) -> f32 {
        self.room_size * 0.5
    }

    /// World-space center of a cell.
    pub fn cell_center(&self, cell: IVec3) -> Vec3 {
        cell.as_vec3() * self.room_size
    }

    /// World-space displacement between two positions given in room units.
    ///
    /// Cells are subtracted as integers first so large coordinates keep
    /// their sub-room precision.
    pub fn displacement(&self, from_cell: IVec3, from_fine: Vec3, to_cell: IVec3, to_fine: Vec3) -> Vec3 {
        let cells = to_cell.wrapping_sub(from_cell).as_vec3();
        (cells + to_fine - from_fine) * self.room_size
    }
}
