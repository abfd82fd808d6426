//! Light
//!
//! Mounted on a surface and shining away from it in a cone. It is lit while
//! its target (normally the player) stands inside that cone.

use serde::{Deserialize, Serialize};

use super::Object;
use crate::camera::compute_placement_with;
use crate::location::FineLocation;
use crate::world::PlacementConfig;

/// Light cone shape.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightConfig {
    /// Cosine of the cone half-angle (Default: 0.5, i.e. 60 degrees)
    pub cone_cos: f32,
    /// Reach in world units (Default: 6.0)
    pub range: f32,
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            cone_cos: 0.5,
            range: 6.0,
        }
    }
}

/// True when `target` is inside the light's cone.
pub fn illuminates(
    light: &Object,
    target: &FineLocation,
    config: &LightConfig,
    placement: &PlacementConfig,
) -> bool {
    // The light is not a camera: measure from the mount point itself
    let raw = PlacementConfig {
        camera_pull_back: 0.0,
        ..*placement
    };
    let offset = compute_placement_with(&raw, target, &light.anchor()).translation;
    let distance = offset.length();
    if distance <= f32::EPSILON {
        return true;
    }
    // Local +y points away from the light's surface
    distance <= config.range && offset.y / distance >= config.cone_cos
}
