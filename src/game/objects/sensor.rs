//! Facing Sensor
//!
//! Mounted on a surface; triggers while a viewer is close enough and looking
//! at it. Takes no part in movement. The check reads the same viewer-relative
//! transform the renderer uses.

use serde::{Deserialize, Serialize};

use super::Object;
use crate::camera::compute_placement_with;
use crate::location::FineLocation;
use crate::world::PlacementConfig;

/// Sensor and proximity thresholds.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SensorConfig {
    /// Minimum cosine between the viewer's forward and the sensor (Default: 0.9)
    pub facing_cos: f32,
    /// Maximum trigger distance in world units (Default: 2.0)
    pub range: f32,
    /// Player objects closer than this to the camera are not drawn (Default: 0.5)
    pub player_suppress_distance: f32,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            facing_cos: 0.9,
            range: 2.0,
            player_suppress_distance: 0.5,
        }
    }
}

/// True while `viewer` faces the sensor within range.
pub fn is_triggered(
    sensor: &Object,
    viewer: &FineLocation,
    config: &SensorConfig,
    placement: &PlacementConfig,
) -> bool {
    let t = compute_placement_with(placement, &sensor.anchor(), viewer);
    t.distance() <= config.range && t.facing_cos() >= config.facing_cos
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::objects::ObjectKind;
    use crate::location::{CoarseLocation, LocalAxis};
    use crate::topology::Direction;

    fn north_sensor() -> Object {
        Object::new(
            ObjectKind::Sensor,
            CoarseLocation::new(0, 0, 0, Direction::North, Direction::Above),
        )
    }

    fn viewer(rotation: Direction) -> FineLocation {
        CoarseLocation::new(0, 0, 0, Direction::Below, rotation).into()
    }

    #[test]
    fn test_triggers_when_facing() {
        let config = SensorConfig::default();
        let placement = PlacementConfig::default();
        assert!(is_triggered(&north_sensor(), &viewer(Direction::North), &config, &placement));
        assert!(!is_triggered(&north_sensor(), &viewer(Direction::East), &config, &placement));
        assert!(!is_triggered(&north_sensor(), &viewer(Direction::South), &config, &placement));
    }

    #[test]
    fn test_out_of_range() {
        let config = SensorConfig::default();
        let placement = PlacementConfig::default();
        let far: FineLocation = CoarseLocation::new(0, 0, -3, Direction::Below, Direction::North).into();
        assert!(!is_triggered(&north_sensor(), &far, &config, &placement));
    }

    #[test]
    fn test_partial_turn_breaks_facing() {
        let config = SensorConfig::default();
        let placement = PlacementConfig::default();
        let turning = viewer(Direction::North).turn(LocalAxis::Up, 0.5);
        assert!(!is_triggered(&north_sensor(), &turning, &config, &placement));
    }
}
