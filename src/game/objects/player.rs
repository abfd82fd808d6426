//! Player Object
//!
//! The drawn stand-in for a mover. It never takes part in movement; the only
//! rule it carries is that it is not drawn when it would sit on top of the
//! camera, which is what happens for the viewer's own body.

use crate::camera::compute_placement_with;
use crate::location::FineLocation;
use crate::world::PlacementConfig;

use super::SensorConfig;

/// True when a player body at `body` is too close to the viewer to be drawn.
pub fn is_suppressed(
    body: &FineLocation,
    viewer: &FineLocation,
    config: &SensorConfig,
    placement: &PlacementConfig,
) -> bool {
    let t = compute_placement_with(placement, body, viewer);
    t.distance() < config.player_suppress_distance
}
