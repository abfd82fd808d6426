//! Stone Wall
//!
//! Solid on one surface of its room. Stops travel into that surface and
//! holds up a mover standing on it; never redirects.

use super::Object;
use crate::physics::{Interaction, surface_zone};

pub fn interact(wall: &Object, interaction: &mut Interaction) {
    let surface = wall.surface();
    if !surface.is_axis() {
        return;
    }
    interaction.zone = surface_zone(surface, interaction.direction);
    interaction.blocks = interaction.direction == surface;
    interaction.supports = interaction.mover().down() == surface;
}
