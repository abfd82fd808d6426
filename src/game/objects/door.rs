//! Door
//!
//! A wall that can be opened. Closed (inactive) it behaves exactly like a
//! stone wall; open it only reports where it is.

use super::{Object, wall};
use crate::physics::{Interaction, surface_zone};

pub fn interact(door: &Object, interaction: &mut Interaction) {
    if door.active {
        interaction.zone = surface_zone(door.surface(), interaction.direction);
        return;
    }
    wall::interact(door, interaction);
}
