//! Turner
//!
//! Turns a mover in place. Never blocks or supports. Works from the room
//! center or from the surface the mover stands on; the number of right
//! quarter turns (0-3) is read from the turner's own facing relative to its
//! surface's reference facing.

use super::Object;
use crate::physics::{Interaction, ZONE_CENTER};
use crate::topology::{Direction, turns_from_reference};

/// Right quarter turns this turner applies.
pub fn turn_count(turner: &Object) -> u8 {
    turns_from_reference(turner.surface(), turner.rotation())
}

pub fn interact(turner: &Object, interaction: &mut Interaction) {
    let mover = *interaction.mover();
    let reaches = !turner.surface().is_axis() || turner.surface() == mover.surface;
    if !reaches {
        return;
    }
    interaction.zone = ZONE_CENTER;
    let turns = turn_count(turner);
    if turns == 0 {
        return;
    }
    let plane = if mover.surface.is_axis() {
        mover.surface
    } else {
        Direction::Below
    };
    interaction.next_rotation = Some(Direction::rotate_right_n(
        plane,
        mover.rotation,
        i32::from(turns),
    ));
}
