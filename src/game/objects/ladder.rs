//! Ladders
//!
//! A ladder is mounted on one wall and runs along the mover's vertical axis.
//! `LadderMiddle` spans a whole room; `LadderEnd` is the stub at either end,
//! and its rotation says which way the rest of the ladder goes:
//!
//! - rotation = mover's up: bottom end. Walking into the wall is the climb
//!   posture: travel is blocked and turned upward, and the mover holds on.
//!   Continuing upward is supported; anything else lets go.
//! - rotation = mover's down: top end. Holds the mover for any travel except
//!   further down, so stepping off the top works and going down drops.

use super::Object;
use crate::physics::{Interaction, ZONE_CONTACT, ZONE_NEAR};
use crate::topology::Direction;

/// Zone sign: negative only when the ladder is behind the mover.
fn signed(ladder: &Object, direction: Direction, reach: i8) -> i8 {
    if ladder.surface() == direction.opposite() {
        -reach
    } else {
        reach
    }
}

/// In contact while the mover is in the half of the room next to the ladder.
fn end_reach(ladder: &Object, interaction: &Interaction) -> i8 {
    let toward = interaction.location.fine.dot(ladder.surface().to_vec3());
    if toward >= 0.0 { ZONE_CONTACT } else { ZONE_NEAR }
}

pub fn interact_end(ladder: &Object, interaction: &mut Interaction) {
    let surface = ladder.surface();
    if !surface.is_axis() {
        return;
    }
    let up = interaction.mover().up();
    let down = up.opposite();
    let direction = interaction.direction;

    interaction.zone = signed(ladder, direction, end_reach(ladder, interaction));

    if ladder.rotation() == up {
        if direction == surface {
            interaction.blocks = true;
            interaction.supports = true;
            interaction.next_direction = up;
        } else if direction == up {
            interaction.supports = true;
        }
    } else if ladder.rotation() == down && direction != down {
        interaction.supports = true;
    }
}

pub fn interact_middle(ladder: &Object, interaction: &mut Interaction) {
    let surface = ladder.surface();
    if !surface.is_axis() {
        return;
    }
    let up = interaction.mover().up();
    let direction = interaction.direction;

    interaction.zone = signed(ladder, direction, ZONE_CONTACT);

    if direction == surface {
        interaction.blocks = true;
        interaction.supports = true;
        interaction.next_direction = up;
    } else if direction == up || direction == up.opposite() {
        interaction.supports = true;
    }
}
