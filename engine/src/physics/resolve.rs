//! Move Resolution
//!
//! Folds the contributions of every object at a cell into one decision and
//! applies it to the mover's location.
//!
//! ## Rules
//! - Blocked if any object blocks.
//! - Supported if any object supports.
//! - Where objects disagree on the next direction (or rotation), the one with
//!   the smallest |zone| wins; on a tie the earlier-registered object wins.
//! - A blocked move whose winner redirects is retried from the same cell in
//!   the redirected direction, up to `max_redirects` times.
//! - Unblocked and supported: travel one step along the next direction.
//!   Unblocked and unsupported: fall one step toward the mover's surface.
//!
//! Objects are passed in by the caller through a cell lookup closure, so the
//! resolver never owns or retains them.

use serde::{Deserialize, Serialize};

use super::interaction::{Interaction, Interactor};
use crate::location::{CellKey, FineLocation};
use crate::topology::Direction;

/// Movement tuning.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    /// Distance of one resolved step in room units (Default: 1.0)
    pub step: f32,
    /// How many times a blocked move may be redirected (Default: 2)
    pub max_redirects: u8,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            step: 1.0,
            max_redirects: 2,
        }
    }
}

/// Aggregate of every contribution at one cell for one direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Resolution {
    pub direction: Direction,
    pub blocked: bool,
    pub supported: bool,
    pub next_direction: Direction,
    pub next_rotation: Option<Direction>,
    /// |zone| of the object that decided `next_direction`, if any did
    direction_zone: Option<u8>,
    rotation_zone: Option<u8>,
    /// Number of objects visited
    pub visited: usize,
}

impl Resolution {
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            blocked: false,
            supported: false,
            next_direction: direction,
            next_rotation: None,
            direction_zone: None,
            rotation_zone: None,
            visited: 0,
        }
    }

    /// Fold in the contribution currently held by `interaction`.
    pub fn absorb(&mut self, interaction: &Interaction) {
        self.visited += 1;
        self.blocked |= interaction.blocks;
        self.supported |= interaction.supports;

        let distance = interaction.zone.unsigned_abs();
        if interaction.redirects() && closer(distance, self.direction_zone) {
            self.next_direction = interaction.next_direction;
            self.direction_zone = Some(distance);
        }
        if let Some(rotation) = interaction.next_rotation {
            if closer(distance, self.rotation_zone) {
                self.next_rotation = Some(rotation);
                self.rotation_zone = Some(distance);
            }
        }
    }

    /// True when the winning contribution changed the travel direction.
    #[inline]
    pub fn redirected(&self) -> bool {
        self.next_direction != self.direction
    }
}

/// Strictly closer than the current winner; ties keep the earlier object.
fn closer(distance: u8, current: Option<u8>) -> bool {
    match current {
        Some(best) => distance < best,
        None => true,
    }
}

/// Visit every object at the mover's cell, in the order given.
pub fn resolve_cell<'a, I, T>(objects: I, direction: Direction, mover: &FineLocation) -> Resolution
where
    I: IntoIterator<Item = &'a T>,
    T: Interactor + 'a,
{
    let mut interaction = Interaction::new(direction, *mover);
    let mut resolution = Resolution::new(direction);
    for (index, object) in objects.into_iter().enumerate() {
        interaction.reset_outputs();
        object.interact(&mut interaction);
        tracing::trace!(
            index,
            object = object.label(),
            zone = interaction.zone,
            blocks = interaction.blocks,
            supports = interaction.supports,
            next_direction = %interaction.next_direction,
            "interaction"
        );
        resolution.absorb(&interaction);
    }
    resolution
}

/// Result of one move request.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResolutionOutcome {
    pub blocked: bool,
    pub supported: bool,
    /// Final travel direction when it differs from the one requested
    pub redirected: Option<Direction>,
    /// True when the mover dropped toward its surface instead of travelling
    pub fell: bool,
    pub new_location: FineLocation,
}

/// Resolve one move starting at `mover`.
///
/// `objects_at` returns the objects registered at a cell in registration
/// order. Only the mover's current cell is consulted. An unsupported mover
/// falls one step toward its surface and the requested direction is not
/// travelled.
pub fn resolve_step<'a, F, I, T>(
    objects_at: F,
    mover: &FineLocation,
    direction: Direction,
    config: &MovementConfig,
) -> ResolutionOutcome
where
    F: Fn(CellKey) -> I,
    I: IntoIterator<Item = &'a T>,
    T: Interactor + 'a,
{
    let cell = mover.coarse.cell();
    let mut travel = direction;
    let mut redirects = 0u8;

    let resolution = loop {
        let resolution = resolve_cell(objects_at(cell), travel, mover);
        let can_retry = resolution.blocked
            && resolution.redirected()
            && resolution.next_direction.is_axis()
            && redirects < config.max_redirects;
        if !can_retry {
            break resolution;
        }
        redirects += 1;
        travel = resolution.next_direction;
    };

    let redirected = |d: Direction| (d != direction).then_some(d);

    if resolution.blocked {
        return ResolutionOutcome {
            blocked: true,
            supported: resolution.supported,
            redirected: redirected(travel),
            fell: false,
            new_location: *mover,
        };
    }

    let mut location = *mover;
    if let Some(rotation) = resolution.next_rotation {
        location.coarse.rotation = rotation;
    }

    let down = mover.coarse.down();
    let falls = !resolution.supported && down.is_axis();
    let heading = if falls { down } else { resolution.next_direction };
    let new_location = location.translate(heading, config.step);

    ResolutionOutcome {
        blocked: false,
        supported: resolution.supported,
        redirected: if falls {
            None
        } else {
            redirected(resolution.next_direction)
        },
        fell: falls,
        new_location,
    }
}
