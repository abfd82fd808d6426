//! Object Variants
//!
//! The closed set of things that can sit in a room and take part in move
//! resolution. Each kind lives in its own submodule; [`Object::interact`]
//! dispatches with one exhaustive match so a new kind cannot be forgotten.
//!
//! | Kind | Zone | Blocks | Supports | Redirects |
//! |------|------|--------|----------|-----------|
//! | `StoneWall` | ±3 | travel into it | its own surface | never |
//! | `Door` | ±3 | like a wall while closed | like a wall while closed | never |
//! | `LadderEnd` | ±1/±2 | climb start only | see [`ladder`] | to vertical |
//! | `LadderMiddle` | ±1 | travel into it | while on the ladder | to vertical |
//! | `Turner` | 0 | never | never | turns the mover |
//! | `Sensor`, `Light`, `Player`, `Inert` | 0 | never | never | never |

pub mod door;
pub mod ladder;
pub mod light;
pub mod player;
pub mod sensor;
pub mod turner;
pub mod wall;

use serde::{Deserialize, Serialize};

use crate::location::{CoarseLocation, FineLocation};
use crate::physics::{Interaction, Interactor};
use crate::topology::Direction;

use super::error::WorldError;

pub use light::LightConfig;
pub use sensor::SensorConfig;

/// Variant tag supplied by the map loader.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectKind {
    /// Uninitialized slot; contributes nothing
    #[default]
    Inert,
    StoneWall,
    LadderEnd,
    LadderMiddle,
    Turner,
    Door,
    Sensor,
    Light,
    Player,
}

impl ObjectKind {
    pub const ALL: [ObjectKind; 9] = [
        ObjectKind::Inert,
        ObjectKind::StoneWall,
        ObjectKind::LadderEnd,
        ObjectKind::LadderMiddle,
        ObjectKind::Turner,
        ObjectKind::Door,
        ObjectKind::Sensor,
        ObjectKind::Light,
        ObjectKind::Player,
    ];

    /// Display name for editors and inventories.
    pub fn name(self) -> &'static str {
        match self {
            ObjectKind::Inert => "Empty",
            ObjectKind::StoneWall => "Stone Wall",
            ObjectKind::LadderEnd => "Ladder End",
            ObjectKind::LadderMiddle => "Ladder",
            ObjectKind::Turner => "Turner",
            ObjectKind::Door => "Door",
            ObjectKind::Sensor => "Sensor",
            ObjectKind::Light => "Light",
            ObjectKind::Player => "Player",
        }
    }

    /// Resource key of the kind's thumbnail image.
    pub fn thumbnail(self) -> &'static str {
        match self {
            ObjectKind::Inert => "thumbs/empty",
            ObjectKind::StoneWall => "thumbs/stone_wall",
            ObjectKind::LadderEnd => "thumbs/ladder_end",
            ObjectKind::LadderMiddle => "thumbs/ladder",
            ObjectKind::Turner => "thumbs/turner",
            ObjectKind::Door => "thumbs/door",
            ObjectKind::Sensor => "thumbs/sensor",
            ObjectKind::Light => "thumbs/light",
            ObjectKind::Player => "thumbs/player",
        }
    }

    /// Kinds that only make sense mounted on one of the six faces.
    pub fn needs_surface(self) -> bool {
        matches!(
            self,
            ObjectKind::StoneWall
                | ObjectKind::LadderEnd
                | ObjectKind::LadderMiddle
                | ObjectKind::Door
                | ObjectKind::Sensor
                | ObjectKind::Light
        )
    }

    /// Kinds whose `active` flag changes at runtime.
    pub fn is_stateful(self) -> bool {
        matches!(self, ObjectKind::Door | ObjectKind::Sensor | ObjectKind::Light)
    }
}

impl std::fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A placed object: kind, where it sits, and its on/off state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Object {
    pub kind: ObjectKind,
    pub location: CoarseLocation,
    /// Open door, triggered sensor, lit light
    #[serde(default)]
    pub active: bool,
}

impl Object {
    pub fn new(kind: ObjectKind, location: CoarseLocation) -> Self {
        Self {
            kind,
            location,
            active: false,
        }
    }

    pub fn with_active(self, active: bool) -> Self {
        Self { active, ..self }
    }

    #[inline]
    pub fn surface(&self) -> Direction {
        self.location.surface
    }

    #[inline]
    pub fn rotation(&self) -> Direction {
        self.location.rotation
    }

    /// The point the object is mounted at: the middle of its surface, or the
    /// room center for unmounted objects.
    pub fn anchor(&self) -> FineLocation {
        let offset = self.location.down().to_vec3() * 0.5;
        FineLocation::new(self.location, offset).normalize()
    }

    /// Check the orientation a loader supplied.
    pub fn validate(&self) -> Result<(), WorldError> {
        let invalid = || WorldError::InvalidOrientation {
            kind: self.kind,
            surface: self.surface(),
            rotation: self.rotation(),
        };
        if self.kind.needs_surface() && !self.surface().is_axis() {
            return Err(invalid());
        }
        if self.rotation().is_axis() && !self.location.is_valid() {
            return Err(invalid());
        }
        if self.kind == ObjectKind::LadderEnd && !self.rotation().is_axis() {
            return Err(invalid());
        }
        Ok(())
    }
}

impl Interactor for Object {
    fn interact(&self, interaction: &mut Interaction) {
        match self.kind {
            ObjectKind::StoneWall => wall::interact(self, interaction),
            ObjectKind::Door => door::interact(self, interaction),
            ObjectKind::LadderEnd => ladder::interact_end(self, interaction),
            ObjectKind::LadderMiddle => ladder::interact_middle(self, interaction),
            ObjectKind::Turner => turner::interact(self, interaction),
            ObjectKind::Sensor | ObjectKind::Light | ObjectKind::Player | ObjectKind::Inert => {}
        }
    }

    fn label(&self) -> &'static str {
        self.kind.name()
    }
}
