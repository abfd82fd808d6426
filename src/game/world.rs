//! World State
//!
//! Arena of placed objects and movers. Objects are stored in registration
//! order and indexed by room, so move resolution can visit a room's objects
//! deterministically without owning them. Movers are the entities that move
//! through the grid (players); each may have a `Player` object that is drawn
//! in its place.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::config::EngineConfig;
use super::error::WorldError;
use super::objects::{Object, ObjectKind, light, player, sensor};
use crate::camera::{Transform, compute_placement_with};
use crate::location::{CellKey, FineLocation};
use crate::physics::{ResolutionOutcome, resolve_step};
use crate::topology::Direction;

/// Stable handle of a placed object (its registration index).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObjectId(pub u32);

/// Stable handle of a mover.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MoverId(pub u32);

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl std::fmt::Display for MoverId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "mover#{}", self.0)
    }
}

/// Something that travels through the grid.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Mover {
    pub location: FineLocation,
    /// Player object drawn for this mover, kept in its room
    pub avatar: Option<ObjectId>,
}

/// Owner of every object and mover.
#[derive(Clone, Debug, Default)]
pub struct World {
    config: EngineConfig,
    objects: Vec<Object>,
    cells: HashMap<CellKey, Vec<ObjectId>>,
    movers: Vec<Mover>,
    /// Avatar object -> the mover it is drawn for
    owners: HashMap<ObjectId, MoverId>,
}

impl World {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Build from loader-supplied objects, validating each one.
    pub fn from_objects<I>(config: EngineConfig, objects: I) -> Result<Self, WorldError>
    where
        I: IntoIterator<Item = Object>,
    {
        let mut world = Self::new(config);
        for object in objects {
            object.validate()?;
            world.spawn(object);
        }
        Ok(world)
    }

    /// Build from a JSON array of objects.
    pub fn from_json(config: EngineConfig, text: &str) -> Result<Self, WorldError> {
        let objects: Vec<Object> = serde_json::from_str(text)?;
        Self::from_objects(config, objects)
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Register an object. Objects at the same room are visited in the order
    /// they were spawned.
    pub fn spawn(&mut self, object: Object) -> ObjectId {
        let id = ObjectId(self.objects.len() as u32);
        self.objects.push(object);
        self.cells.entry(object.location.cell()).or_default().push(id);
        id
    }

    /// Register a mover with no drawn body.
    pub fn spawn_mover(&mut self, location: FineLocation) -> MoverId {
        let id = MoverId(self.movers.len() as u32);
        self.movers.push(Mover {
            location,
            avatar: None,
        });
        id
    }

    /// Register a mover together with its `Player` object.
    pub fn spawn_player(&mut self, location: FineLocation) -> MoverId {
        let avatar = self.spawn(Object::new(ObjectKind::Player, location.coarse));
        let id = self.spawn_mover(location);
        self.movers[id.0 as usize].avatar = Some(avatar);
        self.owners.insert(avatar, id);
        id
    }

    /// Where an object is drawn: an avatar follows its mover's fine
    /// location, everything else sits at its room location.
    pub fn body_location(&self, id: ObjectId) -> Option<FineLocation> {
        let object = self.object(id)?;
        let owned = self
            .owners
            .get(&id)
            .and_then(|mover| self.mover(*mover))
            .map(|mover| mover.location);
        Some(owned.unwrap_or_else(|| FineLocation::from(object.location)))
    }

    pub fn object(&self, id: ObjectId) -> Option<&Object> {
        self.objects.get(id.0 as usize)
    }

    pub fn try_object(&self, id: ObjectId) -> Result<&Object, WorldError> {
        self.object(id).ok_or(WorldError::UnknownObject(id))
    }

    pub fn mover(&self, id: MoverId) -> Option<&Mover> {
        self.movers.get(id.0 as usize)
    }

    pub fn try_mover(&self, id: MoverId) -> Result<&Mover, WorldError> {
        self.mover(id).ok_or(WorldError::UnknownMover(id))
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// All objects with their handles, in registration order.
    pub fn objects(&self) -> impl Iterator<Item = (ObjectId, &Object)> {
        self.objects
            .iter()
            .enumerate()
            .map(|(i, o)| (ObjectId(i as u32), o))
    }

    /// Handles of the objects in a room, in registration order.
    pub fn ids_at(&self, cell: CellKey) -> &[ObjectId] {
        self.cells.get(&cell).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Objects in a room, in registration order.
    pub fn objects_at(&self, cell: CellKey) -> impl Iterator<Item = &Object> {
        self.ids_at(cell)
            .iter()
            .filter_map(|id| self.objects.get(id.0 as usize))
    }

    /// Open/close a door, or force a sensor or light on or off.
    pub fn set_active(&mut self, id: ObjectId, active: bool) -> Result<(), WorldError> {
        let object = self
            .objects
            .get_mut(id.0 as usize)
            .ok_or(WorldError::UnknownObject(id))?;
        if !object.kind.is_stateful() {
            return Err(WorldError::NotStateful { id, kind: object.kind });
        }
        object.active = active;
        Ok(())
    }

    /// What `resolve_move` would do, without changing anything.
    pub fn preview_move(&self, mover: MoverId, direction: Direction) -> Result<ResolutionOutcome, WorldError> {
        let location = self.try_mover(mover)?.location;
        Ok(resolve_step(
            |cell| self.objects_at(cell),
            &location,
            direction,
            &self.config.movement,
        ))
    }

    /// Resolve one move request and commit the new location.
    pub fn resolve_move(&mut self, mover: MoverId, direction: Direction) -> Result<ResolutionOutcome, WorldError> {
        let outcome = self.preview_move(mover, direction)?;
        let index = mover.0 as usize;
        self.movers[index].location = outcome.new_location;
        if let Some(avatar) = self.movers[index].avatar {
            self.relocate(avatar, outcome.new_location);
        }
        tracing::debug!(
            %mover,
            %direction,
            blocked = outcome.blocked,
            supported = outcome.supported,
            fell = outcome.fell,
            redirected = ?outcome.redirected,
            cell = ?outcome.new_location.coarse.cell(),
            "move resolved"
        );
        Ok(outcome)
    }

    /// Move an object to another location, keeping each room's visiting
    /// order equal to registration order.
    fn relocate(&mut self, id: ObjectId, location: FineLocation) {
        let Some(object) = self.objects.get_mut(id.0 as usize) else {
            return;
        };
        let from = object.location.cell();
        object.location = location.coarse;
        let to = location.coarse.cell();
        if from == to {
            return;
        }
        if let Some(ids) = self.cells.get_mut(&from) {
            ids.retain(|other| *other != id);
            if ids.is_empty() {
                self.cells.remove(&from);
            }
        }
        let ids = self.cells.entry(to).or_default();
        let at = ids.partition_point(|other| *other < id);
        ids.insert(at, id);
    }

    /// Recompute every sensor against a viewer. Returns how many toggled.
    pub fn update_sensors(&mut self, viewer: &FineLocation) -> usize {
        let config = self.config;
        let mut toggled = 0;
        for (index, object) in self.objects.iter_mut().enumerate() {
            if object.kind != ObjectKind::Sensor {
                continue;
            }
            let triggered = sensor::is_triggered(object, viewer, &config.sensors, &config.placement);
            if triggered != object.active {
                object.active = triggered;
                toggled += 1;
                tracing::debug!(id = index, triggered, "sensor toggled");
            }
        }
        toggled
    }

    /// Recompute every light against a target. Returns how many toggled.
    pub fn update_lights(&mut self, target: &FineLocation) -> usize {
        let config = self.config;
        let mut toggled = 0;
        for (index, object) in self.objects.iter_mut().enumerate() {
            if object.kind != ObjectKind::Light {
                continue;
            }
            let lit = light::illuminates(object, target, &config.lights, &config.placement);
            if lit != object.active {
                object.active = lit;
                toggled += 1;
                tracing::debug!(id = index, lit, "light toggled");
            }
        }
        toggled
    }

    /// Viewer-relative transforms of every object worth drawing.
    ///
    /// The viewer location is copied up front so a frame is placed against
    /// one consistent snapshot. Player objects on top of the camera are
    /// skipped. Avatars are placed at their mover's fine location.
    pub fn visible_placements(&self, viewer: &FineLocation) -> impl Iterator<Item = (ObjectId, Transform)> + '_ {
        let viewer = *viewer;
        let config = self.config;
        self.objects().filter_map(move |(id, object)| {
            if object.kind == ObjectKind::Inert {
                return None;
            }
            let body = self.body_location(id)?;
            if object.kind == ObjectKind::Player
                && player::is_suppressed(&body, &viewer, &config.sensors, &config.placement)
            {
                return None;
            }
            let transform = compute_placement_with(&config.placement, &body, &viewer);
            Some((id, transform))
        })
    }
}
