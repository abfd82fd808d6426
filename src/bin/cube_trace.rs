//! Cube Room Move Tracer
//!
//! Run with: `cargo run --bin cube_trace [config.json]`
//!
//! Builds a small room layout (a floor corridor, a two-room ladder and a
//! turner), walks a player through it and logs every resolved move. Set
//! `RUST_LOG=cube_rooms_engine=trace` to also see each object's contribution.

use std::error::Error;

use cube_rooms_engine::game::{EngineConfig, Object, ObjectKind, World};
use cube_rooms_engine::location::CoarseLocation;
use cube_rooms_engine::topology::Direction;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path)?;
            info!(%path, "loaded config");
            EngineConfig::from_json(&text)?
        }
        None => EngineConfig::default(),
    };

    let mut world = World::from_objects(config, demo_layout())?;
    let start = CoarseLocation::new(0, 0, 0, Direction::Below, Direction::North);
    let player = world.spawn_player(start.into());
    info!(objects = world.object_count(), "world ready");

    let script = [
        Direction::North,
        Direction::North,
        Direction::North,
        Direction::North,
        Direction::East,
        Direction::West,
    ];
    for (step, direction) in script.into_iter().enumerate() {
        let outcome = world.resolve_move(player, direction)?;
        let at = outcome.new_location.coarse;
        info!(
            step,
            %direction,
            blocked = outcome.blocked,
            fell = outcome.fell,
            redirected = ?outcome.redirected,
            east = at.east,
            above = at.above,
            north = at.north,
            facing = %at.rotation,
            "move"
        );

        let viewer = outcome.new_location;
        let sensors = world.update_sensors(&viewer);
        let lights = world.update_lights(&viewer);
        if sensors + lights > 0 {
            info!(sensors, lights, "state changed");
        }
    }

    let viewer = world.try_mover(player)?.location;
    for (id, transform) in world.visible_placements(&viewer) {
        let kind = world.try_object(id)?.kind;
        info!(%id, %kind, translation = ?transform.translation, "visible");
    }
    Ok(())
}

/// Corridor north to a ladder, a landing two rooms up, and a turner.
fn demo_layout() -> Vec<Object> {
    let at = |east, above, north, surface, rotation| CoarseLocation::new(east, above, north, surface, rotation);
    vec![
        Object::new(ObjectKind::StoneWall, at(0, 0, 0, Direction::Below, Direction::North)),
        Object::new(ObjectKind::StoneWall, at(0, 0, 1, Direction::Below, Direction::North)),
        Object::new(ObjectKind::StoneWall, at(0, 0, 1, Direction::North, Direction::Above)),
        Object::new(ObjectKind::LadderEnd, at(0, 0, 1, Direction::North, Direction::Above)),
        Object::new(ObjectKind::LadderMiddle, at(0, 1, 1, Direction::North, Direction::Above)),
        Object::new(ObjectKind::LadderEnd, at(0, 2, 1, Direction::North, Direction::Below)),
        Object::new(ObjectKind::StoneWall, at(0, 2, 2, Direction::Below, Direction::North)),
        Object::new(ObjectKind::Turner, at(0, 2, 2, Direction::Center, Direction::East)),
        Object::new(ObjectKind::StoneWall, at(1, 2, 2, Direction::Below, Direction::North)),
        Object::new(ObjectKind::Sensor, at(1, 2, 2, Direction::East, Direction::Above)),
        Object::new(ObjectKind::Light, at(1, 2, 2, Direction::Above, Direction::North)),
    ]
}
