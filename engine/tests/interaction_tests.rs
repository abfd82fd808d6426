//! Interaction Tests - Move Resolution Through the World
//!
//! Object contracts checked through the public `Interactor` seam, and whole
//! moves resolved against a `World`.

use cube_rooms_engine::game::{EngineConfig, Object, ObjectKind, World, WorldError};
use cube_rooms_engine::location::{CoarseLocation, FineLocation};
use cube_rooms_engine::physics::{Interaction, Interactor, MovementConfig, resolve_step};
use cube_rooms_engine::topology::{Direction, rotate_right};
use proptest::prelude::*;

fn at(east: i32, above: i32, north: i32, surface: Direction, rotation: Direction) -> CoarseLocation {
    CoarseLocation::new(east, above, north, surface, rotation)
}

fn floor_walker() -> FineLocation {
    at(0, 0, 0, Direction::Below, Direction::North).into()
}

fn probe(object: &Object, direction: Direction, mover: FineLocation) -> Interaction {
    let mut interaction = Interaction::new(direction, mover);
    object.interact(&mut interaction);
    interaction
}

// ============================================================================
// Object Contracts
// ============================================================================

#[test]
fn test_floor_wall_blocks_down_and_supports() {
    let floor = Object::new(ObjectKind::StoneWall, at(0, 0, 0, Direction::Below, Direction::North));

    let down = probe(&floor, Direction::Below, floor_walker());
    assert!(down.blocks);
    assert!(down.supports);

    for d in [Direction::Above, Direction::North, Direction::East, Direction::South, Direction::West] {
        let i = probe(&floor, d, floor_walker());
        assert!(!i.blocks, "{d}");
        assert_eq!(i.next_direction, d);
        assert_eq!(i.next_rotation, None);
    }
}

#[test]
fn test_ladder_climb_posture() {
    let ladder = Object::new(ObjectKind::LadderEnd, at(0, 0, 0, Direction::North, Direction::Above));
    let i = probe(&ladder, Direction::North, floor_walker());
    assert!(i.blocks);
    assert_eq!(i.next_direction, Direction::Above);
}

#[test]
fn test_turner_turns_one_quarter() {
    let turner = Object::new(ObjectKind::Turner, at(0, 0, 0, Direction::Below, Direction::East));
    let mover = floor_walker();
    let i = probe(&turner, Direction::North, mover);
    assert_eq!(
        i.next_rotation,
        Some(rotate_right(mover.coarse.surface, mover.coarse.rotation))
    );
    assert!(!i.blocks);
    assert!(!i.supports);
}

#[test]
fn test_closed_door_is_a_wall_open_door_is_not() {
    let closed = Object::new(ObjectKind::Door, at(0, 0, 0, Direction::North, Direction::Above));
    assert!(probe(&closed, Direction::North, floor_walker()).blocks);

    let open = closed.with_active(true);
    let i = probe(&open, Direction::North, floor_walker());
    assert!(!i.blocks);
    assert!(!i.supports);
    assert_eq!(i.zone, 3);
}

proptest! {
    #[test]
    fn inert_kinds_never_affect_a_move(
        kind in prop::sample::select(vec![ObjectKind::Inert, ObjectKind::Sensor, ObjectKind::Light, ObjectKind::Player]),
        d in prop::sample::select(Direction::ALL.to_vec()),
        active in any::<bool>(),
    ) {
        let object = Object::new(kind, at(0, 0, 0, Direction::East, Direction::North)).with_active(active);
        let i = probe(&object, d, floor_walker());
        prop_assert_eq!(i.zone, 0);
        prop_assert!(!i.blocks);
        prop_assert!(!i.supports);
        prop_assert_eq!(i.next_direction, d);
        prop_assert_eq!(i.next_rotation, None);
    }

    #[test]
    fn zones_stay_in_range(
        kind in prop::sample::select(ObjectKind::ALL.to_vec()),
        surface in prop::sample::select(Direction::AXES.to_vec()),
        d in prop::sample::select(Direction::ALL.to_vec()),
        z in -0.5f32..0.5,
    ) {
        let rotation = Direction::AXES
            .into_iter()
            .find(|r| r.is_perpendicular_to(surface))
            .unwrap_or(Direction::None);
        let object = Object::new(kind, at(0, 0, 0, surface, rotation));
        let mover = FineLocation::new(floor_walker().coarse, glam::Vec3::new(0.0, 0.0, z));
        let i = probe(&object, d, mover);
        prop_assert!((-3..=3).contains(&i.zone));
    }
}

// ============================================================================
// Whole Moves
// ============================================================================

#[test]
fn test_no_objects_means_falling() {
    let empty: Vec<Object> = Vec::new();
    let outcome = resolve_step(
        |_| empty.iter(),
        &floor_walker(),
        Direction::North,
        &MovementConfig::default(),
    );
    assert!(!outcome.blocked);
    assert!(!outcome.supported);
    assert!(outcome.fell);
    assert_eq!(outcome.new_location.coarse.above, -1);
}

#[test]
fn test_walk_along_a_floor() {
    let mut world = World::default();
    world.spawn(Object::new(ObjectKind::StoneWall, at(0, 0, 0, Direction::Below, Direction::North)));
    let me = world.spawn_mover(floor_walker());

    let outcome = world.resolve_move(me, Direction::East).unwrap();
    assert!(!outcome.blocked && outcome.supported && !outcome.fell);
    assert_eq!(outcome.new_location.coarse.cell(), glam::IVec3::new(1, 0, 0));
    assert_eq!(world.mover(me).unwrap().location, outcome.new_location);
}

#[test]
fn test_wall_ahead_stops_the_mover() {
    let mut world = World::default();
    world.spawn(Object::new(ObjectKind::StoneWall, at(0, 0, 0, Direction::Below, Direction::North)));
    world.spawn(Object::new(ObjectKind::StoneWall, at(0, 0, 0, Direction::North, Direction::Above)));
    let me = world.spawn_mover(floor_walker());

    let outcome = world.resolve_move(me, Direction::North).unwrap();
    assert!(outcome.blocked);
    assert_eq!(outcome.new_location, floor_walker());
}

#[test]
fn test_climb_a_two_room_ladder() {
    let mut world = World::default();
    world.spawn(Object::new(ObjectKind::StoneWall, at(0, 0, 0, Direction::Below, Direction::North)));
    world.spawn(Object::new(ObjectKind::StoneWall, at(0, 0, 0, Direction::North, Direction::Above)));
    world.spawn(Object::new(ObjectKind::LadderEnd, at(0, 0, 0, Direction::North, Direction::Above)));
    world.spawn(Object::new(ObjectKind::LadderMiddle, at(0, 1, 0, Direction::North, Direction::Above)));
    world.spawn(Object::new(ObjectKind::LadderEnd, at(0, 2, 0, Direction::North, Direction::Below)));
    world.spawn(Object::new(ObjectKind::StoneWall, at(0, 2, 1, Direction::Below, Direction::North)));
    let me = world.spawn_player(floor_walker());

    // Walking into the ladder turns into climbing
    let first = world.resolve_move(me, Direction::North).unwrap();
    assert!(!first.blocked);
    assert_eq!(first.redirected, Some(Direction::Above));
    assert_eq!(first.new_location.coarse.cell(), glam::IVec3::new(0, 1, 0));

    let second = world.resolve_move(me, Direction::North).unwrap();
    assert_eq!(second.new_location.coarse.cell(), glam::IVec3::new(0, 2, 0));

    // Stepping off the top end onto the landing
    let third = world.resolve_move(me, Direction::North).unwrap();
    assert!(third.supported && !third.fell);
    assert_eq!(third.redirected, None);
    assert_eq!(third.new_location.coarse.cell(), glam::IVec3::new(0, 2, 1));

    let avatar = world.mover(me).unwrap().avatar.unwrap();
    assert_eq!(world.object(avatar).unwrap().location.cell(), glam::IVec3::new(0, 2, 1));
}

#[test]
fn test_letting_go_of_a_ladder_falls() {
    let mut world = World::default();
    world.spawn(Object::new(ObjectKind::LadderMiddle, at(0, 1, 0, Direction::North, Direction::Above)));
    let me = world.spawn_mover(at(0, 1, 0, Direction::Below, Direction::North).into());

    let outcome = world.resolve_move(me, Direction::East).unwrap();
    assert!(outcome.fell);
    assert_eq!(outcome.new_location.coarse.cell(), glam::IVec3::new(0, 0, 0));
}

#[test]
fn test_turner_rotates_on_a_supported_move() {
    let mut world = World::default();
    world.spawn(Object::new(ObjectKind::StoneWall, at(0, 0, 0, Direction::Below, Direction::North)));
    world.spawn(Object::new(ObjectKind::Turner, at(0, 0, 0, Direction::Center, Direction::South)));
    let me = world.spawn_mover(floor_walker());

    let outcome = world.resolve_move(me, Direction::North).unwrap();
    assert_eq!(outcome.new_location.coarse.rotation, Direction::South);
    assert_eq!(outcome.new_location.coarse.north, 1);
}

#[test]
fn test_preview_does_not_move() {
    let mut world = World::default();
    world.spawn(Object::new(ObjectKind::StoneWall, at(0, 0, 0, Direction::Below, Direction::North)));
    let me = world.spawn_mover(floor_walker());
    let preview = world.preview_move(me, Direction::West).unwrap();
    assert_eq!(preview.new_location.coarse.east, -1);
    assert_eq!(world.mover(me).unwrap().location, floor_walker());
}

#[test]
fn test_unknown_mover_is_an_error() {
    let mut world = World::new(EngineConfig::default());
    assert!(matches!(
        world.resolve_move(cube_rooms_engine::game::MoverId(0), Direction::North),
        Err(WorldError::UnknownMover(_))
    ));
}

#[test]
fn test_sensor_fires_when_looked_at() {
    let mut world = World::default();
    let sensor = world.spawn(Object::new(ObjectKind::Sensor, at(0, 0, 0, Direction::North, Direction::Above)));
    let viewer = floor_walker();
    assert_eq!(world.update_sensors(&viewer), 1);
    assert!(world.object(sensor).unwrap().active);

    let away: FineLocation = at(0, 0, 0, Direction::Below, Direction::South).into();
    assert_eq!(world.update_sensors(&away), 1);
    assert!(!world.object(sensor).unwrap().active);
    assert_eq!(world.update_sensors(&away), 0);
}
