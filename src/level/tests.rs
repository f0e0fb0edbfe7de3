//! Level domain: tests for coin looks, level settings and pickups.

use avian2d::prelude::CollisionStart;
use bevy::ecs::message::Messages;
use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::systems::{collect_coins, detect_death_zone};
use super::{Coin, CoinLook, DeathZone, LevelSettings};
use crate::content::LevelDef;
use crate::movement::Player;
use crate::spawn::{CoinCollected, PlayerDied};

// -----------------------------------------------------------------------------
// Coin looks
// -----------------------------------------------------------------------------

#[test]
fn test_random_look_is_deterministic_per_seed() {
    let mut a = ChaCha8Rng::seed_from_u64(42);
    let mut b = ChaCha8Rng::seed_from_u64(42);

    let looks_a: Vec<_> = (0..16).map(|_| CoinLook::random(&mut a)).collect();
    let looks_b: Vec<_> = (0..16).map(|_| CoinLook::random(&mut b)).collect();

    assert_eq!(looks_a, looks_b);
}

#[test]
fn test_random_look_uses_every_variant() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let looks: Vec<_> = (0..200).map(|_| CoinLook::random(&mut rng)).collect();

    for look in CoinLook::ALL {
        assert!(looks.contains(&look), "never rolled {:?}", look);
    }
}

#[test]
fn test_level_settings_from_def() {
    let settings = LevelSettings::from(&LevelDef {
        coins_have_random_look: false,
        seed: 9,
    });

    assert!(!settings.coins_have_random_look);
    assert_eq!(settings.seed, 9);
}

// -----------------------------------------------------------------------------
// Collision handling
// -----------------------------------------------------------------------------

fn collision_world() -> (World, Entity) {
    let mut world = World::new();
    world.init_resource::<Messages<CollisionStart>>();
    world.init_resource::<Messages<PlayerDied>>();
    world.init_resource::<Messages<CoinCollected>>();
    let player = world
        .spawn((Player, Transform::from_xyz(40.0, -310.0, 0.0)))
        .id();
    (world, player)
}

fn touch(world: &mut World, first: Entity, second: Entity) {
    world.write_message(CollisionStart {
        collider1: first,
        collider2: second,
        body1: Some(first),
        body2: Some(second),
    });
}

#[test]
fn test_death_zone_reports_player_death() {
    let (mut world, player) = collision_world();
    let zone = world.spawn(DeathZone).id();
    touch(&mut world, zone, player);

    world.run_system_once(detect_death_zone).unwrap();

    let deaths: Vec<_> = world
        .resource_mut::<Messages<PlayerDied>>()
        .drain()
        .collect();
    assert_eq!(deaths.len(), 1);
    assert_eq!(deaths[0].entity, player);
    assert_eq!(deaths[0].position, Vec2::new(40.0, -310.0));
}

#[test]
fn test_death_zone_ignores_non_players() {
    let (mut world, _) = collision_world();
    let zone = world.spawn(DeathZone).id();
    let crate_box = world.spawn(Transform::default()).id();
    touch(&mut world, crate_box, zone);

    world.run_system_once(detect_death_zone).unwrap();

    assert!(world.resource::<Messages<PlayerDied>>().is_empty());
}

#[test]
fn test_coin_pickup_despawns_coin() {
    let (mut world, player) = collision_world();
    let coin = world.spawn(Coin { look: CoinLook::Ruby }).id();
    touch(&mut world, player, coin);

    world.run_system_once(collect_coins).unwrap();

    assert!(world.get_entity(coin).is_err());
    let collected: Vec<_> = world
        .resource_mut::<Messages<CoinCollected>>()
        .drain()
        .collect();
    assert_eq!(collected.len(), 1);
    assert_eq!(collected[0].collector, player);
}

#[test]
fn test_touching_death_zone_collects_no_coin() {
    let (mut world, player) = collision_world();
    let zone = world.spawn(DeathZone).id();
    touch(&mut world, player, zone);

    world.run_system_once(collect_coins).unwrap();

    assert!(world.get_entity(zone).is_ok());
    assert!(world.resource::<Messages<CoinCollected>>().is_empty());
}
