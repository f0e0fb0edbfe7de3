//! Spawn domain: tests for the respawn countdown, coin tally and death flow.

use bevy::ecs::message::Messages;
use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;

use super::systems::handle_player_death;
use super::{CoinTally, DeathEffect, PlayerDied, RespawnCountdown, SpawnSettings};
use crate::movement::Player;

// -----------------------------------------------------------------------------
// RespawnCountdown tests
// -----------------------------------------------------------------------------

#[test]
fn test_countdown_idle_by_default() {
    let mut countdown = RespawnCountdown::default();
    assert!(!countdown.is_pending());
    assert!(!countdown.tick(1.0));
}

#[test]
fn test_countdown_fires_once() {
    let mut countdown = RespawnCountdown::default();
    countdown.start(0.5);
    assert!(countdown.is_pending());

    assert!(!countdown.tick(0.25));
    assert!(countdown.tick(0.25));
    assert!(!countdown.is_pending());
    assert!(!countdown.tick(0.25));
}

#[test]
fn test_zero_delay_fires_on_next_tick() {
    let mut countdown = RespawnCountdown::default();
    countdown.start(0.0);
    assert!(countdown.tick(0.016));
}

// -----------------------------------------------------------------------------
// CoinTally tests
// -----------------------------------------------------------------------------

#[test]
fn test_coin_tally_counts_up() {
    let mut tally = CoinTally::default();
    assert_eq!(tally.add(), 1);
    assert_eq!(tally.add(), 2);
    assert_eq!(tally.collected, 2);
}

// -----------------------------------------------------------------------------
// Death handling
// -----------------------------------------------------------------------------

fn death_world() -> (World, Entity) {
    let mut world = World::new();
    world.insert_resource(SpawnSettings::default());
    world.init_resource::<RespawnCountdown>();
    world.init_resource::<Messages<PlayerDied>>();
    let player = world.spawn(Player).id();
    (world, player)
}

#[test]
fn test_death_despawns_and_schedules_respawn() {
    let (mut world, player) = death_world();
    world.write_message(PlayerDied {
        entity: player,
        position: Vec2::new(10.0, -300.0),
    });

    world.run_system_once(handle_player_death).unwrap();

    assert!(world.get_entity(player).is_err());
    assert!(world.resource::<RespawnCountdown>().is_pending());

    let mut effects = world.query::<(&DeathEffect, &Transform)>();
    let (effect, transform) = effects.single(&world).unwrap();
    assert_eq!(effect.remaining, SpawnSettings::default().death_effect_lifetime);
    assert_eq!(transform.translation.truncate(), Vec2::new(10.0, -300.0));
}

#[test]
fn test_duplicate_death_reports_ignored() {
    let (mut world, player) = death_world();
    for _ in 0..2 {
        world.write_message(PlayerDied {
            entity: player,
            position: Vec2::ZERO,
        });
    }

    world.run_system_once(handle_player_death).unwrap();

    let mut effects = world.query::<&DeathEffect>();
    assert_eq!(effects.iter(&world).count(), 1);
}
