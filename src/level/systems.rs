//! Level domain: death zone and coin collision handling.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::level::{Coin, DeathZone};
use crate::movement::Player;
use crate::spawn::{CoinCollected, PlayerDied};

/// Order a collision pair as (player, other) if one side is a player.
fn player_pair(
    event: &CollisionStart,
    players: &Query<&Transform, With<Player>>,
) -> Option<(Entity, Entity)> {
    [
        (event.collider1, event.collider2),
        (event.collider2, event.collider1),
    ]
    .into_iter()
    .find(|(player, _)| players.contains(*player))
}

pub(crate) fn detect_death_zone(
    mut collision_events: MessageReader<CollisionStart>,
    mut deaths: MessageWriter<PlayerDied>,
    players: Query<&Transform, With<Player>>,
    zones: Query<(), With<DeathZone>>,
) {
    for event in collision_events.read() {
        let Some((player, other)) = player_pair(event, &players) else {
            continue;
        };
        if !zones.contains(other) {
            continue;
        }

        let Ok(transform) = players.get(player) else {
            continue;
        };
        deaths.write(PlayerDied {
            entity: player,
            position: transform.translation.truncate(),
        });
    }
}

pub(crate) fn collect_coins(
    mut commands: Commands,
    mut collision_events: MessageReader<CollisionStart>,
    mut collected: MessageWriter<CoinCollected>,
    players: Query<&Transform, With<Player>>,
    coins: Query<&Coin>,
) {
    for event in collision_events.read() {
        let Some((player, other)) = player_pair(event, &players) else {
            continue;
        };
        let Ok(coin) = coins.get(other) else {
            continue;
        };

        debug!("Picked up {:?} coin", coin.look);
        commands.entity(other).try_despawn();
        collected.write(CoinCollected { collector: player });
    }
}
