//! Spawn domain: the respawn orchestrator and coin tally.
//!
//! Plays the part of a game manager without being a global: everything it
//! owns is a resource, and other domains talk to it through messages.

mod events;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use events::{CoinCollected, PlayerDied};
pub use resources::{CoinTally, RespawnCountdown, SpawnSettings};
pub use systems::{DeathEffect, PLAYER_SIZE, spawn_player};

use bevy::prelude::*;

use crate::spawn::systems::{
    count_coins, fade_death_effects, handle_player_death, spawn_initial_player, tick_respawn,
};

pub struct SpawnPlugin;

impl Plugin for SpawnPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SpawnSettings>()
            .init_resource::<RespawnCountdown>()
            .init_resource::<CoinTally>()
            .add_message::<PlayerDied>()
            .add_message::<CoinCollected>()
            .add_systems(Startup, spawn_initial_player)
            .add_systems(
                Update,
                (
                    handle_player_death,
                    tick_respawn,
                    fade_death_effects,
                    count_coins,
                )
                    .chain(),
            );
    }
}
