//! Level domain: test level layout, death zones and coin pickups.

mod components;
mod spawn;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{Coin, CoinLook, DeathZone, Ground, LevelSettings, Wall};

use bevy::prelude::*;

use crate::level::spawn::spawn_level;
use crate::level::systems::{collect_coins, detect_death_zone};

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LevelSettings>()
            .add_systems(Startup, spawn_level)
            .add_systems(Update, (detect_death_zone, collect_coins));
    }
}
