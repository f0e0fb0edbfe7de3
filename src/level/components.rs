//! Level domain: level geometry markers and pickups.

use bevy::prelude::*;
use rand::Rng;

use crate::content::LevelDef;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;

/// Sensor volume that kills any character entering it
#[derive(Component, Debug)]
pub struct DeathZone;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CoinLook {
    #[default]
    Gold,
    Silver,
    Ruby,
    Emerald,
}

impl CoinLook {
    pub const ALL: [CoinLook; 4] = [
        CoinLook::Gold,
        CoinLook::Silver,
        CoinLook::Ruby,
        CoinLook::Emerald,
    ];

    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    pub fn color(self) -> Color {
        match self {
            CoinLook::Gold => Color::srgb(0.95, 0.8, 0.2),
            CoinLook::Silver => Color::srgb(0.8, 0.8, 0.85),
            CoinLook::Ruby => Color::srgb(0.85, 0.2, 0.3),
            CoinLook::Emerald => Color::srgb(0.2, 0.8, 0.45),
        }
    }
}

#[derive(Component, Debug)]
pub struct Coin {
    pub look: CoinLook,
}

#[derive(Resource, Debug, Clone)]
pub struct LevelSettings {
    pub coins_have_random_look: bool,
    pub seed: u64,
}

impl Default for LevelSettings {
    fn default() -> Self {
        Self::from(&LevelDef::default())
    }
}

impl From<&LevelDef> for LevelSettings {
    fn from(def: &LevelDef) -> Self {
        Self {
            coins_have_random_look: def.coins_have_random_look,
            seed: def.seed,
        }
    }
}
