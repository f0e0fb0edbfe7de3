//! Spawn domain: respawn settings, countdown and coin tally.

use bevy::prelude::*;

use crate::content::{SpawnDef, ValidationError, validate_spawn};

#[derive(Resource, Debug, Clone)]
pub struct SpawnSettings {
    pub spawn_point: Vec2,
    pub respawn_delay: f32,
    pub spawn_in_duration: f32,
    pub death_effect_lifetime: f32,
}

impl Default for SpawnSettings {
    fn default() -> Self {
        Self::from_def(&SpawnDef::default())
    }
}

impl SpawnSettings {
    fn from_def(def: &SpawnDef) -> Self {
        Self {
            spawn_point: Vec2::from_array(def.spawn_point),
            respawn_delay: def.respawn_delay,
            spawn_in_duration: def.spawn_in_duration,
            death_effect_lifetime: def.death_effect_lifetime,
        }
    }
}

impl TryFrom<&SpawnDef> for SpawnSettings {
    type Error = Vec<ValidationError>;

    fn try_from(def: &SpawnDef) -> Result<Self, Self::Error> {
        let errors = validate_spawn(def);
        if errors.is_empty() {
            Ok(Self::from_def(def))
        } else {
            Err(errors)
        }
    }
}

/// Pending respawn, counted down in seconds.
#[derive(Resource, Debug, Default)]
pub struct RespawnCountdown {
    pub remaining: Option<f32>,
}

impl RespawnCountdown {
    pub fn start(&mut self, delay: f32) {
        self.remaining = Some(delay);
    }

    pub fn is_pending(&self) -> bool {
        self.remaining.is_some()
    }

    /// Advance the countdown. Returns true exactly once, when it elapses.
    pub fn tick(&mut self, dt: f32) -> bool {
        let Some(remaining) = self.remaining.as_mut() else {
            return false;
        };

        *remaining -= dt;
        if *remaining > 0.0 {
            return false;
        }

        self.remaining = None;
        true
    }
}

#[derive(Resource, Debug, Default)]
pub struct CoinTally {
    pub collected: u32,
}

impl CoinTally {
    pub fn add(&mut self) -> u32 {
        self.collected += 1;
        self.collected
    }
}
