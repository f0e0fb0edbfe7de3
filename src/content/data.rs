//! Data definitions for the gameplay defaults RON file.
//!
//! These structs mirror assets/data/gameplay_defaults.ron and are only used
//! for deserialization. Runtime resources are built from them after
//! validation.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Schema version this build understands.
pub const SUPPORTED_SCHEMA_VERSION: u32 = 1;

// ============================================================================
// Gameplay defaults (gameplay_defaults.ron)
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct GameplayDefaults {
    pub schema_version: u32,
    pub movement: MovementDef,
    pub spawn: SpawnDef,
    pub level: LevelDef,
}

impl Default for GameplayDefaults {
    fn default() -> Self {
        Self {
            schema_version: SUPPORTED_SCHEMA_VERSION,
            movement: MovementDef::default(),
            spawn: SpawnDef::default(),
            level: LevelDef::default(),
        }
    }
}

// ============================================================================
// Movement
// ============================================================================

/// Controller tuning. Speeds and forces are in pixels per second,
/// durations and windows in seconds.
#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct MovementDef {
    pub move_speed: f32,
    pub jump_force: f32,
    pub double_jump_force: f32,
    pub dash_speed: f32,
    pub dash_duration: f32,
    pub buffer_jump_window: f32,
    pub coyote_jump_window: f32,
    pub wall_jump_force: [f32; 2],
    pub wall_jump_duration: f32,
    pub knockback_force: [f32; 2],
    pub knockback_duration: f32,
    pub wall_slide_fast_factor: f32,
    pub wall_slide_slow_factor: f32,
    pub ground_check_distance: f32,
    pub wall_check_distance: f32,
    pub default_gravity_scale: f32,
}

impl Default for MovementDef {
    fn default() -> Self {
        Self {
            move_speed: 280.0,
            jump_force: 620.0,
            double_jump_force: 520.0,
            dash_speed: 900.0,
            dash_duration: 0.16,
            buffer_jump_window: 0.25,
            coyote_jump_window: 0.5,
            wall_jump_force: [300.0, 620.0],
            wall_jump_duration: 0.6,
            knockback_force: [240.0, 320.0],
            knockback_duration: 1.0,
            wall_slide_fast_factor: 1.0,
            wall_slide_slow_factor: 0.05,
            ground_check_distance: 28.0,
            wall_check_distance: 16.0,
            default_gravity_scale: 1.0,
        }
    }
}

// ============================================================================
// Spawning
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct SpawnDef {
    pub spawn_point: [f32; 2],
    pub respawn_delay: f32,
    pub spawn_in_duration: f32,
    pub death_effect_lifetime: f32,
}

impl Default for SpawnDef {
    fn default() -> Self {
        Self {
            spawn_point: [-300.0, -120.0],
            respawn_delay: 0.3,
            spawn_in_duration: 0.5,
            death_effect_lifetime: 0.6,
        }
    }
}

// ============================================================================
// Level
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct LevelDef {
    pub coins_have_random_look: bool,
    pub seed: u64,
}

impl Default for LevelDef {
    fn default() -> Self {
        Self {
            coins_have_random_look: true,
            seed: 7,
        }
    }
}
