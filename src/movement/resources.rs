//! Movement domain: tuning and input resources.

use bevy::prelude::*;

use crate::content::{MovementDef, ValidationError, validate_movement};

/// Validated movement tuning. Only built from data that passed
/// [`validate_movement`], so durations and windows are never negative.
#[derive(Resource, Debug, Clone)]
pub struct MovementTuning {
    pub move_speed: f32,
    pub jump_force: f32,
    pub double_jump_force: f32,
    pub dash_speed: f32,
    pub dash_duration: f32,
    pub buffer_jump_window: f32,
    pub coyote_jump_window: f32,
    pub wall_jump_force: Vec2,
    pub wall_jump_duration: f32,
    pub knockback_force: Vec2,
    pub knockback_duration: f32,
    /// Fall-speed multiplier while sliding and holding down.
    pub wall_slide_fast_factor: f32,
    /// Fall-speed multiplier while sliding otherwise.
    pub wall_slide_slow_factor: f32,
    pub ground_check_distance: f32,
    pub wall_check_distance: f32,
    pub default_gravity_scale: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self::from_def(&MovementDef::default())
    }
}

impl MovementTuning {
    fn from_def(def: &MovementDef) -> Self {
        Self {
            move_speed: def.move_speed,
            jump_force: def.jump_force,
            double_jump_force: def.double_jump_force,
            dash_speed: def.dash_speed,
            dash_duration: def.dash_duration,
            buffer_jump_window: def.buffer_jump_window,
            coyote_jump_window: def.coyote_jump_window,
            wall_jump_force: Vec2::from_array(def.wall_jump_force),
            wall_jump_duration: def.wall_jump_duration,
            knockback_force: Vec2::from_array(def.knockback_force),
            knockback_duration: def.knockback_duration,
            wall_slide_fast_factor: def.wall_slide_fast_factor,
            wall_slide_slow_factor: def.wall_slide_slow_factor,
            ground_check_distance: def.ground_check_distance,
            wall_check_distance: def.wall_check_distance,
            default_gravity_scale: def.default_gravity_scale,
        }
    }
}

impl TryFrom<&MovementDef> for MovementTuning {
    type Error = Vec<ValidationError>;

    fn try_from(def: &MovementDef) -> Result<Self, Self::Error> {
        let errors = validate_movement(def);
        if errors.is_empty() {
            Ok(Self::from_def(def))
        } else {
            Err(errors)
        }
    }
}

/// Input sampled in `Update`. Press edges are latched until a fixed tick
/// consumes them with [`MovementInput::clear_edges`].
#[derive(Resource, Debug, Default, Clone)]
pub struct MovementInput {
    pub axis: Vec2,
    pub jump_just_pressed: bool,
    pub dash_just_pressed: bool,
    pub knockback_just_pressed: bool,
}

impl MovementInput {
    pub fn clear_edges(&mut self) {
        self.jump_just_pressed = false;
        self.dash_just_pressed = false;
        self.knockback_just_pressed = false;
    }
}
