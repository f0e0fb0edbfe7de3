//! Animation state derived from controller cues.

use bevy::prelude::*;

/// Seconds a one-shot trigger (double jump, knockback) stays on screen.
pub const ONE_SHOT_HOLD: f32 = 0.25;

/// Horizontal speed below which a grounded character counts as idle.
const RUN_THRESHOLD: f32 = 0.1;

/// Continuous parameters written by the controller every active tick.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct AnimationParams {
    pub x_velocity: f32,
    pub y_velocity: f32,
    pub is_grounded: bool,
    pub is_wall_detected: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationTrigger {
    DoubleJump,
    Knockback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlayerAnimation {
    SpawnIn,
    #[default]
    Idle,
    Run,
    Jump,
    Fall,
    WallSlide,
    DoubleJump,
    Knockback,
}

impl From<AnimationTrigger> for PlayerAnimation {
    fn from(trigger: AnimationTrigger) -> Self {
        match trigger {
            AnimationTrigger::DoubleJump => PlayerAnimation::DoubleJump,
            AnimationTrigger::Knockback => PlayerAnimation::Knockback,
        }
    }
}

/// Playback state for the player sprite.
#[derive(Component, Debug, Default)]
pub struct PlayerAnimator {
    pub state: PlayerAnimation,
    /// Remaining spawn-in time; `None` once the clip has finished.
    pub spawn_in_remaining: Option<f32>,
    /// Active one-shot and its remaining hold time.
    pub one_shot: Option<(PlayerAnimation, f32)>,
}

impl PlayerAnimator {
    /// Start in the spawn-in clip.
    pub fn spawning(duration: f32) -> Self {
        Self {
            state: PlayerAnimation::SpawnIn,
            spawn_in_remaining: Some(duration),
            one_shot: None,
        }
    }

    pub fn is_spawning(&self) -> bool {
        self.spawn_in_remaining.is_some()
    }

    /// Advance the spawn-in clip. Returns true on the tick it finishes,
    /// and never again afterwards.
    pub fn tick_spawn_in(&mut self, dt: f32) -> bool {
        let Some(remaining) = self.spawn_in_remaining.as_mut() else {
            return false;
        };

        *remaining -= dt;
        if *remaining > 0.0 {
            return false;
        }

        self.spawn_in_remaining = None;
        true
    }

    pub fn play_one_shot(&mut self, trigger: AnimationTrigger) {
        self.one_shot = Some((trigger.into(), ONE_SHOT_HOLD));
    }

    /// Pick the state for this frame. Returns true if it changed.
    pub fn update(&mut self, params: &AnimationParams, dt: f32) -> bool {
        if let Some((_, hold)) = self.one_shot.as_mut() {
            *hold -= dt;
        }
        if self.one_shot.is_some_and(|(_, hold)| hold <= 0.0) {
            self.one_shot = None;
        }

        let next = if self.is_spawning() {
            PlayerAnimation::SpawnIn
        } else if let Some((one_shot, _)) = self.one_shot {
            one_shot
        } else {
            Self::locomotion_state(params)
        };

        let changed = next != self.state;
        self.state = next;
        changed
    }

    fn locomotion_state(params: &AnimationParams) -> PlayerAnimation {
        if params.is_grounded {
            if params.x_velocity.abs() > RUN_THRESHOLD {
                PlayerAnimation::Run
            } else {
                PlayerAnimation::Idle
            }
        } else if params.is_wall_detected && params.y_velocity < 0.0 {
            PlayerAnimation::WallSlide
        } else if params.y_velocity > 0.0 {
            PlayerAnimation::Jump
        } else {
            PlayerAnimation::Fall
        }
    }
}
