//! Movement domain: the per-tick jump and movement state machine.
//!
//! Everything here is plain data plus a [`ContactSensor`], so it runs the
//! same against avian2d raycasts and against scripted contacts in tests.

use bevy::prelude::*;

use crate::animation::{AnimationParams, AnimationTrigger};
use crate::movement::timing::{LockKind, release_expired_lock, try_arm_lock};
use crate::movement::{ControlGate, MovementInput, MovementState, MovementTuning};

/// Ground and wall probes for one character.
pub trait ContactSensor {
    fn probe_ground(&self) -> bool;
    /// Probe sideways; `direction` is +1 for right, -1 for left.
    fn probe_wall(&self, direction: f32) -> bool;
}

/// Fire-and-forget output of a tick for the animation relay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationCue {
    Params(AnimationParams),
    Trigger(AnimationTrigger),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpKind {
    Ground,
    Coyote,
    Wall,
    Double,
    Buffered,
}

impl MovementState {
    /// Advance one fixed tick at time `now`.
    pub fn tick(
        &mut self,
        now: f32,
        input: &MovementInput,
        tuning: &MovementTuning,
        sensor: &impl ContactSensor,
        cues: &mut Vec<AnimationCue>,
    ) {
        if let Some(kind) = release_expired_lock(&mut self.lock, now) {
            debug!("Lock released: {:?} at t={:.3}", kind, now);
        }

        if self.is_controllable() && !self.is_knocked() {
            self.sample_contacts(sensor);
        }

        self.update_airborne(now, tuning);

        if !self.is_controllable() || self.is_knocked() {
            return;
        }

        self.x_input = input.axis.x;
        self.y_input = input.axis.y;

        if input.knockback_just_pressed && self.knock_back(now, tuning, cues) {
            return;
        }

        if input.jump_just_pressed {
            self.jump_button(now, tuning, cues);
            self.request_buffer_jump(now);
        }

        if input.dash_just_pressed {
            self.dash(now, tuning);
        }

        self.apply_wall_slide(tuning);
        self.apply_horizontal_movement(tuning);
        self.update_facing();

        cues.push(AnimationCue::Params(self.animation_params()));
    }

    pub fn sample_contacts(&mut self, sensor: &impl ContactSensor) {
        self.is_grounded = sensor.probe_ground();
        self.is_wall_detected = sensor.probe_wall(self.facing.direction());
    }

    /// Fire landing / leaving-ground transitions. Returns the buffered jump
    /// performed on landing, if any.
    pub fn update_airborne(&mut self, now: f32, tuning: &MovementTuning) -> Option<JumpKind> {
        if self.is_grounded && self.is_airborne {
            self.is_airborne = false;
            self.can_double_jump = true;
            debug!("Landed at t={:.3}", now);
            return self.attempt_buffer_jump(now, tuning);
        }

        if !self.is_grounded && !self.is_airborne {
            self.is_airborne = true;
            // A deliberate jump launch moves upward and gets no coyote grace
            if self.velocity.y <= 0.0 {
                self.coyote_jump.arm(now);
            }
            debug!(
                "Left ground at t={:.3}, vy={:.1}, coyote armed={}",
                now,
                self.velocity.y,
                self.velocity.y <= 0.0
            );
        }

        None
    }

    fn request_buffer_jump(&mut self, now: f32) {
        if self.is_airborne {
            self.buffer_jump.arm(now);
        }
    }

    fn attempt_buffer_jump(&mut self, now: f32, tuning: &MovementTuning) -> Option<JumpKind> {
        if !self.buffer_jump.is_active(now, tuning.buffer_jump_window) {
            return None;
        }

        self.buffer_jump.invalidate();
        self.jump(tuning);
        debug!("Buffered jump fired on landing");
        Some(JumpKind::Buffered)
    }

    /// Resolve a jump press: ground/coyote, then wall, then double jump.
    /// The coyote window is spent whatever the outcome.
    pub fn jump_button(
        &mut self,
        now: f32,
        tuning: &MovementTuning,
        cues: &mut Vec<AnimationCue>,
    ) -> Option<JumpKind> {
        let coyote_available = self.coyote_jump.is_active(now, tuning.coyote_jump_window);

        let performed = if self.is_grounded || coyote_available {
            self.jump(tuning);
            Some(if self.is_grounded {
                JumpKind::Ground
            } else {
                JumpKind::Coyote
            })
        } else if self.is_wall_detected {
            self.wall_jump(now, tuning);
            Some(JumpKind::Wall)
        } else if self.is_airborne && self.can_double_jump {
            self.double_jump(tuning, cues);
            Some(JumpKind::Double)
        } else {
            None
        };

        self.coyote_jump.invalidate();

        debug!(
            "Jump pressed: performed={:?}, grounded={}, wall={}, can_double_jump={}",
            performed, self.is_grounded, self.is_wall_detected, self.can_double_jump
        );
        performed
    }

    fn jump(&mut self, tuning: &MovementTuning) {
        self.velocity.y = tuning.jump_force;
    }

    fn double_jump(&mut self, tuning: &MovementTuning, cues: &mut Vec<AnimationCue>) {
        self.can_double_jump = false;
        self.velocity.y = tuning.double_jump_force;
        cues.push(AnimationCue::Trigger(AnimationTrigger::DoubleJump));
    }

    fn wall_jump(&mut self, now: f32, tuning: &MovementTuning) {
        self.can_double_jump = true;
        self.velocity = Vec2::new(
            tuning.wall_jump_force.x * -self.facing.direction(),
            tuning.wall_jump_force.y,
        );
        self.flip();
        try_arm_lock(
            &mut self.lock,
            LockKind::WallJump,
            now,
            tuning.wall_jump_duration,
        );
    }

    /// Start a dash in the facing direction. Ignored against a wall, while
    /// wall jumping, or while another lock is running.
    pub fn dash(&mut self, now: f32, tuning: &MovementTuning) -> bool {
        if self.is_wall_detected || self.is_wall_jumping() {
            return false;
        }
        if !try_arm_lock(&mut self.lock, LockKind::Dash, now, tuning.dash_duration) {
            return false;
        }

        self.velocity.x = tuning.dash_speed * self.facing.direction();
        debug!("Dash: facing={:?}, vx={:.1}", self.facing, self.velocity.x);
        true
    }

    /// Knock the character away from where it faces. Re-triggering while
    /// knocked, or while control is suspended, does nothing.
    pub fn knock_back(
        &mut self,
        now: f32,
        tuning: &MovementTuning,
        cues: &mut Vec<AnimationCue>,
    ) -> bool {
        if !self.is_controllable() {
            return false;
        }
        if !try_arm_lock(
            &mut self.lock,
            LockKind::Knockback,
            now,
            tuning.knockback_duration,
        ) {
            return false;
        }

        self.velocity = tuning.knockback_force * -self.facing.direction();
        cues.push(AnimationCue::Trigger(AnimationTrigger::Knockback));
        debug!("Knocked back: v={:?}", self.velocity);
        true
    }

    pub fn apply_wall_slide(&mut self, tuning: &MovementTuning) {
        if !self.is_wall_detected || self.velocity.y >= 0.0 {
            return;
        }

        let factor = if self.y_input < 0.0 {
            tuning.wall_slide_fast_factor
        } else {
            tuning.wall_slide_slow_factor
        };
        self.velocity.y *= factor;
    }

    pub fn apply_horizontal_movement(&mut self, tuning: &MovementTuning) {
        if self.is_wall_detected || self.is_wall_jumping() || self.is_dashing() {
            return;
        }

        self.velocity.x = self.x_input * tuning.move_speed;
    }

    fn update_facing(&mut self) {
        if (self.x_input < 0.0 && self.facing.is_right())
            || (self.x_input > 0.0 && !self.facing.is_right())
        {
            self.flip();
        }
    }

    pub fn flip(&mut self) {
        self.facing = self.facing.flipped();
    }

    pub fn animation_params(&self) -> AnimationParams {
        AnimationParams {
            x_velocity: self.velocity.x,
            y_velocity: self.velocity.y,
            is_grounded: self.is_grounded,
            is_wall_detected: self.is_wall_detected,
        }
    }

    /// Death / spawn-in: no input, no gravity, no collisions.
    pub fn suspend_control(&mut self) {
        self.control = ControlGate::Suspended;
    }

    pub fn resume_control(&mut self) {
        self.control = ControlGate::Controllable;
    }

    /// Gravity scale the body should use for the current gate.
    pub fn gravity_scale(&self, tuning: &MovementTuning) -> f32 {
        match self.control {
            ControlGate::Controllable => tuning.default_gravity_scale,
            ControlGate::Suspended => 0.0,
        }
    }

    pub fn collisions_enabled(&self) -> bool {
        self.is_controllable()
    }
}
