//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::timing::{ActionLock, LockKind, TimedWindow};

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character
    Player,
    /// Sensors (death zones, coins) - should not block movement
    Sensor,
}

#[derive(Component, Debug, Default)]
pub struct Player;

/// Which way the character faces. The sign and the bool view are derived
/// from the same value so they can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    /// +1 when facing right, -1 when facing left.
    pub fn direction(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }

    pub fn is_right(self) -> bool {
        self == Facing::Right
    }

    pub fn flipped(self) -> Self {
        match self {
            Facing::Right => Facing::Left,
            Facing::Left => Facing::Right,
        }
    }
}

/// Whether user input drives the character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlGate {
    /// Gravity and collisions on, full pipeline runs.
    Controllable,
    /// Zero gravity, collisions off; used while dying and spawning in.
    #[default]
    Suspended,
}

/// Per-character movement record, mutated once per fixed tick.
#[derive(Component, Debug, Default)]
pub struct MovementState {
    pub velocity: Vec2,
    pub facing: Facing,
    pub is_grounded: bool,
    pub is_wall_detected: bool,
    pub is_airborne: bool,
    pub can_double_jump: bool,
    pub control: ControlGate,
    /// The single active timed lock (dash, wall jump or knockback).
    pub lock: Option<ActionLock>,
    pub buffer_jump: TimedWindow,
    pub coyote_jump: TimedWindow,
    pub x_input: f32,
    pub y_input: f32,
}

impl MovementState {
    pub fn is_controllable(&self) -> bool {
        self.control == ControlGate::Controllable
    }

    pub fn is_dashing(&self) -> bool {
        self.lock_kind() == Some(LockKind::Dash)
    }

    pub fn is_wall_jumping(&self) -> bool {
        self.lock_kind() == Some(LockKind::WallJump)
    }

    pub fn is_knocked(&self) -> bool {
        self.lock_kind() == Some(LockKind::Knockback)
    }

    pub fn lock_kind(&self) -> Option<LockKind> {
        self.lock.map(|lock| lock.kind)
    }
}
