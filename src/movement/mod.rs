//! Movement domain: platformer controller plugin wiring and public exports.

mod components;
mod controller;
mod resources;
mod systems;
mod timing;


pub use components::{ControlGate, Facing, GameLayer, MovementState, Player};
pub use controller::{AnimationCue, ContactSensor, JumpKind};
pub use resources::{MovementInput, MovementTuning};
pub use timing::{ActionLock, LockKind, TimedWindow};

use bevy::prelude::*;

use crate::movement::systems::{
    read_input, resume_on_spawn_in, run_controller, sync_control_gate, sync_facing,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .add_systems(Update, read_input)
            .add_systems(FixedUpdate, run_controller)
            .add_systems(
                Update,
                (resume_on_spawn_in, sync_control_gate, sync_facing).chain(),
            );
    }
}
