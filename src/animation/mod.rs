//! Animation domain: relay between the movement controller and playback.
//!
//! The controller emits fire-and-forget cues; this module turns them into a
//! display state and reports back when the spawn-in clip has finished.

mod animator;
mod events;
mod systems;


pub use animator::{AnimationParams, AnimationTrigger, PlayerAnimation, PlayerAnimator};
pub use events::{AnimationTriggered, SpawnInFinished};

use bevy::prelude::*;

use crate::animation::systems::{
    advance_spawn_in, apply_animation_triggers, tint_player_sprite, update_animation_state,
};

pub struct AnimationPlugin;

impl Plugin for AnimationPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<AnimationTriggered>()
            .add_message::<SpawnInFinished>()
            .add_systems(
                Update,
                (
                    advance_spawn_in,
                    apply_animation_triggers,
                    update_animation_state,
                    tint_player_sprite,
                )
                    .chain(),
            );
    }
}
