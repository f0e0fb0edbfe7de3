//! Animation domain: playback systems.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use super::{
    AnimationParams, AnimationTriggered, PlayerAnimation, PlayerAnimator, SpawnInFinished,
};

pub(crate) fn advance_spawn_in(
    time: Res<Time>,
    mut finished: MessageWriter<SpawnInFinished>,
    mut query: Query<(Entity, &mut PlayerAnimator)>,
) {
    let dt = time.delta_secs();
    for (entity, mut animator) in &mut query {
        if animator.tick_spawn_in(dt) {
            debug!("Spawn-in finished for {:?}", entity);
            finished.write(SpawnInFinished { entity });
        }
    }
}

pub(crate) fn apply_animation_triggers(
    mut triggers: MessageReader<AnimationTriggered>,
    mut query: Query<&mut PlayerAnimator>,
) {
    for event in triggers.read() {
        if let Ok(mut animator) = query.get_mut(event.entity) {
            animator.play_one_shot(event.trigger);
        }
    }
}

pub(crate) fn update_animation_state(
    time: Res<Time>,
    mut query: Query<(&AnimationParams, &mut PlayerAnimator)>,
) {
    let dt = time.delta_secs();
    for (params, mut animator) in &mut query {
        if animator.update(params, dt) {
            debug!("Animation state -> {:?}", animator.state);
        }
    }
}

/// Fade the sprite in while spawning and tint one-shot states.
pub(crate) fn tint_player_sprite(mut query: Query<(&PlayerAnimator, &mut Sprite)>) {
    for (animator, mut sprite) in &mut query {
        let color = match animator.state {
            PlayerAnimation::SpawnIn => Color::srgba(0.9, 0.9, 0.9, 0.4),
            PlayerAnimation::DoubleJump => Color::srgb(0.7, 0.85, 1.0),
            PlayerAnimation::Knockback => Color::srgb(1.0, 0.55, 0.55),
            PlayerAnimation::WallSlide => Color::srgb(0.85, 0.85, 0.7),
            _ => Color::srgb(0.9, 0.9, 0.9),
        };
        if sprite.color != color {
            sprite.color = color;
        }
    }
}
