//! Movement domain: fixed-tick controller driver and body sync.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::animation::{AnimationParams, AnimationTriggered, SpawnInFinished};
use crate::movement::systems::collisions::RaycastSensor;
use crate::movement::{AnimationCue, MovementInput, MovementState, MovementTuning, Player};

/// Run one controller tick per player, then consume the latched press edges.
pub(crate) fn run_controller(
    time: Res<Time>,
    tuning: Res<MovementTuning>,
    mut input: ResMut<MovementInput>,
    spatial_query: SpatialQuery,
    mut triggers: MessageWriter<AnimationTriggered>,
    mut query: Query<
        (
            Entity,
            &Transform,
            &mut MovementState,
            &mut LinearVelocity,
            &mut AnimationParams,
        ),
        With<Player>,
    >,
) {
    let now = time.elapsed_secs();
    let mut cues = Vec::new();

    for (entity, transform, mut state, mut velocity, mut params) in &mut query {
        let sensor = RaycastSensor::new(&spatial_query, transform.translation.truncate(), &tuning);

        state.velocity = velocity.0;
        state.tick(now, &input, &tuning, &sensor, &mut cues);
        velocity.0 = state.velocity;

        for cue in cues.drain(..) {
            match cue {
                AnimationCue::Params(latest) => *params = latest,
                AnimationCue::Trigger(trigger) => {
                    triggers.write(AnimationTriggered { entity, trigger });
                }
            }
        }
    }

    input.clear_edges();
}

/// Apply the control gate to the rigid body: gravity scale and collider.
pub(crate) fn sync_control_gate(
    mut commands: Commands,
    tuning: Res<MovementTuning>,
    mut query: Query<
        (Entity, &MovementState, &mut GravityScale, Has<ColliderDisabled>),
        With<Player>,
    >,
) {
    for (entity, state, mut gravity, collider_disabled) in &mut query {
        let scale = state.gravity_scale(&tuning);
        if gravity.0 != scale {
            gravity.0 = scale;
        }

        match (state.collisions_enabled(), collider_disabled) {
            (true, true) => {
                commands.entity(entity).remove::<ColliderDisabled>();
            }
            (false, false) => {
                commands.entity(entity).insert(ColliderDisabled);
            }
            _ => {}
        }
    }
}

/// Mirror the sprite to match the facing direction.
pub(crate) fn sync_facing(mut query: Query<(&MovementState, &mut Sprite), With<Player>>) {
    for (state, mut sprite) in &mut query {
        let flip_x = !state.facing.is_right();
        if sprite.flip_x != flip_x {
            sprite.flip_x = flip_x;
        }
    }
}

/// Hand control back once the spawn-in animation has played out.
pub(crate) fn resume_on_spawn_in(
    mut finished: MessageReader<SpawnInFinished>,
    mut query: Query<&mut MovementState, With<Player>>,
) {
    for event in finished.read() {
        if let Ok(mut state) = query.get_mut(event.entity) {
            state.resume_control();
            info!("Control resumed for {:?}", event.entity);
        }
    }
}
