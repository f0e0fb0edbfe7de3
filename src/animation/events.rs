//! Animation domain: messages exchanged with the controller.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use super::AnimationTrigger;

/// A discrete trigger fired by the controller this tick
#[derive(Debug)]
pub struct AnimationTriggered {
    pub entity: Entity,
    pub trigger: AnimationTrigger,
}

impl Message for AnimationTriggered {}

/// Fired once when a freshly spawned character finishes its spawn-in clip
#[derive(Debug)]
pub struct SpawnInFinished {
    pub entity: Entity,
}

impl Message for SpawnInFinished {}
