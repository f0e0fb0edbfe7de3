//! Spawn domain: death and pickup messages.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// A character touched something lethal
#[derive(Debug)]
pub struct PlayerDied {
    pub entity: Entity,
    pub position: Vec2,
}

impl Message for PlayerDied {}

/// A coin was picked up
#[derive(Debug)]
pub struct CoinCollected {
    pub collector: Entity,
}

impl Message for CoinCollected {}
