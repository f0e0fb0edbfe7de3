mod animation;
mod content;
mod core;
mod level;
mod movement;
mod spawn;

use avian2d::prelude::*;
use bevy::prelude::*;

/// Downward gravity in pixels per second squared.
const GRAVITY: f32 = 1800.0;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Dashline".to_string(),
                resolution: (1280, 720).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(PhysicsPlugins::default())
        .insert_resource(Gravity(Vec2::NEG_Y * GRAVITY))
        .add_plugins((
            core::CorePlugin,
            content::ContentPlugin,
            movement::MovementPlugin,
            animation::AnimationPlugin,
            spawn::SpawnPlugin,
            level::LevelPlugin,
        ))
        .run();
}
