//! Level domain: static test level with a pit, walls and coins.

use avian2d::prelude::*;
use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::level::{Coin, CoinLook, DeathZone, Ground, LevelSettings, Wall};
use crate::movement::GameLayer;

const GROUND_COLOR: Color = Color::srgb(0.4, 0.5, 0.4);
const WALL_COLOR: Color = Color::srgb(0.3, 0.3, 0.4);
const PLATFORM_COLOR: Color = Color::srgb(0.5, 0.4, 0.3);

const COIN_SIZE: f32 = 14.0;

/// Coin positions: over each platform, by the pillar and across the pit.
const COIN_POSITIONS: [Vec2; 6] = [
    Vec2::new(-250.0, -10.0),
    Vec2::new(250.0, 90.0),
    Vec2::new(0.0, 190.0),
    Vec2::new(-140.0, 60.0),
    Vec2::new(0.0, -120.0),
    Vec2::new(330.0, -150.0),
];

fn block(size: Vec2, position: Vec2, color: Color) -> impl Bundle {
    (
        Sprite {
            color,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_translation(position.extend(0.0)),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
    )
}

pub(crate) fn spawn_level(mut commands: Commands, settings: Res<LevelSettings>) {
    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);
    let wall_layers = CollisionLayers::new(GameLayer::Wall, [GameLayer::Player]);

    // Floor, split by a pit in the middle
    for x in [-230.0, 230.0] {
        commands.spawn((
            Ground,
            block(Vec2::new(340.0, 40.0), Vec2::new(x, -200.0), GROUND_COLOR),
            ground_layers,
        ));
    }

    // Side walls
    for x in [-420.0, 420.0] {
        commands.spawn((
            Wall,
            block(Vec2::new(40.0, 500.0), Vec2::new(x, 50.0), WALL_COLOR),
            wall_layers,
        ));
    }

    // Platforms
    for (size, position) in [
        (Vec2::new(150.0, 20.0), Vec2::new(-250.0, -50.0)),
        (Vec2::new(150.0, 20.0), Vec2::new(250.0, 50.0)),
        (Vec2::new(120.0, 20.0), Vec2::new(0.0, 150.0)),
    ] {
        commands.spawn((
            Ground,
            block(size, position, PLATFORM_COLOR),
            ground_layers,
        ));
    }

    // Pillar for wall jumping practice
    commands.spawn((
        Wall,
        block(Vec2::new(30.0, 200.0), Vec2::new(-100.0, -80.0), WALL_COLOR),
        wall_layers,
    ));

    // Death zone below the pit
    commands.spawn((
        DeathZone,
        Transform::from_xyz(0.0, -320.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(900.0, 40.0),
        Sensor,
        CollisionEventsEnabled,
        CollisionLayers::new(GameLayer::Sensor, [GameLayer::Player]),
    ));

    let mut rng = ChaCha8Rng::seed_from_u64(settings.seed);
    for position in COIN_POSITIONS {
        let look = if settings.coins_have_random_look {
            CoinLook::random(&mut rng)
        } else {
            CoinLook::default()
        };
        commands.spawn((
            Coin { look },
            Sprite {
                color: look.color(),
                custom_size: Some(Vec2::splat(COIN_SIZE)),
                ..default()
            },
            Transform::from_translation(position.extend(0.5)),
            RigidBody::Static,
            Collider::circle(COIN_SIZE / 2.0),
            Sensor,
            CollisionEventsEnabled,
            CollisionLayers::new(GameLayer::Sensor, [GameLayer::Player]),
        ));
    }

    info!(
        "Spawned test level with {} coins (random look: {})",
        COIN_POSITIONS.len(),
        settings.coins_have_random_look
    );
}
