//! Spawn domain: player spawning, death handling and respawn countdown.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::animation::{AnimationParams, PlayerAnimator};
use crate::movement::{GameLayer, MovementState, Player};
use crate::spawn::{CoinCollected, CoinTally, PlayerDied, RespawnCountdown, SpawnSettings};

pub const PLAYER_SIZE: Vec2 = Vec2::new(24.0, 48.0);

/// Short-lived marker left where a character died
#[derive(Component, Debug)]
pub struct DeathEffect {
    pub remaining: f32,
}

/// Spawn a character at `position`. It starts suspended (no gravity, no
/// collisions) until its spawn-in clip finishes.
pub fn spawn_player(commands: &mut Commands, position: Vec2, settings: &SpawnSettings) -> Entity {
    let entity = commands
        .spawn((
            // Identity & Movement
            (Player, MovementState::default()),
            // Animation relay
            (
                AnimationParams::default(),
                PlayerAnimator::spawning(settings.spawn_in_duration),
            ),
            // Rendering
            Sprite {
                color: Color::srgba(0.9, 0.9, 0.9, 0.4),
                custom_size: Some(PLAYER_SIZE),
                ..default()
            },
            Transform::from_translation(position.extend(0.0)),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
                ColliderDisabled,
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                GravityScale(0.0),
                Friction::new(0.0),
                CollisionEventsEnabled,
                CollisionLayers::new(
                    GameLayer::Player,
                    [GameLayer::Ground, GameLayer::Wall, GameLayer::Sensor],
                ),
            ),
        ))
        .id();

    info!("Spawned player {:?} at {:?}", entity, position);
    entity
}

pub(crate) fn spawn_initial_player(mut commands: Commands, settings: Res<SpawnSettings>) {
    spawn_player(&mut commands, settings.spawn_point, &settings);
}

/// Leave a death effect, remove the character and schedule a respawn.
pub(crate) fn handle_player_death(
    mut commands: Commands,
    mut deaths: MessageReader<PlayerDied>,
    settings: Res<SpawnSettings>,
    mut countdown: ResMut<RespawnCountdown>,
    players: Query<(), With<Player>>,
) {
    for death in deaths.read() {
        if countdown.is_pending() || players.get(death.entity).is_err() {
            warn!(
                "Ignoring death report for {:?}: respawn already pending or entity gone",
                death.entity
            );
            continue;
        }

        commands.spawn((
            DeathEffect {
                remaining: settings.death_effect_lifetime,
            },
            Sprite {
                color: Color::srgb(0.95, 0.35, 0.3),
                custom_size: Some(PLAYER_SIZE * 0.75),
                ..default()
            },
            Transform::from_translation(death.position.extend(1.0)),
        ));
        commands.entity(death.entity).despawn();
        countdown.start(settings.respawn_delay);

        info!(
            "Player {:?} died at {:?}, respawning in {}s",
            death.entity, death.position, settings.respawn_delay
        );
    }
}

pub(crate) fn tick_respawn(
    mut commands: Commands,
    time: Res<Time>,
    settings: Res<SpawnSettings>,
    mut countdown: ResMut<RespawnCountdown>,
) {
    if countdown.tick(time.delta_secs()) {
        spawn_player(&mut commands, settings.spawn_point, &settings);
    }
}

pub(crate) fn fade_death_effects(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut DeathEffect)>,
) {
    let dt = time.delta_secs();
    for (entity, mut effect) in &mut query {
        effect.remaining -= dt;
        if effect.remaining <= 0.0 {
            commands.entity(entity).despawn();
        }
    }
}

pub(crate) fn count_coins(mut collected: MessageReader<CoinCollected>, mut tally: ResMut<CoinTally>) {
    for event in collected.read() {
        let total = tally.add();
        info!("Coin collected by {:?}, total {}", event.collector, total);
    }
}
