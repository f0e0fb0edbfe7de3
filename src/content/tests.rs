//! Content domain: tests for parsing and validating gameplay defaults.

use super::{
    GameplayDefaults, MovementDef, SUPPORTED_SCHEMA_VERSION, SpawnDef, parse_single,
    validate_defaults, validate_movement, validate_spawn,
};
use crate::movement::MovementTuning;
use crate::spawn::SpawnSettings;

const SHIPPED_DEFAULTS: &str = include_str!("../../assets/data/gameplay_defaults.ron");

// -----------------------------------------------------------------------------
// Parsing
// -----------------------------------------------------------------------------

#[test]
fn test_shipped_defaults_parse_and_validate() {
    let defaults: GameplayDefaults =
        parse_single(SHIPPED_DEFAULTS, "gameplay_defaults.ron").unwrap();

    assert_eq!(defaults.schema_version, SUPPORTED_SCHEMA_VERSION);
    assert!(validate_defaults(&defaults).is_empty());
    assert_eq!(defaults.movement.wall_jump_force, [300.0, 620.0]);
    assert_eq!(defaults.spawn.respawn_delay, 0.3);
}

#[test]
fn test_parse_error_names_file() {
    let err = parse_single::<GameplayDefaults>("(schema_version: 1,", "broken.ron").unwrap_err();

    assert_eq!(err.file, "broken.ron");
    assert!(err.message.starts_with("Parse error"));
    assert!(err.to_string().contains("broken.ron"));
}

// -----------------------------------------------------------------------------
// Validation
// -----------------------------------------------------------------------------

#[test]
fn test_builtin_defaults_are_valid() {
    assert!(validate_defaults(&GameplayDefaults::default()).is_empty());
    assert!(MovementTuning::try_from(&MovementDef::default()).is_ok());
    assert!(SpawnSettings::try_from(&SpawnDef::default()).is_ok());
}

#[test]
fn test_negative_windows_rejected() {
    let def = MovementDef {
        buffer_jump_window: -0.1,
        dash_duration: -1.0,
        ..MovementDef::default()
    };

    let errors = validate_movement(&def);

    let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
    assert_eq!(fields, vec!["dash_duration", "buffer_jump_window"]);
    assert!(MovementTuning::try_from(&def).is_err());
}

#[test]
fn test_non_finite_values_rejected() {
    let def = MovementDef {
        coyote_jump_window: f32::NAN,
        move_speed: f32::INFINITY,
        ..MovementDef::default()
    };

    let fields: Vec<_> = validate_movement(&def).iter().map(|e| e.field).collect();
    assert!(fields.contains(&"coyote_jump_window"));
    assert!(fields.contains(&"move_speed"));
}

#[test]
fn test_zero_speed_rejected_but_zero_window_allowed() {
    let def = MovementDef {
        jump_force: 0.0,
        coyote_jump_window: 0.0,
        ..MovementDef::default()
    };

    let errors = validate_movement(&def);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "jump_force");
}

#[test]
fn test_wall_slide_factor_out_of_range() {
    let def = MovementDef {
        wall_slide_slow_factor: 1.5,
        ..MovementDef::default()
    };

    let errors = validate_movement(&def);
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].to_string(),
        "movement.wall_slide_slow_factor: must be within [0, 1], got 1.5"
    );
}

#[test]
fn test_spawn_validation() {
    let def = SpawnDef {
        respawn_delay: -0.3,
        spawn_point: [f32::NAN, 0.0],
        ..SpawnDef::default()
    };

    let fields: Vec<_> = validate_spawn(&def).iter().map(|e| e.field).collect();
    assert_eq!(fields, vec!["respawn_delay", "spawn_point"]);
}

#[test]
fn test_all_errors_reported_with_schema_check() {
    let mut defaults = GameplayDefaults::default();
    defaults.schema_version = 99;
    defaults.movement.knockback_duration = -1.0;
    defaults.spawn.spawn_in_duration = -1.0;

    let errors = validate_defaults(&defaults);

    let sections: Vec<_> = errors.iter().map(|e| e.section).collect();
    assert_eq!(sections, vec!["gameplay_defaults", "movement", "spawn"]);
}
