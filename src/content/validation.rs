//! Validation for gameplay tuning values.

use super::data::*;

/// A validation error with context about what failed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub section: &'static str,
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}: {}", self.section, self.field, self.message)
    }
}

/// Durations, windows and distances: finite and not negative.
macro_rules! check_non_negative {
    ($errors:expr, $section:expr, $def:expr, $field:ident) => {
        let value = $def.$field;
        if !value.is_finite() || value < 0.0 {
            $errors.push(ValidationError {
                section: $section,
                field: stringify!($field),
                message: format!("must be a finite value >= 0, got {}", value),
            });
        }
    };
}

/// Speeds and forces that must actually move the character.
macro_rules! check_positive {
    ($errors:expr, $section:expr, $value:expr, $field:expr) => {
        let value = $value;
        if !value.is_finite() || value <= 0.0 {
            $errors.push(ValidationError {
                section: $section,
                field: $field,
                message: format!("must be a finite value > 0, got {}", value),
            });
        }
    };
}

/// Multipliers constrained to the unit interval.
macro_rules! check_unit_interval {
    ($errors:expr, $section:expr, $def:expr, $field:ident) => {
        let value = $def.$field;
        if !(0.0..=1.0).contains(&value) {
            $errors.push(ValidationError {
                section: $section,
                field: stringify!($field),
                message: format!("must be within [0, 1], got {}", value),
            });
        }
    };
}

pub fn validate_movement(def: &MovementDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let section = "movement";

    check_positive!(errors, section, def.move_speed, "move_speed");
    check_positive!(errors, section, def.jump_force, "jump_force");
    check_positive!(errors, section, def.double_jump_force, "double_jump_force");
    check_positive!(errors, section, def.dash_speed, "dash_speed");
    check_positive!(errors, section, def.wall_jump_force[0], "wall_jump_force.x");
    check_positive!(errors, section, def.wall_jump_force[1], "wall_jump_force.y");

    // Knockback may be purely horizontal or purely vertical
    for (value, field) in [
        (def.knockback_force[0], "knockback_force.x"),
        (def.knockback_force[1], "knockback_force.y"),
    ] {
        if !value.is_finite() {
            errors.push(ValidationError {
                section,
                field,
                message: format!("must be finite, got {}", value),
            });
        }
    }

    check_non_negative!(errors, section, def, dash_duration);
    check_non_negative!(errors, section, def, buffer_jump_window);
    check_non_negative!(errors, section, def, coyote_jump_window);
    check_non_negative!(errors, section, def, wall_jump_duration);
    check_non_negative!(errors, section, def, knockback_duration);
    check_non_negative!(errors, section, def, ground_check_distance);
    check_non_negative!(errors, section, def, wall_check_distance);
    check_non_negative!(errors, section, def, default_gravity_scale);

    check_unit_interval!(errors, section, def, wall_slide_fast_factor);
    check_unit_interval!(errors, section, def, wall_slide_slow_factor);

    errors
}

pub fn validate_spawn(def: &SpawnDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let section = "spawn";

    check_non_negative!(errors, section, def, respawn_delay);
    check_non_negative!(errors, section, def, spawn_in_duration);
    check_non_negative!(errors, section, def, death_effect_lifetime);

    if !def.spawn_point.iter().all(|v| v.is_finite()) {
        errors.push(ValidationError {
            section,
            field: "spawn_point",
            message: format!("must be finite, got {:?}", def.spawn_point),
        });
    }

    errors
}

/// Validate the whole defaults file.
/// Returns a list of validation errors, empty if everything is usable.
pub fn validate_defaults(defaults: &GameplayDefaults) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if defaults.schema_version != SUPPORTED_SCHEMA_VERSION {
        errors.push(ValidationError {
            section: "gameplay_defaults",
            field: "schema_version",
            message: format!(
                "unsupported version {}, expected {}",
                defaults.schema_version, SUPPORTED_SCHEMA_VERSION
            ),
        });
    }

    errors.extend(validate_movement(&defaults.movement));
    errors.extend(validate_spawn(&defaults.spawn));
    errors
}
