//! Content domain: data-driven tuning loaded from RON at startup.

mod data;
mod loader;
mod validation;

#[cfg(test)]
mod tests;

pub use data::*;
pub use loader::{ContentLoadError, load_gameplay_defaults, parse_single};
pub use validation::{ValidationError, validate_defaults, validate_movement, validate_spawn};

use bevy::prelude::*;
use std::path::Path;

use crate::level::LevelSettings;
use crate::movement::MovementTuning;
use crate::spawn::SpawnSettings;

const DATA_DIR: &str = "assets/data";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<GameplayDefaults>()
            .register_type::<MovementDef>()
            .register_type::<SpawnDef>()
            .register_type::<LevelDef>()
            .add_systems(PreStartup, load_content);
    }
}

/// Load and validate gameplay defaults, then publish the runtime resources.
/// A file that fails either step is rejected as a whole in favour of the
/// built-in defaults.
fn load_content(mut commands: Commands) {
    let defaults = match load_gameplay_defaults(Path::new(DATA_DIR)) {
        Ok(defaults) => {
            let errors = validate_defaults(&defaults);
            if errors.is_empty() {
                info!("Loaded gameplay defaults from {}", DATA_DIR);
                defaults
            } else {
                for e in &errors {
                    error!("Content validation error: {}", e);
                }
                error!(
                    "Rejected gameplay defaults ({} errors), using built-in values",
                    errors.len()
                );
                GameplayDefaults::default()
            }
        }
        Err(e) => {
            error!("{}", e);
            warn!("Using built-in gameplay defaults");
            GameplayDefaults::default()
        }
    };

    let resources = (
        MovementTuning::try_from(&defaults.movement),
        SpawnSettings::try_from(&defaults.spawn),
    );
    match resources {
        (Ok(tuning), Ok(spawn)) => {
            commands.insert_resource(tuning);
            commands.insert_resource(spawn);
        }
        // Built-in defaults are validated by tests; reaching this is a bug
        (tuning, spawn) => {
            for e in tuning.err().into_iter().chain(spawn.err()).flatten() {
                error!("Invalid built-in default: {}", e);
            }
        }
    }
    commands.insert_resource(LevelSettings::from(&defaults.level));
}
