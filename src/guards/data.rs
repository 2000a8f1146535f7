//! Guard data loading from RON files.

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::components::Steering;
use crate::brain::{AttackConfig, GuardConfig, PatrolConfig, StateType};
use crate::contact::AnchorOffsets;
use crate::core::DataLoadError;
use crate::perception::ViewConfig;

/// Directory guard definitions are loaded from.
pub const GUARD_DATA_DIR: &str = "assets/data/guards";

/// Walking parameters for a guard.
#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct MovementConfig {
    pub speed: f32,
    pub stopping_distance: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            speed: 3.5,
            stopping_distance: 0.5,
        }
    }
}

/// Collider configuration for a guard.
#[derive(Deserialize, Clone, Debug)]
pub struct ColliderConfig {
    pub half_height: f32,
    pub radius: f32,
}

impl Default for ColliderConfig {
    fn default() -> Self {
        Self {
            half_height: 0.6,
            radius: 0.35,
        }
    }
}

/// Guard definition loaded from RON file.
#[derive(Deserialize, Clone, Debug)]
pub struct GuardDefinition {
    pub name: String,
    #[serde(default)]
    pub initial_state: StateType,
    #[serde(default)]
    pub view: ViewConfig,
    #[serde(default)]
    pub attack: AttackConfig,
    #[serde(default)]
    pub patrol: PatrolConfig,
    #[serde(default)]
    pub movement: MovementConfig,
    #[serde(default)]
    pub anchors: Option<AnchorOffsets>,
    #[serde(default)]
    pub collider: Option<ColliderConfig>,
}

impl GuardDefinition {
    /// Convert to the GuardConfig component.
    pub fn to_config(&self) -> GuardConfig {
        GuardConfig {
            initial_state: self.initial_state,
            view: self.view.clone(),
            attack: self.attack.clone(),
            patrol: self.patrol.clone(),
            anchors: self
                .anchors
                .map(|offsets| offsets.to_anchors())
                .unwrap_or_default(),
        }
    }

    /// Convert to the Steering component.
    pub fn to_steering(&self) -> Steering {
        Steering::new(self.movement.speed, self.movement.stopping_distance)
    }
}

/// Parse a guard definition from RON text. `origin` names the source in errors.
pub fn parse_guard_definition(
    contents: &str,
    origin: &str,
) -> Result<GuardDefinition, DataLoadError> {
    ron::from_str(contents).map_err(|e| DataLoadError::ParseError {
        path: origin.to_string(),
        details: e.to_string(),
    })
}

/// Read and parse a single guard definition file.
pub fn load_guard_definition(path: &Path) -> Result<GuardDefinition, DataLoadError> {
    if !path.exists() {
        return Err(DataLoadError::FileNotFound(path.display().to_string()));
    }

    let contents = fs::read_to_string(path).map_err(|e| DataLoadError::ReadError {
        path: path.display().to_string(),
        details: e.to_string(),
    })?;

    parse_guard_definition(&contents, &path.display().to_string())
}

/// Resource holding all loaded guard definitions.
#[derive(Resource, Default)]
pub struct GuardRegistry {
    pub definitions: HashMap<String, GuardDefinition>,
}

impl GuardRegistry {
    /// Get a guard definition by kind name.
    pub fn get(&self, kind: &str) -> Option<&GuardDefinition> {
        self.definitions.get(kind)
    }

    /// Load every `.ron` file in `dir`, keyed by file stem.
    ///
    /// Broken files are logged and skipped. Returns the number loaded.
    pub fn load_dir(&mut self, dir: &Path) -> usize {
        if !dir.exists() {
            warn!("Guard definitions directory not found: {:?}", dir);
            return 0;
        }

        let Ok(entries) = fs::read_dir(dir) else {
            warn!("Failed to read guard definitions directory");
            return 0;
        };

        let mut loaded = 0;
        for entry in entries.flatten() {
            let path = entry.path();

            if path.extension().is_some_and(|ext| ext == "ron") {
                let kind = path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("unknown")
                    .to_string();

                match load_guard_definition(&path) {
                    Ok(definition) => {
                        info!("Loaded guard definition: {} ({})", definition.name, kind);
                        self.definitions.insert(kind, definition);
                        loaded += 1;
                    }
                    Err(e) => {
                        error!("Failed to load guard definition: {}", e);
                    }
                }
            }
        }
        loaded
    }
}

/// Load all guard definitions from the assets/data/guards/ directory.
pub fn load_guard_definitions(mut registry: ResMut<GuardRegistry>) {
    registry.load_dir(Path::new(GUARD_DATA_DIR));

    info!("Loaded {} guard definitions", registry.definitions.len());
}
