//! Guard plugin - registers all guard systems.

use bevy::prelude::*;

use super::data::{load_guard_definitions, GuardRegistry};
use super::systems;

/// Guard plugin - handles definition loading, brains, steering and animation sync.
pub struct GuardPlugin;

impl Plugin for GuardPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GuardRegistry>()
            .add_systems(Startup, load_guard_definitions)
            // One brain tick per frame, then movement, then animation parameters
            .add_systems(
                Update,
                (
                    systems::bind_targets,
                    systems::spawn_guard_brains,
                    systems::tick_guards,
                    systems::steer_guards,
                    systems::sync_locomotion_speed,
                    systems::flush_animation_triggers,
                )
                    .chain(),
            );
    }
}
