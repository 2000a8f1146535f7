//! Guards module - binds guard brains to Bevy entities and Rapier physics.

mod components;
pub mod data;
mod plugin;
mod scene;
mod spawning;
mod systems;

pub use components::*;
pub use data::{GuardDefinition, GuardRegistry};
pub use plugin::GuardPlugin;
pub use scene::{EmptyScene, RapierScene};
pub use spawning::{spawn_guard, spawn_perception_target};
pub use systems::{
    bind_targets, flush_animation_triggers, spawn_guard_brains, steer_guards, sync_locomotion_speed,
    tick_guards,
};
