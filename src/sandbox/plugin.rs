//! Sandbox plugin - builds the arena and narrates what the guard does.

use bevy::prelude::*;

use super::arena::{setup_arena, walk_scripted_targets};
use crate::core::{GuardStateChanged, StrikeContact};
use crate::guards::data::load_guard_definitions;

/// Demo arena with one guard and a scripted target.
pub struct SandboxPlugin;

impl Plugin for SandboxPlugin {
    fn build(&self, app: &mut App) {
        app
            // Arena needs guard definitions to exist
            .add_systems(Startup, setup_arena.after(load_guard_definitions))
            .add_systems(Update, (walk_scripted_targets, log_guard_events));
    }
}

/// Print guard state changes and strikes.
fn log_guard_events(
    mut state_events: EventReader<GuardStateChanged>,
    mut strike_events: EventReader<StrikeContact>,
) {
    for event in state_events.read() {
        info!("Guard {:?}: {:?} -> {:?}", event.guard, event.from, event.to);
    }
    for event in strike_events.read() {
        info!("Guard {:?} struck {:?}", event.attacker, event.target);
    }
}
