//! Sentinel NPC - perception-driven guard AI for Bevy.
//!
//! A guard patrols a waypoint loop, notices its target through a view cone
//! with line-of-sight checks and short-term memory, chases it, and reports
//! melee contacts once it is within reach.
//!
//! # Architecture
//!
//! - **Core**: Errors, events, collision layer masks
//! - **Perception**: View cone, occlusion ray, vision memory
//! - **Contact**: Strike anchor overlap checks
//! - **Brain**: State machine and the Idle/Patrol/Chase/Attack behaviors
//! - **Guards**: ECS components, RON definitions, Rapier scene queries, systems
//! - **Sandbox**: Demo arena used by the binary

pub mod brain;
pub mod contact;
pub mod core;
pub mod guards;
pub mod perception;
pub mod sandbox;

use bevy::prelude::*;

/// Main plugin that adds all guard AI sub-plugins.
///
/// Rapier's physics plugin is expected to be added by the app.
pub struct SentinelPlugin;

impl Plugin for SentinelPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core events (must be first)
            .add_plugins(core::CorePlugin)

            // Guard brains, steering and animation sync
            .add_plugins(guards::GuardPlugin);
    }
}
