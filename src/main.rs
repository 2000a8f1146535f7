//! Sentinel NPC - Sandbox
//!
//! Opens a small arena with one patrolling guard and a target walking a
//! scripted loop. Guard state changes and strike contacts are logged.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

fn main() {
    App::new()
        // Bevy default plugins
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Sentinel NPC Sandbox".to_string(),
                resolution: (1280.0, 720.0).into(),
                ..default()
            }),
            ..default()
        }))

        // Physics
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default())

        // Guard AI
        .add_plugins(sentinel_npc::SentinelPlugin)

        // Demo scene
        .add_plugins(sentinel_npc::sandbox::SandboxPlugin)

        .run();
}
