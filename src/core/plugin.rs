//! Core plugin that registers the events guards communicate through.

use bevy::prelude::*;

use super::events::*;

/// Core plugin - must be added first as other plugins depend on it.
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<GuardStateChanged>()
            .add_event::<StrikeContact>()
            .add_event::<AnimationTriggered>();
    }
}
