//! Per-guard tuning, fixed for the guard's lifetime.

use bevy::prelude::*;
use serde::Deserialize;

use super::machine::StateType;
use crate::contact::StrikeAnchors;
use crate::core::LayerMask;
use crate::perception::ViewConfig;

/// Melee reach and strike detection.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct AttackConfig {
    /// Straight-line distance at which the guard switches to attacking.
    pub attack_range: f32,
    /// Radius of the overlap sphere around each striking anchor.
    pub strike_radius: f32,
    /// Layers strike overlaps can touch.
    pub strike_mask: LayerMask,
    /// Tag a collider must carry to count as a strike contact.
    pub target_tag: String,
}

impl Default for AttackConfig {
    fn default() -> Self {
        Self {
            attack_range: 2.0,
            strike_radius: 0.5,
            strike_mask: LayerMask::ALL,
            target_tag: "Player".to_string(),
        }
    }
}

/// Waypoint pause behavior.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct PatrolConfig {
    /// Seconds spent standing at each waypoint.
    pub pause_duration: f32,
    /// Animation trigger fired when a pause begins.
    pub pause_trigger: String,
}

impl Default for PatrolConfig {
    fn default() -> Self {
        Self {
            pause_duration: 5.0,
            pause_trigger: "doScream".to_string(),
        }
    }
}

/// Complete configuration of a guard brain.
#[derive(Component, Clone, Debug, Default, PartialEq)]
pub struct GuardConfig {
    /// State the brain starts in.
    pub initial_state: StateType,
    pub view: ViewConfig,
    pub attack: AttackConfig,
    pub patrol: PatrolConfig,
    pub anchors: StrikeAnchors,
}
