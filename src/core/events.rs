//! Events guards send to the rest of the simulation.
//!
//! The brain itself never talks to other systems. The guard tick system turns
//! what happened during a tick into these events so that combat, audio or
//! debugging code can react without depending on the AI internals.

use bevy::prelude::*;

use crate::brain::StateType;

/// Sent when a guard's active behavior state changes.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct GuardStateChanged {
    /// The guard whose brain transitioned
    pub guard: Entity,
    /// State that was exited
    pub from: StateType,
    /// State that was entered
    pub to: StateType,
}

/// Sent when a guard's striking anchor touches a tagged target.
///
/// Damage is up to whoever listens.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrikeContact {
    /// The attacking guard
    pub attacker: Entity,
    /// The collider that was struck
    pub target: Entity,
}

/// Sent when a guard fires a one-shot animation trigger.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct AnimationTriggered {
    pub entity: Entity,
    pub name: String,
}
