//! Guard-related components.

use bevy::prelude::*;

use crate::brain::{AnimationSink, Navigator, StateMachine, StateType};
use crate::core::AiError;
use crate::perception::PerceptionMemory;

/// Marker component for all guards.
#[derive(Component)]
pub struct Guard;

/// Guard definition identifier (matches RON file name).
#[derive(Component, Clone, Debug)]
pub struct GuardKind(pub String);

/// Marker for the entity guards try to perceive (usually the player).
#[derive(Component)]
pub struct PerceptionTarget;

/// Tag checked by strike contact detection.
#[derive(Component, Clone, Debug, PartialEq, Eq)]
pub struct ContactTag(pub String);

/// Ordered patrol waypoints in world space.
#[derive(Component, Clone, Debug, Default)]
pub struct Waypoints(pub Vec<Vec3>);

/// The entity this guard watches for. `None` until bound.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct TrackedTarget(pub Option<Entity>);

/// A guard's state machine and perception memory.
///
/// Inserted once the guard has been spawned and its states entered.
#[derive(Component, Debug)]
pub struct GuardBrain {
    pub machine: StateMachine,
    pub memory: PerceptionMemory,
}

impl GuardBrain {
    pub fn current_state(&self) -> StateType {
        self.machine.current_state_type()
    }
}

/// Set instead of [`GuardBrain`] when the brain could not be built.
#[derive(Component, Debug)]
pub struct BrainError(pub AiError);

/// Straight-line movement toward a destination.
///
/// Setting a destination marks the path as pending until the next steering
/// pass has measured the remaining distance.
#[derive(Component, Clone, Debug)]
pub struct Steering {
    pub speed: f32,
    pub stopping_distance: f32,
    pub destination: Option<Vec3>,
    pub stopped: bool,
    pub velocity: Vec3,
    pub remaining: f32,
    pub pending: bool,
}

impl Steering {
    pub fn new(speed: f32, stopping_distance: f32) -> Self {
        Self {
            speed,
            stopping_distance,
            destination: None,
            stopped: false,
            velocity: Vec3::ZERO,
            remaining: 0.0,
            pending: false,
        }
    }
}

impl Default for Steering {
    fn default() -> Self {
        Self::new(3.5, 0.5)
    }
}

impl Navigator for Steering {
    fn velocity(&self) -> Vec3 {
        self.velocity
    }

    fn set_destination(&mut self, destination: Vec3) {
        self.destination = Some(destination);
        self.pending = true;
    }

    fn is_stopped(&self) -> bool {
        self.stopped
    }

    fn set_stopped(&mut self, stopped: bool) {
        self.stopped = stopped;
    }

    fn path_pending(&self) -> bool {
        self.pending
    }

    fn remaining_distance(&self) -> f32 {
        self.remaining
    }

    fn stopping_distance(&self) -> f32 {
        self.stopping_distance
    }
}

/// Animation parameters written by the brain and the locomotion sync.
#[derive(Component, Debug, Default)]
pub struct Locomotion {
    /// "CharacterSpeed" blend parameter.
    pub speed: f32,
    pending_triggers: Vec<String>,
}

impl Locomotion {
    /// Take the triggers fired since the last call.
    pub fn drain_triggers(&mut self) -> Vec<String> {
        std::mem::take(&mut self.pending_triggers)
    }
}

impl AnimationSink for Locomotion {
    fn set_locomotion_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    fn trigger(&mut self, name: &str) {
        self.pending_triggers.push(name.to_string());
    }
}
