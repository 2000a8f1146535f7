//! Optional trace sink for perception decisions.
//!
//! Perception reports why it answered the way it did. Tests collect the
//! traces in a `Vec`, the game prints them with `debug!`, and by default
//! they are thrown away.

use bevy::prelude::*;

/// One perception decision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PerceptionTrace {
    /// No target is bound.
    NoTarget,
    /// Target lies outside the view cone. Angles in degrees.
    OutsideViewCone { angle: f32, half_angle: f32, remembered: bool },
    /// Target is farther than the view distance.
    OutOfRange { distance: f32, view_distance: f32, remembered: bool },
    /// The sight ray hit the target.
    Sighted { target: Entity, distance: f32 },
    /// The sight ray hit something else first.
    Obstructed { blocker: Entity, distance: f32, remembered: bool },
    /// The sight ray hit nothing within range.
    NoHit { remembered: bool },
}

/// Receiver for perception traces.
pub trait PerceptionDiagnostics {
    fn record(&mut self, trace: PerceptionTrace);
}

/// Discards every trace.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullDiagnostics;

impl PerceptionDiagnostics for NullDiagnostics {
    fn record(&mut self, _trace: PerceptionTrace) {}
}

/// Prints traces through the `debug!` log macro, tagged with the guard.
#[derive(Debug, Clone, Copy)]
pub struct LogDiagnostics {
    pub guard: Entity,
}

impl PerceptionDiagnostics for LogDiagnostics {
    fn record(&mut self, trace: PerceptionTrace) {
        match trace {
            PerceptionTrace::NoTarget => debug!("{:?}: no target bound", self.guard),
            PerceptionTrace::OutsideViewCone { angle, half_angle, remembered } => debug!(
                "{:?}: target outside view cone ({:.1}° > {:.1}°), remembered: {}",
                self.guard, angle, half_angle, remembered
            ),
            PerceptionTrace::OutOfRange { distance, view_distance, remembered } => debug!(
                "{:?}: target out of range ({:.2} > {:.2}), remembered: {}",
                self.guard, distance, view_distance, remembered
            ),
            PerceptionTrace::Sighted { target, distance } => {
                debug!("{:?}: sees {:?} at {:.2}", self.guard, target, distance)
            }
            PerceptionTrace::Obstructed { blocker, distance, remembered } => debug!(
                "{:?}: sight blocked by {:?} at {:.2}, remembered: {}",
                self.guard, blocker, distance, remembered
            ),
            PerceptionTrace::NoHit { remembered } => {
                debug!("{:?}: sight ray hit nothing, remembered: {}", self.guard, remembered)
            }
        }
    }
}

impl PerceptionDiagnostics for Vec<PerceptionTrace> {
    fn record(&mut self, trace: PerceptionTrace) {
        self.push(trace);
    }
}
