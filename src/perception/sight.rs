//! Field-of-view and line-of-sight test with short-term memory.

use bevy::prelude::*;
use serde::Deserialize;

use super::diagnostics::{PerceptionDiagnostics, PerceptionTrace};
use super::memory::PerceptionMemory;
use crate::brain::{CollisionQuery, TargetInfo};
use crate::core::LayerMask;

/// Vision parameters for a guard.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ViewConfig {
    /// Maximum sight distance from the eye.
    pub view_distance: f32,
    /// Full opening angle of the view cone, in degrees.
    pub view_angle: f32,
    /// Height of the eye above the guard's origin.
    pub eye_height: f32,
    /// Seconds the target stays "visible" after direct sight is lost.
    pub vision_persistence: f32,
    /// Height above the target's origin the guard aims at (center mass).
    pub target_aim_height: f32,
    /// Layers the sight ray can hit.
    pub sight_mask: LayerMask,
    /// Print every perception decision through `debug!`.
    pub trace_perception: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            view_distance: 10.0,
            view_angle: 90.0,
            eye_height: 1.6,
            vision_persistence: 0.5,
            target_aim_height: 0.5,
            sight_mask: LayerMask::ALL,
            trace_perception: false,
        }
    }
}

/// A single "can the guard see its target" query.
pub struct SightCheck<'a> {
    pub position: Vec3,
    pub forward: Vec3,
    pub target: Option<TargetInfo>,
    pub now: f32,
    pub view: &'a ViewConfig,
}

impl SightCheck<'_> {
    /// Run the query.
    ///
    /// Outside the cone, out of range, or with the ray blocked, the answer
    /// falls back to memory. Only an unobstructed hit on the target writes to
    /// `memory`.
    pub fn run(
        &self,
        memory: &mut PerceptionMemory,
        scene: &dyn CollisionQuery,
        diagnostics: &mut dyn PerceptionDiagnostics,
    ) -> bool {
        let Some(target) = self.target else {
            diagnostics.record(PerceptionTrace::NoTarget);
            return false;
        };

        let eye = self.position + Vec3::Y * self.view.eye_height;
        let aim = target.position + Vec3::Y * self.view.target_aim_height;
        let direction = (aim - eye).normalize_or_zero();
        let distance = eye.distance(aim);

        // Coincident eye and aim point: nothing to measure, nothing to block.
        if direction == Vec3::ZERO {
            memory.record_sighting(self.now);
            diagnostics.record(PerceptionTrace::Sighted {
                target: target.entity,
                distance,
            });
            return true;
        }

        let angle = self.forward.angle_between(direction).to_degrees();
        let half_angle = self.view.view_angle / 2.0;
        if angle > half_angle {
            let remembered = self.remembered(memory);
            diagnostics.record(PerceptionTrace::OutsideViewCone {
                angle,
                half_angle,
                remembered,
            });
            return remembered;
        }

        if distance > self.view.view_distance {
            let remembered = self.remembered(memory);
            diagnostics.record(PerceptionTrace::OutOfRange {
                distance,
                view_distance: self.view.view_distance,
                remembered,
            });
            return remembered;
        }

        match scene.cast_ray(eye, direction, self.view.view_distance, self.view.sight_mask) {
            Some(hit) if hit.entity == target.entity => {
                memory.record_sighting(self.now);
                diagnostics.record(PerceptionTrace::Sighted {
                    target: target.entity,
                    distance: hit.distance,
                });
                true
            }
            Some(hit) => {
                let remembered = self.remembered(memory);
                diagnostics.record(PerceptionTrace::Obstructed {
                    blocker: hit.entity,
                    distance: hit.distance,
                    remembered,
                });
                remembered
            }
            None => {
                let remembered = self.remembered(memory);
                diagnostics.record(PerceptionTrace::NoHit { remembered });
                remembered
            }
        }
    }

    fn remembered(&self, memory: &PerceptionMemory) -> bool {
        memory.seen_within(self.now, self.view.vision_persistence)
    }
}
