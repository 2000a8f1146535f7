//! Everything a behavior state can see and touch during one tick.
//!
//! The brain never reaches into the ECS. The guard tick system gathers the
//! guard's transform, configuration and collaborators into a `GuardContext`
//! and hands it to the state machine. The collaborators are small traits so
//! the states can be driven by Rapier in the game and by fakes in tests.

use bevy::prelude::*;

use super::config::GuardConfig;
use crate::contact::try_get_contact;
use crate::core::LayerMask;
use crate::perception::{PerceptionDiagnostics, PerceptionMemory, SightCheck};

/// Movement delegate that walks the guard toward a destination.
pub trait Navigator {
    /// Current velocity of the moving body.
    fn velocity(&self) -> Vec3;
    /// Point the guard should walk to.
    fn set_destination(&mut self, destination: Vec3);
    /// Whether movement is halted.
    fn is_stopped(&self) -> bool;
    fn set_stopped(&mut self, stopped: bool);
    /// Whether a route to the destination is still being computed.
    fn path_pending(&self) -> bool;
    /// Distance left to the destination.
    fn remaining_distance(&self) -> f32;
    /// Distance at which the destination counts as reached.
    fn stopping_distance(&self) -> f32;

    /// Route known and destination within stopping distance.
    fn has_arrived(&self) -> bool {
        !self.path_pending() && self.remaining_distance() <= self.stopping_distance()
    }
}

/// Animation parameters the brain is allowed to write.
pub trait AnimationSink {
    /// Continuous locomotion speed parameter.
    fn set_locomotion_speed(&mut self, speed: f32);
    /// Fire a one-shot trigger by name.
    fn trigger(&mut self, name: &str);
}

/// Copy the body's current speed into the locomotion blend parameter.
pub fn sync_locomotion(navigator: &dyn Navigator, animator: &mut dyn AnimationSink) {
    animator.set_locomotion_speed(navigator.velocity().length());
}

/// Nearest hit of a ray cast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub entity: Entity,
    pub point: Vec3,
    pub distance: f32,
}

/// Read-only scene queries. Implementations must be reentrant.
pub trait CollisionQuery {
    /// Nearest collider hit by a ray, within `max_distance`.
    fn cast_ray(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        mask: LayerMask,
    ) -> Option<RayHit>;

    /// Every collider overlapping a sphere, in the provider's report order.
    fn overlap_sphere(&self, center: Vec3, radius: f32, mask: LayerMask) -> Vec<Entity>;

    /// Tag attached to a collider, if any.
    fn tag_of(&self, entity: Entity) -> Option<&str>;
}

/// The tracked target as seen this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetInfo {
    pub entity: Entity,
    pub position: Vec3,
}

/// One guard's view of the world for a single tick.
pub struct GuardContext<'a> {
    pub guard: Entity,
    pub transform: Transform,
    pub config: &'a GuardConfig,
    pub waypoints: &'a [Vec3],
    pub target: Option<TargetInfo>,
    /// Simulation time in seconds.
    pub now: f32,
    pub memory: &'a mut PerceptionMemory,
    pub navigator: &'a mut dyn Navigator,
    pub animator: &'a mut dyn AnimationSink,
    pub scene: &'a dyn CollisionQuery,
    pub diagnostics: &'a mut dyn PerceptionDiagnostics,
    /// Strike contacts reported during this tick.
    pub strikes: Vec<Entity>,
}

impl GuardContext<'_> {
    /// Whether the guard currently perceives its target, directly or from
    /// short-term memory. A direct sighting refreshes the memory.
    pub fn can_see_target(&mut self) -> bool {
        let check = SightCheck {
            position: self.transform.translation,
            forward: self.transform.forward().as_vec3(),
            target: self.target,
            now: self.now,
            view: &self.config.view,
        };
        check.run(self.memory, self.scene, self.diagnostics)
    }

    /// Straight-line distance to the target is within attack range.
    pub fn is_target_in_attack_range(&self) -> bool {
        let Some(target) = self.target else {
            return false;
        };
        self.transform.translation.distance(target.position) <= self.config.attack.attack_range
    }

    /// World positions of the two striking anchors, primary first.
    pub fn strike_points(&self) -> [Vec3; 2] {
        let anchors = &self.config.anchors;
        [
            self.transform.transform_point(anchors.primary),
            self.transform.transform_point(anchors.secondary),
        ]
    }

    /// First tagged collider touching either striking anchor.
    pub fn find_strike_contact(&self) -> Option<Entity> {
        let attack = &self.config.attack;
        try_get_contact(
            self.scene,
            self.strike_points(),
            attack.strike_radius,
            attack.strike_mask,
            &attack.target_tag,
        )
    }

    /// Send the navigator to `waypoints[index]`, if it exists.
    pub fn move_to_waypoint(&mut self, index: usize) -> bool {
        let Some(&point) = self.waypoints.get(index) else {
            return false;
        };
        self.navigator.set_destination(point);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brain::testing::{FakeNavigator, RecordingAnimator};

    #[test]
    fn locomotion_speed_is_velocity_magnitude() {
        let navigator = FakeNavigator {
            velocity: Vec3::new(3.0, 0.0, 4.0),
            ..Default::default()
        };
        let mut animator = RecordingAnimator::default();

        sync_locomotion(&navigator, &mut animator);
        assert_eq!(animator.speed, 5.0);
    }

    #[test]
    fn resting_body_reports_zero_speed() {
        let navigator = FakeNavigator::default();
        let mut animator = RecordingAnimator {
            speed: 2.0,
            ..Default::default()
        };

        sync_locomotion(&navigator, &mut animator);
        assert_eq!(animator.speed, 0.0);
    }
}
