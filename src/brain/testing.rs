//! Hand-rolled collaborators for driving the brain in unit tests.

use std::cell::Cell;

use bevy::prelude::*;

use super::config::GuardConfig;
use super::context::{AnimationSink, CollisionQuery, GuardContext, Navigator, RayHit, TargetInfo};
use crate::core::LayerMask;
use crate::perception::{PerceptionMemory, PerceptionTrace};

#[derive(Debug, Clone, Copy)]
pub enum Shape {
    Aabb { min: Vec3, max: Vec3 },
    Sphere { center: Vec3, radius: f32 },
}

/// A collider in the test scene.
#[derive(Debug, Clone)]
pub struct Obstacle {
    pub shape: Shape,
    pub tag: Option<String>,
    pub layer: LayerMask,
}

impl Obstacle {
    pub fn aabb(min: Vec3, max: Vec3) -> Self {
        Self {
            shape: Shape::Aabb { min, max },
            tag: None,
            layer: LayerMask::layer(0),
        }
    }

    pub fn sphere(center: Vec3, radius: f32) -> Self {
        Self {
            shape: Shape::Sphere { center, radius },
            tag: None,
            layer: LayerMask::layer(0),
        }
    }

    pub fn with_tag(mut self, tag: &str) -> Self {
        self.tag = Some(tag.to_string());
        self
    }

    pub fn on_layer(mut self, layer: LayerMask) -> Self {
        self.layer = layer;
        self
    }

    fn ray_distance(&self, origin: Vec3, direction: Vec3) -> Option<f32> {
        match self.shape {
            Shape::Aabb { min, max } => {
                let inv = direction.recip();
                let t1 = (min - origin) * inv;
                let t2 = (max - origin) * inv;
                let near = t1.min(t2).max_element();
                let far = t1.max(t2).min_element();
                (far >= near.max(0.0)).then(|| near.max(0.0))
            }
            Shape::Sphere { center, radius } => {
                let offset = origin - center;
                let b = offset.dot(direction);
                let c = offset.length_squared() - radius * radius;
                let discriminant = b * b - c;
                if discriminant < 0.0 {
                    return None;
                }
                let root = discriminant.sqrt();
                if -b - root >= 0.0 {
                    Some(-b - root)
                } else if -b + root >= 0.0 {
                    Some(0.0)
                } else {
                    None
                }
            }
        }
    }

    fn overlaps_sphere(&self, point: Vec3, radius: f32) -> bool {
        match self.shape {
            Shape::Aabb { min, max } => {
                point.clamp(min, max).distance_squared(point) <= radius * radius
            }
            Shape::Sphere { center, radius: own } => center.distance(point) <= radius + own,
        }
    }
}

/// Brute-force scene over a list of obstacles, in insertion order.
#[derive(Default)]
pub struct TestScene {
    obstacles: Vec<(Entity, Obstacle)>,
    ray_casts: Cell<usize>,
}

impl TestScene {
    pub fn add_obstacle(&mut self, obstacle: Obstacle) -> Entity {
        let entity = Entity::from_raw(self.obstacles.len() as u32 + 1);
        self.obstacles.push((entity, obstacle));
        entity
    }

    /// A tagged target whose collider sits around the default aim point.
    pub fn add_target(&mut self, position: Vec3, radius: f32, tag: &str) -> Entity {
        self.add_obstacle(Obstacle::sphere(position + Vec3::Y * 0.5, radius).with_tag(tag))
    }

    /// Move an existing sphere collider.
    pub fn move_sphere(&mut self, entity: Entity, center: Vec3) {
        for (id, obstacle) in self.obstacles.iter_mut() {
            if *id == entity {
                if let Shape::Sphere { center: c, .. } = &mut obstacle.shape {
                    *c = center;
                }
            }
        }
    }

    pub fn ray_casts(&self) -> usize {
        self.ray_casts.get()
    }
}

impl CollisionQuery for TestScene {
    fn cast_ray(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        mask: LayerMask,
    ) -> Option<RayHit> {
        self.ray_casts.set(self.ray_casts.get() + 1);
        self.obstacles
            .iter()
            .filter(|(_, obstacle)| obstacle.layer.intersects(mask))
            .filter_map(|(entity, obstacle)| {
                obstacle
                    .ray_distance(origin, direction)
                    .filter(|&distance| distance <= max_distance)
                    .map(|distance| RayHit {
                        entity: *entity,
                        point: origin + direction * distance,
                        distance,
                    })
            })
            .min_by(|a, b| a.distance.total_cmp(&b.distance))
    }

    fn overlap_sphere(&self, center: Vec3, radius: f32, mask: LayerMask) -> Vec<Entity> {
        self.obstacles
            .iter()
            .filter(|(_, obstacle)| obstacle.layer.intersects(mask))
            .filter(|(_, obstacle)| obstacle.overlaps_sphere(center, radius))
            .map(|(entity, _)| *entity)
            .collect()
    }

    fn tag_of(&self, entity: Entity) -> Option<&str> {
        self.obstacles
            .iter()
            .find(|(id, _)| *id == entity)
            .and_then(|(_, obstacle)| obstacle.tag.as_deref())
    }
}

/// Navigator that records every destination it is given.
#[derive(Debug, Default)]
pub struct FakeNavigator {
    pub destinations: Vec<Vec3>,
    pub velocity: Vec3,
    pub stopped: bool,
    pub pending: bool,
    pub remaining: f32,
    pub stopping: f32,
}

impl FakeNavigator {
    pub fn destination(&self) -> Option<Vec3> {
        self.destinations.last().copied()
    }

    /// Pretend the body reached its destination.
    pub fn arrive(&mut self) {
        self.remaining = 0.0;
    }
}

impl Navigator for FakeNavigator {
    fn velocity(&self) -> Vec3 {
        self.velocity
    }

    fn set_destination(&mut self, destination: Vec3) {
        self.destinations.push(destination);
        self.remaining = 10.0;
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
        self.stopping
    }
}

#[derive(Debug, Default)]
pub struct RecordingAnimator {
    pub speed: f32,
    pub triggers: Vec<String>,
}

impl AnimationSink for RecordingAnimator {
    fn set_locomotion_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    fn trigger(&mut self, name: &str) {
        self.triggers.push(name.to_string());
    }
}

/// Owns one guard's worth of state so tests can build contexts on demand.
pub struct Harness {
    pub guard: Entity,
    pub transform: Transform,
    pub config: GuardConfig,
    pub waypoints: Vec<Vec3>,
    pub target: Option<TargetInfo>,
    pub now: f32,
    pub memory: PerceptionMemory,
    pub navigator: FakeNavigator,
    pub animator: RecordingAnimator,
    pub scene: TestScene,
    pub traces: Vec<PerceptionTrace>,
}

impl Default for Harness {
    fn default() -> Self {
        Self {
            guard: Entity::from_raw(1000),
            // Facing +Z.
            transform: Transform::IDENTITY.looking_to(Vec3::Z, Vec3::Y),
            config: GuardConfig::default(),
            waypoints: Vec::new(),
            target: None,
            now: 0.0,
            memory: PerceptionMemory::new(),
            navigator: FakeNavigator::default(),
            animator: RecordingAnimator::default(),
            scene: TestScene::default(),
            traces: Vec::new(),
        }
    }
}

impl Harness {
    /// Place a visible target in the scene.
    pub fn spawn_target(&mut self, position: Vec3) -> Entity {
        let entity = self.scene.add_target(position, 0.4, "Player");
        self.target = Some(TargetInfo { entity, position });
        entity
    }

    /// Move the bound target (and its collider).
    pub fn move_target(&mut self, position: Vec3) {
        if let Some(target) = self.target.as_mut() {
            target.position = position;
            self.scene.move_sphere(target.entity, position + Vec3::Y * 0.5);
        }
    }

    pub fn ctx(&mut self) -> GuardContext<'_> {
        GuardContext {
            guard: self.guard,
            transform: self.transform,
            config: &self.config,
            waypoints: &self.waypoints,
            target: self.target,
            now: self.now,
            memory: &mut self.memory,
            navigator: &mut self.navigator,
            animator: &mut self.animator,
            scene: &self.scene,
            diagnostics: &mut self.traces,
            strikes: Vec::new(),
        }
    }
}
