//! Guard and target spawning.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::components::*;
use super::data::GuardDefinition;

/// Spawn a guard from its definition. The brain is attached on the next update.
pub fn spawn_guard(
    commands: &mut Commands,
    kind: &str,
    definition: &GuardDefinition,
    position: Vec3,
    waypoints: Vec<Vec3>,
) -> Entity {
    let collider_config = definition.collider.clone().unwrap_or_default();

    // Face the first waypoint so the guard starts out looking where it walks.
    let mut transform = Transform::from_translation(position);
    if let Some(first) = waypoints.first() {
        let look_target = Vec3::new(first.x, position.y, first.z);
        if look_target != position {
            transform.look_at(look_target, Vec3::Y);
        }
    }

    let guard = commands
        .spawn((
            Guard,
            GuardKind(kind.to_string()),
            definition.to_config(),
            definition.to_steering(),
            Locomotion::default(),
            Waypoints(waypoints),
            TrackedTarget::default(),
            transform,
            Collider::capsule_y(collider_config.half_height, collider_config.radius),
            RigidBody::KinematicPositionBased,
        ))
        .id();

    info!("Spawned guard {} ({:?}) at {:?}", definition.name, guard, position);
    guard
}

/// Spawn the entity guards watch for.
pub fn spawn_perception_target(commands: &mut Commands, position: Vec3, tag: &str) -> Entity {
    commands
        .spawn((
            PerceptionTarget,
            ContactTag(tag.to_string()),
            Transform::from_translation(position),
            Collider::capsule_y(0.5, 0.3),
            RigidBody::KinematicPositionBased,
        ))
        .id()
}
