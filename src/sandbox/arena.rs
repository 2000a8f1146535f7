//! Arena construction and the scripted target walk.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::guards::{spawn_guard, spawn_perception_target, GuardRegistry};

/// Guard definition the arena spawns.
const GUARD_KIND: &str = "sentry";

/// Moves an entity around a closed loop of points at constant speed.
#[derive(Component, Debug, Clone)]
pub struct ScriptedWalk {
    pub points: Vec<Vec3>,
    pub next: usize,
    pub speed: f32,
}

/// Spawn ground, an occluding wall, camera, light, the target and one guard.
pub fn setup_arena(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    registry: Res<GuardRegistry>,
) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 24.0, 20.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 8000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(EulerRot::XYZ, -1.0, 0.5, 0.0)),
    ));

    // Ground
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(30.0, 0.2, 30.0))),
        MeshMaterial3d(materials.add(Color::srgb(0.25, 0.25, 0.28))),
        Transform::from_xyz(0.0, -0.1, 0.0),
        Collider::cuboid(15.0, 0.1, 15.0),
    ));

    // Wall in the middle of the patrol loop, tall enough to block sight
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(6.0, 3.0, 0.5))),
        MeshMaterial3d(materials.add(Color::srgb(0.45, 0.4, 0.35))),
        Transform::from_xyz(0.0, 1.5, 0.0),
        Collider::cuboid(3.0, 1.5, 0.25),
    ));

    let target = spawn_perception_target(&mut commands, Vec3::new(-8.0, 0.8, 6.0), "Player");
    commands.entity(target).insert((
        ScriptedWalk {
            points: vec![
                Vec3::new(-8.0, 0.8, 6.0),
                Vec3::new(8.0, 0.8, 6.0),
                Vec3::new(8.0, 0.8, 12.0),
                Vec3::new(-8.0, 0.8, 12.0),
            ],
            next: 1,
            speed: 2.5,
        },
        Mesh3d(meshes.add(Capsule3d::new(0.3, 1.0))),
        MeshMaterial3d(materials.add(Color::srgb(0.2, 0.5, 0.9))),
    ));

    let Some(definition) = registry.get(GUARD_KIND) else {
        warn!("No guard definition '{}' found, arena has no guard", GUARD_KIND);
        return;
    };

    let waypoints = vec![
        Vec3::new(-10.0, 0.95, -10.0),
        Vec3::new(10.0, 0.95, -10.0),
        Vec3::new(10.0, 0.95, 10.0),
        Vec3::new(-10.0, 0.95, 10.0),
    ];
    let guard = spawn_guard(
        &mut commands,
        GUARD_KIND,
        definition,
        Vec3::new(-10.0, 0.95, 0.0),
        waypoints,
    );
    commands.entity(guard).insert((
        Mesh3d(meshes.add(Capsule3d::new(0.35, 1.2))),
        MeshMaterial3d(materials.add(Color::srgb(0.8, 0.2, 0.15))),
    ));
}

/// Advance scripted walkers along their loop.
pub fn walk_scripted_targets(
    time: Res<Time>,
    mut query: Query<(&mut Transform, &mut ScriptedWalk)>,
) {
    let dt = time.delta_secs();

    for (mut transform, mut walk) in query.iter_mut() {
        let step = walk.speed * dt;
        transform.translation = walk.advance(transform.translation, step);
    }
}

impl ScriptedWalk {
    /// Move `position` up to `step` toward the next point, wrapping at the end.
    pub fn advance(&mut self, position: Vec3, step: f32) -> Vec3 {
        let Some(&goal) = self.points.get(self.next) else {
            return position;
        };

        let to_goal = goal - position;
        let distance = to_goal.length();

        if distance <= step {
            self.next = (self.next + 1) % self.points.len();
            goal
        } else {
            position + to_goal / distance * step
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> ScriptedWalk {
        ScriptedWalk {
            points: vec![Vec3::ZERO, Vec3::new(4.0, 0.0, 0.0)],
            next: 1,
            speed: 1.0,
        }
    }

    #[test]
    fn walk_moves_toward_next_point() {
        let mut walk = square();
        let position = walk.advance(Vec3::ZERO, 1.5);

        assert_eq!(position, Vec3::new(1.5, 0.0, 0.0));
        assert_eq!(walk.next, 1);
    }

    #[test]
    fn walk_wraps_around_loop() {
        let mut walk = square();
        let position = walk.advance(Vec3::new(3.5, 0.0, 0.0), 1.0);

        assert_eq!(position, Vec3::new(4.0, 0.0, 0.0));
        assert_eq!(walk.next, 0);
    }

    #[test]
    fn empty_walk_stays_put() {
        let mut walk = ScriptedWalk {
            points: Vec::new(),
            next: 0,
            speed: 1.0,
        };
        assert_eq!(walk.advance(Vec3::ONE, 1.0), Vec3::ONE);
    }
}
