//! Rapier-backed scene queries for guard brains.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::components::ContactTag;
use crate::brain::{CollisionQuery, RayHit};
use crate::core::LayerMask;

/// Sight rays and strike overlaps against the Rapier world.
///
/// The querying guard's own collider is excluded from every query.
pub struct RapierScene<'a, 'w, 's, 't> {
    pub context: &'a RapierContext,
    pub tags: &'a Query<'w, 's, &'t ContactTag>,
    pub exclude: Entity,
}

impl RapierScene<'_, '_, '_, '_> {
    fn filter(&self, mask: LayerMask) -> QueryFilter<'static> {
        QueryFilter::default()
            .exclude_collider(self.exclude)
            .groups(CollisionGroups::new(
                Group::ALL,
                Group::from_bits_truncate(mask.bits()),
            ))
    }
}

impl CollisionQuery for RapierScene<'_, '_, '_, '_> {
    fn cast_ray(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        mask: LayerMask,
    ) -> Option<RayHit> {
        self.context
            .cast_ray(origin, direction, max_distance, true, self.filter(mask))
            .map(|(entity, distance)| RayHit {
                entity,
                point: origin + direction * distance,
                distance,
            })
    }

    fn overlap_sphere(&self, center: Vec3, radius: f32, mask: LayerMask) -> Vec<Entity> {
        let shape = Collider::ball(radius);
        let mut hits = Vec::new();

        self.context.intersections_with_shape(
            center,
            Quat::IDENTITY,
            &shape,
            self.filter(mask),
            |hit_entity| {
                hits.push(hit_entity);
                true // Continue checking other entities
            },
        );
        hits
    }

    fn tag_of(&self, entity: Entity) -> Option<&str> {
        self.tags.get(entity).ok().map(|tag| tag.0.as_str())
    }
}

/// Scene with nothing in it, used when no physics context exists.
///
/// Rays never hit, so guards only ever see the target from memory.
pub struct EmptyScene;

impl CollisionQuery for EmptyScene {
    fn cast_ray(
        &self,
        _origin: Vec3,
        _direction: Vec3,
        _max_distance: f32,
        _mask: LayerMask,
    ) -> Option<RayHit> {
        None
    }

    fn overlap_sphere(&self, _center: Vec3, _radius: f32, _mask: LayerMask) -> Vec<Entity> {
        Vec::new()
    }

    fn tag_of(&self, _entity: Entity) -> Option<&str> {
        None
    }
}
