//! Melee contact detection around the striking anchors.

use bevy::prelude::*;
use serde::Deserialize;

use crate::brain::CollisionQuery;
use crate::core::LayerMask;

/// Two striking points on the guard's body, as offsets from its origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrikeAnchors {
    pub primary: Vec3,
    pub secondary: Vec3,
}

impl Default for StrikeAnchors {
    fn default() -> Self {
        // Roughly where the hands of a 1.8m humanoid are mid-swing.
        Self {
            primary: Vec3::new(-0.4, 1.1, -0.5),
            secondary: Vec3::new(0.4, 1.1, -0.5),
        }
    }
}

/// Anchor offsets as written in data files.
#[derive(Deserialize, Clone, Copy, Debug)]
pub struct AnchorOffsets {
    pub primary: (f32, f32, f32),
    pub secondary: (f32, f32, f32),
}

impl AnchorOffsets {
    pub fn to_anchors(&self) -> StrikeAnchors {
        StrikeAnchors {
            primary: Vec3::new(self.primary.0, self.primary.1, self.primary.2),
            secondary: Vec3::new(self.secondary.0, self.secondary.1, self.secondary.2),
        }
    }
}

/// Find the first collider tagged `tag` within `radius` of an anchor.
///
/// Anchors are checked in order; within one anchor, the scene's report order
/// decides between several overlapping colliders.
pub fn try_get_contact(
    scene: &dyn CollisionQuery,
    anchors: [Vec3; 2],
    radius: f32,
    mask: LayerMask,
    tag: &str,
) -> Option<Entity> {
    anchors.into_iter().find_map(|anchor| {
        scene
            .overlap_sphere(anchor, radius, mask)
            .into_iter()
            .find(|&entity| scene.tag_of(entity) == Some(tag))
    })
}
