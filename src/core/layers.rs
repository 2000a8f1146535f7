//! Collision layer masks used by sight rays and strike overlaps.

use serde::Deserialize;

/// Bitmask of collision layers a query is allowed to hit.
///
/// Stored as a plain `u32` in data files so RON definitions can write
/// `sight_mask: 0x0003`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct LayerMask(pub u32);

impl LayerMask {
    /// Every layer.
    pub const ALL: Self = Self(u32::MAX);
    /// No layer at all; queries with this mask never hit anything.
    pub const NONE: Self = Self(0);

    /// Single-layer mask for layer `index` (0-31).
    pub const fn layer(index: u32) -> Self {
        Self(1 << (index & 31))
    }

    /// Whether any layer of `other` is also in this mask.
    pub fn intersects(self, other: LayerMask) -> bool {
        self.0 & other.0 != 0
    }

    pub fn bits(self) -> u32 {
        self.0
    }
}

impl Default for LayerMask {
    fn default() -> Self {
        Self::ALL
    }
}
