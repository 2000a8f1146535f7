//! Contact module - melee reach checks around a guard's striking anchors.

mod detector;

pub use detector::{try_get_contact, AnchorOffsets, StrikeAnchors};
