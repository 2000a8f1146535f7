//! Core module - errors, events and collision layers shared by every other module.

mod error;
mod events;
mod layers;
mod plugin;

pub use error::{AiError, DataLoadError};
pub use events::*;
pub use layers::LayerMask;
pub use plugin::CorePlugin;
