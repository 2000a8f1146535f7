//! Sandbox module - a small demo arena for watching a guard work.

mod arena;
mod plugin;

pub use arena::ScriptedWalk;
pub use plugin::SandboxPlugin;
