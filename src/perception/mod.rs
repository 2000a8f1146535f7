//! Perception module - what a guard can see and what it remembers seeing.

mod diagnostics;
mod memory;
mod sight;

pub use diagnostics::{LogDiagnostics, NullDiagnostics, PerceptionDiagnostics, PerceptionTrace};
pub use memory::PerceptionMemory;
pub use sight::{SightCheck, ViewConfig};
