//! Brain module - the guard's state machine and its behavior states.
//!
//! The brain is engine-agnostic: it only talks to the world through
//! [`GuardContext`] and the collaborator traits defined next to it. The
//! `guards` module is what binds it to Bevy and Rapier.

mod config;
mod context;
mod machine;
pub mod states;

#[cfg(test)]
pub(crate) mod testing;

pub use config::{AttackConfig, GuardConfig, PatrolConfig};
pub use context::{
    sync_locomotion, AnimationSink, CollisionQuery, GuardContext, Navigator, RayHit, TargetInfo,
};
pub use machine::{BehaviorState, StateMachine, StateMachineBuilder, StateType, Transition};
pub use states::standard_machine;
