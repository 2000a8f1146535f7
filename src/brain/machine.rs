//! The state machine that owns a guard's behavior states.

use std::collections::HashMap;
use std::fmt;

use bevy::prelude::*;
use serde::Deserialize;

use super::context::GuardContext;
use crate::core::AiError;

/// Identifier of a behavior state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
pub enum StateType {
    /// Standing still until the target shows up.
    Idle,
    /// Walking the waypoint loop.
    #[default]
    Patrol,
    /// Running after the target.
    Chase,
    /// Within striking distance of the target.
    Attack,
}

/// One mode of guard conduct.
///
/// `execute` runs once per tick while the state is active and returns the
/// state to switch to, if any. `enter` and `exit` fire once per activation.
pub trait BehaviorState: Send + Sync {
    fn state_type(&self) -> StateType;

    fn enter(&mut self, _ctx: &mut GuardContext) {}

    fn execute(&mut self, ctx: &mut GuardContext) -> Option<StateType>;

    fn exit(&mut self, _ctx: &mut GuardContext) {}
}

/// A state change that actually happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: StateType,
    pub to: StateType,
}

/// Collects states before the machine starts. The set is frozen by `build`.
#[derive(Default)]
pub struct StateMachineBuilder {
    states: HashMap<StateType, Box<dyn BehaviorState>>,
}

impl StateMachineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a state under its own identifier.
    pub fn add_state(mut self, state: impl BehaviorState + 'static) -> Result<Self, AiError> {
        let state_type = state.state_type();
        if self.states.contains_key(&state_type) {
            return Err(AiError::DuplicateState(state_type));
        }
        self.states.insert(state_type, Box::new(state));
        Ok(self)
    }

    /// Start the machine in `initial`, running its `enter`.
    pub fn build(
        mut self,
        initial: StateType,
        ctx: &mut GuardContext,
    ) -> Result<StateMachine, AiError> {
        let state = self
            .states
            .get_mut(&initial)
            .ok_or(AiError::UnknownState(initial))?;
        state.enter(ctx);

        Ok(StateMachine {
            states: self.states,
            current: initial,
        })
    }
}

/// Holds exactly one active behavior state.
pub struct StateMachine {
    states: HashMap<StateType, Box<dyn BehaviorState>>,
    current: StateType,
}

impl fmt::Debug for StateMachine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateMachine")
            .field("current", &self.current)
            .field("states", &self.states.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl StateMachine {
    pub fn current_state_type(&self) -> StateType {
        self.current
    }

    /// Switch to `next`: exit the current state, then enter the new one.
    ///
    /// Asking for the state that is already active does nothing.
    pub fn transition_to(
        &mut self,
        next: StateType,
        ctx: &mut GuardContext,
    ) -> Result<Option<Transition>, AiError> {
        if next == self.current {
            return Ok(None);
        }
        if !self.states.contains_key(&next) {
            return Err(AiError::UnknownState(next));
        }

        let from = self.current;
        if let Some(state) = self.states.get_mut(&from) {
            state.exit(ctx);
        }
        self.current = next;
        if let Some(state) = self.states.get_mut(&next) {
            state.enter(ctx);
        }

        debug!("{:?}: {:?} -> {:?}", ctx.guard, from, next);
        Ok(Some(Transition { from, to: next }))
    }

    /// Execute the active state once and honor the transition it asks for.
    ///
    /// A freshly entered state first executes on the next call.
    pub fn update(&mut self, ctx: &mut GuardContext) -> Result<Option<Transition>, AiError> {
        let current = self.current;
        let state = self
            .states
            .get_mut(&current)
            .ok_or(AiError::UnknownState(current))?;

        match state.execute(ctx) {
            Some(next) => self.transition_to(next, ctx),
            None => Ok(None),
        }
    }
}
