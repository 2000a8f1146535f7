//! Idle: stand still until the target is perceived.

use crate::brain::{BehaviorState, GuardContext, StateType};

#[derive(Debug, Default)]
pub struct IdleState;

impl BehaviorState for IdleState {
    fn state_type(&self) -> StateType {
        StateType::Idle
    }

    fn execute(&mut self, ctx: &mut GuardContext) -> Option<StateType> {
        ctx.can_see_target().then_some(StateType::Chase)
    }
}

#[cfg(test)]
mod tests {
    use bevy::prelude::*;

    use super::*;
    use crate::brain::testing::Harness;

    #[test]
    fn stays_idle_without_target() {
        let mut harness = Harness::default();
        let mut idle = IdleState;

        assert_eq!(idle.execute(&mut harness.ctx()), None);
        assert!(harness.navigator.destinations.is_empty());
    }

    #[test]
    fn spotting_target_starts_chase() {
        let mut harness = Harness::default();
        harness.spawn_target(Vec3::new(0.0, 0.0, 5.0));
        let mut idle = IdleState;

        assert_eq!(idle.execute(&mut harness.ctx()), Some(StateType::Chase));
    }
}
