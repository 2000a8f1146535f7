//! Chase: follow the target until it is lost or within reach.

use crate::brain::{BehaviorState, GuardContext, StateType};

#[derive(Debug, Default)]
pub struct ChaseState;

impl BehaviorState for ChaseState {
    fn state_type(&self) -> StateType {
        StateType::Chase
    }

    fn execute(&mut self, ctx: &mut GuardContext) -> Option<StateType> {
        if !ctx.can_see_target() {
            return Some(StateType::Patrol);
        }

        if ctx.is_target_in_attack_range() {
            return Some(StateType::Attack);
        }

        if let Some(target) = ctx.target {
            ctx.navigator.set_destination(target.position);
        }
        None
    }
}
