//! Attack: stay on the target while it is within reach and report strikes.

use bevy::prelude::*;

use crate::brain::{BehaviorState, GuardContext, StateType};

/// Remembers the collider touched on the previous tick so a single swing
/// through the target reports one contact, not one per frame.
#[derive(Debug, Default)]
pub struct AttackState {
    touching: Option<Entity>,
}

impl BehaviorState for AttackState {
    fn state_type(&self) -> StateType {
        StateType::Attack
    }

    fn enter(&mut self, _ctx: &mut GuardContext) {
        self.touching = None;
    }

    fn execute(&mut self, ctx: &mut GuardContext) -> Option<StateType> {
        if !ctx.is_target_in_attack_range() {
            return Some(StateType::Chase);
        }

        let contact = ctx.find_strike_contact();
        if let Some(struck) = contact {
            if self.touching != Some(struck) {
                ctx.strikes.push(struck);
            }
        }
        self.touching = contact;
        None
    }
}
