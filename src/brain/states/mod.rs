//! The four guard behaviors and the standard machine wiring them together.

mod attack;
mod chase;
mod idle;
mod patrol;

pub use attack::AttackState;
pub use chase::ChaseState;
pub use idle::IdleState;
pub use patrol::PatrolState;

use super::{GuardContext, StateMachine, StateMachineBuilder, StateType};
use crate::core::AiError;

/// Build a machine holding Idle, Patrol, Chase and Attack, started in `initial`.
pub fn standard_machine(
    initial: StateType,
    ctx: &mut GuardContext,
) -> Result<StateMachine, AiError> {
    StateMachineBuilder::new()
        .add_state(IdleState)?
        .add_state(PatrolState::default())?
        .add_state(ChaseState)?
        .add_state(AttackState::default())?
        .build(initial, ctx)
}

#[cfg(test)]
mod tests {
    use bevy::prelude::*;

    use super::*;
    use crate::brain::testing::Harness;

    #[test]
    fn standard_machine_starts_patrolling() {
        let mut harness = Harness {
            waypoints: vec![Vec3::new(0.0, 0.0, -8.0), Vec3::new(8.0, 0.0, -8.0)],
            ..Default::default()
        };

        let machine = standard_machine(StateType::Patrol, &mut harness.ctx()).unwrap();

        assert_eq!(machine.current_state_type(), StateType::Patrol);
        assert_eq!(harness.navigator.destinations, vec![Vec3::new(0.0, 0.0, -8.0)]);
    }

    #[test]
    fn full_pursuit_cycle() {
        let mut harness = Harness {
            waypoints: vec![Vec3::new(0.0, 0.0, -8.0), Vec3::new(8.0, 0.0, -8.0)],
            ..Default::default()
        };
        let mut machine = standard_machine(StateType::Patrol, &mut harness.ctx()).unwrap();

        // Target walks into view.
        harness.spawn_target(Vec3::new(0.0, 0.0, 6.0));
        harness.now = 1.0;
        machine.update(&mut harness.ctx()).unwrap();
        assert_eq!(machine.current_state_type(), StateType::Chase);

        // Chase steers toward the target.
        harness.now = 1.1;
        machine.update(&mut harness.ctx()).unwrap();
        assert_eq!(harness.navigator.destination(), Some(Vec3::new(0.0, 0.0, 6.0)));

        // Target closes in.
        harness.move_target(Vec3::new(0.0, 0.0, 1.5));
        harness.now = 1.2;
        machine.update(&mut harness.ctx()).unwrap();
        assert_eq!(machine.current_state_type(), StateType::Attack);

        // Target backs off but stays visible.
        harness.move_target(Vec3::new(0.0, 0.0, 4.0));
        harness.now = 1.3;
        machine.update(&mut harness.ctx()).unwrap();
        assert_eq!(machine.current_state_type(), StateType::Chase);

        // Target slips behind the guard; memory runs out.
        harness.move_target(Vec3::new(0.0, 0.0, -4.0));
        harness.now = 1.5;
        machine.update(&mut harness.ctx()).unwrap();
        assert_eq!(machine.current_state_type(), StateType::Chase);

        harness.now = 1.8;
        machine.update(&mut harness.ctx()).unwrap();
        assert_eq!(machine.current_state_type(), StateType::Patrol);

        // Re-entering patrol heads on to the next waypoint.
        assert_eq!(harness.navigator.destination(), Some(Vec3::new(8.0, 0.0, -8.0)));
    }

    #[test]
    fn idle_guard_wakes_up_on_sight() {
        let mut harness = Harness::default();
        let mut machine = standard_machine(StateType::Idle, &mut harness.ctx()).unwrap();

        machine.update(&mut harness.ctx()).unwrap();
        assert_eq!(machine.current_state_type(), StateType::Idle);

        harness.spawn_target(Vec3::new(0.0, 0.0, 5.0));
        machine.update(&mut harness.ctx()).unwrap();
        assert_eq!(machine.current_state_type(), StateType::Chase);
    }
}
