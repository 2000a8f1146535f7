//! Patrol: walk the waypoint loop, pausing at each waypoint.

use crate::brain::{BehaviorState, GuardContext, StateType};

/// Waypoint cursor plus the deadline of the current pause, if any.
#[derive(Debug, Default)]
pub struct PatrolState {
    next_waypoint: usize,
    resume_at: Option<f32>,
}

impl PatrolState {
    pub fn is_pausing(&self) -> bool {
        self.resume_at.is_some()
    }

    fn move_to_next_waypoint(&mut self, ctx: &mut GuardContext) {
        let count = ctx.waypoints.len();
        if count == 0 {
            return;
        }

        ctx.move_to_waypoint(self.next_waypoint % count);
        self.next_waypoint = (self.next_waypoint + 1) % count;
    }

    fn begin_pause(&mut self, ctx: &mut GuardContext) {
        ctx.navigator.set_stopped(true);
        ctx.animator.trigger(&ctx.config.patrol.pause_trigger);
        self.resume_at = Some(ctx.now + ctx.config.patrol.pause_duration);
    }
}

impl BehaviorState for PatrolState {
    fn state_type(&self) -> StateType {
        StateType::Patrol
    }

    fn enter(&mut self, ctx: &mut GuardContext) {
        ctx.navigator.set_stopped(false);
        self.move_to_next_waypoint(ctx);
    }

    fn execute(&mut self, ctx: &mut GuardContext) -> Option<StateType> {
        if ctx.can_see_target() {
            return Some(StateType::Chase);
        }

        match self.resume_at {
            Some(deadline) if ctx.now >= deadline => {
                self.resume_at = None;
                ctx.navigator.set_stopped(false);
                self.move_to_next_waypoint(ctx);
            }
            Some(_) => {}
            // Nowhere to walk, so there is nothing to arrive at.
            None if ctx.waypoints.is_empty() => {}
            None if ctx.navigator.has_arrived() => self.begin_pause(ctx),
            None => {}
        }
        None
    }

    fn exit(&mut self, ctx: &mut GuardContext) {
        // A pause cut short by a transition must not resume later.
        self.resume_at = None;
        ctx.navigator.set_stopped(false);
    }
}
