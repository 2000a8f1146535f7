//! Guard systems - brain ticking, steering and animation parameter sync.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::components::*;
use super::scene::{EmptyScene, RapierScene};
use crate::brain::{
    standard_machine, sync_locomotion, CollisionQuery, GuardConfig, GuardContext, Navigator,
    TargetInfo,
};
use crate::core::{AnimationTriggered, GuardStateChanged, StrikeContact};
use crate::perception::{LogDiagnostics, NullDiagnostics, PerceptionDiagnostics, PerceptionMemory};

/// Run `f` against the Rapier scene, or an empty one if there is no physics context.
fn with_scene<R>(
    rapier_context: &Query<&RapierContext>,
    tags: &Query<&ContactTag>,
    exclude: Entity,
    f: impl FnOnce(&dyn CollisionQuery) -> R,
) -> R {
    match rapier_context.get_single() {
        Ok(context) => f(&RapierScene {
            context,
            tags,
            exclude,
        }),
        Err(_) => f(&EmptyScene),
    }
}

/// Bind unbound guards to the perception target, and unbind despawned targets.
pub fn bind_targets(
    target_query: Query<Entity, With<PerceptionTarget>>,
    mut guard_query: Query<&mut TrackedTarget, With<Guard>>,
) {
    let current = target_query.get_single().ok();

    for mut tracked in guard_query.iter_mut() {
        match tracked.0 {
            Some(entity) if target_query.get(entity).is_err() => tracked.0 = current,
            None if current.is_some() => tracked.0 = current,
            _ => {}
        }
    }
}

/// Build and start the state machine of newly spawned guards.
pub fn spawn_guard_brains(
    mut commands: Commands,
    time: Res<Time>,
    rapier_context: Query<&RapierContext>,
    tags: Query<&ContactTag>,
    target_query: Query<&Transform, (With<PerceptionTarget>, Without<Guard>)>,
    mut guard_query: Query<
        (
            Entity,
            &Transform,
            &GuardConfig,
            &Waypoints,
            &TrackedTarget,
            &mut Steering,
            &mut Locomotion,
        ),
        (With<Guard>, Without<GuardBrain>, Without<BrainError>),
    >,
) {
    let now = time.elapsed_secs();

    for (entity, transform, config, waypoints, tracked, mut steering, mut locomotion) in
        guard_query.iter_mut()
    {
        let target = resolve_target(tracked, &target_query);
        let mut memory = PerceptionMemory::new();
        let mut diagnostics = NullDiagnostics;

        let built = with_scene(&rapier_context, &tags, entity, |scene| {
            let mut ctx = GuardContext {
                guard: entity,
                transform: *transform,
                config,
                waypoints: &waypoints.0,
                target,
                now,
                memory: &mut memory,
                navigator: &mut *steering,
                animator: &mut *locomotion,
                scene,
                diagnostics: &mut diagnostics,
                strikes: Vec::new(),
            };
            standard_machine(config.initial_state, &mut ctx)
        });

        match built {
            Ok(machine) => {
                info!("Guard {:?} starts in {:?}", entity, machine.current_state_type());
                commands.entity(entity).insert(GuardBrain { machine, memory });
            }
            Err(e) => {
                error!("Guard {:?} has a broken state machine: {}", entity, e);
                commands.entity(entity).insert(BrainError(e));
            }
        }
    }
}

/// Tick every guard brain once.
pub fn tick_guards(
    time: Res<Time>,
    rapier_context: Query<&RapierContext>,
    tags: Query<&ContactTag>,
    target_query: Query<&Transform, (With<PerceptionTarget>, Without<Guard>)>,
    mut guard_query: Query<
        (
            Entity,
            &Transform,
            &GuardConfig,
            &Waypoints,
            &TrackedTarget,
            &mut GuardBrain,
            &mut Steering,
            &mut Locomotion,
        ),
        With<Guard>,
    >,
    mut state_events: EventWriter<GuardStateChanged>,
    mut strike_events: EventWriter<StrikeContact>,
) {
    let now = time.elapsed_secs();

    for (entity, transform, config, waypoints, tracked, mut brain, mut steering, mut locomotion) in
        guard_query.iter_mut()
    {
        let target = resolve_target(tracked, &target_query);
        let GuardBrain { machine, memory } = &mut *brain;

        let mut log_sink = LogDiagnostics { guard: entity };
        let mut null_sink = NullDiagnostics;
        let diagnostics: &mut dyn PerceptionDiagnostics = if config.view.trace_perception {
            &mut log_sink
        } else {
            &mut null_sink
        };

        let (result, strikes) = with_scene(&rapier_context, &tags, entity, |scene| {
            let mut ctx = GuardContext {
                guard: entity,
                transform: *transform,
                config,
                waypoints: &waypoints.0,
                target,
                now,
                memory,
                navigator: &mut *steering,
                animator: &mut *locomotion,
                scene,
                diagnostics,
                strikes: Vec::new(),
            };
            let result = machine.update(&mut ctx);
            (result, ctx.strikes)
        });

        match result {
            Ok(Some(transition)) => {
                state_events.send(GuardStateChanged {
                    guard: entity,
                    from: transition.from,
                    to: transition.to,
                });
            }
            Ok(None) => {}
            Err(e) => error!("Guard {:?} failed to update: {}", entity, e),
        }

        for target in strikes {
            strike_events.send(StrikeContact {
                attacker: entity,
                target,
            });
        }
    }
}

fn resolve_target(
    tracked: &TrackedTarget,
    target_query: &Query<&Transform, (With<PerceptionTarget>, Without<Guard>)>,
) -> Option<TargetInfo> {
    let entity = tracked.0?;
    let transform = target_query.get(entity).ok()?;
    Some(TargetInfo {
        entity,
        position: transform.translation,
    })
}

/// Walk guards toward their destination on the horizontal plane.
pub fn steer_guards(time: Res<Time>, mut query: Query<(&mut Transform, &mut Steering)>) {
    let dt = time.delta_secs();

    for (mut transform, mut steering) in query.iter_mut() {
        steering.pending = false;

        let Some(destination) = steering.destination else {
            steering.velocity = Vec3::ZERO;
            steering.remaining = 0.0;
            continue;
        };

        let to_goal = Vec3::new(
            destination.x - transform.translation.x,
            0.0,
            destination.z - transform.translation.z,
        );
        let distance = to_goal.length();

        if steering.is_stopped() || distance <= steering.stopping_distance {
            steering.velocity = Vec3::ZERO;
            steering.remaining = distance;
            continue;
        }

        let direction = to_goal / distance;
        let step = (steering.speed * dt).min(distance);
        transform.translation += direction * step;
        steering.velocity = direction * steering.speed;
        steering.remaining = distance - step;

        // Face the direction of travel
        let look_target = transform.translation + direction;
        transform.look_at(look_target, Vec3::Y);
    }
}

/// Feed the current speed into the locomotion blend parameter.
pub fn sync_locomotion_speed(mut query: Query<(&Steering, &mut Locomotion)>) {
    for (steering, mut locomotion) in query.iter_mut() {
        sync_locomotion(steering, &mut *locomotion);
    }
}

/// Publish animation triggers fired by guard brains.
pub fn flush_animation_triggers(
    mut query: Query<(Entity, &mut Locomotion)>,
    mut events: EventWriter<AnimationTriggered>,
) {
    for (entity, mut locomotion) in query.iter_mut() {
        for name in locomotion.drain_triggers() {
            debug!("{:?}: animation trigger '{}'", entity, name);
            events.send(AnimationTriggered { entity, name });
        }
    }
}
