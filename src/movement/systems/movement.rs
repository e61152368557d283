//! Movement domain: timers, fall gravity, locomotion, and ability systems.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::camera::CameraRig;
use crate::movement::systems::wallrun::detach_from_wall;
use crate::movement::{LaunchEvent, MovementInput, MovementState, MovementTuning, Player};

/// Body forward projected onto the horizontal plane.
pub(crate) fn flat_forward(transform: &Transform) -> Vec3 {
    let mut forward = *transform.forward();
    forward.y = 0.0;
    forward.normalize_or_zero()
}

// ============================================================================
// Timers
// ============================================================================

pub(crate) fn update_timers(time: Res<Time>, mut query: Query<&mut MovementState, With<Player>>) {
    let dt = time.delta_secs();

    for mut state in &mut query {
        track_ground_contact(&mut state, dt);

        // Accumulates every frame; the wall step gates probing on it
        state.wall_probe_timer += dt;

        tick_launch(&mut state, dt);
    }
}

/// Coyote bookkeeping: the timer runs only while airborne.
pub(crate) fn track_ground_contact(state: &mut MovementState, dt: f32) {
    if state.on_ground {
        state.coyote_timer = 0.0;
    } else {
        state.coyote_timer += dt;
    }
}

/// Launch countdown. Once the timer empties the launch goes inert; nothing
/// is restored beyond normal control resuming.
pub(crate) fn tick_launch(state: &mut MovementState, dt: f32) {
    if !state.is_launching {
        return;
    }

    state.launch_timer = (state.launch_timer - dt).max(0.0);
    if state.launch_timer == 0.0 {
        state.is_launching = false;
        debug!("Launch expired, control restored");
    }
}

// ============================================================================
// Gravity
// ============================================================================

pub(crate) fn apply_fall_gravity(
    time: Res<Time>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&mut MovementState, &mut LinearVelocity), With<Player>>,
) {
    let dt = time.delta_secs();

    for (mut state, mut velocity) in &mut query {
        ramp_fall_gravity(&mut state, &mut velocity.0, &tuning, dt);
    }
}

/// Extra downward acceleration that ramps up the longer the fall lasts.
/// Additive on top of engine gravity; it never overwrites the velocity.
pub(crate) fn ramp_fall_gravity(
    state: &mut MovementState,
    velocity: &mut Vec3,
    tuning: &MovementTuning,
    dt: f32,
) {
    if !state.falling {
        state.fall_gravity_multiplier = tuning.fall_gravity_min;
        return;
    }

    state.fall_gravity_multiplier = (state.fall_gravity_multiplier
        + dt * tuning.fall_gravity_scaler)
        .min(tuning.fall_gravity_max);
    velocity.y -= state.fall_gravity_multiplier * dt;
}

// ============================================================================
// Locomotion
// ============================================================================

pub(crate) fn apply_locomotion(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&Transform, &MovementState, &mut LinearVelocity), With<Player>>,
) {
    let dt = time.delta_secs();

    for (transform, state, mut velocity) in &mut query {
        // Wall-run and launches own the velocity while they are active
        if state.is_wall_running || state.is_launching {
            continue;
        }

        let wish_dir = (*transform.right() * input.move_axis.x
            + flat_forward(transform) * input.move_axis.y)
            .normalize_or_zero();
        steer_horizontal(&mut velocity.0, wish_dir, state.on_ground, &tuning, dt);
    }
}

/// Accelerates lateral velocity toward the input direction. Airborne input
/// has reduced authority; airborne braking uses the falling deceleration.
pub(crate) fn steer_horizontal(
    velocity: &mut Vec3,
    wish_dir: Vec3,
    on_ground: bool,
    tuning: &MovementTuning,
    dt: f32,
) {
    let horizontal = Vec3::new(velocity.x, 0.0, velocity.z);

    let steered = if wish_dir.length_squared() > 0.01 {
        let accel = if on_ground {
            tuning.ground_accel
        } else {
            tuning.ground_accel * tuning.air_control
        };
        horizontal.move_towards(wish_dir * tuning.max_walk_speed, accel * dt)
    } else {
        let decel = if on_ground {
            tuning.ground_accel
        } else {
            tuning.braking_decel_falling
        };
        horizontal.move_towards(Vec3::ZERO, decel * dt)
    };

    velocity.x = steered.x;
    velocity.z = steered.z;
}

// ============================================================================
// Jump
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum JumpKind {
    WallRun,
    Coyote,
    Ground,
    Double,
}

pub(crate) fn apply_jump(
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut player_query: Query<
        (&Transform, &mut MovementState, &mut LinearVelocity, &mut GravityScale),
        With<Player>,
    >,
    camera_query: Query<&Transform, With<CameraRig>>,
) {
    if !input.jump_just_pressed {
        return;
    }

    for (transform, mut state, mut velocity, mut gravity_scale) in &mut player_query {
        let body_forward = flat_forward(transform);
        let camera_forward = camera_query
            .single()
            .map(|rig| (transform.rotation * rig.rotation) * Vec3::NEG_Z)
            .unwrap_or(body_forward);

        match resolve_jump(
            &mut state,
            &mut velocity.0,
            &mut gravity_scale.0,
            body_forward,
            camera_forward,
            &tuning,
        ) {
            Some(kind) => debug!(
                "Jump resolved: {:?}, velocity=({:.0}, {:.0}, {:.0})",
                kind, velocity.x, velocity.y, velocity.z
            ),
            None => debug!("Jump declined: airborne with double jump spent"),
        }
    }
}

/// Picks exactly one jump variant per request. First matching branch wins:
/// wall-run jump, coyote jump, ground jump, then double jump.
pub(crate) fn resolve_jump(
    state: &mut MovementState,
    velocity: &mut Vec3,
    gravity_scale: &mut f32,
    body_forward: Vec3,
    camera_forward: Vec3,
    tuning: &MovementTuning,
) -> Option<JumpKind> {
    // Jump off the wall along the camera heading
    if state.is_wall_running {
        let mut forward = camera_forward;
        forward.y = 0.0;
        forward = forward.normalize_or_zero();

        // Facing into the wall: slide the heading onto the wall plane
        if forward.dot(state.wall_normal) < 0.0 {
            forward = forward.reject_from(state.wall_normal).normalize_or_zero();
        }

        *velocity = forward * tuning.wall_run_speed;
        velocity.y = tuning.jump_speed;
        state.previous_direction = body_forward;
        state.has_double_jumped = false;
        detach_from_wall(state, gravity_scale);
        return Some(JumpKind::WallRun);
    }

    // Coyote: jump shortly after walking off an edge, keeping lateral speed
    if !state.on_ground && state.coyote_timer <= tuning.coyote_time {
        velocity.y = tuning.jump_speed;
        state.previous_direction = body_forward;
        state.has_double_jumped = false;
        return Some(JumpKind::Coyote);
    }

    if state.on_ground {
        velocity.y = tuning.jump_speed;
        state.previous_direction = body_forward;
        state.has_double_jumped = false;
        return Some(JumpKind::Ground);
    }

    // Double jump: redirect along the camera heading, once per air phase
    if !state.has_double_jumped && state.falling {
        let mut forward = camera_forward;
        forward.y = 0.0;
        forward = forward.normalize_or_zero();

        *velocity = forward * tuning.double_jump_forward_boost + Vec3::Y * tuning.jump_speed;
        state.has_double_jumped = true;
        return Some(JumpKind::Double);
    }

    None
}

// ============================================================================
// Dash
// ============================================================================

pub(crate) fn apply_dash(
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&Transform, &mut MovementState, &mut LinearVelocity), With<Player>>,
) {
    if !input.dash_just_pressed {
        return;
    }

    for (transform, mut state, mut velocity) in &mut query {
        let forward = flat_forward(transform);
        if try_dash(&mut state, &mut velocity.0, forward, &tuning) {
            debug!(
                "Dash applied: direction=({:.2}, {:.2}, {:.2})",
                forward.x, forward.y, forward.z
            );
        }
    }
}

/// One forward burst per air phase, declined on the ground and on walls.
/// The burst replaces the whole velocity rather than adding to it.
pub(crate) fn try_dash(
    state: &mut MovementState,
    velocity: &mut Vec3,
    body_forward: Vec3,
    tuning: &MovementTuning,
) -> bool {
    if state.has_dashed || !state.falling || state.is_wall_running {
        return false;
    }

    state.has_dashed = true;

    let mut dash_velocity = body_forward * tuning.dash_power;
    dash_velocity.y += tuning.dash_upward_boost;
    *velocity = dash_velocity;
    true
}

// ============================================================================
// Launch
// ============================================================================

pub(crate) fn start_launch(
    mut events: MessageReader<LaunchEvent>,
    mut query: Query<(&mut MovementState, &mut LinearVelocity, &mut GravityScale), With<Player>>,
) {
    for event in events.read() {
        let Ok((mut state, mut velocity, mut gravity_scale)) = query.get_mut(event.player) else {
            warn!("Launch event for missing player entity {:?}", event.player);
            continue;
        };

        // An attached wall run would re-zero vertical velocity; end it first
        if detach_from_wall(&mut state, &mut gravity_scale.0) {
            debug!("Wall run detached: launched");
        }

        apply_launch(
            &mut state,
            &mut velocity.0,
            event.power,
            event.duration,
            event.direction,
        );
        debug!(
            "Launch started: power={}, upward_boost={}, duration={:.2}",
            event.power, event.upward_boost, event.duration
        );
    }
}

/// Velocity override from a launcher: the normalized direction scaled by
/// power. A zero direction stops the player instead of picking one.
pub(crate) fn apply_launch(
    state: &mut MovementState,
    velocity: &mut Vec3,
    power: f32,
    duration: f32,
    direction: Vec3,
) {
    *velocity = direction.normalize_or_zero() * power;
    state.is_launching = true;
    state.launch_timer = duration;
}
