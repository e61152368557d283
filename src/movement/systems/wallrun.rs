//! Movement domain: wall probing, attach/detach transitions, vertical hold.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, MovementState, MovementTuning, Player, WallRunSurface, WallSide};

/// Side probes for runnable walls. While airborne beside one, the player
/// attaches; when both probes lose the wall, the run ends. A grounded player
/// beside a wall neither attaches nor detaches.
pub(crate) fn detect_wall_run(
    spatial_query: SpatialQuery,
    tuning: Res<MovementTuning>,
    wall_surfaces: Query<(), With<WallRunSurface>>,
    mut query: Query<
        (Entity, &Transform, &mut MovementState, &mut LinearVelocity, &mut GravityScale),
        With<Player>,
    >,
) {
    for (entity, transform, mut state, mut velocity, mut gravity_scale) in &mut query {
        // Probing stays locked out for a beat after each detach
        if state.wall_probe_timer < tuning.wall_probe_delay {
            continue;
        }

        // Probes see all world geometry, so a closer body occludes a wall
        // behind it; only tagged surfaces attach
        let filter = SpatialQueryFilter::from_mask([
            GameLayer::Default,
            GameLayer::Ground,
            GameLayer::Wall,
            GameLayer::Interactable,
        ])
        .with_excluded_entities([entity]);
        let origin = transform.translation;
        let right = transform.right();

        // Right probe wins when both sides connect
        let right_hit = spatial_query
            .cast_ray(origin, right, tuning.wall_check_distance, true, &filter)
            .filter(|hit| wall_surfaces.contains(hit.entity));
        let left_hit = spatial_query
            .cast_ray(origin, -right, tuning.wall_check_distance, true, &filter)
            .filter(|hit| wall_surfaces.contains(hit.entity));

        let (side, hit) = if let Some(hit) = right_hit {
            (WallSide::Right, Some(hit))
        } else if let Some(hit) = left_hit {
            (WallSide::Left, Some(hit))
        } else {
            (WallSide::None, None)
        };

        match hit {
            Some(hit) if !state.on_ground => {
                // Track the surface normal on every valid probe, not just
                // the attaching one
                state.wall_normal = hit.normal;
                if attach_to_wall(
                    &mut state,
                    &mut velocity.0,
                    &mut gravity_scale.0,
                    hit.normal,
                    &tuning,
                ) {
                    debug!(
                        "Wall run attached: side={:?}, normal=({:.2}, {:.2}, {:.2})",
                        side, hit.normal.x, hit.normal.y, hit.normal.z
                    );
                }
            }
            Some(_) => {
                // Grounded beside a runnable wall: no transition either way
            }
            None => {
                if detach_from_wall(&mut state, &mut gravity_scale.0) {
                    debug!("Wall run detached: probes lost the wall");
                }
            }
        }

        hold_on_wall(&state, &mut velocity.0);
    }
}

/// Attach transition. Idempotent: returns false while already attached.
pub(crate) fn attach_to_wall(
    state: &mut MovementState,
    velocity: &mut Vec3,
    gravity_scale: &mut f32,
    wall_normal: Vec3,
    tuning: &MovementTuning,
) -> bool {
    if state.is_wall_running {
        return false;
    }

    state.is_wall_running = true;
    state.has_dashed = false;

    *gravity_scale = tuning.wall_run_gravity_scale;
    // Redirect along the wall plane at wall-run speed
    *velocity = velocity.reject_from(wall_normal).normalize_or_zero() * tuning.wall_run_speed;

    // The body stops auto-orienting so the camera can look around freely
    state.yaw_follows_look = false;
    true
}

/// Detach transition. Idempotent: returns false while already detached.
pub(crate) fn detach_from_wall(state: &mut MovementState, gravity_scale: &mut f32) -> bool {
    if !state.is_wall_running {
        return false;
    }

    state.is_wall_running = false;
    state.wall_normal = Vec3::ZERO;
    state.wall_probe_timer = 0.0;
    *gravity_scale = 1.0;
    state.yaw_follows_look = true;
    true
}

/// Per-frame vertical hold. Runs after gravity so the wall wins the frame.
pub(crate) fn hold_on_wall(state: &MovementState, velocity: &mut Vec3) {
    if state.is_wall_running {
        velocity.y = 0.0;
    }
}
