//! Movement domain: ground contact probing.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, MovementState, Player};

/// Reach of the ground ray, cast from just above the capsule's lowest point.
const GROUND_PROBE_REACH: f32 = 6.0;

/// Capsule half height used when the collider shape is not a capsule.
const FALLBACK_HALF_HEIGHT: f32 = 96.0;

/// Downward probe from the capsule feet. Feeds the grounded and falling
/// flags everything downstream keys off.
pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    mut query: Query<(Entity, &Transform, &Collider, &mut MovementState), With<Player>>,
) {
    for (entity, transform, collider, mut state) in &mut query {
        let filter =
            SpatialQueryFilter::from_mask(GameLayer::Ground).with_excluded_entities([entity]);

        let half_height = collider
            .shape_scaled()
            .as_capsule()
            .map(|capsule| capsule.half_height() + capsule.radius)
            .unwrap_or(FALLBACK_HALF_HEIGHT);
        let feet = transform.translation - Vec3::Y * (half_height - 1.0);

        let was_grounded = state.on_ground;
        let grounded = spatial_query
            .cast_ray(
                feet,
                Dir3::NEG_Y,
                GROUND_PROBE_REACH,
                true,
                &filter,
            )
            .is_some();

        refresh_ground_state(&mut state, grounded);

        if grounded && !was_grounded {
            debug!("Landed");
        } else if !grounded && was_grounded {
            debug!("Left the ground");
        }
    }
}

/// Grounded-frame bookkeeping. Abilities re-arm on every grounded frame,
/// not just the landing one.
pub(crate) fn refresh_ground_state(state: &mut MovementState, grounded: bool) {
    state.on_ground = grounded;
    state.falling = !grounded;

    if grounded {
        state.has_double_jumped = false;
        state.has_dashed = false;
    }
}
