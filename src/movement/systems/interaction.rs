//! Movement domain: forward interaction probe and interact dispatch.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::systems::movement::flat_forward;
use crate::movement::{
    GameLayer, InteractEvent, Interactable, MovementInput, MovementState, MovementTuning, Player,
};

/// Forward probe for interactable targets. Runs every frame; the cached
/// target is only valid until the next probe.
pub(crate) fn probe_interactable(
    spatial_query: SpatialQuery,
    tuning: Res<MovementTuning>,
    interactables: Query<(), With<Interactable>>,
    mut query: Query<(Entity, &Transform, &mut MovementState), With<Player>>,
) {
    for (entity, transform, mut state) in &mut query {
        // Nearest solid hit wins, so geometry in the way hides the target
        let filter = SpatialQueryFilter::from_mask([
            GameLayer::Default,
            GameLayer::Ground,
            GameLayer::Wall,
            GameLayer::Interactable,
        ])
        .with_excluded_entities([entity]);

        let Ok(forward) = Dir3::new(flat_forward(transform)) else {
            state.interact_target = None;
            continue;
        };

        state.interact_target = spatial_query
            .cast_ray(
                transform.translation,
                forward,
                tuning.interact_distance,
                true,
                &filter,
            )
            .filter(|hit| interactables.contains(hit.entity))
            .map(|hit| hit.entity);
    }
}

pub(crate) fn handle_interact(
    input: Res<MovementInput>,
    mut events: MessageWriter<InteractEvent>,
    query: Query<(Entity, &MovementState), With<Player>>,
) {
    if !input.interact_just_pressed {
        return;
    }

    for (player, state) in &query {
        let Some(target) = state.interact_target else {
            continue;
        };
        events.write(InteractEvent { player, target });
        debug!("Interacting with {:?}", target);
    }
}
