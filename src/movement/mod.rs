//! Movement domain: first-person ability controller.
//!
//! One chained pipeline per frame: input, ground probe, timers, fall
//! gravity, locomotion, wall running, interaction probing, then the
//! discrete abilities (jump, dash, interact, launch).

mod bootstrap;
mod components;
mod events;
mod resources;
mod systems;

pub use components::{
    GameLayer, Ground, Interactable, MovementState, Player, WallRunSurface, WallSide,
};
pub use events::{InteractEvent, LaunchEvent};
pub use resources::{MovementInput, MovementTuning};

use bevy::prelude::*;

use crate::movement::systems::{
    apply_dash, apply_fall_gravity, apply_jump, apply_locomotion, detect_ground, detect_wall_run,
    handle_interact, probe_interactable, read_input, start_launch, update_timers,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .add_message::<InteractEvent>()
            .add_message::<LaunchEvent>()
            .add_systems(
                Startup,
                (bootstrap::load_tuning, bootstrap::spawn_player).chain(),
            )
            .add_systems(
                Update,
                (
                    read_input,
                    detect_ground,
                    update_timers,
                    apply_fall_gravity,
                    apply_locomotion,
                    detect_wall_run,
                    probe_interactable,
                    apply_jump,
                    apply_dash,
                    handle_interact,
                    start_launch,
                )
                    .chain(),
            );
    }
}
