//! Movement domain: systems for the per-frame ability pipeline.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod interaction;
pub(crate) mod movement;
pub(crate) mod wallrun;

pub(crate) use collisions::detect_ground;
pub(crate) use input::read_input;
pub(crate) use interaction::{handle_interact, probe_interactable};
pub(crate) use movement::{
    apply_dash, apply_fall_gravity, apply_jump, apply_locomotion, start_launch, update_timers,
};
pub(crate) use wallrun::detect_wall_run;
