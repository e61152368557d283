//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Every movement constant in one place. Loaded from
/// `assets/data/movement_tuning.ron` at startup; these defaults apply when
/// the file is missing or fails to parse.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementTuning {
    /// World gravity magnitude, applied by the physics engine and scaled
    /// per-body through its gravity scale.
    pub base_gravity: f32,
    pub max_walk_speed: f32,
    pub ground_accel: f32,
    /// Fraction of ground acceleration available while airborne.
    pub air_control: f32,
    /// Deceleration applied while airborne with no input held.
    pub braking_decel_falling: f32,
    pub jump_speed: f32,
    pub coyote_time: f32,
    pub double_jump_forward_boost: f32,
    /// Extra downward acceleration while falling, ramping between these
    /// bounds at `fall_gravity_scaler` per second.
    pub fall_gravity_min: f32,
    pub fall_gravity_max: f32,
    pub fall_gravity_scaler: f32,
    /// Side probing is skipped until the probe timer passes this. The timer
    /// resets on wall detach, so this is also the re-attach lockout.
    pub wall_probe_delay: f32,
    pub wall_check_distance: f32,
    pub wall_run_gravity_scale: f32,
    pub wall_run_speed: f32,
    pub dash_power: f32,
    pub dash_upward_boost: f32,
    pub interact_distance: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            base_gravity: 980.0,
            max_walk_speed: 600.0,
            ground_accel: 2048.0,
            air_control: 0.5,
            braking_decel_falling: 1500.0,
            jump_speed: 420.0,
            coyote_time: 0.2,
            double_jump_forward_boost: 600.0,
            fall_gravity_min: 10.0,
            fall_gravity_max: 100.0,
            fall_gravity_scaler: 5.0,
            wall_probe_delay: 0.1,
            wall_check_distance: 100.0,
            wall_run_gravity_scale: 0.2,
            wall_run_speed: 600.0,
            dash_power: 100.0,
            dash_upward_boost: 300.0,
            interact_distance: 100.0,
        }
    }
}

impl MovementTuning {
    /// Apex height of a single jump from flat ground, h = v² / (2g).
    /// Ignores the fall ramp, which only engages on the way down.
    pub fn jump_apex_height(&self) -> f32 {
        self.jump_speed * self.jump_speed / (2.0 * self.base_gravity)
    }

    /// Seconds of continuous falling before the fall-gravity ramp saturates.
    pub fn fall_ramp_duration(&self) -> f32 {
        (self.fall_gravity_max - self.fall_gravity_min) / self.fall_gravity_scaler
    }
}

/// Pre-decoded per-frame input, written by `read_input` and consumed by the
/// ability pipeline.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    /// x = right, y = forward, each in [-1, 1]
    pub move_axis: Vec2,
    pub jump_just_pressed: bool,
    pub jump_held: bool,
    pub dash_just_pressed: bool,
    pub interact_just_pressed: bool,
}
