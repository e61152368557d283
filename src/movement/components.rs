//! Movement domain: components and physics layers for the ability controller.

use avian3d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Wall surfaces probed by the side rays
    Wall,
    /// Player character
    Player,
    /// Actors the forward probe can target
    Interactable,
}

#[derive(Component, Debug)]
pub struct Player;

/// Per-player ability state, mutated by the movement pipeline each frame.
#[derive(Component, Debug, Clone)]
pub struct MovementState {
    pub on_ground: bool,
    /// Airborne, moving up or down. Wall-running counts as falling.
    pub falling: bool,
    pub has_double_jumped: bool,
    pub has_dashed: bool,
    /// Accumulates while airborne, zeroed while grounded. Gates the coyote jump.
    pub coyote_timer: f32,
    /// Accumulates every frame; side probing waits until it passes the probe
    /// delay. Zeroed on wall detach, which gives a lockout before re-attach.
    pub wall_probe_timer: f32,
    /// Ramped extra fall acceleration, reset to the minimum while not falling.
    pub fall_gravity_multiplier: f32,
    pub is_wall_running: bool,
    /// Normal of the attached wall; zero while detached.
    pub wall_normal: Vec3,
    /// Whether the body yaw tracks the camera. Off during wall-run.
    pub yaw_follows_look: bool,
    pub is_launching: bool,
    pub launch_timer: f32,
    /// Interactable under the forward probe this frame, if any.
    pub interact_target: Option<Entity>,
    /// Forward vector recorded by the last wall-run, coyote, or ground jump.
    pub previous_direction: Vec3,
}

impl Default for MovementState {
    fn default() -> Self {
        Self {
            on_ground: false,
            falling: false,
            has_double_jumped: false,
            has_dashed: false,
            coyote_timer: 0.0,
            wall_probe_timer: 0.0,
            fall_gravity_multiplier: 10.0,
            is_wall_running: false,
            wall_normal: Vec3::ZERO,
            yaw_follows_look: true,
            is_launching: false,
            launch_timer: 0.0,
            interact_target: None,
            previous_direction: Vec3::ZERO,
        }
    }
}

impl MovementState {
    pub fn can_interact(&self) -> bool {
        self.interact_target.is_some()
    }
}

/// Side a wall probe connected on. Right wins when both rays hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WallSide {
    #[default]
    None,
    Left,
    Right,
}

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for walls the side probes may attach to. Walls without this
/// marker block the rays but never start a wall-run.
#[derive(Component, Debug)]
pub struct WallRunSurface;

/// Marker for actors the forward probe reports as interaction targets
#[derive(Component, Debug)]
pub struct Interactable;
