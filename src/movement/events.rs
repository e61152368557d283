//! Movement domain: event definitions for interaction and launches.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Fired when the player activates the interactable under the forward probe
#[derive(Debug)]
pub struct InteractEvent {
    pub player: Entity,
    pub target: Entity,
}

impl Message for InteractEvent {}

/// Fired by a launcher to override the player's velocity for a duration.
/// The applied velocity is `direction.normalize() * power`; see the launch
/// handler for how `upward_boost` is treated.
#[derive(Debug)]
pub struct LaunchEvent {
    pub player: Entity,
    pub power: f32,
    pub upward_boost: f32,
    pub duration: f32,
    pub direction: Vec3,
}

impl Message for LaunchEvent {}
