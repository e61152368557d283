//! Interactables domain: launcher components.

use bevy::prelude::*;

/// A pad that hurls interacting players along its aim vector.
#[derive(Component, Debug, Clone)]
pub struct Launcher {
    pub power: f32,
    /// Forwarded with the launch; the velocity override itself comes from
    /// `aim` and `power` alone.
    pub upward_boost: f32,
    /// How long the launch locks out normal control, in seconds.
    pub duration: f32,
    /// Aim direction, normalized when the launch applies.
    pub aim: Vec3,
}

impl Default for Launcher {
    fn default() -> Self {
        Self {
            power: 100.0,
            upward_boost: 300.0,
            duration: 1.0,
            aim: Vec3::Y,
        }
    }
}
