//! Interactables domain: launch pads the player can trigger.

mod components;
mod systems;

pub use components::Launcher;

use bevy::prelude::*;

use crate::interactables::systems::fire_launchers;

pub struct InteractablesPlugin;

impl Plugin for InteractablesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, fire_launchers);
    }
}
