//! Interactables domain: launcher firing.

use bevy::prelude::*;

use crate::interactables::Launcher;
use crate::movement::{InteractEvent, LaunchEvent};

/// Turns interact dispatches into launches for targets that carry a
/// launcher. Other interactable targets are left alone.
pub(crate) fn fire_launchers(
    mut interactions: MessageReader<InteractEvent>,
    mut launches: MessageWriter<LaunchEvent>,
    launchers: Query<&Launcher>,
) {
    for interaction in interactions.read() {
        let Ok(launcher) = launchers.get(interaction.target) else {
            continue;
        };

        launches.write(LaunchEvent {
            player: interaction.player,
            power: launcher.power,
            upward_boost: launcher.upward_boost,
            duration: launcher.duration,
            direction: launcher.aim,
        });
        info!(
            "Launcher {:?} fired: power={}, duration={}",
            interaction.target, launcher.power, launcher.duration
        );
    }
}
