//! Debug overlay for movement iteration.
//!
//! Features:
//! - Live movement-state readout (F1 or backtick)
//! - Probe ray gizmos mirroring the pipeline's casts

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::{MovementInput, MovementState, MovementTuning, Player};

// ============================================================================
// Debug State Resource
// ============================================================================

/// Resource tracking debug overlay state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether the movement info overlay is visible
    pub show_info: bool,
}

/// Marker for the movement info overlay
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;

// ============================================================================
// Plugin
// ============================================================================

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Update, (toggle_info_overlay, draw_probe_rays))
            .add_systems(
                Update,
                update_info_overlay.run_if(|state: Res<DebugState>| state.show_info),
            );
    }
}

// ============================================================================
// Systems
// ============================================================================

/// Toggle the info overlay with F1 or backtick key
fn toggle_info_overlay(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    let toggle = keyboard.just_pressed(KeyCode::F1) || keyboard.just_pressed(KeyCode::Backquote);
    if !toggle {
        return;
    }

    debug_state.show_info = !debug_state.show_info;
    info!(
        "[DEBUG] Movement info {}",
        if debug_state.show_info { "ON" } else { "OFF" }
    );

    if debug_state.show_info {
        spawn_info_overlay(&mut commands);
    } else {
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
    }
}

/// Update the info overlay with current movement state
fn update_info_overlay(
    input: Res<MovementInput>,
    player_query: Query<(&Transform, &MovementState, &LinearVelocity, &GravityScale), With<Player>>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
) {
    if let (Some((transform, state, velocity, gravity_scale)), Ok(mut text)) =
        (player_query.iter().next(), overlay_query.single_mut())
    {
        let pos = transform.translation;
        **text = format!(
            "Pos: ({:.0}, {:.0}, {:.0})\n\
             Vel: ({:.0}, {:.0}, {:.0})\n\
             Grounded: {}  Falling: {}\n\
             Coyote: {:.3}s  Probe lockout: {:.3}s\n\
             Wall run: {}  Normal: ({:.2}, {:.2}, {:.2})\n\
             Gravity scale: {:.2}  Fall mult: {:.1}\n\
             Double jump spent: {}  Dash spent: {}\n\
             Launching: {} ({:.2}s)\n\
             Interact target: {:?}\n\
             Move axis: ({:.1}, {:.1})  Jump held: {}",
            pos.x,
            pos.y,
            pos.z,
            velocity.x,
            velocity.y,
            velocity.z,
            state.on_ground,
            state.falling,
            state.coyote_timer,
            state.wall_probe_timer,
            state.is_wall_running,
            state.wall_normal.x,
            state.wall_normal.y,
            state.wall_normal.z,
            gravity_scale.0,
            state.fall_gravity_multiplier,
            state.has_double_jumped,
            state.has_dashed,
            state.is_launching,
            state.launch_timer,
            state.interact_target,
            input.move_axis.x,
            input.move_axis.y,
            input.jump_held,
        );
    }
}

/// Mirror the pipeline's rays: heading, side wall probes, interaction probe
fn draw_probe_rays(
    mut gizmos: Gizmos,
    tuning: Res<MovementTuning>,
    player_query: Query<(&Transform, &MovementState), With<Player>>,
) {
    for (transform, state) in &player_query {
        let origin = transform.translation;
        let forward = *transform.forward();
        let right = *transform.right();

        // Heading
        gizmos.line(origin, origin + forward * 500.0, Color::srgb(0.2, 0.9, 0.9));

        // Wall probes
        gizmos.line(
            origin,
            origin + right * tuning.wall_check_distance,
            Color::srgb(0.2, 0.4, 0.9),
        );
        gizmos.line(
            origin,
            origin - right * tuning.wall_check_distance,
            Color::srgb(0.9, 0.3, 0.3),
        );

        // Interaction probe, green while a target is in range
        let interact_color = if state.can_interact() {
            Color::srgb(0.2, 0.9, 0.2)
        } else {
            Color::srgb(0.9, 0.3, 0.3)
        };
        gizmos.line(
            origin,
            origin + forward * tuning.interact_distance,
            interact_color,
        );
    }
}

// ============================================================================
// UI Spawning Helpers
// ============================================================================

fn spawn_info_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new("Loading..."),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(20.0),
            bottom: Val::Px(20.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ZIndex(500),
    ));
}
