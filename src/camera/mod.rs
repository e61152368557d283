//! Camera domain: first-person rig, mouse look, and cursor capture.

use bevy::input::mouse::MouseMotion;
use bevy::prelude::*;
use bevy::window::{CursorGrabMode, CursorOptions};

use crate::movement::{MovementState, Player};

/// Pitch envelope in degrees: 70 down, 80 up.
const PITCH_MIN_DEGREES: f32 = -70.0;
const PITCH_MAX_DEGREES: f32 = 80.0;

/// First-person camera state, attached to the camera child of the player.
///
/// Yaw normally turns the body directly. While the body is not following
/// the camera (wall-running), yaw accumulates in `yaw_offset` instead and
/// is folded back into the body when following resumes.
#[derive(Component, Debug)]
pub struct CameraRig {
    pub pitch: f32,
    pub yaw_offset: f32,
    pub sensitivity: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            pitch: 0.0,
            yaw_offset: 0.0,
            sensitivity: 0.0025,
        }
    }
}

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, grab_cursor)
            .add_systems(Update, (toggle_cursor, apply_look).chain());
    }
}

pub(crate) fn grab_cursor(mut cursor_options: Query<&mut CursorOptions, With<Window>>) {
    if let Ok(mut cursor) = cursor_options.single_mut() {
        cursor.grab_mode = CursorGrabMode::Locked;
        cursor.visible = false;
    }
}

/// Escape releases the cursor; left click grabs it back.
pub(crate) fn toggle_cursor(
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    mut cursor_options: Query<&mut CursorOptions, With<Window>>,
) {
    let Ok(mut cursor) = cursor_options.single_mut() else {
        return;
    };

    if keyboard.just_pressed(KeyCode::Escape) {
        cursor.grab_mode = CursorGrabMode::None;
        cursor.visible = true;
    }
    if mouse.just_pressed(MouseButton::Left) && cursor.grab_mode == CursorGrabMode::None {
        cursor.grab_mode = CursorGrabMode::Locked;
        cursor.visible = false;
    }
}

/// Mouse look: pitch on the rig, yaw on the body while it follows the look
/// direction, otherwise banked in the rig's yaw offset.
pub(crate) fn apply_look(
    mut mouse_motion: MessageReader<MouseMotion>,
    cursor_options: Query<&CursorOptions, With<Window>>,
    mut player_query: Query<(&mut Transform, &MovementState), With<Player>>,
    mut rig_query: Query<(&mut Transform, &mut CameraRig), Without<Player>>,
) {
    let grabbed = cursor_options
        .single()
        .map(|cursor| cursor.grab_mode != CursorGrabMode::None)
        .unwrap_or(false);

    let mut delta = Vec2::ZERO;
    if grabbed {
        for event in mouse_motion.read() {
            delta += event.delta;
        }
    } else {
        mouse_motion.clear();
    }

    let Ok((mut body, state)) = player_query.single_mut() else {
        return;
    };
    let Ok((mut rig_transform, mut rig)) = rig_query.single_mut() else {
        return;
    };

    rig.pitch = (rig.pitch - delta.y * rig.sensitivity)
        .clamp(PITCH_MIN_DEGREES.to_radians(), PITCH_MAX_DEGREES.to_radians());

    if state.yaw_follows_look {
        // Fold any wall-run look-around back into the body
        if rig.yaw_offset != 0.0 {
            body.rotation *= Quat::from_rotation_y(rig.yaw_offset);
            rig.yaw_offset = 0.0;
        }
        body.rotation *= Quat::from_rotation_y(-delta.x * rig.sensitivity);
    } else {
        rig.yaw_offset -= delta.x * rig.sensitivity;
    }

    rig_transform.rotation = Quat::from_rotation_y(rig.yaw_offset) * Quat::from_rotation_x(rig.pitch);
}
