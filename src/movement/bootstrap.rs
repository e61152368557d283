//! Movement domain: tuning load and player bootstrap.

use std::fs;
use std::path::Path;

use avian3d::prelude::*;
use bevy::prelude::*;
use ron::extensions::Extensions;
use ron::Options;

use crate::camera::CameraRig;
use crate::movement::{GameLayer, MovementState, MovementTuning, Player};

const TUNING_PATH: &str = "assets/data/movement_tuning.ron";

/// Capsule radius and cylinder length. The full capsule stands 192 units
/// tall with its center at 96, matching the ground probe's expectations.
const CAPSULE_RADIUS: f32 = 34.0;
const CAPSULE_LENGTH: f32 = 124.0;

/// Camera height above the capsule center.
const EYE_HEIGHT: f32 = 60.0;

/// Error type for tuning load failures.
#[derive(Debug)]
pub struct TuningLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for TuningLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for TuningLoadError {}

/// RON options used for data files.
pub(crate) fn ron_options() -> Options {
    Options::default().with_default_extension(Extensions::IMPLICIT_SOME)
}

fn load_tuning_file(path: &Path) -> Result<MovementTuning, TuningLoadError> {
    let contents = fs::read_to_string(path).map_err(|e| TuningLoadError {
        file: path.display().to_string(),
        message: format!("IO error: {}", e),
    })?;

    ron_options().from_str(&contents).map_err(|e| TuningLoadError {
        file: path.display().to_string(),
        message: format!("Parse error: {}", e),
    })
}

/// Loads tuning from disk, keeping the built-in defaults when the file is
/// missing or malformed, then points engine gravity at the tuned value.
pub(crate) fn load_tuning(mut tuning: ResMut<MovementTuning>, mut gravity: ResMut<Gravity>) {
    match load_tuning_file(Path::new(TUNING_PATH)) {
        Ok(loaded) => {
            *tuning = loaded;
            info!("Loaded movement tuning from {}", TUNING_PATH);
        }
        Err(e) => {
            warn!("{}; using built-in defaults", e);
        }
    }

    gravity.0 = Vec3::NEG_Y * tuning.base_gravity;
    info!(
        "Movement tuning: walk={}, jump={} (apex {:.0}), wall_run={}, gravity={}, fall ramp {:.0}s",
        tuning.max_walk_speed,
        tuning.jump_speed,
        tuning.jump_apex_height(),
        tuning.wall_run_speed,
        tuning.base_gravity,
        tuning.fall_ramp_duration()
    );
}

pub(crate) fn spawn_player(mut commands: Commands) {
    commands
        .spawn((
            // Identity & State
            (Player, MovementState::default()),
            Transform::from_xyz(0.0, 200.0, 0.0),
            Visibility::default(),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::capsule(CAPSULE_RADIUS, CAPSULE_LENGTH),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                GravityScale(1.0),
                Friction::new(0.0),
                CollisionLayers::new(
                    GameLayer::Player,
                    [
                        GameLayer::Default,
                        GameLayer::Ground,
                        GameLayer::Wall,
                        GameLayer::Interactable,
                    ],
                ),
            ),
        ))
        .with_child((
            CameraRig::default(),
            Camera3d::default(),
            Transform::from_xyz(0.0, EYE_HEIGHT, 0.0),
        ));

    info!("Spawned player above the arena floor");
}
