//! World domain: arena spawning.
//!
//! A sandbox arena sized in centimeters: a floor, a wall-run corridor, a
//! plain practice wall, a high platform, and one launch pad aimed at it.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::interactables::Launcher;
use crate::movement::{GameLayer, Ground, Interactable, WallRunSurface};

pub(crate) fn spawn_arena(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let floor_color = Color::srgb(0.35, 0.4, 0.35);
    let run_wall_color = Color::srgb(0.25, 0.3, 0.45);
    let plain_wall_color = Color::srgb(0.3, 0.3, 0.3);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);
    let pad_color = Color::srgb(0.4, 0.6, 0.9);

    // Floor
    commands.spawn((
        Ground,
        Mesh3d(meshes.add(Cuboid::new(4000.0, 50.0, 4000.0))),
        MeshMaterial3d(materials.add(floor_color)),
        Transform::from_xyz(0.0, -25.0, 0.0),
        RigidBody::Static,
        Collider::cuboid(4000.0, 50.0, 4000.0),
        CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]),
    ));

    // Wall-run corridor: two runnable walls ahead of the spawn, faces
    // 180 units apart so the side probes reach both from the middle
    for side in [-1.0, 1.0] {
        commands.spawn((
            WallRunSurface,
            Mesh3d(meshes.add(Cuboid::new(70.0, 600.0, 1600.0))),
            MeshMaterial3d(materials.add(run_wall_color)),
            Transform::from_xyz(side * 125.0, 300.0, -1200.0),
            RigidBody::Static,
            Collider::cuboid(70.0, 600.0, 1600.0),
            CollisionLayers::new([GameLayer::Wall, GameLayer::Ground], [GameLayer::Player]),
        ));
    }

    // Practice wall with no run surface: probes hit it, nothing attaches
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(70.0, 400.0, 600.0))),
        MeshMaterial3d(materials.add(plain_wall_color)),
        Transform::from_xyz(-400.0, 200.0, 200.0),
        RigidBody::Static,
        Collider::cuboid(70.0, 400.0, 600.0),
        CollisionLayers::new([GameLayer::Wall, GameLayer::Ground], [GameLayer::Player]),
    ));

    // Platform past the corridor
    commands.spawn((
        Ground,
        Mesh3d(meshes.add(Cuboid::new(400.0, 30.0, 400.0))),
        MeshMaterial3d(materials.add(platform_color)),
        Transform::from_xyz(0.0, 150.0, -2400.0),
        RigidBody::Static,
        Collider::cuboid(400.0, 30.0, 400.0),
        CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]),
    ));

    // Launch pad aimed up the corridor toward the platform
    commands.spawn((
        Interactable,
        Launcher {
            power: 1200.0,
            upward_boost: 300.0,
            duration: 1.0,
            aim: Vec3::new(-0.2, 0.5, -1.0),
        },
        Mesh3d(meshes.add(Cuboid::new(120.0, 160.0, 120.0))),
        MeshMaterial3d(materials.add(pad_color)),
        Transform::from_xyz(400.0, 80.0, -200.0),
        RigidBody::Static,
        Collider::cuboid(120.0, 160.0, 120.0),
        CollisionLayers::new(
            [GameLayer::Interactable, GameLayer::Ground],
            [GameLayer::Player],
        ),
    ));

    // Sun
    commands.spawn((
        DirectionalLight {
            illuminance: 10_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(500.0, 1000.0, 500.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    info!("Arena spawned: floor, wall-run corridor, practice wall, platform, launch pad");
}
