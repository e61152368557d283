mod camera;
#[cfg(feature = "dev-tools")]
mod debug;
mod interactables;
mod movement;
mod world;

use avian3d::prelude::*;
use bevy::prelude::*;

fn primary_window() -> Window {
    Window {
        title: "Hermes".to_string(),
        resolution: (1280, 720).into(),
        resizable: true,
        ..default()
    }
}

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(primary_window()),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    .add_plugins((
        movement::MovementPlugin,
        interactables::InteractablesPlugin,
        camera::CameraPlugin,
        world::WorldPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
