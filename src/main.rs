use asteroids::config::{self, GameConfig};
use asteroids::constants::{FIELD_HEIGHT, FIELD_WIDTH};
use asteroids::player::ControlPlugin;
use asteroids::rendering::RenderPlugin;
use asteroids::simulation::{start_session_system, SimulationPlugin};
use bevy::prelude::*;
use bevy::window::WindowResolution;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Asteroids".into(),
                resolution: WindowResolution::new(FIELD_WIDTH as u32, FIELD_HEIGHT as u32),
                ..Default::default()
            }),
            ..Default::default()
        }))
        .insert_resource(ClearColor(Color::BLACK))
        // Compiled defaults; load_game_config overwrites them from
        // assets/game.toml (if present) before the session starts.
        .insert_resource(GameConfig::default())
        .add_plugins((SimulationPlugin, ControlPlugin, RenderPlugin))
        .add_systems(
            Startup,
            config::load_game_config.before(start_session_system),
        )
        .run();
}
