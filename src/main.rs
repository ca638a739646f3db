use bevy::prelude::*;
use bevy::window::{PresentMode, WindowResolution};
use std::path::Path;

use wanderglade::config::{self, CONFIG_FILE};
use wanderglade::shared::*;
use wanderglade::{input, npcs, player, ui, world};

fn main() {
    let (game_config, config_source) = config::load_config(Path::new(CONFIG_FILE));
    let window = game_config.window.clone();

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: window.title,
                        resolution: WindowResolution::new(window.width, window.height),
                        present_mode: PresentMode::AutoVsync,
                        // In the browser the canvas takes the page size, like a
                        // full-viewport <canvas>.
                        fit_canvas_to_parent: true,
                        ..default()
                    }),
                    ..default()
                })
                // Tiles are one texel each; keep their edges hard when scaled.
                .set(ImagePlugin::default_nearest()),
        )
        // Game state
        .init_state::<GameState>()
        // Configuration and randomness
        .insert_resource(GameRng::from_seed(game_config.seed))
        .insert_resource(game_config)
        .insert_resource(config_source)
        .add_systems(Startup, config::log_config_source.before(StartupSet::Canvas))
        // Domain plugins
        .add_plugins(input::InputPlugin)
        .add_plugins(world::WorldPlugin)
        .add_plugins(player::PlayerPlugin)
        .add_plugins(npcs::NpcPlugin)
        .add_plugins(ui::UiPlugin)
        .run();
}
