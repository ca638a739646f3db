//! World domain plugin for Wanderglade.
//!
//! Responsible for:
//! - Capturing the canvas size at startup
//! - Generating the noise-based tile map and rendering it
//! - Static decor props
//! - Mapping canvas positions onto sprites every frame

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::config::GameConfig;
use crate::shared::*;

pub mod decor;
pub mod noise_field;
pub mod render;
pub mod terrain;

use noise_field::NoiseField;
use terrain::{Biome, TerrainGrid};

// ═══════════════════════════════════════════════════════════════════════
// PLUGIN
// ═══════════════════════════════════════════════════════════════════════

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        configure_schedule_sets(app);

        app.init_resource::<Canvas>()
            .add_systems(
                Startup,
                (capture_canvas, render::setup_circle_texture).in_set(StartupSet::Canvas),
            )
            .add_systems(Startup, generate_terrain.in_set(StartupSet::Terrain))
            .add_systems(
                Startup,
                (
                    render::spawn_camera,
                    render::spawn_terrain_sprite,
                    decor::spawn_static_decor,
                )
                    .in_set(StartupSet::Actors),
            )
            .add_systems(
                PostUpdate,
                (render::attach_circle_sprites, render::sync_canvas_positions),
            );
    }
}

// ═══════════════════════════════════════════════════════════════════════
// SYSTEMS
// ═══════════════════════════════════════════════════════════════════════

/// Size the canvas to the primary window once. Without a window (headless)
/// the configured window size is used. Later resizes are ignored.
pub fn capture_canvas(
    windows: Query<&Window, With<PrimaryWindow>>,
    config: Res<GameConfig>,
    mut canvas: ResMut<Canvas>,
) {
    *canvas = match windows.get_single() {
        Ok(window) => Canvas {
            width: window.width(),
            height: window.height(),
        },
        Err(_) => Canvas {
            width: config.window.width,
            height: config.window.height,
        },
    };
    info!("[World] Canvas is {}x{}", canvas.width, canvas.height);
}

/// Build the tile grid from a configured or random noise seed.
pub fn generate_terrain(mut commands: Commands, config: Res<GameConfig>) {
    let field = match config.noise_seed() {
        Some(seed) => NoiseField::new(seed),
        None => NoiseField::random(),
    };
    let map = &config.map;
    let grid = TerrainGrid::generate(&field, map.width, map.height, map.tile_size, map.noise_scale);

    info!(
        "[World] Generated {}x{} tiles (seed {}): water={} forest={} grassland={} desert={}",
        grid.width,
        grid.height,
        grid.seed,
        grid.count(Biome::Water),
        grid.count(Biome::Forest),
        grid.count(Biome::Grassland),
        grid.count(Biome::Desert),
    );

    commands.insert_resource(grid);
}
