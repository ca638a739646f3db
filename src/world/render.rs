//! Turning canvas-space game state into sprites.
//!
//! Gameplay systems only touch `CanvasPosition`. Everything here runs on
//! the render side: textures built at startup, sprites attached to new
//! bodies, and the per-frame position → Transform sync.

use bevy::prelude::*;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use bevy::sprite::Anchor;

use crate::shared::*;
use super::terrain::TerrainGrid;

/// Edge length of the shared disc texture, in texels.
const CIRCLE_TEXTURE_SIZE: u32 = 64;

/// White filled disc; tinted per sprite to draw every round body.
#[derive(Resource, Debug, Clone, Default)]
pub struct CircleTexture(pub Handle<Image>);

/// Marker for the single terrain sprite.
#[derive(Component, Debug)]
pub struct TerrainSprite;

pub fn circle_image(size: u32) -> Image {
    let mut data = Vec::with_capacity((size * size * 4) as usize);
    let r = size as f32 / 2.0;
    for y in 0..size {
        for x in 0..size {
            let dx = x as f32 + 0.5 - r;
            let dy = y as f32 + 0.5 - r;
            let alpha = if dx * dx + dy * dy <= r * r { 0xFF } else { 0x00 };
            data.extend_from_slice(&[0xFF, 0xFF, 0xFF, alpha]);
        }
    }

    Image::new(
        Extent3d {
            width: size,
            height: size,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        data,
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::RENDER_WORLD,
    )
}

pub fn terrain_image(grid: &TerrainGrid) -> Image {
    Image::new(
        Extent3d {
            width: grid.width,
            height: grid.height,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        grid.rgba_bytes(),
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::RENDER_WORLD,
    )
}

/// Startup system: build the shared disc texture.
pub fn setup_circle_texture(mut commands: Commands, mut images: ResMut<Assets<Image>>) {
    let handle = images.add(circle_image(CIRCLE_TEXTURE_SIZE));
    commands.insert_resource(CircleTexture(handle));
}

/// Startup system: a 2D camera centred over the canvas, so canvas (0, 0)
/// lands in the top-left corner of the window.
pub fn spawn_camera(mut commands: Commands, canvas: Res<Canvas>) {
    let center = canvas_to_world(canvas.center());
    commands.spawn((Camera2d, Transform::from_xyz(center.x, center.y, 0.0)));
}

/// Startup system: upload the terrain grid as one texel-per-tile image and
/// stretch it over the map with nearest sampling.
pub fn spawn_terrain_sprite(
    mut commands: Commands,
    grid: Res<TerrainGrid>,
    mut images: ResMut<Assets<Image>>,
) {
    let handle = images.add(terrain_image(&grid));
    commands.spawn((
        TerrainSprite,
        Sprite {
            image: handle,
            custom_size: Some(grid.pixel_size()),
            anchor: Anchor::TopLeft,
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, Z_TERRAIN),
    ));
}

/// Give every newly spawned round body a tinted disc sprite.
pub fn attach_circle_sprites(
    mut commands: Commands,
    circle: Res<CircleTexture>,
    query: Query<(Entity, &Body, &Tint), Added<Body>>,
) {
    for (entity, body, tint) in &query {
        commands.entity(entity).insert(Sprite {
            image: circle.0.clone(),
            color: tint.0,
            custom_size: Some(Vec2::splat(body.radius * 2.0)),
            ..default()
        });
    }
}

/// Copy canvas positions into transforms. Keeps each entity's Z layer.
/// Runs in PostUpdate, after every movement system.
pub fn sync_canvas_positions(mut query: Query<(&CanvasPosition, &mut Transform)>) {
    for (pos, mut transform) in &mut query {
        let world = canvas_to_world(pos.0);
        transform.translation.x = world.x;
        transform.translation.y = world.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_image_is_a_disc() {
        let image = circle_image(16);
        assert_eq!(image.data.len(), 16 * 16 * 4);
        let alpha = |x: usize, y: usize| image.data[(y * 16 + x) * 4 + 3];
        assert_eq!(alpha(8, 8), 0xFF);
        assert_eq!(alpha(0, 0), 0x00);
        assert_eq!(alpha(15, 15), 0x00);
        assert_eq!(alpha(0, 8), 0xFF);
    }

    #[test]
    fn test_canvas_to_world_flips_y() {
        assert_eq!(canvas_to_world(Vec2::new(10.0, 20.0)), Vec2::new(10.0, -20.0));
    }
}
