//! Hard-coded props: one building and one resource node.

use bevy::prelude::*;
use bevy::sprite::Anchor;

use crate::shared::*;
use super::render::CircleTexture;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DecorShape {
    /// Filled rectangle; `origin` is the top-left corner.
    Rect { width: f32, height: f32 },
    /// Filled circle; `origin` is the centre.
    Circle { radius: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecorPiece {
    pub name: &'static str,
    pub origin: Vec2,
    pub shape: DecorShape,
    pub rgb: [u8; 3],
}

pub const STATIC_DECOR: [DecorPiece; 2] = [
    DecorPiece {
        name: "building",
        origin: Vec2::new(200.0, 200.0),
        shape: DecorShape::Rect {
            width: 50.0,
            height: 50.0,
        },
        rgb: [0x8B, 0x45, 0x13],
    },
    DecorPiece {
        name: "resource",
        origin: Vec2::new(400.0, 400.0),
        shape: DecorShape::Circle { radius: 10.0 },
        rgb: [0xFF, 0xD7, 0x00],
    },
];

/// Marker for spawned props.
#[derive(Component, Debug, Clone, Copy)]
pub struct Decor(pub &'static str);

/// Startup system: spawn every prop in `STATIC_DECOR`.
pub fn spawn_static_decor(mut commands: Commands, circle: Res<CircleTexture>) {
    for piece in STATIC_DECOR.iter() {
        let color = rgb(piece.rgb);
        let sprite = match piece.shape {
            DecorShape::Rect { width, height } => Sprite {
                color,
                custom_size: Some(Vec2::new(width, height)),
                anchor: Anchor::TopLeft,
                ..default()
            },
            DecorShape::Circle { radius } => Sprite {
                image: circle.0.clone(),
                color,
                custom_size: Some(Vec2::splat(radius * 2.0)),
                ..default()
            },
        };

        commands.spawn((
            Decor(piece.name),
            CanvasPosition(piece.origin),
            sprite,
            Transform::from_translation(canvas_to_world(piece.origin).extend(Z_DECOR)),
        ));
    }
    info!("[World] Placed {} static props", STATIC_DECOR.len());
}
