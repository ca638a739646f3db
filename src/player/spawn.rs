use bevy::prelude::*;
use crate::config::GameConfig;
use crate::shared::*;

/// Spawn the player at the canvas centre.
/// Runs once at startup, after the canvas has been captured.
pub fn spawn_player(
    mut commands: Commands,
    canvas: Res<Canvas>,
    config: Res<GameConfig>,
    existing: Query<Entity, With<Player>>,
) {
    // Guard: never double-spawn.
    if !existing.is_empty() {
        return;
    }

    let start = canvas.center();
    commands.spawn((
        Player,
        CanvasPosition(start),
        Body {
            radius: config.player.radius,
            speed: config.player.speed,
        },
        Tint(rgb(PLAYER_RGB)),
        // Drawn above terrain, props, and NPCs.
        Transform::from_translation(canvas_to_world(start).extend(Z_PLAYER)),
    ));
    info!("[Player] Spawned at ({}, {})", start.x, start.y);
}
