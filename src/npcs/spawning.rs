//! NPC spawning: one batch at startup, at random spots on the canvas.

use bevy::prelude::*;
use rand::Rng;
use std::f32::consts::TAU;
use crate::config::GameConfig;
use crate::shared::*;
use super::wander::random_canvas_point;

/// Display name for the NPC created `index`-th (0-based).
pub fn npc_name(index: usize) -> String {
    format!("NPC {}", index + 1)
}

/// Component bundle for one freshly created NPC. Draws its start position,
/// heading, and first target from `rng`, in that order.
pub fn npc_bundle(
    index: usize,
    canvas: &Canvas,
    body: Body,
    rng: &mut impl Rng,
) -> (Npc, CanvasPosition, Body, Tint, Wander, Transform) {
    let start = random_canvas_point(rng, canvas);
    let heading = rng.gen_range(0.0..TAU);
    let target = random_canvas_point(rng, canvas);

    (
        Npc {
            index,
            name: npc_name(index),
        },
        CanvasPosition(start),
        body,
        Tint(rgb(NPC_RGB)),
        Wander { target, heading },
        Transform::from_translation(canvas_to_world(start).extend(Z_NPC)),
    )
}

/// System: spawn the configured number of NPCs and record them in the
/// roster in creation order.
pub fn spawn_initial_npcs(
    mut commands: Commands,
    canvas: Res<Canvas>,
    config: Res<GameConfig>,
    mut rng: ResMut<GameRng>,
    mut roster: ResMut<NpcRoster>,
) {
    // Guard: the batch is created once per run.
    if !roster.entities.is_empty() {
        return;
    }

    let body = Body {
        radius: config.npc.radius,
        speed: config.npc.speed,
    };

    for index in 0..config.npc_count {
        let entity = commands
            .spawn(npc_bundle(index, &canvas, body, &mut rng.0))
            .id();
        roster.entities.push(entity);
    }

    info!("[Npc] Spawned {} NPCs", roster.entities.len());
}
