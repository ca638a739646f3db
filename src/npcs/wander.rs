//! NPC steering: walk in a straight line to a random point, then pick another.

use bevy::prelude::*;
use rand::Rng;
use crate::shared::*;

/// Uniform point in `[0, width) × [0, height)`. A zero-sized axis yields 0.
pub fn random_canvas_point(rng: &mut impl Rng, canvas: &Canvas) -> Vec2 {
    let x = if canvas.width > 0.0 {
        rng.gen_range(0.0..canvas.width)
    } else {
        0.0
    };
    let y = if canvas.height > 0.0 {
        rng.gen_range(0.0..canvas.height)
    } else {
        0.0
    };
    Vec2::new(x, y)
}

/// Advance one frame toward `wander.target`.
///
/// Farther than `speed` away: move exactly `speed` along the straight line.
/// Otherwise snap onto the target and choose a fresh random one in the same
/// step. Returns true when a new target was chosen.
pub fn step_toward_target(
    pos: &mut Vec2,
    wander: &mut Wander,
    speed: f32,
    canvas: &Canvas,
    rng: &mut impl Rng,
) -> bool {
    let delta = wander.target - *pos;
    let distance = delta.length();

    if distance > speed {
        *pos += delta / distance * speed;
        false
    } else {
        *pos = wander.target;
        wander.target = random_canvas_point(rng, canvas);
        true
    }
}

/// System: step every NPC once, in creation order so seeded runs replay
/// identically.
pub fn tick_wandering_npcs(
    roster: Res<NpcRoster>,
    canvas: Res<Canvas>,
    mut rng: ResMut<GameRng>,
    mut query: Query<(&Npc, &mut CanvasPosition, &mut Wander, &Body)>,
) {
    for &entity in &roster.entities {
        let Ok((npc, mut pos, mut wander, body)) = query.get_mut(entity) else {
            continue;
        };
        if step_toward_target(&mut pos.0, &mut wander, body.speed, &canvas, &mut rng.0) {
            debug!(
                "[Npc] {} reached target, heading to ({:.0}, {:.0})",
                npc.name, wander.target.x, wander.target.y
            );
        }
    }
}
