use bevy::prelude::*;
use crate::shared::*;

/// Shift a position by one step of `speed` pixels in `dir`.
/// No clamping: the player can walk off the canvas.
pub fn nudge(pos: Vec2, dir: Nudge, speed: f32) -> Vec2 {
    pos + dir.delta() * speed
}

/// Apply every nudge read this frame, one `speed` step per key-down event.
pub fn apply_player_nudges(
    input: Res<PlayerInput>,
    mut query: Query<(&mut CanvasPosition, &Body), With<Player>>,
) {
    if input.nudges.is_empty() {
        return;
    }
    let Ok((mut pos, body)) = query.get_single_mut() else {
        return;
    };

    for &dir in &input.nudges {
        pos.0 = nudge(pos.0, dir, body.speed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nudge_directions() {
        let start = Vec2::new(100.0, 100.0);
        assert_eq!(nudge(start, Nudge::Up, 5.0), Vec2::new(100.0, 95.0));
        assert_eq!(nudge(start, Nudge::Down, 5.0), Vec2::new(100.0, 105.0));
        assert_eq!(nudge(start, Nudge::Left, 5.0), Vec2::new(95.0, 100.0));
        assert_eq!(nudge(start, Nudge::Right, 5.0), Vec2::new(105.0, 100.0));
    }

    #[test]
    fn test_nudge_does_not_clamp_to_canvas() {
        let pos = nudge(Vec2::new(2.0, 0.0), Nudge::Left, 5.0);
        assert_eq!(pos, Vec2::new(-3.0, 0.0));
        let pos = nudge(Vec2::ZERO, Nudge::Up, 5.0);
        assert_eq!(pos, Vec2::new(0.0, -5.0));
    }
}
