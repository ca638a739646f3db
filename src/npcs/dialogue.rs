//! Talking to NPCs: proximity checks, the per-frame interaction target,
//! and opening/closing the dialog.

use bevy::prelude::*;
use crate::shared::*;

/// True iff the two circles overlap: centre distance strictly below the
/// sum of the radii.
pub fn is_near(npc_pos: Vec2, npc_radius: f32, player_pos: Vec2, player_radius: f32) -> bool {
    npc_pos.distance(player_pos) < npc_radius + player_radius
}

/// The one thing an NPC says.
pub fn dialog_line(name: &str) -> String {
    format!("Hello, I am {}.", name)
}

/// Text of the on-screen hint while an NPC is in range.
pub fn prompt_text(name: &str) -> String {
    format!("Press E to interact with {}", name)
}

/// First NPC, in creation order, that the player overlaps. Distance does
/// not rank candidates.
pub fn find_interaction_target(
    roster: &NpcRoster,
    npcs: &Query<(&Npc, &CanvasPosition, &Body)>,
    player_pos: Vec2,
    player_radius: f32,
) -> Option<InteractionTarget> {
    roster.entities.iter().find_map(|&entity| {
        let (npc, pos, body) = npcs.get(entity).ok()?;
        is_near(pos.0, body.radius, player_pos, player_radius).then(|| InteractionTarget {
            entity,
            name: npc.name.clone(),
        })
    })
}

/// System: recompute which NPC (if any) the prompt should offer, every frame.
pub fn refresh_interaction_target(
    roster: Res<NpcRoster>,
    player_query: Query<(&CanvasPosition, &Body), With<Player>>,
    npc_query: Query<(&Npc, &CanvasPosition, &Body)>,
    mut state: ResMut<InteractionState>,
) {
    let target = match player_query.get_single() {
        Ok((pos, body)) => find_interaction_target(&roster, &npc_query, pos.0, body.radius),
        Err(_) => None,
    };
    if state.target != target {
        state.target = target;
    }
}

/// System: on the interact key, re-run the scan and open the dialog for
/// whoever is in range.
pub fn handle_npc_interaction(
    player_input: Res<PlayerInput>,
    roster: Res<NpcRoster>,
    player_query: Query<(&CanvasPosition, &Body), With<Player>>,
    npc_query: Query<(&Npc, &CanvasPosition, &Body)>,
    mut state: ResMut<InteractionState>,
    mut dialogue_writer: EventWriter<DialogueStartEvent>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if !player_input.interact {
        return;
    }

    let Ok((player_pos, player_body)) = player_query.get_single() else {
        return;
    };

    let target = find_interaction_target(&roster, &npc_query, player_pos.0, player_body.radius);
    state.target = target.clone();

    let Some(target) = target else {
        return;
    };

    let line = dialog_line(&target.name);
    info!("[Npc] {} says: {}", target.name, line);

    state.dialog_open = true;
    state.active_speaker = Some(target.entity);
    state.dialog_line = Some(line.clone());

    dialogue_writer.send(DialogueStartEvent {
        npc: target.entity,
        name: target.name,
        line,
    });

    next_state.set(GameState::Dialogue);
}

/// System: any close key dismisses the dialog and resumes the world.
pub fn close_dialogue(
    player_input: Res<PlayerInput>,
    mut state: ResMut<InteractionState>,
    mut end_event: EventWriter<DialogueEndEvent>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if !player_input.close_dialogue {
        return;
    }

    state.dialog_open = false;
    state.active_speaker = None;
    state.dialog_line = None;

    end_event.send(DialogueEndEvent);
    next_state.set(GameState::Playing);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_near_uses_strict_radius_sum() {
        let npc = Vec2::ZERO;
        assert!(is_near(npc, 5.0, Vec2::new(14.9, 0.0), 10.0));
        assert!(!is_near(npc, 5.0, Vec2::new(15.0, 0.0), 10.0));
        assert!(!is_near(npc, 5.0, Vec2::new(15.1, 0.0), 10.0));
    }

    #[test]
    fn test_is_near_in_two_dimensions() {
        // 9-12-15 triangle: exactly on the threshold.
        assert!(!is_near(Vec2::new(100.0, 100.0), 5.0, Vec2::new(109.0, 112.0), 10.0));
        assert!(is_near(Vec2::new(100.0, 100.0), 5.0, Vec2::new(108.0, 112.0), 10.0));
    }

    #[test]
    fn test_dialog_line() {
        assert_eq!(dialog_line("NPC 3"), "Hello, I am NPC 3.");
    }

    #[test]
    fn test_prompt_text() {
        assert_eq!(prompt_text("NPC 7"), "Press E to interact with NPC 7");
    }
}
