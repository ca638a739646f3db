//! NPC domain plugin for Wanderglade.
//!
//! Spawns the townspeople, walks them between random points, and decides
//! which one the player can talk to. Communicates exclusively through
//! shared resources and events.

use bevy::prelude::*;
use crate::shared::*;

pub mod dialogue;
pub mod spawning;
pub mod wander;

use dialogue::{close_dialogue, handle_npc_interaction, refresh_interaction_target};
use spawning::spawn_initial_npcs;
use wander::tick_wandering_npcs;

pub struct NpcPlugin;

impl Plugin for NpcPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<NpcRoster>()
            .init_resource::<InteractionState>()
            .add_event::<DialogueStartEvent>()
            .add_event::<DialogueEndEvent>();

        app.add_systems(Startup, spawn_initial_npcs.in_set(StartupSet::Actors));

        // Playing-state systems
        app.add_systems(
            Update,
            (
                // Movement: one straight-line step toward the target
                tick_wandering_npcs.in_set(FrameSet::Npcs),
                // Interaction: prompt target first, then the E key
                (refresh_interaction_target, handle_npc_interaction)
                    .chain()
                    .in_set(FrameSet::Interaction),
            )
                .run_if(in_state(GameState::Playing)),
        );

        // Dialogue-state systems: the world stays frozen until closed
        app.add_systems(
            Update,
            close_dialogue.run_if(in_state(GameState::Dialogue)),
        );
    }
}
