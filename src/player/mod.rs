mod movement;
mod spawn;

pub use movement::{apply_player_nudges, nudge};
pub use spawn::spawn_player;

use bevy::prelude::*;
use crate::shared::*;

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        // -- Spawn the player once the canvas size is known --
        app.add_systems(Startup, spawn::spawn_player.in_set(StartupSet::Actors));

        // -- Key-driven movement, before NPCs step and interaction is checked --
        app.add_systems(
            Update,
            movement::apply_player_nudges
                .in_set(FrameSet::Movement)
                .run_if(in_state(GameState::Playing)),
        );
    }
}
