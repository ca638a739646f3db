pub mod dialogue_box;
pub mod prompt;

use bevy::prelude::*;
use crate::shared::*;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        // ─── INTERACTION PROMPT: always present, toggled by range ───
        app.add_systems(Startup, prompt::spawn_interaction_prompt);
        app.add_systems(
            Update,
            prompt::update_interaction_prompt.after(FrameSet::Interaction),
        );

        // ─── DIALOGUE BOX ───
        app.add_systems(
            Update,
            dialogue_box::listen_for_dialogue_start
                .after(FrameSet::Interaction)
                .run_if(in_state(GameState::Playing)),
        );
        app.add_systems(OnEnter(GameState::Dialogue), dialogue_box::spawn_dialogue_box);
        app.add_systems(OnExit(GameState::Dialogue), dialogue_box::despawn_dialogue_box);
        app.add_systems(Update, dialogue_box::handle_dialogue_end);
    }
}
