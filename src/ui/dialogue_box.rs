use bevy::prelude::*;
use crate::shared::*;

// ═══════════════════════════════════════════════════════════════════════
// MARKER COMPONENTS
// ═══════════════════════════════════════════════════════════════════════

#[derive(Component)]
pub struct DialogueBoxRoot;

#[derive(Component)]
pub struct DialogueNpcName;

#[derive(Component)]
pub struct DialogueText;

#[derive(Component)]
pub struct DialoguePrompt;

/// Hint shown under the line; lists every key that closes the dialog.
pub const CLOSE_HINT: &str = "[E / Enter / Space / Esc] Close";

/// What the open dialog box shows. Filled from `DialogueStartEvent`.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct DialogueUiState {
    pub name: String,
    pub line: String,
}

// ═══════════════════════════════════════════════════════════════════════
// EVENT LISTENER
// ═══════════════════════════════════════════════════════════════════════

/// Capture the speaker and line so the box can be built on entering
/// `GameState::Dialogue`.
pub fn listen_for_dialogue_start(
    mut commands: Commands,
    mut events: EventReader<DialogueStartEvent>,
) {
    for event in events.read() {
        info!("[UI/Dialogue] Opening dialog with {} ({:?})", event.name, event.npc);
        commands.insert_resource(DialogueUiState {
            name: event.name.clone(),
            line: event.line.clone(),
        });
    }
}

// ═══════════════════════════════════════════════════════════════════════
// SPAWN / DESPAWN
// ═══════════════════════════════════════════════════════════════════════

pub fn spawn_dialogue_box(mut commands: Commands, ui_state: Option<Res<DialogueUiState>>) {
    let line = ui_state
        .as_ref()
        .map(|s| s.line.clone())
        .unwrap_or_else(|| "...".to_string());

    let npc_name = ui_state
        .as_ref()
        .map(|s| s.name.clone())
        .unwrap_or_else(|| "???".to_string());

    commands
        .spawn((
            DialogueBoxRoot,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::FlexEnd,
                align_items: AlignItems::Center,
                flex_direction: FlexDirection::Column,
                padding: UiRect::bottom(Val::Px(20.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.3)),
        ))
        .with_children(|parent| {
            // Dialogue panel at bottom
            parent
                .spawn((
                    Node {
                        width: Val::Px(560.0),
                        min_height: Val::Px(110.0),
                        flex_direction: FlexDirection::Column,
                        justify_content: JustifyContent::SpaceBetween,
                        padding: UiRect::all(Val::Px(16.0)),
                        row_gap: Val::Px(8.0),
                        border: UiRect::all(Val::Px(2.0)),
                        ..default()
                    },
                    BackgroundColor(Color::srgba(0.08, 0.06, 0.12, 0.92)),
                    BorderColor(Color::srgb(1.0, 0.9, 0.6)),
                ))
                .with_children(|panel| {
                    // NPC name
                    panel.spawn((
                        DialogueNpcName,
                        Text::new(npc_name),
                        TextFont {
                            font_size: 18.0,
                            ..default()
                        },
                        TextColor(Color::srgb(1.0, 0.9, 0.6)),
                    ));

                    // Dialogue text
                    panel.spawn((
                        DialogueText,
                        Text::new(line),
                        TextFont {
                            font_size: 16.0,
                            ..default()
                        },
                        TextColor(Color::WHITE),
                    ));

                    // Close prompt
                    panel.spawn((
                        DialoguePrompt,
                        Text::new(CLOSE_HINT),
                        TextFont {
                            font_size: 12.0,
                            ..default()
                        },
                        TextColor(Color::srgb(0.6, 0.6, 0.6)),
                    ));
                });
        });
}

pub fn despawn_dialogue_box(
    mut commands: Commands,
    query: Query<Entity, With<DialogueBoxRoot>>,
) {
    for entity in &query {
        commands.entity(entity).despawn_recursive();
    }
    commands.remove_resource::<DialogueUiState>();
}

// ═══════════════════════════════════════════════════════════════════════
// DIALOGUE END HANDLER
// ═══════════════════════════════════════════════════════════════════════

pub fn handle_dialogue_end(
    mut events: EventReader<DialogueEndEvent>,
) {
    for _ev in events.read() {
        info!("[UI/Dialogue] Dialog closed.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_hint_names_every_close_key() {
        for key in ["E", "Enter", "Space", "Esc"] {
            assert!(CLOSE_HINT.contains(key), "hint is missing {}", key);
        }
    }
}
