use bevy::prelude::*;
use crate::npcs::dialogue::prompt_text;
use crate::shared::*;

// ═══════════════════════════════════════════════════════════════════════
// MARKER COMPONENTS
// ═══════════════════════════════════════════════════════════════════════

/// Box that holds the "Press E" hint. Hidden while nobody is in range.
#[derive(Component)]
pub struct InteractionPromptRoot;

#[derive(Component)]
pub struct InteractionPromptText;

// ═══════════════════════════════════════════════════════════════════════
// SPAWN
// ═══════════════════════════════════════════════════════════════════════

pub fn spawn_interaction_prompt(mut commands: Commands) {
    commands
        .spawn((
            InteractionPromptRoot,
            Node {
                position_type: PositionType::Absolute,
                bottom: Val::Px(24.0),
                left: Val::Percent(50.0),
                width: Val::Px(320.0),
                // Shift left by half of the width to centre it.
                margin: UiRect {
                    left: Val::Px(-160.0),
                    ..default()
                },
                justify_content: JustifyContent::Center,
                padding: UiRect::axes(Val::Px(12.0), Val::Px(6.0)),
                border: UiRect::all(Val::Px(1.0)),
                display: Display::None,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.75)),
            BorderColor(Color::srgba(0.5, 0.5, 0.5, 0.5)),
        ))
        .with_children(|parent| {
            parent.spawn((
                InteractionPromptText,
                Text::new(""),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        });
}

// ═══════════════════════════════════════════════════════════════════════
// UPDATE
// ═══════════════════════════════════════════════════════════════════════

/// Show the hint with the NPC's name while a target exists, hide it otherwise.
pub fn update_interaction_prompt(
    state: Res<InteractionState>,
    mut root_query: Query<&mut Node, With<InteractionPromptRoot>>,
    mut text_query: Query<&mut Text, With<InteractionPromptText>>,
) {
    if !state.is_changed() {
        return;
    }

    let display = match &state.target {
        Some(target) => {
            for mut text in &mut text_query {
                **text = prompt_text(&target.name);
            }
            Display::Flex
        }
        None => Display::None,
    };

    for mut node in &mut root_query {
        node.display = display;
    }
}
