use bevy::input::keyboard::KeyboardInput;
use bevy::input::ButtonState;
use bevy::prelude::*;
use crate::shared::*;

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerInput>()
            .init_resource::<InputContext>()
            .init_resource::<KeyBindings>()
            .add_systems(
                PreUpdate,
                (manage_input_context, read_keyboard).chain(),
            );
    }
}

/// Movement key → nudge, accepting both the bound letter and the arrow key.
pub fn nudge_for_key(key: KeyCode, bindings: &KeyBindings) -> Option<Nudge> {
    if key == bindings.move_up || key == KeyCode::ArrowUp {
        Some(Nudge::Up)
    } else if key == bindings.move_down || key == KeyCode::ArrowDown {
        Some(Nudge::Down)
    } else if key == bindings.move_left || key == KeyCode::ArrowLeft {
        Some(Nudge::Left)
    } else if key == bindings.move_right || key == KeyCode::ArrowRight {
        Some(Nudge::Right)
    } else {
        None
    }
}

/// The single point where hardware input becomes game actions.
///
/// Reads raw key-down events rather than `ButtonInput` so that OS
/// auto-repeat produces one nudge per repeat, like a held key in a browser.
pub fn read_keyboard(
    mut keyboard: EventReader<KeyboardInput>,
    bindings: Res<KeyBindings>,
    context: Res<InputContext>,
    mut input: ResMut<PlayerInput>,
) {
    *input = PlayerInput::default();

    for event in keyboard.read() {
        if event.state != ButtonState::Pressed {
            continue;
        }
        let key = event.key_code;

        match *context {
            InputContext::Gameplay => {
                if let Some(dir) = nudge_for_key(key, &bindings) {
                    input.nudges.push(dir);
                }
                // Held E does not re-open the dialog on repeat.
                if key == bindings.interact && !event.repeat {
                    input.interact = true;
                }
            }

            InputContext::Dialogue => {
                if !event.repeat
                    && (key == bindings.interact
                        || key == bindings.ui_confirm
                        || key == bindings.ui_cancel
                        || key == KeyCode::Space)
                {
                    input.close_dialogue = true;
                }
            }
        }
    }
}

/// Derives InputContext from GameState. ONE system, replaces all per-domain guards.
pub fn manage_input_context(
    game_state: Res<State<GameState>>,
    mut context: ResMut<InputContext>,
) {
    *context = match *game_state.get() {
        GameState::Playing => InputContext::Gameplay,
        GameState::Dialogue => InputContext::Dialogue,
    };
}
