//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::movement::InputIntent;

/// Sample the keyboard into the shared `InputIntent`.
///
/// Runs every frame while the simulation ticks on a fixed step, so a jump press
/// is latched until `clear_input_edges` runs after the next fixed tick.
pub(crate) fn read_input(
    keyboard: Option<Res<ButtonInput<KeyCode>>>,
    mut input: ResMut<InputIntent>,
) {
    let Some(keyboard) = keyboard else {
        return;
    };

    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    input.horizontal = x;
    input.jump_pressed |=
        keyboard.just_pressed(KeyCode::Space) || keyboard.just_pressed(KeyCode::KeyK);
    input.jump_held = keyboard.pressed(KeyCode::Space) || keyboard.pressed(KeyCode::KeyK);
}

/// Jump presses are edges: consume them once a fixed tick has seen them.
pub(crate) fn clear_input_edges(mut input: ResMut<InputIntent>) {
    input.jump_pressed = false;
}
