//! Input handling systems
//!
//! Keys 1-4 pick the number of dice and roll, Space/Enter rolls again,
//! M toggles the roll sound, Escape quits. The "Roll again" button does the
//! same as Space.

use bevy::prelude::*;

use crate::dice2d::types::{DiceTable, RollButton, RollSound};

use super::setup::{BUTTON_BG, BUTTON_HOVER};

const DICE_KEYS: [(KeyCode, usize); 4] = [
    (KeyCode::Digit1, 1),
    (KeyCode::Digit2, 2),
    (KeyCode::Digit3, 3),
    (KeyCode::Digit4, 4),
];

/// Dice count requested by the keys pressed this frame, if any
pub fn requested_dice_count(keyboard: &ButtonInput<KeyCode>) -> Option<usize> {
    DICE_KEYS
        .iter()
        .find(|(key, _)| keyboard.just_pressed(*key))
        .map(|(_, count)| *count)
}

pub fn handle_keyboard(
    keyboard: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    sound: Res<RollSound>,
    mut table: ResMut<DiceTable>,
    mut app_exit: MessageWriter<AppExit>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        app_exit.write(AppExit::Success);
        return;
    }

    if keyboard.just_pressed(KeyCode::KeyM) {
        if sound.handle.is_some() {
            let muted = table.toggle_mute();
            info!("Roll sound {}", if muted { "muted" } else { "on" });
        } else {
            info!("No roll sound available to unmute");
        }
    }

    let now = time.elapsed_secs_f64();

    if let Some(count) = requested_dice_count(&keyboard) {
        match table.set_dice_count(count) {
            Ok(()) => {
                table.roll(now);
            }
            Err(err) => debug!("Dice count change to {} ignored: {}", count, err),
        }
        return;
    }

    if keyboard.just_pressed(KeyCode::Space) || keyboard.just_pressed(KeyCode::Enter) {
        table.roll(now);
    }
}

pub fn handle_roll_button(
    interaction_query: Query<&Interaction, (Changed<Interaction>, With<RollButton>)>,
    time: Res<Time>,
    mut table: ResMut<DiceTable>,
) {
    for interaction in interaction_query.iter() {
        if *interaction == Interaction::Pressed {
            table.roll(time.elapsed_secs_f64());
        }
    }
}

/// Highlight the roll button on hover
pub fn handle_roll_button_hover(
    mut interaction_query: Query<
        (&Interaction, &mut BackgroundColor),
        (Changed<Interaction>, With<RollButton>),
    >,
) {
    for (interaction, mut bg) in interaction_query.iter_mut() {
        *bg = BackgroundColor(match interaction {
            Interaction::Hovered | Interaction::Pressed => BUTTON_HOVER,
            Interaction::None => BUTTON_BG,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requested_dice_count() {
        let mut keyboard = ButtonInput::<KeyCode>::default();
        assert_eq!(requested_dice_count(&keyboard), None);

        keyboard.press(KeyCode::Digit3);
        assert_eq!(requested_dice_count(&keyboard), Some(3));

        keyboard.clear();
        assert_eq!(requested_dice_count(&keyboard), None);
    }

    #[test]
    fn test_other_keys_do_not_pick_dice() {
        let mut keyboard = ButtonInput::<KeyCode>::default();
        keyboard.press(KeyCode::Digit5);
        keyboard.press(KeyCode::Space);
        assert_eq!(requested_dice_count(&keyboard), None);
    }
}
