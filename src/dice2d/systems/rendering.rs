//! Rendering systems
//!
//! Push the table state into the UI: die sizes and visibility, the face on
//! each die, and the banner/hint/button for the current phase.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::dice2d::banner::{ask_message, hint_message, result_message, ROLLING_MESSAGE};
use crate::dice2d::layout::{best_grid, die_size, GRID_PADDING};
use crate::dice2d::types::*;

/// Size and show the dice for the current count and window size
pub fn update_dice_layout(
    table: Res<DiceTable>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut grids: Query<&mut Node, (With<DiceGrid>, Without<DieSlot>)>,
    mut slots: Query<(&DieSlot, &mut Node), Without<DiceGrid>>,
    mut labels: Query<&mut TextFont, With<DieFaceLabel>>,
) {
    let Ok(window) = windows.single() else {
        return;
    };

    let count = table.controller.dice_count();
    let size = die_size(window.width(), window.height(), count);
    let (cols, _) = best_grid(count);
    let grid_width = Val::Px(size * cols as f32 + GRID_PADDING * (cols as f32 - 1.0));

    for mut node in grids.iter_mut() {
        if node.width != grid_width {
            node.width = grid_width;
        }
    }

    for (slot, mut node) in slots.iter_mut() {
        let display = if slot.index < count {
            Display::Flex
        } else {
            Display::None
        };
        if node.display != display || node.width != Val::Px(size) {
            node.display = display;
            node.width = Val::Px(size);
            node.height = Val::Px(size);
        }
    }

    let font_size = (size * 0.5).round();
    for mut font in labels.iter_mut() {
        if font.font_size != font_size {
            font.font_size = font_size;
        }
    }
}

/// Show each die's current face
pub fn update_die_faces(
    table: Res<DiceTable>,
    art: Res<FaceArt>,
    mut images: Query<(&DieSlot, &mut ImageNode)>,
    mut labels: Query<(&DieFaceLabel, &mut Text)>,
) {
    let faces = table.controller.faces();

    for (slot, mut image) in images.iter_mut() {
        let Some(handle) = faces.get(slot.index).and_then(|&face| art.image_for(face)) else {
            continue;
        };
        if image.image != handle {
            image.image = handle;
        }
    }

    for (label, mut text) in labels.iter_mut() {
        let Some(face) = faces.get(label.index) else {
            continue;
        };
        let face = face.to_string();
        if text.0 != face {
            text.0 = face;
        }
    }
}

/// Update the banner, hint line and roll button when the phase changes
pub fn update_banner(
    phase: Res<TablePhase>,
    table: Res<DiceTable>,
    mut banner: Query<&mut Text, (With<BannerText>, Without<HintText>)>,
    mut hint: Query<&mut Text, (With<HintText>, Without<BannerText>)>,
    mut buttons: Query<&mut Node, With<RollButton>>,
) {
    if !phase.is_changed() {
        return;
    }

    let message = match *phase {
        TablePhase::Ask => ask_message(),
        TablePhase::Rolling => ROLLING_MESSAGE.to_string(),
        TablePhase::Result => table
            .controller
            .results()
            .map(|faces| result_message(&faces))
            .unwrap_or_default(),
    };
    let showing_result = *phase == TablePhase::Result;

    for mut text in banner.iter_mut() {
        text.0 = message.clone();
    }
    for mut text in hint.iter_mut() {
        text.0 = hint_message(showing_result);
    }
    for mut node in buttons.iter_mut() {
        node.display = if showing_result {
            Display::Flex
        } else {
            Display::None
        };
    }
}
