//! Dice table plugin
//!
//! Expects `AppSettings`, `DiscoveredAssets` and `DiceTable` to be inserted
//! by the caller before the app runs.

use bevy::prelude::*;

use crate::dice2d::systems::*;
use crate::dice2d::types::TablePhase;

pub struct DiceTablePlugin;

impl Plugin for DiceTablePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(BACKGROUND))
            .init_resource::<TablePhase>()
            .add_systems(Startup, (load_table_assets, setup).chain())
            .add_systems(
                Update,
                (
                    handle_keyboard,
                    handle_roll_button,
                    handle_roll_button_hover,
                    tick_dice,
                    sync_roll_sound,
                    update_dice_layout,
                    update_die_faces,
                    update_banner,
                )
                    .chain(),
            );
    }
}
