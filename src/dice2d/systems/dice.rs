//! Dice animation tick

use bevy::prelude::*;

use crate::dice2d::banner::result_message;
use crate::dice2d::types::{DiceTable, TablePhase};

/// Advance the dice to the current frame time and publish the table phase.
pub fn tick_dice(time: Res<Time>, mut table: ResMut<DiceTable>, mut phase: ResMut<TablePhase>) {
    if table.tick(time.elapsed_secs_f64()) {
        if let Some(results) = table.controller.results() {
            info!("{}", result_message(&results));
        }
    }

    let current = table.phase();
    if *phase != current {
        *phase = current;
    }
}
