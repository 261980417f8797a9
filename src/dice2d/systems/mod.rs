//! Systems module for dice2d
//!
//! - `setup`: asset handles and UI construction
//! - `input`: keyboard shortcuts and the roll button
//! - `dice`: animation tick and table phase
//! - `sound`: roll sound playback
//! - `rendering`: dice layout, faces and banner text

mod dice;
mod input;
mod rendering;
mod setup;
mod sound;

pub use dice::tick_dice;
pub use input::{
    handle_keyboard, handle_roll_button, handle_roll_button_hover, requested_dice_count,
};
pub use rendering::{update_banner, update_dice_layout, update_die_faces};
pub use setup::{load_table_assets, setup, BACKGROUND};
pub use sound::sync_roll_sound;
