//! Dicebox
//!
//! Windowed front ends for the dice toys:
//!
//! - `dice2d`: the Bevy dice roller (faces, roll button, result banner, roll sound)
//! - `jumper`: state for the movable-rectangle toy

pub mod dice2d;
pub mod jumper;
