//! 2D dice roller
//!
//! Bevy front end for [`dicebox_core::RollController`]:
//!
//! - `types`: resources, components and the settings file
//! - `systems`: setup, input, animation tick, sound sync and rendering
//! - `layout`: dice grid math
//! - `banner`: result and status text
//! - `assets`: face image and roll sound discovery
//! - `plugin`: wires everything into an `App`

pub mod assets;
pub mod banner;
pub mod layout;
pub mod plugin;
pub mod systems;
pub mod types;

pub use assets::*;
pub use banner::*;
pub use layout::*;
pub use plugin::*;
pub use systems::*;
pub use types::*;
