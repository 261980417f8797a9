//! Type definitions for the 2D dice roller
//!
//! - `table` - dice table resources, asset handles and UI marker components
//! - `settings` - application settings and the JSON settings file

pub mod settings;
pub mod table;

pub use settings::*;
pub use table::*;
