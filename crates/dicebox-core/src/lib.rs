//! Dice roll animation core
//!
//! Engine-independent state machines shared by the windowed and terminal
//! dice toys:
//!
//! - [`DieAnimation`]: one die's spin, from random outcome to frozen face
//! - [`RollController`]: several dice rolled together, with an optional
//!   looping [`SoundPlayer`]
//! - [`GuessGame`]: the number guessing game
//!
//! Time comes in as `f64` seconds from any monotonic [`Clock`]; randomness
//! from any [`RandomSource`] (every `rand::Rng` is one).

pub mod animation;
pub mod clock;
pub mod controller;
pub mod error;
pub mod guess;
pub mod random;
pub mod settings;
pub mod sound;

pub use animation::{advance_face, DieAnimation};
pub use clock::{Clock, ManualClock, SystemClock};
pub use controller::RollController;
pub use error::{ConfigError, RollError, SoundError};
pub use guess::{GuessGame, Hint};
pub use random::{RandomSource, ScriptedRandom, FACES};
pub use settings::{
    AnimationSettings, FacePolicy, FaceStart, Preset, RollSettings, SecondsRange, MAX_DICE,
    MIN_DICE,
};
pub use sound::{CueQueue, DynSoundPlayer, Muted, SoundCue, SoundPlayer};
