//! Error types for the dice core

use thiserror::Error;

/// Rejected configuration values
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("Invalid {name} range: {min}..={max} (bounds must be finite, positive and ordered)")]
    InvalidRange { name: &'static str, min: f64, max: f64 },

    #[error("Dice count must be between {min} and {max}, got {count}")]
    DiceCount { count: usize, min: usize, max: usize },

    #[error("Guess range is empty: {low}..={high}")]
    EmptyGuessRange { low: u32, high: u32 },

    #[error("Guess {value} is outside {low}..={high}")]
    GuessOutOfRange { value: u32, low: u32, high: u32 },

    #[error("Unknown preset '{0}'. Valid: classic, spin, table")]
    UnknownPreset(String),
}

/// Errors from roll controller operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RollError {
    #[error("Dice are still rolling")]
    Busy,

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Failures reported by a sound backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SoundError {
    #[error("Sound backend unavailable: {0}")]
    Unavailable(String),

    #[error("Playback failed: {0}")]
    Playback(String),
}
