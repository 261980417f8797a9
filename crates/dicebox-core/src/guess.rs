//! Number guessing game
//!
//! The computer picks a secret number in a range and answers each guess with
//! a hint until the player finds it.

use crate::error::ConfigError;
use crate::random::RandomSource;

pub const DEFAULT_LOW: u32 = 1;
pub const DEFAULT_HIGH: u32 = 100;

/// Answer to a single guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hint {
    TooLow,
    TooHigh,
    Correct { attempts: u32 },
}

#[derive(Debug, Clone)]
pub struct GuessGame {
    low: u32,
    high: u32,
    secret: u32,
    attempts: u32,
    solved: bool,
}

impl GuessGame {
    pub fn new(low: u32, high: u32, rng: &mut impl RandomSource) -> Result<Self, ConfigError> {
        if low >= high {
            return Err(ConfigError::EmptyGuessRange { low, high });
        }
        Ok(Self {
            low,
            high,
            secret: rng.integer(low, high),
            attempts: 0,
            solved: false,
        })
    }

    /// Check a guess. Out-of-range guesses are rejected and not counted.
    pub fn guess(&mut self, value: u32) -> Result<Hint, ConfigError> {
        if value < self.low || value > self.high {
            return Err(ConfigError::GuessOutOfRange {
                value,
                low: self.low,
                high: self.high,
            });
        }

        self.attempts += 1;
        let hint = match value.cmp(&self.secret) {
            std::cmp::Ordering::Less => Hint::TooLow,
            std::cmp::Ordering::Greater => Hint::TooHigh,
            std::cmp::Ordering::Equal => {
                self.solved = true;
                Hint::Correct {
                    attempts: self.attempts,
                }
            }
        };
        Ok(hint)
    }

    pub fn range(&self) -> (u32, u32) {
        (self.low, self.high)
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// The number to find. Only meant for reveal-on-quit and tests.
    pub fn secret(&self) -> u32 {
        self.secret
    }
}
