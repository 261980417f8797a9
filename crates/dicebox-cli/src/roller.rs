//! Terminal dice animation
//!
//! Redraws the dice on one line with a carriage return at 60 Hz until every
//! die has settled.

use std::io::{self, Write};

use colored::Colorize;
use dicebox_core::{Clock, RandomSource, RollController, RollError, RollSettings};
use serde::Serialize;

pub const FRAME_SECONDS: f64 = 1.0 / 60.0;

/// Unicode die face for `face` (1-6)
pub fn face_glyph(face: u8) -> char {
    match face {
        1 => '⚀',
        2 => '⚁',
        3 => '⚂',
        4 => '⚃',
        5 => '⚄',
        _ => '⚅',
    }
}

/// One animation frame without colours, e.g. `⚂ 3   ⚄ 5`
pub fn frame_text(faces: &[u8]) -> String {
    faces
        .iter()
        .map(|&face| format!("{} {}", face_glyph(face), face))
        .collect::<Vec<_>>()
        .join("   ")
}

/// Outcome of one roll, as printed by `--json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RollReport {
    pub roll: u64,
    pub dice: Vec<u8>,
    pub total: u32,
}

impl RollReport {
    pub fn new(roll: u64, dice: Vec<u8>) -> Self {
        let total = dice.iter().map(|&d| u32::from(d)).sum();
        Self { roll, dice, total }
    }
}

/// Dice, a clock and a random source for a terminal session
pub struct TerminalRoller<C, R> {
    controller: RollController,
    clock: C,
    rng: R,
}

impl<C: Clock, R: RandomSource> TerminalRoller<C, R> {
    pub fn new(settings: RollSettings, clock: C, mut rng: R) -> Result<Self, RollError> {
        let controller = RollController::new(settings, &mut rng)?;
        Ok(Self {
            controller,
            clock,
            rng,
        })
    }

    pub fn controller(&self) -> &RollController {
        &self.controller
    }

    /// Roll and animate into `out`, calling `wait` between frames.
    ///
    /// `wait` receives the frame time in seconds; it sleeps for real rolls
    /// and advances a manual clock for instant ones.
    pub fn roll(
        &mut self,
        out: &mut impl Write,
        mut wait: impl FnMut(f64),
    ) -> io::Result<RollReport> {
        self.controller.start_roll(self.clock.now(), &mut self.rng);

        loop {
            self.controller.update(self.clock.now(), &mut self.rng);
            let rolling = self.controller.is_any_animating();
            let frame = frame_text(&self.controller.faces());

            if rolling {
                write!(out, "\r{}", frame.yellow())?;
            } else {
                write!(out, "\r{}", frame.bright_green().bold())?;
            }
            out.flush()?;

            if !rolling {
                break;
            }
            wait(FRAME_SECONDS);
        }

        writeln!(out)?;
        Ok(RollReport::new(
            self.controller.rolls(),
            self.controller.faces(),
        ))
    }
}
