//! Multi-die roll controller
//!
//! Owns the dice of one table and moves them between two states:
//!
//! - **Idle**: nothing spins; `results()` is available.
//! - **Rolling**: at least one die spins; new rolls are ignored.
//!
//! The roll sound is edge-triggered: looped on Idle → Rolling and stopped on
//! Rolling → Idle, never re-issued while the state holds.

use std::fmt;

use tracing::{debug, warn};

use crate::animation::DieAnimation;
use crate::error::RollError;
use crate::random::RandomSource;
use crate::settings::{validate_dice_count, AnimationSettings, RollSettings};
use crate::sound::{DynSoundPlayer, SoundCue, SoundPlayer};

/// Dice that start and finish their rolls together
pub struct RollController<S = DynSoundPlayer> {
    settings: RollSettings,
    dice: Vec<DieAnimation>,
    sound: Option<S>,
    rolls: u64,
}

impl RollController {
    /// Build a silent controller.
    pub fn new(settings: RollSettings, rng: &mut impl RandomSource) -> Result<Self, RollError> {
        Self::with_sound(settings, None, rng)
    }
}

impl<S: SoundPlayer> RollController<S> {
    /// Build a controller that cues `sound` on roll start and finish.
    pub fn with_sound(
        settings: RollSettings,
        sound: Option<S>,
        rng: &mut impl RandomSource,
    ) -> Result<Self, RollError> {
        settings.validate()?;

        let mut dice = Vec::with_capacity(settings.dice_count);
        for _ in 0..settings.dice_count {
            dice.push(DieAnimation::new(settings.animation, rng));
        }

        Ok(Self {
            settings,
            dice,
            sound,
            rolls: 0,
        })
    }

    /// Start every die at `now`.
    ///
    /// Ignored (returns `false`) while any die is still spinning, leaving the
    /// in-flight roll untouched.
    pub fn start_roll(&mut self, now: f64, rng: &mut impl RandomSource) -> bool {
        if self.is_any_animating() {
            debug!("Roll requested while dice are spinning; ignored");
            return false;
        }

        for die in &mut self.dice {
            die.start(now, rng);
        }
        self.rolls += 1;
        debug!(dice = self.dice.len(), roll = self.rolls, "Roll started");

        self.cue(SoundCue::Loop);
        true
    }

    /// Advance every die to `now`.
    ///
    /// Returns `true` on the call where the last spinning die settles.
    pub fn update(&mut self, now: f64, rng: &mut impl RandomSource) -> bool {
        if !self.is_any_animating() {
            return false;
        }

        for die in &mut self.dice {
            die.update(now, rng);
        }

        if self.is_any_animating() {
            return false;
        }

        debug!(results = ?self.faces(), "Roll finished");
        self.cue(SoundCue::Stop);
        true
    }

    pub fn is_any_animating(&self) -> bool {
        self.dice.iter().any(DieAnimation::is_animating)
    }

    /// Final faces in die order, or `None` while a roll is in flight.
    pub fn results(&self) -> Option<Vec<u8>> {
        if self.is_any_animating() {
            return None;
        }
        Some(self.dice.iter().map(DieAnimation::final_face).collect())
    }

    /// Sum of [`Self::results`]
    pub fn total(&self) -> Option<u32> {
        self.results()
            .map(|faces| faces.iter().map(|f| u32::from(*f)).sum())
    }

    /// Faces currently on display, spinning or not
    pub fn faces(&self) -> Vec<u8> {
        self.dice.iter().map(DieAnimation::current_face).collect()
    }

    pub fn dice(&self) -> &[DieAnimation] {
        &self.dice
    }

    pub fn dice_count(&self) -> usize {
        self.dice.len()
    }

    pub fn settings(&self) -> &RollSettings {
        &self.settings
    }

    /// Number of rolls this controller has started
    pub fn rolls(&self) -> u64 {
        self.rolls
    }

    /// Add or remove dice. Existing dice keep their faces; new dice start idle.
    pub fn set_dice_count(
        &mut self,
        count: usize,
        rng: &mut impl RandomSource,
    ) -> Result<(), RollError> {
        if self.is_any_animating() {
            return Err(RollError::Busy);
        }
        validate_dice_count(count)?;

        self.dice.truncate(count);
        while self.dice.len() < count {
            self.dice.push(DieAnimation::new(self.settings.animation, rng));
        }
        self.settings.dice_count = count;
        Ok(())
    }

    /// Swap the animation policy used from the next roll on.
    pub fn set_animation(&mut self, animation: AnimationSettings) -> Result<(), RollError> {
        if self.is_any_animating() {
            return Err(RollError::Busy);
        }
        animation.validate()?;

        for die in &mut self.dice {
            die.set_settings(animation);
        }
        self.settings.animation = animation;
        Ok(())
    }

    pub fn has_sound(&self) -> bool {
        self.sound.is_some()
    }

    pub fn sound_mut(&mut self) -> Option<&mut S> {
        self.sound.as_mut()
    }

    /// Replace the sound player, returning the old one.
    ///
    /// Mid-roll, the old player is stopped and the new one starts looping so
    /// the pairing of loop and stop cues stays intact.
    pub fn set_sound(&mut self, sound: Option<S>) -> Option<S> {
        let rolling = self.is_any_animating();
        if rolling {
            self.cue(SoundCue::Stop);
        }
        let old = std::mem::replace(&mut self.sound, sound);
        if rolling {
            self.cue(SoundCue::Loop);
        }
        old
    }

    fn cue(&mut self, cue: SoundCue) {
        let Some(sound) = self.sound.as_mut() else {
            return;
        };

        let result = match cue {
            SoundCue::Loop => sound.start_loop(),
            SoundCue::Stop => sound.stop(),
        };
        if let Err(err) = result {
            warn!(error = %err, ?cue, "Roll sound failed; continuing silently");
        }
    }
}

impl<S> fmt::Debug for RollController<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RollController")
            .field("settings", &self.settings)
            .field("dice", &self.dice)
            .field("has_sound", &self.sound.is_some())
            .field("rolls", &self.rolls)
            .finish()
    }
}
