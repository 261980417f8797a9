//! Optional roll sound capability
//!
//! The controller asks a [`SoundPlayer`] to start looping when a roll begins
//! and to stop when the last die settles. Whatever the backend does with that
//! request, a failure never reaches the animation.

use std::collections::VecDeque;

use crate::error::SoundError;

/// Something that can loop the roll sound
pub trait SoundPlayer {
    /// Begin indefinite looped playback. Must be harmless when already looping.
    fn start_loop(&mut self) -> Result<(), SoundError>;

    /// Halt playback. Must be harmless when already stopped.
    fn stop(&mut self) -> Result<(), SoundError>;
}

impl<S: SoundPlayer + ?Sized> SoundPlayer for Box<S> {
    fn start_loop(&mut self) -> Result<(), SoundError> {
        (**self).start_loop()
    }

    fn stop(&mut self) -> Result<(), SoundError> {
        (**self).stop()
    }
}

/// Boxed player that can live inside an engine resource
pub type DynSoundPlayer = Box<dyn SoundPlayer + Send + Sync>;

/// A request made to a [`SoundPlayer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    Loop,
    Stop,
}

/// Player that accepts every request and plays nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct Muted;

impl SoundPlayer for Muted {
    fn start_loop(&mut self) -> Result<(), SoundError> {
        Ok(())
    }

    fn stop(&mut self) -> Result<(), SoundError> {
        Ok(())
    }
}

/// Player that queues cues for a frontend to act on later.
///
/// Engines that can only touch audio from their own update step (Bevy spawns
/// and despawns audio entities through `Commands`) drain this once per frame.
#[derive(Debug, Clone, Default)]
pub struct CueQueue {
    pending: VecDeque<SoundCue>,
    looping: bool,
}

impl CueQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every queued cue in the order it was issued
    pub fn drain(&mut self) -> impl Iterator<Item = SoundCue> + '_ {
        self.pending.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Whether the last accepted cue was [`SoundCue::Loop`]
    pub fn is_looping(&self) -> bool {
        self.looping
    }
}

impl SoundPlayer for CueQueue {
    fn start_loop(&mut self) -> Result<(), SoundError> {
        if !self.looping {
            self.looping = true;
            self.pending.push_back(SoundCue::Loop);
        }
        Ok(())
    }

    fn stop(&mut self) -> Result<(), SoundError> {
        if self.looping {
            self.looping = false;
            self.pending.push_back(SoundCue::Stop);
        }
        Ok(())
    }
}
