//! Dice table resources and UI markers

use bevy::audio::AudioSource;
use bevy::prelude::*;
use dicebox_core::{CueQueue, RollController, RollError, RollSettings, SoundCue};
use rand::rngs::StdRng;

// ============================================================================
// Table state
// ============================================================================

/// The dice on the table and the randomness that drives them.
///
/// Sound goes through a [`CueQueue`]; `sync_roll_sound` turns its cues into
/// audio entities.
#[derive(Resource, Debug)]
pub struct DiceTable {
    pub controller: RollController<CueQueue>,
    pub rng: StdRng,
}

impl DiceTable {
    pub fn new(settings: RollSettings, with_sound: bool, mut rng: StdRng) -> Result<Self, RollError> {
        let sound = with_sound.then(CueQueue::new);
        let controller = RollController::with_sound(settings, sound, &mut rng)?;
        Ok(Self { controller, rng })
    }

    /// Start a roll at `now`. Returns false if the dice are still spinning.
    pub fn roll(&mut self, now: f64) -> bool {
        self.controller.start_roll(now, &mut self.rng)
    }

    /// Advance the animation. Returns true on the frame the roll finishes.
    pub fn tick(&mut self, now: f64) -> bool {
        self.controller.update(now, &mut self.rng)
    }

    pub fn set_dice_count(&mut self, count: usize) -> Result<(), RollError> {
        self.controller.set_dice_count(count, &mut self.rng)
    }

    pub fn is_rolling(&self) -> bool {
        self.controller.is_any_animating()
    }

    pub fn is_muted(&self) -> bool {
        !self.controller.has_sound()
    }

    /// Toggle the roll sound. Returns the new muted state.
    pub fn toggle_mute(&mut self) -> bool {
        if self.is_muted() {
            self.controller.set_sound(Some(CueQueue::new()));
        } else {
            self.controller.set_sound(None);
        }
        self.is_muted()
    }

    /// Take the pending sound cues
    pub fn take_cues(&mut self) -> Vec<SoundCue> {
        match self.controller.sound_mut() {
            Some(queue) => queue.drain().collect(),
            None => Vec::new(),
        }
    }

    pub fn phase(&self) -> TablePhase {
        if self.controller.rolls() == 0 {
            TablePhase::Ask
        } else if self.is_rolling() {
            TablePhase::Rolling
        } else {
            TablePhase::Result
        }
    }
}

/// What the table is showing
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TablePhase {
    /// Waiting for the first roll
    #[default]
    Ask,
    Rolling,
    Result,
}

// ============================================================================
// Assets
// ============================================================================

/// Face images, or `None` to draw faces as numbers
#[derive(Resource, Debug, Clone, Default)]
pub struct FaceArt {
    pub images: Option<Vec<Handle<Image>>>,
}

impl FaceArt {
    /// Image for `face` (1-based)
    pub fn image_for(&self, face: u8) -> Option<Handle<Image>> {
        let index = usize::from(face.checked_sub(1)?);
        self.images.as_ref()?.get(index).cloned()
    }
}

#[derive(Resource, Debug, Clone, Default)]
pub struct RollSound {
    pub handle: Option<Handle<AudioSource>>,
    /// Shown under the dice when no sound could be found
    pub warning: Option<String>,
}

// ============================================================================
// UI markers
// ============================================================================

/// A die on the grid; slots past the dice count are hidden
#[derive(Component, Debug, Clone, Copy)]
pub struct DieSlot {
    pub index: usize,
}

/// Face number drawn when there are no face images
#[derive(Component, Debug, Clone, Copy)]
pub struct DieFaceLabel {
    pub index: usize,
}

#[derive(Component)]
pub struct DiceGrid;

#[derive(Component)]
pub struct BannerText;

#[derive(Component)]
pub struct HintText;

#[derive(Component)]
pub struct RollButton;

#[derive(Component)]
pub struct SoundWarningText;

/// Looping roll sound entity
#[derive(Component)]
pub struct RollSoundPlayback;
