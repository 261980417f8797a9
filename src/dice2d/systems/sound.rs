//! Roll sound playback
//!
//! The table's cue queue says when the loop should start and stop; this
//! system owns the audio entity that actually plays it.

use bevy::audio::{AudioPlayer, PlaybackSettings};
use bevy::prelude::*;
use dicebox_core::SoundCue;

use crate::dice2d::types::{DiceTable, RollSound, RollSoundPlayback};

pub fn sync_roll_sound(
    mut commands: Commands,
    mut table: ResMut<DiceTable>,
    sound: Res<RollSound>,
    playing: Query<Entity, With<RollSoundPlayback>>,
) {
    let cues = table.take_cues();
    let muted = table.is_muted();

    // Any cue (or muting) ends the current playback; a trailing loop cue
    // starts a fresh one.
    if cues.is_empty() && !muted {
        return;
    }
    for entity in playing.iter() {
        commands.entity(entity).despawn();
    }

    if muted || cues.last() != Some(&SoundCue::Loop) {
        return;
    }
    if let Some(handle) = sound.handle.clone() {
        commands.spawn((AudioPlayer(handle), PlaybackSettings::LOOP, RollSoundPlayback));
    }
}
