//! Banner and hint text
//!
//! Plain string builders so the wording can be tested without a window.

use dicebox_core::{MAX_DICE, MIN_DICE};

pub const BANNER_TITLE: &str = "Result";
pub const ROLLING_MESSAGE: &str = "Rolling the dice...";

/// Prompt shown before the first roll
pub fn ask_message() -> String {
    format!("How many dice? (press {}-{})", MIN_DICE, MAX_DICE)
}

/// Footer hint, which depends on whether a result is on screen
pub fn hint_message(showing_result: bool) -> String {
    if showing_result {
        format!(
            "Click Roll again, press Space, or press {}-{} to change the number of dice",
            MIN_DICE, MAX_DICE
        )
    } else {
        format!(
            "Press {}-{} to change the number of dice once they stop",
            MIN_DICE, MAX_DICE
        )
    }
}

/// Result line for a finished roll, e.g.
/// `You rolled die 1 -> 3, die 2 -> 5. Total 8.`
pub fn result_message(faces: &[u8]) -> String {
    let parts: Vec<String> = faces
        .iter()
        .enumerate()
        .map(|(i, face)| format!("die {} -> {}", i + 1, face))
        .collect();
    let total: u32 = faces.iter().map(|&f| u32::from(f)).sum();

    format!("You rolled {}. Total {}.", parts.join(", "), total)
}

/// Warning shown when no roll sound could be found
pub fn sound_warning(dir: &str) -> String {
    format!(
        "WARNING: no roll sound found in '{}'. Add dice-sound.mp3 or dice-sound.wav \
         (convert with: ffmpeg -i dice-sound.mp3 -ar 44100 -ac 2 dice-sound.wav)",
        dir
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_message_single_die() {
        assert_eq!(result_message(&[6]), "You rolled die 1 -> 6. Total 6.");
    }

    #[test]
    fn test_result_message_lists_every_die_and_total() {
        assert_eq!(
            result_message(&[3, 5, 1, 6]),
            "You rolled die 1 -> 3, die 2 -> 5, die 3 -> 1, die 4 -> 6. Total 15."
        );
    }

    #[test]
    fn test_ask_message_names_key_range() {
        assert!(ask_message().contains("1-4"));
    }

    #[test]
    fn test_hint_message_varies_with_phase() {
        assert_ne!(hint_message(true), hint_message(false));
        assert!(hint_message(true).contains("Roll again"));
    }

    #[test]
    fn test_sound_warning_mentions_directory() {
        let warning = sound_warning("assets");
        assert!(warning.starts_with("WARNING"));
        assert!(warning.contains("'assets'"));
    }
}
