//! Face image and roll sound discovery
//!
//! The roller looks for its art in one directory: six face images
//! (`dice-1.png` .. `dice-6.png`) and an optional roll sound. Anything missing
//! degrades gracefully: faces are drawn as numbers, the roll is silent.

use std::path::{Path, PathBuf};

use bevy::prelude::Resource;
use dicebox_core::FACES;

/// Roll sound file names, in order of preference
pub const SOUND_CANDIDATES: [&str; 4] = [
    "dice-sound.mp3",
    "dice-sound.wav",
    "dice_sound.mp3",
    "dice_sound.wav",
];

/// File name of the image for `face` (1-based)
pub fn face_image_name(face: u8) -> String {
    format!("dice-{}.png", face)
}

/// What was found in an assets directory.
///
/// Paths are relative to the directory, ready to hand to the asset server.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Default)]
pub struct DiscoveredAssets {
    /// All six face images, or `None` if any is missing
    pub face_images: Option<Vec<String>>,
    /// Face images that were not found
    pub missing_faces: Vec<String>,
    pub sound: Option<String>,
}

impl DiscoveredAssets {
    pub fn has_face_images(&self) -> bool {
        self.face_images.is_some()
    }

    pub fn has_sound(&self) -> bool {
        self.sound.is_some()
    }
}

/// Scan `dir` for face images and the first available roll sound
pub fn discover_assets(dir: &Path) -> DiscoveredAssets {
    let names: Vec<String> = (1..=FACES).map(face_image_name).collect();
    let missing_faces: Vec<String> = names
        .iter()
        .filter(|name| !dir.join(name.as_str()).is_file())
        .cloned()
        .collect();

    let face_images = if missing_faces.is_empty() {
        Some(names)
    } else {
        None
    };

    let sound = SOUND_CANDIDATES
        .iter()
        .find(|name| dir.join(name).is_file())
        .map(|name| name.to_string());

    DiscoveredAssets {
        face_images,
        missing_faces,
        sound,
    }
}

/// Make `dir` absolute so the asset server does not resolve it against the
/// executable's directory.
pub fn resolve_assets_dir(dir: &Path) -> PathBuf {
    if dir.is_absolute() {
        return dir.to_path_buf();
    }
    match std::env::current_dir() {
        Ok(cwd) => cwd.join(dir),
        Err(_) => dir.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"").unwrap();
    }

    #[test]
    fn test_face_image_name() {
        assert_eq!(face_image_name(1), "dice-1.png");
        assert_eq!(face_image_name(6), "dice-6.png");
    }

    #[test]
    fn test_empty_directory_finds_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let found = discover_assets(dir.path());

        assert!(!found.has_face_images());
        assert!(!found.has_sound());
        assert_eq!(found.missing_faces.len(), 6);
    }

    #[test]
    fn test_all_faces_found() {
        let dir = tempfile::tempdir().unwrap();
        for face in 1..=6 {
            touch(dir.path(), &face_image_name(face));
        }

        let found = discover_assets(dir.path());
        assert_eq!(
            found.face_images,
            Some((1..=6).map(face_image_name).collect::<Vec<_>>())
        );
        assert!(found.missing_faces.is_empty());
    }

    #[test]
    fn test_one_missing_face_disables_images() {
        let dir = tempfile::tempdir().unwrap();
        for face in 1..=5 {
            touch(dir.path(), &face_image_name(face));
        }

        let found = discover_assets(dir.path());
        assert!(!found.has_face_images());
        assert_eq!(found.missing_faces, vec!["dice-6.png".to_string()]);
    }

    #[test]
    fn test_sound_prefers_mp3_then_wav() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "dice_sound.wav");
        assert_eq!(
            discover_assets(dir.path()).sound.as_deref(),
            Some("dice_sound.wav")
        );

        touch(dir.path(), "dice-sound.wav");
        assert_eq!(
            discover_assets(dir.path()).sound.as_deref(),
            Some("dice-sound.wav")
        );

        touch(dir.path(), "dice-sound.mp3");
        assert_eq!(
            discover_assets(dir.path()).sound.as_deref(),
            Some("dice-sound.mp3")
        );
    }

    #[test]
    fn test_resolve_assets_dir_keeps_absolute_paths() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(resolve_assets_dir(dir.path()), dir.path());
    }

    #[test]
    fn test_resolve_assets_dir_makes_relative_absolute() {
        assert!(resolve_assets_dir(Path::new("assets")).is_absolute());
    }
}
