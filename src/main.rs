// Hide console window on Windows for release builds (GUI app).
// In debug builds, keep the console so panics/backtraces are visible.
#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use std::path::{Path, PathBuf};

use bevy::asset::AssetPlugin;
use bevy::prelude::*;
use clap::Parser;
use colored::Colorize;
use dicebox_core::settings::validate_dice_count;
use dicebox_core::Preset;
use rand::rngs::StdRng;
use rand::SeedableRng;

use dicebox::dice2d::{
    discover_assets, resolve_assets_dir, AppSettings, DiceTable, DiceTablePlugin, SettingsError,
    DEFAULT_SETTINGS_FILE,
};

/// Dicebox - animated dice roller
#[derive(Parser)]
#[command(name = "dicebox")]
#[command(author, version, about = "Dicebox - roll one to four animated dice")]
struct Cli {
    /// Number of dice on the table (1-4)
    #[arg(short, long, value_parser = parse_dice_count)]
    dice: Option<usize>,

    /// Animation preset: classic, spin or table
    #[arg(short, long, value_parser = parse_preset)]
    preset: Option<Preset>,

    /// Path to the settings JSON file
    #[arg(short, long, default_value = DEFAULT_SETTINGS_FILE)]
    settings: PathBuf,

    /// Directory with dice-1.png .. dice-6.png and the roll sound
    #[arg(short, long)]
    assets: Option<PathBuf>,

    /// Start with the roll sound off (toggle with M)
    #[arg(short, long)]
    mute: bool,

    /// Seed for reproducible rolls
    #[arg(long)]
    seed: Option<u64>,

    /// Write the effective settings back to the settings file
    #[arg(long)]
    save_settings: bool,
}

fn parse_dice_count(s: &str) -> Result<usize, String> {
    let count: usize = s
        .trim()
        .parse()
        .map_err(|_| format!("Invalid dice count: {}", s))?;
    validate_dice_count(count).map_err(|e| e.to_string())?;
    Ok(count)
}

fn parse_preset(s: &str) -> Result<Preset, String> {
    s.parse::<Preset>().map_err(|e| e.to_string())
}

/// File settings with command line overrides applied.
///
/// A settings file that fails to load is returned alongside the defaults so
/// the caller can report it.
fn effective_settings(cli: &Cli) -> (AppSettings, Option<SettingsError>) {
    let (mut settings, load_error) = match AppSettings::load(&cli.settings) {
        Ok(settings) => (settings, None),
        Err(err) => (AppSettings::default(), Some(err)),
    };

    if let Some(preset) = cli.preset {
        let dice_count = settings.roll.dice_count;
        settings.roll = preset.roll_settings();
        settings.roll.dice_count = dice_count;
    }
    if let Some(count) = cli.dice {
        settings.roll.dice_count = count;
    }
    if let Some(dir) = &cli.assets {
        settings.assets_dir = dir.clone();
    }
    if cli.mute {
        settings.sound_enabled = false;
    }
    (settings, load_error)
}

/// Write the effective settings back, unless the existing file failed to load
fn save_settings(
    path: &Path,
    settings: &AppSettings,
    load_error: Option<&SettingsError>,
) -> Result<(), String> {
    if let Some(err) = load_error {
        return Err(format!("{}; not overwriting it", err));
    }
    settings.save_to_file(path).map_err(|e| e.to_string())
}

fn main() {
    let cli = Cli::parse();
    let (settings, load_error) = effective_settings(&cli);

    if let Some(err) = &load_error {
        eprintln!("{} {}; using defaults", "Warning:".yellow().bold(), err);
    }

    if cli.save_settings {
        match save_settings(&cli.settings, &settings, load_error.as_ref()) {
            Ok(()) => println!("Saved settings to {}", cli.settings.display()),
            Err(e) => {
                eprintln!("{} {}", "Error:".red().bold(), e);
                std::process::exit(1);
            }
        }
    }

    let assets_dir = resolve_assets_dir(&settings.assets_dir);
    let discovered = discover_assets(&assets_dir);

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let with_sound = settings.sound_enabled && discovered.has_sound();
    let table = match DiceTable::new(settings.roll, with_sound, rng) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
    };

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: settings.window.title.clone(),
                        resolution: (settings.window.width, settings.window.height).into(),
                        ..default()
                    }),
                    ..default()
                })
                .set(AssetPlugin {
                    file_path: assets_dir.to_string_lossy().into_owned(),
                    ..default()
                })
                // Keep app logs at info, but silence renderer chatter.
                .set(bevy::log::LogPlugin {
                    level: bevy::log::Level::INFO,
                    filter: "info,wgpu=error,naga=warn,dicebox_core=debug".to_string(),
                    ..default()
                }),
        )
        .add_plugins(DiceTablePlugin)
        .insert_resource(settings)
        .insert_resource(discovered)
        .insert_resource(table)
        .run();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dice_count() {
        assert_eq!(parse_dice_count("1"), Ok(1));
        assert_eq!(parse_dice_count(" 4 "), Ok(4));
        assert!(parse_dice_count("0").is_err());
        assert!(parse_dice_count("5").is_err());
        assert!(parse_dice_count("two").is_err());
    }

    #[test]
    fn test_parse_preset() {
        assert_eq!(parse_preset("Table"), Ok(Preset::Table));
        assert!(parse_preset("fast").is_err());
    }

    #[test]
    fn test_cli_overrides_settings_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_SETTINGS_FILE);
        let mut file = AppSettings::default();
        file.roll.dice_count = 3;
        file.save_to_file(&path).unwrap();

        let cli = Cli::parse_from([
            "dicebox",
            "--settings",
            path.to_str().unwrap(),
            "--preset",
            "classic",
            "--mute",
        ]);
        let (settings, load_error) = effective_settings(&cli);
        assert!(load_error.is_none());

        assert_eq!(settings.roll.dice_count, 3);
        assert_eq!(settings.roll.animation, Preset::Classic.animation());
        assert!(!settings.sound_enabled);
    }

    #[test]
    fn test_dice_flag_beats_file() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli::parse_from([
            "dicebox",
            "--settings",
            dir.path().join("missing.json").to_str().unwrap(),
            "--dice",
            "4",
            "--assets",
            "art",
        ]);
        let (settings, load_error) = effective_settings(&cli);
        assert!(load_error.is_none());

        assert_eq!(settings.roll.dice_count, 4);
        assert_eq!(settings.assets_dir, PathBuf::from("art"));
        assert!(settings.sound_enabled);
    }

    #[test]
    fn test_broken_settings_file_is_not_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_SETTINGS_FILE);
        std::fs::write(&path, "{ \"roll\": { \"dice_count\": 2, }").unwrap();

        let cli = Cli::parse_from([
            "dicebox",
            "--settings",
            path.to_str().unwrap(),
            "--save-settings",
        ]);
        let (settings, load_error) = effective_settings(&cli);
        assert_eq!(settings, AppSettings::default());
        assert!(matches!(load_error, Some(SettingsError::Json(_))));

        let err = save_settings(&cli.settings, &settings, load_error.as_ref()).unwrap_err();
        assert!(err.contains("not overwriting"));
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "{ \"roll\": { \"dice_count\": 2, }"
        );
    }

    #[test]
    fn test_save_settings_writes_effective_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_SETTINGS_FILE);
        let cli = Cli::parse_from([
            "dicebox",
            "--settings",
            path.to_str().unwrap(),
            "--dice",
            "3",
            "--save-settings",
        ]);
        let (settings, load_error) = effective_settings(&cli);

        save_settings(&cli.settings, &settings, load_error.as_ref()).unwrap();
        assert_eq!(AppSettings::load_from_file(&path).unwrap().roll.dice_count, 3);
    }
}
