//! Jumper - move a square around, jump, watch the snow

use std::path::{Path, PathBuf};

use bevy::asset::AssetPlugin;
use bevy::audio::{AudioPlayer, AudioSource, PlaybackSettings};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use dicebox::dice2d::resolve_assets_dir;
use dicebox::jumper::{
    Controls, Player, Snow, FIELD_HEIGHT, FIELD_WIDTH, PLAYER_HALF_SIZE, SNOW_FLAKES,
};

const PLAYER_IMAGE: &str = "player.png";
const BACKGROUND_IMAGE: &str = "space.jpg";
const CLICK_SOUND: &str = "gunshot.wav";
const MUSIC: &str = "bgmusic.wav";

/// Jumper - a movable rectangle with a parabolic jump
#[derive(Parser)]
#[command(name = "jumper")]
#[command(author, version, about = "Jumper - move with the arrows, jump with Space")]
struct Cli {
    /// Directory with space.jpg, player.png, gunshot.wav and bgmusic.wav (all optional)
    #[arg(short, long, default_value = "assets")]
    assets: PathBuf,

    /// No music or click sounds
    #[arg(short, long)]
    mute: bool,
}

#[derive(Resource)]
struct Playfield {
    player: Player,
    snow: Snow,
    rng: StdRng,
}

/// Optional sounds found in the assets directory
#[derive(Resource, Default)]
struct JumperSounds {
    click: Option<Handle<AudioSource>>,
}

#[derive(Resource)]
struct JumperConfig {
    assets_dir: PathBuf,
    mute: bool,
}

#[derive(Component)]
struct PlayerSprite;

#[derive(Component)]
struct FlakeSprite(usize);

fn main() {
    let cli = Cli::parse();
    let assets_dir = resolve_assets_dir(&cli.assets);

    let mut rng = StdRng::from_entropy();
    let snow = Snow::new(SNOW_FLAKES, &mut rng);

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Jumper".to_string(),
                        resolution: (FIELD_WIDTH as u32, FIELD_HEIGHT as u32).into(),
                        resizable: false,
                        ..default()
                    }),
                    ..default()
                })
                .set(AssetPlugin {
                    file_path: assets_dir.to_string_lossy().into_owned(),
                    ..default()
                })
                .set(bevy::log::LogPlugin {
                    level: bevy::log::Level::INFO,
                    filter: "info,wgpu=error,naga=warn".to_string(),
                    ..default()
                }),
        )
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(Time::<Fixed>::from_hz(60.0))
        .insert_resource(Playfield {
            player: Player::default(),
            snow,
            rng,
        })
        .insert_resource(JumperConfig {
            assets_dir,
            mute: cli.mute,
        })
        .init_resource::<JumperSounds>()
        .add_systems(Startup, setup)
        .add_systems(FixedUpdate, step_playfield)
        .add_systems(Update, (handle_clicks, sync_sprites))
        .run();
}

/// `name` if it exists in `dir`
fn optional_asset<'a>(dir: &Path, name: &'a str) -> Option<&'a str> {
    dir.join(name).is_file().then_some(name)
}

/// Screen coordinates (top-left origin) to a centered, y-up translation
fn to_translation(x: f32, y: f32, z: f32) -> Vec3 {
    Vec3::new(x - FIELD_WIDTH / 2.0, FIELD_HEIGHT / 2.0 - y, z)
}

fn setup(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    config: Res<JumperConfig>,
    field: Res<Playfield>,
    mut sounds: ResMut<JumperSounds>,
) {
    commands.spawn(Camera2d);

    let field_size = Vec2::new(FIELD_WIDTH, FIELD_HEIGHT);
    if let Some(name) = optional_asset(&config.assets_dir, BACKGROUND_IMAGE) {
        commands.spawn((
            Sprite {
                image: asset_server.load(name),
                custom_size: Some(field_size),
                ..default()
            },
            Transform::from_translation(to_translation(
                FIELD_WIDTH / 2.0,
                FIELD_HEIGHT / 2.0,
                -1.0,
            )),
        ));
    }

    for (index, flake) in field.snow.flakes.iter().enumerate() {
        commands.spawn((
            Sprite::from_color(Color::WHITE, Vec2::splat(4.0)),
            Transform::from_translation(to_translation(flake.x, flake.y, 0.0)),
            FlakeSprite(index),
        ));
    }

    let size = Vec2::splat(PLAYER_HALF_SIZE * 2.0);
    let sprite = if let Some(name) = optional_asset(&config.assets_dir, PLAYER_IMAGE) {
        Sprite {
            image: asset_server.load(name),
            custom_size: Some(size),
            ..default()
        }
    } else {
        Sprite::from_color(Color::srgb(1.0, 0.0, 0.0), size)
    };
    commands.spawn((
        sprite,
        Transform::from_translation(to_translation(field.player.x, field.player.y, 1.0)),
        PlayerSprite,
    ));

    if config.mute {
        return;
    }
    if config.assets_dir.join(MUSIC).is_file() {
        commands.spawn((
            AudioPlayer::<AudioSource>(asset_server.load(MUSIC)),
            PlaybackSettings::LOOP,
        ));
    } else {
        warn!("No {} in {}", MUSIC, config.assets_dir.display());
    }
    if config.assets_dir.join(CLICK_SOUND).is_file() {
        sounds.click = Some(asset_server.load(CLICK_SOUND));
    }
}

fn read_controls(keyboard: &ButtonInput<KeyCode>) -> Controls {
    Controls {
        left: keyboard.pressed(KeyCode::ArrowLeft),
        right: keyboard.pressed(KeyCode::ArrowRight),
        up: keyboard.pressed(KeyCode::ArrowUp),
        down: keyboard.pressed(KeyCode::ArrowDown),
        diagonal: keyboard.pressed(KeyCode::KeyQ),
        faster: keyboard.any_pressed([KeyCode::Equal, KeyCode::NumpadAdd]),
        slower: keyboard.any_pressed([KeyCode::Minus, KeyCode::NumpadSubtract]),
        jump: keyboard.pressed(KeyCode::Space),
    }
}

fn step_playfield(keyboard: Res<ButtonInput<KeyCode>>, mut field: ResMut<Playfield>) {
    let controls = read_controls(&keyboard);
    let Playfield { player, snow, rng } = &mut *field;
    player.step(&controls);
    snow.step(rng);
}

fn handle_clicks(
    mut commands: Commands,
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    sounds: Res<JumperSounds>,
) {
    if !mouse.just_pressed(MouseButton::Left) {
        return;
    }
    if let Some(handle) = sounds.click.clone() {
        commands.spawn((AudioPlayer(handle), PlaybackSettings::DESPAWN));
    }
    if let Some(position) = windows.single().ok().and_then(Window::cursor_position) {
        info!("Mouse clicked at: {} {}", position.x, position.y);
    }
}

fn sync_sprites(
    field: Res<Playfield>,
    mut player: Query<&mut Transform, (With<PlayerSprite>, Without<FlakeSprite>)>,
    mut flakes: Query<(&FlakeSprite, &mut Transform), Without<PlayerSprite>>,
) {
    for mut transform in player.iter_mut() {
        transform.translation = to_translation(field.player.x, field.player.y, 1.0);
    }
    for (flake, mut transform) in flakes.iter_mut() {
        if let Some(state) = field.snow.flakes.get(flake.0) {
            transform.translation = to_translation(state.x, state.y, 0.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_optional_assets_need_the_file() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(optional_asset(dir.path(), BACKGROUND_IMAGE), None);

        fs::write(dir.path().join(BACKGROUND_IMAGE), b"").unwrap();
        assert_eq!(
            optional_asset(dir.path(), BACKGROUND_IMAGE),
            Some(BACKGROUND_IMAGE)
        );
        assert_eq!(optional_asset(dir.path(), PLAYER_IMAGE), None);
    }

    #[test]
    fn test_background_sits_behind_the_field_center() {
        let center = to_translation(FIELD_WIDTH / 2.0, FIELD_HEIGHT / 2.0, -1.0);
        assert_eq!(center, Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(to_translation(0.0, 0.0, 0.0), Vec3::new(-350.0, 250.0, 0.0));
    }
}
