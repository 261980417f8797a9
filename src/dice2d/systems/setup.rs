//! Scene setup systems
//!
//! Loads the face art and roll sound found by asset discovery, then builds
//! the UI: banner on top, dice grid in the middle, roll button and hint line
//! at the bottom.

use bevy::audio::AudioSource;
use bevy::prelude::*;
use dicebox_core::MAX_DICE;

use crate::dice2d::assets::DiscoveredAssets;
use crate::dice2d::banner::{ask_message, hint_message, sound_warning, BANNER_TITLE};
use crate::dice2d::layout::GRID_PADDING;
use crate::dice2d::types::*;

// ============================================================================
// Constants
// ============================================================================

pub const BACKGROUND: Color = Color::srgb(0.094, 0.102, 0.106);
const BANNER_BG: Color = Color::srgba(0.137, 0.137, 0.137, 0.9);
const TEXT_PRIMARY: Color = Color::srgb(0.94, 0.94, 0.94);
const TEXT_WARNING: Color = Color::srgb(1.0, 0.67, 0.0);
const DIE_BG: Color = Color::srgb(0.96, 0.96, 0.94);
const DIE_PIP: Color = Color::srgb(0.12, 0.12, 0.12);
pub const BUTTON_BG: Color = Color::srgb(0.78, 0.78, 0.78);
pub const BUTTON_HOVER: Color = Color::srgb(0.88, 0.88, 0.88);
const BUTTON_TEXT: Color = Color::srgb(0.12, 0.12, 0.12);

// ============================================================================
// Asset loading
// ============================================================================

/// Turn discovered asset names into handles
pub fn load_table_assets(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    discovered: Res<DiscoveredAssets>,
    settings: Res<AppSettings>,
) {
    let images = discovered.face_images.as_ref().map(|names| {
        names
            .iter()
            .map(|name| asset_server.load::<Image>(name.clone()))
            .collect::<Vec<_>>()
    });
    if images.is_none() {
        warn!(
            "Missing face images {:?}; drawing faces as numbers",
            discovered.missing_faces
        );
    }
    commands.insert_resource(FaceArt { images });

    let handle: Option<Handle<AudioSource>> = discovered
        .sound
        .as_ref()
        .map(|name| asset_server.load(name.clone()));
    let warning = match &discovered.sound {
        Some(name) => {
            info!("Roll sound: {}", name);
            None
        }
        None => {
            let dir = settings.assets_dir.display().to_string();
            warn!("No roll sound found in {}", dir);
            Some(sound_warning(&dir))
        }
    };
    commands.insert_resource(RollSound { handle, warning });
}

// ============================================================================
// UI
// ============================================================================

pub fn setup(mut commands: Commands, art: Res<FaceArt>, sound: Res<RollSound>) {
    commands.spawn(Camera2d);

    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            flex_direction: FlexDirection::Column,
            align_items: AlignItems::Center,
            justify_content: JustifyContent::SpaceBetween,
            padding: UiRect::all(Val::Px(16.0)),
            row_gap: Val::Px(12.0),
            ..default()
        })
        .with_children(|root| {
            spawn_banner(root);
            spawn_dice_grid(root, &art);
            spawn_footer(root, sound.warning.as_deref());
        });
}

fn spawn_banner(parent: &mut ChildSpawnerCommands) {
    parent
        .spawn((
            Node {
                width: Val::Percent(100.0),
                min_height: Val::Px(110.0),
                flex_direction: FlexDirection::Column,
                padding: UiRect::axes(Val::Px(16.0), Val::Px(10.0)),
                row_gap: Val::Px(6.0),
                ..default()
            },
            BackgroundColor(BANNER_BG),
            BorderRadius::all(Val::Px(14.0)),
        ))
        .with_children(|banner| {
            banner.spawn((
                Text::new(BANNER_TITLE),
                TextFont {
                    font_size: 36.0,
                    ..default()
                },
                TextColor(TEXT_PRIMARY),
            ));
            banner.spawn((
                Text::new(ask_message()),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(TEXT_PRIMARY),
                BannerText,
            ));
        });
}

fn spawn_dice_grid(parent: &mut ChildSpawnerCommands, art: &FaceArt) {
    parent
        .spawn((
            Node {
                flex_direction: FlexDirection::Row,
                flex_wrap: FlexWrap::Wrap,
                justify_content: JustifyContent::Center,
                align_content: AlignContent::Center,
                column_gap: Val::Px(GRID_PADDING),
                row_gap: Val::Px(GRID_PADDING),
                ..default()
            },
            DiceGrid,
        ))
        .with_children(|grid| {
            for index in 0..MAX_DICE {
                spawn_die(grid, art, index);
            }
        });
}

/// Spawn one die slot, drawn with a face image if there is one
fn spawn_die(parent: &mut ChildSpawnerCommands, art: &FaceArt, index: usize) {
    let node = Node {
        display: Display::None,
        justify_content: JustifyContent::Center,
        align_items: AlignItems::Center,
        ..default()
    };

    match art.image_for(1) {
        Some(handle) => {
            parent.spawn((ImageNode::new(handle), node, DieSlot { index }));
        }
        None => {
            parent
                .spawn((
                    node,
                    BackgroundColor(DIE_BG),
                    BorderRadius::all(Val::Percent(12.0)),
                    DieSlot { index },
                ))
                .with_children(|die| {
                    die.spawn((
                        Text::new("1"),
                        TextFont {
                            font_size: 96.0,
                            ..default()
                        },
                        TextColor(DIE_PIP),
                        DieFaceLabel { index },
                    ));
                });
        }
    }
}

fn spawn_footer(parent: &mut ChildSpawnerCommands, warning: Option<&str>) {
    parent
        .spawn(Node {
            flex_direction: FlexDirection::Column,
            align_items: AlignItems::Center,
            row_gap: Val::Px(10.0),
            ..default()
        })
        .with_children(|footer| {
            footer
                .spawn((
                    Button,
                    Node {
                        width: Val::Px(220.0),
                        height: Val::Px(54.0),
                        display: Display::None,
                        justify_content: JustifyContent::Center,
                        align_items: AlignItems::Center,
                        ..default()
                    },
                    BackgroundColor(BUTTON_BG),
                    BorderRadius::all(Val::Px(10.0)),
                    RollButton,
                ))
                .with_children(|button| {
                    button.spawn((
                        Text::new("Roll again"),
                        TextFont {
                            font_size: 26.0,
                            ..default()
                        },
                        TextColor(BUTTON_TEXT),
                    ));
                });

            if let Some(warning) = warning {
                footer.spawn((
                    Text::new(warning),
                    TextFont {
                        font_size: 16.0,
                        ..default()
                    },
                    TextColor(TEXT_WARNING),
                    SoundWarningText,
                ));
            }

            footer.spawn((
                Text::new(hint_message(false)),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(TEXT_PRIMARY),
                HintText,
            ));
        });
}
