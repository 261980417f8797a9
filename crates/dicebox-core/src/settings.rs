//! Roll animation settings and presets
//!
//! The differences between the old dice toys (re-randomizing vs cycling faces,
//! desynchronized phases, fixed vs random resting face) are expressed here as
//! configuration instead of separate copies of the animation code.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Fewest dice a controller will hold
pub const MIN_DICE: usize = 1;
/// Most dice a controller will hold
pub const MAX_DICE: usize = 4;

// ============================================================================
// Ranges and policies
// ============================================================================

/// Closed interval of seconds a value is sampled from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SecondsRange {
    pub min: f64,
    pub max: f64,
}

impl SecondsRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Bounds must be finite, strictly positive and ordered.
    pub fn validate(&self, name: &'static str) -> Result<(), ConfigError> {
        let ok = self.min.is_finite() && self.max.is_finite() && self.min > 0.0 && self.min <= self.max;
        if ok {
            Ok(())
        } else {
            Err(ConfigError::InvalidRange {
                name,
                min: self.min,
                max: self.max,
            })
        }
    }
}

/// How the visible face moves while a die spins
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FacePolicy {
    /// Advance 1→2→…→6→1 once per elapsed interval
    #[default]
    Cycle,
    /// Draw a fresh random face on the first tick of a roll and then
    /// whenever an interval elapses
    Reroll,
}

/// Which face a die shows before its first roll, or when a roll begins
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaceStart {
    #[default]
    One,
    Random,
    /// Continue from whatever is showing. Behaves like `One` for a new die.
    Keep,
}

// ============================================================================
// Animation settings
// ============================================================================

fn default_duration() -> SecondsRange {
    SecondsRange::new(0.8, 1.6)
}

fn default_change_interval() -> SecondsRange {
    SecondsRange::new(0.06, 0.12)
}

fn default_phase_offset() -> bool {
    true
}

/// Timing and face policies applied to every die of a roll
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationSettings {
    /// Total spin time, sampled per die per roll
    #[serde(default = "default_duration")]
    pub duration: SecondsRange,

    /// Time between face changes, sampled per die per roll
    #[serde(default = "default_change_interval")]
    pub change_interval: SecondsRange,

    #[serde(default)]
    pub face_policy: FacePolicy,

    /// Shift each die's first face change by a random fraction of its
    /// interval so dice rolled together do not flip in lockstep.
    #[serde(default = "default_phase_offset")]
    pub phase_offset: bool,

    #[serde(default)]
    pub initial_face: FaceStart,

    #[serde(default)]
    pub roll_start_face: FaceStart,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Preset::Spin.animation()
    }
}

impl AnimationSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.duration.validate("duration")?;
        self.change_interval.validate("change interval")
    }
}

// ============================================================================
// Roll settings
// ============================================================================

fn default_dice_count() -> usize {
    2
}

/// Everything a [`crate::RollController`] needs to know up front
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RollSettings {
    #[serde(default = "default_dice_count")]
    pub dice_count: usize,

    #[serde(default)]
    pub animation: AnimationSettings,
}

impl Default for RollSettings {
    fn default() -> Self {
        Preset::Spin.roll_settings()
    }
}

impl RollSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_dice_count(self.dice_count)?;
        self.animation.validate()
    }
}

pub fn validate_dice_count(count: usize) -> Result<(), ConfigError> {
    if (MIN_DICE..=MAX_DICE).contains(&count) {
        Ok(())
    } else {
        Err(ConfigError::DiceCount {
            count,
            min: MIN_DICE,
            max: MAX_DICE,
        })
    }
}

// ============================================================================
// Presets
// ============================================================================

/// Named configurations matching the behaviour of the individual dice toys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    /// Two dice, random faces every interval, random resting face
    Classic,
    /// Two dice cycling from face 1 with desynchronized phases
    #[default]
    Spin,
    /// One to four dice with longer, jumpier spins
    Table,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::Classic, Preset::Spin, Preset::Table];

    pub fn name(&self) -> &'static str {
        match self {
            Preset::Classic => "classic",
            Preset::Spin => "spin",
            Preset::Table => "table",
        }
    }

    pub fn parse(s: &str) -> Option<Preset> {
        match s.trim().to_lowercase().as_str() {
            "classic" => Some(Preset::Classic),
            "spin" => Some(Preset::Spin),
            "table" => Some(Preset::Table),
            _ => None,
        }
    }

    pub fn animation(&self) -> AnimationSettings {
        match self {
            Preset::Classic => AnimationSettings {
                duration: SecondsRange::new(0.8, 1.6),
                change_interval: SecondsRange::new(0.06, 0.12),
                face_policy: FacePolicy::Reroll,
                phase_offset: false,
                initial_face: FaceStart::Random,
                roll_start_face: FaceStart::Random,
            },
            Preset::Spin => AnimationSettings {
                duration: SecondsRange::new(0.8, 1.6),
                change_interval: SecondsRange::new(0.06, 0.12),
                face_policy: FacePolicy::Cycle,
                phase_offset: true,
                initial_face: FaceStart::One,
                roll_start_face: FaceStart::One,
            },
            Preset::Table => AnimationSettings {
                duration: SecondsRange::new(0.8, 1.8),
                change_interval: SecondsRange::new(0.05, 0.12),
                face_policy: FacePolicy::Reroll,
                phase_offset: false,
                initial_face: FaceStart::Random,
                roll_start_face: FaceStart::Random,
            },
        }
    }

    pub fn roll_settings(&self) -> RollSettings {
        RollSettings {
            dice_count: 2,
            animation: self.animation(),
        }
    }
}

impl std::str::FromStr for Preset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::parse(s).ok_or_else(|| ConfigError::UnknownPreset(s.to_string()))
    }
}
