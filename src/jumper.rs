//! Movable rectangle toy
//!
//! A square player on a fixed play field: arrow keys move it, Space makes it
//! jump along a parabola, +/- change its speed, Q moves it diagonally up-left.
//! Snow drifts down the screen in the background.
//!
//! Everything here is plain state advanced once per 60 Hz tick, in screen
//! coordinates (origin top-left, y grows downwards). The `jumper` binary maps
//! it onto Bevy sprites.

use dicebox_core::RandomSource;

pub const FIELD_WIDTH: f32 = 700.0;
pub const FIELD_HEIGHT: f32 = 500.0;

/// Half the player's side length; the player never leaves the field
pub const PLAYER_HALF_SIZE: f32 = 25.0;

pub const DEFAULT_SPEED: i32 = 5;
pub const MIN_SPEED: i32 = 1;

/// Jump counter at take-off. The jump ends after it counts down past its negation.
pub const JUMP_START: i32 = 10;

pub const SNOW_FLAKES: usize = 50;

// ============================================================================
// Input
// ============================================================================

/// Keys held during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Controls {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    /// Q: up and left at once
    pub diagonal: bool,
    pub faster: bool,
    pub slower: bool,
    pub jump: bool,
}

// ============================================================================
// Player
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub speed: i32,
    /// Jump counter while airborne
    pub jump: Option<i32>,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            x: FIELD_WIDTH / 2.0,
            y: FIELD_HEIGHT / 2.0,
            speed: DEFAULT_SPEED,
            jump: None,
        }
    }
}

impl Player {
    pub fn is_jumping(&self) -> bool {
        self.jump.is_some()
    }

    /// Advance one tick
    pub fn step(&mut self, controls: &Controls) {
        let speed = self.speed as f32;

        if controls.left {
            self.x -= speed;
        }
        if controls.right {
            self.x += speed;
        }

        match self.jump {
            Some(count) if count >= -JUMP_START => {
                self.y -= jump_offset(count);
                self.jump = Some(count - 1);
            }
            Some(_) => self.jump = None,
            None => {
                if controls.up {
                    self.y -= speed;
                }
                if controls.down {
                    self.y += speed;
                }
            }
        }

        if controls.faster {
            self.speed += 1;
        }
        if controls.slower {
            self.speed = (self.speed - 1).max(MIN_SPEED);
        }
        if controls.diagonal {
            self.x -= speed;
            self.y -= speed;
        }
        if controls.jump && self.jump.is_none() {
            self.jump = Some(JUMP_START);
        }

        self.clamp();
    }

    fn clamp(&mut self) {
        self.x = self
            .x
            .clamp(PLAYER_HALF_SIZE, FIELD_WIDTH - PLAYER_HALF_SIZE);
        self.y = self
            .y
            .clamp(PLAYER_HALF_SIZE, FIELD_HEIGHT - PLAYER_HALF_SIZE);
    }
}

/// Upward displacement for one jump tick: `count² · sign(count)`
pub fn jump_offset(count: i32) -> f32 {
    let squared = (count * count) as f32;
    if count < 0 {
        -squared
    } else {
        squared
    }
}

// ============================================================================
// Snow
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snowflake {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Snow {
    pub flakes: Vec<Snowflake>,
}

impl Snow {
    /// Scatter `count` flakes over the field
    pub fn new(count: usize, rng: &mut impl RandomSource) -> Self {
        let flakes = (0..count)
            .map(|_| Snowflake {
                x: random_coordinate(rng, FIELD_WIDTH),
                y: random_coordinate(rng, FIELD_HEIGHT),
            })
            .collect();
        Self { flakes }
    }

    /// Fall 1 px, drift sideways by -1..=2 px, respawn flakes that left the
    /// bottom: two times in three along the top edge, otherwise the left edge.
    pub fn step(&mut self, rng: &mut impl RandomSource) {
        for flake in &mut self.flakes {
            flake.y += 1.0;
            flake.x += rng.integer(0, 3) as f32 - 1.0;

            if flake.y > FIELD_HEIGHT {
                if rng.integer(0, 2) < 2 {
                    flake.y = 0.0;
                    flake.x = random_coordinate(rng, FIELD_WIDTH);
                } else {
                    flake.x = 0.0;
                    flake.y = random_coordinate(rng, FIELD_HEIGHT);
                }
            }
        }
    }
}

fn random_coordinate(rng: &mut impl RandomSource, extent: f32) -> f32 {
    rng.integer(0, extent as u32 - 1) as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicebox_core::ScriptedRandom;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn held(f: impl FnOnce(&mut Controls)) -> Controls {
        let mut controls = Controls::default();
        f(&mut controls);
        controls
    }

    #[test]
    fn test_player_starts_centered() {
        let player = Player::default();
        assert_eq!((player.x, player.y), (350.0, 250.0));
        assert_eq!(player.speed, DEFAULT_SPEED);
        assert!(!player.is_jumping());
    }

    #[test]
    fn test_arrows_move_by_speed() {
        let mut player = Player::default();
        player.step(&held(|c| c.right = true));
        player.step(&held(|c| c.up = true));
        assert_eq!((player.x, player.y), (355.0, 245.0));
    }

    #[test]
    fn test_player_clamped_to_field() {
        let mut player = Player::default();
        for _ in 0..200 {
            player.step(&held(|c| {
                c.left = true;
                c.down = true;
            }));
        }
        assert_eq!((player.x, player.y), (25.0, 475.0));

        for _ in 0..200 {
            player.step(&held(|c| c.diagonal = true));
        }
        assert_eq!((player.x, player.y), (25.0, 25.0));
    }

    #[test]
    fn test_speed_never_below_minimum() {
        let mut player = Player::default();
        for _ in 0..10 {
            player.step(&held(|c| c.slower = true));
        }
        assert_eq!(player.speed, MIN_SPEED);

        player.step(&held(|c| c.faster = true));
        assert_eq!(player.speed, 2);
    }

    #[test]
    fn test_jump_offset_is_signed_square() {
        assert_eq!(jump_offset(10), 100.0);
        assert_eq!(jump_offset(0), 0.0);
        assert_eq!(jump_offset(-3), -9.0);
    }

    #[test]
    fn test_jump_arc_returns_to_ground() {
        let mut player = Player {
            y: 475.0,
            ..Player::default()
        };
        player.step(&held(|c| c.jump = true));
        assert_eq!(player.jump, Some(JUMP_START));

        // 10² + 9² + ... + 1² = 385 px up at the apex
        let mut highest = player.y;
        for _ in 0..21 {
            player.step(&Controls::default());
            highest = highest.min(player.y);
        }
        assert_eq!(highest, 90.0);
        assert_eq!(player.y, 475.0);
        assert!(player.is_jumping());

        player.step(&Controls::default());
        assert!(!player.is_jumping());
    }

    #[test]
    fn test_vertical_arrows_ignored_mid_jump() {
        let mut player = Player {
            y: 475.0,
            ..Player::default()
        };
        player.step(&held(|c| c.jump = true));
        player.step(&held(|c| c.down = true));
        assert_eq!(player.y, 375.0);
    }

    #[test]
    fn test_snow_starts_inside_field() {
        let mut rng = StdRng::seed_from_u64(3);
        let snow = Snow::new(SNOW_FLAKES, &mut rng);

        assert_eq!(snow.flakes.len(), SNOW_FLAKES);
        for flake in &snow.flakes {
            assert!((0.0..FIELD_WIDTH).contains(&flake.x));
            assert!((0.0..FIELD_HEIGHT).contains(&flake.y));
        }
    }

    #[test]
    fn test_snow_falls_and_drifts() {
        let mut snow = Snow {
            flakes: vec![Snowflake { x: 100.0, y: 10.0 }],
        };
        let mut rng = ScriptedRandom::new().with_integers([3]);
        snow.step(&mut rng);
        assert_eq!(snow.flakes[0], Snowflake { x: 102.0, y: 11.0 });

        let mut rng = ScriptedRandom::new().with_integers([0]);
        snow.step(&mut rng);
        assert_eq!(snow.flakes[0], Snowflake { x: 101.0, y: 12.0 });
    }

    #[test]
    fn test_snow_respawns_top_or_left() {
        let mut snow = Snow {
            flakes: vec![Snowflake { x: 300.0, y: FIELD_HEIGHT }],
        };
        // drift 0, top edge, x = 42
        let mut rng = ScriptedRandom::new().with_integers([1, 0, 42]);
        snow.step(&mut rng);
        assert_eq!(snow.flakes[0], Snowflake { x: 42.0, y: 0.0 });

        snow.flakes[0].y = FIELD_HEIGHT;
        // drift 0, left edge, y = 77
        let mut rng = ScriptedRandom::new().with_integers([1, 2, 77]);
        snow.step(&mut rng);
        assert_eq!(snow.flakes[0], Snowflake { x: 0.0, y: 77.0 });
    }
}
