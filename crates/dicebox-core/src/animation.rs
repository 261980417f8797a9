//! Single-die roll animation
//!
//! A [`DieAnimation`] picks its outcome when the roll starts and then only
//! decides what to *show* until its spin time runs out, at which point the
//! visible face freezes on the outcome.

use crate::random::{RandomSource, FACES};
use crate::settings::{AnimationSettings, FacePolicy, FaceStart};

/// Slack for interval boundaries that land exactly on a tick, so that
/// accumulated floating-point error does not swallow a face change.
const STEP_EPSILON: f64 = 1e-9;

/// Roll animation state for one six-sided die
#[derive(Debug, Clone, PartialEq)]
pub struct DieAnimation {
    settings: AnimationSettings,
    final_face: u8,
    current_face: u8,
    duration: f64,
    change_interval: f64,
    start_time: f64,
    last_change: f64,
    animating: bool,
    rolls: u64,
}

impl DieAnimation {
    /// Create an idle die showing the face chosen by `settings.initial_face`.
    pub fn new(settings: AnimationSettings, rng: &mut impl RandomSource) -> Self {
        let face = match settings.initial_face {
            FaceStart::Random => rng.face(),
            FaceStart::One | FaceStart::Keep => 1,
        };
        Self::showing(settings, face)
    }

    /// Create an idle die showing `face` (clamped into `1..=6`).
    pub fn showing(settings: AnimationSettings, face: u8) -> Self {
        let face = face.clamp(1, FACES);
        Self {
            settings,
            final_face: face,
            current_face: face,
            duration: settings.duration.min,
            change_interval: settings.change_interval.min,
            start_time: 0.0,
            last_change: 0.0,
            animating: false,
            rolls: 0,
        }
    }

    /// Begin a new roll at `now`.
    ///
    /// Draws, in order: the final face, the duration, the change interval,
    /// the phase offset (when enabled) and the starting face (when random).
    pub fn start(&mut self, now: f64, rng: &mut impl RandomSource) {
        let settings = self.settings;

        self.final_face = rng.face();
        self.duration = rng.uniform(settings.duration.min, settings.duration.max);
        self.change_interval =
            rng.uniform(settings.change_interval.min, settings.change_interval.max);

        let phase = if settings.phase_offset {
            rng.phase(self.change_interval)
        } else {
            0.0
        };
        self.start_time = now;
        self.last_change = now - phase;
        if settings.face_policy == FacePolicy::Reroll {
            // First redraw lands on the first tick of the roll.
            self.last_change -= self.change_interval;
        }

        self.current_face = match settings.roll_start_face {
            FaceStart::One => 1,
            FaceStart::Random => rng.face(),
            FaceStart::Keep => self.current_face,
        };

        self.animating = true;
        self.rolls += 1;
    }

    /// Advance the animation to `now`.
    ///
    /// Returns `true` on the single call that ends the roll. The rng is only
    /// drawn from under [`FacePolicy::Reroll`].
    pub fn update(&mut self, now: f64, rng: &mut impl RandomSource) -> bool {
        if !self.animating {
            return false;
        }

        if now - self.start_time >= self.duration {
            self.current_face = self.final_face;
            self.animating = false;
            return true;
        }

        if self.change_interval <= 0.0 {
            return false;
        }

        let since = now - self.last_change;
        let steps = (since / self.change_interval + STEP_EPSILON).floor();
        if steps < 1.0 {
            return false;
        }

        self.current_face = match self.settings.face_policy {
            FacePolicy::Cycle => advance_face(self.current_face, steps as u64),
            FacePolicy::Reroll => rng.face(),
        };
        self.last_change += steps * self.change_interval;
        false
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn current_face(&self) -> u8 {
        self.current_face
    }

    /// The outcome of the latest roll (or the resting face before any roll)
    pub fn final_face(&self) -> u8 {
        self.final_face
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn change_interval(&self) -> f64 {
        self.change_interval
    }

    pub fn start_time(&self) -> f64 {
        self.start_time
    }

    pub fn last_change(&self) -> f64 {
        self.last_change
    }

    /// Number of rolls started on this die
    pub fn rolls(&self) -> u64 {
        self.rolls
    }

    pub fn settings(&self) -> &AnimationSettings {
        &self.settings
    }

    /// Replace the settings used by the next roll. An in-flight roll keeps
    /// the values it already sampled.
    pub fn set_settings(&mut self, settings: AnimationSettings) {
        self.settings = settings;
    }
}

/// Move `face` forward `steps` places around 1..=6.
pub fn advance_face(face: u8, steps: u64) -> u8 {
    let faces = u64::from(FACES);
    let zero_based = u64::from(face.clamp(1, FACES) - 1);
    ((zero_based + steps % faces) % faces) as u8 + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedRandom;
    use crate::settings::{Preset, SecondsRange};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn cycling() -> AnimationSettings {
        AnimationSettings {
            phase_offset: false,
            ..Preset::Spin.animation()
        }
    }

    fn scripted(final_face: u8, duration: f64, interval: f64) -> ScriptedRandom {
        ScriptedRandom::new()
            .with_faces([final_face])
            .with_reals([duration, interval])
    }

    #[test]
    fn test_advance_face_wraps() {
        assert_eq!(advance_face(1, 1), 2);
        assert_eq!(advance_face(6, 1), 1);
        assert_eq!(advance_face(5, 3), 2);
        assert_eq!(advance_face(3, 6), 3);
        assert_eq!(advance_face(2, 6 * 1000 + 1), 3);
    }

    #[test]
    fn test_new_die_is_idle() {
        let mut rng = ScriptedRandom::new();
        let die = DieAnimation::new(cycling(), &mut rng);
        assert!(!die.is_animating());
        assert_eq!(die.current_face(), 1);
        assert_eq!(die.final_face(), 1);
        assert_eq!(die.rolls(), 0);
    }

    #[test]
    fn test_new_die_random_initial_face() {
        let mut rng = ScriptedRandom::new().with_faces([5]);
        let die = DieAnimation::new(Preset::Classic.animation(), &mut rng);
        assert_eq!(die.current_face(), 5);
        assert_eq!(die.final_face(), 5);
    }

    #[test]
    fn test_scripted_roll_cycles_once_per_tick() {
        let mut rng = scripted(4, 1.0, 0.1);
        let mut die = DieAnimation::new(cycling(), &mut rng);
        die.start(0.0, &mut rng);

        assert!(die.is_animating());
        assert_eq!(die.final_face(), 4);
        assert_eq!(die.duration(), 1.0);
        assert_eq!(die.change_interval(), 0.1);

        let expected = [1, 2, 3, 4, 5, 6, 1, 2, 3, 4];
        for (tick, face) in expected.iter().enumerate() {
            let now = tick as f64 / 10.0;
            assert!(!die.update(now, &mut rng), "finished early at {now}");
            assert!(die.is_animating());
            assert_eq!(die.current_face(), *face, "at t={now}");
        }

        assert!(die.update(1.0, &mut rng));
        assert!(!die.is_animating());
        assert_eq!(die.current_face(), 4);

        for now in [1.05, 2.0, 60.0] {
            assert!(!die.update(now, &mut rng));
            assert_eq!(die.current_face(), 4);
            assert!(!die.is_animating());
        }
    }

    #[test]
    fn test_late_tick_catches_up_by_steps() {
        let mut rng = scripted(2, 1.5, 0.1);
        let mut die = DieAnimation::new(cycling(), &mut rng);
        die.start(10.0, &mut rng);

        // A 0.35s stall crosses three boundaries.
        die.update(10.35, &mut rng);
        assert_eq!(die.current_face(), 4);
        assert!((die.last_change() - 10.3).abs() < 1e-9);

        // Half an interval later nothing changes.
        die.update(10.38, &mut rng);
        assert_eq!(die.current_face(), 4);

        die.update(10.4, &mut rng);
        assert_eq!(die.current_face(), 5);
    }

    #[test]
    fn test_phase_offset_shifts_first_change() {
        let settings = Preset::Spin.animation();
        let mut rng = ScriptedRandom::new()
            .with_faces([3])
            .with_reals([1.0, 0.1, 0.04]);
        let mut die = DieAnimation::new(settings, &mut rng);
        die.start(0.0, &mut rng);

        assert!((die.last_change() + 0.04).abs() < 1e-12);

        die.update(0.05, &mut rng);
        assert_eq!(die.current_face(), 1);
        die.update(0.06, &mut rng);
        assert_eq!(die.current_face(), 2);
    }

    #[test]
    fn test_keep_start_face_continues() {
        let settings = AnimationSettings {
            roll_start_face: FaceStart::Keep,
            ..cycling()
        };
        let mut rng = scripted(6, 0.8, 0.1);
        let mut die = DieAnimation::new(settings, &mut rng);
        die.start(0.0, &mut rng);
        die.update(0.8, &mut rng);
        assert_eq!(die.current_face(), 6);

        let mut rng = scripted(1, 1.0, 0.1);
        die.start(5.0, &mut rng);
        assert_eq!(die.current_face(), 6);
        die.update(5.1, &mut rng);
        assert_eq!(die.current_face(), 1);
    }

    #[test]
    fn test_reroll_policy_draws_new_faces() {
        let settings = AnimationSettings {
            phase_offset: false,
            ..Preset::Classic.animation()
        };
        let mut rng = ScriptedRandom::new()
            .with_faces([2, 5, 4, 3])
            .with_reals([1.2, 0.1]);
        let settings = AnimationSettings {
            initial_face: FaceStart::One,
            ..settings
        };
        let mut die = DieAnimation::new(settings, &mut rng);

        // final=2, then starting face 5
        die.start(0.0, &mut rng);
        assert_eq!(die.final_face(), 2);
        assert_eq!(die.current_face(), 5);

        // the first tick already shows a fresh face
        die.update(0.0, &mut rng);
        assert_eq!(die.current_face(), 4);
        assert_eq!(die.last_change(), 0.0);

        die.update(0.05, &mut rng);
        assert_eq!(die.current_face(), 4);

        // several boundaries crossed still draw only once
        die.update(0.45, &mut rng);
        assert_eq!(die.current_face(), 3);
        assert_eq!(rng.remaining(), 0);

        die.update(1.2, &mut rng);
        assert_eq!(die.current_face(), 2);
    }

    #[test]
    fn test_faces_always_in_range() {
        let mut rng = StdRng::seed_from_u64(0xD1CE);
        for preset in Preset::ALL {
            let mut die = DieAnimation::new(preset.animation(), &mut rng);
            let mut now = 0.0;
            for _ in 0..200 {
                die.start(now, &mut rng);
                assert!(preset.animation().duration.contains(die.duration()));
                assert!(preset.animation().change_interval.contains(die.change_interval()));
                while die.is_animating() {
                    now += 1.0 / 60.0;
                    die.update(now, &mut rng);
                    assert!((1..=6).contains(&die.current_face()));
                }
                assert_eq!(die.current_face(), die.final_face());
                assert!((1..=6).contains(&die.final_face()));
            }
            assert_eq!(die.rolls(), 200);
        }
    }

    #[test]
    fn test_finishes_exactly_once() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut die = DieAnimation::new(Preset::Table.animation(), &mut rng);
        die.start(0.0, &mut rng);

        let finished = (1..=240)
            .map(|tick| die.update(f64::from(tick) / 60.0, &mut rng))
            .filter(|done| *done)
            .count();
        assert_eq!(finished, 1);
    }

    #[test]
    fn test_set_settings_applies_to_next_roll() {
        let mut rng = scripted(3, 1.0, 0.1);
        let mut die = DieAnimation::new(cycling(), &mut rng);
        die.start(0.0, &mut rng);

        let slower = AnimationSettings {
            duration: SecondsRange::new(3.0, 3.0),
            ..cycling()
        };
        die.set_settings(slower);
        assert_eq!(die.duration(), 1.0);

        die.update(1.0, &mut rng);
        die.start(2.0, &mut rng);
        assert_eq!(die.duration(), 3.0);
    }
}
