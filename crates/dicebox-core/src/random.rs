//! Randomness sources for rolls
//!
//! [`RandomSource`] is implemented for every [`rand::Rng`], so callers normally
//! pass `&mut rand::thread_rng()` or a seeded `StdRng`. [`ScriptedRandom`]
//! replays fixed values for deterministic rolls.

use std::collections::VecDeque;

use rand::Rng;

/// Number of faces on the dice this crate animates
pub const FACES: u8 = 6;

/// The draws a roll needs
pub trait RandomSource {
    /// Uniform real in `[low, high]`. Returns `low` when the range is degenerate.
    fn uniform(&mut self, low: f64, high: f64) -> f64;

    /// Uniform real in `[0, upper)`. Returns `0.0` when `upper <= 0`.
    fn phase(&mut self, upper: f64) -> f64;

    /// Uniform face in `1..=6`.
    fn face(&mut self) -> u8;

    /// Uniform integer in `[low, high]`. Returns `low` when `high <= low`.
    fn integer(&mut self, low: u32, high: u32) -> u32;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        if high <= low {
            return low;
        }
        self.gen_range(low..=high)
    }

    fn phase(&mut self, upper: f64) -> f64 {
        if upper <= 0.0 {
            return 0.0;
        }
        self.gen_range(0.0..upper)
    }

    fn face(&mut self) -> u8 {
        self.gen_range(1..=FACES)
    }

    fn integer(&mut self, low: u32, high: u32) -> u32 {
        if high <= low {
            return low;
        }
        self.gen_range(low..=high)
    }
}

/// Replays queued values in order, one queue per kind of draw.
///
/// Real draws are clamped into the requested interval and faces into `1..=6`,
/// so a script can never produce an out-of-range roll. Exhausted queues fall
/// back to the lowest legal value.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    faces: VecDeque<u8>,
    reals: VecDeque<f64>,
    integers: VecDeque<u32>,
}

impl ScriptedRandom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_faces(mut self, faces: impl IntoIterator<Item = u8>) -> Self {
        self.faces.extend(faces);
        self
    }

    /// Values served to both [`RandomSource::uniform`] and [`RandomSource::phase`].
    pub fn with_reals(mut self, reals: impl IntoIterator<Item = f64>) -> Self {
        self.reals.extend(reals);
        self
    }

    pub fn with_integers(mut self, integers: impl IntoIterator<Item = u32>) -> Self {
        self.integers.extend(integers);
        self
    }

    /// Total number of queued values not yet drawn
    pub fn remaining(&self) -> usize {
        self.faces.len() + self.reals.len() + self.integers.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        match self.reals.pop_front() {
            Some(value) if high > low => value.clamp(low, high),
            _ => low,
        }
    }

    fn phase(&mut self, upper: f64) -> f64 {
        if upper <= 0.0 {
            return 0.0;
        }
        match self.reals.pop_front() {
            // Keep the result strictly below `upper`.
            Some(value) if value < upper => value.max(0.0),
            Some(_) => upper * (1.0 - f64::EPSILON),
            None => 0.0,
        }
    }

    fn face(&mut self) -> u8 {
        self.faces.pop_front().unwrap_or(1).clamp(1, FACES)
    }

    fn integer(&mut self, low: u32, high: u32) -> u32 {
        match self.integers.pop_front() {
            Some(value) if high > low => value.clamp(low, high),
            _ => low,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_rng_draws_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let face = rng.face();
            assert!((1..=6).contains(&face));

            let value = RandomSource::uniform(&mut rng, 0.8, 1.6);
            assert!((0.8..=1.6).contains(&value));

            let phase = rng.phase(0.1);
            assert!((0.0..0.1).contains(&phase));

            let n = rng.integer(1, 100);
            assert!((1..=100).contains(&n));
        }
    }

    #[test]
    fn test_rng_degenerate_ranges() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(RandomSource::uniform(&mut rng, 1.0, 1.0), 1.0);
        assert_eq!(rng.phase(0.0), 0.0);
        assert_eq!(rng.integer(5, 5), 5);
    }

    #[test]
    fn test_rng_faces_cover_all_values() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = [false; 6];
        for _ in 0..600 {
            seen[usize::from(rng.face() - 1)] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_scripted_replays_in_order() {
        let mut rng = ScriptedRandom::new()
            .with_faces([4, 2])
            .with_reals([1.0, 0.1])
            .with_integers([37]);

        assert_eq!(rng.remaining(), 5);
        assert_eq!(rng.face(), 4);
        assert_eq!(rng.uniform(0.8, 1.6), 1.0);
        assert_eq!(rng.uniform(0.06, 0.12), 0.1);
        assert_eq!(rng.face(), 2);
        assert_eq!(rng.integer(1, 100), 37);
        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    fn test_scripted_clamps_and_falls_back() {
        let mut rng = ScriptedRandom::new()
            .with_faces([9, 0])
            .with_reals([5.0, 0.5]);

        assert_eq!(rng.face(), 6);
        assert_eq!(rng.face(), 1);
        assert_eq!(rng.face(), 1);
        assert_eq!(rng.uniform(0.8, 1.6), 1.6);

        let phase = rng.phase(0.1);
        assert!(phase < 0.1);

        assert_eq!(rng.uniform(0.06, 0.12), 0.06);
        assert_eq!(rng.phase(0.1), 0.0);
        assert_eq!(rng.integer(3, 9), 3);
    }
}
