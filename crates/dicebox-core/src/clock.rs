//! Monotonic time sources
//!
//! Everything in the core measures time in seconds as `f64`, relative to an
//! arbitrary epoch fixed for the lifetime of the clock.

use std::cell::Cell;
use std::time::Instant;

/// A monotonic timestamp provider
pub trait Clock {
    /// Seconds since the clock's epoch. Never decreases.
    fn now(&self) -> f64;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> f64 {
        (**self).now()
    }
}

/// Wall clock backed by [`Instant`], with its epoch at construction
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    epoch: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64()
    }
}

/// Clock that only moves when told to. Used for replays and tests.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    pub fn new(start: f64) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    /// Move the clock forward by `seconds`. Negative steps are ignored.
    pub fn advance(&self, seconds: f64) {
        if seconds > 0.0 {
            self.now.set(self.now.get() + seconds);
        }
    }

    /// Jump to an absolute time, never going backwards.
    pub fn set(&self, now: f64) {
        if now > self.now.get() {
            self.now.set(now);
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_is_monotonic() {
        let clock = ManualClock::new(1.0);
        clock.advance(0.5);
        assert_eq!(clock.now(), 1.5);

        clock.advance(-3.0);
        clock.set(0.2);
        assert_eq!(clock.now(), 1.5);

        clock.set(4.0);
        assert_eq!(clock.now(), 4.0);
    }

    #[test]
    fn test_borrowed_clock_sees_advances() {
        fn read(clock: impl Clock) -> f64 {
            clock.now()
        }

        let clock = ManualClock::new(0.0);
        clock.advance(2.0);
        assert_eq!(read(&clock), 2.0);
    }

    #[test]
    fn test_system_clock_starts_near_zero() {
        let clock = SystemClock::new();
        let first = clock.now();
        let second = clock.now();
        assert!(first >= 0.0);
        assert!(second >= first);
    }
}
