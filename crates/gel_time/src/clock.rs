//! Clocks tracking scaled time.

use crate::units::{TimePoint, TimeSpan, TimeUnit};

/// A clock accumulating externally measured elapsed time, scaled by a time
/// scale factor. The current time is kept in cycles.
///
/// While paused, updates advance neither the clock nor the elapsed time of
/// the latest update.
#[derive(Clone, Debug, PartialEq)]
pub struct Clock {
    time_cycles: TimePoint,
    elapsed: TimeSpan,
    time_scale: f32,
    paused: bool,
}

impl Clock {
    /// Creates a clock starting at the given time in cycles, running at the
    /// given time scale.
    pub fn new(initial_time_cycles: TimePoint, time_scale: f32) -> Self {
        Self {
            time_cycles: initial_time_cycles,
            elapsed: 0.0,
            time_scale,
            paused: false,
        }
    }

    /// Creates a clock starting at zero and running at the given time scale.
    pub fn with_time_scale(time_scale: f32) -> Self {
        Self::new(0, time_scale)
    }

    /// Creates an unscaled clock starting at the given time in cycles.
    pub fn starting_at(initial_time_cycles: TimePoint) -> Self {
        Self::new(initial_time_cycles, 1.0)
    }

    /// Advances the clock by the given number of real seconds, multiplied by
    /// the time scale. A negative scaled duration moves the clock backwards,
    /// stopping at zero.
    pub fn update(&mut self, elapsed_seconds: TimeSpan) {
        self.elapsed = if self.paused {
            0.0
        } else {
            elapsed_seconds * self.time_scale
        };

        let delta_cycles = f64::from(self.elapsed) * TimeUnit::Cycles.multiplier();
        if delta_cycles >= 0.0 {
            self.time_cycles = self.time_cycles.saturating_add(delta_cycles as TimePoint);
        } else {
            self.time_cycles = self.time_cycles.saturating_sub((-delta_cycles) as TimePoint);
        }

        gel_log::trace!(
            "Clock advanced by {:.6} s to {} cycles",
            self.elapsed,
            self.time_cycles
        );
    }

    /// Returns the scaled duration of the latest update, in seconds.
    pub fn elapsed(&self) -> TimeSpan {
        self.elapsed
    }

    /// Returns the current time in milliseconds.
    pub fn time(&self) -> TimePoint {
        self.time_in(TimeUnit::Milliseconds)
    }

    /// Returns the current time in cycles.
    pub fn time_cycles(&self) -> TimePoint {
        self.time_cycles
    }

    /// Returns the current time in the given unit.
    pub fn time_in(&self, unit: TimeUnit) -> TimePoint {
        TimeUnit::convert_point(self.time_cycles, TimeUnit::Cycles, unit)
    }

    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_time_scale(&mut self, time_scale: f32) {
        gel_log::debug!("Setting clock time scale to {time_scale}");
        self.time_scale = time_scale;
    }

    pub fn set_paused(&mut self, paused: bool) {
        if paused != self.paused {
            gel_log::debug!("{} clock", if paused { "Pausing" } else { "Resuming" });
        }
        self.paused = paused;
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new(0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn cycles_from_milliseconds(milliseconds: TimePoint) -> TimePoint {
        TimeUnit::convert_point(milliseconds, TimeUnit::Milliseconds, TimeUnit::Cycles)
    }

    #[test]
    fn default_clock_starts_at_zero_unscaled_and_running() {
        let clock = Clock::default();
        assert_eq!(clock.elapsed(), 0.0);
        assert_eq!(clock.time(), 0);
        assert_eq!(clock.time_cycles(), 0);
        assert_eq!(clock.time_scale(), 1.0);
        assert!(!clock.is_paused());
    }

    #[test]
    fn clock_with_initial_time_reports_it_in_all_units() {
        let initial = cycles_from_milliseconds(1000);

        let clock = Clock::starting_at(initial);
        assert_eq!(clock.elapsed(), 0.0);
        assert_eq!(clock.time(), 1000);
        assert_eq!(clock.time_cycles(), initial);
        assert_eq!(clock.time_in(TimeUnit::Seconds), 1);
        assert_eq!(clock.time_scale(), 1.0);
    }

    #[test]
    fn clock_with_time_scale_starts_at_zero() {
        let clock = Clock::with_time_scale(25.0);
        assert_eq!(clock.time_cycles(), 0);
        assert_eq!(clock.time_scale(), 25.0);
        assert!(!clock.is_paused());

        let clock = Clock::new(cycles_from_milliseconds(1000), 25.0);
        assert_eq!(clock.time(), 1000);
        assert_eq!(clock.time_scale(), 25.0);
    }

    #[test]
    fn copied_clock_matches_original() {
        let mut clock = Clock::new(cycles_from_milliseconds(1000), 25.0);
        clock.update(0.5);
        let copy = clock.clone();
        assert_eq!(copy, clock);
        assert_eq!(copy.time_cycles(), clock.time_cycles());
    }

    #[test]
    fn updating_scaled_clock_advances_by_scaled_duration() {
        let initial = cycles_from_milliseconds(2000);
        let mut clock = Clock::new(initial, 2.0);

        clock.update(25.0);

        assert_abs_diff_eq!(clock.elapsed(), 50.0);
        assert_eq!(clock.time_cycles(), initial + 50_000_000_000);
        assert_eq!(clock.time(), 2000 + 50_000);
        assert_eq!(clock.time_scale(), 2.0);
        assert!(!clock.is_paused());
    }

    #[test]
    fn updating_paused_clock_does_nothing() {
        let mut clock = Clock::default();
        clock.update(1.0);
        clock.set_paused(true);
        clock.update(3.0);

        assert!(clock.is_paused());
        assert_eq!(clock.elapsed(), 0.0);
        assert_eq!(clock.time(), 1000);

        clock.set_paused(false);
        clock.update(1.0);
        assert_eq!(clock.time(), 2000);
    }

    #[test]
    fn changing_time_scale_affects_later_updates() {
        let mut clock = Clock::default();
        clock.update(1.0);
        clock.set_time_scale(0.5);
        clock.update(1.0);

        assert_abs_diff_eq!(clock.elapsed(), 0.5);
        assert_eq!(clock.time(), 1500);
    }

    #[test]
    fn negative_time_scale_rewinds_clock_to_no_earlier_than_zero() {
        let mut clock = Clock::new(cycles_from_milliseconds(1000), -1.0);
        clock.update(0.25);
        assert_eq!(clock.time(), 750);

        clock.update(10.0);
        assert_eq!(clock.time_cycles(), 0);
    }
}
