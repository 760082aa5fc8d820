//! Units of time and conversion between them.

use anyhow::{Result, bail};
use std::{fmt, str::FromStr};

/// A duration relative to an arbitrary earlier point, by default in seconds.
pub type TimeSpan = f32;

/// An absolute point in time relative to an arbitrary origin, by default in
/// cycles.
pub type TimePoint = u64;

/// A unit of time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    Hours,
    Minutes,
    Seconds,
    Milliseconds,
    Microseconds,
    Nanoseconds,
    /// Processor cycles, currently counted as nanoseconds.
    Cycles,
}

impl TimeUnit {
    pub const ALL: [Self; 7] = [
        Self::Hours,
        Self::Minutes,
        Self::Seconds,
        Self::Milliseconds,
        Self::Microseconds,
        Self::Nanoseconds,
        Self::Cycles,
    ];

    /// Returns the number of this unit in one second.
    pub fn multiplier(self) -> f64 {
        match self {
            Self::Hours => 1.0 / 3600.0,
            Self::Minutes => 1.0 / 60.0,
            Self::Seconds => 1.0,
            Self::Milliseconds => 1e3,
            Self::Microseconds => 1e6,
            Self::Nanoseconds | Self::Cycles => 1e9,
        }
    }

    /// Converts the given time span from unit `from` to unit `to`.
    pub fn convert_span(span: TimeSpan, from: Self, to: Self) -> TimeSpan {
        (f64::from(span) * to.multiplier() / from.multiplier()) as TimeSpan
    }

    /// Converts the given time point from unit `from` to unit `to`. The result
    /// is truncated towards zero.
    pub fn convert_point(point: TimePoint, from: Self, to: Self) -> TimePoint {
        (point as f64 * to.multiplier() / from.multiplier()) as TimePoint
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Hours => "hours",
            Self::Minutes => "minutes",
            Self::Seconds => "seconds",
            Self::Milliseconds => "milliseconds",
            Self::Microseconds => "microseconds",
            Self::Nanoseconds => "nanoseconds",
            Self::Cycles => "cycles",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Hours => "h",
            Self::Minutes => "min",
            Self::Seconds => "s",
            Self::Milliseconds => "ms",
            Self::Microseconds => "us",
            Self::Nanoseconds => "ns",
            Self::Cycles => "cycles",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TimeUnit {
    type Err = anyhow::Error;

    /// Parses a unit from its name or symbol, ignoring case.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        for unit in Self::ALL {
            if s.eq_ignore_ascii_case(unit.name()) || s.eq_ignore_ascii_case(unit.symbol()) {
                return Ok(unit);
            }
        }
        bail!("Unknown time unit `{s}`")
    }
}
