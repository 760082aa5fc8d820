//! Time units and clocks.

pub mod clock;
pub mod units;

pub use clock::Clock;
pub use units::{TimePoint, TimeSpan, TimeUnit};
