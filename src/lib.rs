//! Linear algebra and time utilities.

pub use gel_math as math;
pub use gel_time as time;
