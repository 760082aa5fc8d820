//! Logging for the gel libraries.
//!
//! Re-exports the [`log`] facade macros so that dependent crates only need a
//! single logging dependency, and adds helpers for timing expressions.

mod macros;

pub use log::{Level, LevelFilter, debug, error, info, log_enabled, trace, warn};
