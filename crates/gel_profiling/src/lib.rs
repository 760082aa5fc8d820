//! Utilities for benchmarking the gel libraries.

pub mod benchmark;
