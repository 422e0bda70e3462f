//! Random trade-set generation for testing and benchmarks.

pub mod scenario;
