//! Foundational types for the balancing engine.

pub mod config;
pub mod rounding;
pub mod trade;
