//! # swap-balancer
//!
//! Interest rate swap trade generator.
//!
//! Given a set of existing swap trades (notional + rate), this engine
//! computes the one or two additional trades needed to bring both the
//! aggregate notional value and the aggregate cashflow to zero, to the
//! cent.
//!
//! ## Architecture
//!
//! - **core** — Foundational types: trades, configuration, rounding rules
//! - **engine** — The balancing algorithm and its result types
//! - **io** — CSV input/output for trade tables
//! - **report** — Fixed-width text rendering of generated trades
//! - **simulation** — Random trade-set generation for testing

pub mod core;
pub mod engine;
pub mod io;
pub mod report;
pub mod simulation;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::core::config::BalancerConfig;
    pub use crate::core::trade::{GeneratedTrade, Trade, TradeSet};
    pub use crate::engine::balancer::{BalanceError, BalanceResult, Balancer};
}
