//! Random trade tables for exercising the balancer.
//!
//! Generates trade sets with notionals and rates drawn uniformly from
//! configurable ranges, rounded to the precisions the engine works at.

use crate::core::rounding::{CASH_DP, RATE_DP};
use crate::core::trade::{Trade, TradeSet};
use rand::Rng;
use rust_decimal::Decimal;

/// Configuration for generating a random trade set.
#[derive(Debug, Clone)]
pub struct ScenarioConfig {
    /// Number of trades to generate.
    pub trade_count: usize,
    /// Minimum notional (may be negative).
    pub min_notional: f64,
    /// Maximum notional.
    pub max_notional: f64,
    /// Minimum trade rate.
    pub min_rate: f64,
    /// Maximum trade rate.
    pub max_rate: f64,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            trade_count: 10,
            min_notional: -10_000_000.0,
            max_notional: 10_000_000.0,
            min_rate: -0.1,
            max_rate: 0.1,
        }
    }
}

/// Generate a random trade set for testing.
pub fn generate_random_trades(config: &ScenarioConfig) -> TradeSet {
    let mut rng = rand::thread_rng();
    let mut set = TradeSet::new();

    for _ in 0..config.trade_count {
        let notional_f64 = rng.gen_range(config.min_notional..config.max_notional);
        let rate_f64 = rng.gen_range(config.min_rate..config.max_rate);

        let notional = Decimal::from_f64_retain(notional_f64)
            .unwrap_or(Decimal::from(1000))
            .round_dp(CASH_DP);
        let rate = Decimal::from_f64_retain(rate_f64)
            .unwrap_or(Decimal::ZERO)
            .round_dp(RATE_DP);

        set.add(Trade::new(notional, rate));
    }

    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::BalancerConfig;
    use crate::engine::balancer::Balancer;

    #[test]
    fn test_random_trade_generation() {
        let config = ScenarioConfig {
            trade_count: 25,
            ..Default::default()
        };
        let set = generate_random_trades(&config);
        assert_eq!(set.len(), 25);
        for trade in set.trades() {
            assert!(trade.notional().abs() <= Decimal::from(10_000_000));
        }
    }

    #[test]
    fn test_random_trades_always_balance() {
        let config = ScenarioConfig {
            trade_count: 40,
            ..Default::default()
        };
        let set = generate_random_trades(&config);
        let result = Balancer::balance(&set, &BalancerConfig::default()).unwrap();
        assert!(result.is_balanced());
        assert!(result.generated().len() <= 2);
    }
}
