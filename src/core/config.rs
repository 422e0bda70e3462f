use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors arising from an invalid balancer configuration.
///
/// All variants are raised before any aggregate computation and carry
/// the offending values for diagnosability.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("expect different fallback rates, got [{first}, {second}]")]
    EqualFallbackRates { first: Decimal, second: Decimal },
    #[error("expect non-zero fallback rates, got [{first}, {second}]")]
    ZeroFallbackRate { first: Decimal, second: Decimal },
    #[error("expect fallback rate in [{min_rate}, {max_rate}], got {rate}")]
    RateOutOfBounds {
        rate: Decimal,
        min_rate: Decimal,
        max_rate: Decimal,
    },
    #[error("expect min_rate <= max_rate, got [{min_rate}, {max_rate}]")]
    InvertedBounds {
        min_rate: Decimal,
        max_rate: Decimal,
    },
}

/// Configuration for a balancing run.
///
/// Any generated trade rate must lie within `[min_rate, max_rate]`.
/// When a single balancing trade cannot satisfy that bound, the engine
/// falls back to two trades at the `fallback_rates` pair; if the pair
/// is absent it defaults to `(max_rate, max_rate − 0.1·(max_rate −
/// min_rate))` — anchored at the top of the band with the second point
/// 10% of the band width below, so both points are inside the band and
/// distinct whenever `min_rate < max_rate`.
///
/// # Examples
///
/// ```
/// use swap_balancer::core::config::BalancerConfig;
/// use rust_decimal_macros::dec;
///
/// let config = BalancerConfig::default();
/// let (r1, r2) = config.resolve_fallback_rates().unwrap();
/// assert_eq!(r1, dec!(0.1));
/// assert_eq!(r2, dec!(0.08));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalancerConfig {
    /// Minimum allowed rate for a generated trade.
    pub min_rate: Decimal,
    /// Maximum allowed rate for a generated trade.
    pub max_rate: Decimal,
    /// Explicit rates for the two-trade fallback. Must differ, be
    /// non-zero and lie within `[min_rate, max_rate]`.
    pub fallback_rates: Option<(Decimal, Decimal)>,
}

impl Default for BalancerConfig {
    fn default() -> Self {
        Self {
            min_rate: dec!(-0.1),
            max_rate: dec!(0.1),
            fallback_rates: None,
        }
    }
}

impl BalancerConfig {
    /// Create a configuration with explicit bounds and no fallback pair.
    pub fn new(min_rate: Decimal, max_rate: Decimal) -> Self {
        Self {
            min_rate,
            max_rate,
            fallback_rates: None,
        }
    }

    /// Set an explicit two-trade fallback pair.
    pub fn with_fallback_rates(mut self, first: Decimal, second: Decimal) -> Self {
        self.fallback_rates = Some((first, second));
        self
    }

    /// Whether a rate is acceptable for a generated trade.
    pub fn contains_rate(&self, rate: Decimal) -> bool {
        rate >= self.min_rate && rate <= self.max_rate
    }

    /// Validate this configuration and resolve the two-trade fallback pair.
    ///
    /// A supplied pair must consist of two different non-zero rates; an
    /// absent pair is resolved from the bounds. Either way both rates
    /// must lie within `[min_rate, max_rate]`.
    pub fn resolve_fallback_rates(&self) -> Result<(Decimal, Decimal), ConfigError> {
        if self.min_rate > self.max_rate {
            return Err(ConfigError::InvertedBounds {
                min_rate: self.min_rate,
                max_rate: self.max_rate,
            });
        }

        let (first, second) = match self.fallback_rates {
            Some((first, second)) => {
                if first == second {
                    return Err(ConfigError::EqualFallbackRates { first, second });
                }
                if first.is_zero() || second.is_zero() {
                    return Err(ConfigError::ZeroFallbackRate { first, second });
                }
                (first, second)
            }
            None => (
                self.max_rate,
                self.max_rate - dec!(0.1) * (self.max_rate - self.min_rate),
            ),
        };

        for rate in [first, second] {
            if !self.contains_rate(rate) {
                return Err(ConfigError::RateOutOfBounds {
                    rate,
                    min_rate: self.min_rate,
                    max_rate: self.max_rate,
                });
            }
        }

        Ok((first, second))
    }
}
