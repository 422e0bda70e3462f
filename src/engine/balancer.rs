use crate::core::config::{BalancerConfig, ConfigError};
use crate::core::rounding::{round_cash, round_rate, CENT};
use crate::core::trade::{GeneratedTrade, TradeSet};
use log::{debug, info};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors arising from a balancing run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BalanceError {
    /// The configuration failed fail-fast validation.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The generated trades did not cancel the aggregates. This is a
    /// defect in the numeric pipeline, not bad input; callers should
    /// treat it as fatal.
    #[error(
        "generated trades failed to balance: residual notional {notional_sum}, \
         residual cashflow {cashflow_sum}"
    )]
    ZeroSumViolated {
        notional_sum: Decimal,
        cashflow_sum: Decimal,
    },
}

/// Result of a balancing computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceResult {
    /// The generated balancing trades, in execution order. 0, 1 or 2 entries.
    generated: Vec<GeneratedTrade>,
    /// Aggregate notional of the input trades.
    initial_notional_sum: Decimal,
    /// Aggregate cashflow of the input trades.
    initial_cashflow_sum: Decimal,
    /// Aggregate notional after appending the generated trades.
    residual_notional_sum: Decimal,
    /// Aggregate cashflow after appending the generated trades.
    residual_cashflow_sum: Decimal,
}

impl BalanceResult {
    /// The generated balancing trades, in execution order.
    pub fn generated(&self) -> &[GeneratedTrade] {
        &self.generated
    }

    pub fn initial_notional_sum(&self) -> Decimal {
        self.initial_notional_sum
    }

    pub fn initial_cashflow_sum(&self) -> Decimal {
        self.initial_cashflow_sum
    }

    pub fn residual_notional_sum(&self) -> Decimal {
        self.residual_notional_sum
    }

    pub fn residual_cashflow_sum(&self) -> Decimal {
        self.residual_cashflow_sum
    }

    /// Whether both residual aggregates are within one cent of zero.
    pub fn is_balanced(&self) -> bool {
        self.residual_notional_sum.abs() < CENT && self.residual_cashflow_sum.abs() < CENT
    }
}

impl std::fmt::Display for BalanceResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Balance Result ===")?;
        writeln!(f, "Generated Trades:  {}", self.generated.len())?;
        writeln!(f, "Initial Notional:  {}", self.initial_notional_sum)?;
        writeln!(f, "Initial Cashflow:  {}", self.initial_cashflow_sum)?;
        writeln!(f, "Residual Notional: {}", self.residual_notional_sum)?;
        writeln!(f, "Residual Cashflow: {}", self.residual_cashflow_sum)?;
        writeln!(f, "Balanced:          {}", self.is_balanced())?;
        Ok(())
    }
}

/// The core balancing engine.
///
/// Computes the minimal set of additional trades (0, 1 or 2) that
/// brings both aggregate notional and aggregate cashflow of a trade
/// set to zero within one cent.
pub struct Balancer;

impl Balancer {
    /// Balance a set of trades.
    ///
    /// # Algorithm
    ///
    /// 1. Validate the configuration and resolve the fallback pair.
    /// 2. Sum notional and rounded cashflow across the inputs.
    /// 3. Both sums zero → no trades needed.
    /// 4. Otherwise the single-trade candidate rate is
    ///    `cashflow_sum / notional_sum`, rounded to 8 decimals. If it
    ///    lies within `[min_rate, max_rate]` (inclusive, compared after
    ///    rounding), one trade cancels both aggregates exactly.
    /// 5. Otherwise solve the 2×2 linear system at the fixed fallback
    ///    rates: `n1 + n2 = −notional_sum` and
    ///    `n1·r1 + n2·r2 = −cashflow_sum`.
    /// 6. Fold the generated trades back into the aggregates and check
    ///    both residuals are below one cent.
    ///
    /// # Errors
    ///
    /// `BalanceError::Config` on invalid configuration (checked before
    /// any aggregate work), `BalanceError::ZeroSumViolated` if the
    /// post-condition check fails.
    pub fn balance(
        trades: &TradeSet,
        config: &BalancerConfig,
    ) -> Result<BalanceResult, BalanceError> {
        // Fail fast: configuration problems are reported before any
        // numeric work.
        let (fallback_first, fallback_second) = config.resolve_fallback_rates()?;

        let initial_notional_sum = trades.notional_sum();
        let initial_cashflow_sum = trades.cashflow_sum();
        let mut sequence = trades.len() as u32;

        info!(
            "starting trade generation: {} trades found, notional_sum={}, cashflow_sum={}",
            trades.len(),
            initial_notional_sum,
            initial_cashflow_sum
        );

        let mut generated = Vec::new();

        if !initial_notional_sum.is_zero() || !initial_cashflow_sum.is_zero() {
            // Candidate rate for a single cancelling trade. Undefined when
            // the notional aggregate is zero, which forces the two-trade
            // path.
            let candidate = if initial_notional_sum.is_zero() {
                None
            } else {
                Some(round_rate(initial_cashflow_sum / initial_notional_sum))
            };

            match candidate {
                Some(rate) if config.contains_rate(rate) => {
                    debug!("single-trade rate {} is within bounds", rate);
                    sequence += 1;
                    generated.push(GeneratedTrade {
                        sequence,
                        notional: -initial_notional_sum,
                        rate,
                        cashflow: -initial_cashflow_sum,
                    });
                }
                _ => {
                    info!(
                        "single-trade rate is outside [{}, {}]: 2 trades are necessary",
                        config.min_rate, config.max_rate
                    );
                    if fallback_first == fallback_second {
                        // Only reachable with a degenerate default pair
                        // (min_rate == max_rate); supplied pairs are
                        // validated up front.
                        return Err(ConfigError::EqualFallbackRates {
                            first: fallback_first,
                            second: fallback_second,
                        }
                        .into());
                    }

                    sequence += 1;
                    let first_notional = round_cash(
                        (initial_notional_sum * fallback_second - initial_cashflow_sum)
                            / (fallback_first - fallback_second),
                    );
                    generated.push(GeneratedTrade {
                        sequence,
                        notional: first_notional,
                        rate: fallback_first,
                        cashflow: round_cash(first_notional * fallback_first),
                    });

                    sequence += 1;
                    let second_notional = round_cash(-first_notional - initial_notional_sum);
                    generated.push(GeneratedTrade {
                        sequence,
                        notional: second_notional,
                        rate: fallback_second,
                        cashflow: round_cash(second_notional * fallback_second),
                    });
                }
            }
        }

        let mut residual_notional_sum = initial_notional_sum;
        let mut residual_cashflow_sum = initial_cashflow_sum;
        for trade in &generated {
            residual_notional_sum = round_cash(residual_notional_sum + round_cash(trade.notional));
            residual_cashflow_sum = round_cash(residual_cashflow_sum + round_cash(trade.cashflow));
        }

        if residual_notional_sum.abs() >= CENT || residual_cashflow_sum.abs() >= CENT {
            return Err(BalanceError::ZeroSumViolated {
                notional_sum: residual_notional_sum,
                cashflow_sum: residual_cashflow_sum,
            });
        }

        info!(
            "generated {} trades, residual notional_sum={}, cashflow_sum={}",
            generated.len(),
            residual_notional_sum,
            residual_cashflow_sum
        );

        Ok(BalanceResult {
            generated,
            initial_notional_sum,
            initial_cashflow_sum,
            residual_notional_sum,
            residual_cashflow_sum,
        })
    }
}
