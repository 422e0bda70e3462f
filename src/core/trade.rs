use crate::core::rounding::round_cash;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An existing interest rate swap trade.
///
/// A trade is a notional amount paired with a rate. Its cashflow is a
/// derived quantity, `notional × rate`, rounded to cent precision the
/// moment it is computed — that rounded value is what the balancing
/// engine sums and neutralizes.
///
/// Trades are immutable once created.
///
/// # Examples
///
/// ```
/// use swap_balancer::core::trade::Trade;
/// use rust_decimal_macros::dec;
///
/// let trade = Trade::new(dec!(545891.29), dec!(0.0488929));
/// assert_eq!(trade.notional(), dec!(545891.29));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    /// The principal amount. Not itself a cash movement.
    notional: Decimal,
    /// The trade rate.
    rate: Decimal,
}

impl Trade {
    /// Create a new trade.
    pub fn new(notional: Decimal, rate: Decimal) -> Self {
        Self { notional, rate }
    }

    pub fn notional(&self) -> Decimal {
        self.notional
    }

    pub fn rate(&self) -> Decimal {
        self.rate
    }

    /// The cash impact of this trade: `notional × rate`, rounded to cents.
    pub fn cashflow(&self) -> Decimal {
        round_cash(self.notional * self.rate)
    }
}

/// A trade generated by the balancing engine.
///
/// `sequence` continues the count of the existing trades: with N input
/// trades the first generated trade is N+1, the second N+2.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedTrade {
    pub sequence: u32,
    pub notional: Decimal,
    pub rate: Decimal,
    pub cashflow: Decimal,
}

/// An ordered collection of existing trades.
///
/// Exposes the two aggregates the balancing engine works from. Both are
/// summed exactly and rounded to cent precision once, on the total; the
/// cashflow aggregate sums per-trade *rounded* cashflows.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TradeSet {
    trades: Vec<Trade>,
}

impl TradeSet {
    pub fn new() -> Self {
        Self { trades: Vec::new() }
    }

    pub fn add(&mut self, trade: Trade) {
        self.trades.push(trade);
    }

    pub fn trades(&self) -> &[Trade] {
        &self.trades
    }

    pub fn len(&self) -> usize {
        self.trades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trades.is_empty()
    }

    /// Total notional across all trades, rounded to cents.
    pub fn notional_sum(&self) -> Decimal {
        round_cash(self.trades.iter().map(|t| t.notional()).sum())
    }

    /// Total of the per-trade rounded cashflows, rounded to cents.
    pub fn cashflow_sum(&self) -> Decimal {
        round_cash(self.trades.iter().map(|t| t.cashflow()).sum())
    }
}

impl FromIterator<Trade> for TradeSet {
    fn from_iter<T: IntoIterator<Item = Trade>>(iter: T) -> Self {
        Self {
            trades: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_cashflow_is_rounded_product() {
        let trade = Trade::new(dec!(545891.29), dec!(0.04889299));
        // 545891.29 * 0.04889299 ≈ 26690.2574, rounded to cents
        assert_eq!(trade.cashflow(), dec!(26690.26));
    }

    #[test]
    fn test_cashflow_negative_notional() {
        let trade = Trade::new(dec!(-1000), dec!(0.05));
        assert_eq!(trade.cashflow(), dec!(-50.00));
    }

    #[test]
    fn test_trade_set_sums() {
        let mut set = TradeSet::new();
        set.add(Trade::new(dec!(1000.50), dec!(0.05)));
        set.add(Trade::new(dec!(-500.25), dec!(0.04)));

        assert_eq!(set.len(), 2);
        assert_eq!(set.notional_sum(), dec!(500.25));
        // 50.02 (50.025 rounds to even) + -20.01 = 30.01
        assert_eq!(set.cashflow_sum(), dec!(30.01));
    }

    #[test]
    fn test_cashflow_sum_uses_per_trade_rounding() {
        // Each cashflow rounds to 0.01 individually; the raw products
        // would sum differently.
        let mut set = TradeSet::new();
        set.add(Trade::new(dec!(1.40), dec!(0.005)));
        set.add(Trade::new(dec!(1.40), dec!(0.005)));
        // 0.007 rounds to 0.01 per trade, so the sum is 0.02 — not
        // round(0.014) = 0.01.
        assert_eq!(set.cashflow_sum(), dec!(0.02));
    }

    #[test]
    fn test_notional_sum_rounds_once_on_the_total() {
        // Sub-cent notionals accumulate exactly before the single
        // rounding: 1.004 × 3 = 3.012 → 3.01. Rounding each step
        // would lose the fractional cents and give 3.00.
        let mut set = TradeSet::new();
        set.add(Trade::new(dec!(1.004), dec!(0)));
        set.add(Trade::new(dec!(1.004), dec!(0)));
        set.add(Trade::new(dec!(1.004), dec!(0)));
        assert_eq!(set.notional_sum(), dec!(3.01));
    }

    #[test]
    fn test_empty_set_sums_to_zero() {
        let set = TradeSet::new();
        assert!(set.is_empty());
        assert_eq!(set.notional_sum(), Decimal::ZERO);
        assert_eq!(set.cashflow_sum(), Decimal::ZERO);
    }

    #[test]
    fn test_from_iterator() {
        let set: TradeSet = vec![
            Trade::new(dec!(100), dec!(0.01)),
            Trade::new(dec!(200), dec!(0.02)),
        ]
        .into_iter()
        .collect();
        assert_eq!(set.len(), 2);
    }
}
