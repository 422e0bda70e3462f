use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Decimal places at which cash amounts (notional, cashflow) are kept.
pub const CASH_DP: u32 = 2;

/// Decimal places at which trade rates are kept.
pub const RATE_DP: u32 = 8;

/// Zero-sum tolerance: residual aggregates must stay below one cent.
pub const CENT: Decimal = dec!(0.01);

/// Round a cash amount to cent precision.
///
/// Uses the default midpoint-nearest-even strategy. This rounding is
/// load-bearing: the zero-sum check is performed at exactly this
/// precision, and cashflows must be rounded per-trade before summation.
pub fn round_cash(amount: Decimal) -> Decimal {
    amount.round_dp(CASH_DP)
}

/// Round a rate to 8 decimal places.
///
/// Rate-boundary comparisons must use the rounded value, so that a
/// quotient infinitesimally outside a bound that rounds to exactly the
/// bound is still accepted.
pub fn round_rate(rate: Decimal) -> Decimal {
    rate.round_dp(RATE_DP)
}
