//! Fixed-width text rendering of generated trades.
//!
//! One line per trade: label and sequence number, then notional
//! (width 15, 2 decimals), rate (width 11, 8 decimals) and cashflow
//! (width 15, 2 decimals), all right-aligned.

use crate::core::trade::GeneratedTrade;

/// Render one generated trade in the fixed console layout.
pub fn format_trade(trade: &GeneratedTrade) -> String {
    format!(
        "Trade {}   {:>15}  {:>11}  {:>15}",
        trade.sequence,
        format!("{:.2}", trade.notional),
        format!("{:.8}", trade.rate),
        format!("{:.2}", trade.cashflow),
    )
}

/// Render a sequence of generated trades, one line per trade.
///
/// An empty sequence renders as the empty string — nothing to print.
pub fn render(trades: &[GeneratedTrade]) -> String {
    trades
        .iter()
        .map(format_trade)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_fixed_width_layout() {
        let trade = GeneratedTrade {
            sequence: 6,
            notional: dec!(3950072.95),
            rate: dec!(0.00134147),
            cashflow: dec!(5298.91),
        };
        assert_eq!(
            format_trade(&trade),
            "Trade 6        3950072.95   0.00134147          5298.91"
        );
    }

    #[test]
    fn test_negative_values_keep_alignment() {
        let trade = GeneratedTrade {
            sequence: 2,
            notional: dec!(-545891.29),
            rate: dec!(0.04889299),
            cashflow: dec!(-26690.26),
        };
        assert_eq!(
            format_trade(&trade),
            "Trade 2        -545891.29   0.04889299        -26690.26"
        );
    }

    #[test]
    fn test_short_values_are_zero_padded() {
        let trade = GeneratedTrade {
            sequence: 3,
            notional: dec!(0.50),
            rate: dec!(0.08),
            cashflow: dec!(0.04),
        };
        assert_eq!(
            format_trade(&trade),
            "Trade 3              0.50   0.08000000             0.04"
        );
    }

    #[test]
    fn test_render_joins_lines() {
        let trades = vec![
            GeneratedTrade {
                sequence: 1,
                notional: dec!(1.00),
                rate: dec!(0.1),
                cashflow: dec!(0.10),
            },
            GeneratedTrade {
                sequence: 2,
                notional: dec!(2.00),
                rate: dec!(0.1),
                cashflow: dec!(0.20),
            },
        ];
        let text = render(&trades);
        assert_eq!(text.lines().count(), 2);
        assert!(text.starts_with("Trade 1"));
    }

    #[test]
    fn test_empty_sequence_renders_nothing() {
        assert_eq!(render(&[]), "");
    }
}
