//! Basic balancing walkthrough.
//!
//! Builds a small trade table, runs the balancer, and prints both the
//! generated trades and the result summary.
//!
//! Run with: `cargo run --example basic_balancing`

use rust_decimal_macros::dec;
use swap_balancer::prelude::*;
use swap_balancer::report;

fn main() {
    let mut trades = TradeSet::new();
    trades.add(Trade::new(dec!(600000), dec!(0.04)));
    trades.add(Trade::new(dec!(400000), dec!(0.065)));
    trades.add(Trade::new(dec!(-250000), dec!(0.031)));

    println!("Existing trades: {}", trades.len());
    println!("Notional sum:    {}", trades.notional_sum());
    println!("Cashflow sum:    {}", trades.cashflow_sum());
    println!();

    let config = BalancerConfig::default();
    match Balancer::balance(&trades, &config) {
        Ok(result) => {
            let text = report::render(result.generated());
            if text.is_empty() {
                println!("Already balanced, no trades needed.");
            } else {
                println!("{}", text);
            }
            println!();
            print!("{}", result);
        }
        Err(e) => eprintln!("Balancing failed: {}", e),
    }
}
