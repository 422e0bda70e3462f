//! swap-balancer CLI
//!
//! Generate the balancing trades for a trade table from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Balance the trades in a CSV file (columns: notional, rate)
//! swap-balancer balance --input trades.csv
//!
//! # Custom rate bounds and explicit two-trade fallback rates
//! swap-balancer balance --input trades.csv --max-rate 0.2 --rates 0.1 0.05
//!
//! # Output as JSON
//! swap-balancer balance --input trades.csv --format json
//!
//! # Generate a random trade table for testing
//! swap-balancer generate --trades 20 --output test.csv
//! ```

use rust_decimal::Decimal;
use std::fs;
use std::process;
use swap_balancer::core::config::BalancerConfig;
use swap_balancer::engine::balancer::Balancer;
use swap_balancer::io::csv::{read_trades, write_trades};
use swap_balancer::report;
use swap_balancer::simulation::scenario::{generate_random_trades, ScenarioConfig};

fn print_usage() {
    eprintln!(
        r#"swap-balancer — generate the 1 or 2 interest rate swap trades needed
to achieve zero-sum notional value and cashflow

USAGE:
    swap-balancer <COMMAND> [OPTIONS]

COMMANDS:
    balance     Compute the balancing trades for a trade table
    generate    Generate a random trade table (for testing)
    help        Show this message

OPTIONS (balance):
    --input <FILE>      Path to CSV trade file (columns: notional, rate)
    --min-rate <RATE>   Minimum allowed rate (default: -0.1)
    --max-rate <RATE>   Maximum allowed rate (default: 0.1)
    --rates <R1> <R2>   Rates for the two-trade fallback; must differ,
                        be non-zero and lie within [min-rate, max-rate]
    --format <FORMAT>   Output format: text (default) or json

OPTIONS (generate):
    --trades <N>        Number of trades (default: 10)
    --output <FILE>     Write to file instead of stdout

EXAMPLES:
    swap-balancer balance --input trades.csv
    swap-balancer balance --input trades.csv --rates 0.3 0.1 --max-rate 0.3
    swap-balancer balance --input trades.csv --format json
    swap-balancer generate --trades 50 --output test.csv"#
    );
}

fn is_supported_format(format: &str) -> bool {
    matches!(format, "text" | "json")
}

fn parse_rate(args: &[String], i: usize, option: &str) -> Decimal {
    args.get(i)
        .and_then(|s| s.parse::<Decimal>().ok())
        .unwrap_or_else(|| {
            eprintln!("{} requires a numeric rate", option);
            process::exit(1);
        })
}

fn cmd_balance(args: &[String]) {
    let mut input_path = None;
    let mut format = "text".to_string();
    let mut config = BalancerConfig::default();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--input" => {
                i += 1;
                input_path = Some(args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--input requires a file path");
                    process::exit(1);
                }));
            }
            "--min-rate" => {
                i += 1;
                config.min_rate = parse_rate(args, i, "--min-rate");
            }
            "--max-rate" => {
                i += 1;
                config.max_rate = parse_rate(args, i, "--max-rate");
            }
            "--rates" => {
                let first = parse_rate(args, i + 1, "--rates");
                let second = parse_rate(args, i + 2, "--rates");
                config.fallback_rates = Some((first, second));
                i += 2;
            }
            "--format" => {
                i += 1;
                format = args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--format requires 'text' or 'json'");
                    process::exit(1);
                });
                if !is_supported_format(&format) {
                    eprintln!("--format requires 'text' or 'json', got '{}'", format);
                    process::exit(1);
                }
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    let path = input_path.unwrap_or_else(|| {
        eprintln!("Error: --input <FILE> is required");
        process::exit(1);
    });

    let trades = read_trades(&path).unwrap_or_else(|e| {
        eprintln!("Error reading '{}': {}", path, e);
        process::exit(1);
    });

    let result = Balancer::balance(&trades, &config).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });

    if format == "json" {
        let json = serde_json::to_string_pretty(result.generated()).unwrap_or_else(|e| {
            eprintln!("Error serializing result: {}", e);
            process::exit(1);
        });
        println!("{}", json);
    } else {
        let text = report::render(result.generated());
        if !text.is_empty() {
            println!("{}", text);
        }
    }
}

fn cmd_generate(args: &[String]) {
    let mut trade_count = 10usize;
    let mut output_path: Option<String> = None;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--trades" => {
                i += 1;
                trade_count = args
                    .get(i)
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(|| {
                        eprintln!("--trades requires a number");
                        process::exit(1);
                    });
            }
            "--output" => {
                i += 1;
                output_path = Some(args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--output requires a file path");
                    process::exit(1);
                }));
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    let config = ScenarioConfig {
        trade_count,
        ..Default::default()
    };
    let set = generate_random_trades(&config);

    let mut buf = Vec::new();
    write_trades(&mut buf, &set).unwrap_or_else(|e| {
        eprintln!("Error writing trades: {}", e);
        process::exit(1);
    });

    if let Some(path) = output_path {
        fs::write(&path, &buf).unwrap_or_else(|e| {
            eprintln!("Error writing to '{}': {}", path, e);
            process::exit(1);
        });
        eprintln!("Generated {} trades → {}", set.len(), path);
    } else {
        print!("{}", String::from_utf8_lossy(&buf));
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let command = args[1].as_str();
    let rest = &args[2..];

    match command {
        "balance" => cmd_balance(rest),
        "generate" => cmd_generate(rest),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_formats() {
        assert!(is_supported_format("text"));
        assert!(is_supported_format("json"));
        assert!(!is_supported_format("yaml"));
        assert!(!is_supported_format(""));
    }
}
