mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::mortgage::RepaymentArgs;
use commands::ownership::CostsArgs;

/// Property ownership cost and mortgage repayment calculations
#[derive(Parser)]
#[command(
    name = "homecost",
    version,
    about = "Property ownership cost and mortgage repayment calculations",
    long_about = "A CLI for estimating a property buyer's recurring ownership costs \
                  with decimal precision. Combines a fixed-rate mortgage repayment \
                  with periodic strata, council and water charges, and projects the \
                  loan balance over time under an optional extra-repayment strategy."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyse a fixed-rate loan: payment, balance schedule, savings metrics
    Repayment(RepaymentArgs),
    /// Estimate recurring ownership costs (mortgage + periodic fees)
    Costs(CostsArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Repayment(args) => commands::mortgage::run_repayment(args),
        Commands::Costs(args) => commands::ownership::run_costs(args),
        Commands::Version => {
            println!("homecost {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
