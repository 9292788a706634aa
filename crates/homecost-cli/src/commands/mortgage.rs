use clap::Args;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::Value;

use homecost_core::mortgage::analysis::{self, LoanAnalysisInput};

use crate::input;

/// Arguments for loan repayment analysis
#[derive(Args)]
pub struct RepaymentArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Amount borrowed
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Annual interest rate as a decimal (e.g. 0.0593 for 5.93%)
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Loan term in years
    #[arg(long, default_value = "30")]
    pub term_years: u32,

    /// Extra amount added to every monthly payment
    #[arg(long, default_value = "0")]
    pub extra: Decimal,

    /// Override the scheduled monthly payment instead of computing it
    #[arg(long)]
    pub payment: Option<Decimal>,
}

pub fn run_repayment(args: RepaymentArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let loan_input: LoanAnalysisInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        LoanAnalysisInput {
            principal: args
                .principal
                .ok_or("--principal is required (or provide --input)")?,
            annual_rate: args.rate.unwrap_or(dec!(0.0593)),
            term_years: args.term_years,
            additional_monthly_repayment: args.extra,
            monthly_payment: args.payment,
        }
    };

    let result = analysis::analyze_loan(&loan_input)?;
    Ok(serde_json::to_value(result)?)
}
