use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use homecost_core::ownership::recurring_costs::{self, OwnershipCostsInput};

use crate::input;

/// Arguments for recurring ownership cost estimation
#[derive(Args)]
pub struct CostsArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Purchase price of the property
    #[arg(long)]
    pub property_price: Option<Decimal>,

    /// Deposit as a fraction of the price (e.g. 0.05 for 5%)
    #[arg(long, default_value = "0.05")]
    pub deposit_rate: Decimal,

    /// Annual interest rate as a decimal (e.g. 0.0593 for 5.93%)
    #[arg(long, default_value = "0.0593")]
    pub rate: Decimal,

    /// Loan term in years
    #[arg(long, default_value = "30")]
    pub term_years: u32,

    /// Quarterly strata levy
    #[arg(long, default_value = "0")]
    pub strata: Decimal,

    /// Quarterly council rates
    #[arg(long, default_value = "0")]
    pub council: Decimal,

    /// Quarterly water charges
    #[arg(long, default_value = "0")]
    pub water: Decimal,

    /// Extra amount added to every monthly mortgage payment
    #[arg(long, default_value = "0")]
    pub extra: Decimal,
}

pub fn run_costs(args: CostsArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let costs_input: OwnershipCostsInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        OwnershipCostsInput {
            property_price: args
                .property_price
                .ok_or("--property-price is required (or provide --input)")?,
            deposit_rate: args.deposit_rate,
            annual_rate: args.rate,
            term_years: args.term_years,
            strata_quarterly: args.strata,
            council_quarterly: args.council,
            water_quarterly: args.water,
            additional_monthly_repayment: args.extra,
        }
    };

    let result = recurring_costs::estimate_ownership_costs(&costs_input)?;
    Ok(serde_json::to_value(result)?)
}
