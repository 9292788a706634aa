use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::HomeCostError;
use crate::mortgage::analysis::{analyze_loan, LoanAnalysisInput, LoanAnalysisOutput};
use crate::types::{with_metadata, ComputationOutput, Money, Rate};
use crate::HomeCostResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

fn default_deposit_rate() -> Rate {
    dec!(0.05)
}

fn default_annual_rate() -> Rate {
    dec!(0.0593)
}

fn default_term_years() -> u32 {
    30
}

/// Input for recurring ownership cost estimation.
///
/// Strata, council and water charges are the quarterly amounts as billed;
/// they are converted to monthly equivalents internally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnershipCostsInput {
    /// Purchase price of the property
    pub property_price: Money,
    /// Fraction of the price paid upfront (0.05 = 5% deposit)
    #[serde(default = "default_deposit_rate")]
    pub deposit_rate: Rate,
    /// Nominal annual interest rate on the loan
    #[serde(default = "default_annual_rate")]
    pub annual_rate: Rate,
    /// Loan term in years
    #[serde(default = "default_term_years")]
    pub term_years: u32,
    /// Quarterly strata levy
    #[serde(default)]
    pub strata_quarterly: Money,
    /// Quarterly council rates
    #[serde(default)]
    pub council_quarterly: Money,
    /// Quarterly water charges
    #[serde(default)]
    pub water_quarterly: Money,
    /// Extra amount added to every monthly mortgage payment
    #[serde(default)]
    pub additional_monthly_repayment: Money,
}

/// Recurring ownership cost breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnershipCostsOutput {
    /// Upfront deposit (price × deposit rate)
    pub deposit_amount: Money,
    /// Principal financed by the loan
    pub loan_amount: Money,
    /// Level monthly mortgage payment
    pub monthly_mortgage: Money,
    pub monthly_strata: Money,
    pub monthly_council: Money,
    pub monthly_water: Money,
    /// Mortgage plus all monthly fee equivalents
    pub monthly_total: Money,
    /// Monthly total expressed per week
    pub weekly_total: Money,
    /// Full repayment analysis, present when there is a loan to amortise
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repayment: Option<LoanAnalysisOutput>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Estimate a buyer's recurring ownership costs: the mortgage repayment on
/// the financed portion of the price, plus quarterly strata, council and
/// water charges converted to monthly equivalents.
pub fn estimate_ownership_costs(
    input: &OwnershipCostsInput,
) -> HomeCostResult<ComputationOutput<OwnershipCostsOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate_input(input)?;

    let deposit_amount = input.property_price * input.deposit_rate;
    let loan_amount = input.property_price - deposit_amount;

    let ltv = Decimal::ONE - input.deposit_rate;
    if loan_amount > Decimal::ZERO && ltv > dec!(0.80) {
        warnings.push(format!(
            "LTV of {:.1}% exceeds 80% — lenders mortgage insurance usually applies",
            ltv * dec!(100)
        ));
    }

    let (monthly_mortgage, repayment) = if loan_amount > Decimal::ZERO {
        let analysis = analyze_loan(&LoanAnalysisInput {
            principal: loan_amount,
            annual_rate: input.annual_rate,
            term_years: input.term_years,
            additional_monthly_repayment: input.additional_monthly_repayment,
            monthly_payment: None,
        })?;
        let ComputationOutput {
            result,
            warnings: loan_warnings,
            ..
        } = analysis;
        warnings.extend(loan_warnings);
        (result.monthly_payment, Some(result))
    } else {
        (Decimal::ZERO, None)
    };

    // Quarterly fees to monthly: divide by 3
    let monthly_strata = input.strata_quarterly / dec!(3);
    let monthly_council = input.council_quarterly / dec!(3);
    let monthly_water = input.water_quarterly / dec!(3);

    let monthly_total = monthly_mortgage + monthly_strata + monthly_council + monthly_water;
    let weekly_total = monthly_total * dec!(12) / dec!(52);

    let output = OwnershipCostsOutput {
        deposit_amount,
        loan_amount,
        monthly_mortgage,
        monthly_strata,
        monthly_council,
        monthly_water,
        monthly_total,
        weekly_total,
        repayment,
    };

    let elapsed = start.elapsed().as_micros() as u64;

    Ok(with_metadata(
        "Recurring Ownership Costs (mortgage + periodic fees)",
        input,
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate_input(input: &OwnershipCostsInput) -> HomeCostResult<()> {
    if input.property_price < Decimal::ZERO {
        return Err(HomeCostError::InvalidInput {
            field: "property_price".into(),
            reason: "Property price must be non-negative".into(),
        });
    }

    if input.deposit_rate < Decimal::ZERO || input.deposit_rate > Decimal::ONE {
        return Err(HomeCostError::InvalidInput {
            field: "deposit_rate".into(),
            reason: "Deposit rate must be between 0 and 1".into(),
        });
    }

    for (field, fee) in [
        ("strata_quarterly", input.strata_quarterly),
        ("council_quarterly", input.council_quarterly),
        ("water_quarterly", input.water_quarterly),
    ] {
        if fee < Decimal::ZERO {
            return Err(HomeCostError::InvalidInput {
                field: field.into(),
                reason: "Quarterly charges must be non-negative".into(),
            });
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
