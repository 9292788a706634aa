use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::HomeCostError;
use crate::mortgage::metrics::{loan_metrics, LoanMetrics};
use crate::mortgage::payment::{monthly_payment, validate_loan_parameters};
use crate::mortgage::schedule::{repayment_schedule, RepaymentPoint};
use crate::types::{with_metadata, ComputationOutput, Money, Rate};
use crate::HomeCostResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Input parameters for a full loan repayment analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanAnalysisInput {
    /// Amount borrowed (price less deposit)
    pub principal: Money,
    /// Nominal annual interest rate, compounded monthly (0.0593 = 5.93% p.a.)
    pub annual_rate: Rate,
    /// Loan term in years
    pub term_years: u32,
    /// Extra amount added to every monthly payment
    #[serde(default)]
    pub additional_monthly_repayment: Money,
    /// Caller-supplied monthly payment; computed from the loan parameters
    /// when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_payment: Option<Money>,
}

/// Complete repayment analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanAnalysisOutput {
    /// Level monthly payment covering interest and principal
    pub monthly_payment: Money,
    /// Year-by-year balances for both tracks
    pub schedule: Vec<RepaymentPoint>,
    /// Whole-of-loan totals and savings
    pub metrics: LoanMetrics,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Analyse a fixed-rate loan: level monthly payment, year-by-year balance
/// schedule for the standard and accelerated tracks, and whole-of-loan
/// metrics.
///
/// Returns a `ComputationOutput<LoanAnalysisOutput>` with warnings for
/// degenerate or unusual configurations and computation metadata.
pub fn analyze_loan(
    input: &LoanAnalysisInput,
) -> HomeCostResult<ComputationOutput<LoanAnalysisOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate_loan_parameters(input.principal, input.annual_rate, input.term_years)?;

    let payment = match input.monthly_payment {
        Some(p) if p < Decimal::ZERO => {
            return Err(HomeCostError::InvalidInput {
                field: "monthly_payment".into(),
                reason: "Monthly payment must be non-negative".into(),
            });
        }
        Some(p) => p,
        None => monthly_payment(input.principal, input.annual_rate, input.term_years)?,
    };

    if input.principal.is_zero() {
        warnings.push("Zero principal — no schedule produced".into());
    }

    if payment > Decimal::ZERO && input.additional_monthly_repayment > payment {
        warnings.push(format!(
            "Additional repayment {} exceeds the scheduled payment {}",
            input.additional_monthly_repayment,
            payment.round_dp(2)
        ));
    }

    if input.annual_rate > dec!(0.15) {
        warnings.push(format!(
            "Interest rate {:.1}% exceeds 15% — verify input",
            input.annual_rate * dec!(100)
        ));
    }

    let schedule = repayment_schedule(
        input.principal,
        payment,
        input.annual_rate,
        input.term_years,
        input.additional_monthly_repayment,
    )?;

    let metrics = loan_metrics(
        input.principal,
        payment,
        input.annual_rate,
        input.term_years,
        input.additional_monthly_repayment,
    )?;

    let output = LoanAnalysisOutput {
        monthly_payment: payment,
        schedule,
        metrics,
    };

    let elapsed = start.elapsed().as_micros() as u64;

    Ok(with_metadata(
        "Fixed-Rate Mortgage Amortisation (level monthly payment)",
        input,
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
