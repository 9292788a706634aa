use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::HomeCostError;
use crate::mortgage::payment::{periodic_rate, validate_loan_parameters};
use crate::types::{Money, Rate};
use crate::HomeCostResult;

/// Year-end balances for the standard and accelerated repayment tracks.
///
/// Balances are rounded to the nearest whole currency unit and floored at
/// zero, suitable for charting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepaymentPoint {
    pub year: u32,
    pub standard_balance: Money,
    pub accelerated_balance: Money,
}

/// Year-by-year balance trajectory over the loan term.
///
/// Both tracks start at `principal`; the accelerated track adds
/// `additional_monthly_repayment` to every monthly payment. Produces exactly
/// `term_years + 1` points (year 0 through the final year inclusive). Returns
/// an empty schedule when there is nothing to amortise (zero principal or
/// zero payment).
pub fn repayment_schedule(
    principal: Money,
    monthly_payment: Money,
    annual_rate: Rate,
    term_years: u32,
    additional_monthly_repayment: Money,
) -> HomeCostResult<Vec<RepaymentPoint>> {
    validate_loan_parameters(principal, annual_rate, term_years)?;

    if additional_monthly_repayment < Decimal::ZERO {
        return Err(HomeCostError::InvalidInput {
            field: "additional_monthly_repayment".into(),
            reason: "Additional repayment must be non-negative".into(),
        });
    }

    if principal <= Decimal::ZERO || monthly_payment <= Decimal::ZERO {
        return Ok(Vec::new());
    }

    let rate = periodic_rate(annual_rate);
    let mut points = Vec::with_capacity(term_years as usize + 1);

    let mut standard = principal;
    let mut accelerated = principal;

    for year in 0..=term_years {
        points.push(RepaymentPoint {
            year,
            standard_balance: round_balance(standard),
            accelerated_balance: round_balance(accelerated),
        });

        if year == term_years {
            break;
        }

        for _ in 0..12 {
            standard = step_month(standard, monthly_payment, rate, Decimal::ZERO);
            accelerated = step_month(
                accelerated,
                monthly_payment,
                rate,
                additional_monthly_repayment,
            );
        }
    }

    Ok(points)
}

/// One monthly step of a single track. A balance already at zero is held
/// there; a payment that fails to cover the accrued interest holds the
/// balance flat rather than letting it grow.
fn step_month(balance: Money, payment: Money, rate: Rate, extra: Money) -> Money {
    if balance <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let interest = balance * rate;
    let principal_portion = payment - interest + extra;

    if principal_portion <= Decimal::ZERO {
        return balance;
    }

    (balance - principal_portion).max(Decimal::ZERO)
}

/// Nearest whole unit, half away from zero, floored at zero.
fn round_balance(balance: Money) -> Money {
    balance
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .max(Decimal::ZERO)
}
