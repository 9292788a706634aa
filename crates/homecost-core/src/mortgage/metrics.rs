use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::HomeCostError;
use crate::mortgage::payment::{periodic_rate, total_periods, validate_loan_parameters};
use crate::types::{Money, Rate};
use crate::HomeCostResult;

/// Whole-of-loan totals for the standard and accelerated repayment tracks,
/// with the savings attributable to the extra repayments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanMetrics {
    /// Total repayments over the standard track
    pub standard_total_paid: Money,
    /// Total interest charged over the standard track
    pub standard_total_interest: Money,
    /// Total repayments over the accelerated track (scheduled + extra)
    pub accelerated_total_paid: Money,
    /// Total interest charged over the accelerated track
    pub accelerated_total_interest: Money,
    /// Months to payoff, capped at the contractual term
    pub standard_term_months: u32,
    pub accelerated_term_months: u32,
    /// Term reduction from the extra repayments, clamped at zero
    pub months_saved: u32,
    /// `months_saved` decomposed into whole years and leftover months
    pub time_saved_years: u32,
    pub time_saved_months: u32,
    /// Interest avoided by the extra repayments, clamped at zero
    pub interest_saved: Money,
}

impl LoanMetrics {
    fn zeroed() -> Self {
        LoanMetrics {
            standard_total_paid: Decimal::ZERO,
            standard_total_interest: Decimal::ZERO,
            accelerated_total_paid: Decimal::ZERO,
            accelerated_total_interest: Decimal::ZERO,
            standard_term_months: 0,
            accelerated_term_months: 0,
            months_saved: 0,
            time_saved_years: 0,
            time_saved_months: 0,
            interest_saved: Decimal::ZERO,
        }
    }
}

/// Running totals for one simulated track.
struct TrackTotals {
    months: u32,
    interest: Money,
}

/// Whole-of-loan metrics from a month-by-month simulation of both tracks.
///
/// Each track is re-simulated at month granularity (not sampled from the
/// year-granularity schedule) until its balance reaches zero or the
/// contractual term elapses. The accelerated track is only simulated when
/// `additional_monthly_repayment` is positive; otherwise its totals equal
/// the standard track's.
pub fn loan_metrics(
    principal: Money,
    monthly_payment: Money,
    annual_rate: Rate,
    term_years: u32,
    additional_monthly_repayment: Money,
) -> HomeCostResult<LoanMetrics> {
    validate_loan_parameters(principal, annual_rate, term_years)?;

    if monthly_payment < Decimal::ZERO {
        return Err(HomeCostError::InvalidInput {
            field: "monthly_payment".into(),
            reason: "Monthly payment must be non-negative".into(),
        });
    }

    if additional_monthly_repayment < Decimal::ZERO {
        return Err(HomeCostError::InvalidInput {
            field: "additional_monthly_repayment".into(),
            reason: "Additional repayment must be non-negative".into(),
        });
    }

    if principal.is_zero() || monthly_payment.is_zero() {
        return Ok(LoanMetrics::zeroed());
    }

    let rate = periodic_rate(annual_rate);
    let term_cap = total_periods(term_years);

    let standard = simulate_track(principal, monthly_payment, rate, term_cap, Decimal::ZERO)?;

    let accelerated = if additional_monthly_repayment > Decimal::ZERO {
        simulate_track(
            principal,
            monthly_payment,
            rate,
            term_cap,
            additional_monthly_repayment,
        )?
    } else {
        TrackTotals {
            months: standard.months,
            interest: standard.interest,
        }
    };

    let standard_total_paid = Decimal::from(standard.months) * monthly_payment;
    let accelerated_total_paid = Decimal::from(accelerated.months)
        * (monthly_payment + additional_monthly_repayment);

    let months_saved = standard.months.saturating_sub(accelerated.months);
    let interest_saved = (standard.interest - accelerated.interest).max(Decimal::ZERO);

    Ok(LoanMetrics {
        standard_total_paid,
        standard_total_interest: standard.interest,
        accelerated_total_paid,
        accelerated_total_interest: accelerated.interest,
        standard_term_months: standard.months,
        accelerated_term_months: accelerated.months,
        months_saved,
        time_saved_years: months_saved / 12,
        time_saved_months: months_saved % 12,
        interest_saved,
    })
}

/// Simulate one track month-by-month until payoff or the term cap.
///
/// A month where the payment fails to cover the accrued interest means the
/// loan can never be repaid; that is reported as `NonAmortizing` rather than
/// returning zero-progress totals.
fn simulate_track(
    principal: Money,
    payment: Money,
    rate: Rate,
    term_cap: u32,
    extra: Money,
) -> HomeCostResult<TrackTotals> {
    let mut balance = principal;
    let mut interest_paid = Decimal::ZERO;
    let mut months = 0u32;

    while balance > Decimal::ZERO && months < term_cap {
        let interest = balance * rate;
        let principal_portion = payment - interest + extra;

        if principal_portion <= Decimal::ZERO {
            return Err(HomeCostError::NonAmortizing(format!(
                "monthly payment of {} does not cover the accrued interest of {}",
                payment + extra,
                interest.round_dp(2)
            )));
        }

        interest_paid += interest;
        balance = (balance - principal_portion).max(Decimal::ZERO);
        months += 1;
    }

    Ok(TrackTotals {
        months,
        interest: interest_paid,
    })
}
