use rust_decimal::Decimal;

use crate::error::HomeCostError;
use crate::types::{Money, Rate};
use crate::HomeCostResult;

/// Months per year, as a Decimal divisor for periodic rates.
const MONTHS_PER_YEAR: u32 = 12;

/// Level monthly payment for a fully amortising fixed-rate loan:
/// M = P * r(1+r)^n / ((1+r)^n - 1)
///
/// `annual_rate` is a decimal fraction (0.0593 = 5.93% p.a.), compounded
/// monthly. A zero principal is a defined degenerate case and returns 0; a
/// zero rate amortises straight-line as principal / n.
pub fn monthly_payment(
    principal: Money,
    annual_rate: Rate,
    term_years: u32,
) -> HomeCostResult<Money> {
    validate_loan_parameters(principal, annual_rate, term_years)?;

    if principal.is_zero() {
        return Ok(Decimal::ZERO);
    }

    let r = periodic_rate(annual_rate);
    let n = total_periods(term_years);

    if r.is_zero() {
        // Interest-free: straight-line amortisation
        return Ok(principal / Decimal::from(n));
    }

    let compound = compound_factor(r, n);

    let numerator = principal * r * compound;
    let denominator = compound - Decimal::ONE;

    if denominator.is_zero() {
        return Err(HomeCostError::DivisionByZero {
            context: "mortgage payment denominator".into(),
        });
    }

    Ok(numerator / denominator)
}

/// Monthly periodic rate from an annual nominal rate.
pub(crate) fn periodic_rate(annual_rate: Rate) -> Rate {
    annual_rate / Decimal::from(MONTHS_PER_YEAR)
}

/// Number of monthly payments over the loan term.
pub(crate) fn total_periods(term_years: u32) -> u32 {
    term_years * MONTHS_PER_YEAR
}

/// (1 + r)^n via iterative multiplication
pub(crate) fn compound_factor(r: Rate, n: u32) -> Decimal {
    let mut compound = Decimal::ONE;
    for _ in 0..n {
        compound *= Decimal::ONE + r;
    }
    compound
}

pub(crate) fn validate_loan_parameters(
    principal: Money,
    annual_rate: Rate,
    term_years: u32,
) -> HomeCostResult<()> {
    if principal < Decimal::ZERO {
        return Err(HomeCostError::InvalidInput {
            field: "principal".into(),
            reason: "Principal must be non-negative".into(),
        });
    }

    if annual_rate < Decimal::ZERO {
        return Err(HomeCostError::InvalidInput {
            field: "annual_rate".into(),
            reason: "Interest rate must be non-negative".into(),
        });
    }

    if term_years == 0 {
        return Err(HomeCostError::InvalidInput {
            field: "term_years".into(),
            reason: "Loan term must be at least 1 year".into(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn test_standard_30_year_loan() {
        // $475k (95% of $500k) at 5.93% over 30 years, expected ~$2,826/mo
        let payment = monthly_payment(dec!(475000), dec!(0.0593), 30).unwrap();
        assert!(
            payment > dec!(2820) && payment < dec!(2830),
            "Monthly payment {} outside expected range",
            payment
        );
    }

    #[test]
    fn test_zero_principal_returns_zero() {
        let payment = monthly_payment(Decimal::ZERO, dec!(0.0593), 30).unwrap();
        assert_eq!(payment, Decimal::ZERO);
    }

    #[test]
    fn test_zero_rate_straight_line() {
        // $360k over 30 years interest-free = $1000/mo exactly
        let payment = monthly_payment(dec!(360000), Decimal::ZERO, 30).unwrap();
        assert_eq!(payment, dec!(1000));
    }

    #[test]
    fn test_monotonic_in_principal() {
        let smaller = monthly_payment(dec!(300000), dec!(0.06), 30).unwrap();
        let larger = monthly_payment(dec!(400000), dec!(0.06), 30).unwrap();
        assert!(larger > smaller);
    }

    #[test]
    fn test_monotonic_in_rate() {
        let cheaper = monthly_payment(dec!(300000), dec!(0.04), 30).unwrap();
        let dearer = monthly_payment(dec!(300000), dec!(0.07), 30).unwrap();
        assert!(dearer > cheaper);
    }

    #[test]
    fn test_shorter_term_higher_payment() {
        let long = monthly_payment(dec!(300000), dec!(0.06), 30).unwrap();
        let short = monthly_payment(dec!(300000), dec!(0.06), 15).unwrap();
        assert!(short > long);
    }

    #[test]
    fn test_idempotent() {
        let first = monthly_payment(dec!(475000), dec!(0.0593), 30).unwrap();
        let second = monthly_payment(dec!(475000), dec!(0.0593), 30).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_negative_principal_rejected() {
        let result = monthly_payment(dec!(-1), dec!(0.06), 30);
        assert!(result.is_err());
        match result.unwrap_err() {
            HomeCostError::InvalidInput { field, .. } => assert_eq!(field, "principal"),
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_negative_rate_rejected() {
        let result = monthly_payment(dec!(300000), dec!(-0.01), 30);
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_term_rejected() {
        let result = monthly_payment(dec!(300000), dec!(0.06), 0);
        assert!(result.is_err());
        match result.unwrap_err() {
            HomeCostError::InvalidInput { field, .. } => assert_eq!(field, "term_years"),
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }
}
