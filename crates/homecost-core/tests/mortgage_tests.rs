use homecost_core::mortgage::{analysis, metrics, payment, schedule};
use homecost_core::ownership::recurring_costs;
use homecost_core::HomeCostError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// End-to-end repayment analysis
// ===========================================================================

fn sample_loan() -> analysis::LoanAnalysisInput {
    // 95% of a $500k purchase at the default rate, with a $500 extra repayment
    analysis::LoanAnalysisInput {
        principal: dec!(475000),
        annual_rate: dec!(0.0593),
        term_years: 30,
        additional_monthly_repayment: dec!(500),
        monthly_payment: None,
    }
}

#[test]
fn test_full_analysis_consistency() {
    let result = analysis::analyze_loan(&sample_loan()).unwrap();
    let out = &result.result;

    // Payment, schedule and metrics must describe the same loan
    let payment = payment::monthly_payment(dec!(475000), dec!(0.0593), 30).unwrap();
    assert_eq!(out.monthly_payment, payment);

    let sched =
        schedule::repayment_schedule(dec!(475000), payment, dec!(0.0593), 30, dec!(500)).unwrap();
    assert_eq!(out.schedule, sched);

    let m = metrics::loan_metrics(dec!(475000), payment, dec!(0.0593), 30, dec!(500)).unwrap();
    assert_eq!(out.metrics, m);
}

#[test]
fn test_schedule_agrees_with_metrics_on_payoff_year() {
    let result = analysis::analyze_loan(&sample_loan()).unwrap();
    let out = &result.result;

    // The year the accelerated balance first shows zero must bracket the
    // month count from the independent month-by-month simulation.
    let payoff_year = out
        .schedule
        .iter()
        .find(|p| p.accelerated_balance == Decimal::ZERO)
        .map(|p| p.year)
        .expect("accelerated track should pay off within the term");

    let months = out.metrics.accelerated_term_months;
    assert!(months <= payoff_year * 12);
    assert!(months > (payoff_year - 1) * 12);
}

#[test]
fn test_extra_repayment_saves_interest_and_time() {
    let result = analysis::analyze_loan(&sample_loan()).unwrap();
    let m = &result.result.metrics;

    assert!(m.accelerated_term_months < m.standard_term_months);
    assert!(m.months_saved > 0);
    assert!(m.interest_saved > Decimal::ZERO);
    assert!(m.accelerated_total_interest < m.standard_total_interest);
}

#[test]
fn test_output_envelope_serialises() {
    let result = analysis::analyze_loan(&sample_loan()).unwrap();
    let value = serde_json::to_value(&result).unwrap();

    assert_eq!(value["result"]["schedule"].as_array().unwrap().len(), 31);
    assert_eq!(
        value["methodology"],
        "Fixed-Rate Mortgage Amortisation (level monthly payment)"
    );
}

// ===========================================================================
// Ownership cost estimation
// ===========================================================================

#[test]
fn test_ownership_costs_end_to_end() {
    let input: recurring_costs::OwnershipCostsInput = serde_json::from_str(
        r#"{
            "property_price": 500000,
            "strata_quarterly": 900,
            "council_quarterly": 360,
            "water_quarterly": 240
        }"#,
    )
    .unwrap();

    let result = recurring_costs::estimate_ownership_costs(&input).unwrap();
    let out = &result.result;

    assert_eq!(out.deposit_amount, dec!(25000));
    assert_eq!(out.loan_amount, dec!(475000));

    // ~$2,826 mortgage plus $500 of monthly fee equivalents
    assert!(out.monthly_total > dec!(3320) && out.monthly_total < dec!(3330));
    assert_eq!(out.weekly_total, out.monthly_total * dec!(12) / dec!(52));

    let repayment = out.repayment.as_ref().unwrap();
    assert_eq!(repayment.schedule.len(), 31);
    assert_eq!(repayment.metrics.standard_term_months, 360);
}

// ===========================================================================
// Error taxonomy
// ===========================================================================

#[test]
fn test_invalid_parameters_fail_fast() {
    match payment::monthly_payment(dec!(-1), dec!(0.06), 30).unwrap_err() {
        HomeCostError::InvalidInput { field, .. } => assert_eq!(field, "principal"),
        other => panic!("Expected InvalidInput, got {other:?}"),
    }
}

#[test]
fn test_non_amortizing_is_a_distinguished_condition() {
    match metrics::loan_metrics(dec!(300000), dec!(100), dec!(0.06), 30, Decimal::ZERO)
        .unwrap_err()
    {
        HomeCostError::NonAmortizing(msg) => {
            assert!(msg.contains("does not cover"));
        }
        other => panic!("Expected NonAmortizing, got {other:?}"),
    }
}
