use napi::Result as NapiResult;
use napi_derive::napi;
use rust_decimal::Decimal;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

fn parse_decimal(field: &str, raw: &str) -> NapiResult<Decimal> {
    Decimal::from_str_exact(raw)
        .map_err(|e| napi::Error::from_reason(format!("Invalid {field} '{raw}': {e}")))
}

// ---------------------------------------------------------------------------
// Mortgage
// ---------------------------------------------------------------------------

#[napi]
pub fn monthly_payment(
    principal: String,
    annual_rate: String,
    term_years: u32,
) -> NapiResult<String> {
    let principal = parse_decimal("principal", &principal)?;
    let annual_rate = parse_decimal("annual_rate", &annual_rate)?;
    let payment =
        homecost_core::mortgage::payment::monthly_payment(principal, annual_rate, term_years)
            .map_err(to_napi_error)?;
    Ok(payment.to_string())
}

#[napi]
pub fn analyze_loan(input_json: String) -> NapiResult<String> {
    let input: homecost_core::mortgage::analysis::LoanAnalysisInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = homecost_core::mortgage::analysis::analyze_loan(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Ownership costs
// ---------------------------------------------------------------------------

#[napi]
pub fn estimate_ownership_costs(input_json: String) -> NapiResult<String> {
    let input: homecost_core::ownership::recurring_costs::OwnershipCostsInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = homecost_core::ownership::recurring_costs::estimate_ownership_costs(&input)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}
