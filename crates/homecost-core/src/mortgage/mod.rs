//! Fixed-rate mortgage amortisation: level payment, balance schedule, and
//! comparative metrics for an optional extra-repayment strategy.

pub mod analysis;
pub mod metrics;
pub mod payment;
pub mod schedule;
