//! Recurring ownership costs: mortgage repayment combined with periodic
//! property fees.

pub mod recurring_costs;
