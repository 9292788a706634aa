pub mod error;
pub mod types;

#[cfg(feature = "mortgage")]
pub mod mortgage;

#[cfg(feature = "ownership")]
pub mod ownership;

pub use error::HomeCostError;
pub use types::*;

/// Standard result type for all homecost operations
pub type HomeCostResult<T> = Result<T, HomeCostError>;
