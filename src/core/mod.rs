//! Core cost-item model, validation and the calculation engine.
//!
//! All monetary values are [`rust_decimal::Decimal`]; every externally
//! observable total is rounded to 2 decimal places via [`round_currency`].

mod builder;
mod calc;
mod error;
mod types;
mod validation;

pub use builder::*;
pub use calc::*;
pub use error::*;
pub use types::*;
pub use validation::*;
