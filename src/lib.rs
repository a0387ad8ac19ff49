//! Natural logarithm from IEEE-754 range reduction and a short Taylor series.
//!
//! ```
//! let y = taylorln::ln(2.0).unwrap();
//! assert!((y - core::f64::consts::LN_2).abs() < 1e-12);
//!
//! assert!(taylorln::ln(0.0).is_err());
//! assert!(taylorln::log(1.0, 5.0).is_err());
//! ```
#![no_std]
#![forbid(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod error;
pub mod maths;

pub use error::DomainError;
pub use maths::taylor;
pub use taylor::{DEFAULT_SERIES, Reduction, TaylorLn, Variant, ln, ln_series, log};
