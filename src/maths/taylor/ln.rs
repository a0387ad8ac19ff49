use log::debug;

use super::reduction::split_exponent;
use super::{LN2, Reduction, ln_1p_series};
use crate::DomainError;

/// Series terms used when none are given.
pub const DEFAULT_SERIES: u32 = 10;

// [1 - 2^-4, 1 + 2^-4): the series runs on x - 1 directly, which is exact.
const NEAR1_MIN: f64 = 0.9375;
const NEAR1_MAX: f64 = 1.0625;

/// A configured logarithm engine: a [`Reduction`] plus a series length.
///
/// ```
/// use taylorln::{TaylorLn, Variant};
///
/// let engine = TaylorLn::new(Variant::FracSqrt2.reduction()).with_series(12);
/// let y = engine.ln(10.0).unwrap();
/// assert!((y - core::f64::consts::LN_10).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaylorLn {
    reduction: Reduction,
    series: u32,
}

impl TaylorLn {
    /// Scale by 2/3, ten series terms.
    pub const DEFAULT: Self = Self::new(Reduction::TWO_THIRDS);

    pub const fn new(reduction: Reduction) -> Self {
        Self {
            reduction,
            series: DEFAULT_SERIES,
        }
    }

    /// Number of series terms. Zero leaves only the exponent and correction
    /// contributions; this is not an error.
    pub const fn with_series(mut self, series: u32) -> Self {
        self.series = series;
        self
    }

    pub const fn with_root_depth(mut self, root_depth: u32) -> Self {
        self.reduction = self.reduction.with_root_depth(root_depth);
        self
    }

    pub const fn reduction(&self) -> Reduction {
        self.reduction
    }

    pub const fn series(&self) -> u32 {
        self.series
    }

    /// Natural logarithm of `x`.
    ///
    /// Fails with [`DomainError`] for zero, negative numbers and NaN.
    /// `ln(1)` is exactly zero and `ln(+inf)` is `+inf`.
    pub fn ln(&self, x: f64) -> Result<f64, DomainError> {
        if x.is_nan() {
            debug!("ln rejected NaN argument");
            return Err(DomainError::NotANumber);
        }
        if x <= 0.0 {
            debug!("ln rejected non-positive argument {x}");
            return Err(DomainError::NonPositive(x));
        }
        if x == 1.0 {
            return Ok(0.0);
        }
        if x.is_infinite() {
            return Ok(x);
        }

        if (NEAR1_MIN..NEAR1_MAX).contains(&x) {
            return Ok(ln_1p_series(x - 1.0, self.series));
        }

        let (k, m) = split_exponent(x);
        Ok(self.reduction.ln_significand(m, self.series) + k as f64 * LN2)
    }
}

impl Default for TaylorLn {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<Reduction> for TaylorLn {
    fn from(reduction: Reduction) -> Self {
        Self::new(reduction)
    }
}

/// Natural logarithm with the default engine.
#[inline]
pub fn ln(x: f64) -> Result<f64, DomainError> {
    TaylorLn::DEFAULT.ln(x)
}

/// Natural logarithm with the default reduction and `series` terms.
#[inline]
pub fn ln_series(x: f64, series: u32) -> Result<f64, DomainError> {
    TaylorLn::DEFAULT.with_series(series).ln(x)
}
