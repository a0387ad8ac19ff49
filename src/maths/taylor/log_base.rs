use super::TaylorLn;
use crate::DomainError;

impl TaylorLn {
    /// Logarithm of `x` in `base`, as `ln(x) / ln(base)` with this engine.
    ///
    /// A base of exactly 1 fails with [`DomainError::UnitBase`] before either
    /// logarithm is taken; otherwise both arguments go through [`TaylorLn::ln`].
    pub fn log(&self, base: f64, x: f64) -> Result<f64, DomainError> {
        if base == 1.0 {
            ::log::debug!("log rejected unit base");
            return Err(DomainError::UnitBase);
        }
        Ok(self.ln(x)? / self.ln(base)?)
    }
}

/// Logarithm of `x` in `base` with the default engine.
#[inline]
pub fn log(base: f64, x: f64) -> Result<f64, DomainError> {
    TaylorLn::DEFAULT.log(base, x)
}
