use thiserror::Error;

/// Argument outside the domain of the natural logarithm.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DomainError {
    #[error("ln argument must be positive, got {0}")]
    NonPositive(f64),

    #[error("ln argument is NaN")]
    NotANumber,

    #[error("logarithm base must not be 1")]
    UnitBase,
}
