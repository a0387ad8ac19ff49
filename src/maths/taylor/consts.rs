//! ln(2) and ln(3).
//!
//! The engine uses the literals. The root-series functions rebuild the same
//! values at run time from `ln(b) = 16 * ln(b^(1/16))`, where `b^(1/16) - 1`
//! is small enough (0.044 for 2, 0.071 for 3) for the series to settle in a
//! handful of terms.

use super::{ln_1p_series, sqrt};

pub const LN2: f64 = 0.693_147_180_559_945_309_417_232_121_458_176_568;
pub const LN3: f64 = 1.098_612_288_668_109_691_395_245_236_922_525_704;

/// Default term count of the runtime constant series.
pub const ROOT_SERIES_TERMS: u32 = 1_000_000;

/// `16 * ln(base^(1/16))` through the alternating series, with the 16th root
/// taken as four square roots.
pub fn ln_by_root_series(base: f64, terms: u32) -> f64 {
    let mut root = base;
    for _ in 0..4 {
        root = sqrt(root);
    }
    16.0 * ln_1p_series(root - 1.0, terms)
}

#[inline]
pub fn ln2_by_taylor_series(terms: u32) -> f64 {
    ln_by_root_series(2.0, terms)
}

#[inline]
pub fn ln3_by_taylor_series(terms: u32) -> f64 {
    ln_by_root_series(3.0, terms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literals_match_reference() {
        assert_eq!(LN2, core::f64::consts::LN_2);
        assert!((LN3 - 3.0f64.ln()).abs() <= f64::EPSILON);
    }

    #[test]
    fn test_runtime_constants_agree_with_literals() {
        let ln2 = ln2_by_taylor_series(ROOT_SERIES_TERMS);
        let ln3 = ln3_by_taylor_series(ROOT_SERIES_TERMS);
        assert!((ln2 - LN2).abs() < 1e-14, "ln2 series drifted: {ln2}");
        assert!((ln3 - LN3).abs() < 1e-14, "ln3 series drifted: {ln3}");
    }

    #[test]
    fn test_few_terms_already_close() {
        // A dozen terms already reach double precision.
        let short = ln2_by_taylor_series(12);
        let long = ln2_by_taylor_series(ROOT_SERIES_TERMS);
        assert!((short - long).abs() < 1e-15);
    }
}
