//! Natural logarithm by range reduction and an alternating Taylor series.
//!
//! The input is split into its binary exponent and a significand in [1, 2)
//! straight from the IEEE-754 bit pattern. The significand is scaled next to
//! 1, optionally pulled closer with a few square roots, and fed to the series
//! for ln(1 + u). The exponent and the scale are added back through the ln(2)
//! and ln(3) constants.

#![allow(clippy::excessive_precision)]
#![allow(clippy::unusual_byte_groupings)]

mod consts;
mod ln;
mod log_base;
mod reduction;
mod series;
mod sqrt;

pub use consts::{
    LN2, LN3, ROOT_SERIES_TERMS, ln_by_root_series, ln2_by_taylor_series, ln3_by_taylor_series,
};
pub use ln::{DEFAULT_SERIES, TaylorLn, ln, ln_series};
pub use log_base::log;
pub use reduction::{DEFAULT_ROOT_DEPTH, MAX_ROOT_DEPTH, Reduction, Variant};
pub use series::ln_1p_series;
pub use sqrt::sqrt;

// ========= bit helpers =========

pub(crate) const EXP_BIAS: i32 = 1023;
pub(crate) const MANTISSA_MASK: u64 = 0x000f_ffff_ffff_ffff;
/// Exponent field of 1.0 with an empty mantissa.
pub(crate) const ONE_BITS: u64 = 0x3ff0_0000_0000_0000;
pub(crate) const TWO54: f64 = f64::from_bits(0x4350_0000_0000_0000);

#[inline(always)]
fn f64_from_bits(u: u64) -> f64 {
    f64::from_bits(u)
}

#[inline(always)]
fn f64_to_bits(x: f64) -> u64 {
    x.to_bits()
}

#[inline(always)]
fn get_exp_bits(u: u64) -> i32 {
    ((u >> 52) & 0x7ff) as i32
}

/// 2^n for small non-negative n, built directly from the exponent field.
#[inline(always)]
fn pow2(n: u32) -> f64 {
    f64_from_bits(((EXP_BIAS as u64) + n as u64) << 52)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pow2_matches_shifted_integer() {
        for n in 0..=MAX_ROOT_DEPTH {
            assert_eq!(pow2(n), (1u64 << n) as f64);
        }
    }

    #[test]
    fn exponent_field_of_one() {
        assert_eq!(f64_from_bits(ONE_BITS), 1.0);
        assert_eq!(get_exp_bits(f64_to_bits(1.0)), EXP_BIAS);
        assert_eq!(get_exp_bits(f64_to_bits(TWO54)), EXP_BIAS + 54);
    }
}
