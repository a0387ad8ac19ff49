use core::f64::consts::FRAC_1_SQRT_2;

use super::{
    EXP_BIAS, LN2, LN3, MANTISSA_MASK, ONE_BITS, TWO54, f64_from_bits, f64_to_bits, get_exp_bits,
    ln_1p_series, pow2, sqrt,
};

/// Square roots taken by the presets, so the series sees `m'^(1/16)`.
pub const DEFAULT_ROOT_DEPTH: u32 = 4;
/// Deeper roots only trade series terms for `sqrt` rounding noise.
pub const MAX_ROOT_DEPTH: u32 = 8;

/// How a significand in [1, 2) is brought next to 1 before the series runs.
///
/// The significand is multiplied by `scale`, then square-rooted `root_depth`
/// times. The series sum is scaled back by `2^root_depth` and `correction`,
/// which must equal `ln(1 / scale)`, is added.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reduction {
    scale: f64,
    correction: f64,
    root_depth: u32,
}

impl Reduction {
    /// `m * 2/3` lands in [2/3, 4/3).
    pub const TWO_THIRDS: Self = Self::new(2.0 / 3.0, LN3 - LN2, DEFAULT_ROOT_DEPTH);
    /// `m * √2/2` lands in [√2/2, √2).
    pub const FRAC_SQRT2: Self = Self::new(FRAC_1_SQRT_2, LN2 / 2.0, DEFAULT_ROOT_DEPTH);

    /// `root_depth` is clamped to [`MAX_ROOT_DEPTH`].
    pub const fn new(scale: f64, correction: f64, root_depth: u32) -> Self {
        Self {
            scale,
            correction,
            root_depth: clamp_depth(root_depth),
        }
    }

    /// Same scale and correction with a different number of square roots.
    /// Zero runs the series directly on the scaled significand.
    pub const fn with_root_depth(self, root_depth: u32) -> Self {
        Self::new(self.scale, self.correction, root_depth)
    }

    pub const fn scale(&self) -> f64 {
        self.scale
    }

    pub const fn correction(&self) -> f64 {
        self.correction
    }

    pub const fn root_depth(&self) -> u32 {
        self.root_depth
    }

    /// ln(m) for a significand `m` in [1, 2), from `terms` series terms.
    #[inline]
    pub(crate) fn ln_significand(&self, m: f64, terms: u32) -> f64 {
        let mut r = m * self.scale;
        for _ in 0..self.root_depth {
            r = sqrt(r);
        }
        pow2(self.root_depth) * ln_1p_series(r - 1.0, terms) + self.correction
    }
}

impl Default for Reduction {
    fn default() -> Self {
        Self::TWO_THIRDS
    }
}

const fn clamp_depth(depth: u32) -> u32 {
    if depth > MAX_ROOT_DEPTH {
        MAX_ROOT_DEPTH
    } else {
        depth
    }
}

/// The two scale factors the engine ships with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    /// Scale by 2/3, correct by ln(3) - ln(2).
    #[default]
    TwoThirds,
    /// Scale by √2/2, correct by ln(2)/2.
    FracSqrt2,
}

impl Variant {
    pub const fn reduction(self) -> Reduction {
        match self {
            Variant::TwoThirds => Reduction::TWO_THIRDS,
            Variant::FracSqrt2 => Reduction::FRAC_SQRT2,
        }
    }
}

impl From<Variant> for Reduction {
    fn from(variant: Variant) -> Self {
        variant.reduction()
    }
}

/// Splits a positive finite `x` into `(k, m)` with `x = 2^k * m` and `m` in
/// [1, 2). The exponent field of `x` is overwritten with that of 1.0 while the
/// mantissa bits are kept; subnormals are lifted by 2^54 first.
#[inline]
pub(crate) fn split_exponent(x: f64) -> (i32, f64) {
    let mut ux = f64_to_bits(x);
    let mut k = get_exp_bits(ux) - EXP_BIAS;
    if get_exp_bits(ux) == 0 {
        ux = f64_to_bits(x * TWO54);
        k = get_exp_bits(ux) - EXP_BIAS - 54;
    }
    let m = f64_from_bits((ux & MANTISSA_MASK) | ONE_BITS);
    (k, m)
}
