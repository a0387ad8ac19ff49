/// Partial sum of the alternating series `ln(1 + u) = u - u^2/2 + u^3/3 - ...`
/// over its first `terms` terms.
///
/// Converges for `-1 < u <= 1`, and only usefully for `|u|` well below 1.
/// Stops early once `u^i` underflows to zero, so very large `terms` cost
/// nothing beyond the point where they stop contributing.
#[inline]
pub fn ln_1p_series(u: f64, terms: u32) -> f64 {
    let mut sum = 0.0;
    let mut power = 1.0;
    for i in 1..=terms {
        power *= u;
        if power == 0.0 {
            break;
        }
        let term = power / i as f64;
        if i & 1 == 1 {
            sum += term;
        } else {
            sum -= term;
        }
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_terms_is_empty_sum() {
        assert_eq!(ln_1p_series(0.3, 0), 0.0);
    }

    #[test]
    fn test_leading_terms() {
        let u = 0.25;
        assert_eq!(ln_1p_series(u, 1), u);
        assert_eq!(ln_1p_series(u, 2), u - u * u / 2.0);
        assert_eq!(ln_1p_series(u, 3), u - u * u / 2.0 + u * u * u / 3.0);
    }

    #[test]
    fn test_sign_starts_positive_for_negative_u() {
        // ln(1 + u) < 0 for u < 0, every term is negative.
        let u = -0.1;
        let mut prev = 0.0;
        for terms in 1..8 {
            let s = ln_1p_series(u, terms);
            assert!(s < prev, "partial sum {terms} did not decrease");
            prev = s;
        }
    }

    #[test]
    fn test_converges_to_ln_1p() {
        for &u in &[-0.3, -0.05, 0.01, 0.1, 0.3] {
            let actual = ln_1p_series(u, 60);
            let expected = (1.0f64 + u).ln();
            assert!(
                (actual - expected).abs() < 1e-15,
                "ln_1p_series({u}) failed: got {actual}, expected {expected}"
            );
        }
    }

    #[test]
    fn test_underflow_exit() {
        // A million terms of a tiny argument must equal the short sum.
        let u = 1e-3;
        assert_eq!(ln_1p_series(u, 1_000_000), ln_1p_series(u, 200));
    }
}
