use super::{EXP_BIAS, TWO54, f64_from_bits, f64_to_bits, get_exp_bits};

#[inline]
fn next_up(x: f64) -> f64 {
    f64_from_bits(f64_to_bits(x) + 1)
}

#[inline]
fn next_down(x: f64) -> f64 {
    f64_from_bits(f64_to_bits(x) - 1)
}

/// Square root for `no_std` builds.
///
/// Newton iterations from a bit-halved seed, then a one-ulp nudge so that the
/// square of the result brackets `x`. Negative input and NaN give NaN.
#[inline]
pub fn sqrt(x: f64) -> f64 {
    if x.is_nan() || x < 0.0 {
        return f64::NAN;
    }
    if x == 0.0 || x.is_infinite() {
        return x;
    }

    let mut ax = x;
    let mut ux = f64_to_bits(ax);
    let mut half_shift = 0;
    if get_exp_bits(ux) == 0 {
        // Normalize subnormals.
        ax *= TWO54;
        ux = f64_to_bits(ax);
        half_shift = 27;
    }

    let mut y = f64_from_bits((ux >> 1) + 0x1ff8_0000_0000_0000);
    for _ in 0..6 {
        y = 0.5 * (y + ax / y);
    }
    if half_shift != 0 {
        y *= f64_from_bits(((EXP_BIAS - half_shift) as u64) << 52);
    }

    let y2 = y * y;
    if y2 < x {
        let y_next = next_up(y);
        if y_next * y_next <= x {
            y = y_next;
        }
    } else if y2 > x {
        let y_prev = next_down(y);
        if y_prev * y_prev >= x {
            y = y_prev;
        }
    }

    y
}
