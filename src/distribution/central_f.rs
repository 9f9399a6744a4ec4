use crate::distribution::error::FDistErr;
use crate::error::PwrcomputeErr;
use statrs::function::beta::beta_reg;

// statrs provides the F CDF but its default inverse_cdf is a coarse
// fixed-step search; the quantile is inverted here instead
/// Bisection steps when inverting the CDF; drives the bracket on the beta
/// scale down to f64 resolution
const QUANTILE_ITERS: usize = 200;

/// Upper-tail quantile of the central F distribution: returns the value
/// exceeded with probability sig_level under F with (u, v) degrees of
/// freedom.
///
/// Inverts the incomplete beta representation of the F CDF,
///
///   P(F <= x) = I_y(u/2, v/2),  y = u x / (u x + v),
///
/// by bisection on y in (0, 1), then maps back to the F scale.
pub fn f_upper_quantile(sig_level: f64, u: f64, v: f64) -> Result<f64, PwrcomputeErr> {
    if !u.is_finite() || !v.is_finite() || u <= 0. || v <= 0. {
        return Err(FDistErr::BadDegreesOfFreedom(u, v).into());
    }
    if !sig_level.is_finite() || sig_level <= 0. || sig_level >= 1. {
        return Err(FDistErr::QuantileOutOfBounds(sig_level).into());
    }

    let target = 1. - sig_level;
    let a = u / 2.;
    let b = v / 2.;
    let mut lower = 0.;
    let mut upper = 1.;
    for _ in 0..QUANTILE_ITERS {
        let mid = (lower + upper) / 2.;
        if beta_reg(a, b, mid) < target {
            lower = mid;
        } else {
            upper = mid;
        }
    }
    let y = (lower + upper) / 2.;
    Ok(v * y / (u * (1. - y)))
}
