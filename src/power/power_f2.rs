use crate::distribution::central_f::f_upper_quantile;
use crate::distribution::noncentral_f::noncentral_f_cdf;
use crate::error::PwrcomputeErr;
use crate::power::error::PowerSolveErr;

/// Computes the power of an F test with (u, v) degrees of freedom, effect
/// size f2 (Cohen's f^2), and significance level sig_level: the probability
/// that a noncentral F variable with noncentrality f2 * (u + v + 1) exceeds
/// the upper sig_level critical value of the central F distribution
pub fn power_f2(u: f64, v: f64, f2: f64, sig_level: f64) -> Result<f64, PwrcomputeErr> {
    if !u.is_finite() || u <= 0. {
        return Err(PowerSolveErr::BadNumeratorDf(u).into());
    }
    if !v.is_finite() || v <= 0. {
        return Err(PowerSolveErr::BadDenominatorDf(v).into());
    }
    if !f2.is_finite() || f2 <= 0. {
        return Err(PowerSolveErr::BadEffectSize(f2).into());
    }
    if !sig_level.is_finite() || sig_level <= 0. || sig_level >= 1. {
        return Err(PowerSolveErr::BadSigLevel(sig_level).into());
    }

    let f_crit = f_upper_quantile(sig_level, u, v)?;
    let ncp = f2 * (u + v + 1.);
    Ok(1. - noncentral_f_cdf(f_crit, u, v, ncp)?)
}
