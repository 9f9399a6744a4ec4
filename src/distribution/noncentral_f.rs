use crate::distribution::error::FDistErr;
use crate::error::PwrcomputeErr;
use statrs::function::beta::beta_reg;
use statrs::function::gamma::ln_gamma;

/// Truncation threshold for the Poisson mixture series
const SERIES_EPS: f64 = 1e-14;
/// Failsafe on the number of series terms in either direction
const MAX_SERIES_TERMS: usize = 500_000;

/// CDF of the noncentral F distribution with (u, v) degrees of freedom and
/// noncentrality parameter ncp, evaluated at x.
///
/// Uses the Poisson mixture form of the noncentral beta CDF,
///
///   P(F' <= x) = sum_j pois(j; ncp / 2) * I_y(u/2 + j, v/2),
///
/// with y = u x / (u x + v), summed outward from the modal Poisson index so
/// the dominant terms accumulate first. The Poisson weight and the
/// incomplete beta value are carried between terms by one-step recurrences;
/// only the starting term is computed from log-gamma directly.
pub fn noncentral_f_cdf(x: f64, u: f64, v: f64, ncp: f64) -> Result<f64, PwrcomputeErr> {
    if !u.is_finite() || !v.is_finite() || u <= 0. || v <= 0. {
        return Err(FDistErr::BadDegreesOfFreedom(u, v).into());
    }
    if !ncp.is_finite() || ncp < 0. {
        return Err(FDistErr::BadNoncentrality(ncp).into());
    }
    if !x.is_finite() {
        return Err(FDistErr::NonFiniteArgument(x).into());
    }
    if x <= 0. {
        return Ok(0.);
    }

    let a = u / 2.;
    let b = v / 2.;
    let c = ncp / 2.;
    let y = u * x / (u * x + v);
    if y <= 0. {
        return Ok(0.);
    }
    if y >= 1. {
        return Ok(1.);
    }
    if c == 0. {
        return Ok(beta_reg(a, b, y));
    }

    // Starting point: Poisson weight, incomplete beta, and beta increment
    // at the modal index m. The increment t_j satisfies
    //   I_y(a + j + 1, b) = I_y(a + j, b) - t_j,
    //   t_j = y^(a+j) (1-y)^b Gamma(a+b+j) / (Gamma(a+j+1) Gamma(b))
    let m = c.floor();
    let ln_p_m = -c + if m > 0. { m * c.ln() } else { 0. } - ln_gamma(m + 1.);
    let p_m = ln_p_m.exp();
    let i_m = beta_reg(a + m, b, y);
    let ln_t_m = ln_gamma(a + b + m) - ln_gamma(a + m + 1.) - ln_gamma(b)
        + (a + m) * y.ln()
        + b * (1. - y).ln();
    let t_m = ln_t_m.exp();

    let mut total = p_m * i_m;

    // Sum upward from the mode. The incomplete beta values shrink toward
    // zero as j grows, so p * i bounds each remaining term.
    let mut p = p_m;
    let mut i = i_m;
    let mut t = t_m;
    let mut j = m;
    let mut terms = 0;
    loop {
        i = (i - t).max(0.);
        t *= y * (a + b + j) / (a + j + 1.);
        p *= c / (j + 1.);
        j += 1.;
        total += p * i;
        if p * i < SERIES_EPS {
            break;
        }
        terms += 1;
        if terms > MAX_SERIES_TERMS {
            return Err(FDistErr::SeriesFailedToConverge(terms).into());
        }
    }

    // Sum downward from the mode to j = 0. Poisson weights decay moving
    // away from the mode and the beta values are bounded by one, so the
    // weight alone bounds each remaining term.
    let mut p = p_m;
    let mut i = i_m;
    let mut t = t_m;
    let mut j = m;
    terms = 0;
    while j >= 1. {
        t *= (a + j) / (y * (a + b + j - 1.));
        i = (i + t).min(1.);
        p *= j / c;
        j -= 1.;
        total += p * i;
        if p < SERIES_EPS {
            break;
        }
        terms += 1;
        if terms > MAX_SERIES_TERMS {
            return Err(FDistErr::SeriesFailedToConverge(terms).into());
        }
    }

    Ok(total.clamp(0., 1.))
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn zero_noncentrality_matches_central() {
        // ncp = 0 reduces to the central F CDF
        let cdf = noncentral_f_cdf(3.0, 1., 30., 0.).expect("failed to compute noncentral F CDF");
        assert!((cdf - 0.9064635).abs() < 1e-6);
    }

    #[test]
    fn noncentral_cdf_value_1() {
        let cdf = noncentral_f_cdf(2.0, 3., 76., 8.).expect("failed to compute noncentral F CDF");
        assert!((cdf - 0.2233730985876728).abs() < 1e-8);
    }

    #[test]
    fn noncentral_cdf_value_2() {
        let cdf = noncentral_f_cdf(1.5, 2., 10., 5.).expect("failed to compute noncentral F CDF");
        assert!((cdf - 0.2234470571721236).abs() < 1e-8);
    }

    #[test]
    fn large_noncentrality_left_tail() {
        // ncp = 500 pushes essentially all mass far to the right of 1.2
        let cdf =
            noncentral_f_cdf(1.2, 4., 1000., 500.).expect("failed to compute noncentral F CDF");
        assert!(cdf < 1e-12);
    }

    #[test]
    fn cdf_monotone_in_x() {
        let cdf_1 = noncentral_f_cdf(1.0, 3., 76., 8.).expect("failed to compute noncentral F CDF");
        let cdf_2 = noncentral_f_cdf(2.0, 3., 76., 8.).expect("failed to compute noncentral F CDF");
        let cdf_3 = noncentral_f_cdf(3.0, 3., 76., 8.).expect("failed to compute noncentral F CDF");
        assert!(cdf_1 < cdf_2);
        assert!(cdf_2 < cdf_3);
    }

    #[test]
    fn nonpositive_x_is_zero() {
        let cdf = noncentral_f_cdf(0., 3., 76., 8.).expect("failed to compute noncentral F CDF");
        assert_eq!(cdf, 0.);
        let cdf = noncentral_f_cdf(-1., 3., 76., 8.).expect("failed to compute noncentral F CDF");
        assert_eq!(cdf, 0.);
    }

    #[test]
    fn bad_arguments_err() {
        assert!(noncentral_f_cdf(2.0, 0., 76., 8.).is_err());
        assert!(noncentral_f_cdf(2.0, 3., 76., -1.).is_err());
        assert!(noncentral_f_cdf(f64::NAN, 3., 76., 8.).is_err());
        assert!(noncentral_f_cdf(2.0, 3., f64::INFINITY, 8.).is_err());
    }
}
