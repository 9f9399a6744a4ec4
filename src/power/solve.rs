use crate::error::PwrcomputeErr;
use crate::numeric::root_find::root_find_bracketed;
use crate::power::error::PowerSolveErr;
use crate::power::power_f2::power_f2;
use crate::power::types::PowerAnalysis;

// Fixed search intervals for each solvable parameter. These are generous
// empirical ranges covering realistic power-analysis inputs; they are not
// derived from the inputs at hand. A requested power that is unreachable
// inside the interval surfaces as a no-sign-change root finding error
// rather than a silently returned endpoint.
const F2_SEARCH_INTERVAL: (f64, f64) = (1e-9, 1e3);
const U_SEARCH_INTERVAL: (f64, f64) = (1. + 1e-9, 200.);
const V_SEARCH_INTERVAL: (f64, f64) = (1. + 1e-9, 1e6);
const SIG_LEVEL_SEARCH_INTERVAL: (f64, f64) = (1e-10, 0.5);

/// Absolute tolerance on the solved parameter
const SOLVE_TOL: f64 = 1e-10;

/// Resolves the single unset parameter among {u, v, f2, sig_level, power}
/// of an F-test power analysis, holding the other four fixed.
///
/// power is computed directly; any other unset parameter is found by a
/// bracketed root search over the power function. Exactly one argument
/// must be None.
pub fn pwr_f2_test(
    u: Option<f64>,
    v: Option<f64>,
    f2: Option<f64>,
    sig_level: Option<f64>,
    power: Option<f64>,
) -> Result<PowerAnalysis, PwrcomputeErr> {
    let n_unset = [u, v, f2, sig_level, power]
        .iter()
        .filter(|p| p.is_none())
        .count();
    if n_unset != 1 {
        return Err(PowerSolveErr::WrongNumberUnset(n_unset).into());
    }

    // Fixed inputs must be in domain before any search runs
    if let Some(u) = u {
        if !u.is_finite() || u <= 0. {
            return Err(PowerSolveErr::BadNumeratorDf(u).into());
        }
    }
    if let Some(v) = v {
        if !v.is_finite() || v <= 0. {
            return Err(PowerSolveErr::BadDenominatorDf(v).into());
        }
    }
    if let Some(f2) = f2 {
        if !f2.is_finite() || f2 <= 0. {
            return Err(PowerSolveErr::BadEffectSize(f2).into());
        }
    }
    if let Some(sig_level) = sig_level {
        if !sig_level.is_finite() || sig_level <= 0. || sig_level >= 1. {
            return Err(PowerSolveErr::BadSigLevel(sig_level).into());
        }
    }
    if let Some(power) = power {
        if !power.is_finite() || power <= 0. || power >= 1. {
            return Err(PowerSolveErr::BadPower(power).into());
        }
    }

    let analysis = match (u, v, f2, sig_level, power) {
        (Some(u), Some(v), Some(f2), Some(sig_level), None) => {
            let power = power_f2(u, v, f2, sig_level)?;
            PowerAnalysis {
                u,
                v,
                f2,
                sig_level,
                power,
            }
        }
        (Some(u), Some(v), None, Some(sig_level), Some(power)) => {
            let f2 = root_find_bracketed(
                |f2| Ok(power_f2(u, v, f2, sig_level)? - power),
                F2_SEARCH_INTERVAL.0,
                F2_SEARCH_INTERVAL.1,
                SOLVE_TOL,
            )?;
            PowerAnalysis {
                u,
                v,
                f2,
                sig_level,
                power,
            }
        }
        (None, Some(v), Some(f2), Some(sig_level), Some(power)) => {
            let u = root_find_bracketed(
                |u| Ok(power_f2(u, v, f2, sig_level)? - power),
                U_SEARCH_INTERVAL.0,
                U_SEARCH_INTERVAL.1,
                SOLVE_TOL,
            )?;
            PowerAnalysis {
                u,
                v,
                f2,
                sig_level,
                power,
            }
        }
        (Some(u), None, Some(f2), Some(sig_level), Some(power)) => {
            let v = root_find_bracketed(
                |v| Ok(power_f2(u, v, f2, sig_level)? - power),
                V_SEARCH_INTERVAL.0,
                V_SEARCH_INTERVAL.1,
                SOLVE_TOL,
            )?;
            PowerAnalysis {
                u,
                v,
                f2,
                sig_level,
                power,
            }
        }
        (Some(u), Some(v), Some(f2), None, Some(power)) => {
            let sig_level = root_find_bracketed(
                |sig_level| Ok(power_f2(u, v, f2, sig_level)? - power),
                SIG_LEVEL_SEARCH_INTERVAL.0,
                SIG_LEVEL_SEARCH_INTERVAL.1,
                SOLVE_TOL,
            )?;
            PowerAnalysis {
                u,
                v,
                f2,
                sig_level,
                power,
            }
        }
        // Unreachable: the unset count was checked above
        _ => return Err(PowerSolveErr::WrongNumberUnset(n_unset).into()),
    };

    Ok(analysis)
}
