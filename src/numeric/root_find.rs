use crate::error::PwrcomputeErr;
use crate::numeric::error::RootFindErr;

/// Iteration failsafe; bisection halves the interval each step, so any
/// realistic tolerance is reached long before this
const MAX_ITER: usize = 200;

/// Given a function f with opposite signs at the two endpoints of
/// [lower_bound, upper_bound], finds x in the interval with f(x) = 0
/// to within tol by bisection. The function need not be increasing;
/// only the sign change matters.
pub fn root_find_bracketed<F>(
    f: F,
    lower_bound: f64,
    upper_bound: f64,
    tol: f64,
) -> Result<f64, PwrcomputeErr>
where
    F: Fn(f64) -> Result<f64, PwrcomputeErr>,
{
    let f_lower = f(lower_bound)?;
    if f_lower == 0. {
        return Ok(lower_bound);
    }
    let f_upper = f(upper_bound)?;
    if f_upper == 0. {
        return Ok(upper_bound);
    }
    if f_lower.signum() == f_upper.signum() {
        return Err(RootFindErr::NoSignChange {
            lower: lower_bound,
            upper: upper_bound,
            f_lower,
            f_upper,
        }
        .into());
    }

    // Perform search
    let mut lower_bound = lower_bound;
    let mut upper_bound = upper_bound;
    let mut f_lower = f_lower;
    for _ in 0..MAX_ITER {
        let x = (lower_bound + upper_bound) / 2.;
        let y = f(x)?;
        if y == 0. || (upper_bound - lower_bound).abs() < tol {
            return Ok(x);
        }
        if y.signum() == f_lower.signum() {
            lower_bound = x;
            f_lower = y;
        } else {
            upper_bound = x;
        }
    }
    Err(RootFindErr::FailedToConverge {
        max_iter: MAX_ITER,
        lower: lower_bound,
        upper: upper_bound,
    }
    .into())
}
