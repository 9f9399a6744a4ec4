use crate::error::PwrcomputeErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RootFindErr {
    #[error(
        "no sign change across [{lower}, {upper}] \
        (f(lower) = {f_lower}, f(upper) = {f_upper}); no root in search interval"
    )]
    NoSignChange {
        lower: f64,
        upper: f64,
        f_lower: f64,
        f_upper: f64,
    },
    #[error("failed to converge within {max_iter} iterations (interval [{lower}, {upper}])")]
    FailedToConverge {
        max_iter: usize,
        lower: f64,
        upper: f64,
    },
}

impl Into<PwrcomputeErr> for RootFindErr {
    fn into(self) -> PwrcomputeErr {
        PwrcomputeErr::RootFind(self)
    }
}
