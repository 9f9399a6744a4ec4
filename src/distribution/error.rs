use crate::error::PwrcomputeErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FDistErr {
    #[error("degrees of freedom should be positive and finite; got u = {0}, v = {1}")]
    BadDegreesOfFreedom(f64, f64),
    #[error("noncentrality should be non-negative and finite; got {0}")]
    BadNoncentrality(f64),
    #[error("arguments to quantile function should be in (0, 1); got {0}")]
    QuantileOutOfBounds(f64),
    #[error("distribution evaluated at non-finite argument: {0}")]
    NonFiniteArgument(f64),
    #[error("noncentral series failed to converge within {0} terms")]
    SeriesFailedToConverge(usize),
}

impl Into<PwrcomputeErr> for FDistErr {
    fn into(self) -> PwrcomputeErr {
        PwrcomputeErr::FDist(self)
    }
}
