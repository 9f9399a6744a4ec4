use crate::error::PwrcomputeErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PowerSolveErr {
    #[error("exactly one parameter must be unset; got {0}")]
    WrongNumberUnset(usize),
    #[error("numerator df should be positive and finite; got {0}")]
    BadNumeratorDf(f64),
    #[error("denominator df should be positive and finite; got {0}")]
    BadDenominatorDf(f64),
    #[error("effect size should be positive and finite; got {0}")]
    BadEffectSize(f64),
    #[error("significance level should be in (0, 1); got {0}")]
    BadSigLevel(f64),
    #[error("power should be in (0, 1); got {0}")]
    BadPower(f64),
}

impl Into<PwrcomputeErr> for PowerSolveErr {
    fn into(self) -> PwrcomputeErr {
        PwrcomputeErr::PowerSolve(self)
    }
}
