//----------------------------------------
// Crate error type
//----------------------------------------
use crate::distribution::error::*;
use crate::numeric::error::*;
use crate::power::error::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PwrcomputeErr {
    #[error("while evaluating F distribution: {0}")]
    FDist(FDistErr),
    #[error("while root finding: {0}")]
    RootFind(RootFindErr),
    #[error("while resolving power analysis: {0}")]
    PowerSolve(PowerSolveErr),
}
