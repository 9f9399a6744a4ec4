//----------------------------------------
// Root lib
//----------------------------------------
//! The purpose of this library is to provide utility functions for power
//! analysis of F tests: computing the power of a test from its degrees of
//! freedom, effect size, and significance level, or solving for whichever
//! one of those quantities is unknown given the others.

/// This module houses the public API for computing power and resolving
/// unset power-analysis parameters
pub mod compute;
mod distribution;
/// This module contains error types
pub mod error;
mod numeric;
mod power;
