//----------------------------------------
// compute mod types
//----------------------------------------

pub use crate::power::types::PowerAnalysis;
