//----------------------------------------
// compute mod
//----------------------------------------
pub mod types;

pub use crate::distribution::central_f::f_upper_quantile;
pub use crate::distribution::noncentral_f::noncentral_f_cdf;
pub use crate::power::power_f2::power_f2;
pub use crate::power::solve::pwr_f2_test;
