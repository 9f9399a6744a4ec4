//----------------------------------------
// power mod types
//----------------------------------------
use std::fmt;

/// A fully resolved set of F-test power analysis quantities
#[derive(Debug, Clone, Copy)]
pub struct PowerAnalysis {
    pub u: f64,
    pub v: f64,
    pub f2: f64,
    pub sig_level: f64,
    pub power: f64,
}

impl PowerAnalysis {
    /// Number of observations implied by the degrees of freedom,
    /// ceil(u) + ceil(v) + 1
    pub fn num_obs(&self) -> usize {
        self.u.ceil() as usize + self.v.ceil() as usize + 1
    }
}

impl fmt::Display for PowerAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Power analysis results:")?;
        writeln!(f, " u is: {}", self.u)?;
        writeln!(f, " v is: {}", self.v)?;
        writeln!(f, " f2 is: {}", self.f2)?;
        writeln!(f, " sig_level is: {}", self.sig_level)?;
        writeln!(f, " power is: {}", self.power)?;
        write!(f, " num_obs is: {}", self.num_obs())
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn num_obs_rounds_up() {
        let pa = PowerAnalysis {
            u: 3.,
            v: 76.,
            f2: 0.1,
            sig_level: 0.05,
            power: 0.63,
        };
        assert_eq!(pa.num_obs(), 80);

        let pa = PowerAnalysis {
            u: 2.2,
            v: 108.4,
            f2: 0.1,
            sig_level: 0.05,
            power: 0.8,
        };
        assert_eq!(pa.num_obs(), 3 + 109 + 1);
    }

    #[test]
    fn display_report() {
        let pa = PowerAnalysis {
            u: 3.,
            v: 76.,
            f2: 0.1,
            sig_level: 0.05,
            power: 0.25,
        };
        let report = format!("{}", pa);
        assert_eq!(
            report,
            "Power analysis results:\n u is: 3\n v is: 76\n f2 is: 0.1\n \
            sig_level is: 0.05\n power is: 0.25\n num_obs is: 80"
        );
    }
}
