use bon::Builder;
use std::fmt;

use crate::{
    atan::{self, Formula},
    direct, inverse,
    error::{Error, Result},
    table::{Precision, SIN_TABLE_16, SIN_TABLE_8},
};

#[derive(Debug, Clone, Builder)]
pub struct Config {
    #[builder(default)]
    pub precision: Precision,

    #[builder(default)]
    pub atan_formula: Formula,

    #[builder(default = num_cpus::get())]
    pub num_threads: usize,

    /// Distance between sample points of an accuracy sweep, in degrees.
    #[builder(default = 0.01)]
    pub sweep_step: f32,
}

impl Default for Config {
    fn default() -> Self {
        Config::builder().build()
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ precision: {}, atan_formula: {}, num_threads: {}, sweep_step: {} }}",
            self.precision, self.atan_formula, self.num_threads, self.sweep_step,
        )
    }
}

impl Config {
    /// Finest accepted sweep step, 1/4096 degree.
    pub const MIN_SWEEP_STEP: f32 = 1.0 / 4096.0;

    pub fn validate(&self) -> Result<()> {
        if !self.sweep_step.is_finite() || self.sweep_step < Self::MIN_SWEEP_STEP {
            return Err(Error::InvalidSweepStep(self.sweep_step));
        }

        if self.num_threads > num_cpus::get() {
            return Err(Error::InvalidThreadCount(num_cpus::get()));
        }

        Ok(())
    }

    pub fn validated(config: Self) -> Result<Self> {
        config.validate()?;
        Ok(config)
    }

    pub fn isin(&self, f: f32) -> f32 {
        match self.precision {
            Precision::Low => direct::isin_in(&SIN_TABLE_8, f),
            Precision::High => direct::isin_in(&SIN_TABLE_16, f),
        }
    }

    pub fn icos(&self, f: f32) -> f32 {
        match self.precision {
            Precision::Low => direct::icos_in(&SIN_TABLE_8, f),
            Precision::High => direct::icos_in(&SIN_TABLE_16, f),
        }
    }

    pub fn itan(&self, f: f32) -> f32 {
        match self.precision {
            Precision::Low => direct::itan_in(&SIN_TABLE_8, f),
            Precision::High => direct::itan_in(&SIN_TABLE_16, f),
        }
    }

    pub fn icot(&self, f: f32) -> f32 {
        match self.precision {
            Precision::Low => direct::icot_in(&SIN_TABLE_8, f),
            Precision::High => direct::icot_in(&SIN_TABLE_16, f),
        }
    }

    pub fn iasin(&self, f: f32) -> f32 {
        match self.precision {
            Precision::Low => inverse::iasin_in(&SIN_TABLE_8, f),
            Precision::High => inverse::iasin_in(&SIN_TABLE_16, f),
        }
    }

    pub fn iacos(&self, f: f32) -> f32 {
        match self.precision {
            Precision::Low => inverse::iacos_in(&SIN_TABLE_8, f),
            Precision::High => inverse::iacos_in(&SIN_TABLE_16, f),
        }
    }

    /// Arctangent of any real; does not depend on the table precision.
    pub fn iatan(&self, f: f32) -> f32 {
        atan::iatan_with(f, self.atan_formula)
    }

    pub fn atan2(&self, y: f32, x: f32) -> f32 {
        atan::atan2_fast_with(y, x, self.atan_formula)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let config = Config::builder().build();
        assert_eq!(config.precision, Precision::High);
        assert_eq!(config.atan_formula, Formula::Cubic);
        assert_eq!(config.num_threads, num_cpus::get());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_bad_step_and_threads() {
        let config = Config::builder().sweep_step(0.0).build();
        assert!(matches!(config.validate(), Err(Error::InvalidSweepStep(_))));

        let config = Config::builder().sweep_step(f32::NAN).build();
        assert!(Config::validated(config).is_err());

        let config = Config::builder().sweep_step(1e-9).build();
        assert!(matches!(config.validate(), Err(Error::InvalidSweepStep(_))));

        let config = Config::builder().sweep_step(Config::MIN_SWEEP_STEP).build();
        assert!(config.validate().is_ok());

        let config = Config::builder().num_threads(num_cpus::get() + 1).build();
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidThreadCount(_))
        ));
    }

    #[test]
    fn precision_selects_table() {
        let low = Config::builder().precision(Precision::Low).build();
        let high = Config::default();
        assert!((low.isin(30.0) - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(high.isin(30.0), direct::isin(30.0));
        assert_eq!(high.iasin(0.5), inverse::iasin(0.5));
        assert!(low.itan(90.0).is_nan());
    }
}
