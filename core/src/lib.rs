mod config;

pub mod analysis;
pub mod atan;
pub mod direct;
pub mod error;
pub mod interpolate;
pub mod inverse;
pub mod optimize;
pub mod reduce;
pub mod table;

pub use atan::{atan2_fast, atan_fast, iatan};
pub use config::Config;
pub use direct::{icos, icot, isin, itan};
pub use error::{Error, Result};
pub use inverse::{iacos, iasin};
pub use table::{Precision, QuarterWave, SIN_TABLE_16, SIN_TABLE_8, TABLE_LEN};

#[cfg(feature = "cli")]
use clap::ValueEnum;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Single-argument functions of the library, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "cli", derive(ValueEnum))]
#[strum(serialize_all = "lowercase")]
pub enum Function {
    Sin,
    Cos,
    Tan,
    Cot,
    Asin,
    Acos,
    Atan,
}

impl Function {
    pub const ALL: [Function; 7] = [
        Function::Sin,
        Function::Cos,
        Function::Tan,
        Function::Cot,
        Function::Asin,
        Function::Acos,
        Function::Atan,
    ];

    pub fn eval(self, config: &Config, x: f32) -> f32 {
        match self {
            Function::Sin => config.isin(x),
            Function::Cos => config.icos(x),
            Function::Tan => config.itan(x),
            Function::Cot => config.icot(x),
            Function::Asin => config.iasin(x),
            Function::Acos => config.iacos(x),
            Function::Atan => config.iatan(x),
        }
    }

    /// Value from the platform math library, NaN where undefined.
    pub fn reference(self, x: f64) -> f64 {
        match self {
            Function::Sin => x.to_radians().sin(),
            Function::Cos => x.to_radians().cos(),
            Function::Tan => x.to_radians().tan(),
            Function::Cot => 1.0 / x.to_radians().tan(),
            Function::Asin => x.asin().to_degrees(),
            Function::Acos => x.acos().to_degrees(),
            Function::Atan => x.atan().to_degrees(),
        }
    }

    /// Inverse functions take a ratio and return degrees.
    pub fn is_inverse(self) -> bool {
        matches!(self, Function::Asin | Function::Acos | Function::Atan)
    }
}
