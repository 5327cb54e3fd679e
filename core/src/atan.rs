//! Polynomial arctangent in degrees.
//!
//! Both formulas approximate `atan(x)` for `x` in `[-1, 1]`; [`atan2_fast`]
//! and [`iatan`] fold everything else onto that interval.

use core::f32::consts::FRAC_PI_4;

#[cfg(feature = "cli")]
use clap::ValueEnum;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum_macros::Display;

const RAD_TO_DEG: f32 = 180.0 / core::f32::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "cli", derive(ValueEnum))]
pub enum Formula {
    /// pi/4 * x + 0.273 * x * (1 - |x|), about 0.22° max error
    Quadratic,
    #[default]
    /// pi/4 * x - x * (|x| - 1) * (0.2447 + 0.0663 * |x|), about 0.09° max error
    Cubic,
}

/// Arctangent in degrees for `f` in `[-1, 1]` with the default formula.
#[inline]
pub fn atan_fast(f: f32) -> f32 {
    atan_fast_with(f, Formula::default())
}

/// Arctangent in degrees for `f` in `[-1, 1]`.
///
/// Odd and strictly increasing on the interval, `0` at `0` and `45` at `1`.
/// Outside the interval the polynomial is evaluated as is.
#[inline]
pub fn atan_fast_with(f: f32, formula: Formula) -> f32 {
    let abs = f.abs();
    let radians = match formula {
        // Rajan et al. 2006, least squares C
        Formula::Quadratic => FRAC_PI_4 * f + 0.273 * f * (1.0 - abs),
        Formula::Cubic => FRAC_PI_4 * f - f * (abs - 1.0) * (0.2447 + 0.0663 * abs),
    };
    radians * RAD_TO_DEG
}

/// Angle of the point `(x, y)` in degrees, `(-180, 180]`.
#[inline]
pub fn atan2_fast(y: f32, x: f32) -> f32 {
    atan2_fast_with(y, x, Formula::default())
}

/// Angle of the point `(x, y)` in degrees with the given formula.
///
/// The smaller of `|x|`, `|y|` is divided by the larger so the polynomial
/// only ever sees `[0, 1]`; the result is then mirrored into the right
/// octant and quadrant. `(0, 0)` yields 0.
pub fn atan2_fast_with(y: f32, x: f32, formula: Formula) -> f32 {
    if y.is_nan() || x.is_nan() {
        return f32::NAN;
    }

    let (ay, ax) = (y.abs(), x.abs());
    if ay == 0.0 && ax == 0.0 {
        return 0.0;
    }

    let mut angle = if ay <= ax {
        atan_fast_with(ay / ax, formula)
    } else {
        90.0 - atan_fast_with(ax / ay, formula)
    };

    if x < 0.0 {
        angle = 180.0 - angle;
    }
    if y < 0.0 {
        -angle
    } else {
        angle
    }
}

/// Arctangent in degrees for any real `f`, `(-90, 90)`.
#[inline]
pub fn iatan(f: f32) -> f32 {
    iatan_with(f, Formula::default())
}

pub fn iatan_with(f: f32, formula: Formula) -> f32 {
    atan2_fast_with(f, 1.0, formula)
}
