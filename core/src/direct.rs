//! Sine, cosine, tangent and cotangent in degrees.

use crate::reduce::reduce;
use crate::table::{QuarterWave, SIN_TABLE_16};

/// Sine of `f` degrees from the 16-bit table. Always in `[-1, 1]`.
#[inline]
pub fn isin(f: f32) -> f32 {
    isin_in(&SIN_TABLE_16, f)
}

/// Cosine of `f` degrees from the 16-bit table. Always in `[-1, 1]`.
#[inline]
pub fn icos(f: f32) -> f32 {
    icos_in(&SIN_TABLE_16, f)
}

/// Tangent of `f` degrees from the 16-bit table, NaN at 90° + k·180°.
#[inline]
pub fn itan(f: f32) -> f32 {
    itan_in(&SIN_TABLE_16, f)
}

/// Cotangent of `f` degrees from the 16-bit table, NaN where the tangent is 0.
#[inline]
pub fn icot(f: f32) -> f32 {
    icot_in(&SIN_TABLE_16, f)
}

/// Sine of `f` degrees from any quarter-wave table.
///
/// Non-finite input yields NaN.
pub fn isin_in<T: QuarterWave>(table: &T, f: f32) -> f32 {
    if !f.is_finite() {
        return f32::NAN;
    }

    let angle = reduce(f);
    let value = table.interpolate(angle.degree as usize, angle.remainder);
    let g = value as f32 * T::INV_SCALE;
    if angle.negative {
        -g
    } else {
        g
    }
}

/// Cosine as `sin(f - 270)`, which lands in the same residue as `f + 90`.
///
/// Whole turns are dropped first, otherwise the shift is lost to rounding
/// for large `f`.
pub fn icos_in<T: QuarterWave>(table: &T, f: f32) -> f32 {
    isin_in(table, f % 360.0 - 270.0)
}

/// Tangent of `f` degrees from any quarter-wave table.
///
/// Sine and cosine are both read from the folded table region, so they share
/// one rounding path instead of going through [`isin_in`] / [`icos_in`].
pub fn itan_in<T: QuarterWave>(table: &T, f: f32) -> f32 {
    if !f.is_finite() {
        return f32::NAN;
    }

    let mut negative = f < 0.0;
    // tan has a period of 180
    let f = f.abs() % 180.0;
    let folded = f as usize;
    let remain = f - folded as f32;

    let mirror = folded > 90 || (folded == 90 && remain > 0.0);
    let degree = if !mirror {
        folded
    } else {
        negative = !negative;
        if remain > 0.0 {
            179 - folded
        } else {
            180 - folded
        }
    };
    if degree == 90 {
        return f32::NAN;
    }

    let at = |i: usize| table.at(i) as f32;

    // cos first
    let p = 90 - degree;
    let mut co = at(p);
    if remain > 0.0 {
        let delta = at(p) - at(p - 1);
        co = if mirror {
            at(p - 1) + remain * delta
        } else {
            at(p) - remain * delta
        };
    } else if co == 0.0 {
        return 0.0;
    }

    let mut si = at(degree);
    if remain > 0.0 {
        let frac = if mirror { 1.0 - remain } else { remain };
        si += frac * (at(degree + 1) - at(degree));
    }

    let ta = si / co;
    if negative {
        -ta
    } else {
        ta
    }
}

/// Cotangent as `1 / tan(f)`; NaN at multiples of 180° and wherever
/// [`itan_in`] is NaN.
pub fn icot_in<T: QuarterWave>(table: &T, f: f32) -> f32 {
    let ta = itan_in(table, f);
    if ta == 0.0 {
        return f32::NAN;
    }
    1.0 / ta
}
