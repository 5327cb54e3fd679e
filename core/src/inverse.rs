//! Arcsine and arccosine by binary search over the monotonic table.

use crate::table::{QuarterWave, SIN_TABLE_16, TABLE_LEN};

/// Arcsine in degrees for `f` in `[-1, 1]`, from the 16-bit table.
#[inline]
pub fn iasin(f: f32) -> f32 {
    iasin_in(&SIN_TABLE_16, f)
}

/// Arccosine in degrees for `f` in `[-1, 1]`, from the 16-bit table.
#[inline]
pub fn iacos(f: f32) -> f32 {
    iacos_in(&SIN_TABLE_16, f)
}

/// Arcsine in degrees from any quarter-wave table.
///
/// Inputs outside `[-1, 1]` are not checked; the result is whatever the
/// search and interpolation produce for a saturated input. On the 8-bit
/// table several degrees near 90 share a value; an exact hit returns the
/// highest of them, so `iasin(1.0)` is 90 for every table.
pub fn iasin_in<T: QuarterWave>(table: &T, f: f32) -> f32 {
    if f.is_nan() {
        return f32::NAN;
    }

    let negative = f < 0.0;
    let value = (f.abs() * T::MAX_SCALE as f32).round() as u16;

    let signed = |degree: f32| if negative { -degree } else { degree };

    let mut lo = 0;
    let mut hi = TABLE_LEN - 1;
    while hi - lo > 1 {
        let mid = (lo + hi) / 2;
        let entry = table.at(mid);
        if entry == value {
            let mut top = mid;
            while top < TABLE_LEN - 1 && table.at(top + 1) == value {
                top += 1;
            }
            return signed(top as f32);
        }
        if entry < value {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    let delta = (value - table.at(lo)) as f32;
    let range = (table.at(hi) - table.at(lo)) as f32;
    signed(lo as f32 + delta / range)
}

/// Arccosine as `90 - asin(f)`, in `[0, 180]` degrees.
pub fn iacos_in<T: QuarterWave>(table: &T, f: f32) -> f32 {
    90.0 - iasin_in(table, f)
}
