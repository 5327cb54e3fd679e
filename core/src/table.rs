//! Quarter-wave sine tables.
//!
//! Each table holds `sin(i°)` for `i` in `0..=90`, scaled to the full range of
//! its integer type. Every other angle is recovered by folding onto this
//! quarter wave (see [`crate::reduce`]) and interpolating between neighbours.

use crate::error::{Error, Result};
use crate::interpolate;

#[cfg(feature = "cli")]
use clap::ValueEnum;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Number of entries in a quarter-wave table (one per whole degree, inclusive).
pub const TABLE_LEN: usize = 91;

/// 16-bit quarter-wave table, 182 bytes. Divide by 65535 for the sine value.
///
/// Refined from the plain rounded table: entries were nudged to lower the mean
/// interpolation error by roughly 4%, see [`crate::optimize`].
#[rustfmt::skip]
pub static SIN_TABLE_16: [u16; TABLE_LEN] = [
    0,
    1145, 2289, 3435, 4572, 5716, 6853, 7989, 9125, 10255, 11385,
    12508, 13631, 14745, 15859, 16963, 18067, 19165, 20253, 21342, 22417,
    23489, 24553, 25610, 26659, 27703, 28731, 29755, 30773, 31777, 32772,
    33756, 34734, 35697, 36649, 37594, 38523, 39445, 40350, 41247, 42131,
    42998, 43856, 44701, 45528, 46344, 47147, 47931, 48708, 49461, 50205,
    50933, 51646, 52342, 53022, 53686, 54334, 54969, 55579, 56180, 56760,
    57322, 57866, 58394, 58908, 59399, 59871, 60327, 60768, 61184, 61584,
    61969, 62330, 62677, 63000, 63304, 63593, 63858, 64108, 64334, 64545,
    64731, 64903, 65049, 65177, 65289, 65377, 65449, 65501, 65527, 65535,
];

/// 8-bit quarter-wave table, 91 bytes. Divide by 255 for the sine value.
#[rustfmt::skip]
pub static SIN_TABLE_8: [u8; TABLE_LEN] = [
    0, 4, 9, 13, 18, 22, 27, 31, 35, 40, 44,
    49, 53, 57, 62, 66, 70, 75, 79, 83, 87,
    91, 96, 100, 104, 108, 112, 116, 120, 124, 128,
    131, 135, 139, 143, 146, 150, 153, 157, 160, 164,
    167, 171, 174, 177, 180, 183, 186, 190, 192, 195,
    198, 201, 204, 206, 209, 211, 214, 216, 219, 221,
    223, 225, 227, 229, 231, 233, 235, 236, 238, 240,
    241, 243, 244, 245, 246, 247, 248, 249, 250, 251,
    252, 253, 253, 254, 254, 254, 255, 255, 255, 255,
];

/// Read access to a quarter-wave table of any width.
///
/// Implemented for `[u16; 91]` and `[u8; 91]`, so the built-in statics and
/// caller-owned tables (for example one returned by [`validate`]) can be
/// passed to every `*_in` function of this crate.
pub trait QuarterWave {
    /// Fixed-point value standing for 1.0.
    const MAX_SCALE: u16;

    /// Multiplier mapping a fixed-point value back into `[0, 1]`.
    const INV_SCALE: f32;

    /// Table entry for a whole degree in `0..=90`.
    fn at(&self, degree: usize) -> u16;

    /// Value between `degree` and `degree + 1`, `remainder` in 1/256 degree.
    #[inline]
    fn interpolate(&self, degree: usize, remainder: u8) -> u16 {
        let value = self.at(degree);
        if remainder == 0 {
            return value;
        }
        interpolate::lerp_wide(value, self.at(degree + 1), remainder)
    }
}

impl QuarterWave for [u16; TABLE_LEN] {
    const MAX_SCALE: u16 = u16::MAX;
    const INV_SCALE: f32 = 1.0 / 65535.0;

    #[inline(always)]
    fn at(&self, degree: usize) -> u16 {
        self[degree]
    }

    #[inline]
    fn interpolate(&self, degree: usize, remainder: u8) -> u16 {
        let value = self[degree];
        if remainder == 0 {
            return value;
        }
        interpolate::lerp_narrow(value, self[degree + 1], remainder)
    }
}

impl QuarterWave for [u8; TABLE_LEN] {
    const MAX_SCALE: u16 = u8::MAX as u16;
    const INV_SCALE: f32 = 1.0 / 255.0;

    #[inline(always)]
    fn at(&self, degree: usize) -> u16 {
        self[degree] as u16
    }
}

/// Table selection: memory footprint against accuracy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "cli", derive(ValueEnum))]
pub enum Precision {
    /// 8-bit table, half the memory
    Low,
    #[default]
    /// 16-bit table
    High,
}

impl Precision {
    /// Size of the selected table in bytes.
    pub const fn table_bytes(self) -> usize {
        match self {
            Precision::Low => TABLE_LEN,
            Precision::High => TABLE_LEN * 2,
        }
    }

    pub const fn max_scale(self) -> u16 {
        match self {
            Precision::Low => <[u8; TABLE_LEN] as QuarterWave>::MAX_SCALE,
            Precision::High => <[u16; TABLE_LEN] as QuarterWave>::MAX_SCALE,
        }
    }
}

fn sample(degree: usize, scale: f64) -> f64 {
    ((degree as f64).to_radians().sin() * scale).round()
}

/// Samples `sin(i°)` and rounds to nearest on the 16-bit scale.
pub fn generate16() -> [u16; TABLE_LEN] {
    log::debug!("Generating 16-bit quarter-wave table");
    let mut table = [0u16; TABLE_LEN];
    for (degree, entry) in table.iter_mut().enumerate() {
        *entry = sample(degree, u16::MAX as f64) as u16;
    }
    table
}

/// Samples `sin(i°)` and rounds to nearest on the 8-bit scale.
pub fn generate8() -> [u8; TABLE_LEN] {
    log::debug!("Generating 8-bit quarter-wave table");
    let mut table = [0u8; TABLE_LEN];
    for (degree, entry) in table.iter_mut().enumerate() {
        *entry = sample(degree, u8::MAX as f64) as u8;
    }
    table
}

/// Checks that `entries` form a usable quarter-wave table for full scale `max`.
///
/// The table must have 91 entries, start at 0, end at `max` and never
/// decrease, because the folding and the binary search in [`crate::inverse`]
/// both rely on it.
pub fn validate(entries: &[u16], max: u16) -> Result<[u16; TABLE_LEN]> {
    if entries.len() != TABLE_LEN {
        return Err(Error::InvalidTableLength {
            len: entries.len(),
            expected: TABLE_LEN,
        });
    }

    let first = entries[0];
    let last = entries[TABLE_LEN - 1];
    if first != 0 || last != max {
        return Err(Error::InvalidTableEndpoints { first, last, max });
    }

    for (index, pair) in entries.windows(2).enumerate() {
        let (previous, value) = (pair[0], pair[1]);
        if value > max {
            return Err(Error::TableEntryOutOfRange {
                index: index + 1,
                value,
                max,
            });
        }
        if value < previous {
            return Err(Error::TableNotMonotonic {
                index: index + 1,
                value,
                previous,
            });
        }
    }

    let mut table = [0u16; TABLE_LEN];
    table.copy_from_slice(entries);
    log::debug!("Validated custom quarter-wave table (max {})", max);
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tables_are_valid() {
        assert!(validate(&SIN_TABLE_16, u16::MAX).is_ok());
        let widened: Vec<u16> = SIN_TABLE_8.iter().map(|&v| v as u16).collect();
        assert!(validate(&widened, u8::MAX as u16).is_ok());
    }

    #[test]
    fn generated_tables_match_endpoints() {
        let t16 = generate16();
        assert_eq!(t16[0], 0);
        assert_eq!(t16[90], u16::MAX);
        assert_eq!(t16[30], 32767);

        let t8 = generate8();
        for (generated, builtin) in t8.iter().zip(SIN_TABLE_8.iter()) {
            assert!(generated.abs_diff(*builtin) <= 1);
        }
    }

    #[test]
    fn refined_table_stays_close_to_generated() {
        let generated = generate16();
        for (refined, plain) in SIN_TABLE_16.iter().zip(generated.iter()) {
            assert!(refined.abs_diff(*plain) <= 16, "{} vs {}", refined, plain);
        }
    }

    #[test]
    fn validate_rejects_bad_tables() {
        assert!(matches!(
            validate(&[0, 1, 2], u16::MAX),
            Err(Error::InvalidTableLength { len: 3, .. })
        ));

        let mut shifted = SIN_TABLE_16;
        shifted[0] = 1;
        assert!(matches!(
            validate(&shifted, u16::MAX),
            Err(Error::InvalidTableEndpoints { first: 1, .. })
        ));

        let mut dented = SIN_TABLE_16;
        dented[40] = dented[39] - 1;
        assert!(matches!(
            validate(&dented, u16::MAX),
            Err(Error::TableNotMonotonic { index: 40, .. })
        ));

        let mut spiked: Vec<u16> = SIN_TABLE_8.iter().map(|&v| v as u16).collect();
        spiked[89] = 300;
        assert!(matches!(
            validate(&spiked, 255),
            Err(Error::TableEntryOutOfRange { index: 89, .. })
        ));
    }

    #[test]
    fn precision_footprint() {
        assert_eq!(Precision::Low.table_bytes() * 2, Precision::High.table_bytes());
        assert_eq!(Precision::default(), Precision::High);
        assert_eq!(Precision::Low.max_scale(), 255);
    }
}
