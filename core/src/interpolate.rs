//! Fixed-point linear interpolation between neighbouring table entries.
//!
//! `remainder` is the fraction of a degree in 1/256 steps, so both functions
//! compute `lo + (hi - lo) * remainder / 256`. Tables are monotonic, so
//! `hi >= lo` always holds for the callers in this crate.

/// Interpolation with the delta divided by 8 before the multiply and the
/// product by 32 after it.
///
/// The product is taken in `u32`: any step a validated table may hold,
/// up to the full 65535, is safe.
#[inline]
pub fn lerp_narrow(lo: u16, hi: u16, remainder: u8) -> u16 {
    let delta = (hi - lo) / 8;
    lo + ((delta as u32 * remainder as u32) / 32) as u16
}

/// Interpolation through a 32-bit product, exact up to truncation.
///
/// Needed for narrow tables where `delta / 8` would already be zero.
#[inline]
pub fn lerp_wide(lo: u16, hi: u16, remainder: u8) -> u16 {
    let delta = (hi - lo) as u32;
    lo + ((delta * remainder as u32) >> 8) as u16
}
