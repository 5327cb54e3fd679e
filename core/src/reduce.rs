//! Folding of arbitrary angles onto the stored quarter wave.

/// An angle folded into `[0, 90]` degrees plus the sign of its sine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReducedAngle {
    pub negative: bool,
    /// Whole degree, `0..=90`.
    pub degree: u8,
    /// Fraction of a degree in 1/256 steps, truncated.
    pub remainder: u8,
}

/// Maps `f` degrees onto the quarter wave so that
/// `sin(f) == ±table(degree + remainder / 256)`.
///
/// Whole turns are dropped, the second half-turn flips the sign, and the
/// second quadrant is mirrored around 90°. Mirroring reverses the slope of
/// the curve, so a nonzero remainder is inverted and the lower neighbour
/// becomes the interpolation base.
///
/// `f` must be finite.
pub fn reduce(f: f32) -> ReducedAngle {
    let mut negative = f < 0.0;
    // f32 remainder is exact, so whole turns drop out at any magnitude
    let f = f.abs() % 360.0;

    // 16 bit math from here on
    let mut degree = f as u16;
    let mut remainder = ((f - degree as f32) * 256.0) as u8;

    if degree >= 180 {
        degree -= 180;
        negative = !negative;
    }

    if degree >= 90 {
        degree = 180 - degree;
        if remainder != 0 {
            remainder = u8::MAX - remainder;
            degree -= 1;
        }
    }

    ReducedAngle {
        negative,
        degree: degree as u8,
        remainder,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduced(negative: bool, degree: u8, remainder: u8) -> ReducedAngle {
        ReducedAngle {
            negative,
            degree,
            remainder,
        }
    }

    #[test]
    fn first_quadrant_is_untouched() {
        assert_eq!(reduce(0.0), reduced(false, 0, 0));
        assert_eq!(reduce(30.5), reduced(false, 30, 128));
        assert_eq!(reduce(90.0), reduced(false, 90, 0));
    }

    #[test]
    fn second_quadrant_is_mirrored() {
        assert_eq!(reduce(150.0), reduced(false, 30, 0));
        assert_eq!(reduce(135.25), reduced(false, 44, 191));
        assert_eq!(reduce(90.5), reduced(false, 89, 127));
    }

    #[test]
    fn lower_half_turn_flips_sign() {
        assert_eq!(reduce(210.0), reduced(true, 30, 0));
        assert_eq!(reduce(270.0), reduced(true, 90, 0));
        assert_eq!(reduce(330.0), reduced(true, 30, 0));
    }

    #[test]
    fn negative_and_wrapped_inputs() {
        assert_eq!(reduce(-30.0), reduced(true, 30, 0));
        assert_eq!(reduce(-210.0), reduced(false, 30, 0));
        assert_eq!(reduce(390.0), reduce(30.0));
        assert_eq!(reduce(720.0 + 45.5), reduce(45.5));
    }

    #[test]
    fn huge_inputs_keep_their_residue() {
        // 2e19 as f32 is 264 mod 360, 1e30 is 120 mod 360
        assert_eq!(reduce(2.0e19), reduced(true, 84, 0));
        assert_eq!(reduce(-2.0e19), reduced(false, 84, 0));
        assert_eq!(reduce(1.0e30), reduced(false, 60, 0));
    }
}
