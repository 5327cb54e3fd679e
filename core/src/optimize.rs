//! Refinement of a 16-bit table for lower interpolation error.
//!
//! A plain rounded table is not the best table for linear interpolation:
//! the chord between two samples always lies below the sine curve. Nudging
//! interior entries by one count at a time recovers part of that error.
//! [`crate::SIN_TABLE_16`] was produced this way.

use crate::{
    error::Result,
    table::{self, QuarterWave, TABLE_LEN},
};

/// Sample points per degree when scoring a table, one per interpolation step.
const STEPS_PER_DEGREE: u16 = 256;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PassStats {
    pub pass: usize,
    /// Entries changed during this pass.
    pub adjusted: usize,
    /// Mean absolute sine error after this pass.
    pub mean_error: f64,
}

#[derive(Debug, Clone)]
pub struct Optimized {
    pub table: [u16; TABLE_LEN],
    pub initial_error: f64,
    pub passes: Vec<PassStats>,
}

impl Optimized {
    pub fn final_error(&self) -> f64 {
        self.passes
            .last()
            .map(|pass| pass.mean_error)
            .unwrap_or(self.initial_error)
    }
}

/// Summed absolute error of the interpolated sine between `degree` and
/// `degree + 1`.
pub fn span_error(table: &[u16; TABLE_LEN], degree: usize) -> f64 {
    (0..STEPS_PER_DEGREE)
        .map(|step| {
            let approx = table.interpolate(degree, step as u8) as f64
                * <[u16; TABLE_LEN] as QuarterWave>::INV_SCALE as f64;
            let exact = (degree as f64 + step as f64 / STEPS_PER_DEGREE as f64)
                .to_radians()
                .sin();
            (approx - exact).abs()
        })
        .sum()
}

/// Mean absolute error of the interpolated sine over the whole quarter wave.
pub fn mean_error(table: &[u16; TABLE_LEN]) -> f64 {
    let total: f64 = (0..TABLE_LEN - 1).map(|degree| span_error(table, degree)).sum();
    total / ((TABLE_LEN - 1) * STEPS_PER_DEGREE as usize) as f64
}

/// Greedily adjusts entries `1..=89` of `start` by ±1 while that lowers the
/// error of the two spans the entry bounds.
///
/// Endpoints stay fixed and the table stays monotonic. Stops after a pass
/// without changes or after `max_passes`. `on_pass` is called after every
/// pass.
pub fn optimize(
    start: &[u16],
    max_passes: usize,
    mut on_pass: impl FnMut(&PassStats),
) -> Result<Optimized> {
    let mut table = table::validate(start, u16::MAX)?;
    let initial_error = mean_error(&table);
    log::debug!(
        "Optimizing table: mean error {:.3e}, at most {} passes",
        initial_error,
        max_passes
    );

    let mut passes = Vec::new();
    for pass in 1..=max_passes {
        let mut adjusted = 0;

        for index in 1..TABLE_LEN - 1 {
            let current = table[index];
            let mut best = (span_error(&table, index - 1) + span_error(&table, index), current);

            for candidate in [current.checked_sub(1), current.checked_add(1)]
                .into_iter()
                .flatten()
            {
                if candidate < table[index - 1] || candidate > table[index + 1] {
                    continue;
                }
                table[index] = candidate;
                let error = span_error(&table, index - 1) + span_error(&table, index);
                if error < best.0 {
                    best = (error, candidate);
                }
            }

            table[index] = best.1;
            if best.1 != current {
                adjusted += 1;
            }
        }

        let stats = PassStats {
            pass,
            adjusted,
            mean_error: mean_error(&table),
        };
        log::trace!(
            "Pass {}: {} entries adjusted, mean error {:.3e}",
            stats.pass,
            stats.adjusted,
            stats.mean_error
        );
        on_pass(&stats);
        passes.push(stats);

        if adjusted == 0 {
            break;
        }
    }

    log::debug!(
        "Optimization finished after {} passes: mean error {:.3e}",
        passes.len(),
        passes.last().map(|p| p.mean_error).unwrap_or(initial_error)
    );

    Ok(Optimized {
        table,
        initial_error,
        passes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{generate16, SIN_TABLE_16};

    #[test]
    fn refined_table_beats_rounded_table() {
        assert!(mean_error(&SIN_TABLE_16) < mean_error(&generate16()));
    }

    #[test]
    fn optimization_never_increases_error() {
        let mut calls = 0;
        let result = optimize(&generate16(), 3, |_| calls += 1).unwrap();

        assert_eq!(calls, result.passes.len());
        assert!(result.final_error() < result.initial_error);
        for pair in result.passes.windows(2) {
            assert!(pair[1].mean_error <= pair[0].mean_error);
        }
        assert!(table::validate(&result.table, u16::MAX).is_ok());
        assert_eq!(result.table[0], 0);
        assert_eq!(result.table[90], u16::MAX);
    }

    #[test]
    fn zero_passes_returns_input() {
        let result = optimize(&SIN_TABLE_16, 0, |_| {}).unwrap();
        assert!(result.passes.is_empty());
        assert_eq!(result.table, SIN_TABLE_16);
        assert_eq!(result.final_error(), result.initial_error);
    }

    #[test]
    fn rejects_invalid_start() {
        assert!(optimize(&[0, 1, 2], 1, |_| {}).is_err());
    }
}
