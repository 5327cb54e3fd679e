//! Accuracy sweeps against the platform math library.

use rayon::{prelude::*, ThreadPoolBuilder};

use crate::{
    config::Config,
    error::Result,
    Function,
};

#[cfg(feature = "serde")]
use serde::Serialize;
#[cfg(feature = "cli")]
use tabled::Tabled;

/// Absolute error statistics of one function over its sweep domain.
///
/// Errors of direct functions are in output units, errors of inverse
/// functions in degrees.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "cli", derive(Tabled))]
pub struct ErrorStats {
    pub function: String,
    pub samples: usize,
    pub mean_error: f64,
    pub max_error: f64,
    pub worst_input: f64,
}

#[derive(Debug, Clone, Copy, Default)]
struct Accumulator {
    samples: usize,
    sum: f64,
    max: f64,
    worst: f64,
}

impl Accumulator {
    fn add(mut self, input: f64, error: f64) -> Self {
        self.samples += 1;
        self.sum += error;
        if error > self.max {
            self.max = error;
            self.worst = input;
        }
        self
    }

    fn merge(self, other: Self) -> Self {
        let (max, worst) = if other.max > self.max {
            (other.max, other.worst)
        } else {
            (self.max, self.worst)
        };
        Accumulator {
            samples: self.samples + other.samples,
            sum: self.sum + other.sum,
            max,
            worst,
        }
    }

    fn finish(self, function: impl Into<String>) -> ErrorStats {
        let mean_error = if self.samples > 0 {
            self.sum / self.samples as f64
        } else {
            0.0
        };
        ErrorStats {
            function: function.into(),
            samples: self.samples,
            mean_error,
            max_error: self.max,
            worst_input: self.worst,
        }
    }
}

/// Angles swept for `function`, in degrees. Inverse functions are fed the
/// sine, cosine or tangent of these angles.
fn domain(function: Function) -> (f64, f64) {
    match function {
        Function::Sin | Function::Cos => (-360.0, 360.0),
        // stay clear of the asymptotes
        Function::Tan => (-85.0, 85.0),
        Function::Cot => (5.0, 175.0),
        Function::Asin => (-90.0, 90.0),
        Function::Acos => (0.0, 180.0),
        Function::Atan => (-85.0, 85.0),
    }
}

fn input_for(function: Function, angle: f64) -> f64 {
    let radians = angle.to_radians();
    match function {
        Function::Asin => radians.sin(),
        Function::Acos => radians.cos(),
        Function::Atan => radians.tan(),
        _ => angle,
    }
}

fn sample_points(start: f64, end: f64, step: f64) -> impl IndexedParallelIterator<Item = f64> {
    let count = ((end - start) / step).floor() as usize + 1;
    (0..count)
        .into_par_iter()
        .map(move |i| start + i as f64 * step)
}

/// Error statistics of one function, on the current rayon pool.
pub fn function_stats(config: &Config, function: Function) -> ErrorStats {
    let (start, end) = domain(function);
    sample_points(start, end, config.sweep_step as f64)
        .filter_map(|angle| {
            let input = input_for(function, angle) as f32;
            let expected = function.reference(input as f64);
            let got = function.eval(config, input) as f64;
            let error = (got - expected).abs();
            error.is_finite().then_some((input as f64, error))
        })
        .fold(Accumulator::default, |acc, (input, error)| acc.add(input, error))
        .reduce(Accumulator::default, Accumulator::merge)
        .finish(function.to_string())
}

/// Error statistics of the two-argument arctangent around the full circle.
pub fn atan2_stats(config: &Config) -> ErrorStats {
    sample_points(-179.0, 180.0, config.sweep_step as f64)
        .filter_map(|angle| {
            let radians = angle.to_radians();
            let (y, x) = (radians.sin() as f32, radians.cos() as f32);
            let expected = (y as f64).atan2(x as f64).to_degrees();
            let error = (config.atan2(y, x) as f64 - expected).abs();
            error.is_finite().then_some((angle, error))
        })
        .fold(Accumulator::default, |acc, (input, error)| acc.add(input, error))
        .reduce(Accumulator::default, Accumulator::merge)
        .finish("atan2")
}

/// Sweeps every function on a dedicated pool of `config.num_threads`.
pub fn sweep(config: &Config) -> Result<Vec<ErrorStats>> {
    config.validate()?;
    log::debug!("Starting accuracy sweep with {}", config);

    let pool = ThreadPoolBuilder::new()
        .num_threads(config.num_threads.max(1))
        .build()?;

    let report = pool.install(|| {
        let mut report: Vec<ErrorStats> = Function::ALL
            .iter()
            .map(|&function| function_stats(config, function))
            .collect();
        report.push(atan2_stats(config));
        report
    });

    log::debug!("Accuracy sweep complete ({} functions)", report.len());
    Ok(report)
}
