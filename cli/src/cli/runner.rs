use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

use super::args::{Cli, Commands};
use crate::style;
use fasttrig::{
    analysis,
    error::Result,
    optimize::{self, PassStats},
    table, Config, Function, Precision, SIN_TABLE_16, SIN_TABLE_8,
};
use indicatif::{MultiProgress, ProgressBar};
use log::info;
use style::FitToTerminal;
use tabled::{Table, Tabled};

const PASS_BAR_LABEL: &str = "Optimizing";
const BAR_WIDTH: usize = 40;
const ENTRIES_PER_ROW: usize = 10;

#[derive(Tabled)]
struct EvalRow {
    input: String,
    approximation: String,
    reference: String,
    error: String,
}

pub fn run_cli(cli: Cli, progress: &MultiProgress) -> Result<()> {
    let s = style::theme();

    match cli.command {
        Commands::Eval(args) => {
            let config = Config::builder()
                .precision(args.precision)
                .atan_formula(args.formula)
                .build();
            log::debug!("{}", config);

            let rows: Vec<EvalRow> = args
                .values
                .iter()
                .map(|&x| eval_row(&config, args.function, x))
                .collect();

            let mut table = Table::new(&rows);
            table.with(tabled::settings::Style::modern_rounded());
            table = table.fit_to_terminal();
            info!(
                "{} with the {} table\n{}",
                s.emphasis.apply_to(args.function),
                s.primary.apply_to(args.precision),
                table
            );
        }

        Commands::Atan2(args) => {
            let config = Config::builder().atan_formula(args.formula).build();
            let angle = config.atan2(args.y, args.x);
            let reference = (args.y as f64).atan2(args.x as f64).to_degrees();
            info!(
                "atan2({}, {}) = {}° (reference {:.4}°, {} polynomial)",
                args.y,
                args.x,
                s.emphasis.apply_to(angle),
                reference,
                args.formula
            );
        }

        Commands::Accuracy(args) => {
            let config = Config::validated(
                Config::builder()
                    .precision(args.precision)
                    .atan_formula(args.formula)
                    .sweep_step(args.step)
                    .num_threads(args.threads)
                    .build(),
            )?;

            let start = Instant::now();
            let report = analysis::sweep(&config)?;
            let dt = start.elapsed();

            if args.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                let mut table = Table::new(&report);
                table.with(tabled::settings::Style::modern_rounded());
                table = table.fit_to_terminal();
                info!("{}", table);
            }
            info!(
                "Swept the {} table ({} bytes) with step {}° in {}",
                s.primary.apply_to(config.precision),
                config.precision.table_bytes(),
                config.sweep_step,
                s.secondary.apply_to(format_duration(dt))
            );
        }

        Commands::Table(args) => {
            let (name, entries) = table_entries(args.precision, args.generated);
            table::validate(&entries, args.precision.max_scale())?;
            let ty = match args.precision {
                Precision::Low => "u8",
                Precision::High => "u16",
            };
            info!(
                "{} entries, {} bytes",
                entries.len(),
                args.precision.table_bytes()
            );
            let source = render_table(name, ty, &entries);
            emit_table(&source, args.output.as_deref())?;
        }

        Commands::Optimize(args) => {
            let start_table = table::generate16();

            let pb = progress.add(ProgressBar::new(args.passes as u64));
            pb.set_style(style::create_pass_progress_style(BAR_WIDTH));
            pb.set_prefix(PASS_BAR_LABEL);

            let start = Instant::now();
            let result = optimize::optimize(&start_table, args.passes, |stats: &PassStats| {
                pb.inc(1);
                pb.set_message(format!(
                    "{} entries moved, mean error {:.3e}",
                    stats.adjusted, stats.mean_error
                ));
            });
            pb.finish_and_clear();
            let optimized = result?;

            let before = optimized.initial_error;
            let after = optimized.final_error();
            let gain = if before > 0.0 {
                (before - after) / before * 100.0
            } else {
                0.0
            };
            info!(
                "Mean error {:.3e} -> {} ({:.1}% lower) after {} passes in {}",
                before,
                s.emphasis.apply_to(format!("{:.3e}", after)),
                gain,
                optimized.passes.len(),
                s.secondary.apply_to(format_duration(start.elapsed()))
            );

            let source = render_table("SIN_TABLE_16", "u16", &optimized.table);
            emit_table(&source, args.output.as_deref())?;
        }
    }
    Ok(())
}

fn eval_row(config: &Config, function: Function, x: f32) -> EvalRow {
    let approximation = function.eval(config, x);
    let reference = function.reference(x as f64);
    let error = (approximation as f64 - reference).abs();

    // inverse functions map a ratio to degrees
    let (input_unit, output_unit) = if function.is_inverse() {
        ("", "°")
    } else {
        ("°", "")
    };

    EvalRow {
        input: format!("{}{}", x, input_unit),
        approximation: format!("{:.6}{}", approximation, output_unit),
        reference: format!("{:.6}{}", reference, output_unit),
        error: if error.is_nan() {
            "-".to_string()
        } else {
            format!("{:.2e}", error)
        },
    }
}

fn table_entries(precision: Precision, generated: bool) -> (&'static str, Vec<u16>) {
    match (precision, generated) {
        (Precision::High, false) => ("SIN_TABLE_16", SIN_TABLE_16.to_vec()),
        (Precision::High, true) => ("SIN_TABLE_16", table::generate16().to_vec()),
        (Precision::Low, false) => ("SIN_TABLE_8", SIN_TABLE_8.iter().map(|&v| v as u16).collect()),
        (Precision::Low, true) => (
            "SIN_TABLE_8",
            table::generate8().iter().map(|&v| v as u16).collect(),
        ),
    }
}

/// Formats `entries` as a `static` array, zero on its own line and ten
/// entries per row after it.
pub fn render_table(name: &str, ty: &str, entries: &[u16]) -> String {
    let mut out = format!("pub static {}: [{}; {}] = [\n", name, ty, entries.len());
    if let Some((first, rest)) = entries.split_first() {
        out.push_str(&format!("    {},\n", first));
        for row in rest.chunks(ENTRIES_PER_ROW) {
            let line: Vec<String> = row.iter().map(|v| v.to_string()).collect();
            out.push_str(&format!("    {},\n", line.join(", ")));
        }
    }
    out.push_str("];\n");
    out
}

fn emit_table(source: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, source)?;
            info!("Table written to {}", path.display());
        }
        None => print!("{}", source),
    }
    Ok(())
}

pub fn format_duration(duration: Duration) -> String {
    let millis = duration.as_millis();
    let secs = duration.as_secs_f64();

    if duration.as_secs() == 0 && millis > 0 {
        format!("{}ms", millis)
    } else {
        format!("{:.3}s", secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rendered_table_keeps_every_entry() {
        let source = render_table("SIN_TABLE_16", "u16", &SIN_TABLE_16);
        assert!(source.starts_with("pub static SIN_TABLE_16: [u16; 91] = [\n    0,\n"));
        assert!(source.ends_with("65501, 65527, 65535,\n];\n"));

        let count: usize = source
            .lines()
            .skip(1)
            .filter(|line| *line != "];")
            .map(|line| line.split(',').filter(|v| !v.trim().is_empty()).count())
            .sum();
        assert_eq!(count, 91);
    }

    #[test]
    fn eval_row_marks_undefined_error() {
        let config = Config::default();
        let row = eval_row(&config, Function::Tan, 90.0);
        assert_eq!(row.error, "-");

        let row = eval_row(&config, Function::Sin, 30.0);
        assert_eq!(row.input, "30°");
        assert!(row.approximation.starts_with("0.500"));

        let row = eval_row(&config, Function::Asin, 0.5);
        assert_eq!(row.input, "0.5");
        assert!(row.approximation.ends_with('°'));
        assert_eq!(row.reference, "30.000000°");
    }

    #[test]
    fn duration_formatting() {
        assert_eq!(format_duration(Duration::from_millis(250)), "250ms");
        assert_eq!(format_duration(Duration::from_millis(1500)), "1.500s");
    }
}
