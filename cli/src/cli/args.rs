use fasttrig::{atan::Formula, Function, Precision};
use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "fasttrig",
    version,
    about = "Lookup-table trigonometry in degrees: evaluate, measure and tune the tables",
    help_template = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading}
  {usage}

{all-args}{after-help}
",
    override_usage = "fasttrig \x1b[3m\x1b[38;5;65m[COMMAND] [OPTIONS] [FLAGS]\x1b[0m",
    disable_help_flag = true,
    disable_version_flag = true,
    styles(crate::style::clap_styles()),
    subcommand_help_heading = "COMMANDS"
)]
pub struct Cli {
    #[arg(
        short,
        long,
        action = ArgAction::Help,
        global = true,
        help = "Prints help information",
        help_heading = "FLAGS"
    )]
    pub help: Option<bool>,

    #[arg(
        short = 'V',
        long,
        action = ArgAction::Version,
        help = "Prints version information",
        help_heading = "FLAGS"
    )]
    pub version: Option<bool>,

    #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true,
        help = "Increases logging verbosity (repeatable)",
        help_heading = "FLAGS"
    )]
    pub verbose: u8,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate a function and compare it with the math library
    #[command(
        override_usage = "fasttrig eval \x1b[3m\x1b[38;5;65m<FUNCTION> <VALUES>...\x1b[0m \x1b[3m\x1b[38;5;65m[OPTIONS]\x1b[0m"
    )]
    Eval(EvalArgs),

    /// Angle of the point (x, y) in degrees
    #[command(override_usage = "fasttrig atan2 \x1b[3m\x1b[38;5;65m<Y> <X>\x1b[0m")]
    Atan2(Atan2Args),

    /// Measure approximation error of every function over its domain
    Accuracy(AccuracyArgs),

    /// Print a quarter-wave table as a Rust array
    Table(TableArgs),

    /// Tune the 16-bit table for lower interpolation error
    Optimize(OptimizeArgs),
}

#[derive(Args, Debug)]
pub struct EvalArgs {
    /// Function to evaluate
    #[arg(value_enum, value_name = "FUNCTION", help_heading = "REQUIRED OPTIONS")]
    pub function: Function,

    /// Inputs (comma-separated): degrees, or ratios for asin/acos/atan
    #[arg(
        value_name = "VALUES",
        value_delimiter = ',',
        required = true,
        allow_negative_numbers = true,
        help_heading = "REQUIRED OPTIONS"
    )]
    pub values: Vec<f32>,

    /// Table width
    #[arg(
        short,
        long,
        value_enum,
        value_name = "PRECISION",
        default_value = "high",
        help_heading = "MISC OPTIONS"
    )]
    pub precision: Precision,

    /// Arctangent polynomial
    #[arg(
        short,
        long,
        value_enum,
        value_name = "FORMULA",
        default_value = "cubic",
        help_heading = "MISC OPTIONS"
    )]
    pub formula: Formula,
}

#[derive(Args, Debug)]
pub struct Atan2Args {
    #[arg(value_name = "Y", allow_negative_numbers = true)]
    pub y: f32,

    #[arg(value_name = "X", allow_negative_numbers = true)]
    pub x: f32,

    /// Arctangent polynomial
    #[arg(
        short,
        long,
        value_enum,
        value_name = "FORMULA",
        default_value = "cubic"
    )]
    pub formula: Formula,
}

#[derive(Args, Debug)]
pub struct AccuracyArgs {
    /// Table width
    #[arg(
        short,
        long,
        value_enum,
        value_name = "PRECISION",
        default_value = "high",
        help_heading = "MISC OPTIONS"
    )]
    pub precision: Precision,

    /// Arctangent polynomial
    #[arg(
        short,
        long,
        value_enum,
        value_name = "FORMULA",
        default_value = "cubic",
        help_heading = "MISC OPTIONS"
    )]
    pub formula: Formula,

    /// Distance between samples in degrees (e.g. '0.01' or '1/256')
    #[arg(
        short,
        long,
        value_name = "DEGREES",
        default_value = "0.01",
        value_parser = parse_step,
        help_heading = "MISC OPTIONS"
    )]
    pub step: f32,

    /// Print the report as JSON
    #[arg(long, default_value_t = false, help_heading = "FLAGS")]
    pub json: bool,

    // PERFORMANCE OPTIONS
    /// Number of sweep threads
    #[arg(
        short,
        long,
        value_name = "COUNT",
        default_value_t = num_cpus::get(),
        help_heading = "PERFORMANCE OPTIONS",
    )]
    pub threads: usize,
}

#[derive(Args, Debug)]
pub struct TableArgs {
    /// Table width
    #[arg(
        short,
        long,
        value_enum,
        value_name = "PRECISION",
        default_value = "high"
    )]
    pub precision: Precision,

    /// Print a freshly rounded table instead of the built-in one
    #[arg(short, long, default_value_t = false, help_heading = "FLAGS")]
    pub generated: bool,

    /// Write the table to this file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct OptimizeArgs {
    /// Upper bound on optimization passes
    #[arg(short, long, value_name = "NUM", default_value_t = 16)]
    pub passes: usize,

    /// Write the tuned table to this file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

// Parsers

fn parse_step(s: &str) -> Result<f32, String> {
    let trimmed = s.trim();
    let step = if let Some((num, den)) = trimmed.split_once('/') {
        let num = num
            .trim()
            .parse::<f32>()
            .map_err(|e| format!("Invalid numerator '{}': {}", num, e))?;
        let den = den
            .trim()
            .parse::<f32>()
            .map_err(|e| format!("Invalid denominator '{}': {}", den, e))?;
        num / den
    } else {
        trimmed
            .parse::<f32>()
            .map_err(|e| format!("Invalid step '{}': {}", trimmed, e))?
    };

    if !step.is_finite() || step <= 0.0 {
        return Err(format!("Step must be a positive number of degrees, got '{}'", s));
    }
    Ok(step)
}
