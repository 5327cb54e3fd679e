use clap::Parser;
use cli::cli::args::Cli;

use cli::{cli::runner::run_cli, logger};
use indicatif::MultiProgress;
use std::process;

fn main() {
    let args = Cli::parse();

    let progress = match logger::init(args.verbose) {
        Ok(progress) => progress,
        Err(e) => {
            eprintln!("Failed to initialize logger: {}", e);
            MultiProgress::new()
        }
    };

    let exit_code = match run_cli(args, &progress) {
        Ok(()) => 0,
        Err(e) => {
            log::error!("{}", e);
            1
        }
    };

    process::exit(exit_code);
}
