use crate::style;
use env_logger::{Builder, Env};
use fasttrig::error::{Error, Result};
use indicatif::MultiProgress;
use indicatif_log_bridge::LogWrapper;
use log::{Level, LevelFilter};
use std::io::Write;

/// Level forced by `-v` flags; `None` leaves `RUST_LOG` in charge.
pub fn verbosity_level(verbose: u8) -> Option<LevelFilter> {
    match verbose {
        0 => None,
        1 => Some(LevelFilter::Debug),
        _ => Some(LevelFilter::Trace),
    }
}

/// Installs the logger and returns the progress bar container it writes
/// around. Bars must be added to the returned [`MultiProgress`] so log lines
/// do not tear them.
pub fn init(verbose: u8) -> Result<MultiProgress> {
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
    if let Some(level) = verbosity_level(verbose) {
        builder.filter_level(level);
    }

    builder.format(|buf, record| {
        let s = style::theme();
        let level = record.level();

        let (level_text, style_ref) = match level {
            Level::Error => ("ERROR ", &s.error),
            Level::Warn => ("WARN  ", &s.warning),
            Level::Info => ("", &s.info),
            Level::Debug => ("DEBUG ", &s.highlight),
            Level::Trace => ("TRACE ", &s.info),
        };

        write!(buf, "{}", style_ref.apply_to(level_text))?;
        if level != Level::Info {
            write!(buf, "[{}] ", record.target())?;
        }
        writeln!(buf, "{}", record.args())
    });

    let logger = builder.build();
    let max_level = logger.filter();
    let progress = MultiProgress::new();

    LogWrapper::new(progress.clone(), logger)
        .try_init()
        .map_err(|e| Error::LoggerError(format!("Failed to install logger: {}", e)))?;
    log::set_max_level(max_level);

    Ok(progress)
}
