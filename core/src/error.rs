use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("Invalid table length: expected {expected} entries, got {len}")]
    InvalidTableLength { len: usize, expected: usize },

    #[error("Invalid table endpoints: expected 0 and {max}, got {first} and {last}")]
    InvalidTableEndpoints { first: u16, last: u16, max: u16 },

    #[error("Table is not monotonic: entry {index} ({value}) is below the previous entry ({previous})")]
    TableNotMonotonic {
        index: usize,
        value: u16,
        previous: u16,
    },

    #[error("Table entry {index} ({value}) exceeds the full scale of {max}")]
    TableEntryOutOfRange { index: usize, value: u16, max: u16 },

    #[error("Invalid sweep step: must be at least 1/4096 degree, got {0}")]
    InvalidSweepStep(f32),

    #[error(
        "Invalid thread count: Specifying more threads than available CPU cores ({0}) is redundant"
    )]
    InvalidThreadCount(usize),

    #[error("Thread pool creation failed: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "serde")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Logger error: {0}")]
    LoggerError(String),
}

/// Result type of the core library
pub type Result<T> = core::result::Result<T, Error>;
