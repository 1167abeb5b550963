use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrafficError {
    #[error("cannot read input file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("not enough data: need at least {required} records, found {found}")]
    InsufficientData { required: usize, found: usize },
    #[error("window length must be at least 1")]
    EmptyWindow,
}

/// Why a single input line was rejected.
#[derive(Debug, Error)]
pub enum LineError {
    #[error("expected 2 fields, found {found}")]
    FieldCount { found: usize },
    #[error("invalid timestamp '{value}': {source}")]
    Timestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("invalid count '{value}': {source}")]
    Count {
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("negative count '{value}'")]
    NegativeCount { value: String },
    #[error("line is not valid UTF-8")]
    Encoding,
}
