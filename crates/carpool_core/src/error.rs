use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Why a single roster line was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("driver `{name}` is missing a capacity")]
    MissingCapacity { name: String },
    #[error("driver capacity `{value}` is not a non-negative integer")]
    InvalidCapacity { value: String },
    #[error("group identifier `{value}` is not an integer")]
    InvalidGroup { value: String },
    #[error("{kind} name is empty")]
    EmptyName { kind: &'static str },
    #[error("unexpected trailing field `{value}`")]
    TrailingField { value: String },
}

/// Failures that stop a run before allocation begins.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("cannot read roster {}", .path.display())]
    Unresolvable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed record on line {line} (`{text}`)")]
    MalformedRecord {
        line: usize,
        text: String,
        #[source]
        reason: RecordError,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write report")]
    Io(#[from] io::Error),
    #[error("failed to encode JSON report")]
    Json(#[from] serde_json::Error),
    #[error("failed to encode CSV report")]
    Csv(#[from] csv::Error),
}
