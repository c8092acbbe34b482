//! Domain error types.
//!
//! Application seams (`main`, the session loop) wrap these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read city catalog {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse city catalog {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("city catalog is empty")]
    Empty,
    #[error("city catalog entry for {0} has a blank name")]
    BlankName(PathBuf),
    #[error("city '{0}' appears more than once in the catalog")]
    Duplicate(String),
    #[error("unknown city '{0}'")]
    UnknownCity(String),
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{path} is missing required column '{column}'")]
    MissingColumn { path: PathBuf, column: &'static str },
    #[error("{path}: row {row} has an unparseable Start Time '{value}'")]
    Timestamp {
        path: PathBuf,
        row: usize,
        value: String,
    },
    #[error("{path}: {source}")]
    Csv { path: PathBuf, source: csv::Error },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StatsError {
    #[error("no trips with a recorded duration")]
    NoDurations,
}

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("input closed before a valid choice was made")]
    InputClosed,
    #[error("accepted choice '{0}' has no meaning here")]
    Unrecognized(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
