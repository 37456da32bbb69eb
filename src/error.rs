// src/error.rs

use std::{io, path::PathBuf};
use thiserror::Error;

/// Terminal failures of a cleaning run. Malformed rows are not errors; they
/// are counted in the summary and dropped.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("reading {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no INSERT INTO \"{table}\" statement found")]
    NotFound { table: String },

    #[error("writing {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, SeedError>;
