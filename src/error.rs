use std::path::PathBuf;
use thiserror::Error;

use crate::geodetic::Error as GeodeticError;

/// Errors that may rise when loading or processing field trial data.
/// None of them is recoverable: processing aborts on the first one.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read \"{}\": {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("\"{}\": {source}", .path.display())]
    Csv {
        path: PathBuf,
        source: csv::Error,
    },
    #[error("\"{}\": missing \"{column}\" column", .path.display())]
    MissingColumn { path: PathBuf, column: String },
    #[error("\"{}\" line {line}: invalid {column} value \"{value}\"", .path.display())]
    InvalidValue {
        path: PathBuf,
        line: u64,
        column: String,
        value: String,
    },
    #[error("unknown signal column \"{0}\"")]
    UnknownColumn(String),
    #[error("invalid satellite identifier \"{0}\"")]
    InvalidSatellite(String),
    #[error("\"{}\" does not contain any sample", .0.display())]
    EmptyDataset(PathBuf),
    #[error("no dataset to process")]
    NoDatasets,
    #[error("signal table is empty")]
    EmptyTable,
    #[error("coordinates conversion: {0}")]
    Geodetic(#[from] GeodeticError),
}
