use std::fmt;
use thiserror::Error;

pub mod column;
pub mod data_frame;
pub mod raw;
pub mod schema;
pub mod store;
pub mod workers;

/// Error type used across the crate
#[derive(Debug, Error)]
pub enum FrameError {
    #[error("no data")]
    NoData,

    #[error("the number of column types ({types}) does not match the number of column names ({names})")]
    InvalidTypesLength { names: usize, types: usize },

    #[error("invalid column type: {0:?}")]
    InvalidType(String),

    #[error("duplicated column name: {0}")]
    DuplicatedColumnName(String),

    #[error("invalid number of data columns in row {row}: expected {expected}, got {actual}")]
    InvalidColumnCount {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("column already exists: {0}")]
    ColumnAlreadyExists(String),

    #[error("column not found: {0}")]
    ColumnNotFound(String),

    #[error("column length mismatch: expected {expected} rows, got {actual}")]
    ColumnLengthMismatch { expected: usize, actual: usize },

    #[error("invalid worker count: {0}")]
    InvalidWorkerCount(usize),

    #[error(transparent)]
    Aggregated(#[from] MultiError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A single cell that could not be converted to a number.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("row {row}, column {column}: cannot convert {value:?}: {reason}")]
pub struct CellError {
    /// Data row index (a header row is not counted)
    pub row: usize,
    pub column: String,
    pub value: String,
    pub reason: String,
}

/// Failures reported by independent chunks of one parallel operation.
///
/// This is a container, not a root cause: inspect the entries with
/// [`MultiError::errors`]. Entry order follows chunk completion and carries
/// no meaning.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiError {
    separator: String,
    errors: Vec<CellError>,
}

impl MultiError {
    pub const DEFAULT_SEPARATOR: &'static str = ",";

    pub fn new(errors: Vec<CellError>) -> Self {
        Self::with_separator(Self::DEFAULT_SEPARATOR, errors)
    }

    pub fn with_separator(separator: impl Into<String>, errors: Vec<CellError>) -> Self {
        MultiError {
            separator: separator.into(),
            errors,
        }
    }

    pub fn errors(&self) -> &[CellError] {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CellError> {
        self.errors.iter()
    }
}

impl fmt::Display for MultiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str(&self.separator)?;
            }
            write!(f, "{err}")?;
        }
        Ok(())
    }
}

impl std::error::Error for MultiError {}

impl IntoIterator for MultiError {
    type Item = CellError;
    type IntoIter = std::vec::IntoIter<CellError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a MultiError {
    type Item = &'a CellError;
    type IntoIter = std::slice::Iter<'a, CellError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
