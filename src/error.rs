//! errors raised while building a table or reducing it along an axis

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ReduceError {
    /// the table has no row or no column
    #[error("table has invalid shape (nrow : {nrow}, ncol : {ncol}), need at least one row and one column")]
    InvalidShape { nrow: usize, ncol: usize },
    /// a cell could not be interpreted as a real number
    #[error("column `{column}`, row {row} : value `{value}` is not numeric")]
    NonNumeric {
        column: String,
        row: usize,
        value: String,
    },
    /// a column does not have the length of the others
    #[error("column `{column}` has {got} values, expected {expected}")]
    Ragged {
        column: String,
        expected: usize,
        got: usize,
    },
    /// number of names given does not match the number of columns
    #[error("got {got} column names for {expected} columns")]
    NameCount { expected: usize, got: usize },
    #[error("column `{0}` already present in table")]
    DuplicateColumn(String),
}

pub type Result<T> = std::result::Result<T, ReduceError>;
