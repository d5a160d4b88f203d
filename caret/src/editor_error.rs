use parser::ParseError;
use serialization::SerializationError;
use thiserror::Error;

/// Why an editor operation was refused. The editor is left unchanged.
#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Invalid expression: {0}")]
    Syntax(#[from] ParseError),
    #[error("Only numbers and variables can be inserted, not {0:?}")]
    InvalidCharacter(String),
    #[error("{0:?} is not a valid symbol")]
    InvalidSymbol(String),
    #[error("A matrix needs at least one column and one row, not {columns}x{rows}")]
    InvalidMatrixSize { columns: usize, rows: usize },
    #[error(transparent)]
    Serialization(#[from] SerializationError),
}
