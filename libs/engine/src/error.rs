//! Error types for the calculator engine

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Parse and evaluation errors. All of them abort the current line.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Dimension mismatch, unknown unit symbol, bad exponent.
    #[error(transparent)]
    Unit(#[from] dimcalc_units::Error),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Undefined name: {0}")]
    UndefinedName(String),

    #[error("{function}() requires a dimensionless argument, got '{unit}'")]
    NonDimensionlessArgument { function: String, unit: String },

    #[error("{function}() takes {expected} argument(s), got {found}")]
    ArityMismatch {
        function: String,
        expected: String,
        found: usize,
    },

    #[error("Evaluation error: {0}")]
    EvaluationError(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}
