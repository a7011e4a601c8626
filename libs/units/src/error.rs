use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("dimension mismatch: '{left}' vs '{right}'")]
    DimensionMismatch { left: String, right: String },

    #[error("unknown unit symbol '{0}'")]
    UnknownUnitSymbol(String),

    #[error("invalid unit exponent '{0}'")]
    InvalidExponent(String),

    #[error("exponent must be dimensionless, got '{0}'")]
    NonDimensionlessExponent(String),
}
