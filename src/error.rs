use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Two shapes that must agree were combined and did not.
    DimensionMismatch(String),
    /// A hyperparameter or function argument is outside its valid range.
    InvalidParameter(String),
    /// Classification labels that are not 0 or 1.
    InvalidLabels(String),
    /// `predict` or `score` called before `fit`.
    NotFitted,
    /// An operation that needs at least one row received none.
    EmptyMatrix,
}

pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DimensionMismatch(msg) => write!(f, "dimension mismatch: {msg}"),
            Error::InvalidParameter(msg) => write!(f, "invalid parameter: {msg}"),
            Error::InvalidLabels(msg) => write!(f, "invalid labels: {msg}"),
            Error::NotFitted => write!(f, "model not fitted, call fit() first"),
            Error::EmptyMatrix => write!(f, "matrix has no rows"),
        }
    }
}

impl std::error::Error for Error {}
