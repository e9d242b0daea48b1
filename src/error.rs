use std::{
    error::Error,
    fmt::{self, Display},
};

use crate::initialization::RandErr;

/// The result type used in the entire crate.
pub type Result<T> = std::result::Result<T, MlErr>;

/// The crate's error type.
#[derive(Debug)]
pub enum MlErr {
    /// A shape invariant was violated (e.g. mismatched lengths).
    ShapeMismatch {
        what: &'static str,
        got: usize,
        expected: usize,
    },
    /// An argument is invalid for semantic or domain reasons.
    InvalidArgument(&'static str),
    /// The classifier was queried before a successful `fit`.
    NotFitted,
    /// The weight initializer could not be built.
    Init(RandErr),
    /// The configuration could not be read or parsed.
    Config(String),
}

impl Display for MlErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MlErr::ShapeMismatch {
                what,
                got,
                expected,
            } => write!(f, "shape mismatch for {what}: got {got}, expected {expected}"),
            MlErr::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            MlErr::NotFitted => write!(f, "the classifier has not been fitted yet"),
            MlErr::Init(e) => write!(f, "failed to initialize the weights: {e}"),
            MlErr::Config(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl Error for MlErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MlErr::Init(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RandErr> for MlErr {
    fn from(value: RandErr) -> Self {
        Self::Init(value)
    }
}
