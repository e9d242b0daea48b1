use std::{
    error::Error,
    fmt::{self, Display},
};

use rand_distr::NormalError;

/// The specific result type for the `RandParamGen` constructors.
pub type Result<T> = std::result::Result<T, RandErr>;

/// Returned whenever a `RandParamGen` cannot be built with the given distribution parameters.
#[derive(Debug)]
pub struct RandErr(String);

impl From<NormalError> for RandErr {
    fn from(value: NormalError) -> Self {
        Self(value.to_string())
    }
}

impl Display for RandErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Error for RandErr {}
