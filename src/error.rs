use core::fmt::Display;

use serde_derive::{Deserialize, Serialize};

pub type Result<T> = core::result::Result<T, Error>;

/// Recoverable failures. Malformed plan trees are not reported here, the
/// node accessors panic on those instead.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Error {
    Plan(String),
    Catalog(String),
    Execution(String),
    Internal(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plan(err) | Self::Catalog(err) | Self::Execution(err) | Self::Internal(err) => {
                write!(f, "{}", err)
            }
        }
    }
}

impl std::error::Error for Error {}
