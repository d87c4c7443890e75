//! Rider data-integrity errors.

use thiserror::Error;

use crate::RiderId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The trailing age digits of a rider identifier could not be parsed.
    #[error("malformed rider identifier {id:?}: {reason}")]
    MalformedId {
        id:     RiderId,
        reason: &'static str,
    },
}

pub type CoreResult<T> = Result<T, CoreError>;
