//! Errors from the mutation and query interfaces.

use pf_core::{CompId, PfError};
use thiserror::Error;

pub type FlowResult<T> = Result<T, StateError>;

/// A caller asked for something the network cannot do. Rejected before any
/// state changes.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StateError {
    #[error("unknown component {id}")]
    UnknownComponent { id: CompId },

    #[error("unknown component '{name}'")]
    UnknownName { name: String },

    #[error("'{name}' is a {kind}, not a valve")]
    NotAValve { name: String, kind: &'static str },

    #[error("'{name}' is a {kind} and has no percentage opening")]
    NotProportional { name: String, kind: &'static str },

    #[error("opening {value} for '{name}' is outside 0..=100 percent")]
    OutOfRange { name: String, value: f64 },

    #[error("'{name}' is a {kind}, not a pipe")]
    NotAPipe { name: String, kind: &'static str },
}

impl From<StateError> for PfError {
    fn from(err: StateError) -> Self {
        PfError::InvalidState {
            what: err.to_string(),
        }
    }
}
