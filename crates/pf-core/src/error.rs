use thiserror::Error;

pub type PfResult<T> = Result<T, PfError>;

/// Crate-spanning error. Each layer keeps its own detailed enum and
/// converts into this one at the boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PfError {
    #[error("Configuration error: {what}")]
    Configuration { what: String },

    #[error("Invalid state: {what}")]
    InvalidState { what: String },

    #[error("Serialization error: {what}")]
    Serialization { what: String },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: String },
}
