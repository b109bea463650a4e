//! Build-time configuration errors.

use pf_core::{CompId, PfError, Side};
use thiserror::Error;

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Malformed network detected while freezing a `GraphBuilder`.
///
/// These are construction defects: a network that fails here never reaches
/// the flow engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no source component was designated")]
    MissingSource,

    #[error("source '{name}' must be a tank")]
    SourceNotTank { name: String },

    #[error("component name '{name}' is used more than once")]
    DuplicateName { name: String },

    #[error("{context} refers to non-existent component {id}")]
    UnknownComponent { id: CompId, context: &'static str },

    #[error("component '{name}' is wired more than once")]
    RewiredComponent { name: String },

    #[error("'{name}' is reachable from the source but has no outbound link and is not terminal")]
    DanglingComponent { name: String },

    #[error("sink '{name}' cannot be reached from the source")]
    UnreachableSink { name: String },

    #[error("highlight rule trigger '{name}' is not a pipe")]
    RuleTriggerNotPipe { name: String },

    #[error("highlight rule for '{trigger}' conditions on '{name}', which is not a valve")]
    RuleConditionNotValve { trigger: String, name: String },

    #[error("highlight rule for '{trigger}' lights the {side} port of '{target}', which has no such port")]
    UndeclaredPort {
        trigger: String,
        target: String,
        side: Side,
    },
}

impl From<ConfigError> for PfError {
    fn from(err: ConfigError) -> Self {
        PfError::Configuration {
            what: err.to_string(),
        }
    }
}
