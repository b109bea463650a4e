use pf_core::PfError;
use pf_flow::StateError;
use pf_graph::ConfigError;

pub type StandResult<T> = Result<T, StandError>;

#[derive(thiserror::Error, Debug)]
pub enum StandError {
    #[error("grid unit must be a positive, finite length (got {value})")]
    InvalidGridUnit { value: f64 },

    #[error("layout places '{name}', which is not part of the network")]
    MissingComponent { name: String },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid state: {0}")]
    State(#[from] StateError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl From<StandError> for PfError {
    fn from(err: StandError) -> Self {
        match err {
            StandError::Config(e) => e.into(),
            StandError::State(e) => e.into(),
            StandError::InvalidGridUnit { .. } | StandError::MissingComponent { .. } => {
                PfError::Configuration {
                    what: err.to_string(),
                }
            }
            StandError::Io(_) | StandError::Yaml(_) => PfError::InvalidArg {
                what: err.to_string(),
            },
        }
    }
}
