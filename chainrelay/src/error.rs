use chainrelay_core::RelayError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown forward mode '{0}', expected 'suppress' or 'filter'")]
    UnknownMode(String),
    #[error("reasoning patterns must not be blank")]
    EmptyPattern,
}

impl From<ConfigError> for RelayError {
    fn from(err: ConfigError) -> Self {
        RelayError::InvalidConfig(err.to_string())
    }
}
