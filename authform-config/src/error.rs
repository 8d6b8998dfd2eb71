// Errors raised while loading or reading configuration

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Asked for a key no source provided
    #[error("configuration key `{0}` is not set")]
    KeyNotFound(String),

    /// A source could not be read
    #[error("cannot load configuration: {0}")]
    LoadError(String),

    /// A source was read but is not a valid document
    #[error("cannot parse configuration: {0}")]
    ParseError(String),

    /// The `.env` file exists but is malformed
    #[error("cannot load .env file: {0}")]
    Dotenv(#[from] dotenvy::Error),

    #[error("invalid value for `{key}`: {reason}")]
    InvalidValue { key: String, reason: String },

    /// A loaded value is well formed but outside what the policy allows
    #[error("invalid configuration: {0}")]
    ValidationError(String),

    #[error("cannot serialize configuration value: {0}")]
    SerializationError(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
