use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A config file or environment value could not be read or has the wrong type.
    #[error("failed to load configuration: {0}")]
    Figment(#[from] figment::Error),

    #[error("{field} is not set; {hint}")]
    NotConfigured { field: String, hint: String },

    #[error("{field} is invalid: {reason}")]
    InvalidValue { field: String, reason: String },
}
