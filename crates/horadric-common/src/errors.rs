use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("{0} not found. Please set it in your .env file.")]
    MissingCredential(String),
}

#[derive(Debug, thiserror::Error)]
pub enum HoradricError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl HoradricError {
    /// Whether this error stops the assistant before the chat loop starts.
    pub fn is_missing_credential(&self) -> bool {
        matches!(self, Self::Config(ConfigError::MissingCredential(_)))
    }
}
