use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum HubError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("invalid data: {0}")]
    InvalidData(String),
    #[error("config error: {0}")]
    Config(String),
    #[error("{0}")]
    Other(String),
}

pub type HubResult<T> = std::result::Result<T, HubError>;

impl HubError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn invalid_data(message: impl Into<String>) -> Self {
        Self::InvalidData(message.into())
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Internal failures that no input could have caused.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }
}
