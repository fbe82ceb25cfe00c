use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error("API request failed: {0}")]
    Api(#[from] reqwest::Error),

    #[error("Backend returned code {status}, body was: {body}")]
    Status { status: u16, body: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: missing required field {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ConsoleError {
    /// True when no response was received at all, as opposed to the backend
    /// answering with an error status.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Api(_))
    }
}

pub type Result<T> = std::result::Result<T, ConsoleError>;
