use thiserror::Error;

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Failed to retrieve IP address. Status code: {status}")]
    RequestFailed { status: u16 },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Unexpected response body: {message}")]
    UnexpectedBody { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Standard input closed before an identifier was read")]
    InputClosed,

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl LookupError {
    /// Only a non-200 response is recovered by the driver; every other kind
    /// terminates the run.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, LookupError::RequestFailed { .. })
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            LookupError::RequestFailed { .. } => self.to_string(),
            LookupError::ApiError(e) if e.is_connect() => {
                format!("Could not connect to the API: {}", e)
            }
            LookupError::ApiError(e) => format!("Network request failed: {}", e),
            LookupError::SerializationError(_) | LookupError::UnexpectedBody { .. } => {
                format!("The API returned a response that could not be read: {}", self)
            }
            LookupError::IoError(e) => format!("Console I/O failed: {}", e),
            LookupError::InputClosed => "No Discord ID was entered".to_string(),
            LookupError::InvalidConfigValueError { .. } => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LookupError>;
