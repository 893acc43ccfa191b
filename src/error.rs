use std::fmt;

/// Broad category an error belongs to, used when reporting it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Configuration,
    Transport,
    ResponseFormat,
    Unexpected,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ErrorKind::Validation => "Invalid input",
            ErrorKind::Configuration => "Configuration error",
            ErrorKind::Transport => "Request failed",
            ErrorKind::ResponseFormat => "Bad response",
            ErrorKind::Unexpected => "Unexpected error",
        };
        f.write_str(label)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("please enter a valid scene description")]
    EmptyDescription,

    #[error("API key not found, make sure {0} is configured")]
    MissingApiKey(String),

    #[error("API key in {0} is not a valid header value")]
    InvalidApiKey(String),

    #[error("unknown provider '{0}' (expected openrouter, together or together-sdxl)")]
    UnknownProvider(String),

    #[error("option {0} needs a value")]
    MissingOption(String),

    #[error("HTTP error: {status} - {message}")]
    Http { status: u16, message: String },

    #[error("connection error, check your internet connection")]
    Connection(#[source] reqwest::Error),

    #[error("the request to the API timed out")]
    Timeout(#[source] reqwest::Error),

    #[error("request error: {0}")]
    Request(#[source] reqwest::Error),

    #[error("unexpected response from the API: {0}")]
    UnexpectedResponse(String),

    #[error("no image found in the API response")]
    NoImageFound,

    #[error("failed to decode image: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("could not write image: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Unexpected(String),
}

impl GenerationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GenerationError::EmptyDescription => ErrorKind::Validation,
            GenerationError::MissingApiKey(_)
            | GenerationError::InvalidApiKey(_)
            | GenerationError::UnknownProvider(_)
            | GenerationError::MissingOption(_) => ErrorKind::Configuration,
            GenerationError::Http { .. }
            | GenerationError::Connection(_)
            | GenerationError::Timeout(_)
            | GenerationError::Request(_) => ErrorKind::Transport,
            GenerationError::UnexpectedResponse(_)
            | GenerationError::NoImageFound
            | GenerationError::Decode(_) => ErrorKind::ResponseFormat,
            GenerationError::Io(_) | GenerationError::Unexpected(_) => ErrorKind::Unexpected,
        }
    }
}

impl From<reqwest::Error> for GenerationError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            GenerationError::Timeout(err)
        } else if err.is_connect() {
            GenerationError::Connection(err)
        } else if let Some(status) = err.status() {
            GenerationError::Http {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            GenerationError::Request(err)
        }
    }
}

pub type Result<T> = std::result::Result<T, GenerationError>;
