use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("No API key configured for nearby locations")]
    MissingApiKey,
    #[error("Invalid coordinate")]
    InvalidCoordinate,
    #[error(transparent)]
    Url(#[from] url::ParseError),
    #[error("Unable to serialize filter: {0}")]
    Filter(#[from] serde_json::Error),
    #[error("Request failed: {0}")]
    Fetch(String),
    #[error("The content API responded with {status}: {message}")]
    Api { status: u16, message: String },
    #[error("Unable to decode response: {0}")]
    Decode(String),
}
