use thiserror::Error;

#[derive(Error, Debug)]
pub enum MetaError {
    #[error("Invalid exchange metadata: {0}")]
    ParseError(String),

    #[error("Failed to read catalog: {0}")]
    IoError(String),

    #[error("Unknown exchange: {0}")]
    UnknownExchange(String),
}

impl From<serde_json::Error> for MetaError {
    fn from(err: serde_json::Error) -> Self {
        MetaError::ParseError(err.to_string())
    }
}
