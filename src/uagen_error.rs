use thiserror::Error;

#[derive(Error, Debug)]
pub enum UagenError {
    #[error("standard I/O error - {e}")]
    StdIoError { e: std::io::Error },
    #[error("JSON serialization error - {e}")]
    JsonError { e: serde_json::Error },
}

impl From<std::io::Error> for UagenError {
    fn from(e: std::io::Error) -> Self {
        UagenError::StdIoError { e }
    }
}

impl From<serde_json::Error> for UagenError {
    fn from(e: serde_json::Error) -> Self {
        UagenError::JsonError { e }
    }
}
