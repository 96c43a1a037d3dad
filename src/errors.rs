// errors.rs
use crate::ingest::UploadError;
use astra::Response;
use thiserror::Error;

/// Errors originating from either the server logic
/// (routing, bad input) or downstream layers (ingest, spreadsheet export).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Upload(#[from] UploadError),

    #[error("Spreadsheet Error: {0}")]
    XlsxError(String),

    #[error("Internal Server Error")]
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) | ServerError::Upload(_) => 400,
            ServerError::XlsxError(_) | ServerError::InternalError => 500,
        }
    }
}
