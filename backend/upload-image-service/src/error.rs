/// Error types for upload-image-service
///
/// Every step of the upload pipeline returns one of these; the handler folds
/// them into the `{statusCode, body}` response returned to the caller.
use crate::models::{ErrorBody, LambdaResponse};
use thiserror::Error;

/// Result type for upload-image-service operations
pub type Result<T> = std::result::Result<T, UploadError>;

pub const MISSING_BODY_MESSAGE: &str = "No image data received.";
pub const MISSING_IDENTITY_MESSAGE: &str = "userId and deviceId are required.";
pub const UPLOAD_FAILED_MESSAGE: &str = "Error uploading file";

/// Object storage write failure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct StorageError(pub String);

impl From<s3_utils::S3Error> for StorageError {
    fn from(err: s3_utils::S3Error) -> Self {
        StorageError(err.to_string())
    }
}

/// Notification publish failure. Never surfaced to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotifyError {
    #[error("failed to encode notification: {0}")]
    Encode(String),

    #[error("publish to {topic} failed: {reason}")]
    Publish { topic: String, reason: String },
}

#[derive(Error, Debug)]
pub enum UploadError {
    #[error("{}", MISSING_BODY_MESSAGE)]
    MissingBody,

    #[error("{}", MISSING_IDENTITY_MESSAGE)]
    MissingIdentity,

    #[error("Invalid base64 image data: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    #[error("Unsupported request body: {0}")]
    UnsupportedBody(String),

    #[error("{0}")]
    Storage(#[from] StorageError),
}

impl UploadError {
    pub fn status_code(&self) -> u16 {
        match self {
            UploadError::MissingBody | UploadError::MissingIdentity => 400,
            UploadError::InvalidBase64(_)
            | UploadError::UnsupportedBody(_)
            | UploadError::Storage(_) => 500,
        }
    }

    pub fn is_client_error(&self) -> bool {
        self.status_code() < 500
    }

    /// Body for the error response: `{message}` for 400, `{message, error}` for 500
    pub fn to_body(&self) -> ErrorBody {
        if self.is_client_error() {
            ErrorBody {
                message: self.to_string(),
                error: None,
            }
        } else {
            ErrorBody {
                message: UPLOAD_FAILED_MESSAGE.to_string(),
                error: Some(self.to_string()),
            }
        }
    }

    pub fn into_response(self) -> LambdaResponse {
        LambdaResponse::json(self.status_code(), &self.to_body())
    }
}
