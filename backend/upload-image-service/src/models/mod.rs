//! Request, response and notification types

pub mod event;
pub mod notification;
pub mod response;
pub mod storage_key;

pub use event::{UploadEvent, UploaderIdentity};
pub use notification::UploadNotification;
pub use response::{ErrorBody, LambdaResponse, UploadMetadata, UploadSuccess};
pub use storage_key::StorageKey;
