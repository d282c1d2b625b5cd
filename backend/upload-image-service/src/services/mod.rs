//! Outbound collaborators: object storage and IoT notifications

pub mod image_payload;
pub mod notifier;
pub mod storage;

pub use notifier::{upload_topic, IotNotifier, UploadNotifier};
pub use storage::{ImageUpload, ObjectStore, S3ImageStore, IMAGE_CONTENT_TYPE};
