/// Object storage seam for uploaded captures
use crate::error::StorageError;
use async_trait::async_trait;
use s3_utils::{PutObject, S3Operations};

pub const IMAGE_CONTENT_TYPE: &str = "image/jpeg";

/// One image write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub key: String,
    pub bytes: Vec<u8>,
    pub content_type: String,
}

#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Store the image and return its public URL
    async fn put_image(&self, upload: ImageUpload) -> Result<String, StorageError>;
}

/// `ObjectStore` backed by the shared S3 client
#[derive(Clone)]
pub struct S3ImageStore {
    ops: S3Operations,
}

impl S3ImageStore {
    pub fn new(ops: S3Operations) -> Self {
        Self { ops }
    }
}

#[async_trait]
impl ObjectStore for S3ImageStore {
    async fn put_image(&self, upload: ImageUpload) -> Result<String, StorageError> {
        let url = self
            .ops
            .put_object(PutObject {
                key: &upload.key,
                body: upload.bytes,
                content_type: &upload.content_type,
            })
            .await?;
        Ok(url)
    }
}
