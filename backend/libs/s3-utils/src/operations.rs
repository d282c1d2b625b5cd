/// S3 object writes
use crate::config::S3Config;
use crate::S3Error;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use std::sync::Arc;

/// A single object write
#[derive(Debug, Clone)]
pub struct PutObject<'a> {
    pub key: &'a str,
    pub body: Vec<u8>,
    pub content_type: &'a str,
}

#[derive(Clone)]
pub struct S3Operations {
    client: Arc<Client>,
    config: S3Config,
}

impl S3Operations {
    pub fn new(client: Arc<Client>, config: S3Config) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &S3Config {
        &self.config
    }

    /// Upload an object and return its public URL.
    ///
    /// Single attempt; SDK errors are flattened into `S3Error::Upload` with
    /// the full error chain as the message.
    pub async fn put_object(&self, request: PutObject<'_>) -> Result<String, S3Error> {
        let size = request.body.len();

        self.client
            .put_object()
            .bucket(&self.config.bucket)
            .key(request.key)
            .content_type(request.content_type)
            .body(ByteStream::from(request.body))
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    bucket = %self.config.bucket,
                    key = %request.key,
                    error = %DisplayErrorContext(&e),
                    "S3 put_object failed"
                );
                S3Error::Upload(DisplayErrorContext(&e).to_string())
            })?;

        tracing::debug!(bucket = %self.config.bucket, key = %request.key, size, "S3 object stored");

        Ok(self.config.object_url(request.key))
    }
}
