/// Shared S3 utilities
///
/// Provides the AWS S3 client wrapper, bucket configuration and the
/// object write used by the upload services.
use aws_config::SdkConfig;
use aws_sdk_s3::Client;
use std::sync::Arc;
use thiserror::Error;

pub mod config;
pub mod operations;

pub use config::S3Config;
pub use operations::{PutObject, S3Operations};

#[derive(Error, Debug)]
pub enum S3Error {
    #[error("{0}")]
    Upload(String),
}

/// Shared S3 client wrapper
#[derive(Clone)]
pub struct S3Client {
    client: Arc<Client>,
    config: S3Config,
}

impl S3Client {
    /// Create a client from an already loaded AWS configuration
    pub fn from_sdk_config(aws_config: &SdkConfig, config: S3Config) -> Self {
        Self {
            client: Arc::new(Client::new(aws_config)),
            config,
        }
    }

    /// Get S3 configuration
    pub fn config(&self) -> &S3Config {
        &self.config
    }

    pub fn operations(&self) -> S3Operations {
        S3Operations::new(Arc::clone(&self.client), self.config.clone())
    }
}
