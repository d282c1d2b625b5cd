//! In-memory stand-ins for S3, IoT Core and the wall clock.

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use s3_utils::S3Config;
use std::sync::{Arc, Mutex};
use upload_image_service::capture_time::Clock;
use upload_image_service::error::{NotifyError, StorageError};
use upload_image_service::models::UploadNotification;
use upload_image_service::services::{ImageUpload, ObjectStore, UploadNotifier};
use upload_image_service::UploadHandler;

pub const BUCKET: &str = "smart-door-system";

#[derive(Default)]
pub struct MemoryStore {
    pub uploads: Mutex<Vec<ImageUpload>>,
}

impl MemoryStore {
    pub fn uploads(&self) -> Vec<ImageUpload> {
        self.uploads.lock().unwrap().clone()
    }
}

#[async_trait]
impl ObjectStore for MemoryStore {
    async fn put_image(&self, upload: ImageUpload) -> Result<String, StorageError> {
        let url = S3Config::new(BUCKET).object_url(&upload.key);
        self.uploads.lock().unwrap().push(upload);
        Ok(url)
    }
}

pub struct FailingStore(pub &'static str);

#[async_trait]
impl ObjectStore for FailingStore {
    async fn put_image(&self, _upload: ImageUpload) -> Result<String, StorageError> {
        Err(StorageError(self.0.to_string()))
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub published: Mutex<Vec<(String, UploadNotification)>>,
    pub fail: bool,
}

impl RecordingNotifier {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn published(&self) -> Vec<(String, UploadNotification)> {
        self.published.lock().unwrap().clone()
    }
}

#[async_trait]
impl UploadNotifier for RecordingNotifier {
    async fn publish(&self, topic: &str, message: &UploadNotification) -> Result<(), NotifyError> {
        self.published
            .lock()
            .unwrap()
            .push((topic.to_string(), message.clone()));
        if self.fail {
            return Err(NotifyError::Publish {
                topic: topic.to_string(),
                reason: "ResourceNotFoundException".to_string(),
            });
        }
        Ok(())
    }
}

pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now_utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// 2024-02-29 18:30:15 UTC, i.e. 2024-03-01 01:30:15 in Vietnam
pub fn leap_day_evening() -> FixedClock {
    FixedClock(Utc.with_ymd_and_hms(2024, 2, 29, 18, 30, 15).unwrap())
}

pub fn handler_with(
    store: Arc<dyn ObjectStore>,
    notifier: Arc<dyn UploadNotifier>,
) -> UploadHandler {
    UploadHandler::new(store, notifier, Arc::new(leap_day_evening()), "uploadImage-lambda")
}
