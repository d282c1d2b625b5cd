use crate::capture_time::CaptureTime;
use crate::models::UploaderIdentity;
use std::fmt;

/// Object key of an uploaded capture:
/// `history/{userId}/{deviceId}/{DD-MM-YYYY}/{YYYY-MM-DD_HH-MM-SS}.jpg`
///
/// Unique per device only to the second.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKey(String);

impl StorageKey {
    pub fn new(identity: &UploaderIdentity, captured: &CaptureTime) -> Self {
        StorageKey(format!(
            "history/{}/{}/{}/{}.jpg",
            identity.user_id, identity.device_id, captured.date, captured.timestamp
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
