use serde::{Deserialize, Serialize};

/// Message announcing a stored image on `{prefix}/{userId}/{deviceId}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadNotification {
    pub user_id: String,
    pub device_id: String,
    pub file_url: String,
}
