use crate::capture_time::{CaptureTime, TIMEZONE_LABEL};
use crate::models::UploaderIdentity;
use serde::{Deserialize, Serialize};

pub const UPLOAD_SUCCESS_MESSAGE: &str = "File uploaded successfully";

/// Function result in the API Gateway proxy shape: `{statusCode, body}`
/// where `body` is a JSON document encoded as a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LambdaResponse {
    pub status_code: u16,
    pub body: String,
}

impl LambdaResponse {
    pub fn json<T: Serialize>(status_code: u16, body: &T) -> Self {
        let body = serde_json::to_string(body).unwrap_or_else(|e| {
            tracing::error!(error = %e, "Failed to encode response body");
            format!("{{\"message\":\"{}\"}}", crate::error::UPLOAD_FAILED_MESSAGE)
        });
        Self { status_code, body }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadSuccess {
    pub message: String,
    pub file_url: String,
    pub metadata: UploadMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadMetadata {
    pub user_id: String,
    pub device_id: String,
    pub date: String,
    pub timestamp: String,
    pub timezone: String,
}

impl UploadSuccess {
    pub fn new(identity: UploaderIdentity, captured: CaptureTime, file_url: String) -> Self {
        Self {
            message: UPLOAD_SUCCESS_MESSAGE.to_string(),
            file_url,
            metadata: UploadMetadata {
                user_id: identity.user_id,
                device_id: identity.device_id,
                date: captured.date,
                timestamp: captured.timestamp,
                timezone: TIMEZONE_LABEL.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_success_body_field_names() {
        let success = UploadSuccess::new(
            UploaderIdentity {
                user_id: "u1".to_string(),
                device_id: "d1".to_string(),
            },
            CaptureTime {
                date: "01-02-2024".to_string(),
                timestamp: "2024-02-01_10-00-00".to_string(),
            },
            "https://b.s3.amazonaws.com/k.jpg".to_string(),
        );

        let response = LambdaResponse::json(200, &success);
        let encoded = serde_json::to_value(&response).unwrap();
        assert_eq!(encoded["statusCode"], 200);

        let body: Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(
            body,
            json!({
                "message": "File uploaded successfully",
                "file_url": "https://b.s3.amazonaws.com/k.jpg",
                "metadata": {
                    "userId": "u1",
                    "deviceId": "d1",
                    "date": "01-02-2024",
                    "timestamp": "2024-02-01_10-00-00",
                    "timezone": "Vietnam (GMT+7)"
                }
            })
        );
    }

    #[test]
    fn test_error_body_omits_missing_detail() {
        let body = ErrorBody {
            message: "No image data received.".to_string(),
            error: None,
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"message":"No image data received."}"#
        );
    }
}
