/// Image upload handler
///
/// Pipeline: require body → parse → resolve identity → stamp time →
/// decode image → store → notify. Each step returns a `Result`; the first
/// error short-circuits into the error response. Notification failures are
/// logged and dropped.
use crate::capture_time::{CaptureTime, Clock};
use crate::error::{Result, UploadError};
use crate::models::event::{field_text, is_truthy};
use crate::models::{
    LambdaResponse, StorageKey, UploadEvent, UploadNotification, UploadSuccess, UploaderIdentity,
};
use crate::services::image_payload::resolve_image;
use crate::services::{upload_topic, ImageUpload, ObjectStore, UploadNotifier, IMAGE_CONTENT_TYPE};
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info, warn};

pub struct UploadHandler {
    store: Arc<dyn ObjectStore>,
    notifier: Arc<dyn UploadNotifier>,
    clock: Arc<dyn Clock>,
    topic_prefix: String,
}

impl UploadHandler {
    pub fn new(
        store: Arc<dyn ObjectStore>,
        notifier: Arc<dyn UploadNotifier>,
        clock: Arc<dyn Clock>,
        topic_prefix: impl Into<String>,
    ) -> Self {
        Self {
            store,
            notifier,
            clock,
            topic_prefix: topic_prefix.into(),
        }
    }

    pub async fn handle(&self, event: UploadEvent) -> LambdaResponse {
        match self.process(event).await {
            Ok(success) => {
                info!(file_url = %success.file_url, "Image upload completed");
                LambdaResponse::json(200, &success)
            }
            Err(err) if err.is_client_error() => {
                warn!(error = %err, "Rejected upload request");
                err.into_response()
            }
            Err(err) => {
                error!(error = %err, "Image upload failed");
                err.into_response()
            }
        }
    }

    pub async fn process(&self, event: UploadEvent) -> Result<UploadSuccess> {
        let raw_body = require_body(&event)?;
        let parsed_body = parse_body(raw_body);
        let identity = resolve_identity(&parsed_body, &event)?;
        let captured = CaptureTime::from_utc(self.clock.now_utc());
        let image = resolve_image(event.is_base64_encoded(), raw_body, &parsed_body)?;

        let key = StorageKey::new(&identity, &captured);
        info!(
            user_id = %identity.user_id,
            device_id = %identity.device_id,
            key = %key,
            size = image.len(),
            "Storing uploaded image"
        );

        let file_url = self
            .store
            .put_image(ImageUpload {
                key: key.to_string(),
                bytes: image,
                content_type: IMAGE_CONTENT_TYPE.to_string(),
            })
            .await?;

        self.notify(&identity, &file_url).await;

        Ok(UploadSuccess::new(identity, captured, file_url))
    }

    async fn notify(&self, identity: &UploaderIdentity, file_url: &str) {
        let topic = upload_topic(&self.topic_prefix, identity);
        let message = UploadNotification {
            user_id: identity.user_id.clone(),
            device_id: identity.device_id.clone(),
            file_url: file_url.to_string(),
        };

        if let Err(e) = self.notifier.publish(&topic, &message).await {
            error!(topic = %topic, error = %e, "Error publishing to IoT topic");
        }
    }
}

/// Body must be present and non-empty (`null`, `""`, `{}`, `[]`, `false`
/// and `0` all count as missing)
fn require_body(event: &UploadEvent) -> Result<&Value> {
    event
        .body
        .as_ref()
        .filter(|body| is_truthy(body))
        .ok_or(UploadError::MissingBody)
}

/// Text bodies holding JSON are decoded; anything else is kept as is
fn parse_body(raw: &Value) -> Value {
    match raw {
        Value::String(text) => {
            serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.clone()))
        }
        other => other.clone(),
    }
}

/// Body fields win over query parameters; blank values fall through
fn resolve_identity(body: &Value, event: &UploadEvent) -> Result<UploaderIdentity> {
    let lookup = |name: &str| {
        body.as_object()
            .and_then(|fields| fields.get(name))
            .and_then(field_text)
            .or_else(|| event.query_param(name))
    };

    match (lookup("userId"), lookup("deviceId")) {
        (Some(user_id), Some(device_id)) => Ok(UploaderIdentity { user_id, device_id }),
        _ => Err(UploadError::MissingIdentity),
    }
}
