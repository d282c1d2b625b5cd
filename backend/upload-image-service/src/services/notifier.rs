/// Upload notifications over the AWS IoT Core data plane (MQTT)
use crate::config::IotConfig;
use crate::error::NotifyError;
use crate::models::{UploadNotification, UploaderIdentity};
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_iotdataplane::error::DisplayErrorContext;
use aws_sdk_iotdataplane::primitives::Blob;
use aws_sdk_iotdataplane::Client as IotDataClient;

/// MQTT QoS 1
pub const AT_LEAST_ONCE: i32 = 1;

/// `{prefix}/{userId}/{deviceId}`
pub fn upload_topic(prefix: &str, identity: &UploaderIdentity) -> String {
    format!("{}/{}/{}", prefix, identity.user_id, identity.device_id)
}

#[async_trait]
pub trait UploadNotifier: Send + Sync {
    async fn publish(&self, topic: &str, message: &UploadNotification) -> Result<(), NotifyError>;
}

#[derive(Clone)]
pub struct IotNotifier {
    client: IotDataClient,
}

impl IotNotifier {
    pub fn new(sdk_config: &SdkConfig, config: &IotConfig) -> Self {
        let mut builder = aws_sdk_iotdataplane::config::Builder::from(sdk_config);
        if let Some(endpoint) = &config.endpoint {
            builder = builder.endpoint_url(endpoint);
        }

        Self {
            client: IotDataClient::from_conf(builder.build()),
        }
    }
}

#[async_trait]
impl UploadNotifier for IotNotifier {
    async fn publish(&self, topic: &str, message: &UploadNotification) -> Result<(), NotifyError> {
        let payload = serde_json::to_vec(message).map_err(|e| NotifyError::Encode(e.to_string()))?;

        self.client
            .publish()
            .topic(topic)
            .qos(AT_LEAST_ONCE)
            .payload(Blob::new(payload))
            .send()
            .await
            .map_err(|e| NotifyError::Publish {
                topic: topic.to_string(),
                reason: DisplayErrorContext(&e).to_string(),
            })?;

        tracing::debug!(topic = %topic, "Upload notification published");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_topic() {
        let identity = UploaderIdentity {
            user_id: "u1".to_string(),
            device_id: "d1".to_string(),
        };
        assert_eq!(upload_topic("uploadImage-lambda", &identity), "uploadImage-lambda/u1/d1");
    }

    #[test]
    fn test_notification_payload_shape() {
        let message = UploadNotification {
            user_id: "u1".to_string(),
            device_id: "d1".to_string(),
            file_url: "https://smart-door-system.s3.amazonaws.com/history/u1/d1/x.jpg".to_string(),
        };

        let payload: serde_json::Value = serde_json::from_slice(&serde_json::to_vec(&message).unwrap()).unwrap();
        assert_eq!(payload["userId"], "u1");
        assert_eq!(payload["deviceId"], "d1");
        assert_eq!(
            payload["fileUrl"],
            "https://smart-door-system.s3.amazonaws.com/history/u1/d1/x.jpg"
        );
    }
}
