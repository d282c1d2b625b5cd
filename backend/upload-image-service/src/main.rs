use aws_config::{BehaviorVersion, Region};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use s3_utils::{S3Client, S3Config};
use std::sync::Arc;
use tracing::{info, Instrument};
use upload_image_service::capture_time::SystemClock;
use upload_image_service::models::{LambdaResponse, UploadEvent};
use upload_image_service::services::{IotNotifier, S3ImageStore};
use upload_image_service::{telemetry, Config, UploadHandler};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Config::from_env();
    telemetry::init_tracing(config.log.format);

    info!(
        bucket = %config.storage.bucket,
        region = %config.storage.region,
        topic_prefix = %config.iot.topic_prefix,
        "Starting upload-image-lambda"
    );

    // Clients are built once per execution environment and reused across invocations
    let sdk_config = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(config.storage.region.clone()))
        .load()
        .await;

    let s3 = S3Client::from_sdk_config(
        &sdk_config,
        S3Config::new(config.storage.bucket.clone()),
    );
    let store = S3ImageStore::new(s3.operations());
    let notifier = IotNotifier::new(&sdk_config, &config.iot);

    let handler = UploadHandler::new(
        Arc::new(store),
        Arc::new(notifier),
        Arc::new(SystemClock),
        config.iot.topic_prefix.clone(),
    );
    let handler = &handler;

    run(service_fn(move |event: LambdaEvent<UploadEvent>| async move {
        let span = tracing::info_span!("upload_image", request_id = %event.context.request_id);
        let response: LambdaResponse = handler.handle(event.payload).instrument(span).await;
        Ok::<_, Error>(response)
    }))
    .await
}
