//! Upload Image Service
//!
//! Lambda function behind the smart door camera upload endpoint. Stores each
//! capture in S3 under `history/{userId}/{deviceId}/{date}/{timestamp}.jpg`
//! and announces it on the device's IoT topic.

pub mod capture_time;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod telemetry;

// Public re-exports
pub use config::Config;
pub use error::{Result, UploadError};
pub use handlers::UploadHandler;
