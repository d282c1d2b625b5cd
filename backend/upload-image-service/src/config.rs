/// Configuration management for upload-image-service
///
/// Loads configuration from environment variables with sensible defaults.
/// The bucket falls back to the compiled-in `DEFAULT_BUCKET`.
use serde::Deserialize;

/// Bucket the smart door devices upload their captures to
pub const DEFAULT_BUCKET: &str = "smart-door-system";
pub const DEFAULT_REGION: &str = "ap-southeast-1";
pub const DEFAULT_TOPIC_PREFIX: &str = "uploadImage-lambda";

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    pub storage: StorageConfig,
    pub iot: IotConfig,
    pub log: LogConfig,
}

#[derive(Clone, Debug, Deserialize)]
pub struct StorageConfig {
    pub bucket: String,
    pub region: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct IotConfig {
    /// Account specific data endpoint, e.g. `https://xxxx-ats.iot.ap-southeast-1.amazonaws.com`
    pub endpoint: Option<String>,
    pub topic_prefix: String,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Pretty,
}

#[derive(Clone, Debug, Deserialize)]
pub struct LogConfig {
    pub format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            storage: StorageConfig {
                bucket: DEFAULT_BUCKET.to_string(),
                region: DEFAULT_REGION.to_string(),
            },
            iot: IotConfig {
                endpoint: None,
                topic_prefix: DEFAULT_TOPIC_PREFIX.to_string(),
            },
            log: LogConfig {
                format: LogFormat::Json,
            },
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        Config {
            storage: StorageConfig {
                bucket: non_empty("UPLOAD_BUCKET").unwrap_or_else(|| DEFAULT_BUCKET.to_string()),
                region: non_empty("AWS_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string()),
            },
            iot: IotConfig {
                endpoint: non_empty("IOT_DATA_ENDPOINT"),
                topic_prefix: non_empty("UPLOAD_TOPIC_PREFIX")
                    .map(|p| p.trim_end_matches('/').to_string())
                    .unwrap_or_else(|| DEFAULT_TOPIC_PREFIX.to_string()),
            },
            log: LogConfig {
                format: match non_empty("LOG_FORMAT").as_deref() {
                    Some("pretty") | Some("text") => LogFormat::Pretty,
                    _ => LogFormat::Json,
                },
            },
        }
    }
}
