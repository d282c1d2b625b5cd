//! Tracing subscriber setup.
//!
//! JSON lines without timestamps for CloudWatch (which stamps each line),
//! human readable output for local runs. Level filter comes from `RUST_LOG`,
//! defaulting to `info`.

use crate::config::LogFormat;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init_tracing(format: LogFormat) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(env_filter);

    match format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_target(false)
                    .without_time(),
            )
            .init(),
        LogFormat::Pretty => registry.with(fmt::layer()).init(),
    }
}
