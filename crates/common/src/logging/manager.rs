//! Logging initialization.

use std::iter;

use tracing::{Level, info};
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::{
    EnvFilter, Layer, Registry,
    fmt::layer,
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
};

use super::types::LoggerConfig;

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Defaults to INFO, overridable through `RUST_LOG`.
fn env_filter() -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .from_env_lossy()
}

/// Builds the stdout layer and, if configured, the file layer.
pub(super) fn build_layers(config: &LoggerConfig) -> Vec<BoxedLayer> {
    let stdout = &config.stdout_config;
    let stdout_layer = if stdout.json_format {
        layer()
            .json()
            .with_span_events(stdout.fmt_span.clone())
            .with_filter(env_filter())
            .boxed()
    } else {
        layer()
            .compact()
            .with_span_events(stdout.fmt_span.clone())
            .with_filter(env_filter())
            .boxed()
    };

    let file_layer = config.file_logging_config.as_ref().map(|file_config| {
        let file_appender = RollingFileAppender::new(
            file_config.rotation.clone(),
            &file_config.directory,
            &file_config.file_name_prefix,
        );

        if file_config.json_format {
            layer()
                .json()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_filter(env_filter())
                .boxed()
        } else {
            layer()
                .compact()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_filter(env_filter())
                .boxed()
        }
    });

    iter::once(stdout_layer).chain(file_layer).collect()
}

/// Initializes the global subscriber with the provided config.
///
/// Fails if a global subscriber was already installed.
pub fn init(config: LoggerConfig) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(build_layers(&config))
        .try_init()?;

    info!(service_name = %config.service_name, "logging initialized");
    Ok(())
}
