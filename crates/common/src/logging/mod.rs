//! Logging subsystem.

mod manager;
mod service;
mod types;

#[cfg(test)]
mod tests;

pub use manager::init;
pub use service::{LoggingInitConfig, init_logging_from_config};
// Re-export tracing-appender types for convenience
pub use tracing_appender::rolling::Rotation;
pub use types::{FileLoggingConfig, LoggerConfig, StdoutConfig};

/// Formats a service name with an optional label suffix.
pub fn format_service_name(base: &str, label: Option<&str>) -> String {
    match label {
        Some(label) => format!("{base}%{label}"),
        None => base.to_owned(),
    }
}
