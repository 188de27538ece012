//! Tracing initialization and subscriber setup.

use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::exporter;
use crate::infrastructure::paths;
use crate::Config;

/// Name of the trace file inside the data directory.
pub const TRACE_FILE: &str = "ceyland-otlp.json";

/// Installs the global subscriber: an `EnvFilter` at the configured level
/// (`info` by default) feeding the file exporter.
///
/// Does nothing if the data directory cannot be created or a subscriber is
/// already installed.
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.clone().unwrap_or_else(|| "info".to_string());

    let data_dir = paths::data_dir(config.data_dir.as_deref());
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![
        KeyValue::new("service.name", "ceyland"),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);

    let provider = exporter::create_tracer_provider(data_dir.join(TRACE_FILE), resource);
    let tracer = provider.tracer("ceyland");

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(OpenTelemetryLayer::new(tracer));

    let _ = subscriber.try_init();
}
