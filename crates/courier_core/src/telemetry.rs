//! Tracing subscriber and OpenTelemetry span export.

use crate::TelemetryConfig;
use courier_error::{ConfigError, CourierResult};
use opentelemetry::KeyValue;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::{
    Resource,
    trace::{RandomIdGenerator, Sampler, TracerProvider},
};
use opentelemetry_stdout::SpanExporter;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global tracing subscriber described by `config`.
///
/// Log filtering uses `config.filter` when set, otherwise `RUST_LOG`. Spans
/// are exported to stdout under the configured service name when
/// `export_spans` is on.
///
/// # Errors
///
/// Returns an error if the filter does not parse or a global subscriber is
/// already installed.
pub fn init_telemetry(config: &TelemetryConfig) -> CourierResult<()> {
    let filter = match config.filter() {
        Some(directives) => EnvFilter::try_new(directives).map_err(|e| {
            ConfigError::in_section(
                "telemetry",
                format!("Invalid log filter '{}': {}", directives, e),
            )
        })?,
        None => EnvFilter::from_default_env(),
    };

    let fmt_layer = if *config.json_logs() {
        tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_level(true)
            .boxed()
    };

    let telemetry_layer = if *config.export_spans() {
        let provider = TracerProvider::builder()
            .with_simple_exporter(SpanExporter::default())
            .with_id_generator(RandomIdGenerator::default())
            .with_sampler(Sampler::AlwaysOn)
            .with_resource(Resource::new(vec![KeyValue::new(
                "service.name",
                config.service_name().clone(),
            )]))
            .build();
        let tracer = provider.tracer(config.service_name().clone());
        opentelemetry::global::set_tracer_provider(provider);
        Some(tracing_opentelemetry::layer().with_tracer(tracer))
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .with(telemetry_layer)
        .try_init()
        .map_err(|e| ConfigError::new(format!("Failed to install tracing subscriber: {}", e)))?;

    tracing::debug!(service = %config.service_name(), "Telemetry initialized");
    Ok(())
}

/// Flushes pending spans and shuts the global tracer provider down.
pub fn shutdown_telemetry() {
    opentelemetry::global::shutdown_tracer_provider();
}
